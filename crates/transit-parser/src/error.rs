//! Error and diagnostic system for the Transit parser.
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning with an optional error code, labeled source
//! spans, and help text. Every diagnostic raised while parsing one source is
//! returned together in a [`ParseError`].
//!
//! # Example
//!
//! ```
//! # use transit_parser::error::{Diagnostic, ErrorCode};
//! # use transit_parser::Span;
//!
//! let diag = Diagnostic::error("`end` without an open block")
//!     .with_code(ErrorCode::E202)
//!     .with_label(Span::new(40..43), "nothing to close")
//!     .with_help("remove this line or add a block such as `alt` before it");
//! assert_eq!(diag.to_string(), "error[E202]: `end` without an open block");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
