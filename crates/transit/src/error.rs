//! Error types for Transit operations.
//!
//! [`TransitError`] wraps every failure that can occur between reading a
//! source file and writing its rendering.

use std::io;

use thiserror::Error;

use transit_parser::error::ParseError;

use crate::layout::LayoutError;

/// The main error type for Transit operations.
///
/// The `Parse` variant keeps the source text next to the diagnostics so
/// callers can print the offending lines.
#[derive(Debug, Error)]
pub enum TransitError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl TransitError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
