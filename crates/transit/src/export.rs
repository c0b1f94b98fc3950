//! Output backends for laid-out diagrams.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parse
//! Diagram
//!     ↓ layout
//! Diagram with geometry
//!     ↓ render onto a Canvas (this module provides the canvases)
//! Output File
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgCanvas`]

/// SVG export backend.
pub mod svg;
