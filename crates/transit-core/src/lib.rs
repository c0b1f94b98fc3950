//! Core types for Transit sequence diagrams.
//!
//! This crate holds everything the parser, layout engine and renderers share:
//!
//! - [`model`] - actors, signals, notes, blocks and the [`model::Diagram`]
//!   container.
//! - [`builder`] - [`builder::DiagramBuilder`], the only way to assemble a
//!   diagram.
//! - [`geometry`] - points, sizes, bounds and insets.
//! - [`text`] - fonts and the [`text::TextMetrics`] measuring seam.
//! - [`color`] - CSS colors for styles.
//! - [`error`] - model and builder errors.

pub mod builder;
pub mod color;
pub mod error;
pub mod geometry;
pub mod model;
pub mod text;
