//! Error types for model construction.
//!
//! - [`ModelError`] - a value object (signal or note) was built with
//!   inconsistent fields.
//! - [`BuildError`] - the [`DiagramBuilder`](crate::builder::DiagramBuilder)
//!   contract was violated (unbalanced blocks, foreign actor ids).

use thiserror::Error;

use crate::model::Placement;

/// Errors raised when constructing signals and notes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("note should be over two different actors")]
    NoteOverSameActor,

    #[error("a note placed {0} must target exactly one actor")]
    MultiActorPlacement(Placement),

    #[error("unknown signal type code {0}")]
    UnknownSignalType(u8),
}

/// Errors raised by the diagram builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("no block is open")]
    NoOpenBlock,

    #[error("{count} block(s) left open")]
    UnclosedBlocks { count: usize },

    #[error("actor #{index} does not belong to this diagram")]
    UnknownActor { index: usize },
}
