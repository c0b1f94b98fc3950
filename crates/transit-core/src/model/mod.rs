//! The sequence diagram object model.
//!
//! A [`Diagram`] owns its actors (insertion ordered, unique by alias), a flat
//! arena of [`Element`]s (signals and notes in emission order), and an arena
//! of [`Block`]s. Blocks hold [`Partition`]s whose children are ids into
//! those arenas, so every statement exists once and is reachable both from
//! the flat list and from its place in the block tree.
//!
//! Diagrams are assembled with [`DiagramBuilder`](crate::builder::DiagramBuilder).

mod actor;
mod block;
mod diagram;
mod note;
mod signal;

pub use actor::{Actor, ActorId};
pub use block::{Block, Child, Partition};
pub use diagram::{BlockId, Diagram, Element, ElementId};
pub use note::{Note, NoteTarget, Placement};
pub use signal::{ArrowType, LineType, Signal};
