//! Annotations attached to one or two actors.

use std::fmt;

use crate::{
    error::ModelError,
    geometry::{Bounds, Size},
    model::ActorId,
};

/// Where a note sits relative to its actor(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    LeftOf,
    RightOf,
    Over,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LeftOf => write!(f, "left of"),
            Self::RightOf => write!(f, "right of"),
            Self::Over => write!(f, "over"),
        }
    }
}

/// The actor(s) a note is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteTarget {
    One(ActorId),
    /// A note spanning two distinct actors, in the order written.
    Two(ActorId, ActorId),
}

impl NoteTarget {
    /// Returns the first actor named by the target.
    pub fn first(&self) -> ActorId {
        match self {
            Self::One(actor) | Self::Two(actor, _) => *actor,
        }
    }

    /// Returns the leftmost and rightmost actor indices covered.
    pub fn index_range(&self) -> (usize, usize) {
        match self {
            Self::One(actor) => (actor.index(), actor.index()),
            Self::Two(a, b) => (a.index().min(b.index()), a.index().max(b.index())),
        }
    }
}

/// A text box placed beside or over actors.
#[derive(Debug, Clone)]
pub struct Note {
    target: NoteTarget,
    placement: Placement,
    message: String,
    text_size: Size,
    bounds: Bounds,
}

impl Note {
    /// Creates a note.
    ///
    /// # Errors
    ///
    /// - [`ModelError::NoteOverSameActor`] when a two-actor target names the
    ///   same actor twice.
    /// - [`ModelError::MultiActorPlacement`] when a two-actor target is used
    ///   with a placement other than [`Placement::Over`].
    pub fn new(
        target: NoteTarget,
        placement: Placement,
        message: impl Into<String>,
    ) -> Result<Self, ModelError> {
        if let NoteTarget::Two(a, b) = target {
            if a == b {
                return Err(ModelError::NoteOverSameActor);
            }
            if placement != Placement::Over {
                return Err(ModelError::MultiActorPlacement(placement));
            }
        }

        Ok(Self {
            target,
            placement,
            message: message.into(),
            text_size: Size::default(),
            bounds: Bounds::default(),
        })
    }

    pub fn target(&self) -> NoteTarget {
        self.target
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true when the note spans two actors.
    pub fn has_many_actors(&self) -> bool {
        matches!(self.target, NoteTarget::Two(..))
    }

    pub fn text_size(&self) -> Size {
        self.text_size
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn set_text_size(&mut self, size: Size) {
        self.text_size = size;
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_over_same_actor_is_rejected() {
        let a = ActorId::new(0);
        let err = Note::new(NoteTarget::Two(a, a), Placement::Over, "x").unwrap_err();
        assert_eq!(err, ModelError::NoteOverSameActor);
        assert_eq!(err.to_string(), "note should be over two different actors");
    }

    #[test]
    fn test_two_actor_note_requires_over() {
        let target = NoteTarget::Two(ActorId::new(0), ActorId::new(1));
        assert_eq!(
            Note::new(target, Placement::LeftOf, "x").unwrap_err(),
            ModelError::MultiActorPlacement(Placement::LeftOf)
        );
        assert!(Note::new(target, Placement::Over, "x").unwrap().has_many_actors());
    }

    #[test]
    fn test_index_range_is_ordered() {
        let target = NoteTarget::Two(ActorId::new(3), ActorId::new(1));
        assert_eq!(target.index_range(), (1, 3));
        assert_eq!(target.first(), ActorId::new(3));
    }
}
