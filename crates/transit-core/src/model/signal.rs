//! Messages exchanged between actors.

use std::fmt;

use crate::{
    error::ModelError,
    geometry::{Bounds, Size},
    model::ActorId,
};

/// Stroke style of a signal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineType {
    #[default]
    Solid,
    Dotted,
}

impl LineType {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Solid),
            1 => Some(Self::Dotted),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Solid => 0,
            Self::Dotted => 1,
        }
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid => write!(f, "solid"),
            Self::Dotted => write!(f, "dotted"),
        }
    }
}

/// Head style drawn at the receiving end of a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArrowType {
    #[default]
    Filled,
    Open,
}

impl ArrowType {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Filled),
            1 => Some(Self::Open),
            _ => None,
        }
    }

    fn code(self) -> u8 {
        match self {
            Self::Filled => 0,
            Self::Open => 1,
        }
    }
}

impl fmt::Display for ArrowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filled => write!(f, "filled"),
            Self::Open => write!(f, "open"),
        }
    }
}

/// A message from `actor_a` to `actor_b`.
///
/// When both ends are the same actor the signal is a self-signal, drawn as a
/// loop to the right of the lifeline.
#[derive(Debug, Clone)]
pub struct Signal {
    actor_a: ActorId,
    actor_b: ActorId,
    line_type: LineType,
    arrow_type: ArrowType,
    message: String,
    text_size: Size,
    bounds: Bounds,
}

impl Signal {
    pub fn new(
        actor_a: ActorId,
        actor_b: ActorId,
        line_type: LineType,
        arrow_type: ArrowType,
        message: impl Into<String>,
    ) -> Self {
        Self {
            actor_a,
            actor_b,
            line_type,
            arrow_type,
            message: message.into(),
            text_size: Size::default(),
            bounds: Bounds::default(),
        }
    }

    /// Creates a signal from a packed type code.
    ///
    /// The low two bits carry the line type and the next two the arrow type,
    /// so `code = line | (arrow << 2)`. Codes naming a type outside
    /// [`LineType`] or [`ArrowType`] are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownSignalType`] for an unassigned code.
    pub fn from_code(
        actor_a: ActorId,
        code: u8,
        actor_b: ActorId,
        message: impl Into<String>,
    ) -> Result<Self, ModelError> {
        let line_type =
            LineType::from_code(code & 3).ok_or(ModelError::UnknownSignalType(code))?;
        let arrow_type =
            ArrowType::from_code((code >> 2) & 3).ok_or(ModelError::UnknownSignalType(code))?;
        if code >> 4 != 0 {
            return Err(ModelError::UnknownSignalType(code));
        }
        Ok(Self::new(actor_a, actor_b, line_type, arrow_type, message))
    }

    /// Returns the packed type code, the inverse of [`Signal::from_code`].
    pub fn code(&self) -> u8 {
        self.line_type.code() | (self.arrow_type.code() << 2)
    }

    pub fn actor_a(&self) -> ActorId {
        self.actor_a
    }

    pub fn actor_b(&self) -> ActorId {
        self.actor_b
    }

    pub fn line_type(&self) -> LineType {
        self.line_type
    }

    pub fn arrow_type(&self) -> ArrowType {
        self.arrow_type
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns true when the signal starts and ends on the same actor.
    pub fn is_self(&self) -> bool {
        self.actor_a == self.actor_b
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

    fn ids() -> (ActorId, ActorId) {
        (ActorId::new(0), ActorId::new(1))
    }

    #[test]
    fn test_from_code_decodes_fields() {
        let (a, b) = ids();
        let signal = Signal::from_code(a, 1 | (1 << 2), b, "hi").unwrap();
        assert_eq!(signal.line_type(), LineType::Dotted);
        assert_eq!(signal.arrow_type(), ArrowType::Open);
        assert_eq!(signal.code(), 5);

        let signal = Signal::from_code(a, 0, b, "hi").unwrap();
        assert_eq!(signal.line_type(), LineType::Solid);
        assert_eq!(signal.arrow_type(), ArrowType::Filled);
    }

    #[test]
    fn test_from_code_rejects_unassigned_codes() {
        let (a, b) = ids();
        for code in [2, 3, 8, 12, 16] {
            assert_eq!(
                Signal::from_code(a, code, b, "x").unwrap_err(),
                ModelError::UnknownSignalType(code)
            );
        }
    }

    #[test]
    fn test_is_self() {
        let (a, b) = ids();
        assert!(Signal::new(a, a, LineType::Solid, ArrowType::Filled, "").is_self());
        assert!(!Signal::new(a, b, LineType::Solid, ArrowType::Filled, "").is_self());
    }
}
