//! Labeled source spans for diagnostics.

use crate::span::Span;

/// A message attached to a span of the source.
///
/// The primary label points at the offending statement. Secondary labels
/// point at related lines, such as the `alt` that opened a block which was
/// never closed.
///
/// ```text
/// error[E203]: block `loop` is never closed
///   |
/// 3 | loop every second
///   | ----------------- opened here
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}
