//! The error returned when a source fails to parse.

use std::fmt;

use crate::error::Diagnostic;

/// Every diagnostic collected while parsing one source.
///
/// Parsing does not stop at the first bad line, so a single `ParseError`
/// may report several problems. It always holds at least one error.
#[derive(Debug, Clone)]
pub struct ParseError {
    diagnostics: Vec<Diagnostic>,
}

impl ParseError {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Returns the diagnostics in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{first}")?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(vec![diagnostic])
    }
}

impl From<Vec<Diagnostic>> for ParseError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self::new(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_display_single() {
        let err = ParseError::from(Diagnostic::error("no arrow").with_code(ErrorCode::E100));
        assert_eq!(err.to_string(), "error[E100]: no arrow");
    }

    #[test]
    fn test_display_counts_the_rest() {
        let err = ParseError::from(vec![
            Diagnostic::error("first"),
            Diagnostic::error("second"),
            Diagnostic::warning("third"),
        ]);
        assert_eq!(err.diagnostics().len(), 3);
        assert_eq!(err.to_string(), "error: first (+2 more)");
    }
}
