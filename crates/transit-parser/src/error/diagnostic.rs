//! A single parser error or warning.

use std::fmt;

use crate::{
    error::{ErrorCode, Label, Severity},
    span::Span,
};

/// An error or warning tied to locations in the source.
///
/// ```text
/// error[E101]: signal has no message
///   |
/// 4 | Alice -> Bob
///   | ^^^^^^^^^^^^ expected `: <message>`
///   |
///   = help: write the message after a colon, e.g. `Alice -> Bob: hello`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Creates an error diagnostic.
    ///
    /// ```
    /// # use transit_parser::error::{Diagnostic, ErrorCode};
    /// # use transit_parser::Span;
    /// let diag = Diagnostic::error("unrecognized statement")
    ///     .with_code(ErrorCode::E100)
    ///     .with_label(Span::new(0..7), "here");
    /// assert!(diag.severity().is_error());
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Creates a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Adds a primary label.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Adds a secondary label.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{code}]")?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_code() {
        let diag = Diagnostic::error("signal has no message").with_code(ErrorCode::E101);
        assert_eq!(diag.to_string(), "error[E101]: signal has no message");
    }

    #[test]
    fn test_display_without_code() {
        let diag = Diagnostic::warning("actor renamed");
        assert_eq!(diag.to_string(), "warning: actor renamed");
    }

    #[test]
    fn test_builder_chain() {
        let diag = Diagnostic::error("block `alt` is never closed")
            .with_code(ErrorCode::E203)
            .with_label(Span::new(30..30), "input ends here")
            .with_secondary_label(Span::new(0..3), "opened here")
            .with_help("add `end`");

        assert_eq!(diag.code(), Some(ErrorCode::E203));
        assert_eq!(diag.labels().len(), 2);
        assert!(diag.labels()[0].is_primary());
        assert!(!diag.labels()[1].is_primary());
        assert_eq!(diag.help(), Some("add `end`"));
    }
}
