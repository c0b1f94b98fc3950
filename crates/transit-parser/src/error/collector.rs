//! Accumulates diagnostics across the lines of a source.

use log::warn;

use crate::error::{Diagnostic, ParseError};

/// Collects diagnostics so one pass can report every bad line.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic. Warnings are logged right away.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        } else {
            warn!("{diagnostic}");
        }
        self.diagnostics.push(diagnostic);
    }

    /// Returns `Err` with every diagnostic if any error was emitted.
    pub fn finish(self) -> Result<(), ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, span::Span};

    #[test]
    fn test_empty_collector_is_ok() {
        assert!(DiagnosticCollector::new().finish().is_ok());
    }

    #[test]
    fn test_warnings_alone_are_ok() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(Diagnostic::warning("actor renamed"));
        assert!(collector.finish().is_ok());
    }

    #[test]
    fn test_errors_keep_every_diagnostic() {
        let mut collector = DiagnosticCollector::new();
        collector.emit(
            Diagnostic::error("`end` without an open block")
                .with_code(ErrorCode::E202)
                .with_label(Span::new(0..3), "nothing to close"),
        );
        collector.emit(Diagnostic::warning("actor renamed"));

        let err = collector.finish().unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].code(), Some(ErrorCode::E202));
    }
}
