//! Miette reports for [`TransitError`].
//!
//! A parse failure carries one diagnostic per bad line and becomes one
//! report each, with the offending source lines attached. Every other error
//! becomes a single report without a snippet.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use transit::TransitError;
use transit_parser::error::{Diagnostic, Severity};

/// A single renderable report.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parser diagnostic and the source it points into.
    Diagnostic { diag: &'a Diagnostic, src: &'a str },
    /// Any error without a source location.
    Error(&'a TransitError),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic { diag, .. } => f.write_str(diag.message()),
            Reportable::Error(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic { .. } => None,
            Reportable::Error(err) => err.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code: &'static str = match self {
            Reportable::Diagnostic { diag, .. } => diag.code()?.as_str(),
            Reportable::Error(TransitError::Io(_)) => "transit::io",
            Reportable::Error(TransitError::Parse { .. }) => return None,
            Reportable::Error(TransitError::Layout(_)) => "transit::layout",
            Reportable::Error(TransitError::Config(_)) => "transit::config",
        };
        Some(Box::new(code))
    }

    fn severity(&self) -> Option<miette::Severity> {
        let Reportable::Diagnostic { diag, .. } = self else {
            return Some(miette::Severity::Error);
        };
        Some(match diag.severity() {
            Severity::Error => miette::Severity::Error,
            Severity::Warning => miette::Severity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self {
            Reportable::Diagnostic { diag, .. } => diag.help()?,
            Reportable::Error(TransitError::Config(_)) => {
                "check the TOML file passed with --config"
            }
            Reportable::Error(TransitError::Layout(_)) => {
                "the configured font may be missing from the system"
            }
            Reportable::Error(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic { src, .. } => Some(src as &dyn miette::SourceCode),
            Reportable::Error(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let Reportable::Diagnostic { diag, .. } = self else {
            return None;
        };
        if diag.labels().is_empty() {
            return None;
        }

        Some(Box::new(diag.labels().iter().map(|label| {
            let span = SourceSpan::new(label.span().start().into(), label.span().len());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Splits an error into the reports to print, one per parser diagnostic.
pub fn to_reportables(err: &TransitError) -> Vec<Reportable<'_>> {
    match err {
        TransitError::Parse { err: parse_err, src } => parse_err
            .diagnostics()
            .iter()
            .map(|diag| Reportable::Diagnostic { diag, src })
            .collect(),
        _ => vec![Reportable::Error(err)],
    }
}
