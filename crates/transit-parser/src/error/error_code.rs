//! Error codes for parser diagnostics.
//!
//! - `E1xx` - the text of a line could not be understood
//! - `E2xx` - the line parsed but does not fit the diagram built so far

use std::fmt;

/// Stable identifiers for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unrecognized statement.
    ///
    /// The line matches none of the statement forms.
    E100,

    /// Missing message.
    ///
    /// A title, signal or note has no text after its `:`.
    E101,

    /// Note over the same actor.
    ///
    /// `note over A, A` names one actor twice.
    E200,

    /// `else` outside a block.
    E201,

    /// `end` without an open block.
    E202,

    /// Unclosed block.
    ///
    /// The input ended while a block was still open.
    E203,
}

impl ErrorCode {
    /// Returns the code as written in diagnostics, e.g. `"E100"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
        }
    }

    /// Returns a short description of the code.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unrecognized statement",
            ErrorCode::E101 => "missing message",
            ErrorCode::E200 => "note over the same actor",
            ErrorCode::E201 => "else outside a block",
            ErrorCode::E202 => "end without a block",
            ErrorCode::E203 => "unclosed block",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E203.as_str(), "E203");
        assert_eq!(ErrorCode::E201.description(), "else outside a block");
    }
}
