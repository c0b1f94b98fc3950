//! # Transit Parser
//!
//! Parser for the Transit sequence diagram text format. Each line holds one
//! statement; the parser turns the lines into calls on a
//! [`DiagramBuilder`](transit_core::builder::DiagramBuilder) and returns the
//! resulting [`Diagram`].
//!
//! Parsing does not stop at the first problem. Every bad line is reported
//! as a [`Diagnostic`](error::Diagnostic) in the returned [`ParseError`].
//!
//! ## Usage
//!
//! ```
//! # use transit_parser::{parse, error::ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let source = "
//!         title: Greeting
//!         Alice -> Bob: hello
//!         Bob --> Alice: hi
//!     ";
//!
//!     let diagram = parse(source)?;
//!     assert_eq!(diagram.actor_count(), 2);
//!     Ok(())
//! }
//! ```

mod elaborate;
pub mod error;
mod parser;
mod span;

pub use span::Span;

use log::info;

use transit_core::model::Diagram;

use elaborate::Elaborator;
use error::ParseError;

/// Parses source text into a [`Diagram`].
///
/// # Errors
///
/// Returns a [`ParseError`] holding every diagnostic found when any line
/// is malformed or the block structure is unbalanced.
pub fn parse(source: &str) -> Result<Diagram, ParseError> {
    let mut elaborator = Elaborator::new();

    for (offset, line) in lines_with_offsets(source) {
        match parser::parse_line(line, offset) {
            Ok(Some(statement)) => elaborator.apply(statement),
            Ok(None) => {}
            Err(diagnostic) => elaborator.emit(diagnostic),
        }
    }

    let diagram = elaborator.finish(source.len())?;
    info!(
        actors = diagram.actor_count(),
        elements = diagram.elements().len(),
        blocks = diagram.block_count();
        "Parsed diagram"
    );
    Ok(diagram)
}

/// Yields each line with the byte offset where it starts.
fn lines_with_offsets(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source.split_inclusive('\n').scan(0, |offset, line| {
        let start = *offset;
        *offset += line.len();
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some((start, line))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_with_offsets() {
        let lines: Vec<_> = lines_with_offsets("a\r\nbc\n\nd").collect();
        assert_eq!(lines, vec![(0, "a"), (3, "bc"), (6, ""), (7, "d")]);
    }

    #[test]
    fn test_empty_source() {
        let diagram = parse("").unwrap();
        assert_eq!(diagram.actor_count(), 0);
        assert!(diagram.elements().is_empty());
    }
}
