//! Line grammar for the Transit text format.
//!
//! Each non-blank line that does not start with `#` holds exactly one
//! statement:
//!
//! ```text
//! title: <text>
//! participant <actor-ref>
//! note left of|right of <actor>: <text>
//! note over <actor>[, <actor>]: <text>
//! <actor> -> | --> | ->> | -->> <actor>: <text>
//! alt|opt|loop|par|critical|break|group [title]
//! else [label]
//! end
//! ```
//!
//! Keywords are case-insensitive. The grammar only recognizes shapes; a
//! missing message is reported later so the diagnostic can say what is
//! missing instead of rejecting the whole line.

use std::ops::Range;

use winnow::{
    Parser,
    ascii::{Caseless, space0, space1},
    combinator::{alt, eof, opt, peek, preceded, separated, terminated},
    error::{ContextError, ErrMode, ModalResult},
    stream::LocatingSlice,
    token::{literal, rest, take_while},
};

use transit_core::model::Placement;

use crate::{
    error::{Diagnostic, ErrorCode},
    span::{Span, Spanned},
};

type Input<'a> = LocatingSlice<&'a str>;

/// Keywords that open a block.
const BLOCK_KEYWORDS: [&str; 7] = ["alt", "opt", "loop", "par", "critical", "break", "group"];

/// Packed signal type codes, `line | (arrow << 2)`.
///
/// Lines: 0 solid, 1 dotted. Arrows: 0 filled, 1 open.
const SOLID_FILLED: u8 = 0;
const DOTTED_FILLED: u8 = 1;
const SOLID_OPEN: u8 = 1 << 2;
const DOTTED_OPEN: u8 = 1 | (1 << 2);

/// One parsed line.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Statement<'a> {
    Title(Option<&'a str>),
    Participant(Spanned<&'a str>),
    Note {
        placement: Placement,
        actors: Vec<Spanned<&'a str>>,
        message: Option<&'a str>,
    },
    Signal {
        from: Spanned<&'a str>,
        to: Spanned<&'a str>,
        /// Packed line and arrow type, see [`Signal::from_code`](transit_core::model::Signal::from_code).
        signal_type: u8,
        message: Option<&'a str>,
    },
    BlockStart {
        keyword: &'a str,
        title: Option<&'a str>,
    },
    Else(Option<&'a str>),
    End,
}

impl Statement<'_> {
    fn shift(self, offset: usize) -> Self {
        match self {
            Statement::Participant(actor) => Statement::Participant(actor.shift(offset)),
            Statement::Note {
                placement,
                actors,
                message,
            } => Statement::Note {
                placement,
                actors: actors.into_iter().map(|a| a.shift(offset)).collect(),
                message,
            },
            Statement::Signal {
                from,
                to,
                signal_type,
                message,
            } => Statement::Signal {
                from: from.shift(offset),
                to: to.shift(offset),
                signal_type,
                message,
            },
            other => other,
        }
    }
}

/// Parses the line starting at byte `offset` of the source.
///
/// Returns `Ok(None)` for blank lines and comments. Spans in the result
/// are absolute offsets into the source.
pub(crate) fn parse_line(
    line: &str,
    offset: usize,
) -> Result<Option<Spanned<Statement<'_>>>, Diagnostic> {
    let text = line.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let start = offset + (line.len() - line.trim_start().len());
    let span = Span::new(start..start + text.len());

    statement
        .parse(LocatingSlice::new(text))
        .map(|statement| Some(Spanned::new(statement.shift(start), span)))
        .map_err(|_| {
            Diagnostic::error(format!("unrecognized statement `{text}`"))
                .with_code(ErrorCode::E100)
                .with_label(span, "expected a signal, note, participant, title or block")
                .with_help("signals look like `A -> B: message`, notes like `note over A: text`")
        })
}

fn statement<'a>(input: &mut Input<'a>) -> ModalResult<Statement<'a>> {
    alt((signal, title, participant, note, block_start, else_branch, end)).parse_next(input)
}

/// A keyword followed by whitespace or the end of the line.
fn keyword<'a>(word: &'static str) -> impl Parser<Input<'a>, &'a str, ErrMode<ContextError>> {
    terminated(
        literal(Caseless(word)),
        peek(alt((space1.void(), eof.void()))),
    )
}

fn trimmed(text: &str, range: Range<usize>) -> Option<Spanned<&str>> {
    let value = text.trim();
    if value.is_empty() {
        return None;
    }
    let start = range.start + (text.len() - text.trim_start().len());
    Some(Spanned::new(value, Span::new(start..start + value.len())))
}

fn non_empty(text: &str) -> Option<&str> {
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

fn actor<'a>(input: &mut Input<'a>) -> ModalResult<Spanned<&'a str>> {
    take_while(1.., |c: char| !matches!(c, '-' | '>' | ':' | ','))
        .with_span()
        .verify_map(|(text, range)| trimmed(text, range))
        .parse_next(input)
}

fn message<'a>(input: &mut Input<'a>) -> ModalResult<Option<&'a str>> {
    opt(preceded(':', rest))
        .map(|text: Option<&'a str>| text.and_then(non_empty))
        .parse_next(input)
}

fn arrow(input: &mut Input<'_>) -> ModalResult<u8> {
    alt((
        "-->>".value(DOTTED_OPEN),
        "-->".value(DOTTED_FILLED),
        "->>".value(SOLID_OPEN),
        "->".value(SOLID_FILLED),
    ))
    .parse_next(input)
}

fn signal<'a>(input: &mut Input<'a>) -> ModalResult<Statement<'a>> {
    (actor, arrow, actor, message)
        .map(|(from, signal_type, to, message)| Statement::Signal {
            from,
            to,
            signal_type,
            message,
        })
        .parse_next(input)
}

fn title<'a>(input: &mut Input<'a>) -> ModalResult<Statement<'a>> {
    preceded((literal(Caseless("title")), space0, ':'), rest)
        .map(|text: &'a str| Statement::Title(non_empty(text)))
        .parse_next(input)
}

fn participant<'a>(input: &mut Input<'a>) -> ModalResult<Statement<'a>> {
    preceded(
        (keyword("participant"), space1),
        rest.with_span()
            .verify_map(|(text, range)| trimmed(text, range)),
    )
    .map(Statement::Participant)
    .parse_next(input)
}

fn placement(input: &mut Input<'_>) -> ModalResult<Placement> {
    alt((
        (literal(Caseless("left")), space1, literal(Caseless("of"))).value(Placement::LeftOf),
        (literal(Caseless("right")), space1, literal(Caseless("of"))).value(Placement::RightOf),
        literal(Caseless("over")).value(Placement::Over),
    ))
    .parse_next(input)
}

fn note<'a>(input: &mut Input<'a>) -> ModalResult<Statement<'a>> {
    (keyword("note"), space1).parse_next(input)?;
    let placement = terminated(placement, space1).parse_next(input)?;
    let actors: Vec<Spanned<&'a str>> = match placement {
        Placement::Over => separated(1..=2, actor, ',').parse_next(input)?,
        Placement::LeftOf | Placement::RightOf => actor.map(|a| vec![a]).parse_next(input)?,
    };
    let message = message.parse_next(input)?;

    Ok(Statement::Note {
        placement,
        actors,
        message,
    })
}

fn block_start<'a>(input: &mut Input<'a>) -> ModalResult<Statement<'a>> {
    let keyword = alt((
        keyword(BLOCK_KEYWORDS[0]),
        keyword(BLOCK_KEYWORDS[1]),
        keyword(BLOCK_KEYWORDS[2]),
        keyword(BLOCK_KEYWORDS[3]),
        keyword(BLOCK_KEYWORDS[4]),
        keyword(BLOCK_KEYWORDS[5]),
        keyword(BLOCK_KEYWORDS[6]),
    ))
    .parse_next(input)?;
    let title = rest.parse_next(input)?;

    Ok(Statement::BlockStart {
        keyword,
        title: non_empty(title),
    })
}

fn else_branch<'a>(input: &mut Input<'a>) -> ModalResult<Statement<'a>> {
    preceded(keyword("else"), rest)
        .map(|label: &'a str| Statement::Else(non_empty(label)))
        .parse_next(input)
}

fn end<'a>(input: &mut Input<'a>) -> ModalResult<Statement<'a>> {
    keyword("end").map(|_| Statement::End).parse_next(input)
}
