//! Turns parsed statements into builder calls.

use log::{debug, trace};

use transit_core::{
    builder::{DiagramBuilder, unescape},
    error::{BuildError, ModelError},
    model::{Diagram, Element, Note, NoteTarget, Signal},
};

use crate::{
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    parser::Statement,
    span::{Span, Spanned},
};

/// Feeds statements to a [`DiagramBuilder`], reporting misuse as diagnostics.
pub(crate) struct Elaborator {
    builder: DiagramBuilder,
    /// Spans of the statements that opened the currently open blocks.
    open_blocks: Vec<(String, Span)>,
    collector: DiagnosticCollector,
}

impl Elaborator {
    pub fn new() -> Self {
        Self {
            builder: DiagramBuilder::new(),
            open_blocks: Vec::new(),
            collector: DiagnosticCollector::new(),
        }
    }

    /// Reports a diagnostic raised before elaboration, such as a bad line.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.collector.emit(diagnostic);
    }

    pub fn apply(&mut self, statement: Spanned<Statement<'_>>) {
        let span = statement.span();
        trace!("Elaborating {:?}", statement.inner());

        match statement.inner() {
            Statement::Title(Some(text)) => self.builder.set_title(unescape(text)),
            Statement::Title(None) => self.missing_message("title", span),
            Statement::Participant(reference) => {
                self.builder.resolve_actor_reference(reference.inner());
            }
            Statement::Signal { message: None, .. } => self.missing_message("signal", span),
            Statement::Signal {
                from,
                to,
                signal_type,
                message: Some(message),
            } => {
                let a = self.builder.get_actor(&unescape(from.inner()), None);
                let b = self.builder.get_actor(&unescape(to.inner()), None);
                match Signal::from_code(a, *signal_type, b, unescape(message)) {
                    Ok(signal) => self.add(signal, span),
                    Err(err) => self
                        .collector
                        .emit(Diagnostic::error(err.to_string()).with_label(span, "invalid arrow")),
                }
            }
            Statement::Note { message: None, .. } => self.missing_message("note", span),
            Statement::Note {
                placement,
                actors,
                message: Some(message),
            } => {
                let ids: Vec<_> = actors
                    .iter()
                    .map(|actor| self.builder.get_actor(&unescape(actor.inner()), None))
                    .collect();
                let target = match ids.as_slice() {
                    [a, b] => NoteTarget::Two(*a, *b),
                    [a, ..] => NoteTarget::One(*a),
                    [] => return,
                };

                match Note::new(target, *placement, unescape(message)) {
                    Ok(note) => self.add(note, span),
                    Err(err) => self.note_error(err, actors, span),
                }
            }
            Statement::BlockStart { keyword, title } => {
                let keyword = keyword.to_lowercase();
                let title = title.map(unescape);
                self.builder.start_block(&keyword, title.as_deref());
                self.open_blocks.push((keyword, span));
            }
            Statement::Else(label) => {
                let label = label.map(unescape).unwrap_or_else(|| "else".to_string());
                if self.builder.mid_block(&label).is_err() {
                    self.collector.emit(
                        Diagnostic::error("`else` outside of a block")
                            .with_code(ErrorCode::E201)
                            .with_label(span, "no block is open here")
                            .with_help("`else` starts a new branch of an `alt`, `par` or similar block"),
                    );
                }
            }
            Statement::End => match self.builder.end_block() {
                Ok(_) => {
                    self.open_blocks.pop();
                }
                Err(_) => self.collector.emit(
                    Diagnostic::error("`end` without an open block")
                        .with_code(ErrorCode::E202)
                        .with_label(span, "nothing to close")
                        .with_help("remove this line or open a block such as `alt` before it"),
                ),
            },
        }
    }

    /// Reports unclosed blocks and returns the finished diagram.
    pub fn finish(mut self, source_len: usize) -> Result<Diagram, ParseError> {
        let end = Span::new(source_len..source_len);
        for (keyword, span) in std::mem::take(&mut self.open_blocks).into_iter().rev() {
            self.collector.emit(
                Diagnostic::error(format!("block `{keyword}` is never closed"))
                    .with_code(ErrorCode::E203)
                    .with_label(end, "input ends here")
                    .with_secondary_label(span, "opened here")
                    .with_help("add a matching `end` line"),
            );
        }

        self.collector.finish()?;
        let diagram = self
            .builder
            .finish()
            .map_err(|err| build_error(err, end))?;

        debug!(
            actors = diagram.actor_count(),
            elements = diagram.elements().len();
            "Source elaborated"
        );
        Ok(diagram)
    }

    fn add(&mut self, element: impl Into<Element>, span: Span) {
        if let Err(err) = self.builder.add_signal(element) {
            self.collector.emit(build_error(err, span));
        }
    }

    fn missing_message(&mut self, what: &str, span: Span) {
        self.collector.emit(
            Diagnostic::error(format!("{what} has no message"))
                .with_code(ErrorCode::E101)
                .with_label(span, "expected `: <message>`")
                .with_help("write the text after a colon, e.g. `Alice -> Bob: hello`"),
        );
    }

    fn note_error(&mut self, err: ModelError, actors: &[Spanned<&str>], span: Span) {
        let actors_span = actors
            .iter()
            .map(Spanned::span)
            .reduce(|a, b| a.union(b))
            .unwrap_or(span);
        let diagnostic = match err {
            ModelError::NoteOverSameActor => Diagnostic::error(err.to_string())
                .with_code(ErrorCode::E200)
                .with_label(actors_span, "the same actor is named twice")
                .with_help("use `note over A: text` for a note over a single actor"),
            other => Diagnostic::error(other.to_string()).with_label(span, "invalid note"),
        };
        self.collector.emit(diagnostic);
    }
}

fn build_error(err: BuildError, span: Span) -> Diagnostic {
    let diagnostic = Diagnostic::error(err.to_string());
    match err {
        BuildError::UnclosedBlocks { .. } => diagnostic
            .with_code(ErrorCode::E203)
            .with_label(span, "input ends here"),
        BuildError::NoOpenBlock => diagnostic
            .with_code(ErrorCode::E202)
            .with_label(span, "nothing to close"),
        BuildError::UnknownActor { .. } => diagnostic.with_label(span, "unknown actor"),
    }
}
