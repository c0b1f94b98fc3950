//! Incremental construction of a [`Diagram`].
//!
//! The builder keeps a stack of open blocks. Every signal or note added
//! while a block is open lands in two places: the diagram's flat element
//! list and the last partition of the innermost open block. Both refer to
//! the same [`ElementId`], so the two views cannot disagree.
//!
//! # Quick Start
//!
//! ```
//! # use transit_core::builder::DiagramBuilder;
//! # use transit_core::model::{ArrowType, LineType, Signal};
//! let mut builder = DiagramBuilder::new();
//! let a = builder.get_actor("A", None);
//! let b = builder.get_actor("B", None);
//!
//! builder.start_block("alt", Some("ok"));
//! builder
//!     .add_signal(Signal::new(a, b, LineType::Solid, ArrowType::Filled, "hello"))
//!     .unwrap();
//! builder.end_block().unwrap();
//!
//! let diagram = builder.finish().unwrap();
//! assert_eq!(diagram.elements().len(), 1);
//! assert_eq!(diagram.blocks().len(), 1);
//! ```

use log::{debug, trace, warn};

use crate::{
    error::BuildError,
    model::{ActorId, Block, BlockId, Child, Diagram, Element, ElementId},
};

/// Assembles a [`Diagram`] statement by statement.
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    diagram: Diagram,
    nesting: Vec<BlockId>,
}

impl DiagramBuilder {
    pub fn new() -> Self {
        Self {
            diagram: Diagram::new(),
            nesting: Vec::new(),
        }
    }

    /// Returns the actor with the given alias, creating it on first use.
    ///
    /// The alias is trimmed before lookup. A new actor takes the next index
    /// and uses `name` as its label, or the alias when `name` is `None`.
    /// For an existing actor the `name` argument is ignored, so the first
    /// name seen wins.
    pub fn get_actor(&mut self, alias: &str, name: Option<&str>) -> ActorId {
        let alias = alias.trim();
        if let Some(actor) = self.diagram.actor_by_alias(alias) {
            return actor.id();
        }

        let name = name.unwrap_or(alias).to_string();
        let id = self.diagram.insert_actor(alias.to_string(), name);
        debug!(alias, index = id.index(); "Actor created");
        id
    }

    /// Resolves `alias` or `display name as alias` to an actor.
    ///
    /// The last ` as ` separator wins and the alias must be a single word
    /// ending the input. A display name wrapped in double quotes has the
    /// quotes removed. Input without a valid separator is used as both
    /// alias and name.
    pub fn resolve_actor_reference(&mut self, input: &str) -> ActorId {
        match split_alias(input) {
            Some((name, alias)) => self.get_actor(alias, Some(&unescape(name))),
            None => self.get_actor(input, None),
        }
    }

    /// Sets the diagram title, replacing any previous one.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.diagram.set_title(title.into());
    }

    /// Appends a signal or note.
    ///
    /// The element is added to the flat list and, when a block is open, to
    /// the current partition of the innermost block. Outside any block it
    /// joins the top-level timeline.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownActor`] if the element references an
    /// actor that was not created by this builder.
    pub fn add_signal(&mut self, element: impl Into<Element>) -> Result<ElementId, BuildError> {
        let element = element.into();
        if let Some(actor) = element
            .actors()
            .into_iter()
            .find(|actor| actor.index() >= self.diagram.actor_count())
        {
            return Err(BuildError::UnknownActor {
                index: actor.index(),
            });
        }

        let id = self.diagram.push_element(element);
        self.attach(Child::Element(id));
        trace!(id = id.index(), open_blocks = self.nesting.len(); "Element added");
        Ok(id)
    }

    /// Opens a new block whose first partition is labeled `name`.
    pub fn start_block(&mut self, name: &str, title: Option<&str>) -> BlockId {
        let block = Block::new(name.to_string(), title.map(str::to_string));
        let id = self.diagram.push_block(block);

        if self.nesting.is_empty() {
            self.diagram.push_top_level_block(id);
        }
        self.attach(Child::Block(id));
        self.nesting.push(id);

        debug!(name, depth = self.nesting.len(); "Block started");
        id
    }

    /// Starts a new partition labeled `name` in the innermost open block.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoOpenBlock`] and leaves the diagram untouched
    /// when no block is open.
    pub fn mid_block(&mut self, name: &str) -> Result<(), BuildError> {
        let Some(&id) = self.nesting.last() else {
            warn!(name; "Partition started outside of any block");
            return Err(BuildError::NoOpenBlock);
        };

        self.diagram.block_mut(id).push_partition(name.to_string());
        debug!(name; "Partition started");
        Ok(())
    }

    /// Closes the innermost open block and returns its id.
    ///
    /// The enclosing block, if any, has its depth set to the closed block's
    /// depth plus one.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::NoOpenBlock`] and leaves the diagram untouched
    /// when no block is open.
    pub fn end_block(&mut self) -> Result<BlockId, BuildError> {
        let Some(id) = self.nesting.pop() else {
            warn!("Block ended without a matching start");
            return Err(BuildError::NoOpenBlock);
        };

        let depth = self.diagram.block(id).depth();
        if let Some(&parent) = self.nesting.last() {
            self.diagram.block_mut(parent).set_depth(depth + 1);
        }

        debug!(id = id.index(), depth; "Block ended");
        Ok(id)
    }

    /// Returns the number of blocks currently open.
    pub fn open_blocks(&self) -> usize {
        self.nesting.len()
    }

    /// Returns the diagram built so far.
    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    /// Finishes construction and returns the diagram.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnclosedBlocks`] if any block is still open.
    pub fn finish(self) -> Result<Diagram, BuildError> {
        if !self.nesting.is_empty() {
            return Err(BuildError::UnclosedBlocks {
                count: self.nesting.len(),
            });
        }

        debug!(
            actors = self.diagram.actor_count(),
            elements = self.diagram.elements().len(),
            blocks = self.diagram.block_count();
            "Diagram built"
        );
        Ok(self.diagram)
    }

    fn attach(&mut self, child: Child) {
        match self.nesting.last() {
            Some(&parent) => self
                .diagram
                .block_mut(parent)
                .current_partition_mut()
                .push_child(child),
            None => self.diagram.push_timeline(child),
        }
    }
}

/// Normalizes user-supplied text.
///
/// Trims surrounding whitespace, removes one pair of enclosing double quotes,
/// and turns the two-character sequence `\n` into a line break.
///
/// ```
/// # use transit_core::builder::unescape;
/// assert_eq!(unescape(r#"  "two\nlines"  "#), "two\nlines");
/// ```
pub fn unescape(text: &str) -> String {
    let trimmed = text.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed);
    unquoted.replace("\\n", "\n")
}

/// Splits `name as alias`, returning `(name, alias)`.
fn split_alias(input: &str) -> Option<(&str, &str)> {
    let input = input.trim();
    let (name, alias) = input.rsplit_once(" as ")?;
    if alias.is_empty() || alias.chars().any(char::is_whitespace) || name.trim().is_empty() {
        return None;
    }
    Some((name, alias))
}
