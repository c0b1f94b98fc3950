//! The diagram container and its arenas.

use indexmap::IndexMap;

use crate::{
    geometry::{Bounds, Size},
    model::{Actor, ActorId, Block, Child, Note, NoteTarget, Signal},
};

/// Handle to a signal or note in [`Diagram::elements`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a block in the diagram's block arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(usize);

impl BlockId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A leaf statement drawn between the actor rows.
#[derive(Debug, Clone)]
pub enum Element {
    Signal(Signal),
    Note(Note),
}

impl Element {
    pub fn message(&self) -> &str {
        match self {
            Self::Signal(signal) => signal.message(),
            Self::Note(note) => note.message(),
        }
    }

    pub fn text_size(&self) -> Size {
        match self {
            Self::Signal(signal) => signal.text_size(),
            Self::Note(note) => note.text_size(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Signal(signal) => signal.bounds(),
            Self::Note(note) => note.bounds(),
        }
    }

    pub fn set_text_size(&mut self, size: Size) {
        match self {
            Self::Signal(signal) => signal.set_text_size(size),
            Self::Note(note) => note.set_text_size(size),
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        match self {
            Self::Signal(signal) => signal.set_bounds(bounds),
            Self::Note(note) => note.set_bounds(bounds),
        }
    }

    /// Returns every actor the element refers to.
    pub fn actors(&self) -> Vec<ActorId> {
        match self {
            Self::Signal(signal) => vec![signal.actor_a(), signal.actor_b()],
            Self::Note(note) => match note.target() {
                NoteTarget::One(actor) => vec![actor],
                NoteTarget::Two(a, b) => vec![a, b],
            },
        }
    }
}

impl From<Signal> for Element {
    fn from(signal: Signal) -> Self {
        Self::Signal(signal)
    }
}

impl From<Note> for Element {
    fn from(note: Note) -> Self {
        Self::Note(note)
    }
}

/// A sequence diagram: actors, statements and the block tree.
///
/// Statements live once in a flat arena ([`Diagram::elements`]); blocks and
/// the top-level timeline refer to them by id. Geometry fields start at zero
/// and are filled in by the layout engine.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    title: Option<String>,
    actors: IndexMap<String, Actor>,
    elements: Vec<Element>,
    blocks: Vec<BlockId>,
    block_arena: Vec<Block>,
    timeline: Vec<Child>,

    title_box: Option<Bounds>,
    width: f32,
    height: f32,
    actors_height: f32,
    signals_height: f32,
}

impl Diagram {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = Some(title);
    }

    /// Returns the actors in index order.
    pub fn actors(&self) -> impl ExactSizeIterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn actors_mut(&mut self) -> impl ExactSizeIterator<Item = &mut Actor> {
        self.actors.values_mut()
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Returns the actor for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by a different diagram.
    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.index()]
    }

    /// Returns the actor for `id` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by a different diagram.
    pub fn actor_mut(&mut self, id: ActorId) -> &mut Actor {
        &mut self.actors[id.index()]
    }

    /// Returns the actor at a position in index order.
    pub fn actor_at(&self, index: usize) -> Option<&Actor> {
        self.actors.get_index(index).map(|(_, actor)| actor)
    }

    pub fn actor_at_mut(&mut self, index: usize) -> Option<&mut Actor> {
        self.actors.get_index_mut(index).map(|(_, actor)| actor)
    }

    /// Looks an actor up by its alias.
    pub fn actor_by_alias(&self, alias: &str) -> Option<&Actor> {
        self.actors.get(alias)
    }

    pub(crate) fn insert_actor(&mut self, alias: String, name: String) -> ActorId {
        let index = self.actors.len();
        self.actors
            .insert(alias.clone(), Actor::new(alias, name, index));
        ActorId::new(index)
    }

    /// Returns every signal and note in emission order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn elements_mut(&mut self) -> &mut [Element] {
        &mut self.elements
    }

    /// Returns the element for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by a different diagram.
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    pub(crate) fn push_element(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        ElementId(self.elements.len() - 1)
    }

    /// Returns the top-level blocks in emission order.
    pub fn blocks(&self) -> &[BlockId] {
        &self.blocks
    }

    /// Returns the block for `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was minted by a different diagram.
    pub fn block(&self, id: BlockId) -> &Block {
        &self.block_arena[id.0]
    }

    pub fn block_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.block_arena[id.0]
    }

    /// Returns the number of blocks at any depth.
    pub fn block_count(&self) -> usize {
        self.block_arena.len()
    }

    pub(crate) fn push_block(&mut self, block: Block) -> BlockId {
        self.block_arena.push(block);
        BlockId(self.block_arena.len() - 1)
    }

    pub(crate) fn push_top_level_block(&mut self, id: BlockId) {
        self.blocks.push(id);
    }

    /// Returns the statements and blocks that sit outside any block.
    pub fn timeline(&self) -> &[Child] {
        &self.timeline
    }

    pub(crate) fn push_timeline(&mut self, child: Child) {
        self.timeline.push(child);
    }

    /// Returns the title box computed by layout.
    pub fn title_box(&self) -> Option<Bounds> {
        self.title_box
    }

    pub fn set_title_box(&mut self, title_box: Option<Bounds>) {
        self.title_box = title_box;
    }

    /// Returns the canvas width computed by layout.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the canvas height computed by layout.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn set_size(&mut self, size: Size) {
        self.width = size.width();
        self.height = size.height();
    }

    /// Returns the height shared by every actor box.
    pub fn actors_height(&self) -> f32 {
        self.actors_height
    }

    pub fn set_actors_height(&mut self, height: f32) {
        self.actors_height = height;
    }

    /// Returns the total height of all statements between the actor rows.
    pub fn signals_height(&self) -> f32 {
        self.signals_height
    }

    pub fn set_signals_height(&mut self, height: f32) {
        self.signals_height = height;
    }
}
