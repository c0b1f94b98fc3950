//! First layout pass: text sizes, box sizes and vertical offsets.
//!
//! Statements are visited in emission order, descending into blocks. Each
//! statement stacks below the previous one and records the horizontal gaps it
//! needs between actors.

use log::trace;

use transit_core::{
    geometry::{Bounds, Insets, Point, Size},
    model::{BlockId, Child, Diagram, Element, ElementId, Note, NoteTarget, Placement, Signal},
    text::TextMetrics,
};

use crate::config::LayoutConfig;

use super::{LayoutError, measure_text};

/// Vertical extents collected by the measuring pass.
///
/// Offsets are relative to the top of the first statement.
#[derive(Debug, Clone, Default)]
pub(super) struct Extents {
    signals_height: f32,
    element_offsets: Vec<f32>,
    blocks: Vec<BlockExtent>,
}

impl Extents {
    /// Returns the total height of every statement.
    pub fn signals_height(&self) -> f32 {
        self.signals_height
    }

    /// Returns the offset of the element at `index` in the element arena.
    pub fn element_offset(&self, index: usize) -> f32 {
        self.element_offsets[index]
    }

    pub fn block(&self, id: BlockId) -> &BlockExtent {
        &self.blocks[id.index()]
    }
}

/// Where a block and each of its partitions start and end.
#[derive(Debug, Clone, Default)]
pub(super) struct BlockExtent {
    start: f32,
    end: f32,
    partitions: Vec<(f32, f32)>,
}

impl BlockExtent {
    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    /// Returns `(start, end)` for each partition in order.
    pub fn partitions(&self) -> &[(f32, f32)] {
        &self.partitions
    }
}

/// A minimum center-to-center gap between two actor slots.
///
/// A missing `left` stands for the space before the first actor and a
/// `right` past the last actor for the space after it.
#[derive(Debug, Clone, Copy)]
struct Requirement {
    left: Option<usize>,
    right: usize,
    distance: f32,
}

impl Requirement {
    fn new(left: Option<usize>, right: usize, distance: f32) -> Self {
        Self {
            left,
            right,
            distance,
        }
    }

    fn apply(self, diagram: &mut Diagram) {
        let count = diagram.actor_count();
        match self.left {
            None => {
                if let Some(actor) = diagram.actor_at_mut(self.right) {
                    let x = self.distance - actor.width() / 2.0;
                    actor.ensure_min_x(x);
                }
            }
            Some(left) if self.right >= count => {
                if let Some(actor) = diagram.actor_at_mut(left) {
                    actor.ensure_padding_right(self.distance);
                }
            }
            Some(left) => {
                if let Some(actor) = diagram.actor_at_mut(left) {
                    actor.ensure_distance_to(self.right, self.distance);
                }
            }
        }
    }
}

pub(super) struct Measurer<'a> {
    config: &'a LayoutConfig,
    metrics: &'a dyn TextMetrics,
    /// Running top of the next statement.
    offset: f32,
    extents: Extents,
}

impl<'a> Measurer<'a> {
    pub fn new(config: &'a LayoutConfig, metrics: &'a dyn TextMetrics, diagram: &Diagram) -> Self {
        Self {
            config,
            metrics,
            offset: 0.0,
            extents: Extents {
                signals_height: 0.0,
                element_offsets: vec![0.0; diagram.elements().len()],
                blocks: vec![BlockExtent::default(); diagram.block_count()],
            },
        }
    }

    fn measure(&self, text: &str) -> Result<Size, LayoutError> {
        measure_text(self.metrics, self.config, text)
    }

    /// Returns the size of the title box, if the diagram has a title.
    pub fn measure_title(&self, diagram: &Diagram) -> Result<Option<Size>, LayoutError> {
        let padding = Insets::uniform(self.config.title_margin + self.config.title_padding);
        diagram
            .title()
            .map(|title| self.measure(title).map(|size| size.add_padding(padding)))
            .transpose()
    }

    /// Sizes every actor box and returns the height of the tallest.
    ///
    /// Clears the spacing left over from an earlier run.
    pub fn measure_actors(&self, diagram: &mut Diagram) -> Result<f32, LayoutError> {
        let padding = Insets::uniform(self.config.actor_padding + self.config.actor_margin);
        let mut height: f32 = 0.0;
        for actor in diagram.actors_mut() {
            let text_size = self.measure(actor.name())?;
            let size = text_size.add_padding(padding);
            actor.reset_layout(text_size, Bounds::new_from_top_left(Point::default(), size));
            height = height.max(size.height());
        }
        Ok(height)
    }

    pub fn visit(&mut self, diagram: &mut Diagram, child: Child) -> Result<(), LayoutError> {
        match child {
            Child::Element(id) => self.visit_element(diagram, id),
            Child::Block(id) => self.visit_block(diagram, id),
        }
    }

    pub fn finish(mut self) -> Extents {
        self.extents.signals_height = self.offset;
        self.extents
    }

    fn visit_element(&mut self, diagram: &mut Diagram, id: ElementId) -> Result<(), LayoutError> {
        let element = diagram.element(id);
        let text_size = self.measure(element.message())?;
        let (size, requirements) = match element {
            Element::Signal(signal) => self.signal_requirements(signal, text_size),
            Element::Note(note) => self.note_requirements(note, text_size),
        };

        let element = diagram.element_mut(id);
        element.set_text_size(text_size);
        element.set_bounds(Bounds::new_from_top_left(Point::default(), size));
        for requirement in requirements {
            requirement.apply(diagram);
        }

        trace!(element = id.index(), offset = self.offset, height = size.height(); "Measured statement");
        self.extents.element_offsets[id.index()] = self.offset;
        self.offset += size.height();
        Ok(())
    }

    fn signal_requirements(&self, signal: &Signal, text_size: Size) -> (Size, Vec<Requirement>) {
        let size = text_size.add_padding(Insets::uniform(
            self.config.signal_margin + self.config.signal_padding,
        ));
        let a = signal.actor_a().index();
        let b = signal.actor_b().index();

        if signal.is_self() {
            let size = size.add_width(self.config.self_signal_width);
            (size, vec![Requirement::new(Some(a), a + 1, size.width())])
        } else {
            (size, vec![Requirement::new(Some(a.min(b)), a.max(b), size.width())])
        }
    }

    fn note_requirements(&self, note: &Note, text_size: Size) -> (Size, Vec<Requirement>) {
        let config = self.config;
        let size = text_size.add_padding(Insets::uniform(config.note_margin + config.note_padding));
        let beside = size.width() + 2.0 * config.actor_margin;
        let (first, last) = note.target().index_range();

        let requirements = match (note.placement(), note.target()) {
            (Placement::LeftOf, _) => vec![Requirement::new(first.checked_sub(1), first, beside)],
            (Placement::RightOf, _) => vec![Requirement::new(Some(first), first + 1, beside)],
            (Placement::Over, NoteTarget::Two(..)) => {
                let overlap = 2.0 * (config.note_padding + config.note_overlap);
                vec![Requirement::new(Some(first), last, size.width() - overlap)]
            }
            (Placement::Over, NoteTarget::One(_)) => {
                let half = size.width() / 2.0;
                vec![
                    Requirement::new(first.checked_sub(1), first, half),
                    Requirement::new(Some(first), first + 1, half),
                ]
            }
        };
        (size, requirements)
    }

    fn visit_block(&mut self, diagram: &mut Diagram, id: BlockId) -> Result<(), LayoutError> {
        let start = self.offset;
        let title_padding = Insets::uniform(
            self.config.block_title_margin + self.config.block_title_padding,
        );
        let title_size = match diagram.block(id).title() {
            Some(title) => Some(self.measure(title)?.add_padding(title_padding)),
            None => None,
        };
        diagram
            .block_mut(id)
            .set_title_box(title_size.map(|size| Bounds::new_from_top_left(Point::default(), size)));

        let label_padding =
            Insets::uniform(self.config.signal_margin + self.config.signal_padding);
        let count = diagram.block(id).partitions().len();
        let mut partitions = Vec::with_capacity(count);
        // The title tab and first label share the top row of the frame.
        let mut header = title_size.map_or(0.0, Size::height);

        for index in 0..count {
            let partition = &diagram.block(id).partitions()[index];
            let label_size = self.measure(partition.text())?.add_padding(label_padding);
            let children = partition.children().to_vec();
            diagram.block_mut(id).partitions_mut()[index].set_label_size(label_size);

            let partition_start = self.offset;
            if index == 0 {
                header = header.max(label_size.height());
            }
            if self.config.reserve_partition_labels {
                let row = if index == 0 { header } else { label_size.height() };
                self.offset += row;
            }
            for child in children {
                self.visit(diagram, child)?;
            }
            partitions.push((partition_start, self.offset));
        }

        // A frame never ends above its own header.
        self.offset = self.offset.max(start + header);
        if let Some(last) = partitions.last_mut() {
            last.1 = self.offset;
        }

        trace!(block = id.index(), start, end = self.offset; "Measured block");
        self.extents.blocks[id.index()] = BlockExtent {
            start,
            end: self.offset,
            partitions,
        };
        Ok(())
    }
}
