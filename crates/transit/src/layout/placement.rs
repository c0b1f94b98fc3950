//! Third layout pass: absolute bounds for everything.

use log::trace;

use transit_core::{
    geometry::{Bounds, Point, Size},
    model::{BlockId, Child, Diagram, Element, Note, NoteTarget, Partition, Placement, Signal},
};

use crate::config::LayoutConfig;

use super::measure::Extents;

/// Converts relative sizes and offsets into final diagram coordinates.
///
/// Expects actor x-positions from the spacing pass and the vertical layout
/// from `extents`. Sizes stored by the measuring pass are kept and only
/// moved, except for spans between two lifelines.
pub(super) fn place(
    config: &LayoutConfig,
    diagram: &mut Diagram,
    title_size: Option<Size>,
    extents: &Extents,
) {
    let margin = config.diagram_margin;
    let title_height = title_size.map_or(0.0, Size::height);
    diagram.set_title_box(
        title_size.map(|size| Bounds::new_from_top_left(Point::new(margin, margin), size)),
    );

    let top = margin + title_height;
    let actors_height = diagram.actors_height();
    for actor in diagram.actors_mut() {
        let bounds = actor
            .bounds()
            .with_y(top)
            .with_height(actors_height)
            .translate(Point::new(margin, 0.0));
        actor.set_bounds(bounds);
    }

    let centers: Vec<f32> = diagram.actors().map(|actor| actor.center_x()).collect();
    let signals_top = top + actors_height;

    for (index, element) in diagram.elements_mut().iter_mut().enumerate() {
        let y = signals_top + extents.element_offset(index);
        let size = element.bounds().to_size();
        let bounds = match element {
            Element::Signal(signal) => signal_bounds(signal, &centers, y, size),
            Element::Note(note) => note_bounds(config, note, &centers, y, size),
        };
        element.set_bounds(bounds);
    }

    let frame = Frame {
        config,
        extents,
        centers: &centers,
        signals_top,
    };
    for id in diagram.blocks().to_vec() {
        frame.place_block(diagram, id);
    }
}

fn signal_bounds(signal: &Signal, centers: &[f32], y: f32, size: Size) -> Bounds {
    let a = centers[signal.actor_a().index()];
    let b = centers[signal.actor_b().index()];
    if signal.is_self() {
        // The loop starts at the lifeline and the label sits inside it.
        Bounds::new_from_top_left(Point::new(a, y), size)
    } else {
        Bounds::from_extents(a.min(b), y, a.max(b), y + size.height())
    }
}

fn note_bounds(config: &LayoutConfig, note: &Note, centers: &[f32], y: f32, size: Size) -> Bounds {
    let (first, last) = note.target().index_range();
    let x = match (note.placement(), note.target()) {
        (Placement::LeftOf, _) => centers[first] - config.actor_margin - size.width(),
        (Placement::RightOf, _) => centers[first] + config.actor_margin,
        (Placement::Over, NoteTarget::One(_)) => centers[first] - size.width() / 2.0,
        (Placement::Over, NoteTarget::Two(..)) => {
            let reach = config.note_overlap + config.note_padding;
            return Bounds::from_extents(
                centers[first] - reach,
                y,
                centers[last] + reach,
                y + size.height(),
            );
        }
    };
    Bounds::new_from_top_left(Point::new(x, y), size)
}

/// Shared inputs for placing block frames.
struct Frame<'a> {
    config: &'a LayoutConfig,
    extents: &'a Extents,
    centers: &'a [f32],
    signals_top: f32,
}

impl Frame<'_> {
    /// Places a block and, recursively, the blocks nested inside it.
    ///
    /// A block spans the lifelines its statements touch, pushed out by
    /// `block_margin` plus `depth_padding` for each level of its deepest
    /// nesting chain. It is at least wide enough for its title tab and first
    /// label.
    fn place_block(&self, diagram: &mut Diagram, id: BlockId) {
        let config = self.config;
        let extent = self.extents.block(id);
        let reach = Reach::of(diagram, id);
        let block = diagram.block(id);

        let outset = config.block_margin + reach.depth as f32 * config.depth_padding;
        let (min_center, max_center) = match reach.actors {
            Some((first, last)) => (self.centers[first], self.centers[last]),
            None => {
                let x = self
                    .centers
                    .first()
                    .copied()
                    .unwrap_or(config.diagram_margin);
                (x, x)
            }
        };

        let title = block.title_box().map_or(Size::default(), Bounds::to_size);
        let label = block
            .partitions()
            .first()
            .map_or(Size::default(), Partition::label_size);
        let header_width = title.width() + label.width();

        let min_x = min_center - outset;
        let max_x = (max_center + outset).max(min_x + header_width);
        let min_y = self.signals_top + extent.start();
        let max_y = self.signals_top + extent.end();
        let bounds = Bounds::from_extents(min_x, min_y, max_x, max_y);

        let nested: Vec<BlockId> = block
            .partitions()
            .iter()
            .flat_map(Partition::children)
            .filter_map(|child| match *child {
                Child::Block(nested) => Some(nested),
                Child::Element(_) => None,
            })
            .collect();

        let block = diagram.block_mut(id);
        block.set_bounds(bounds);
        let title_box = block.title_box().map(|title| title.with_x(min_x).with_y(min_y));
        block.set_title_box(title_box);

        let partitions = block.partitions_mut();
        for (partition, &(start, end)) in partitions.iter_mut().zip(extent.partitions()) {
            let top = self.signals_top + start;
            let bottom = (self.signals_top + end).max(top);
            partition.set_bounds(Bounds::from_extents(min_x, top, max_x, bottom));
        }
        if let Some(last) = partitions.last_mut() {
            let bounds = last.bounds();
            last.set_bounds(bounds.with_height(max_y - bounds.min_y()));
        }

        trace!(block = id.index(), depth = reach.depth, min_x, min_y, max_x, max_y; "Placed block");
        for nested in nested {
            self.place_block(diagram, nested);
        }
    }
}

/// What a block covers: the actors its statements touch and how deeply
/// blocks nest inside it.
///
/// `depth` counts the block itself, so a block without nested blocks has
/// depth 1. It is derived from the tree and does not depend on the order in
/// which nested blocks were closed.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Reach {
    actors: Option<(usize, usize)>,
    depth: u32,
}

impl Reach {
    fn of(diagram: &Diagram, id: BlockId) -> Self {
        let mut reach = Self {
            actors: None,
            depth: 1,
        };

        for child in diagram.block(id).partitions().iter().flat_map(Partition::children) {
            match *child {
                Child::Element(element) => {
                    for actor in diagram.element(element).actors() {
                        reach.extend(actor.index(), actor.index());
                    }
                }
                Child::Block(nested) => {
                    let nested = Self::of(diagram, nested);
                    if let Some((first, last)) = nested.actors {
                        reach.extend(first, last);
                    }
                    reach.depth = reach.depth.max(nested.depth + 1);
                }
            }
        }
        reach
    }

    fn extend(&mut self, first: usize, last: usize) {
        self.actors = Some(match self.actors {
            Some((min, max)) => (min.min(first), max.max(last)),
            None => (first, last),
        });
    }
}

#[cfg(test)]
mod tests {
    use transit_core::builder::DiagramBuilder;

    use super::*;

    #[test]
    fn test_reach_ignores_close_order() {
        let mut builder = DiagramBuilder::new();
        let outer = builder.start_block("alt", None);
        let middle = builder.start_block("loop", None);
        builder.start_block("opt", None);
        builder.end_block().unwrap();
        builder.end_block().unwrap();
        builder.start_block("opt", None);
        builder.end_block().unwrap();
        builder.end_block().unwrap();
        let diagram = builder.finish().unwrap();

        // The last closed child has depth 1, which resets the stored depth.
        assert_eq!(diagram.block(outer).depth(), 2);
        assert_eq!(Reach::of(&diagram, outer).depth, 3);
        assert_eq!(Reach::of(&diagram, middle).depth, 2);
        assert_eq!(Reach::of(&diagram, outer).actors, None);
    }
}
