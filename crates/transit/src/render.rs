//! Drawing a laid-out diagram onto a [`Canvas`].
//!
//! [`render`] walks a diagram whose geometry was filled in by the
//! [layout engine](crate::layout::Engine) and issues primitive drawing calls.
//! Backends such as [`SvgCanvas`](crate::export::svg::SvgCanvas) turn those
//! calls into output.

use transit_core::{
    geometry::{Bounds, Insets, Point, Size},
    model::{ArrowType, BlockId, Child, Diagram, Element, LineType, Note, Signal},
};

use crate::config::LayoutConfig;

/// How a line is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

impl From<LineType> for LineStyle {
    fn from(line_type: LineType) -> Self {
        match line_type {
            LineType::Solid => Self::Solid,
            LineType::Dotted => Self::Dashed,
        }
    }
}

/// Marker drawn at the end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHead {
    Filled,
    Open,
}

impl From<ArrowType> for ArrowHead {
    fn from(arrow_type: ArrowType) -> Self {
        match arrow_type {
            ArrowType::Filled => Self::Filled,
            ArrowType::Open => Self::Open,
        }
    }
}

/// Horizontal anchor of a text position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// The position is the left edge of every line.
    Start,
    /// The position is the horizontal center of every line.
    Middle,
}

/// What a rectangle represents, so backends can style it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectKind {
    Title,
    Actor,
    Note,
    /// The outer frame of a block.
    Frame,
}

/// A drawing surface for diagram primitives.
///
/// Text positions give the top of the first line.
pub trait Canvas {
    fn draw_rect(&mut self, bounds: Bounds, kind: RectKind);

    /// Draws a rectangle whose bottom-right corner is cut off by `cut`.
    fn draw_cut_corner_rect(&mut self, bounds: Bounds, cut: f32);

    fn draw_line(&mut self, from: Point, to: Point, style: LineStyle, arrow: Option<ArrowHead>);

    fn draw_text(&mut self, position: Point, text: &str, align: TextAlign);
}

/// Draws `diagram` onto `canvas`.
///
/// The diagram must have been laid out with the same `config`.
pub fn render(diagram: &Diagram, config: &LayoutConfig, canvas: &mut dyn Canvas) {
    let renderer = Renderer { diagram, config };

    renderer.draw_title(canvas);
    for &id in diagram.blocks() {
        renderer.draw_block(canvas, id);
    }
    renderer.draw_actors(canvas);
    for element in diagram.elements() {
        match element {
            Element::Signal(signal) if signal.is_self() => {
                renderer.draw_self_signal(canvas, signal);
            }
            Element::Signal(signal) => renderer.draw_signal(canvas, signal),
            Element::Note(note) => renderer.draw_note(canvas, note),
        }
    }
}

struct Renderer<'a> {
    diagram: &'a Diagram,
    config: &'a LayoutConfig,
}

impl Renderer<'_> {
    fn draw_title(&self, canvas: &mut dyn Canvas) {
        let (Some(title), Some(bounds)) = (self.diagram.title(), self.diagram.title_box()) else {
            return;
        };
        draw_text_box(
            canvas,
            TextBox {
                bounds,
                text: title,
                text_size: None,
                margin: self.config.title_margin,
                padding: self.config.title_padding,
                kind: RectKind::Title,
            },
        );
    }

    /// Draws both actor rows and the lifelines between them.
    fn draw_actors(&self, canvas: &mut dyn Canvas) {
        let actors_height = self.diagram.actors_height();
        let signals_height = self.diagram.signals_height();
        let margin = self.config.actor_margin;

        for actor in self.diagram.actors() {
            let top = actor.bounds();
            let bottom = top.with_y(top.min_y() + actors_height + signals_height);
            for bounds in [top, bottom] {
                draw_text_box(
                    canvas,
                    TextBox {
                        bounds,
                        text: actor.name(),
                        text_size: Some(actor.text_size()),
                        margin,
                        padding: self.config.actor_padding,
                        kind: RectKind::Actor,
                    },
                );
            }

            let x = actor.center_x();
            canvas.draw_line(
                Point::new(x, top.min_y() + actors_height - margin),
                Point::new(x, bottom.min_y() + margin),
                LineStyle::Solid,
                None,
            );
        }
    }

    fn draw_signal(&self, canvas: &mut dyn Canvas, signal: &Signal) {
        let config = self.config;
        let bounds = signal.bounds();
        let a = self.diagram.actor(signal.actor_a()).center_x();
        let b = self.diagram.actor(signal.actor_b()).center_x();

        let text_y = bounds.min_y() + config.signal_margin + config.signal_padding;
        canvas.draw_text(
            Point::new((a + b) / 2.0, text_y),
            signal.message(),
            TextAlign::Middle,
        );

        // The line runs along the bottom, leaving the margin below it.
        let y = bounds.max_y() - config.signal_padding;
        canvas.draw_line(
            Point::new(a, y),
            Point::new(b, y),
            signal.line_type().into(),
            Some(signal.arrow_type().into()),
        );
    }

    /// Draws a signal to the same actor as a loop out to the right.
    fn draw_self_signal(&self, canvas: &mut dyn Canvas, signal: &Signal) {
        let config = self.config;
        let bounds = signal.bounds();
        let x1 = self.diagram.actor(signal.actor_a()).center_x();
        let x2 = x1 + config.self_signal_width;
        let y1 = bounds.min_y() + config.signal_margin + config.signal_padding;
        let y2 = y1 + bounds.height() - 2.0 * config.signal_margin - config.signal_padding;

        let style = LineStyle::from(signal.line_type());
        canvas.draw_line(Point::new(x1, y1), Point::new(x2, y1), style, None);
        canvas.draw_line(Point::new(x2, y1), Point::new(x2, y2), style, None);
        canvas.draw_line(
            Point::new(x2, y2),
            Point::new(x1, y2),
            style,
            Some(signal.arrow_type().into()),
        );

        let top_padding = ((y2 - y1) - signal.text_size().height()) / 2.0;
        canvas.draw_text(
            Point::new(x2 + config.signal_padding, y1 + top_padding),
            signal.message(),
            TextAlign::Start,
        );
    }

    fn draw_note(&self, canvas: &mut dyn Canvas, note: &Note) {
        draw_text_box(
            canvas,
            TextBox {
                bounds: note.bounds(),
                text: note.message(),
                text_size: None,
                margin: self.config.note_margin,
                padding: self.config.note_padding,
                kind: RectKind::Note,
            },
        );
    }

    /// Draws a block frame, its title tab and partitions, then nested blocks.
    fn draw_block(&self, canvas: &mut dyn Canvas, id: BlockId) {
        let config = self.config;
        let block = self.diagram.block(id);
        canvas.draw_rect(block.bounds(), RectKind::Frame);

        let mut label_x = block.bounds().min_x();
        if let (Some(title), Some(title_box)) = (block.title(), block.title_box()) {
            let inner = title_box.inset(Insets::uniform(config.block_title_margin));
            canvas.draw_cut_corner_rect(inner, config.block_cut_corner);
            canvas.draw_text(
                Point::new(
                    title_box.center_x(),
                    inner.min_y() + config.block_title_padding,
                ),
                title,
                TextAlign::Middle,
            );
            label_x = title_box.max_x();
        }

        let label_offset = config.signal_margin + config.signal_padding;
        for (index, partition) in block.partitions().iter().enumerate() {
            let bounds = partition.bounds();
            if index > 0 {
                canvas.draw_line(
                    bounds.min_point(),
                    Point::new(bounds.max_x(), bounds.min_y()),
                    LineStyle::Dashed,
                    None,
                );
            }

            let x = if index == 0 { label_x } else { bounds.min_x() };
            if !partition.text().is_empty() {
                canvas.draw_text(
                    Point::new(x + label_offset, bounds.min_y() + label_offset),
                    partition.text(),
                    TextAlign::Start,
                );
            }

            for child in partition.children() {
                if let Child::Block(nested) = *child {
                    self.draw_block(canvas, nested);
                }
            }
        }
    }
}

/// A rectangle drawn inset by `margin` with a label inside it.
struct TextBox<'a> {
    bounds: Bounds,
    text: &'a str,
    /// Measured label size; centers the label when present, otherwise the
    /// label is placed `padding` from the top-left corner.
    text_size: Option<Size>,
    margin: f32,
    padding: f32,
    kind: RectKind,
}

fn draw_text_box(canvas: &mut dyn Canvas, text_box: TextBox<'_>) {
    let inner = text_box.bounds.inset(Insets::uniform(text_box.margin));
    canvas.draw_rect(inner, text_box.kind);

    match text_box.text_size {
        Some(size) => {
            let center = text_box.bounds.center();
            canvas.draw_text(
                Point::new(center.x(), center.y() - size.height() / 2.0),
                text_box.text,
                TextAlign::Middle,
            );
        }
        None => {
            let offset = Point::new(text_box.padding, text_box.padding);
            canvas.draw_text(inner.min_point().add_point(offset), text_box.text, TextAlign::Start);
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use transit_core::text::FixedWidthMetrics;

    use super::*;
    use crate::layout::Engine;

    /// A drawing call captured by [`RecordingCanvas`].
    #[derive(Debug, Clone, PartialEq)]
    enum Op {
        Rect(Bounds, RectKind),
        CutCornerRect(Bounds, f32),
        Line(Point, Point, LineStyle, Option<ArrowHead>),
        Text(Point, String, TextAlign),
    }

    #[derive(Debug, Default)]
    struct RecordingCanvas {
        ops: Vec<Op>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_rect(&mut self, bounds: Bounds, kind: RectKind) {
            self.ops.push(Op::Rect(bounds, kind));
        }

        fn draw_cut_corner_rect(&mut self, bounds: Bounds, cut: f32) {
            self.ops.push(Op::CutCornerRect(bounds, cut));
        }

        fn draw_line(&mut self, from: Point, to: Point, style: LineStyle, arrow: Option<ArrowHead>) {
            self.ops.push(Op::Line(from, to, style, arrow));
        }

        fn draw_text(&mut self, position: Point, text: &str, align: TextAlign) {
            self.ops.push(Op::Text(position, text.to_string(), align));
        }
    }

    fn draw(source: &str) -> Vec<Op> {
        let mut diagram = transit_parser::parse(source).unwrap();
        let config = LayoutConfig::default();
        let metrics = FixedWidthMetrics::default();
        Engine::new(config.clone(), &metrics)
            .layout(&mut diagram)
            .unwrap();

        let mut canvas = RecordingCanvas::default();
        render(&diagram, &config, &mut canvas);
        canvas.ops
    }

    fn count(ops: &[Op], predicate: impl Fn(&Op) -> bool) -> usize {
        ops.iter().filter(|op| predicate(op)).count()
    }

    #[test]
    fn test_two_actor_exchange() {
        let ops = draw("A->B: hello\nB-->>A: world");

        assert_eq!(count(&ops, |op| matches!(op, Op::Rect(_, RectKind::Actor))), 4);
        let arrows: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(_, _, style, Some(arrow)) => Some((*style, *arrow)),
                _ => None,
            })
            .collect();
        assert_eq!(
            arrows,
            vec![
                (LineStyle::Solid, ArrowHead::Filled),
                (LineStyle::Dashed, ArrowHead::Open),
            ]
        );
    }

    #[test]
    fn test_lifelines_connect_actor_rows() {
        let ops = draw("A->B: x");
        let lifelines: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(from, to, LineStyle::Solid, None) => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(lifelines.len(), 2);

        let (from, to) = lifelines[0];
        assert_approx_eq!(f32, from.x(), to.x());
        assert!(to.y() > from.y());
    }

    #[test]
    fn test_self_signal_draws_three_segments() {
        let ops = draw("A->A: think");
        let segments = count(&ops, |op| matches!(op, Op::Line(_, _, LineStyle::Solid, _)));
        // Three loop segments and one lifeline.
        assert_eq!(segments, 4);
        assert_eq!(count(&ops, |op| matches!(op, Op::Line(_, _, _, Some(_)))), 1);
    }

    #[test]
    fn test_block_with_partitions() {
        let ops = draw("alt ok\nA->B: yes\nelse\nB->A: no\nend");

        assert_eq!(count(&ops, |op| matches!(op, Op::Rect(_, RectKind::Frame))), 1);
        assert_eq!(count(&ops, |op| matches!(op, Op::CutCornerRect(_, _))), 1);
        assert_eq!(
            count(&ops, |op| matches!(op, Op::Line(_, _, LineStyle::Dashed, None))),
            1
        );
        let labels: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(_, text, TextAlign::Start) => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["alt", "else"]);
    }

    #[test]
    fn test_title_and_notes_are_boxed() {
        let ops = draw("title: T\nnote over A: n");
        assert_eq!(count(&ops, |op| matches!(op, Op::Rect(_, RectKind::Title))), 1);
        assert_eq!(count(&ops, |op| matches!(op, Op::Rect(_, RectKind::Note))), 1);
    }
}
