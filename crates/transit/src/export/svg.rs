//! SVG canvas built on the `svg` crate.

use log::debug;
use svg::{
    Document, Node,
    node::{
        Text as SvgText,
        element::{Definitions, Marker, Path, Rectangle, TSpan, Text},
    },
};

use transit_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
    text::Font,
};

use crate::{
    config::StyleConfig,
    render::{ArrowHead, Canvas, LineStyle, RectKind, TextAlign},
};

const FILLED_MARKER_ID: &str = "arrow-filled";
const OPEN_MARKER_ID: &str = "arrow-open";

/// Line height used for multi-line labels, as a multiple of the font size.
const LINE_HEIGHT: f32 = 1.2;

/// Colors resolved from a [`StyleConfig`].
#[derive(Debug, Clone)]
struct Palette {
    background: Option<Color>,
    stroke: Color,
    text: Color,
    actor_fill: Color,
    note_fill: Color,
    block_title_fill: Color,
}

impl Palette {
    fn new(style: &StyleConfig) -> Result<Self, String> {
        Ok(Self {
            background: style.background_color()?,
            stroke: style.stroke_color()?,
            text: style.text_color()?,
            actor_fill: style.actor_fill()?,
            note_fill: style.note_fill()?,
            block_title_fill: style.block_title_fill()?,
        })
    }
}

/// A [`Canvas`] that collects SVG nodes.
///
/// Shapes and text are kept apart so every label is drawn above every
/// shape regardless of call order.
pub struct SvgCanvas {
    size: Size,
    font: Font,
    palette: Palette,
    shapes: Vec<Box<dyn Node>>,
    text: Vec<Box<dyn Node>>,
}

impl SvgCanvas {
    /// Creates an empty canvas of the given size.
    ///
    /// # Errors
    ///
    /// Returns a message if a color in `style` cannot be parsed.
    pub fn new(size: Size, style: &StyleConfig, font: Font) -> Result<Self, String> {
        Ok(Self {
            size,
            font,
            palette: Palette::new(style)?,
            shapes: Vec::new(),
            text: Vec::new(),
        })
    }

    /// Builds the SVG document from everything drawn so far.
    pub fn into_document(self) -> Document {
        let width = self.size.width();
        let height = self.size.height();
        debug!(width, height, shapes = self.shapes.len(), labels = self.text.len(); "Building SVG document");

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height)
            .add(self.markers());

        if let Some(background) = &self.palette.background {
            doc = doc.add(
                Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", height)
                    .set("fill", background)
                    .set("fill-opacity", background.alpha()),
            );
        }

        for node in self.shapes.into_iter().chain(self.text) {
            doc = doc.add(node);
        }
        doc
    }

    /// Renders the document to a string.
    pub fn finish(self) -> String {
        let doc = self.into_document();
        format!("{doc}")
    }

    fn markers(&self) -> Definitions {
        let stroke = &self.palette.stroke;
        let filled = Marker::new()
            .set("id", FILLED_MARKER_ID)
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", stroke)
                    .set("fill-opacity", stroke.alpha()),
            );
        let open = Marker::new()
            .set("id", OPEN_MARKER_ID)
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10")
                    .set("fill", "none")
                    .set("stroke", stroke)
                    .set("stroke-width", 1.5),
            );
        Definitions::new().add(filled).add(open)
    }

    fn stroke(&self, path: Path) -> Path {
        path.set("stroke", &self.palette.stroke)
            .set("stroke-opacity", self.palette.stroke.alpha())
            .set("stroke-width", 1)
    }
}

impl Canvas for SvgCanvas {
    fn draw_rect(&mut self, bounds: Bounds, kind: RectKind) {
        let fill = match kind {
            RectKind::Actor => Some(&self.palette.actor_fill),
            RectKind::Note => Some(&self.palette.note_fill),
            RectKind::Title | RectKind::Frame => None,
        };

        let mut rect = Rectangle::new()
            .set("x", bounds.min_x())
            .set("y", bounds.min_y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("stroke", &self.palette.stroke)
            .set("stroke-width", 1);
        rect = match fill {
            Some(color) => rect.set("fill", color).set("fill-opacity", color.alpha()),
            None => rect.set("fill", "none"),
        };
        self.shapes.push(Box::new(rect));
    }

    fn draw_cut_corner_rect(&mut self, bounds: Bounds, cut: f32) {
        let (x, y) = (bounds.min_x(), bounds.min_y());
        let (right, bottom) = (bounds.max_x(), bounds.max_y());
        let data = format!(
            "M {x} {y} L {right} {y} L {right} {} L {} {bottom} L {x} {bottom} z",
            bottom - cut,
            right - cut,
        );

        let fill = &self.palette.block_title_fill;
        let path = self
            .stroke(Path::new().set("d", data))
            .set("fill", fill)
            .set("fill-opacity", fill.alpha());
        self.shapes.push(Box::new(path));
    }

    fn draw_line(&mut self, from: Point, to: Point, style: LineStyle, arrow: Option<ArrowHead>) {
        let data = format!("M {} {} L {} {}", from.x(), from.y(), to.x(), to.y());
        let mut path = self.stroke(Path::new().set("d", data)).set("fill", "none");

        if style == LineStyle::Dashed {
            path = path.set("stroke-dasharray", "5,5");
        }
        if let Some(arrow) = arrow {
            let id = match arrow {
                ArrowHead::Filled => FILLED_MARKER_ID,
                ArrowHead::Open => OPEN_MARKER_ID,
            };
            path = path.set("marker-end", format!("url(#{id})"));
        }
        self.shapes.push(Box::new(path));
    }

    fn draw_text(&mut self, position: Point, text: &str, align: TextAlign) {
        let anchor = match align {
            TextAlign::Start => "start",
            TextAlign::Middle => "middle",
        };
        let font_size = f32::from(self.font.size());

        let mut rendered = Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", anchor)
            .set("dominant-baseline", "hanging")
            .set("font-family", self.font.family())
            .set("font-size", font_size)
            .set("fill", &self.palette.text)
            .set("fill-opacity", self.palette.text.alpha());

        for (index, line) in text.lines().enumerate() {
            let dy = if index == 0 { 0.0 } else { font_size * LINE_HEIGHT };
            let tspan = TSpan::new("")
                .set("x", position.x())
                .set("dy", dy)
                .add(SvgText::new(line));
            rendered = rendered.add(tspan);
        }
        self.text.push(Box::new(rendered));
    }
}
