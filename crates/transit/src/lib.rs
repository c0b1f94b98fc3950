//! # Transit
//!
//! Sequence diagrams from plain text.
//!
//! ```text
//! Source Text
//!     ↓ parse (transit-parser)
//! Diagram
//!     ↓ layout
//! Diagram with geometry
//!     ↓ render
//! SVG
//! ```
//!
//! [`SequenceRenderer`] runs the whole pipeline. The stages are public too:
//! build a [`Diagram`](model::Diagram) by hand with
//! [`DiagramBuilder`](builder::DiagramBuilder), lay it out with
//! [`layout::Engine`], and draw it onto any [`render::Canvas`].

pub mod config;
pub mod export;
pub mod layout;
pub mod render;

mod error;

pub use transit_core::{builder, color, geometry, model, text};

pub use error::TransitError;

use log::{debug, info, trace};

use config::AppConfig;
use export::svg::SvgCanvas;
use model::Diagram;
use text::{CosmicTextMetrics, TextMetrics};

/// Parses, lays out and renders sequence diagrams.
///
/// # Examples
///
/// ```rust,no_run
/// use transit::{SequenceRenderer, config::AppConfig};
///
/// let renderer = SequenceRenderer::new(AppConfig::default());
///
/// let diagram = renderer.parse("Alice -> Bob: hello")
///     .expect("Failed to parse");
///
/// let svg = renderer.render_svg(&diagram)
///     .expect("Failed to render");
/// ```
pub struct SequenceRenderer {
    config: AppConfig,
    metrics: Box<dyn TextMetrics>,
}

impl Default for SequenceRenderer {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl SequenceRenderer {
    /// Create a renderer that measures text with the system fonts.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            metrics: Box::new(CosmicTextMetrics::new()),
        }
    }

    /// Replace the text measurement used during layout.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit::{SequenceRenderer, config::AppConfig, text::FixedWidthMetrics};
    ///
    /// let renderer = SequenceRenderer::new(AppConfig::default())
    ///     .with_metrics(FixedWidthMetrics::default());
    /// let diagram = renderer.parse("A -> B: hi").unwrap();
    /// assert!(renderer.render_svg(&diagram).unwrap().starts_with("<svg"));
    /// ```
    pub fn with_metrics(mut self, metrics: impl TextMetrics + 'static) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse source text into a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`TransitError::Parse`] with every diagnostic found.
    pub fn parse(&self, source: &str) -> Result<Diagram, TransitError> {
        info!("Parsing sequence diagram");
        let diagram = transit_parser::parse(source)
            .map_err(|err| TransitError::new_parse_error(err, source))?;
        trace!(diagram:?; "Parsed diagram");
        Ok(diagram)
    }

    /// Compute geometry for every part of `diagram` in place.
    ///
    /// # Errors
    ///
    /// Returns [`TransitError::Layout`] if a label cannot be measured.
    pub fn layout(&self, diagram: &mut Diagram) -> Result<(), TransitError> {
        let engine = layout::Engine::new(self.config.layout().clone(), self.metrics.as_ref());
        engine.layout(diagram)?;
        Ok(())
    }

    /// Lay out a copy of `diagram` and render it to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`TransitError::Layout`] for layout failures and
    /// [`TransitError::Config`] for invalid style colors.
    pub fn render_svg(&self, diagram: &Diagram) -> Result<String, TransitError> {
        let mut diagram = diagram.clone();
        self.layout(&mut diagram)?;
        debug!(width = diagram.width(), height = diagram.height(); "Rendering SVG");

        let layout_config = self.config.layout();
        let size = geometry::Size::new(diagram.width(), diagram.height());
        let mut canvas = SvgCanvas::new(size, self.config.style(), layout_config.font.clone())
            .map_err(TransitError::Config)?;
        render::render(&diagram, layout_config, &mut canvas);

        info!("SVG rendered");
        Ok(canvas.finish())
    }
}
