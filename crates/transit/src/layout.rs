//! Layout engine for sequence diagrams.
//!
//! Layout runs in three passes over a built [`Diagram`]:
//!
//! ```text
//! measure    text sizes, box sizes, vertical offsets, actor distances
//!    ↓
//! spacing    relax actor x-positions left to right
//!    ↓
//! placement  final bounds for actors, statements, blocks and the title
//! ```
//!
//! The engine writes every result back into the diagram, so running it again
//! on the same diagram gives the same geometry.

mod measure;
mod placement;
mod spacing;

use log::{debug, info};
use thiserror::Error;

use transit_core::{
    geometry::{Insets, Size},
    model::Diagram,
    text::TextMetrics,
};

use crate::config::LayoutConfig;

use measure::Measurer;

/// Errors raised while laying out a diagram.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    #[error("text metrics returned a non-finite size {width} x {height} for `{text}`")]
    NonFiniteMeasurement {
        text: String,
        width: f32,
        height: f32,
    },
}

/// Computes positions and sizes for every part of a diagram.
pub struct Engine<'a> {
    config: LayoutConfig,
    metrics: &'a dyn TextMetrics,
}

impl<'a> Engine<'a> {
    pub fn new(config: LayoutConfig, metrics: &'a dyn TextMetrics) -> Self {
        Self { config, metrics }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out `diagram` in place.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::NonFiniteMeasurement`] if the text metrics
    /// report a NaN or infinite size for any label.
    pub fn layout(&self, diagram: &mut Diagram) -> Result<(), LayoutError> {
        let mut measurer = Measurer::new(&self.config, self.metrics, diagram);
        let title_size = measurer.measure_title(diagram)?;
        let actors_height = measurer.measure_actors(diagram)?;
        for child in diagram.timeline().to_vec() {
            measurer.visit(diagram, child)?;
        }
        let extents = measurer.finish();
        debug!(
            actors_height,
            signals_height = extents.signals_height();
            "Measured diagram"
        );

        let actors_width = spacing::relax_actors(diagram);
        debug!(actors_width; "Relaxed actor positions");

        let title_width = title_size.map_or(0.0, Size::width);
        let title_height = title_size.map_or(0.0, Size::height);
        let margin = self.config.diagram_margin;
        let size = Size::new(
            actors_width.max(title_width),
            title_height + 2.0 * actors_height + extents.signals_height(),
        )
        .add_padding(Insets::uniform(margin));

        diagram.set_actors_height(actors_height);
        diagram.set_signals_height(extents.signals_height());
        diagram.set_size(size);
        placement::place(&self.config, diagram, title_size, &extents);

        info!(width = size.width(), height = size.height(); "Layout complete");
        Ok(())
    }
}

/// Measures `text`, rejecting sizes that cannot be placed.
fn measure_text(
    metrics: &dyn TextMetrics,
    config: &LayoutConfig,
    text: &str,
) -> Result<Size, LayoutError> {
    let size = metrics.measure(text, &config.font);
    if !size.is_finite() {
        return Err(LayoutError::NonFiniteMeasurement {
            text: text.to_string(),
            width: size.width(),
            height: size.height(),
        });
    }
    Ok(size)
}
