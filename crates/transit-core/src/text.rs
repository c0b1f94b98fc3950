//! Text measurement for diagram labels.
//!
//! Layout never measures glyphs itself. It asks a [`TextMetrics`]
//! implementation for the bounding box of a string rendered in a [`Font`].
//!
//! - [`CosmicTextMetrics`] shapes text with real system fonts via cosmic-text.
//! - [`FixedWidthMetrics`] uses a fixed advance per character, which keeps
//!   layouts reproducible across machines (tests, headless environments).
//!
//! # Quick Start
//!
//! ```
//! # use transit_core::text::{FixedWidthMetrics, Font, TextMetrics};
//! let metrics = FixedWidthMetrics::default();
//! let size = metrics.measure("hello", &Font::default());
//! assert!(size.width() > 0.0);
//! ```

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use serde::Deserialize;

use crate::geometry::Size;

/// Font selection used for measuring and drawing text.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Arial"` |
/// | Font size | `15` |
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Font {
    family: String,
    size: u16,
}

impl Font {
    /// Creates a font from a family name and a size in points.
    pub fn new(family: impl Into<String>, size: u16) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }

    /// Returns the font family name.
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the font size in points.
    pub fn size(&self) -> u16 {
        self.size
    }
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 15,
        }
    }
}

/// Measures the bounding box of text rendered in a font.
///
/// Implementations must be deterministic for a given text and font: the
/// layout engine assumes measuring the same string twice yields the same
/// size.
pub trait TextMetrics {
    /// Returns the width and height of `text` rendered with `font`.
    ///
    /// Multi-line text (separated by `\n`) is as wide as its widest line and
    /// as tall as all lines together. Empty text measures as zero.
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// Deterministic metrics with a fixed advance for every character.
///
/// Widths are `chars * font_size * advance` and heights are
/// `lines * font_size * line_height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidthMetrics {
    advance: f32,
    line_height: f32,
}

impl FixedWidthMetrics {
    /// Creates metrics with the given advance and line height, both
    /// expressed as multiples of the font size.
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }
}

impl Default for FixedWidthMetrics {
    fn default() -> Self {
        Self::new(0.5, 1.2)
    }
}

impl TextMetrics for FixedWidthMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let font_size = f32::from(font.size());
        let widest = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or_default();
        let lines = text.lines().count().max(1);

        Size::new(
            widest as f32 * font_size * self.advance,
            lines as f32 * font_size * self.line_height,
        )
    }
}

/// Metrics backed by cosmic-text shaping with the system font database.
///
/// The underlying [`FontSystem`] is expensive to create, so a single instance
/// is shared by every `CosmicTextMetrics` in the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosmicTextMetrics;

impl CosmicTextMetrics {
    pub fn new() -> Self {
        Self
    }
}

impl TextMetrics for CosmicTextMetrics {
    fn measure(&self, text: &str, font: &Font) -> Size {
        TEXT_MANAGER
            .get_or_init(TextManager::new)
            .calculate_text_size(text, font)
    }
}

/// Owns the shared FontSystem used for shaping.
struct TextManager {
    font_system: Mutex<FontSystem>,
}

impl TextManager {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Calculate the rendered size of text in pixels using cosmic-text.
    ///
    /// Falls back to an estimate of `0.55em` per character when shaping
    /// yields no layout runs (for example when no fonts are installed).
    fn calculate_text_size(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        // A panic while shaping leaves the font system usable.
        let mut font_system = self
            .font_system
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        // Points to pixels at standard DPI
        let font_size_px = f32::from(font.size()) * 1.33;
        let metrics = Metrics::new(font_size_px, font_size_px * 1.15);

        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(font.family()));
        buffer.set_size(None, None);
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if layout_runs.is_empty() {
            max_width = text.chars().count() as f32 * (font_size_px * 0.55);
            total_height = metrics.line_height;
        } else {
            for run in &layout_runs {
                if let Some(last) = run.glyphs.last() {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        }

        Size::new(max_width, total_height)
    }
}

static TEXT_MANAGER: OnceLock<TextManager> = OnceLock::new();
