//! Configuration for layout spacing and drawing style.
//!
//! Every section deserializes with defaults, so a TOML file only needs the
//! keys it changes:
//!
//! ```toml
//! [layout]
//! actor_margin = 15
//! reserve_partition_labels = true
//!
//! [layout.font]
//! family = "Helvetica"
//! size = 13
//!
//! [style]
//! note_fill = "#fff8dc"
//! ```

use serde::Deserialize;

use transit_core::{color::Color, text::Font};

/// Application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    layout: LayoutConfig,

    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    pub fn new(layout: LayoutConfig, style: StyleConfig) -> Self {
        Self { layout, style }
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Spacing constants used by the layout engine.
///
/// Margins are gaps outside a box and paddings are gaps inside it. Every
/// box's width and height include both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Space around the whole diagram.
    pub diagram_margin: f32,

    pub actor_margin: f32,
    pub actor_padding: f32,

    pub signal_margin: f32,
    pub signal_padding: f32,

    pub block_margin: f32,

    pub block_title_margin: f32,
    pub block_title_padding: f32,

    /// Size of the cut corner on block title tabs.
    pub block_cut_corner: f32,

    /// Extra horizontal outset per level of block nesting.
    pub depth_padding: f32,

    pub note_margin: f32,
    pub note_padding: f32,

    /// How far a note over two actors reaches past their lifelines.
    pub note_overlap: f32,

    pub title_margin: f32,
    pub title_padding: f32,

    /// How far a self signal loops out to the right of its lifeline.
    pub self_signal_width: f32,

    /// Reserve vertical space for partition labels instead of letting the
    /// first statement of a partition share a row with its label.
    pub reserve_partition_labels: bool,

    /// Font used for every label.
    pub font: Font,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            diagram_margin: 10.0,
            actor_margin: 10.0,
            actor_padding: 10.0,
            signal_margin: 5.0,
            signal_padding: 5.0,
            block_margin: 5.0,
            block_title_margin: 2.0,
            block_title_padding: 2.0,
            block_cut_corner: 5.0,
            depth_padding: 5.0,
            note_margin: 10.0,
            note_padding: 5.0,
            note_overlap: 15.0,
            title_margin: 0.0,
            title_padding: 5.0,
            self_signal_width: 20.0,
            reserve_partition_labels: false,
            font: Font::default(),
        }
    }
}

/// Colors used when drawing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    background_color: Option<String>,
    stroke_color: String,
    text_color: String,
    actor_fill: String,
    note_fill: String,
    block_title_fill: String,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            stroke_color: "black".to_string(),
            text_color: "black".to_string(),
            actor_fill: "white".to_string(),
            note_fill: "#fffacd".to_string(),
            block_title_fill: "#eeeeee".to_string(),
        }
    }
}

impl StyleConfig {
    /// Returns a copy that paints the canvas with `color`.
    pub fn with_background_color(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    /// Returns the background color, or `None` for a transparent canvas.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("invalid background color in config: {err}"))
    }

    pub fn stroke_color(&self) -> Result<Color, String> {
        parse_color("stroke", &self.stroke_color)
    }

    pub fn text_color(&self) -> Result<Color, String> {
        parse_color("text", &self.text_color)
    }

    pub fn actor_fill(&self) -> Result<Color, String> {
        parse_color("actor fill", &self.actor_fill)
    }

    pub fn note_fill(&self) -> Result<Color, String> {
        parse_color("note fill", &self.note_fill)
    }

    pub fn block_title_fill(&self) -> Result<Color, String> {
        parse_color("block title fill", &self.block_title_fill)
    }
}

fn parse_color(what: &str, value: &str) -> Result<Color, String> {
    Color::new(value).map_err(|err| format!("invalid {what} color in config: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.diagram_margin, 10.0);
        assert_eq!(config.note_overlap, 15.0);
        assert_eq!(config.title_margin, 0.0);
        assert_eq!(config.self_signal_width, 20.0);
        assert!(!config.reserve_partition_labels);
        assert_eq!(config.font, Font::default());
    }

    #[test]
    fn test_style_defaults_are_valid_colors() {
        let style = StyleConfig::default();
        assert!(style.background_color().unwrap().is_none());
        assert!(style.stroke_color().is_ok());
        assert!(style.text_color().is_ok());
        assert!(style.actor_fill().is_ok());
        assert!(style.note_fill().is_ok());
        assert!(style.block_title_fill().is_ok());
    }

    #[test]
    fn test_invalid_color_is_reported() {
        let style = StyleConfig {
            stroke_color: "not-a-color".to_string(),
            ..StyleConfig::default()
        };
        let err = style.stroke_color().unwrap_err();
        assert!(err.contains("stroke"), "unexpected message: {err}");
    }
}
