//! Configuration types for phasor diagram rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! TOML or any other serde format. Every field is optional in the source and
//! falls back to the defaults listed below.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining canvas and style settings.
//! - [`CanvasConfig`] - Container size and fixed drawing dimensions.
//! - [`StyleConfig`] - Palette, axis color, label font and default toggles.
//!
//! # Example
//!
//! ```
//! # use phasor::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().padding(), 64.0);
//! assert!(config.style().palette().is_ok());
//! ```

use serde::Deserialize;

use phasor_core::{
    color::Color,
    draw::TextDefinition,
    geometry::Size,
    palette::{DEFAULT_PALETTE, Palette},
};

use crate::scene::RenderOptions;

/// Default color of the axes and the reference circle.
pub const DEFAULT_AXIS_COLOR: &str = "#cccccc";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(canvas: CanvasConfig, style: StyleConfig) -> Self {
        Self { canvas, style }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns a mutable reference to the canvas configuration.
    pub fn canvas_mut(&mut self) -> &mut CanvasConfig {
        &mut self.canvas
    }

    /// Returns a mutable reference to the style configuration.
    pub fn style_mut(&mut self) -> &mut StyleConfig {
        &mut self.style
    }
}

/// Container size and fixed drawing dimensions, in pixels.
///
/// | Key | Default |
/// |-----|---------|
/// | `width` | `640` |
/// | `height` | `640` |
/// | `padding` | `64` |
/// | `stroke_width` | `3` |
/// | `label_padding` | `8` |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    width: f32,
    height: f32,
    padding: f32,
    stroke_width: f32,
    label_padding: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 640.0,
            padding: 64.0,
            stroke_width: 3.0,
            label_padding: 8.0,
        }
    }
}

impl CanvasConfig {
    /// Returns the container size the square surface must fit in.
    pub fn container(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Sets the container size.
    pub fn set_container(&mut self, container: Size) {
        self.width = container.width();
        self.height = container.height();
    }

    /// Returns the room left around the reference circle.
    pub fn padding(&self) -> f32 {
        self.padding
    }

    /// Returns the vector stroke width. Axes use half of it.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns the base label offset from a vector tip.
    pub fn label_padding(&self) -> f32 {
        self.label_padding
    }

    /// Checks that every dimension is a usable number.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("stroke_width", self.stroke_width),
            ("label_padding", self.label_padding),
        ];

        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(format!(
                    "canvas `{name}` must be a non-negative number, got {value}"
                ));
            }
        }
        Ok(())
    }
}

/// Visual styling configuration.
///
/// Colors are CSS color strings. Unset values fall back to the defaults:
/// the seven-color [`DEFAULT_PALETTE`], [`DEFAULT_AXIS_COLOR`], viewer
/// default fonts, and both toggles on.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    palette: Option<Vec<String>>,
    axis_color: Option<String>,
    font_family: Option<String>,
    font_size: Option<u16>,
    show_labels: bool,
    show_colors: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            palette: None,
            axis_color: None,
            font_family: None,
            font_size: None,
            show_labels: true,
            show_colors: true,
        }
    }
}

impl StyleConfig {
    /// Returns the parsed [`Palette`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured palette is empty or contains an
    /// invalid color.
    pub fn palette(&self) -> Result<Palette, String> {
        match &self.palette {
            Some(colors) => Palette::parse(colors),
            None => Palette::parse(&DEFAULT_PALETTE),
        }
        .map_err(|err| format!("Invalid palette in config: {err}"))
    }

    /// Returns the parsed axis and reference circle [`Color`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string is invalid.
    pub fn axis_color(&self) -> Result<Color, String> {
        Color::new(self.axis_color.as_deref().unwrap_or(DEFAULT_AXIS_COLOR))
            .map_err(|err| format!("Invalid axis color in config: {err}"))
    }

    /// Returns the label font configuration.
    pub fn text_definition(&self) -> TextDefinition {
        let mut definition = TextDefinition::new();
        if let Some(family) = &self.font_family {
            definition.set_font_family(family);
        }
        if let Some(size) = self.font_size {
            definition.set_font_size(size);
        }
        definition
    }

    /// Returns the default label and color toggles.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_labels: self.show_labels,
            show_colors: self.show_colors,
        }
    }

    /// Sets the configured palette.
    pub fn set_palette(&mut self, colors: Vec<String>) {
        self.palette = Some(colors);
    }
}
