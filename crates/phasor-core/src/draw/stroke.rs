//! Stroke definitions.
//!
//! [`StrokeDefinition`] bundles the stroke color, width and line cap of a
//! drawable. The [`apply_stroke!`](crate::apply_stroke!) macro writes all of
//! them onto an SVG element at once.
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#cccccc"`, `1` |
//! | `width` | `stroke-width` | `3` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"` |

use crate::color::Color;

/// Defines how line endpoints are rendered.
///
/// Maps directly to SVG `stroke-linecap` attribute values.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    /// Flat cap at the exact endpoint (SVG default)
    #[default]
    Butt,
    /// Rounded cap extending beyond the endpoint by half the stroke width
    Round,
}

impl StrokeCap {
    /// Returns the SVG stroke-linecap value
    pub fn to_svg_value(&self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
        }
    }
}

/// A stroke definition for rendering lines and outlines.
///
/// # Examples
///
/// ```
/// use phasor_core::draw::{StrokeCap, StrokeDefinition};
/// use phasor_core::color::Color;
///
/// let stroke = StrokeDefinition::new(Color::new("#cc4444").unwrap(), 3.0)
///     .with_cap(StrokeCap::Round);
/// assert_eq!(stroke.width(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    cap: StrokeCap,
}

impl StrokeDefinition {
    /// Creates a new stroke with the given color and width and a butt cap.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: StrokeCap::default(),
        }
    }

    /// Creates a stroke with rounded line caps.
    pub fn round(color: Color, width: f32) -> Self {
        Self::new(color, width).with_cap(StrokeCap::Round)
    }

    /// Returns this stroke with a different cap.
    pub fn with_cap(mut self, cap: StrokeCap) -> Self {
        self.cap = cap;
        self
    }

    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the stroke width.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the stroke cap style.
    pub fn cap(&self) -> StrokeCap {
        self.cap
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// # Examples
///
/// ```
/// use phasor_core::draw::StrokeDefinition;
/// use phasor_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::round(Color::new("black").unwrap(), 2.0);
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0);
///
/// let line = phasor_core::apply_stroke!(line, &stroke);
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        $element
            .set("stroke", &$stroke.color())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
    }};
}
