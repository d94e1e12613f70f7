//! Text labels.
//!
//! - [`TextDefinition`] - Reusable font configuration
//! - [`Text`] - A positioned, colored label using a [`TextDefinition`]
//!
//! Font attributes left unset are omitted from the SVG so the viewer's
//! defaults apply.

use svg::node::{Text as SvgText, element as svg_element};

use crate::{
    color::Color,
    draw::{Drawable, SvgNode},
    geometry::Point,
};

/// Font configuration shared by labels.
///
/// # Examples
///
/// ```
/// # use phasor_core::draw::TextDefinition;
/// let mut style = TextDefinition::new();
/// style.set_font_family("Helvetica");
/// style.set_font_size(14);
/// assert_eq!(style.font_size(), Some(14));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextDefinition {
    font_family: Option<String>,
    font_size: Option<u16>,
}

impl TextDefinition {
    /// Creates a definition that leaves every font attribute to the viewer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the font size in points.
    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = Some(size);
    }

    /// Sets the font family for the text.
    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = Some(family.to_string());
    }

    /// Returns the configured font size.
    pub fn font_size(&self) -> Option<u16> {
        self.font_size
    }

    /// Returns the configured font family.
    pub fn font_family(&self) -> Option<&str> {
        self.font_family.as_deref()
    }
}

/// A text label anchored at an absolute position.
///
/// The position is the SVG text anchor point (start of the baseline).
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    definition: TextDefinition,
    content: String,
    position: Point,
    fill: Color,
}

impl Text {
    /// Creates a new label.
    pub fn new(
        definition: &TextDefinition,
        content: impl Into<String>,
        position: Point,
        fill: Color,
    ) -> Self {
        Self {
            definition: definition.clone(),
            content: content.into(),
            position,
            fill,
        }
    }

    /// Returns the label content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the anchor position.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }
}

impl Drawable for Text {
    fn render_to_svg(&self) -> SvgNode {
        let mut text = svg_element::Text::new("")
            .set("x", self.position.x())
            .set("y", self.position.y())
            .set("fill", &self.fill)
            .set("fill-opacity", self.fill.alpha());

        if let Some(family) = self.definition.font_family() {
            text = text.set("font-family", family);
        }
        if let Some(size) = self.definition.font_size() {
            text = text.set("font-size", size);
        }

        Box::new(text.add(SvgText::new(self.content.as_str())))
    }
}
