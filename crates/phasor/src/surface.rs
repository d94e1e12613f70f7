//! The live drawing surface.
//!
//! A [`Surface`] holds the most recent scene and its SVG markup. Drawing
//! always starts from a cleared surface, so the markup never mixes two
//! render passes and an export reflects one complete render.

use log::debug;

use crate::{export::svg::SvgBackend, scene::Scene};

/// Holder of the last rendered diagram.
#[derive(Debug, Default, Clone)]
pub struct Surface {
    scene: Option<Scene>,
    markup: String,
}

impl Surface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes all content.
    pub fn clear(&mut self) {
        self.scene = None;
        self.markup.clear();
    }

    /// Replaces the content with `scene`.
    pub fn draw(&mut self, scene: Scene) {
        self.clear();
        self.markup = SvgBackend::new().render_markup(&scene);
        self.scene = Some(scene);
        debug!(bytes = self.markup.len(); "Surface redrawn");
    }

    /// Returns the scene currently drawn, if any.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Returns the current SVG markup. Empty until the first draw.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Returns `true` if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.scene.is_none()
    }
}
