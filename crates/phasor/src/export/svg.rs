//! SVG backend.
//!
//! Draws a [`Scene`] into an [`svg::Document`]. Items are emitted in scene
//! order; each vector's label directly follows its line.

use log::debug;
use svg::Document;

use phasor_core::draw::{Drawable, SvgNode};

use crate::scene::{Scene, SceneItem};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Renders scenes to SVG documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct SvgBackend;

impl SvgBackend {
    /// Creates a new backend.
    pub fn new() -> Self {
        Self
    }

    /// Builds the SVG document for `scene`.
    pub fn render_document(&self, scene: &Scene) -> Document {
        let size = scene.size();
        let mut doc = Document::new()
            .set("xmlns", SVG_NAMESPACE)
            .set("width", size)
            .set("height", size)
            .set("viewBox", format!("0 0 {size} {size}"));

        for node in scene.items().iter().flat_map(Self::render_item) {
            doc = doc.add(node);
        }

        debug!(size, items = scene.items().len(); "SVG document rendered");
        doc
    }

    /// Renders `scene` to SVG markup.
    pub fn render_markup(&self, scene: &Scene) -> String {
        self.render_document(scene).to_string()
    }

    fn render_item(item: &SceneItem) -> Vec<SvgNode> {
        match item {
            SceneItem::Axis(line) => vec![line.render_to_svg()],
            SceneItem::ReferenceCircle(circle) => vec![circle.render_to_svg()],
            SceneItem::Vector(vector) => {
                let mut nodes = vec![vector.line().render_to_svg()];
                if let Some(label) = vector.label() {
                    nodes.push(label.render_to_svg());
                }
                nodes
            }
        }
    }
}
