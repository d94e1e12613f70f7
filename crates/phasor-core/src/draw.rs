//! Drawing primitives for phasor diagrams.
//!
//! Every primitive carries its own absolute geometry and color, so a scene
//! built from them fully describes the picture. The [`Drawable`] trait turns
//! a primitive into an SVG node.
//!
//! - [`Line`] - A straight stroked segment (axes, vectors)
//! - [`Circle`] - A stroked, optionally filled circle (reference circle)
//! - [`Text`] - A filled text label
//! - [`StrokeDefinition`] - Stroke color, width and cap

mod circle;
mod line;
mod stroke;
mod text;

pub use circle::Circle;
pub use line::Line;
pub use stroke::{StrokeCap, StrokeDefinition};
pub use text::{Text, TextDefinition};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// A primitive that can render itself to SVG.
pub trait Drawable: std::fmt::Debug {
    /// Renders this primitive to a standalone SVG node.
    fn render_to_svg(&self) -> SvgNode;
}
