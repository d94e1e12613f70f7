//! Circles.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, StrokeDefinition, SvgNode},
    geometry::Point,
};

/// A stroked, hollow circle.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
    stroke: StrokeDefinition,
}

impl Circle {
    /// Creates a circle.
    pub fn new(center: Point, radius: f32, stroke: StrokeDefinition) -> Self {
        Self {
            center,
            radius,
            stroke,
        }
    }

    /// Returns the center point.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the stroke definition.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }
}

impl Drawable for Circle {
    fn render_to_svg(&self) -> SvgNode {
        let circle = svg_element::Circle::new()
            .set("cx", self.center.x())
            .set("cy", self.center.y())
            .set("r", self.radius)
            .set("fill", "none");

        Box::new(apply_stroke!(circle, &self.stroke))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_render_to_svg() {
        let circle = Circle::new(Point::new(50.0, 50.0), 20.0, StrokeDefinition::default());
        assert_eq!(circle.center(), Point::new(50.0, 50.0));

        let markup = circle.render_to_svg().to_string();
        assert!(markup.starts_with("<circle"));
        assert!(markup.contains(r#"r="20""#));
        assert!(markup.contains(r#"fill="none""#));
    }
}
