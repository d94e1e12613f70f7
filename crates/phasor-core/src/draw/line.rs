//! Straight line segments.

use svg::node::element as svg_element;

use crate::{
    apply_stroke,
    draw::{Drawable, StrokeDefinition, SvgNode},
    geometry::Point,
};

/// A stroked segment between two absolute points.
///
/// # Examples
///
/// ```
/// # use phasor_core::draw::{Drawable, Line, StrokeDefinition};
/// # use phasor_core::geometry::Point;
/// let line = Line::new(
///     Point::new(0.0, 0.0),
///     Point::new(30.0, 40.0),
///     StrokeDefinition::default(),
/// );
/// assert_eq!(line.length(), 50.0);
/// let _node = line.render_to_svg();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point,
    end: Point,
    stroke: StrokeDefinition,
}

impl Line {
    /// Creates a new line from `start` to `end`.
    pub fn new(start: Point, end: Point, stroke: StrokeDefinition) -> Self {
        Self { start, end, stroke }
    }

    /// Returns the starting point.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the end point.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns the stroke definition.
    pub fn stroke(&self) -> &StrokeDefinition {
        &self.stroke
    }

    /// Returns the segment length.
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }
}

impl Drawable for Line {
    fn render_to_svg(&self) -> SvgNode {
        let line = svg_element::Line::new()
            .set("x1", self.start.x())
            .set("y1", self.start.y())
            .set("x2", self.end.x())
            .set("y2", self.end.y());

        Box::new(apply_stroke!(line, &self.stroke))
    }
}
