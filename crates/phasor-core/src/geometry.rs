//! Geometric primitives for diagram layout and positioning.
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//!
//! # Coordinate System
//!
//! Diagram coordinates follow SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Vector offsets produced from magnitude and angle use the mathematical
//! convention (Y up). They are flipped when mapped onto the surface.

/// A 2D point representing a position or an offset.
///
/// # Examples
///
/// ```
/// # use phasor_core::geometry::Point;
/// let center = Point::new(100.0, 100.0);
/// let offset = Point::new(10.0, -5.0);
///
/// let moved = center.add_point(offset);
/// assert_eq!(moved.x(), 110.0);
/// assert_eq!(moved.y(), 95.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Mirrors the point across the x-axis.
    pub fn flip_y(self) -> Self {
        Self {
            x: self.x,
            y: -self.y,
        }
    }

    /// Calculates the hypotenuse (Euclidean distance from origin)
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between two points
    pub fn distance(self, other: Point) -> f32 {
        self.sub_point(other).hypot()
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the smaller of width and height
    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let p1 = Point::new(10.0, 20.0);
        let p2 = Point::new(5.0, 5.0);

        assert_eq!(p1.add_point(p2), Point::new(15.0, 25.0));
        assert_eq!(p1.sub_point(p2), Point::new(5.0, 15.0));
        assert_eq!(p1.flip_y(), Point::new(10.0, -20.0));
    }

    #[test]
    fn test_point_hypot() {
        assert!(approx_eq!(f32, Point::new(3.0, 4.0).hypot(), 5.0));
        assert!(approx_eq!(
            f32,
            Point::new(1.0, 1.0).distance(Point::new(4.0, 5.0)),
            5.0
        ));
    }

    #[test]
    fn test_size_min_side() {
        assert_eq!(Size::new(640.0, 480.0).min_side(), 480.0);
        assert_eq!(Size::new(200.0, 300.0).min_side(), 200.0);
    }

    proptest! {
        #[test]
        fn prop_flip_and_offset_keep_distance(
            x in -1000.0f32..1000.0,
            y in -1000.0f32..1000.0,
            dx in -1000.0f32..1000.0,
            dy in -1000.0f32..1000.0,
        ) {
            let origin = Point::new(x, y);
            let offset = Point::new(dx, dy);
            let tip = origin.add_point(offset.flip_y());

            prop_assert!((tip.distance(origin) - offset.hypot()).abs() <= 1e-2);
            prop_assert_eq!(tip.distance(origin), origin.distance(tip));
        }
    }
}
