//! Scale normalization and vector placement.
//!
//! The layout stage turns parsed lines into Cartesian offsets and picks one
//! scale for the whole diagram: the longest vector reaches exactly the
//! reference circle. Vectors whose magnitude or angle is not a finite number
//! collapse to the origin; they are never dropped, so the vector count always
//! matches the number of input lines.
//!
//! Offsets use the mathematical orientation (positive angles turn
//! counter-clockwise, Y points up). [`Layout::tip`] maps them onto the
//! surface, where Y points down.

use log::{debug, trace};

use phasor_core::geometry::{Point, Size};
use phasor_parser::{Fragment, VectorLine};

/// The square drawing area derived from a container size.
///
/// The side is the smaller container dimension. The reference circle
/// leaves `padding` pixels of room (split between both sides) for labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    size: f32,
    padding: f32,
}

impl Canvas {
    /// Creates a canvas that fits inside `container`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use phasor::Canvas;
    /// # use phasor::geometry::Size;
    /// let canvas = Canvas::from_container(Size::new(800.0, 264.0), 64.0);
    /// assert_eq!(canvas.size(), 264.0);
    /// assert_eq!(canvas.radius(), 100.0);
    /// assert_eq!(canvas.center().x(), 132.0);
    /// ```
    pub fn from_container(container: Size, padding: f32) -> Self {
        Self {
            size: container.min_side().max(0.0),
            padding,
        }
    }

    /// Returns the side length of the square surface.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns the reference circle radius. Never negative.
    pub fn radius(&self) -> f32 {
        ((self.size - self.padding) / 2.0).max(0.0)
    }

    /// Returns the center of the surface.
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }
}

/// A vector converted to Cartesian form.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedVector {
    name: Fragment,
    x: f64,
    y: f64,
    magnitude: Option<f64>,
}

impl ParsedVector {
    /// Converts one parsed line. The angle is in degrees.
    ///
    /// A line whose magnitude or angle is missing, textual, NaN or infinite
    /// becomes a zero vector, even if the other field is valid.
    pub fn from_line(line: &VectorLine) -> Self {
        let magnitude = line.magnitude_value();
        let angle = line.angle_value();

        if !magnitude.is_finite() || !angle.is_finite() {
            trace!(name:% = line.name(); "Vector collapsed to origin");
            return Self {
                name: line.name().clone(),
                x: 0.0,
                y: 0.0,
                magnitude: None,
            };
        }

        let (sin, cos) = angle.to_radians().sin_cos();
        Self {
            name: line.name().clone(),
            x: magnitude * cos,
            y: magnitude * sin,
            magnitude: Some(magnitude),
        }
    }

    /// Returns the name fragment, used as the label text.
    pub fn name(&self) -> &Fragment {
        &self.name
    }

    /// Returns the horizontal component, in input units.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the vertical component (Y up), in input units.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if the vector has zero length.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Returns the parsed magnitude, or `None` if the vector collapsed.
    pub fn magnitude(&self) -> Option<f64> {
        self.magnitude
    }
}

/// The positioned vectors of one render pass and their shared scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    scale: f64,
    max_magnitude: f64,
    vectors: Vec<ParsedVector>,
}

impl Layout {
    /// Returns the unit-to-pixel factor. Zero when no vector has a
    /// non-zero magnitude.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the largest absolute magnitude among the vectors that parsed.
    pub fn max_magnitude(&self) -> f64 {
        self.max_magnitude
    }

    /// Returns the vectors in input order.
    pub fn vectors(&self) -> &[ParsedVector] {
        &self.vectors
    }

    /// Returns the surface position of a vector's tip.
    pub fn tip(&self, vector: &ParsedVector, center: Point) -> Point {
        let offset = Point::new(
            (vector.x * self.scale) as f32,
            (vector.y * self.scale) as f32,
        );
        center.add_point(offset.flip_y())
    }
}

/// Lays out `lines` so that the longest vector has length `radius`.
///
/// # Examples
///
/// ```
/// # use phasor::layout;
/// let lines = phasor_parser::parse("A=5∠0\nB=2.5∠90");
/// let layout = layout(&lines, 100.0);
/// assert_eq!(layout.scale(), 20.0);
/// assert_eq!(layout.vectors().len(), 2);
/// ```
pub fn layout(lines: &[VectorLine], radius: f32) -> Layout {
    let vectors: Vec<_> = lines.iter().map(ParsedVector::from_line).collect();

    let max_magnitude = vectors
        .iter()
        .filter_map(ParsedVector::magnitude)
        .map(f64::abs)
        .fold(0.0, f64::max);

    let scale = if max_magnitude != 0.0 {
        f64::from(radius) / max_magnitude
    } else {
        0.0
    };
    // Subnormal magnitudes overflow the division
    let scale = if scale.is_finite() { scale } else { 0.0 };

    debug!(vectors = vectors.len(), max_magnitude, scale; "Layout calculated");

    Layout {
        scale,
        max_magnitude,
        vectors,
    }
}
