//! Declarative scene construction.
//!
//! [`render`] turns a [`Layout`] into a [`Scene`]: an ordered list of
//! primitives with absolute geometry and colors. Building a scene touches no
//! drawing surface, so everything about placement and color can be checked
//! headlessly. The SVG backend in [`crate::export`] draws a scene.
//!
//! Scene order:
//!
//! 1. horizontal axis
//! 2. vertical axis
//! 3. reference circle
//! 4. one [`VectorShape`] per vector in input order (line, then label)

use log::{debug, trace};

use phasor_core::{
    color::Color,
    draw::{Circle, Line, StrokeDefinition, Text, TextDefinition},
    geometry::Point,
    palette::Palette,
};

use crate::layout::{Canvas, Layout, ParsedVector};

/// The two user toggles of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Draw each vector's name next to its tip.
    pub show_labels: bool,
    /// Give each vector its own palette color.
    pub show_colors: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_labels: true,
            show_colors: true,
        }
    }
}

/// Fixed visual parameters shared by every render pass.
#[derive(Debug, Clone)]
pub struct Style {
    palette: Palette,
    axis_color: Color,
    stroke_width: f32,
    label_padding: f32,
    text: TextDefinition,
}

impl Style {
    /// Creates a style.
    pub fn new(
        palette: Palette,
        axis_color: Color,
        stroke_width: f32,
        label_padding: f32,
        text: TextDefinition,
    ) -> Self {
        Self {
            palette,
            axis_color,
            stroke_width,
            label_padding,
            text,
        }
    }

    /// Returns the vector palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Returns the axis and reference circle color.
    pub fn axis_color(&self) -> Color {
        self.axis_color
    }

    /// Returns the vector stroke width.
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Returns the base label offset.
    pub fn label_padding(&self) -> f32 {
        self.label_padding
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(
            Palette::default(),
            Color::new(crate::config::DEFAULT_AXIS_COLOR).expect("default axis color is valid"),
            3.0,
            8.0,
            TextDefinition::new(),
        )
    }
}

/// A drawn vector: its line and optional label.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorShape {
    line: Line,
    label: Option<Text>,
    color_index: usize,
}

impl VectorShape {
    /// Returns the line from the center to the tip.
    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Returns the label, if labels were enabled.
    pub fn label(&self) -> Option<&Text> {
        self.label.as_ref()
    }

    /// Returns the vector color.
    pub fn color(&self) -> Color {
        self.line.stroke().color()
    }

    /// Returns the palette index the color came from.
    pub fn color_index(&self) -> usize {
        self.color_index
    }

    /// Returns the tip position on the surface.
    pub fn tip(&self) -> Point {
        self.line.end()
    }
}

/// One element of a [`Scene`].
#[derive(Debug, Clone, PartialEq)]
pub enum SceneItem {
    /// A light axis line.
    Axis(Line),
    /// The light reference circle the longest vector touches.
    ReferenceCircle(Circle),
    /// A vector with its optional label.
    Vector(VectorShape),
}

/// A complete, declarative description of one diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    size: f32,
    items: Vec<SceneItem>,
}

impl Scene {
    /// Returns the side length of the square surface.
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Returns every item in drawing order.
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    /// Returns the vectors in input order.
    pub fn vectors(&self) -> impl Iterator<Item = &VectorShape> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Vector(vector) => Some(vector),
            _ => None,
        })
    }

    /// Returns the axis lines.
    pub fn axes(&self) -> impl Iterator<Item = &Line> {
        self.items.iter().filter_map(|item| match item {
            SceneItem::Axis(line) => Some(line),
            _ => None,
        })
    }

    /// Returns the reference circle.
    pub fn reference_circle(&self) -> Option<&Circle> {
        self.items.iter().find_map(|item| match item {
            SceneItem::ReferenceCircle(circle) => Some(circle),
            _ => None,
        })
    }
}

/// Builds the scene for `layout` on `canvas`.
///
/// Colors come from a fresh palette cursor, so the result depends only on
/// the arguments: rendering the same input twice yields equal scenes.
pub fn render(layout: &Layout, canvas: &Canvas, style: &Style, options: RenderOptions) -> Scene {
    let center = canvas.center();
    let radius = canvas.radius();
    let guide = StrokeDefinition::round(style.axis_color, style.stroke_width / 2.0);

    let mut items = vec![
        SceneItem::Axis(Line::new(
            Point::new(center.x() - radius, center.y()),
            Point::new(center.x() + radius, center.y()),
            guide.clone(),
        )),
        SceneItem::Axis(Line::new(
            Point::new(center.x(), center.y() - radius),
            Point::new(center.x(), center.y() + radius),
            guide,
        )),
        SceneItem::ReferenceCircle(Circle::new(
            center,
            radius,
            StrokeDefinition::new(style.axis_color, style.stroke_width),
        )),
    ];

    let mut cursor = style.palette.cursor();
    for vector in layout.vectors() {
        let color_index = if options.show_colors { cursor.index() } else { 0 };
        let color = style.palette.get(color_index);
        let tip = layout.tip(vector, center);

        let line = Line::new(
            center,
            tip,
            StrokeDefinition::round(color, style.stroke_width),
        );
        let label = options.show_labels.then(|| {
            let position = tip.add_point(label_offset(vector, style.label_padding));
            Text::new(&style.text, vector.name().to_string(), position, color)
        });

        trace!(name:% = vector.name(), color_index; "Vector placed");
        items.push(SceneItem::Vector(VectorShape {
            line,
            label,
            color_index,
        }));

        if options.show_colors {
            cursor.advance();
        }
    }

    debug!(
        size = canvas.size(),
        radius,
        vectors = layout.vectors().len(),
        show_labels = options.show_labels,
        show_colors = options.show_colors;
        "Scene built"
    );

    Scene {
        size: canvas.size(),
        items,
    }
}

/// Pushes a label away from the center, leaving more room on the sides
/// where the text would otherwise overlap the line.
fn label_offset(vector: &ParsedVector, padding: f32) -> Point {
    let dx = if vector.x() > 0.0 { padding } else { -2.0 * padding };
    let dy = if vector.y() > 0.0 { -padding } else { 2.0 * padding };
    Point::new(dx, dy)
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;
    use phasor_core::geometry::Size;

    const BOTH: RenderOptions = RenderOptions {
        show_labels: true,
        show_colors: true,
    };

    fn canvas_with_radius_100() -> Canvas {
        Canvas::from_container(Size::new(264.0, 264.0), 64.0)
    }

    fn scene_for(source: &str, options: RenderOptions) -> Scene {
        let canvas = canvas_with_radius_100();
        let layout = crate::layout::layout(&phasor_parser::parse(source), canvas.radius());
        render(&layout, &canvas, &Style::default(), options)
    }

    #[test]
    fn test_guides_always_present() {
        let scene = scene_for("", BOTH);

        assert_eq!(scene.items().len(), 3);
        assert_eq!(scene.vectors().count(), 0);

        let axes: Vec<_> = scene.axes().collect();
        assert_eq!(axes.len(), 2);
        assert_eq!(axes[0].start(), Point::new(32.0, 132.0));
        assert_eq!(axes[0].end(), Point::new(232.0, 132.0));
        assert_eq!(axes[1].start(), Point::new(132.0, 32.0));
        assert_eq!(axes[1].end(), Point::new(132.0, 232.0));
        assert_eq!(axes[0].stroke().width(), 1.5);

        let circle = scene.reference_circle().unwrap();
        assert_eq!(circle.center(), Point::new(132.0, 132.0));
        assert_eq!(circle.radius(), 100.0);
        assert_eq!(circle.stroke().color(), Color::new("#cccccc").unwrap());
    }

    #[test]
    fn test_reference_example() {
        let scene = scene_for("A=5∠0\nB=5∠90°", BOTH);
        let palette = Palette::default();
        let vectors: Vec<_> = scene.vectors().collect();

        assert_eq!(vectors.len(), 2);
        assert!(approx_eq!(f32, vectors[0].tip().x(), 232.0, epsilon = 1e-3));
        assert!(approx_eq!(f32, vectors[0].tip().y(), 132.0, epsilon = 1e-3));
        assert!(approx_eq!(f32, vectors[1].tip().x(), 132.0, epsilon = 1e-3));
        assert!(approx_eq!(f32, vectors[1].tip().y(), 32.0, epsilon = 1e-3));

        assert_eq!(vectors[0].color(), palette.get(0));
        assert_eq!(vectors[1].color(), palette.get(1));
        assert_eq!(vectors[0].line().start(), Point::new(132.0, 132.0));
        assert_eq!(vectors[0].line().stroke().width(), 3.0);
    }

    #[test]
    fn test_colors_wrap_after_palette() {
        let source = (1..=8).map(|i| format!("V{i}={i}∠{}", i * 40)).collect::<Vec<_>>();
        let scene = scene_for(&source.join("\n"), BOTH);
        let vectors: Vec<_> = scene.vectors().collect();

        assert_eq!(vectors.len(), 8);
        for (i, vector) in vectors.iter().enumerate().take(7) {
            assert_eq!(vector.color_index(), i);
        }
        assert_eq!(vectors[7].color_index(), 0);
        assert_eq!(vectors[7].color(), vectors[0].color());
        assert_ne!(vectors[1].color(), vectors[0].color());
    }

    #[test]
    fn test_colors_disabled_uses_neutral() {
        let options = RenderOptions {
            show_labels: true,
            show_colors: false,
        };
        let scene = scene_for("A=1∠0\nB=1∠90\nC=1∠180", options);
        let neutral = Palette::default().neutral();

        for vector in scene.vectors() {
            assert_eq!(vector.color(), neutral);
            assert_eq!(vector.label().unwrap().fill(), neutral);
        }
    }

    #[test]
    fn test_labels_disabled() {
        let options = RenderOptions {
            show_labels: false,
            show_colors: true,
        };
        let scene = scene_for("A=1∠0\nB=1∠90", options);
        assert!(scene.vectors().all(|vector| vector.label().is_none()));
    }

    #[test]
    fn test_label_placement_by_quadrant() {
        let scene = scene_for("Q1=1∠45\nQ2=1∠135\nQ3=1∠225\nQ4=1∠315", BOTH);

        let offsets: Vec<_> = scene
            .vectors()
            .map(|vector| {
                let label = vector.label().unwrap().position();
                (
                    (label.x() - vector.tip().x()).round(),
                    (label.y() - vector.tip().y()).round(),
                )
            })
            .collect();

        assert_eq!(
            offsets,
            [(8.0, -8.0), (-16.0, -8.0), (-16.0, 16.0), (8.0, 16.0)]
        );
    }

    #[test]
    fn test_label_text_and_color_follow_vector() {
        let scene = scene_for("Va=1∠0\n7=1∠90", BOTH);
        let vectors: Vec<_> = scene.vectors().collect();

        assert_eq!(vectors[0].label().unwrap().content(), "Va");
        assert_eq!(vectors[1].label().unwrap().content(), "7");
        assert_eq!(vectors[1].label().unwrap().fill(), vectors[1].color());
    }

    #[test]
    fn test_degenerate_vector_sits_at_center() {
        let scene = scene_for("A=5∠0\nbad=five∠30", BOTH);
        let vectors: Vec<_> = scene.vectors().collect();

        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[1].tip(), Point::new(132.0, 132.0));
        assert_eq!(vectors[1].line().length(), 0.0);
    }

    #[test]
    fn test_render_is_deterministic() {
        let source = "A=5∠0\nB=3∠120\nC=x∠0";
        assert_eq!(scene_for(source, BOTH), scene_for(source, BOTH));
    }
}
