//! Phasor - Render phasor diagrams from plain-text vector descriptions.
//!
//! Each non-blank input line names one vector in polar form, such as
//! `Va = 230 ∠ 0°`. The diagram draws every vector from a shared origin,
//! scaled so the longest one touches a reference circle, with optional
//! labels and palette colors.
//!
//! The pipeline runs in four stages:
//!
//! 1. [`phasor_parser::parse`] splits the text into [`phasor_parser::VectorLine`]s.
//! 2. [`layout()`] converts them to Cartesian offsets and picks the scale.
//! 3. [`render()`] builds a [`Scene`] of axes, reference circle and vectors.
//! 4. A [`Surface`] turns the scene into SVG markup, which [`export_svg`]
//!    packages as a data URI.
//!
//! [`DiagramBuilder`] wires the stages together from an [`AppConfig`].

pub mod config;

mod error;
mod export;
mod layout;
mod scene;
mod surface;

pub use phasor_core::{color, draw, geometry, palette};

pub use error::PhasorError;
pub use export::{
    download::{Download, export_svg},
    svg::SvgBackend,
};
pub use layout::{Canvas, Layout, ParsedVector, layout};
pub use scene::{RenderOptions, Scene, SceneItem, Style, VectorShape, render};
pub use surface::Surface;

use log::{debug, info, trace};

use phasor_parser::VectorLine;

use config::AppConfig;

/// Builder for parsing and rendering phasor diagrams.
///
/// # Examples
///
/// ```
/// use phasor::{DiagramBuilder, Surface, config::AppConfig};
///
/// let source = "Va = 230 ∠ 0°\nVb = 230 ∠ -120°\nVc = 230 ∠ 120°";
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// // One-shot rendering
/// let svg = builder
///     .render_svg(source, builder.default_options())
///     .expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
///
/// // Or keep a surface around and redraw it on every edit
/// let mut surface = Surface::new();
/// builder
///     .recompute(&mut surface, source, builder.default_options())
///     .expect("Failed to render");
/// assert_eq!(surface.markup(), svg);
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this builder renders with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the label and color toggles configured as defaults.
    pub fn default_options(&self) -> RenderOptions {
        self.config.style().render_options()
    }

    /// Returns the square canvas fitting the configured container.
    pub fn canvas(&self) -> Canvas {
        let canvas = self.config.canvas();
        Canvas::from_container(canvas.container(), canvas.padding())
    }

    /// Resolves the configured colors and dimensions into a [`Style`].
    ///
    /// # Errors
    ///
    /// Returns [`PhasorError::Config`] if a dimension is negative or not a
    /// number, or if a color does not parse.
    pub fn style(&self) -> Result<Style, PhasorError> {
        let canvas = self.config.canvas();
        let style = self.config.style();

        canvas.validate().map_err(PhasorError::Config)?;

        Ok(Style::new(
            style.palette().map_err(PhasorError::Config)?,
            style.axis_color().map_err(PhasorError::Config)?,
            canvas.stroke_width(),
            canvas.label_padding(),
            style.text_definition(),
        ))
    }

    /// Parse diagram text into vector lines.
    ///
    /// Never fails: blank lines are skipped and malformed lines are kept as
    /// zero vectors.
    pub fn parse(&self, source: &str) -> Vec<VectorLine> {
        info!("Parsing diagram");
        let lines = phasor_parser::parse(source);
        debug!(lines = lines.len(); "Diagram parsed");
        trace!(lines:?; "Parsed lines");
        lines
    }

    /// Runs the whole pipeline and returns the resulting scene.
    ///
    /// # Errors
    ///
    /// Returns [`PhasorError::Config`] if the configuration is invalid.
    pub fn build_scene(&self, source: &str, options: RenderOptions) -> Result<Scene, PhasorError> {
        let style = self.style()?;
        let canvas = self.canvas();

        let lines = self.parse(source);
        let layout = layout(&lines, canvas.radius());
        info!(
            vectors = layout.vectors().len(),
            scale = layout.scale(),
            size = canvas.size();
            "Layout calculated"
        );

        Ok(render(&layout, &canvas, &style, options))
    }

    /// Clears `surface` and redraws it from `source`.
    ///
    /// The surface only changes once the scene is built, so a configuration
    /// error leaves the previous drawing in place.
    ///
    /// # Errors
    ///
    /// Returns [`PhasorError::Config`] if the configuration is invalid.
    pub fn recompute(
        &self,
        surface: &mut Surface,
        source: &str,
        options: RenderOptions,
    ) -> Result<(), PhasorError> {
        let scene = self.build_scene(source, options)?;
        surface.draw(scene);
        info!("Surface recomputed");
        Ok(())
    }

    /// Renders `source` straight to SVG markup.
    ///
    /// # Errors
    ///
    /// Returns [`PhasorError::Config`] if the configuration is invalid.
    pub fn render_svg(&self, source: &str, options: RenderOptions) -> Result<String, PhasorError> {
        let scene = self.build_scene(source, options)?;
        let svg_string = SvgBackend::new().render_markup(&scene);
        info!("SVG rendered successfully");
        Ok(svg_string)
    }
}
