//! Integration tests for the DiagramBuilder API

use phasor::{
    DiagramBuilder, PhasorError, RenderOptions, Surface, config::AppConfig, export_svg,
    geometry::Size,
};

const THREE_PHASE: &str = "Va = 230 ∠ 0°\nVb = 230 ∠ −120°\nVc = 230 ∠ 120°";

fn small_builder() -> DiagramBuilder {
    let mut config = AppConfig::default();
    config.canvas_mut().set_container(Size::new(264.0, 264.0));
    DiagramBuilder::new(config)
}

#[test]
fn test_render_three_phase() {
    let builder = DiagramBuilder::default();
    let svg = builder
        .render_svg(THREE_PHASE, builder.default_options())
        .expect("Failed to render");

    assert!(svg.contains("<svg"), "Output should contain SVG tag");
    assert!(svg.contains("</svg>"), "Output should be complete SVG");
    for name in ["Va", "Vb", "Vc"] {
        assert!(svg.contains(name), "Missing label {name}");
    }
}

#[test]
fn test_recompute_is_idempotent() {
    let builder = small_builder();
    let options = builder.default_options();
    let mut surface = Surface::new();

    builder.recompute(&mut surface, THREE_PHASE, options).unwrap();
    let first = surface.markup().to_string();
    builder.recompute(&mut surface, THREE_PHASE, options).unwrap();

    assert_eq!(surface.markup(), first);
    assert_eq!(surface.scene().unwrap().vectors().count(), 3);
}

#[test]
fn test_recompute_replaces_previous_vectors() {
    let builder = small_builder();
    let options = builder.default_options();
    let mut surface = Surface::new();

    builder
        .recompute(&mut surface, "A=1∠0\nB=1∠90\nC=1∠180\nD=1∠270", options)
        .unwrap();
    builder.recompute(&mut surface, "E=2∠45", options).unwrap();

    let scene = surface.scene().unwrap();
    assert_eq!(scene.vectors().count(), 1);
    assert_eq!(scene.axes().count(), 2);
    assert!(scene.reference_circle().is_some());
}

#[test]
fn test_empty_input_draws_guides_only() {
    let builder = small_builder();
    let scene = builder
        .build_scene("\n   \n\t\n", builder.default_options())
        .unwrap();

    assert_eq!(scene.vectors().count(), 0);
    assert_eq!(scene.axes().count(), 2);
    assert_eq!(scene.reference_circle().unwrap().radius(), 100.0);
}

#[test]
fn test_palette_wraps_after_seven_vectors() {
    let builder = small_builder();
    let source = (1..=8)
        .map(|i| format!("V{i}={i}∠{}", i * 45))
        .collect::<Vec<_>>()
        .join("\n");

    let scene = builder
        .build_scene(&source, builder.default_options())
        .unwrap();
    let indices: Vec<_> = scene.vectors().map(|v| v.color_index()).collect();
    assert_eq!(indices, [0, 1, 2, 3, 4, 5, 6, 0]);

    let vectors: Vec<_> = scene.vectors().collect();
    assert_eq!(vectors[7].color(), vectors[0].color());
}

#[test]
fn test_toggles_off() {
    let builder = small_builder();
    let options = RenderOptions {
        show_labels: false,
        show_colors: false,
    };
    let scene = builder.build_scene(THREE_PHASE, options).unwrap();

    for vector in scene.vectors() {
        assert!(vector.label().is_none());
        assert_eq!(vector.color_index(), 0);
    }
}

#[test]
fn test_malformed_lines_sit_at_center() {
    let builder = small_builder();
    let scene = builder
        .build_scene("A=5∠0\nnoise\nB=abc∠30\nC=5", builder.default_options())
        .unwrap();

    let center = builder.canvas().center();
    let vectors: Vec<_> = scene.vectors().collect();
    assert_eq!(vectors.len(), 4);
    for vector in &vectors[1..] {
        assert_eq!(vector.tip(), center);
    }
    assert_eq!(vectors[0].tip().x(), center.x() + 100.0);
}

#[test]
fn test_export_round_trip() {
    let builder = small_builder();
    let mut surface = Surface::new();
    builder
        .recompute(&mut surface, THREE_PHASE, builder.default_options())
        .unwrap();

    let download = export_svg(&surface);
    assert_eq!(download.file_name(), "phasor-diagram.svg");
    assert!(download.href().starts_with("data:image/svg+xml;base64,"));
    assert_eq!(download.decode().unwrap(), surface.markup());
}

#[test]
fn test_invalid_palette_is_config_error() {
    let mut config = AppConfig::default();
    config
        .style_mut()
        .set_palette(vec!["definitely-not-a-color".to_string()]);
    let builder = DiagramBuilder::new(config);

    let result = builder.render_svg(THREE_PHASE, builder.default_options());
    assert!(matches!(result, Err(PhasorError::Config(_))));
}

#[test]
fn test_config_error_keeps_previous_surface() {
    let mut surface = Surface::new();
    small_builder()
        .recompute(&mut surface, THREE_PHASE, RenderOptions::default())
        .unwrap();
    let before = surface.markup().to_string();

    let mut config = AppConfig::default();
    config.style_mut().set_palette(Vec::new());
    let result = DiagramBuilder::new(config).recompute(
        &mut surface,
        "X=1∠0",
        RenderOptions::default(),
    );

    assert!(result.is_err());
    assert_eq!(surface.markup(), before);
}
