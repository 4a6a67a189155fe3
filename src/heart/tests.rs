use super::*;
use crate::draw::color::*;

fn measured_renderer(width: f64, height: f64) -> HeartRenderer {
    let mut renderer = HeartRenderer::new(DisplayMetrics::with_density(1.0));
    renderer.measure(MeasureSpec::Exactly(width), MeasureSpec::Exactly(height));
    renderer.refresh();
    renderer
}

fn gradient_renderer() -> HeartRenderer {
    let mut renderer = measured_renderer(322.0, 284.0);
    renderer.set_fill_color(WHITE);
    renderer.set_edge_color(RED);
    renderer.refresh();
    renderer
}

#[test]
fn test_refresh_is_noop_before_measure() {
    let mut renderer = HeartRenderer::default();
    assert!(renderer.set_fill_color(BLUE));
    assert!(!renderer.refresh());
    assert!(renderer.geometry().is_none());
    assert_eq!(renderer.layout_generation(), 0);
    assert!(renderer.paint().is_empty());
}

#[test]
fn test_measure_enables_layout() {
    let mut renderer = HeartRenderer::default();
    assert!(renderer.needs_measure());
    renderer.measure(MeasureSpec::Exactly(300.0), MeasureSpec::Exactly(300.0));
    assert!(!renderer.needs_measure());
    assert!(renderer.refresh());
    let geometry = renderer.geometry().expect("geometry after measure");
    assert!((geometry.scale - 300.0 / 322.0).abs() < 1e-12);
}

#[test]
fn test_unchanged_setters_do_not_recompute() {
    let mut renderer = gradient_renderer();
    let generation = renderer.layout_generation();
    let before = renderer.geometry().cloned();
    renderer.take_redraw_request();

    let props = renderer.properties().clone();
    assert!(!renderer.set_fill_color(props.fill_color));
    assert!(!renderer.set_edge_color(props.edge_color));
    assert!(!renderer.set_stroke_color(props.stroke_color));
    assert!(!renderer.set_stroke_width(props.stroke_width, Unit::Px));
    assert!(!renderer.set_gradient_center(props.center.0, props.center.1));
    assert!(!renderer.set_gradient_center_x(props.center.0));
    assert!(!renderer.set_gradient_center_y(props.center.1));
    assert!(!renderer.set_radius_percent(props.radius_percent));
    assert!(!renderer.set_uniform_padding(0.0, Unit::Px));
    assert!(!renderer.set_size_basis(props.size_basis));

    assert!(!renderer.needs_layout());
    assert!(!renderer.take_redraw_request());
    assert!(!renderer.refresh());
    assert_eq!(renderer.layout_generation(), generation);
    assert_eq!(renderer.geometry().cloned(), before);
}

#[test]
fn test_changed_setter_recomputes_once() {
    let mut renderer = gradient_renderer();
    let generation = renderer.layout_generation();

    assert!(renderer.set_radius_percent(0.5));
    assert!(renderer.needs_layout());
    assert!(renderer.needs_redraw());
    assert!(renderer.refresh());
    assert!(!renderer.refresh());
    assert_eq!(renderer.layout_generation(), generation + 1);

    let gradient = renderer.geometry().and_then(|g| g.gradient).expect("gradient");
    let expected = (161.0f64.powi(2) + 142.0f64.powi(2)).sqrt() * 0.5;
    assert!((gradient.radius - expected).abs() < 1e-9);
}

#[test]
fn test_same_size_remeasure_keeps_geometry() {
    let mut renderer = gradient_renderer();
    let generation = renderer.layout_generation();
    let before = renderer.paint();

    let size = renderer.measure(MeasureSpec::Exactly(322.0), MeasureSpec::Exactly(284.0));
    assert_eq!(
        size,
        Size {
            width: 322.0,
            height: 284.0
        }
    );
    assert!(!renderer.needs_layout());
    assert!(!renderer.refresh());
    assert_eq!(renderer.layout_generation(), generation);
    assert_eq!(renderer.paint(), before);
}

#[test]
fn test_resize_recomputes_geometry_once() {
    let mut renderer = gradient_renderer();
    let generation = renderer.layout_generation();
    let before = renderer.geometry().cloned().expect("geometry");
    assert!((before.scale - 1.0).abs() < 1e-12);

    renderer.measure(MeasureSpec::Exactly(644.0), MeasureSpec::Exactly(568.0));
    assert!(renderer.needs_layout());
    assert!(renderer.refresh());
    assert!(!renderer.refresh());
    assert_eq!(renderer.layout_generation(), generation + 1);

    let after = renderer.geometry().cloned().expect("geometry");
    assert!((after.scale - 2.0).abs() < 1e-12);
    // Outline-local radius is scale-invariant; on the canvas it doubles.
    let canvas_radius = |g: &CachedGeometry| g.gradient.expect("gradient").radius * g.scale;
    let expected = (322.0f64.powi(2) + 284.0f64.powi(2)).sqrt();
    assert!((canvas_radius(&before) - expected / 2.0).abs() < 1e-9);
    assert!((canvas_radius(&after) - expected).abs() < 1e-9);
}

#[test]
fn test_pure_redraw_keeps_gradient() {
    let mut renderer = gradient_renderer();
    let generation = renderer.layout_generation();
    let first = renderer.paint();
    let second = renderer.paint();
    assert_eq!(first, second);
    assert_eq!(renderer.layout_generation(), generation);
}

#[test]
fn test_stroke_color_only_requests_redraw() {
    let mut renderer = gradient_renderer();
    renderer.take_redraw_request();
    let generation = renderer.layout_generation();

    assert!(renderer.set_stroke_color(Color::new(0.0, 0.0, 1.0, 0.5)));
    assert!(!renderer.needs_layout());
    assert!(renderer.take_redraw_request());
    renderer.paint();
    assert_eq!(renderer.layout_generation(), generation);
}

#[test]
fn test_stroke_width_uses_display_metrics() {
    let mut renderer = HeartRenderer::new(DisplayMetrics::with_density(3.0));
    assert_eq!(renderer.metrics().density, 3.0);
    renderer.set_stroke_width(2.0, Unit::Dip);
    assert_eq!(renderer.properties().stroke_width, 6.0);
}

#[test]
fn test_padding_rounds_to_pixels_and_invalidates_measure() {
    let mut renderer = HeartRenderer::new(DisplayMetrics::with_density(1.5));
    renderer.measure(MeasureSpec::Exactly(100.0), MeasureSpec::Exactly(100.0));
    assert!(renderer.set_padding(1.0, 2.0, 3.0, 4.0, Unit::Dip));
    assert_eq!(
        renderer.properties().padding,
        Padding {
            left: 2.0,
            top: 3.0,
            right: 5.0,
            bottom: 6.0,
        }
    );
    assert!(renderer.needs_measure());
    assert!(renderer.needs_layout());
}

#[test]
fn test_size_basis_width_keeps_aspect_ratio() {
    let mut renderer = HeartRenderer::default();
    renderer.set_size_basis(SizeBasis::Width);
    let size = renderer.measure(MeasureSpec::Exactly(644.0), MeasureSpec::Exactly(10.0));
    assert_eq!(size.width, 644.0);
    assert!((size.height - 644.0 * 284.0 / 322.0).abs() < 1e-9);
}

#[test]
fn test_unspecified_measure_uses_intrinsic_minimum() {
    let mut renderer = HeartRenderer::new(DisplayMetrics::with_density(2.0));
    let size = renderer.measure(MeasureSpec::Unspecified, MeasureSpec::AtMost(800.0));
    assert_eq!(size, Size { width: 48.0, height: 42.0 });
}

#[test]
fn test_touch_maps_to_normalized_center() {
    let mut renderer = measured_renderer(200.0, 100.0);
    assert!(renderer.touch(150.0, 0.0));
    assert_eq!(renderer.properties().center, (0.5, -1.0));
    assert!(!renderer.touch(150.0, 0.0));
}

#[test]
fn test_touch_before_measure_is_ignored() {
    let mut renderer = HeartRenderer::default();
    assert!(!renderer.touch(10.0, 10.0));
    assert_eq!(renderer.properties().center, (0.0, 0.0));
}

#[test]
fn test_flat_fill_when_colors_match() {
    let mut renderer = measured_renderer(322.0, 284.0);
    renderer.set_gradient_center(0.9, -0.4);
    renderer.set_radius_percent(0.3);
    let list = renderer.paint();
    assert_eq!(list.fill(), Some(&Fill::Solid(RED)));
}

#[test]
fn test_gradient_fill_when_colors_differ() {
    let mut renderer = gradient_renderer();
    let list = renderer.paint();
    match list.fill() {
        Some(Fill::Radial(gradient)) => {
            assert_eq!(gradient.inner, WHITE);
            assert_eq!(gradient.outer, RED);
        }
        other => panic!("expected radial fill, got {other:?}"),
    }
}

#[test]
fn test_zero_stroke_skips_layer() {
    let mut renderer = measured_renderer(322.0, 284.0);
    renderer.set_stroke_color(BLUE);
    let list = renderer.paint();
    assert_eq!(list.ops.len(), 1);
    assert!(!list.opens_layer());
}

#[test]
fn test_stroke_emits_silhouette_sequence() {
    let mut renderer = measured_renderer(342.0, 304.0);
    renderer.set_stroke_width(10.0, Unit::Px);
    renderer.set_stroke_color(Color::new(0.0, 0.0, 1.0, 0.25));
    let list = renderer.paint();

    assert_eq!(list.translate, (171.0, 152.0));
    assert_eq!(list.ops.len(), 5);
    assert!(matches!(list.ops[0], DrawOp::FillOutline { .. }));
    assert_eq!(
        list.ops[1],
        DrawOp::BeginLayer {
            bounds: LayerBounds {
                left: -171.0,
                top: -152.0,
                right: 171.0,
                bottom: 152.0,
            },
            alpha: 0.25,
        }
    );
    match list.ops[2] {
        DrawOp::StrokeAndFillOutline {
            scale,
            color,
            line_width,
        } => {
            assert!((scale - 1.0).abs() < 1e-12);
            assert_eq!(color, Color::new(0.0, 0.0, 1.0, 1.0));
            assert!((line_width - 20.0).abs() < 1e-9);
        }
        other => panic!("unexpected op {other:?}"),
    }
    assert!(matches!(list.ops[3], DrawOp::EraseOutline { .. }));
    assert_eq!(list.ops[4], DrawOp::EndLayer);
}

#[test]
fn test_non_positive_scale_draws_nothing() {
    let mut renderer = measured_renderer(10.0, 10.0);
    renderer.set_fill_color(WHITE);
    renderer.set_stroke_width(20.0, Unit::Px);
    let list = renderer.paint();
    assert!(list.is_empty());
    assert!(renderer.geometry().is_some_and(|g| g.gradient.is_none()));
}

#[test]
fn test_apply_style_sets_all_attributes() {
    let style = HeartStyle {
        size_basis: SizeBasis::Height,
        color: crate::config::ColorSpec::Name("white".into()),
        edge_color: crate::config::ColorSpec::Name("#FF0000FF".into()),
        stroke_color: crate::config::ColorSpec::Rgba([0, 255, 0, 128]),
        center_x: -0.5,
        center_y: -0.5,
        radius: 0.8,
        stroke_width: 2.0,
        padding: 4.0,
    };
    let renderer = HeartRenderer::from_style(&style, DisplayMetrics::with_density(2.0));
    let props = renderer.properties();
    assert_eq!(props.size_basis, SizeBasis::Height);
    assert_eq!(props.fill_color, WHITE);
    assert_eq!(props.edge_color, BLUE);
    assert_eq!(props.stroke_color, Color::from_rgba8(0, 255, 0, 128));
    assert_eq!(props.center, (-0.5, -0.5));
    assert_eq!(props.radius_percent, 0.8);
    assert_eq!(props.stroke_width, 4.0);
    assert_eq!(props.padding, Padding::uniform(8.0));
}
