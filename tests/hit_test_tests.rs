use chart_sync::core::{PlotArea, PointRef, Series, SeriesKind, Viewport};
use chart_sync::render::NullRenderer;
use chart_sync::{InteractionEngine, InteractionEngineConfig};

fn build_engine() -> InteractionEngine<NullRenderer> {
    let config = InteractionEngineConfig::new(Viewport::new(1000, 500), 0.0, 10.0)
        .with_y_domain(0.0, 10.0)
        .with_plot_area(PlotArea::new(100.0, 0.0, 800.0, 500.0));
    let mut engine = InteractionEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .add_series(Series::new("low", SeriesKind::Line).with_values(&[1.0, 1.0, 1.0]))
        .expect("low");
    engine
        .add_series(Series::new("high", SeriesKind::Line).with_values(&[8.0, 8.0, 8.0]))
        .expect("high");
    engine
}

#[test]
fn nearest_point_within_radius_wins() {
    let engine = build_engine();
    // "high" index 2 is drawn at (100 + 160, 100).
    assert_eq!(
        engine.hit_test_point(262.0, 103.0, 8.0),
        Some(PointRef::new("high", 2))
    );
    assert_eq!(
        engine.hit_test_point(180.0, 452.0, 8.0),
        Some(PointRef::new("low", 1))
    );
}

#[test]
fn misses_outside_radius() {
    let engine = build_engine();
    assert_eq!(engine.hit_test_point(500.0, 250.0, 8.0), None);
    assert_eq!(engine.hit_test_point(f64::NAN, 250.0, 8.0), None);
    assert_eq!(engine.hit_test_point(260.0, 100.0, -1.0), None);
}

#[test]
fn hidden_points_are_not_hit() {
    let mut engine = build_engine();
    engine.set_x_extremes(1.5, 10.0).expect("zoom");
    // index 0 now lies left of the plot area.
    assert_eq!(engine.hit_test_point(100.0, 100.0, 500.0), Some(PointRef::new("high", 2)));
}
