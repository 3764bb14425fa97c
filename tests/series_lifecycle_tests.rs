use chart_sync::core::{PointRef, Series, SeriesId, SeriesKind, Viewport, parse_series_values};
use chart_sync::interaction::{DragPolicy, PointerEvent};
use chart_sync::render::NullRenderer;
use chart_sync::{InteractionEngine, InteractionEngineConfig};

fn build_engine() -> InteractionEngine<NullRenderer> {
    let config = InteractionEngineConfig::new(Viewport::new(800, 400), 0.0, 20.0)
        .with_y_domain(0.0, 50.0);
    InteractionEngine::new(NullRenderer::default(), config).expect("engine init")
}

#[test]
fn adding_same_id_twice_keeps_latest_data() {
    let mut engine = build_engine();
    engine
        .add_series(Series::new("t", SeriesKind::Line).with_values(&[1.0, 2.0]))
        .expect("first add");
    engine
        .add_series(Series::new("t", SeriesKind::Spline).with_values(&[3.0, 4.0, 5.0]))
        .expect("second add");

    assert_eq!(engine.series_ids(), vec![SeriesId::new("t")]);
    let series = engine.series(&SeriesId::new("t")).expect("series");
    assert_eq!(series.kind, SeriesKind::Spline);
    assert_eq!(series.len(), 3);
    assert_eq!(engine.total_point_count(), 3);

    let renderer = engine.renderer();
    assert_eq!(renderer.series.len(), 1);
    assert_eq!(renderer.removed_series, vec![SeriesId::new("t")]);
}

#[test]
fn replaced_series_moves_to_the_end() {
    let mut engine = build_engine();
    for id in ["a", "b", "c"] {
        engine
            .add_series(Series::new(id, SeriesKind::Line).with_values(&[1.0]))
            .expect("add");
    }
    engine
        .add_series(Series::new("a", SeriesKind::Line).with_values(&[2.0]))
        .expect("replace");

    assert_eq!(
        engine.series_ids(),
        vec![SeriesId::new("b"), SeriesId::new("c"), SeriesId::new("a")]
    );
}

#[test]
fn removing_unknown_series_is_a_no_op() {
    let mut engine = build_engine();
    engine
        .add_series(Series::new("a", SeriesKind::Line).with_values(&[1.0]))
        .expect("add");

    assert!(!engine.remove_series(&SeriesId::new("missing")).expect("remove"));
    assert!(engine.remove_series(&SeriesId::new("a")).expect("remove"));
    assert!(!engine.remove_series(&SeriesId::new("a")).expect("remove again"));
    assert!(engine.series_store().is_empty());
}

#[test]
fn invalid_series_are_rejected() {
    let mut engine = build_engine();
    let err = engine.add_series(Series::new("bad", SeriesKind::Line).with_values(&[1.0, f64::NAN]));
    assert!(err.is_err());
    assert!(engine.series(&SeriesId::new("bad")).is_none());
    assert!(engine.renderer().series.is_empty());
}

#[test]
fn replacing_series_forgets_its_selection_and_drag() {
    let mut engine = build_engine();
    engine.set_drag_policy(DragPolicy::Index);
    engine
        .add_series(Series::new("a", SeriesKind::Line).with_values(&[1.0, 2.0, 3.0]))
        .expect("add");
    engine
        .handle_event(PointerEvent::PointClick {
            target: PointRef::new("a", 2),
            accumulate: false,
        })
        .expect("click");
    engine
        .handle_event(PointerEvent::DragStart {
            target: PointRef::new("a", 2),
            chart_x: 80.0,
            chart_y: 10.0,
        })
        .expect("drag start");

    engine
        .add_series(Series::new("a", SeriesKind::Line).with_values(&[4.0, 5.0]))
        .expect("replace");

    assert!(engine.selected_points().is_empty());
    assert!(engine.drag_session().is_none());
}

#[test]
fn push_and_remove_points() {
    let mut engine = build_engine();
    let id = SeriesId::new("a");
    engine
        .add_series(Series::new("a", SeriesKind::Line).with_values(&[1.0, 2.0]))
        .expect("add");

    assert!(engine.push_value(&id, 7.5).expect("push"));
    assert!(!engine.push_value(&SeriesId::new("missing"), 1.0).expect("push missing"));
    assert!(engine.push_value(&id, f64::INFINITY).is_err());

    let series = engine.series(&id).expect("series");
    assert_eq!(series.len(), 3);
    assert_eq!(series.points[2].x, 2.0);
    assert_eq!(series.points[2].y, Some(7.5));

    engine
        .handle_event(PointerEvent::PointClick {
            target: PointRef::new("a", 2),
            accumulate: false,
        })
        .expect("click");
    assert!(engine.remove_point(&id, 0).expect("remove"));
    assert!(!engine.remove_point(&id, 10).expect("remove out of range"));

    let series = engine.series(&id).expect("series");
    assert_eq!(series.len(), 2);
    assert_eq!(series.points[0].x, 1.0);
    assert!(engine.selected_points().is_empty());
    assert_eq!(engine.renderer().series[&id].len(), 2);
}

#[test]
fn series_kind_switch_applies_to_all() {
    let mut engine = build_engine();
    for id in ["a", "b"] {
        engine
            .add_series(Series::new(id, SeriesKind::Line).with_values(&[1.0]))
            .expect("add");
    }

    engine.set_series_kind_all(SeriesKind::Scatter).expect("kind");

    assert!(engine.series_store().iter().all(|series| series.kind == SeriesKind::Scatter));
    assert!(
        engine
            .renderer()
            .series
            .values()
            .all(|series| series.kind == SeriesKind::Scatter)
    );
}

#[test]
fn values_at_x_lists_matching_series() {
    let mut engine = build_engine();
    engine
        .add_series(Series::new("a", SeriesKind::Line).with_name("A").with_values(&[1.0, 2.0]))
        .expect("add a");
    engine
        .add_series(Series::new("b", SeriesKind::Line).with_name("B").with_values(&[3.0]))
        .expect("add b");

    let at_one = engine.values_at_x(1.0);
    assert_eq!(at_one.len(), 1);
    assert_eq!(at_one[0].name, "A");
    assert_eq!(at_one[0].value, Some(2.0));
    assert_eq!(engine.values_at_x(0.0).len(), 2);
}

#[test]
fn comma_separated_values_parse_into_series() {
    let values = parse_series_values("1, 2.5,,4").expect("parse");
    assert_eq!(values, vec![1.0, 2.5, 0.0, 4.0]);
    assert!(parse_series_values("1, abc").is_err());

    let mut engine = build_engine();
    engine
        .add_series(Series::new("typed", SeriesKind::Line).with_values(&values))
        .expect("add");
    assert_eq!(engine.total_point_count(), 4);
}
