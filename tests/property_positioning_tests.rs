use chart_sync::core::{DataPoint, PointRef, Series, SeriesKind, SeriesStore, Zone};
use chart_sync::interaction::{MoveRequest, plan_moves};
use proptest::prelude::*;

fn store_from(columns: &[Vec<(f64, f64)>]) -> SeriesStore {
    let mut store = SeriesStore::new();
    for (position, points) in columns.iter().enumerate() {
        let points = points
            .iter()
            .map(|(x, y)| DataPoint::new(*x, *y))
            .collect();
        store.replace(Series::new(format!("s{position}"), SeriesKind::Line).with_points(points));
    }
    store
}

fn series_strategy() -> impl Strategy<Value = Vec<Vec<(f64, f64)>>> {
    prop::collection::vec(
        prop::collection::vec((-50.0f64..50.0, -100.0f64..100.0), 0..12),
        1..5,
    )
}

proptest! {
    #[test]
    fn horizontal_moves_align_every_series(
        columns in series_strategy(),
        index in 0usize..12,
        new_x in -100.0f64..100.0
    ) {
        let mut store = store_from(&columns);
        let moves = plan_moves(&store, MoveRequest::Horizontal { index, new_x });
        for planned in &moves {
            prop_assert_eq!(planned.target.index, index);
            prop_assert_eq!(planned.to.y, planned.from.y);
            *store.point_mut(&planned.target).expect("planned point") = planned.to;
        }

        for series in store.iter() {
            if let Some(point) = series.point(index) {
                prop_assert_eq!(point.x, new_x);
            }
        }
    }

    #[test]
    fn vertical_moves_share_one_delta(
        columns in series_strategy(),
        index in 0usize..12,
        delta in -20.0f64..20.0
    ) {
        prop_assume!(delta.abs() > 1e-6);
        let store = store_from(&columns);
        let moves = plan_moves(&store, MoveRequest::Vertical { index, y_delta: delta });

        let eligible = store.iter().filter(|series| series.len() > index).count();
        prop_assert_eq!(moves.len(), eligible);
        for planned in &moves {
            let from = planned.from.y.expect("from y");
            let to = planned.to.y.expect("to y");
            prop_assert!(((to - from) - delta).abs() <= 1e-9);
            prop_assert_eq!(planned.to.x, planned.from.x);
        }
    }

    #[test]
    fn zone_moves_stay_between_neighbors_and_inside_zone(
        columns in series_strategy(),
        from in -40.0f64..0.0,
        width in 1.0f64..60.0,
        x_variation in -10.0f64..10.0
    ) {
        let store = store_from(&columns);
        let zone = Zone::new(from, from + width).expect("zone");
        let moves = plan_moves(&store, MoveRequest::Zone { zone, x_variation });

        for planned in &moves {
            let series = store.get(&planned.target.series).expect("series");
            let index = planned.target.index;
            prop_assert!(index > 0 && index + 1 < series.len());
            let prev = series.points[index - 1].x;
            let next = series.points[index + 1].x;
            prop_assert!(prev < planned.to.x && planned.to.x < next);
            prop_assert!(zone.contains_strictly(planned.to.x));
            prop_assert_eq!(planned.to.y, planned.from.y);
        }

        let moved: Vec<&PointRef> = moves.iter().map(|planned| &planned.target).collect();
        for series in store.iter() {
            for index in 1..series.len().saturating_sub(1) {
                let target = PointRef::new(series.id.clone(), index);
                let prospective = index as f64 + x_variation;
                let eligible = zone.contains_strictly(prospective)
                    && series.points[index - 1].x < prospective
                    && prospective < series.points[index + 1].x
                    && prospective != series.points[index].x;
                prop_assert_eq!(moved.contains(&&target), eligible);
            }
        }
    }

    #[test]
    fn select_moves_use_own_index(
        columns in series_strategy(),
        picks in prop::collection::vec((0usize..5, 0usize..12), 0..6),
        x_variation in -5.0f64..5.0
    ) {
        let store = store_from(&columns);
        let mut selected: Vec<PointRef> = picks
            .into_iter()
            .map(|(series, index)| PointRef::new(format!("s{series}"), index))
            .filter(|target| store.point(target).is_some())
            .collect();
        selected.dedup();

        let moves = plan_moves(&store, MoveRequest::Select { selected: &selected, x_variation });
        for planned in &moves {
            prop_assert!(selected.contains(&planned.target));
            prop_assert_eq!(planned.to.x, planned.target.index as f64 + x_variation);
        }
    }
}
