//! Point repositioning policies.
//!
//! Planning is pure: [`plan_moves`] reads the series store and returns the
//! point updates to apply. The engine applies them and batches the redraw.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{DataPoint, PointRef, SeriesStore, Zone};

/// The five mutually exclusive repositioning policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositioningMode {
    Horizontal,
    Vertical,
    Index,
    Zone,
    Select,
}

/// Input of one repositioning pass, tagged by policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveRequest<'a> {
    /// Align every series' point at `index` on `new_x`.
    Horizontal { index: usize, new_x: f64 },
    /// Shift every series' point at `index` by `y_delta`.
    Vertical { index: usize, y_delta: f64 },
    /// Drag variant of [`MoveRequest::Horizontal`].
    Index { index: usize, new_x: f64 },
    /// Place each point at its own index plus `x_variation` when that stays
    /// inside `zone` and between its neighbors. The target is absolute, so
    /// repeated passes in one drag do not compound.
    Zone { zone: Zone, x_variation: f64 },
    /// Place each selected point at its own index plus `x_variation`.
    Select {
        selected: &'a [PointRef],
        x_variation: f64,
    },
}

impl MoveRequest<'_> {
    #[must_use]
    pub fn mode(&self) -> PositioningMode {
        match self {
            Self::Horizontal { .. } => PositioningMode::Horizontal,
            Self::Vertical { .. } => PositioningMode::Vertical,
            Self::Index { .. } => PositioningMode::Index,
            Self::Zone { .. } => PositioningMode::Zone,
            Self::Select { .. } => PositioningMode::Select,
        }
    }
}

/// One planned point update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMove {
    pub target: PointRef,
    pub from: DataPoint,
    pub to: DataPoint,
}

pub type PointMoves = SmallVec<[PointMove; 8]>;

/// Plans the point updates for `request`.
///
/// Points whose coordinates would not change are omitted. Series shorter
/// than the requested index are skipped.
#[must_use]
pub fn plan_moves(store: &SeriesStore, request: MoveRequest<'_>) -> PointMoves {
    let mut moves = PointMoves::new();
    match request {
        MoveRequest::Horizontal { index, new_x } | MoveRequest::Index { index, new_x } => {
            for_each_at_index(store, index, |point| point.with_x(new_x), &mut moves);
        }
        MoveRequest::Vertical { index, y_delta } => {
            for_each_at_index(
                store,
                index,
                |point| point.with_y(point.y.unwrap_or(0.0) + y_delta),
                &mut moves,
            );
        }
        MoveRequest::Zone { zone, x_variation } => plan_zone(store, zone, x_variation, &mut moves),
        MoveRequest::Select {
            selected,
            x_variation,
        } => {
            for target in selected {
                let Some(point) = store.point(target) else {
                    continue;
                };
                push_move(
                    &mut moves,
                    target.clone(),
                    point,
                    point.with_x(target.index as f64 + x_variation),
                );
            }
        }
    }
    moves
}

fn for_each_at_index(
    store: &SeriesStore,
    index: usize,
    update: impl Fn(DataPoint) -> DataPoint,
    moves: &mut PointMoves,
) {
    for series in store.iter() {
        let Some(point) = series.point(index) else {
            continue;
        };
        push_move(
            moves,
            PointRef::new(series.id.clone(), index),
            point,
            update(point),
        );
    }
}

fn plan_zone(store: &SeriesStore, zone: Zone, x_variation: f64, moves: &mut PointMoves) {
    for series in store.iter() {
        let points = &series.points;
        for (index, point) in points.iter().enumerate() {
            let prospective = index as f64 + x_variation;
            let Some(prev) = index.checked_sub(1).and_then(|i| points.get(i)) else {
                continue;
            };
            let Some(next) = points.get(index + 1) else {
                continue;
            };
            if zone.contains_strictly(prospective) && prev.x < prospective && prospective < next.x
            {
                push_move(
                    moves,
                    PointRef::new(series.id.clone(), index),
                    *point,
                    point.with_x(prospective),
                );
            }
        }
    }
}

fn push_move(moves: &mut PointMoves, target: PointRef, from: DataPoint, to: DataPoint) {
    if from != to {
        moves.push(PointMove { target, from, to });
    }
}
