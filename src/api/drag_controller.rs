use std::time::Duration;

use tracing::{debug, trace};

use crate::core::{PointRef, snap_to_precision};
use crate::error::ChartResult;
use crate::interaction::{DragPolicy, DragSession, MoveRequest, plan_moves};
use crate::render::Renderer;

use super::{EventOutcome, InteractionEngine};

impl<R: Renderer> InteractionEngine<R> {
    /// Opens a drag session at the pointer's x value.
    ///
    /// A session left open by a missing drop is replaced and its pending
    /// zone move canceled.
    pub(super) fn drag_start(
        &mut self,
        target: PointRef,
        chart_x: f64,
    ) -> ChartResult<EventOutcome> {
        if self.series.point(&target).is_none() {
            debug!(
                series = %target.series,
                index = target.index,
                "drag start ignored: unknown point"
            );
            return Ok(EventOutcome::default());
        }
        let start_value = self.x_axis.chart_to_value(chart_x);
        let canceled = self.interaction.begin_drag(DragSession {
            target: target.clone(),
            start_value,
            policy: self.drag_policy,
            pending: None,
        });
        debug!(
            series = %target.series,
            index = target.index,
            start_value,
            policy = ?self.drag_policy,
            "drag started"
        );
        Ok(EventOutcome {
            canceled: canceled.map(|task| task.handle),
            ..EventOutcome::default()
        })
    }

    /// Applies one drag tick according to the session policy.
    pub(super) fn drag(
        &mut self,
        target: PointRef,
        chart_x: f64,
        at: Duration,
    ) -> ChartResult<EventOutcome> {
        let Some(session) = self.interaction.drag() else {
            trace!("drag tick ignored: no drag session");
            return Ok(EventOutcome::default());
        };
        let policy = session.policy;
        let start_value = session.start_value;
        let new_x = snap_to_precision(self.x_axis.chart_to_value(chart_x), self.drag_precision_x);

        match policy {
            DragPolicy::Index => {
                let moves = plan_moves(
                    &self.series,
                    MoveRequest::Index {
                        index: target.index,
                        new_x,
                    },
                );
                let moved = self.apply_moves(moves)?;
                trace!(index = target.index, new_x, moved, "index drag");
                Ok(EventOutcome {
                    moved,
                    ..EventOutcome::default()
                })
            }
            DragPolicy::Zone => {
                if self.working_zone.is_none() {
                    trace!("zone drag ignored: no working zone");
                    return Ok(EventOutcome::default());
                }
                let x_variation = new_x - start_value;
                let canceled = self.interaction.cancel_pending();
                let scheduled = self
                    .interaction
                    .schedule(at + self.zone_debounce, x_variation);
                trace!(
                    x_variation,
                    due_at = ?scheduled.map(|task| task.due_at),
                    "zone move scheduled"
                );
                Ok(EventOutcome {
                    scheduled: scheduled.map(|task| task.handle),
                    canceled: canceled.map(|task| task.handle),
                    ..EventOutcome::default()
                })
            }
            DragPolicy::Select => {
                let x_variation = new_x - start_value;
                let selected = self.selected_points();
                let moves = plan_moves(
                    &self.series,
                    MoveRequest::Select {
                        selected: &selected,
                        x_variation,
                    },
                );
                let moved = self.apply_moves(moves)?;
                trace!(x_variation, selected = selected.len(), moved, "select drag");
                Ok(EventOutcome {
                    moved,
                    ..EventOutcome::default()
                })
            }
        }
    }

    /// Closes the drag session, canceling any pending zone move.
    pub(super) fn drop_drag(&mut self) -> EventOutcome {
        let Some(session) = self.interaction.end_drag() else {
            trace!("drop ignored: no drag session");
            return EventOutcome::default();
        };
        let canceled = session.pending.map(|task| task.handle);
        debug!(
            series = %session.target.series,
            index = session.target.index,
            ?canceled,
            "drag dropped"
        );
        EventOutcome {
            canceled,
            ..EventOutcome::default()
        }
    }

    /// Runs the pending zone move when it is due at `now`.
    ///
    /// The move is planned against the current series state, so data
    /// replaced since the drag tick is honored. Returns the moved count.
    pub fn poll_scheduled(&mut self, now: Duration) -> ChartResult<usize> {
        let Some(task) = self.interaction.take_due_task(now) else {
            return Ok(0);
        };
        let Some(zone) = self.working_zone else {
            trace!(task = task.handle.id(), "zone move dropped: working zone removed");
            return Ok(0);
        };
        let moves = plan_moves(
            &self.series,
            MoveRequest::Zone {
                zone,
                x_variation: task.x_variation,
            },
        );
        let moved = self.apply_moves(moves)?;
        debug!(
            task = task.handle.id(),
            x_variation = task.x_variation,
            moved,
            "zone move applied"
        );
        Ok(moved)
    }

    /// Due time of the pending zone move, for host timer scheduling.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.interaction
            .drag()
            .and_then(|session| session.pending)
            .map(|task| task.due_at)
    }
}
