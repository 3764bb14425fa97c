pub mod positioning;

use std::time::Duration;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::PointRef;

pub use positioning::{MoveRequest, PointMove, PointMoves, PositioningMode, plan_moves};

/// Pointer input delivered by the host, one variant per event kind.
///
/// `chart_x`/`chart_y` are relative to the chart canvas (not the plot
/// area). `at` is the host's monotonic clock, used to schedule debounced
/// zone moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    /// Click on the plot background.
    ChartClick { chart_x: f64, chart_y: f64 },
    /// Click on a data point. `accumulate` keeps previous selections.
    PointClick { target: PointRef, accumulate: bool },
    /// Click on the sticky label itself.
    AnnotationClick,
    DragStart {
        target: PointRef,
        chart_x: f64,
        chart_y: f64,
    },
    Drag {
        target: PointRef,
        chart_x: f64,
        chart_y: f64,
        at: Duration,
    },
    Drop {
        target: PointRef,
        chart_x: f64,
        chart_y: f64,
    },
}

/// Axis lock applied when the plot background is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClickPositioning {
    /// Move the selected index to the clicked x.
    #[default]
    Horizontal,
    /// Shift the selected index by the clicked y delta.
    Vertical,
}

impl ClickPositioning {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Synchronization policy applied while a point is dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DragPolicy {
    /// Every series' point at the dragged index follows the dragged x.
    #[default]
    Index,
    /// All points shift by the drag displacement when they stay inside the
    /// working zone and between their neighbors. Debounced.
    Zone,
    /// Selected points shift by the drag displacement.
    Select,
}

/// Opaque handle of a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(u64);

impl TaskHandle {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Delayed zone repositioning created by a drag tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub handle: TaskHandle,
    pub due_at: Duration,
    pub x_variation: f64,
}

impl ScheduledTask {
    #[must_use]
    pub fn is_due(self, now: Duration) -> bool {
        now >= self.due_at
    }
}

/// Transient state of an in-progress drag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragSession {
    pub target: PointRef,
    /// x-axis value under the pointer when the drag began.
    pub start_value: f64,
    pub policy: DragPolicy,
    pub pending: Option<ScheduledTask>,
}

/// Selection and drag bookkeeping for one chart.
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    selected: IndexSet<PointRef>,
    drag: Option<DragSession>,
    next_task_id: u64,
}

impl InteractionState {
    #[must_use]
    pub fn selected(&self) -> impl Iterator<Item = &PointRef> {
        self.selected.iter()
    }

    #[must_use]
    pub fn is_selected(&self, target: &PointRef) -> bool {
        self.selected.contains(target)
    }

    /// Toggles `target`; without `accumulate` every other selection is cleared.
    ///
    /// Returns whether `target` ends up selected.
    pub fn toggle_selection(&mut self, target: PointRef, accumulate: bool) -> bool {
        let was_selected = self.selected.contains(&target);
        if !accumulate {
            self.selected.clear();
        }
        if was_selected {
            self.selected.shift_remove(&target);
            false
        } else {
            self.selected.insert(target);
            true
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Drops selections that no longer satisfy `keep`.
    pub fn retain_selection(&mut self, keep: impl FnMut(&PointRef) -> bool) {
        self.selected.retain(keep);
    }

    #[must_use]
    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Opens a drag session, replacing any previous one.
    ///
    /// Returns the pending task of the replaced session, now canceled.
    pub fn begin_drag(&mut self, session: DragSession) -> Option<ScheduledTask> {
        self.drag
            .replace(session)
            .and_then(|previous| previous.pending)
    }

    /// Closes the drag session and returns it with its canceled task.
    pub fn end_drag(&mut self) -> Option<DragSession> {
        self.drag.take()
    }

    /// Schedules a zone move on the current session, replacing any pending
    /// one. Returns `None` when no drag is in progress.
    pub fn schedule(&mut self, due_at: Duration, x_variation: f64) -> Option<ScheduledTask> {
        let session = self.drag.as_mut()?;
        self.next_task_id += 1;
        let task = ScheduledTask {
            handle: TaskHandle(self.next_task_id),
            due_at,
            x_variation,
        };
        session.pending = Some(task);
        Some(task)
    }

    /// Removes and returns the pending task when it is due at `now`.
    pub fn take_due_task(&mut self, now: Duration) -> Option<ScheduledTask> {
        let session = self.drag.as_mut()?;
        if session.pending.is_some_and(|task| task.is_due(now)) {
            session.pending.take()
        } else {
            None
        }
    }

    pub fn cancel_pending(&mut self) -> Option<ScheduledTask> {
        self.drag.as_mut()?.pending.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(start_value: f64) -> DragSession {
        DragSession {
            target: PointRef::new("a", 1),
            start_value,
            policy: DragPolicy::Zone,
            pending: None,
        }
    }

    #[test]
    fn toggle_selection_replaces_unless_accumulating() {
        let mut state = InteractionState::default();
        assert!(state.toggle_selection(PointRef::new("a", 0), false));
        assert!(state.toggle_selection(PointRef::new("a", 1), false));
        assert_eq!(state.selected().count(), 1);

        assert!(state.toggle_selection(PointRef::new("b", 1), true));
        assert_eq!(state.selected().count(), 2);

        assert!(!state.toggle_selection(PointRef::new("b", 1), true));
        assert_eq!(state.selected().count(), 1);
    }

    #[test]
    fn new_drag_cancels_pending_task() {
        let mut state = InteractionState::default();
        state.begin_drag(session(1.0));
        let task = state
            .schedule(Duration::from_millis(500), 2.0)
            .expect("scheduled");

        let canceled = state.begin_drag(session(3.0));
        assert_eq!(canceled.map(|t| t.handle), Some(task.handle));
        assert!(state.drag().expect("session").pending.is_none());
    }

    #[test]
    fn pending_task_only_fires_when_due() {
        let mut state = InteractionState::default();
        state.begin_drag(session(0.0));
        state.schedule(Duration::from_millis(500), 1.5);

        assert!(state.take_due_task(Duration::from_millis(499)).is_none());
        let task = state
            .take_due_task(Duration::from_millis(500))
            .expect("due task");
        assert_eq!(task.x_variation, 1.5);
        assert!(state.take_due_task(Duration::from_secs(10)).is_none());
    }

    #[test]
    fn schedule_without_session_is_ignored() {
        let mut state = InteractionState::default();
        assert!(state.schedule(Duration::ZERO, 1.0).is_none());
    }
}
