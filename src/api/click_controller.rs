use tracing::{debug, trace};

use crate::core::PointRef;
use crate::error::ChartResult;
use crate::interaction::{ClickPositioning, MoveRequest, plan_moves};
use crate::render::Renderer;

use super::validation::validate_pointer;
use super::{EventOutcome, InteractionEngine};

impl<R: Renderer> InteractionEngine<R> {
    /// Selected points ordered by series, then index.
    #[must_use]
    pub fn selected_points(&self) -> Vec<PointRef> {
        let mut selected: Vec<(usize, PointRef)> = self
            .interaction
            .selected()
            .filter(|target| self.series.point(target).is_some())
            .filter_map(|target| {
                self.series
                    .position(&target.series)
                    .map(|position| (position, target.clone()))
            })
            .collect();
        selected.sort_by_key(|(position, target)| (*position, target.index));
        selected.into_iter().map(|(_, target)| target).collect()
    }

    pub fn clear_selection(&mut self) {
        self.interaction.clear_selection();
    }

    /// Plot background click: moves every series' point at the first
    /// selected index along the configured axis.
    pub(super) fn chart_click(&mut self, chart_x: f64, chart_y: f64) -> ChartResult<EventOutcome> {
        validate_pointer(chart_x, chart_y)?;
        let Some(reference) = self.selected_points().into_iter().next() else {
            trace!("chart click ignored: no selected point");
            return Ok(EventOutcome::default());
        };
        let Some(point) = self.series.point(&reference) else {
            return Ok(EventOutcome::default());
        };

        let request = match self.click_positioning {
            ClickPositioning::Horizontal => MoveRequest::Horizontal {
                index: reference.index,
                new_x: self.x_axis.chart_to_value(chart_x),
            },
            ClickPositioning::Vertical => MoveRequest::Vertical {
                index: reference.index,
                y_delta: self.y_axis.chart_to_value(chart_y) - point.y.unwrap_or(0.0),
            },
        };
        let moves = plan_moves(&self.series, request);
        let moved = self.apply_moves(moves)?;
        debug!(
            mode = ?request.mode(),
            index = reference.index,
            moved,
            "chart click repositioned points"
        );
        Ok(EventOutcome {
            moved,
            ..EventOutcome::default()
        })
    }

    /// Point click: updates selection, then creates or moves the sticky
    /// label when the point is eligible.
    pub(super) fn point_click(
        &mut self,
        target: PointRef,
        accumulate: bool,
    ) -> ChartResult<EventOutcome> {
        let Some(point) = self.series.point(&target) else {
            debug!(
                series = %target.series,
                index = target.index,
                "point click ignored: unknown point"
            );
            return Ok(EventOutcome::default());
        };

        if self.allow_point_select {
            let selected = self.interaction.toggle_selection(target.clone(), accumulate);
            trace!(
                series = %target.series,
                index = target.index,
                selected,
                "point selection toggled"
            );
        }

        let same_x = self.series.values_at_x(point.x);
        debug!(
            series = %target.series,
            index = target.index,
            x = point.x,
            y = ?point.y,
            series_at_x = same_x.len(),
            "point clicked"
        );
        for value in &same_x {
            trace!(
                series = %value.series,
                name = %value.name,
                value = ?value.value,
                "value at clicked x"
            );
        }

        let annotation = self.annotate_point(&target)?;
        Ok(EventOutcome {
            annotation,
            ..EventOutcome::default()
        })
    }
}
