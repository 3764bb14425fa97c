use chrono::{Local, NaiveDate};
use tracing::{debug, trace};

use crate::core::PointRef;
use crate::error::ChartResult;
use crate::extensions::{StickyLabel, compose_label_text, place_sticky_label};
use crate::render::Renderer;

use super::{AnnotationChange, EventOutcome, InteractionEngine};

impl<R: Renderer> InteractionEngine<R> {
    #[must_use]
    pub fn annotation(&self) -> Option<&StickyLabel> {
        self.annotation.as_ref()
    }

    /// Pins the date printed on sticky labels; `None` uses today's local date.
    pub fn set_label_date(&mut self, date: Option<NaiveDate>) {
        self.label_date = date;
    }

    /// Returns whether clicking `target` may produce a sticky label.
    ///
    /// The point needs a y value, a pixel position inside the plot area,
    /// and a series that accepts sticky labels.
    #[must_use]
    pub fn is_annotatable(&self, target: &PointRef) -> bool {
        let Some(series) = self.series.get(&target.series) else {
            return false;
        };
        if !series.accepts_sticky_label() {
            return false;
        }
        self.point_plot_position(target)
            .is_some_and(|(plot_x, plot_y)| self.plot_area.contains(plot_x, plot_y))
    }

    pub(super) fn annotate_point(
        &mut self,
        target: &PointRef,
    ) -> ChartResult<Option<AnnotationChange>> {
        if !self.is_annotatable(target) {
            trace!(
                series = %target.series,
                index = target.index,
                "point not eligible for sticky label"
            );
            return Ok(None);
        }
        let (Some((plot_x, plot_y)), Some(series)) = (
            self.point_plot_position(target),
            self.series.get(&target.series),
        ) else {
            return Ok(None);
        };
        let Some(value) = series.point(target.index).and_then(|point| point.y) else {
            return Ok(None);
        };

        let date = self
            .label_date
            .unwrap_or_else(|| Local::now().date_naive());
        let label = place_sticky_label(
            compose_label_text(date, value, &series.name),
            plot_x + self.x_axis.pos_px(),
            plot_y + self.y_axis.pos_px(),
            f64::from(self.viewport.width),
            self.sticky_label_layout,
        );

        let change = if self.annotation.is_some() {
            self.renderer
                .animate_annotation(&label, self.sticky_label_layout.update_animation())?;
            AnnotationChange::Updated
        } else {
            self.renderer.show_annotation(&label)?;
            AnnotationChange::Created
        };
        debug!(
            series = %target.series,
            index = target.index,
            anchor_x = label.anchor_x,
            anchor_y = label.anchor_y,
            align = ?label.align,
            ?change,
            "sticky label placed"
        );
        self.annotation = Some(label);
        Ok(Some(change))
    }

    /// Destroys the sticky label; a no-op when none exists.
    pub fn dismiss_annotation(&mut self) -> ChartResult<EventOutcome> {
        if self.annotation.take().is_none() {
            trace!("annotation click ignored: no sticky label");
            return Ok(EventOutcome::default());
        }
        self.renderer.destroy_annotation()?;
        debug!("sticky label dismissed");
        Ok(EventOutcome {
            annotation: Some(AnnotationChange::Dismissed),
            ..EventOutcome::default()
        })
    }
}
