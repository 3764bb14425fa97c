use tracing::{debug, trace};

use crate::core::primitives::ensure_finite;
use crate::core::{DataPoint, PointRef, Series, SeriesId, SeriesKind, SeriesStore, SeriesValue};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::InteractionEngine;

impl<R: Renderer> InteractionEngine<R> {
    /// Adds a series, replacing any series that already uses its id.
    ///
    /// The replaced series is removed from the renderer first and the new
    /// one is appended last, so repeated calls with the same id leave
    /// exactly one series holding the latest data.
    pub fn add_series(&mut self, series: Series) -> ChartResult<()> {
        series.validate()?;
        if self.series.get(&series.id).is_some() {
            self.renderer.remove_series(&series.id)?;
            self.forget_series_refs(&series.id, 0);
            debug!(series = %series.id, "replacing existing series");
        }
        self.renderer.render_series(&series)?;
        debug!(series = %series.id, points = series.len(), kind = ?series.kind, "add series");
        self.series.replace(series);
        Ok(())
    }

    /// Removes a series by id. Unknown ids are a no-op returning `false`.
    pub fn remove_series(&mut self, id: &SeriesId) -> ChartResult<bool> {
        if self.series.remove(id).is_none() {
            trace!(series = %id, "remove series ignored: unknown id");
            return Ok(false);
        }
        self.forget_series_refs(id, 0);
        self.renderer.remove_series(id)?;
        debug!(series = %id, "remove series");
        Ok(true)
    }

    #[must_use]
    pub fn series(&self, id: &SeriesId) -> Option<&Series> {
        self.series.get(id)
    }

    #[must_use]
    pub fn series_store(&self) -> &SeriesStore {
        &self.series
    }

    #[must_use]
    pub fn series_ids(&self) -> Vec<SeriesId> {
        self.series.ids().cloned().collect()
    }

    #[must_use]
    pub fn total_point_count(&self) -> usize {
        self.series.total_point_count()
    }

    /// Values of every series holding a point at exactly `x`.
    #[must_use]
    pub fn values_at_x(&self, x: f64) -> Vec<SeriesValue> {
        self.series.values_at_x(x)
    }

    /// Switches the display type of every series.
    pub fn set_series_kind_all(&mut self, kind: SeriesKind) -> ChartResult<()> {
        for series in self.series.iter_mut() {
            series.kind = kind;
            self.renderer.render_series(series)?;
        }
        debug!(?kind, series = self.series.len(), "series kind changed");
        Ok(())
    }

    /// Appends a value at the next index of a series.
    ///
    /// Returns `false` when the series does not exist.
    pub fn push_value(&mut self, id: &SeriesId, y: f64) -> ChartResult<bool> {
        ensure_finite(y, "series value")?;
        let Some(series) = self.series.get_mut(id) else {
            return Ok(false);
        };
        let x = series.len() as f64;
        series.points.push(DataPoint::new(x, y));
        self.renderer.render_series(series)?;
        trace!(series = %id, x, y, "push value");
        Ok(true)
    }

    /// Removes one point. Later points keep their coordinates but shift
    /// down one index, so selections from `index` on are dropped.
    pub fn remove_point(&mut self, id: &SeriesId, index: usize) -> ChartResult<bool> {
        let Some(series) = self.series.get_mut(id) else {
            return Ok(false);
        };
        if index >= series.len() {
            return Ok(false);
        }
        series.points.remove(index);
        self.renderer.render_series(series)?;
        self.forget_series_refs(id, index);
        trace!(series = %id, index, "remove point");
        Ok(true)
    }

    /// Drops selections and the drag session on `id` from `from_index` on.
    fn forget_series_refs(&mut self, id: &SeriesId, from_index: usize) {
        let stale = |target: &PointRef| target.series == *id && target.index >= from_index;
        self.interaction.retain_selection(|target| !stale(target));
        if self
            .interaction
            .drag()
            .is_some_and(|session| stale(&session.target))
        {
            if let Some(session) = self.interaction.end_drag() {
                debug!(
                    series = %id,
                    canceled = ?session.pending.map(|task| task.handle),
                    "drag session closed: target series changed"
                );
            }
        }
    }
}
