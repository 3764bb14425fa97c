use std::time::Duration;

use indexmap::IndexMap;

use crate::core::{DataPoint, PlotBand, PointRef, Series, SeriesId};
use crate::error::ChartResult;
use crate::extensions::StickyLabel;
use crate::render::{LoadingState, Renderer};

/// Headless renderer used by tests and engine-only hosts.
///
/// It draws nothing but keeps a mirror of what a real backend would show,
/// so tests can assert on the calls the engine issued.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub series: IndexMap<SeriesId, Series>,
    pub removed_series: Vec<SeriesId>,
    pub point_updates: Vec<(PointRef, DataPoint)>,
    pub redraw_count: usize,
    pub annotation: Option<StickyLabel>,
    pub annotation_shows: usize,
    pub annotation_animations: Vec<Duration>,
    pub annotation_destroys: usize,
    pub plot_bands: IndexMap<String, PlotBand>,
    pub categories: Vec<String>,
    pub loading_history: Vec<LoadingState>,
}

impl NullRenderer {
    #[must_use]
    pub fn loading(&self) -> LoadingState {
        self.loading_history.last().cloned().unwrap_or_default()
    }
}

impl Renderer for NullRenderer {
    fn render_series(&mut self, series: &Series) -> ChartResult<()> {
        self.series.shift_remove(&series.id);
        self.series.insert(series.id.clone(), series.clone());
        Ok(())
    }

    fn remove_series(&mut self, id: &SeriesId) -> ChartResult<()> {
        self.series.shift_remove(id);
        self.removed_series.push(id.clone());
        Ok(())
    }

    fn update_point(&mut self, target: &PointRef, point: DataPoint) -> ChartResult<()> {
        if let Some(slot) = self
            .series
            .get_mut(&target.series)
            .and_then(|series| series.points.get_mut(target.index))
        {
            *slot = point;
        }
        self.point_updates.push((target.clone(), point));
        Ok(())
    }

    fn redraw(&mut self) -> ChartResult<()> {
        self.redraw_count += 1;
        Ok(())
    }

    fn show_annotation(&mut self, label: &StickyLabel) -> ChartResult<()> {
        self.annotation = Some(label.clone());
        self.annotation_shows += 1;
        Ok(())
    }

    fn animate_annotation(&mut self, label: &StickyLabel, duration: Duration) -> ChartResult<()> {
        self.annotation = Some(label.clone());
        self.annotation_animations.push(duration);
        Ok(())
    }

    fn destroy_annotation(&mut self) -> ChartResult<()> {
        self.annotation = None;
        self.annotation_destroys += 1;
        Ok(())
    }

    fn set_plot_band(&mut self, band: &PlotBand) -> ChartResult<()> {
        self.plot_bands.insert(band.id.clone(), band.clone());
        Ok(())
    }

    fn remove_plot_band(&mut self, id: &str) -> ChartResult<()> {
        self.plot_bands.shift_remove(id);
        Ok(())
    }

    fn set_categories(&mut self, categories: &[String]) -> ChartResult<()> {
        self.categories = categories.to_vec();
        Ok(())
    }

    fn set_loading(&mut self, state: &LoadingState) -> ChartResult<()> {
        self.loading_history.push(state.clone());
        Ok(())
    }
}
