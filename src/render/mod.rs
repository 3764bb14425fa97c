mod null_renderer;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use null_renderer::NullRenderer;

use crate::core::{DataPoint, PlotBand, PointRef, Series, SeriesId};
use crate::error::ChartResult;
use crate::extensions::StickyLabel;

/// Loading indicator state shown by the host while remote data is pending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoadingState {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// Capability interface of the charting collaborator.
///
/// The engine never draws. It reports every state change through this
/// trait: per-point updates are followed by a single [`Renderer::redraw`]
/// per handled event, so backends can defer expensive work until then.
pub trait Renderer {
    fn render_series(&mut self, series: &Series) -> ChartResult<()>;

    fn remove_series(&mut self, id: &SeriesId) -> ChartResult<()>;

    /// Updates one point in place without redrawing.
    fn update_point(&mut self, target: &PointRef, point: DataPoint) -> ChartResult<()>;

    fn redraw(&mut self) -> ChartResult<()>;

    fn show_annotation(&mut self, label: &StickyLabel) -> ChartResult<()>;

    /// Moves the existing label to its new position/text over `duration`.
    fn animate_annotation(&mut self, label: &StickyLabel, duration: Duration) -> ChartResult<()>;

    fn destroy_annotation(&mut self) -> ChartResult<()>;

    /// Adds or replaces (by id) an x-axis plot band.
    fn set_plot_band(&mut self, _band: &PlotBand) -> ChartResult<()> {
        Ok(())
    }

    fn remove_plot_band(&mut self, _id: &str) -> ChartResult<()> {
        Ok(())
    }

    fn set_categories(&mut self, _categories: &[String]) -> ChartResult<()> {
        Ok(())
    }

    fn set_loading(&mut self, _state: &LoadingState) -> ChartResult<()> {
        Ok(())
    }
}
