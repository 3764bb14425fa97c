use tracing::{debug, warn};

use crate::core::{PlotBand, SeriesKind, Zone};
use crate::error::{ChartError, ChartResult};
use crate::feed::Forecast;
use crate::render::{LoadingState, Renderer};

use super::InteractionEngine;

pub const WORKING_ZONE_BAND_ID: &str = "working-zone";
pub const CURRENT_HOUR_BAND_ID: &str = "current-time";

impl<R: Renderer> InteractionEngine<R> {
    /// Completion handler of a forecast request.
    ///
    /// The forecast is fully validated before the chart is touched: on
    /// error no series changes, the loading indicator shows the failure,
    /// and the error is returned. Reloading replaces series and bands by
    /// id, so repeated calls are idempotent.
    pub fn load_forecast(&mut self, forecast: &Forecast, kind: SeriesKind) -> ChartResult<()> {
        self.renderer.set_loading(&LoadingState::Loading)?;

        let prepared = forecast.temperature_series(kind).and_then(|series| {
            Ok((
                series,
                forecast.category_labels()?,
                forecast.current_hour_index()?,
            ))
        });
        let (series, categories, current_hour) = match prepared {
            Ok(prepared) => prepared,
            Err(err) => {
                self.forecast_failed(&err)?;
                return Err(err);
            }
        };

        let series_count = series.len();
        for entry in series {
            self.add_series(entry)?;
        }
        self.renderer.set_categories(&categories)?;
        self.categories = categories;

        if let Some(index) = current_hour {
            let from = index as f64;
            let band = PlotBand::new(CURRENT_HOUR_BAND_ID, Zone::new(from, from + 1.0)?, "black");
            self.renderer.set_plot_band(&band)?;
        } else {
            self.renderer.remove_plot_band(CURRENT_HOUR_BAND_ID)?;
        }
        self.publish_working_zone()?;

        self.renderer.set_loading(&LoadingState::Idle)?;
        self.renderer.redraw()?;
        debug!(
            series = series_count,
            hours = self.categories.len(),
            ?current_hour,
            "forecast loaded"
        );
        Ok(())
    }

    /// Reports a failed forecast request through the loading indicator.
    pub fn forecast_failed(&mut self, err: &ChartError) -> ChartResult<()> {
        warn!(error = %err, "forecast load failed; chart left unchanged");
        self.renderer
            .set_loading(&LoadingState::Failed(err.to_string()))
    }
}
