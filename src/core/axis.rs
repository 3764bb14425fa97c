use serde::{Deserialize, Serialize};

use crate::core::{LinearScale, ScaleMode};
use crate::error::{ChartError, ChartResult};

/// Axis direction inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisOrientation {
    /// Values grow left to right.
    Horizontal,
    /// Values grow bottom to top, so pixel Y is inverted.
    Vertical,
}

/// One chart axis: scale mode, pixel placement, and zoom/pan state.
///
/// `full_*` tracks the configured extremes, `visible_*` the current zoom
/// window. Pixels passed to [`Axis::to_value`] are relative to the plot
/// area; [`Axis::chart_to_value`] accepts chart-relative pixels and removes
/// the `pos_px` origin offset first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    orientation: AxisOrientation,
    mode: ScaleMode,
    pos_px: f64,
    len_px: f64,
    full_min: f64,
    full_max: f64,
    visible: LinearScale,
    visible_min: f64,
    visible_max: f64,
}

impl Axis {
    pub fn new(
        orientation: AxisOrientation,
        mode: ScaleMode,
        min: f64,
        max: f64,
        pos_px: f64,
        len_px: f64,
    ) -> ChartResult<Self> {
        if !pos_px.is_finite() {
            return Err(ChartError::InvalidData(
                "axis position must be finite".to_owned(),
            ));
        }
        if !len_px.is_finite() || len_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "axis length must be finite and > 0".to_owned(),
            ));
        }
        let visible = build_visible_scale(mode, min, max)?;
        Ok(Self {
            orientation,
            mode,
            pos_px,
            len_px,
            full_min: min,
            full_max: max,
            visible,
            visible_min: min,
            visible_max: max,
        })
    }

    #[must_use]
    pub fn orientation(self) -> AxisOrientation {
        self.orientation
    }

    #[must_use]
    pub fn mode(self) -> ScaleMode {
        self.mode
    }

    /// Chart-relative pixel offset of the plot-area origin on this axis.
    #[must_use]
    pub fn pos_px(self) -> f64 {
        self.pos_px
    }

    #[must_use]
    pub fn len_px(self) -> f64 {
        self.len_px
    }

    #[must_use]
    pub fn full_extremes(self) -> (f64, f64) {
        (self.full_min, self.full_max)
    }

    #[must_use]
    pub fn visible_extremes(self) -> (f64, f64) {
        (self.visible_min, self.visible_max)
    }

    /// Zooms the axis to `[min, max]`.
    pub fn set_extremes(&mut self, min: f64, max: f64) -> ChartResult<()> {
        self.visible = build_visible_scale(self.mode, min, max)?;
        self.visible_min = min;
        self.visible_max = max;
        Ok(())
    }

    pub fn reset_extremes(&mut self) -> ChartResult<()> {
        self.set_extremes(self.full_min, self.full_max)
    }

    /// Shifts the visible window by a pixel delta; positive deltas reveal
    /// larger values.
    pub fn pan_by_pixels(&mut self, delta_px: f64) -> ChartResult<()> {
        if !delta_px.is_finite() {
            return Err(ChartError::InvalidData(
                "pan delta must be finite".to_owned(),
            ));
        }
        let (start, end) = self.visible.domain();
        let domain_delta = (end - start) * delta_px / self.len_px;
        let min = self.mode.from_domain(start + domain_delta);
        let max = self.mode.from_domain(end + domain_delta);
        self.set_extremes(min, max)
    }

    /// Converts a plot-relative pixel into a data value.
    ///
    /// Out-of-range pixels extrapolate along the axis mapping.
    #[must_use]
    pub fn to_value(self, pixel: f64) -> f64 {
        let along_axis = match self.orientation {
            AxisOrientation::Horizontal => pixel,
            AxisOrientation::Vertical => self.len_px - pixel,
        };
        self.mode
            .from_domain(self.visible.pixel_to_domain(along_axis, self.len_px))
    }

    /// Converts a data value into a plot-relative pixel.
    pub fn to_pixel(self, value: f64) -> ChartResult<f64> {
        let along_axis = self
            .visible
            .domain_to_pixel(self.mode.to_domain(value)?, self.len_px);
        Ok(match self.orientation {
            AxisOrientation::Horizontal => along_axis,
            AxisOrientation::Vertical => self.len_px - along_axis,
        })
    }

    /// Converts a chart-relative pixel (pointer `chartX`/`chartY`) into a data value.
    #[must_use]
    pub fn chart_to_value(self, chart_pixel: f64) -> f64 {
        self.to_value(chart_pixel - self.pos_px)
    }

    pub fn to_chart_pixel(self, value: f64) -> ChartResult<f64> {
        Ok(self.to_pixel(value)? + self.pos_px)
    }
}

fn build_visible_scale(mode: ScaleMode, min: f64, max: f64) -> ChartResult<LinearScale> {
    if !min.is_finite() || !max.is_finite() || min >= max {
        return Err(ChartError::InvalidData(
            "axis extremes must be finite with min < max".to_owned(),
        ));
    }
    LinearScale::new(mode.to_domain(min)?, mode.to_domain(max)?)
}
