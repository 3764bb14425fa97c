use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Full chart canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Plotting rectangle inside the chart canvas.
///
/// `left`/`top` are the axis origin offsets used to convert chart-relative
/// pointer coordinates into plot-relative ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Plot area covering the whole viewport.
    #[must_use]
    pub fn full(viewport: Viewport) -> Self {
        Self::new(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        )
    }

    pub fn validate(self, viewport: Viewport) -> ChartResult<Self> {
        for (value, name) in [(self.left, "left"), (self.top, "top")] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot area `{name}` must be finite and >= 0"
                )));
            }
        }
        for (value, name) in [(self.width, "width"), (self.height, "height")] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot area `{name}` must be finite and > 0"
                )));
            }
        }
        if self.left + self.width > f64::from(viewport.width)
            || self.top + self.height > f64::from(viewport.height)
        {
            return Err(ChartError::InvalidData(
                "plot area must fit inside the viewport".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Returns whether a plot-relative position lies inside the plot area.
    #[must_use]
    pub fn contains(self, plot_x: f64, plot_y: f64) -> bool {
        plot_x.is_finite()
            && plot_y.is_finite()
            && (0.0..=self.width).contains(&plot_x)
            && (0.0..=self.height).contains(&plot_y)
    }
}

/// One sample of a series.
///
/// `y` is optional so gaps in remote data keep every series index-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y: Some(y) }
    }

    #[must_use]
    pub fn gap(x: f64) -> Self {
        Self { x, y: None }
    }

    #[must_use]
    pub fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    #[must_use]
    pub fn with_y(self, y: f64) -> Self {
        Self { y: Some(y), ..self }
    }
}
