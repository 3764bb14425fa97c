use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Value mapping applied before the linear pixel projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleMode {
    /// Uniform spacing in raw data units.
    #[default]
    Linear,
    /// Uniform spacing in base-10 log units (values must be > 0).
    Log,
}

impl ScaleMode {
    /// Maps a data value into the scale domain.
    pub fn to_domain(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        match self {
            Self::Linear => Ok(value),
            Self::Log => {
                if value <= 0.0 {
                    return Err(ChartError::InvalidData(
                        "log scale values must be > 0".to_owned(),
                    ));
                }
                Ok(value.log10())
            }
        }
    }

    /// Maps a scale-domain value back into data units.
    #[must_use]
    pub fn from_domain(self, domain_value: f64) -> f64 {
        match self {
            Self::Linear => domain_value,
            Self::Log => 10f64.powf(domain_value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Projects a domain value onto `[0, length_px]`; values outside the
    /// domain extrapolate linearly.
    #[must_use]
    pub fn domain_to_pixel(self, value: f64, length_px: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        normalized * length_px
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64, length_px: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = pixel / length_px;
        self.domain_start + normalized * span
    }
}
