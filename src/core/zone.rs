use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Inclusive x-axis interval `[from, to]` gating zone-restricted drags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    from: f64,
    to: f64,
}

impl Zone {
    pub fn new(from: f64, to: f64) -> ChartResult<Self> {
        if !from.is_finite() || !to.is_finite() || from >= to {
            return Err(ChartError::InvalidData(
                "zone bounds must be finite with from < to".to_owned(),
            ));
        }
        Ok(Self { from, to })
    }

    #[must_use]
    pub fn from(self) -> f64 {
        self.from
    }

    #[must_use]
    pub fn to(self) -> f64 {
        self.to
    }

    #[must_use]
    pub fn contains(self, x: f64) -> bool {
        x >= self.from && x <= self.to
    }

    /// Strict interior test used for move eligibility.
    #[must_use]
    pub fn contains_strictly(self, x: f64) -> bool {
        x > self.from && x < self.to
    }
}

/// Highlighted x-axis band published to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotBand {
    pub id: String,
    pub zone: Zone,
    pub color: String,
}

impl PlotBand {
    #[must_use]
    pub fn new(id: impl Into<String>, zone: Zone, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            zone,
            color: color.into(),
        }
    }
}
