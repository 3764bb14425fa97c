use crate::core::primitives::ensure_finite;
use crate::error::{ChartError, ChartResult};

pub(super) fn validate_pointer(chart_x: f64, chart_y: f64) -> ChartResult<()> {
    ensure_finite(chart_x, "pointer x")?;
    ensure_finite(chart_y, "pointer y")?;
    Ok(())
}

pub(super) fn validate_drag_precision(precision: f64) -> ChartResult<f64> {
    if ensure_finite(precision, "drag precision")? < 0.0 {
        return Err(ChartError::InvalidData(
            "drag precision must be >= 0".to_owned(),
        ));
    }
    Ok(precision)
}
