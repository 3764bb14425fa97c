use chrono::{NaiveDate, NaiveDateTime};

use crate::error::{ChartError, ChartResult};

const LOCAL_TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Parses an ISO-8601 local timestamp without offset (`2024-05-01T13:00`).
pub fn parse_local_timestamp(value: &str) -> ChartResult<NaiveDateTime> {
    LOCAL_TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .ok_or_else(|| ChartError::InvalidData(format!("invalid local timestamp `{value}`")))
}

/// Formats an x-axis category label (`13:00 01/05/2024`).
#[must_use]
pub fn format_category_label(time: NaiveDateTime) -> String {
    time.format("%H:%M %d/%m/%Y").to_string()
}

/// Formats the date line of a sticky label (`01/05/2024`).
#[must_use]
pub fn format_label_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Rounds `value` to the nearest multiple of `precision`.
///
/// A precision of `0` disables snapping.
#[must_use]
pub fn snap_to_precision(value: f64, precision: f64) -> f64 {
    if precision <= 0.0 || !precision.is_finite() || !value.is_finite() {
        return value;
    }
    (value / precision).round() * precision
}

pub fn ensure_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{field_name} must be finite")))
    }
}
