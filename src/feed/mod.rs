//! Hourly temperature forecast adapter.
//!
//! Decodes the Open-Meteo hourly payload (ISO-8601 timestamps plus numeric
//! arrays keyed by parameter name) into index-aligned series. Decoding is
//! all-or-nothing: any missing or misaligned array rejects the whole
//! forecast.

use chrono::Timelike;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Series, SeriesKind, format_category_label, parse_local_timestamp};
use crate::error::{ChartError, ChartResult};

pub const OPEN_METEO_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast?latitude=48.112&longitude=-1.6743&current=temperature_2m&hourly=temperature_2m,apparent_temperature,temperature_20m,temperature_50m,temperature_100m,temperature_150m,temperature_200m&timezone=Europe%2FBerlin&models=meteofrance_seamless";

/// How one forecast parameter is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastSeriesDef {
    pub parameter: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

pub const TEMPERATURE_SERIES: [ForecastSeriesDef; 7] = [
    ForecastSeriesDef {
        parameter: "apparent_temperature",
        id: "temres",
        name: "Apparent temperature",
        color: "yellow",
    },
    ForecastSeriesDef {
        parameter: "temperature_2m",
        id: "tem2m",
        name: "Temperature (2m)",
        color: "#F3F3FC",
    },
    ForecastSeriesDef {
        parameter: "temperature_20m",
        id: "tem20m",
        name: "Temperature (20m)",
        color: "#BABDED",
    },
    ForecastSeriesDef {
        parameter: "temperature_50m",
        id: "tem50m",
        name: "Temperature (50m)",
        color: "#858BE0",
    },
    ForecastSeriesDef {
        parameter: "temperature_100m",
        id: "tem100m",
        name: "Temperature (100m)",
        color: "#4B54D1",
    },
    ForecastSeriesDef {
        parameter: "temperature_150m",
        id: "tem150m",
        name: "Temperature (150m)",
        color: "#2F38B7",
    },
    ForecastSeriesDef {
        parameter: "temperature_200m",
        id: "tem200m",
        name: "Temperature (200m)",
        color: "#222986",
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    #[serde(flatten)]
    pub values: IndexMap<String, Vec<Option<f64>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub current: CurrentConditions,
    pub hourly: HourlyData,
}

impl Forecast {
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse forecast json payload: {e}"))
        })
    }

    /// Builds one series per entry of [`TEMPERATURE_SERIES`], x = hour index.
    pub fn temperature_series(&self, kind: SeriesKind) -> ChartResult<Vec<Series>> {
        let expected_len = self.hourly.time.len();
        TEMPERATURE_SERIES
            .iter()
            .map(|def| {
                let values = self.hourly.values.get(def.parameter).ok_or_else(|| {
                    ChartError::InvalidData(format!(
                        "forecast is missing hourly `{}`",
                        def.parameter
                    ))
                })?;
                if values.len() != expected_len {
                    return Err(ChartError::InvalidData(format!(
                        "hourly `{}` has {} values for {} timestamps",
                        def.parameter,
                        values.len(),
                        expected_len
                    )));
                }
                if values.iter().flatten().any(|value| !value.is_finite()) {
                    return Err(ChartError::InvalidData(format!(
                        "hourly `{}` contains non-finite values",
                        def.parameter
                    )));
                }
                Ok(Series::new(def.id, kind)
                    .with_name(def.name)
                    .with_color(def.color)
                    .with_optional_values(values))
            })
            .collect()
    }

    /// Formats every hourly timestamp as an x-axis category label.
    pub fn category_labels(&self) -> ChartResult<Vec<String>> {
        self.hourly
            .time
            .iter()
            .map(|time| parse_local_timestamp(time).map(format_category_label))
            .collect()
    }

    /// Index of the hourly sample in the same hour as `current.time`.
    pub fn current_hour_index(&self) -> ChartResult<Option<usize>> {
        let current = parse_local_timestamp(&self.current.time)?;
        for (index, time) in self.hourly.time.iter().enumerate() {
            let hourly = parse_local_timestamp(time)?;
            if hourly.date() == current.date() && hourly.hour() == current.hour() {
                return Ok(Some(index));
            }
        }
        Ok(None)
    }
}

/// Fetches the forecast over blocking HTTP.
///
/// Hosts call this off their event loop and hand the result back to
/// [`crate::api::InteractionEngine::load_forecast`] or
/// [`crate::api::InteractionEngine::forecast_failed`].
#[cfg(feature = "weather-fetch")]
pub fn fetch_forecast(url: &str) -> ChartResult<Forecast> {
    use std::time::Duration;

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(12))
        .build()
        .map_err(|e| ChartError::Fetch(format!("client error: {e}")))?;
    let body = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|e| ChartError::Fetch(format!("request error: {e}")))?;
    Forecast::from_json_str(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "latitude": 48.1,
        "current": { "time": "2024-05-01T01:45", "interval": 900, "temperature_2m": 9.1 },
        "hourly_units": { "time": "iso8601" },
        "hourly": {
            "time": ["2024-05-01T00:00", "2024-05-01T01:00", "2024-05-01T02:00"],
            "temperature_2m": [9.0, 9.2, null],
            "apparent_temperature": [7.5, 7.9, 8.0],
            "temperature_20m": [9.1, 9.3, 9.4],
            "temperature_50m": [9.0, 9.1, 9.2],
            "temperature_100m": [8.8, 8.9, 9.0],
            "temperature_150m": [8.6, 8.7, 8.8],
            "temperature_200m": [8.4, 8.5, 8.6]
        }
    }"#;

    #[test]
    fn decodes_aligned_series() {
        let forecast = Forecast::from_json_str(PAYLOAD).expect("parse");
        let series = forecast
            .temperature_series(SeriesKind::Spline)
            .expect("series");

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].id.as_str(), "temres");
        assert_eq!(series[1].points[2].y, None);
        assert_eq!(series[1].points[2].x, 2.0);
        assert!(series.iter().all(|s| s.len() == 3));
    }

    #[test]
    fn finds_current_hour_and_labels() {
        let forecast = Forecast::from_json_str(PAYLOAD).expect("parse");
        assert_eq!(forecast.current_hour_index().expect("index"), Some(1));
        assert_eq!(
            forecast.category_labels().expect("labels")[1],
            "01:00 01/05/2024"
        );
    }

    #[test]
    fn misaligned_arrays_reject_whole_forecast() {
        let mut forecast = Forecast::from_json_str(PAYLOAD).expect("parse");
        forecast
            .hourly
            .values
            .insert("temperature_50m".to_owned(), vec![Some(1.0)]);
        assert!(forecast.temperature_series(SeriesKind::Line).is_err());
    }
}
