use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

/// Class name that opts a series into click-to-annotate when it carries
/// other class names as well.
pub const POPUP_ON_CLICK_CLASS: &str = "popup-on-click";

/// Caller-supplied series identifier, unique per chart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(String);

impl SeriesId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeriesId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SeriesId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SeriesKind {
    #[default]
    Line,
    Spline,
    Scatter,
}

/// Identity of a point: its series and its position inside that series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointRef {
    pub series: SeriesId,
    pub index: usize,
}

impl PointRef {
    #[must_use]
    pub fn new(series: impl Into<SeriesId>, index: usize) -> Self {
        Self {
            series: series.into(),
            index,
        }
    }
}

/// Named, typed, ordered collection of points plotted together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: SeriesId,
    pub name: String,
    pub kind: SeriesKind,
    pub color: Option<String>,
    #[serde(default)]
    pub class_names: Vec<String>,
    pub points: Vec<DataPoint>,
}

impl Series {
    #[must_use]
    pub fn new(id: impl Into<SeriesId>, kind: SeriesKind) -> Self {
        let id = id.into();
        Self {
            name: id.as_str().to_owned(),
            id,
            kind,
            color: None,
            class_names: Vec::new(),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_names.push(class_name.into());
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.points = points;
        self
    }

    /// Uses the sample position as x, like category-indexed data.
    #[must_use]
    pub fn with_values(mut self, values: &[f64]) -> Self {
        self.points = values
            .iter()
            .enumerate()
            .map(|(index, value)| DataPoint::new(index as f64, *value))
            .collect();
        self
    }

    #[must_use]
    pub fn with_optional_values(mut self, values: &[Option<f64>]) -> Self {
        self.points = values
            .iter()
            .enumerate()
            .map(|(index, value)| match value {
                Some(y) => DataPoint::new(index as f64, *y),
                None => DataPoint::gap(index as f64),
            })
            .collect();
        self
    }

    #[must_use]
    pub fn point(&self, index: usize) -> Option<DataPoint> {
        self.points.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Series without class names, or carrying [`POPUP_ON_CLICK_CLASS`],
    /// produce sticky labels on click.
    #[must_use]
    pub fn accepts_sticky_label(&self) -> bool {
        self.class_names.is_empty()
            || self
                .class_names
                .iter()
                .flat_map(|name| name.split_whitespace())
                .any(|name| name == POPUP_ON_CLICK_CLASS)
    }

    pub(crate) fn validate(&self) -> ChartResult<()> {
        if self.id.as_str().is_empty() {
            return Err(ChartError::InvalidData(
                "series id must not be empty".to_owned(),
            ));
        }
        for point in &self.points {
            if !point.x.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` contains a non-finite x value",
                    self.id
                )));
            }
            if point.y.is_some_and(|y| !y.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` contains a non-finite y value",
                    self.id
                )));
            }
        }
        Ok(())
    }
}

/// y-value of one series at a shared x.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesValue {
    pub series: SeriesId,
    pub name: String,
    pub index: usize,
    pub value: Option<f64>,
}

/// Insertion-ordered series collection keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    series: IndexMap<SeriesId, Series>,
}

impl SeriesStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `series`, removing any existing series with the same id
    /// first. The new series is appended at the end.
    ///
    /// Returns the replaced series, if any.
    pub fn replace(&mut self, series: Series) -> Option<Series> {
        let previous = self.series.shift_remove(&series.id);
        self.series.insert(series.id.clone(), series);
        previous
    }

    pub fn remove(&mut self, id: &SeriesId) -> Option<Series> {
        self.series.shift_remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &SeriesId) -> Option<&Series> {
        self.series.get(id)
    }

    pub fn get_mut(&mut self, id: &SeriesId) -> Option<&mut Series> {
        self.series.get_mut(id)
    }

    #[must_use]
    pub fn point(&self, target: &PointRef) -> Option<DataPoint> {
        self.get(&target.series)?.point(target.index)
    }

    pub fn point_mut(&mut self, target: &PointRef) -> Option<&mut DataPoint> {
        self.get_mut(&target.series)?.points.get_mut(target.index)
    }

    /// Position of a series in insertion order.
    #[must_use]
    pub fn position(&self, id: &SeriesId) -> Option<usize> {
        self.series.get_index_of(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Series> {
        self.series.values_mut()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SeriesId> {
        self.series.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn total_point_count(&self) -> usize {
        self.iter().map(Series::len).sum()
    }

    /// Collects, for every series holding a point at exactly `x`, the first
    /// such point's value.
    #[must_use]
    pub fn values_at_x(&self, x: f64) -> Vec<SeriesValue> {
        self.iter()
            .filter_map(|series| {
                let index = series.points.iter().position(|point| point.x == x)?;
                Some(SeriesValue {
                    series: series.id.clone(),
                    name: series.name.clone(),
                    index,
                    value: series.points[index].y,
                })
            })
            .collect()
    }
}

/// Parses a comma-separated value list as typed into a series form.
///
/// Empty entries (including a trailing comma) become `0`.
pub fn parse_series_values(input: &str) -> ChartResult<Vec<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            if entry.is_empty() {
                return Ok(0.0);
            }
            let value: f64 = entry.parse().map_err(|_| {
                ChartError::InvalidData(format!("series value `{entry}` is not a number"))
            })?;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(ChartError::InvalidData(format!(
                    "series value `{entry}` must be finite"
                )))
            }
        })
        .collect()
}
