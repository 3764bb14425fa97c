use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::format_label_date;
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAlign {
    Left,
    Right,
}

/// Geometry rules of the click-to-annotate label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StickyLabelLayout {
    /// Labels anchored closer than this to the right chart edge flip to
    /// right alignment.
    pub right_edge_threshold_px: f64,
    pub horizontal_offset_px: f64,
    /// Added to the anchor y; negative values place the label above.
    pub vertical_offset_px: f64,
    pub update_animation_ms: u64,
}

impl Default for StickyLabelLayout {
    fn default() -> Self {
        Self {
            right_edge_threshold_px: 200.0,
            horizontal_offset_px: 10.0,
            vertical_offset_px: -30.0,
            update_animation_ms: 250,
        }
    }
}

impl StickyLabelLayout {
    pub(crate) fn validate(self) -> ChartResult<Self> {
        for (value, name) in [
            (self.right_edge_threshold_px, "right_edge_threshold_px"),
            (self.horizontal_offset_px, "horizontal_offset_px"),
            (self.vertical_offset_px, "vertical_offset_px"),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "sticky label layout `{name}` must be finite"
                )));
            }
        }
        Ok(self)
    }

    #[must_use]
    pub fn update_animation(self) -> Duration {
        Duration::from_millis(self.update_animation_ms)
    }
}

/// The single persistent label of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickyLabel {
    pub text: String,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub x: f64,
    pub y: f64,
    pub align: LabelAlign,
}

/// Places a label pointing at a chart-relative anchor.
#[must_use]
pub fn place_sticky_label(
    text: String,
    anchor_x: f64,
    anchor_y: f64,
    chart_width: f64,
    layout: StickyLabelLayout,
) -> StickyLabel {
    let align = if anchor_x < chart_width - layout.right_edge_threshold_px {
        LabelAlign::Left
    } else {
        LabelAlign::Right
    };
    let x = match align {
        LabelAlign::Left => anchor_x + layout.horizontal_offset_px,
        LabelAlign::Right => anchor_x - layout.horizontal_offset_px,
    };

    StickyLabel {
        text,
        anchor_x,
        anchor_y,
        x,
        y: anchor_y + layout.vertical_offset_px,
        align,
    }
}

/// Label text: date on the first line, then value and series name.
#[must_use]
pub fn compose_label_text(date: NaiveDate, value: f64, series_name: &str) -> String {
    format!("{}\n{value} {series_name}", format_label_date(date))
}
