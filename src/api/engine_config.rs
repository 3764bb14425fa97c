use serde::{Deserialize, Serialize};

use crate::core::{PlotArea, ScaleMode, Viewport, Zone};
use crate::error::{ChartError, ChartResult};
use crate::extensions::StickyLabelLayout;
use crate::interaction::{ClickPositioning, DragPolicy};

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist chart interaction setup next to their
/// own chart options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InteractionEngineConfig {
    pub viewport: Viewport,
    /// Plot rectangle inside the viewport; `None` uses the whole viewport.
    #[serde(default)]
    pub plot_area: Option<PlotArea>,
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(default)]
    pub x_scale_mode: ScaleMode,
    #[serde(default)]
    pub y_scale_mode: ScaleMode,
    #[serde(default)]
    pub working_zone: Option<Zone>,
    #[serde(default)]
    pub click_positioning: ClickPositioning,
    #[serde(default)]
    pub drag_policy: DragPolicy,
    /// Snap step for dragged x values; `0` disables snapping.
    #[serde(default)]
    pub drag_precision_x: f64,
    #[serde(default = "default_allow_point_select")]
    pub allow_point_select: bool,
    #[serde(default)]
    pub sticky_label_layout: StickyLabelLayout,
    #[serde(default = "default_zone_debounce_ms")]
    pub zone_debounce_ms: u64,
}

impl InteractionEngineConfig {
    /// Creates a config with default interaction behavior.
    #[must_use]
    pub fn new(viewport: Viewport, x_min: f64, x_max: f64) -> Self {
        Self {
            viewport,
            plot_area: None,
            x_min,
            x_max,
            y_min: 0.0,
            y_max: 1.0,
            x_scale_mode: ScaleMode::Linear,
            y_scale_mode: ScaleMode::Linear,
            working_zone: None,
            click_positioning: ClickPositioning::default(),
            drag_policy: DragPolicy::default(),
            drag_precision_x: 0.0,
            allow_point_select: default_allow_point_select(),
            sticky_label_layout: StickyLabelLayout::default(),
            zone_debounce_ms: default_zone_debounce_ms(),
        }
    }

    #[must_use]
    pub fn with_y_domain(mut self, y_min: f64, y_max: f64) -> Self {
        self.y_min = y_min;
        self.y_max = y_max;
        self
    }

    #[must_use]
    pub fn with_plot_area(mut self, plot_area: PlotArea) -> Self {
        self.plot_area = Some(plot_area);
        self
    }

    #[must_use]
    pub fn with_scale_modes(mut self, x_mode: ScaleMode, y_mode: ScaleMode) -> Self {
        self.x_scale_mode = x_mode;
        self.y_scale_mode = y_mode;
        self
    }

    #[must_use]
    pub fn with_working_zone(mut self, zone: Zone) -> Self {
        self.working_zone = Some(zone);
        self
    }

    #[must_use]
    pub fn with_click_positioning(mut self, positioning: ClickPositioning) -> Self {
        self.click_positioning = positioning;
        self
    }

    #[must_use]
    pub fn with_drag_policy(mut self, policy: DragPolicy) -> Self {
        self.drag_policy = policy;
        self
    }

    #[must_use]
    pub fn with_drag_precision_x(mut self, precision: f64) -> Self {
        self.drag_precision_x = precision;
        self
    }

    #[must_use]
    pub fn with_point_select(mut self, allow: bool) -> Self {
        self.allow_point_select = allow;
        self
    }

    #[must_use]
    pub fn with_sticky_label_layout(mut self, layout: StickyLabelLayout) -> Self {
        self.sticky_label_layout = layout;
        self
    }

    #[must_use]
    pub fn with_zone_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.zone_debounce_ms = debounce_ms;
        self
    }

    #[must_use]
    pub fn resolved_plot_area(self) -> PlotArea {
        self.plot_area
            .unwrap_or_else(|| PlotArea::full(self.viewport))
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize engine config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse engine config: {e}"))
        })
    }
}

fn default_allow_point_select() -> bool {
    true
}

fn default_zone_debounce_ms() -> u64 {
    500
}
