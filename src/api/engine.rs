use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::core::{
    Axis, AxisOrientation, PlotArea, PlotBand, PointRef, SeriesStore, Viewport, Zone,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{StickyLabel, StickyLabelLayout};
use crate::interaction::{
    ClickPositioning, DragPolicy, DragSession, InteractionState, PointMoves, PointerEvent,
};
use crate::render::Renderer;

use super::forecast_controller::WORKING_ZONE_BAND_ID;
use super::validation::{validate_drag_precision, validate_pointer};
use super::{EventOutcome, InteractionEngineConfig};

/// Main orchestration facade consumed by host applications.
///
/// `InteractionEngine` owns the interaction state of one chart (series,
/// axes, selection, drag session, working zone, sticky label) and reports
/// every visible change to its [`Renderer`]. All handlers take `&mut self`
/// and run to completion; delayed zone moves are driven by
/// [`InteractionEngine::poll_scheduled`].
pub struct InteractionEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) viewport: Viewport,
    pub(super) plot_area: PlotArea,
    pub(super) x_axis: Axis,
    pub(super) y_axis: Axis,
    pub(super) series: SeriesStore,
    pub(super) interaction: InteractionState,
    pub(super) annotation: Option<StickyLabel>,
    pub(super) working_zone: Option<Zone>,
    pub(super) categories: Vec<String>,
    pub(super) click_positioning: ClickPositioning,
    pub(super) drag_policy: DragPolicy,
    pub(super) drag_precision_x: f64,
    pub(super) allow_point_select: bool,
    pub(super) sticky_label_layout: StickyLabelLayout,
    pub(super) zone_debounce: Duration,
    pub(super) label_date: Option<NaiveDate>,
}

impl<R: Renderer> InteractionEngine<R> {
    pub fn new(renderer: R, config: InteractionEngineConfig) -> ChartResult<Self> {
        if !config.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: config.viewport.width,
                height: config.viewport.height,
            });
        }

        let plot_area = config.resolved_plot_area().validate(config.viewport)?;
        let x_axis = Axis::new(
            AxisOrientation::Horizontal,
            config.x_scale_mode,
            config.x_min,
            config.x_max,
            plot_area.left,
            plot_area.width,
        )?;
        let y_axis = Axis::new(
            AxisOrientation::Vertical,
            config.y_scale_mode,
            config.y_min,
            config.y_max,
            plot_area.top,
            plot_area.height,
        )?;
        let working_zone = config
            .working_zone
            .map(|zone| Zone::new(zone.from(), zone.to()))
            .transpose()?;

        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            drag_policy = ?config.drag_policy,
            "interaction engine created"
        );

        let mut engine = Self {
            renderer,
            viewport: config.viewport,
            plot_area,
            x_axis,
            y_axis,
            series: SeriesStore::new(),
            interaction: InteractionState::default(),
            annotation: None,
            working_zone,
            categories: Vec::new(),
            click_positioning: config.click_positioning,
            drag_policy: config.drag_policy,
            drag_precision_x: validate_drag_precision(config.drag_precision_x)?,
            allow_point_select: config.allow_point_select,
            sticky_label_layout: config.sticky_label_layout.validate()?,
            zone_debounce: Duration::from_millis(config.zone_debounce_ms),
            label_date: None,
        };
        engine.publish_working_zone()?;
        Ok(engine)
    }

    /// Dispatches one pointer event to its handler.
    pub fn handle_event(&mut self, event: PointerEvent) -> ChartResult<EventOutcome> {
        trace!(?event, "handle pointer event");
        match event {
            PointerEvent::ChartClick { chart_x, chart_y } => self.chart_click(chart_x, chart_y),
            PointerEvent::PointClick { target, accumulate } => {
                self.point_click(target, accumulate)
            }
            PointerEvent::AnnotationClick => self.dismiss_annotation(),
            PointerEvent::DragStart {
                target,
                chart_x,
                chart_y,
            } => {
                validate_pointer(chart_x, chart_y)?;
                self.drag_start(target, chart_x)
            }
            PointerEvent::Drag {
                target,
                chart_x,
                chart_y,
                at,
            } => {
                validate_pointer(chart_x, chart_y)?;
                self.drag(target, chart_x, at)
            }
            PointerEvent::Drop {
                chart_x, chart_y, ..
            } => {
                validate_pointer(chart_x, chart_y)?;
                Ok(self.drop_drag())
            }
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    #[must_use]
    pub fn x_axis(&self) -> Axis {
        self.x_axis
    }

    #[must_use]
    pub fn y_axis(&self) -> Axis {
        self.y_axis
    }

    /// Converts a chart-relative pointer x into an x-axis value.
    #[must_use]
    pub fn map_pixel_to_x(&self, chart_x: f64) -> f64 {
        self.x_axis.chart_to_value(chart_x)
    }

    pub fn map_x_to_pixel(&self, x: f64) -> ChartResult<f64> {
        self.x_axis.to_chart_pixel(x)
    }

    #[must_use]
    pub fn map_pixel_to_y(&self, chart_y: f64) -> f64 {
        self.y_axis.chart_to_value(chart_y)
    }

    pub fn map_y_to_pixel(&self, y: f64) -> ChartResult<f64> {
        self.y_axis.to_chart_pixel(y)
    }

    /// Zooms the x-axis to `[min, max]`.
    pub fn set_x_extremes(&mut self, min: f64, max: f64) -> ChartResult<()> {
        self.x_axis.set_extremes(min, max)?;
        debug!(min, max, "x extremes changed");
        Ok(())
    }

    pub fn set_y_extremes(&mut self, min: f64, max: f64) -> ChartResult<()> {
        self.y_axis.set_extremes(min, max)?;
        debug!(min, max, "y extremes changed");
        Ok(())
    }

    pub fn pan_x_by_pixels(&mut self, delta_px: f64) -> ChartResult<()> {
        self.x_axis.pan_by_pixels(delta_px)
    }

    pub fn reset_zoom(&mut self) -> ChartResult<()> {
        self.x_axis.reset_extremes()?;
        self.y_axis.reset_extremes()
    }

    /// Plot-relative pixel position of a point (`plot_x`, `plot_y`).
    ///
    /// Returns `None` for unknown points, points without y, and values the
    /// axes cannot map.
    #[must_use]
    pub fn point_plot_position(&self, target: &PointRef) -> Option<(f64, f64)> {
        let point = self.series.point(target)?;
        let plot_x = self.x_axis.to_pixel(point.x).ok()?;
        let plot_y = self.y_axis.to_pixel(point.y?).ok()?;
        Some((plot_x, plot_y))
    }

    #[must_use]
    pub fn click_positioning(&self) -> ClickPositioning {
        self.click_positioning
    }

    pub fn set_click_positioning(&mut self, positioning: ClickPositioning) {
        self.click_positioning = positioning;
    }

    /// Switches between horizontal and vertical click positioning.
    pub fn toggle_click_positioning(&mut self) -> ClickPositioning {
        self.click_positioning = self.click_positioning.toggled();
        self.click_positioning
    }

    #[must_use]
    pub fn drag_policy(&self) -> DragPolicy {
        self.drag_policy
    }

    /// Sets the policy used by the next drag session; an in-progress
    /// session keeps its own policy.
    pub fn set_drag_policy(&mut self, policy: DragPolicy) {
        self.drag_policy = policy;
    }

    #[must_use]
    pub fn drag_precision_x(&self) -> f64 {
        self.drag_precision_x
    }

    pub fn set_drag_precision_x(&mut self, precision: f64) -> ChartResult<()> {
        self.drag_precision_x = validate_drag_precision(precision)?;
        Ok(())
    }

    #[must_use]
    pub fn allow_point_select(&self) -> bool {
        self.allow_point_select
    }

    pub fn set_allow_point_select(&mut self, allow: bool) {
        self.allow_point_select = allow;
        if !allow {
            self.interaction.clear_selection();
        }
    }

    #[must_use]
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.interaction.drag()
    }

    #[must_use]
    pub fn working_zone(&self) -> Option<Zone> {
        self.working_zone
    }

    /// Replaces the working zone and its plot band; `None` removes both.
    pub fn set_working_zone(&mut self, zone: Option<Zone>) -> ChartResult<()> {
        self.working_zone = zone;
        if zone.is_none() {
            self.renderer.remove_plot_band(WORKING_ZONE_BAND_ID)?;
        }
        self.publish_working_zone()?;
        debug!(?zone, "working zone changed");
        Ok(())
    }

    pub(super) fn publish_working_zone(&mut self) -> ChartResult<()> {
        if let Some(zone) = self.working_zone {
            self.renderer
                .set_plot_band(&PlotBand::new(WORKING_ZONE_BAND_ID, zone, "#2b2b2b"))?;
        }
        Ok(())
    }

    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Applies planned moves in place and requests a single redraw.
    pub(super) fn apply_moves(&mut self, moves: PointMoves) -> ChartResult<usize> {
        if moves.is_empty() {
            return Ok(0);
        }
        for planned in &moves {
            if let Some(point) = self.series.point_mut(&planned.target) {
                *point = planned.to;
            }
            self.renderer.update_point(&planned.target, planned.to)?;
        }
        self.renderer.redraw()?;
        trace!(moved = moves.len(), "applied point moves");
        Ok(moves.len())
    }
}
