use std::time::Duration;

use chart_sync::core::{PointRef, SeriesKind, Viewport, Zone};
use chart_sync::feed::{OPEN_METEO_FORECAST_URL, fetch_forecast};
use chart_sync::interaction::{DragPolicy, PointerEvent};
use chart_sync::render::NullRenderer;
use chart_sync::telemetry::init_tracing;
use chart_sync::{InteractionEngine, InteractionEngineConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if !init_tracing("chart_sync=debug") {
        eprintln!("tracing subscriber not installed; logs disabled");
    }

    let config = InteractionEngineConfig::new(Viewport::new(1280, 640), 0.0, 167.0)
        .with_y_domain(-15.0, 40.0)
        .with_working_zone(Zone::new(24.0, 48.0)?)
        .with_drag_policy(DragPolicy::Zone);
    let mut engine = InteractionEngine::new(NullRenderer::default(), config)?;

    match fetch_forecast(OPEN_METEO_FORECAST_URL) {
        Ok(forecast) => engine.load_forecast(&forecast, SeriesKind::Spline)?,
        Err(err) => {
            engine.forecast_failed(&err)?;
            return Err(err.into());
        }
    }
    println!(
        "loaded {} series, {} hourly points",
        engine.series_store().len(),
        engine.total_point_count()
    );

    let target = PointRef::new("tem2m", 30);
    let start_x = engine.map_x_to_pixel(30.0)?;
    engine.handle_event(PointerEvent::DragStart {
        target: target.clone(),
        chart_x: start_x,
        chart_y: 320.0,
    })?;

    // Replay a short drag, one tick every 40ms, nudging the zone right.
    let mut now = Duration::ZERO;
    for step in 1..=6 {
        now += Duration::from_millis(40);
        let outcome = engine.handle_event(PointerEvent::Drag {
            target: target.clone(),
            chart_x: start_x + f64::from(step) * 1.5,
            chart_y: 320.0,
            at: now,
        })?;
        println!("tick {step}: scheduled={:?}", outcome.scheduled);
    }

    if let Some(due) = engine.next_due() {
        let moved = engine.poll_scheduled(due)?;
        println!("zone move applied at {due:?}: {moved} points");
    }
    engine.handle_event(PointerEvent::Drop {
        target: target.clone(),
        chart_x: start_x + 9.0,
        chart_y: 320.0,
    })?;

    let outcome = engine.handle_event(PointerEvent::PointClick {
        target,
        accumulate: false,
    })?;
    if let Some(label) = engine.annotation() {
        println!("sticky label ({:?}): {}", outcome.annotation, label.text.replace('\n', " | "));
    }
    println!("redraws: {}", engine.renderer().redraw_count);

    Ok(())
}
