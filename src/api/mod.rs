mod annotation_controller;
mod click_controller;
mod drag_controller;
mod engine;
mod engine_config;
mod forecast_controller;
mod series_controller;
mod validation;

use serde::{Deserialize, Serialize};

use crate::interaction::TaskHandle;

pub use engine::InteractionEngine;
pub use engine_config::InteractionEngineConfig;
pub use forecast_controller::{CURRENT_HOUR_BAND_ID, WORKING_ZONE_BAND_ID};

/// What happened to the sticky label while handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationChange {
    Created,
    Updated,
    Dismissed,
}

/// Summary of one handled pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventOutcome {
    /// Points whose coordinates changed.
    pub moved: usize,
    pub annotation: Option<AnnotationChange>,
    /// Zone move scheduled by this event.
    pub scheduled: Option<TaskHandle>,
    /// Pending zone move canceled by this event.
    pub canceled: Option<TaskHandle>,
}
