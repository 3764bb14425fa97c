//! chart-sync: headless interaction engine for interactive chart hosts.
//!
//! The crate owns chart interaction state (series, axes, selection, drag
//! session, sticky label) and translates pointer input into synchronized
//! point updates. Drawing stays with the host through the [`render::Renderer`]
//! capability trait.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod feed;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{InteractionEngine, InteractionEngineConfig};
pub use error::{ChartError, ChartResult};
