//! Configuration types

mod app;
mod logging;

pub use app::{AppConfig, ModifierTable};
pub use logging::LoggingConfig;
