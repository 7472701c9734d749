//! Configuration
//!
//! [`ConfigLoader`] merges defaults, a TOML file and environment variables
//! into an [`AppConfig`]; [`RunManifest`] resolves it into the concrete
//! strategies applied to each language.

pub mod loader;
pub mod manifest;
pub mod types;

pub use loader::ConfigLoader;
pub use manifest::RunManifest;
pub use types::{AppConfig, LoggingConfig, ModifierTable};
