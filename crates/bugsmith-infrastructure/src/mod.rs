//! # bugsmith - Infrastructure Layer
//!
//! Cross-cutting concerns around the engine:
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`config`] | Figment-based configuration and the run manifest |
//! | [`logging`] | Tracing subscriber setup |
//! | [`discovery`] | Source file discovery |
//! | [`generator`] | Parallel batch generation over a source tree |

pub mod config;
pub mod constants;
pub mod discovery;
pub mod error_ext;
pub mod generator;
pub mod logging;

pub use config::{AppConfig, ConfigLoader, LoggingConfig, RunManifest};
pub use generator::{BatchReport, BugGenerator, GeneratedBug, SkipReason, SkippedPair};
