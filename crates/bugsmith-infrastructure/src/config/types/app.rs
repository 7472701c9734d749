//! Application configuration

use super::LoggingConfig;
use crate::constants::UNLIMITED;
use bugsmith_domain::Language;
use bugsmith_domain::constants::DEFAULT_SEED;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Strategy name to likelihood, for one language
pub type ModifierTable = BTreeMap<String, f64>;

/// Top-level configuration of a generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Run seed every per-pair seed is derived from
    pub seed: u64,

    /// Bugs kept per entity; 0 keeps all
    pub max_bugs_per_entity: usize,

    /// Entities processed per run; 0 processes all
    pub max_entities: usize,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Per-language strategy tables
    ///
    /// A language present here replaces its default manifest entirely.
    pub modifiers: BTreeMap<Language, ModifierTable>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_bugs_per_entity: UNLIMITED,
            max_entities: UNLIMITED,
            logging: LoggingConfig::default(),
            modifiers: BTreeMap::new(),
        }
    }
}
