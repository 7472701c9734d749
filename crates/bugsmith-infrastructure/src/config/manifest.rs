//! Run manifest
//!
//! The validated, resolved form of an [`AppConfig`]: for every language the
//! strategies to apply with their likelihoods, plus the run seed and caps.

use super::AppConfig;
use crate::constants::UNLIMITED;
use bugsmith_domain::Language;
use bugsmith_domain::error::{Error, Result};
use bugsmith_providers::modifiers::{ModifierKind, default_manifest};
use std::collections::BTreeMap;

/// Strategies, likelihoods, seed and caps of one generation run
#[derive(Debug, Clone, PartialEq)]
pub struct RunManifest {
    seed: u64,
    max_bugs_per_entity: Option<usize>,
    max_entities: Option<usize>,
    modifiers: BTreeMap<Language, Vec<(ModifierKind, f64)>>,
}

impl RunManifest {
    /// Resolve a configuration, rejecting unknown strategies and bad likelihoods
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let mut modifiers = BTreeMap::new();
        for language in Language::ALL {
            let entries = match config.modifiers.get(&language) {
                Some(table) => {
                    let mut entries = table
                        .iter()
                        .map(|(name, likelihood)| resolve_entry(language, name, *likelihood))
                        .collect::<Result<Vec<_>>>()?;
                    entries.sort_by_key(|(kind, _)| *kind);
                    entries
                }
                None => default_manifest(language),
            };
            modifiers.insert(language, entries);
        }

        Ok(Self {
            seed: config.seed,
            max_bugs_per_entity: cap(config.max_bugs_per_entity),
            max_entities: cap(config.max_entities),
            modifiers,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn max_bugs_per_entity(&self) -> Option<usize> {
        self.max_bugs_per_entity
    }

    pub fn max_entities(&self) -> Option<usize> {
        self.max_entities
    }

    /// Strategies applied to entities of `language`, in registry order
    pub fn modifiers_for(&self, language: Language) -> &[(ModifierKind, f64)] {
        self.modifiers
            .get(&language)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Same manifest under another run seed
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Restrict every language to the given strategies, keeping likelihoods
    #[must_use]
    pub fn retain(mut self, kinds: &[ModifierKind]) -> Self {
        for entries in self.modifiers.values_mut() {
            entries.retain(|(kind, _)| kinds.contains(kind));
        }
        self
    }
}

impl Default for RunManifest {
    fn default() -> Self {
        Self {
            seed: AppConfig::default().seed,
            max_bugs_per_entity: None,
            max_entities: None,
            modifiers: Language::ALL
                .into_iter()
                .map(|language| (language, default_manifest(language)))
                .collect(),
        }
    }
}

fn resolve_entry(language: Language, name: &str, likelihood: f64) -> Result<(ModifierKind, f64)> {
    let kind = ModifierKind::from_name(name).ok_or_else(|| {
        Error::config(format!("Unknown modifier '{name}' configured for {language}"))
    })?;
    if !likelihood.is_finite() || !(0.0..=1.0).contains(&likelihood) {
        return Err(Error::config(format!(
            "Likelihood of {name} for {language} must be between 0 and 1, got {likelihood}"
        )));
    }
    Ok((kind, likelihood))
}

fn cap(value: usize) -> Option<usize> {
    (value != UNLIMITED).then_some(value)
}
