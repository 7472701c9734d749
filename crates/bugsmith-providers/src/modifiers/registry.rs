//! Modifier Registry
//!
//! Closed set of built-in strategies, resolvable by name. Each language has
//! a default manifest of strategies and likelihoods.

use super::base::{ModifierConfig, ProceduralModifier};
use super::control_flow::{ControlIfElseInvertModifier, ControlShuffleLinesModifier};
use super::removal::{
    RemoveAssignModifier, RemoveConditionalModifier, RemoveLoopModifier, RemoveWrapperModifier,
};
use bugsmith_domain::constants::{
    STRATEGY_CTRL_INVERT_IF, STRATEGY_CTRL_SHUFFLE, STRATEGY_REMOVE_ASSIGN, STRATEGY_REMOVE_COND,
    STRATEGY_REMOVE_LOOP, STRATEGY_REMOVE_WRAPPER,
};
use bugsmith_domain::error::{Error, Result};
use bugsmith_domain::Language;
use std::fmt;
use std::str::FromStr;

/// Likelihood every strategy gets in a language's default manifest
pub const MANIFEST_LIKELIHOOD: f64 = 0.25;

/// Built-in mutation strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModifierKind {
    RemoveLoop,
    RemoveConditional,
    RemoveAssign,
    RemoveWrapper,
    InvertIf,
    ShuffleLines,
}

impl ModifierKind {
    pub const ALL: [Self; 6] = [
        Self::RemoveLoop,
        Self::RemoveConditional,
        Self::RemoveAssign,
        Self::RemoveWrapper,
        Self::InvertIf,
        Self::ShuffleLines,
    ];

    /// Strategy name as reported in rewrites and accepted in configuration
    pub fn name(self) -> &'static str {
        match self {
            Self::RemoveLoop => STRATEGY_REMOVE_LOOP,
            Self::RemoveConditional => STRATEGY_REMOVE_COND,
            Self::RemoveAssign => STRATEGY_REMOVE_ASSIGN,
            Self::RemoveWrapper => STRATEGY_REMOVE_WRAPPER,
            Self::InvertIf => STRATEGY_CTRL_INVERT_IF,
            Self::ShuffleLines => STRATEGY_CTRL_SHUFFLE,
        }
    }

    /// Resolve a strategy by its name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Built-in configuration: conditions, explanation and complexity bounds
    pub fn default_config(self) -> ModifierConfig {
        match self {
            Self::RemoveLoop => RemoveLoopModifier::default_config(),
            Self::RemoveConditional => RemoveConditionalModifier::default_config(),
            Self::RemoveAssign => RemoveAssignModifier::default_config(),
            Self::RemoveWrapper => RemoveWrapperModifier::default_config(),
            Self::InvertIf => ControlIfElseInvertModifier::default_config(),
            Self::ShuffleLines => ControlShuffleLinesModifier::default_config(),
        }
    }

    /// Instantiate from a full configuration
    ///
    /// `config.name` is ignored; the kind decides the strategy.
    pub fn instantiate(self, config: ModifierConfig) -> Result<Box<dyn ProceduralModifier>> {
        Ok(match self {
            Self::RemoveLoop => Box::new(RemoveLoopModifier::new(config)?),
            Self::RemoveConditional => Box::new(RemoveConditionalModifier::new(config)?),
            Self::RemoveAssign => Box::new(RemoveAssignModifier::new(config)?),
            Self::RemoveWrapper => Box::new(RemoveWrapperModifier::new(config)?),
            Self::InvertIf => Box::new(ControlIfElseInvertModifier::new(config)?),
            Self::ShuffleLines => Box::new(ControlShuffleLinesModifier::new(config)?),
        })
    }

    /// Instantiate with default bounds and the given likelihood and seed
    pub fn build(self, likelihood: f64, seed: u64) -> Result<Box<dyn ProceduralModifier>> {
        let config = self
            .default_config()
            .with_likelihood(likelihood)
            .with_seed(seed);
        self.instantiate(config)
    }
}

impl fmt::Display for ModifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModifierKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| {
            let available: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
            Error::invalid_argument(format!(
                "Unknown modifier '{s}'. Available modifiers: {available:?}"
            ))
        })
    }
}

/// Strategies and likelihoods applied to a language when none are configured
pub fn default_manifest(language: Language) -> Vec<(ModifierKind, f64)> {
    match language {
        Language::Go | Language::Python => ModifierKind::ALL
            .into_iter()
            .map(|kind| (kind, MANIFEST_LIKELIHOOD))
            .collect(),
    }
}

/// (name, explanation) of every built-in strategy
pub fn list_modifiers() -> Vec<(&'static str, &'static str)> {
    ModifierKind::ALL
        .into_iter()
        .map(|kind| {
            let config = kind.default_config();
            (config.name, config.explanation)
        })
        .collect()
}
