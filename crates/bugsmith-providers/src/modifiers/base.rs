//! Modifier contract
//!
//! A modifier pairs an eligibility predicate ([`ProceduralModifier::can_change`],
//! pure, no randomness) with a mutation ([`ProceduralModifier::modify`]) that
//! draws from a private deterministic random stream, one draw per candidate
//! site, in traversal order.
//!
//! # Concurrency
//!
//! The random stream is sequential state. Sharing one modifier across
//! workers interleaves draws nondeterministically; give each worker its own
//! seeded instance or serialize calls through a single owner.

use crate::language::CodeEntity;
use bugsmith_domain::constants::{
    DEFAULT_MAX_COMPLEXITY, DEFAULT_MIN_COMPLEXITY, DEFAULT_PM_LIKELIHOOD, DEFAULT_SEED,
};
use bugsmith_domain::error::{Error, Result};
use bugsmith_domain::{BugRewrite, TagSet};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Configuration of one mutation strategy
#[derive(Debug, Clone, PartialEq)]
pub struct ModifierConfig {
    /// Strategy name reported in every rewrite
    pub name: &'static str,
    /// Explanation reported in every rewrite
    pub explanation: &'static str,
    /// Tags an entity must carry
    pub conditions: TagSet,
    /// Probability that an eligible site is mutated
    pub likelihood: f64,
    /// Seed of the private random stream
    pub seed: u64,
    /// Inclusive lower complexity bound
    pub min_complexity: u32,
    /// Inclusive upper complexity bound
    pub max_complexity: u32,
}

impl ModifierConfig {
    /// Configuration with the default likelihood, seed and bounds
    pub fn new(name: &'static str, explanation: &'static str, conditions: TagSet) -> Self {
        Self {
            name,
            explanation,
            conditions,
            likelihood: DEFAULT_PM_LIKELIHOOD,
            seed: DEFAULT_SEED,
            min_complexity: DEFAULT_MIN_COMPLEXITY,
            max_complexity: DEFAULT_MAX_COMPLEXITY,
        }
    }

    #[must_use]
    pub fn with_likelihood(mut self, likelihood: f64) -> Self {
        self.likelihood = likelihood;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_min_complexity(mut self, min: u32) -> Self {
        self.min_complexity = min;
        self
    }

    #[must_use]
    pub fn with_max_complexity(mut self, max: u32) -> Self {
        self.max_complexity = max;
        self
    }

    /// Reject likelihoods outside [0, 1] and inverted bounds
    pub fn validate(&self) -> Result<()> {
        if !self.likelihood.is_finite() || !(0.0..=1.0).contains(&self.likelihood) {
            return Err(Error::invalid_argument(format!(
                "{}: likelihood must be between 0 and 1, got {}",
                self.name, self.likelihood
            )));
        }
        if self.min_complexity > self.max_complexity {
            return Err(Error::invalid_argument(format!(
                "{}: min complexity {} exceeds max complexity {}",
                self.name, self.min_complexity, self.max_complexity
            )));
        }
        Ok(())
    }

    /// Tag containment plus inclusive complexity bounds
    pub fn admits(&self, tags: TagSet, complexity: u32) -> bool {
        tags.is_superset(&self.conditions)
            && (self.min_complexity..=self.max_complexity).contains(&complexity)
    }
}

/// Deterministic biased coin
///
/// Every call to [`Coin::flip`] consumes exactly one `f64` draw.
#[derive(Debug, Clone)]
pub struct Coin {
    rng: StdRng,
    likelihood: f64,
}

impl Coin {
    pub fn new(seed: u64, likelihood: f64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            likelihood,
        }
    }

    /// True with probability equal to the likelihood
    pub fn flip(&mut self) -> bool {
        self.rng.random::<f64>() < self.likelihood
    }
}

/// Interface of every mutation strategy
pub trait ProceduralModifier: Send {
    fn config(&self) -> &ModifierConfig;

    /// The modifier's random stream
    fn coin(&mut self) -> &mut Coin;

    /// Mutate an entity; `None` when no site was chosen or the rewrite
    /// would equal the original
    fn modify(&mut self, entity: &CodeEntity) -> Option<BugRewrite>;

    fn name(&self) -> &'static str {
        self.config().name
    }

    fn explanation(&self) -> &'static str {
        self.config().explanation
    }

    /// Whether the entity satisfies the tag conditions and complexity bounds
    fn can_change(&self, entity: &CodeEntity) -> bool {
        self.config().admits(entity.tags(), entity.complexity())
    }

    /// One draw from the modifier's stream
    fn flip(&mut self) -> bool {
        self.coin().flip()
    }
}

/// Wrap `rewrite` as a [`BugRewrite`] unless it equals the original
#[doc(hidden)]
pub fn finish(
    config: &ModifierConfig,
    entity: &CodeEntity,
    rewrite: Option<String>,
) -> Option<BugRewrite> {
    let rewrite = rewrite?;
    if rewrite == entity.src_code() {
        return None;
    }
    Some(BugRewrite::new(rewrite, config.explanation, config.name))
}
