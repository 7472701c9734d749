//! Mutation result

use serde::{Deserialize, Serialize};

/// Entity: output of a successful mutation
///
/// `rewrite` is the full buggy text of the affected entity. A modifier only
/// ever returns a `BugRewrite` whose rewrite differs from the original
/// source; no-op outcomes are reported as `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BugRewrite {
    /// Rewritten entity text
    pub rewrite: String,
    /// Human-readable description of the injected defect
    pub explanation: String,
    /// Name of the strategy that produced it
    pub strategy: String,
}

impl BugRewrite {
    pub fn new(
        rewrite: impl Into<String>,
        explanation: impl Into<String>,
        strategy: impl Into<String>,
    ) -> Self {
        Self {
            rewrite: rewrite.into(),
            explanation: explanation.into(),
            strategy: strategy.into(),
        }
    }
}
