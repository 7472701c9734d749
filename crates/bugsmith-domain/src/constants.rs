//! Domain layer constants
//!
//! Defaults that define the reproducibility contract of a run. Changing any
//! of these changes the generated dataset for a fixed input.

// ============================================================================
// MODIFIER DEFAULTS
// ============================================================================

/// Likelihood used when a modifier is constructed without an explicit value
pub const DEFAULT_PM_LIKELIHOOD: f64 = 0.2;

/// Seed used when a modifier is constructed without an explicit value
pub const DEFAULT_SEED: u64 = 24;

/// Lower complexity bound applied to every modifier unless overridden
pub const DEFAULT_MIN_COMPLEXITY: u32 = 3;

/// Upper complexity bound applied to every modifier unless overridden
pub const DEFAULT_MAX_COMPLEXITY: u32 = u32::MAX;

// ============================================================================
// STRATEGY NAMES
// ============================================================================

/// Removes loop statements
pub const STRATEGY_REMOVE_LOOP: &str = "func_pm_remove_loop";

/// Removes conditional statements
pub const STRATEGY_REMOVE_COND: &str = "func_pm_remove_cond";

/// Removes assignment and compound assignment statements
pub const STRATEGY_REMOVE_ASSIGN: &str = "func_pm_remove_assign";

/// Removes scoped-resource and error-handling wrappers
pub const STRATEGY_REMOVE_WRAPPER: &str = "func_pm_remove_wrapper";

/// Swaps the bodies of complete if/else constructs
pub const STRATEGY_CTRL_INVERT_IF: &str = "func_pm_ctrl_invert_if";

/// Reorders adjacent statements inside a block
pub const STRATEGY_CTRL_SHUFFLE: &str = "func_pm_ctrl_shuffle";
