//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "bugsmith.toml";

/// Prefix of environment variable overrides
pub const CONFIG_ENV_PREFIX: &str = "BUGSMITH";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Zero disables the corresponding cap
pub const UNLIMITED: usize = 0;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "BUGSMITH_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "bugsmith";

// ============================================================================
// DISCOVERY CONSTANTS
// ============================================================================

/// Directories never descended into during discovery
pub const SKIPPED_DIRECTORIES: &[&str] = &[
    "vendor",
    "node_modules",
    "__pycache__",
    "target",
    "testdata",
];
