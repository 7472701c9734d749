//! Common utilities for language profiles
//!
//! This module contains shared code used by all language-specific profiles.

pub mod constants;
pub mod profile;
pub mod traverser;

// Re-export commonly used types
pub use constants::*;
pub use profile::{ElseShape, LanguageProfile};
pub use traverser::{Visit, walk_scope};
