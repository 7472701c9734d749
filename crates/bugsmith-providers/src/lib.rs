//! # bugsmith - Structural Bug Injection Engine
//!
//! Parses source files with tree-sitter, extracts callables as
//! [`CodeEntity`] values tagged with structural properties, and applies
//! probabilistic, seed-reproducible structural edits to them.
//!
//! ## Components
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`language`] | Grammar profiles and the entity extractor |
//! | [`splice`] | Offset-safe text edits over a parsed file |
//! | [`modifiers`] | Modifier contract, removal and control-flow families |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! bugsmith-providers = { version = "0.1", default-features = false, features = ["lang-go"] }
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use bugsmith_providers::language::EntityExtractor;
//! use bugsmith_providers::modifiers::{ControlIfElseInvertModifier, ProceduralModifier};
//!
//! let entities = EntityExtractor::new().extract(source, "pool.go".as_ref(), Language::Go)?;
//! let mut modifier = ControlIfElseInvertModifier::with_likelihood(1.0)?;
//! for entity in entities.iter().filter(|e| modifier.can_change(e)) {
//!     if let Some(bug) = modifier.modify(entity) {
//!         println!("{}", bug.rewrite);
//!     }
//! }
//! ```

// Re-export domain types commonly used with the engine
pub use bugsmith_domain::error::{Error, Result};
pub use bugsmith_domain::{BugRewrite, CodeProperty, EntityInfo, EntityKind, Language, TagSet};

/// Grammar profiles, entity extraction and tagging
pub mod language;

/// Modifier contract and concrete mutation strategies
pub mod modifiers;

/// Byte-offset text splicing
pub mod splice;

pub use language::{CodeEntity, EntityExtractor};
pub use modifiers::{ModifierConfig, ModifierKind, ProceduralModifier};
