//! # bugsmith
//!
//! Structural bug injection for Go and Python sources. Facade over the
//! workspace crates:
//!
//! | Crate | Contents |
//! |-------|----------|
//! | [`domain`] | Languages, tags, entity snapshots, rewrites, errors |
//! | [`providers`] | Extraction and procedural modifiers |
//! | [`infrastructure`] | Configuration, logging, discovery, batch generation |

pub use bugsmith_domain as domain;
pub use bugsmith_infrastructure as infrastructure;
pub use bugsmith_providers as providers;

pub use bugsmith_domain::{BugRewrite, Error, Language, Result};
pub use bugsmith_infrastructure::{BatchReport, BugGenerator, ConfigLoader, RunManifest};
pub use bugsmith_providers::{CodeEntity, EntityExtractor, ModifierKind, ProceduralModifier};
