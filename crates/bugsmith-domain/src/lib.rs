//! # bugsmith - Domain Layer
//!
//! Core types shared by every layer of the bug generation pipeline:
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`value_objects`] | `Language`, `CodeProperty`, `TagSet` |
//! | [`entities`] | `EntityInfo`, `BugRewrite` |
//! | [`error`] | `Error` taxonomy and `Result` alias |
//! | [`constants`] | Default likelihood, seed and complexity bounds |
//!
//! This crate has no parser dependency. Parsed syntax lives in
//! `bugsmith-providers`, which wraps these types.

pub mod constants;
pub mod entities;
pub mod error;
pub mod value_objects;

pub use entities::{BugRewrite, EntityInfo, EntityKind};
pub use error::{Error, Result};
pub use value_objects::{CodeProperty, Language, TagSet};
