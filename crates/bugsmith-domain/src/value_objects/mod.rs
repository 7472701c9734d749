//! Value objects
//!
//! Immutable, comparable values with no identity of their own.

mod language;
mod property;

pub use language::Language;
pub use property::{CodeProperty, TagSet};
