//! Domain entities

mod bug;
mod entity;

pub use bug::BugRewrite;
pub use entity::{EntityInfo, EntityKind};
