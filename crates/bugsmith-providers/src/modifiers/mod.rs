//! Procedural modifiers
//!
//! | Family | Strategies |
//! |--------|------------|
//! | [`removal`] | loop, conditional, assignment, wrapper removal |
//! | [`control_flow`] | if/else inversion, statement shuffle |
//!
//! Concrete strategies are declared with [`procedural_modifier!`] and
//! resolved by name through [`ModifierKind`].
//!
//! [`procedural_modifier!`]: crate::procedural_modifier

#[macro_use]
pub mod macros;

pub mod base;
pub mod control_flow;
pub mod registry;
pub mod removal;

pub use base::{Coin, ModifierConfig, ProceduralModifier};
pub use control_flow::{ControlIfElseInvertModifier, ControlShuffleLinesModifier};
pub use registry::{ModifierKind, default_manifest, list_modifiers};
pub use removal::{
    RemovalTarget, RemoveAssignModifier, RemoveConditionalModifier, RemoveLoopModifier,
    RemoveWrapperModifier,
};
