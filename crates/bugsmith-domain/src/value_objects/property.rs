//! Semantic tags attached to extracted entities
//!
//! Tags form a fixed vocabulary, so a tag set is a single byte and the
//! eligibility check of a modifier is one mask comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A boolean structural fact about a code entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum CodeProperty {
    /// Every extracted callable
    IsFunction = 0,
    /// Contains at least one loop construct
    HasLoop = 1,
    /// Contains a conditional with no else-block
    HasIf = 2,
    /// Contains a conditional whose else-branch is a direct block
    HasIfElse = 3,
    /// Contains an assignment or compound assignment statement
    HasAssignment = 4,
    /// Contains a scoped-resource or error-handling block
    HasWrapper = 5,
}

impl CodeProperty {
    /// Every property, in bit order
    pub const ALL: [Self; 6] = [
        Self::IsFunction,
        Self::HasLoop,
        Self::HasIf,
        Self::HasIfElse,
        Self::HasAssignment,
        Self::HasWrapper,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Stable snake_case name
    pub fn name(&self) -> &'static str {
        match self {
            Self::IsFunction => "is_function",
            Self::HasLoop => "has_loop",
            Self::HasIf => "has_if",
            Self::HasIfElse => "has_if_else",
            Self::HasAssignment => "has_assignment",
            Self::HasWrapper => "has_wrapper",
        }
    }
}

impl fmt::Display for CodeProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of [`CodeProperty`] values backed by a bitmask
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<CodeProperty>", into = "Vec<CodeProperty>")]
pub struct TagSet(u8);

impl TagSet {
    /// The empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Add a property
    pub fn insert(&mut self, property: CodeProperty) {
        self.0 |= property.bit();
    }

    /// Builder form of [`TagSet::insert`]
    #[must_use]
    pub fn with(mut self, property: CodeProperty) -> Self {
        self.insert(property);
        self
    }

    /// Whether the property is present
    pub fn contains(&self, property: CodeProperty) -> bool {
        self.0 & property.bit() != 0
    }

    /// Whether every property of `other` is also in `self`
    pub fn is_superset(&self, other: &TagSet) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate properties in bit order
    pub fn iter(&self) -> impl Iterator<Item = CodeProperty> + '_ {
        CodeProperty::ALL.into_iter().filter(|p| self.contains(*p))
    }
}

impl FromIterator<CodeProperty> for TagSet {
    fn from_iter<I: IntoIterator<Item = CodeProperty>>(iter: I) -> Self {
        let mut set = Self::empty();
        for property in iter {
            set.insert(property);
        }
        set
    }
}

impl From<Vec<CodeProperty>> for TagSet {
    fn from(properties: Vec<CodeProperty>) -> Self {
        properties.into_iter().collect()
    }
}

impl From<TagSet> for Vec<CodeProperty> {
    fn from(set: TagSet) -> Self {
        set.iter().collect()
    }
}
