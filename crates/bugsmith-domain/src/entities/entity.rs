//! Serializable description of an extracted callable

use crate::value_objects::{Language, TagSet};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use std::path::PathBuf;

/// Syntactic flavour of a callable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// Free function
    Function,
    /// Function bound to a receiver or defined inside a class
    Method,
    /// Anonymous function literal
    Closure,
}

/// Entity: identity and metrics of one callable
///
/// Everything about an extracted entity except its parse tree. This is the
/// shape that leaves the engine in reports and JSON output.
///
/// ## Business Rules
///
/// - `byte_range` indexes into the file text the entity was extracted from
/// - Lines are 1-based and inclusive
/// - `complexity` and `tags` are a pure function of the file text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityInfo {
    /// Qualified name, e.g. `Server.Start` or `outer.func1`
    pub name: String,
    /// File the entity was extracted from
    pub file_path: PathBuf,
    /// Grammar used to parse the file
    pub language: Language,
    /// Syntactic flavour
    pub kind: EntityKind,
    /// Byte span within the file
    pub byte_range: Range<usize>,
    /// First line (1-based)
    pub start_line: usize,
    /// Last line (1-based, inclusive)
    pub end_line: usize,
    /// Leading whitespace width of the first line
    pub indent: usize,
    /// One plus the number of decision points
    pub complexity: u32,
    /// Semantic tags
    pub tags: TagSet,
}

impl EntityInfo {
    /// `path::name` identifier used in logs and generated bug ids
    pub fn qualified_id(&self) -> String {
        format!("{}::{}", self.file_path.display(), self.name)
    }
}
