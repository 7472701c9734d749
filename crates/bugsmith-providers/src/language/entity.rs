//! Extracted code entities

use super::common::LanguageProfile;
use super::profile_for;
use bugsmith_domain::{EntityInfo, Language, TagSet};
use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tree_sitter::{Node, Tree};

/// One parsed file: its text and the syntax tree over it
///
/// Shared by every entity extracted from the file, so modifiers work on
/// file offsets without reparsing.
pub struct ParsedSource {
    path: PathBuf,
    language: Language,
    text: String,
    tree: Tree,
}

impl ParsedSource {
    pub(crate) fn new(path: PathBuf, language: Language, text: String, tree: Tree) -> Self {
        Self {
            path,
            language,
            text,
            tree,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }
}

impl fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedSource")
            .field("path", &self.path)
            .field("language", &self.language)
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}

/// An immutable snapshot of one callable
///
/// Cloning is cheap: the parsed file is shared. Many modifiers may read the
/// same entity and each produces an independent result.
#[derive(Clone)]
pub struct CodeEntity {
    info: EntityInfo,
    node_kind: &'static str,
    source: Arc<ParsedSource>,
}

impl CodeEntity {
    pub(crate) fn new(info: EntityInfo, node_kind: &'static str, source: Arc<ParsedSource>) -> Self {
        Self {
            info,
            node_kind,
            source,
        }
    }

    /// Serializable identity and metrics
    pub fn info(&self) -> &EntityInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn file_path(&self) -> &Path {
        &self.info.file_path
    }

    pub fn language(&self) -> Language {
        self.info.language
    }

    pub fn complexity(&self) -> u32 {
        self.info.complexity
    }

    pub fn tags(&self) -> TagSet {
        self.info.tags
    }

    pub fn byte_range(&self) -> Range<usize> {
        self.info.byte_range.clone()
    }

    /// Source text of the entity
    pub fn src_code(&self) -> &str {
        &self.source.text[self.info.byte_range.clone()]
    }

    /// Text of the whole file the entity lives in
    pub fn file_text(&self) -> &str {
        &self.source.text
    }

    /// Parsed file shared with sibling entities
    pub fn source(&self) -> &Arc<ParsedSource> {
        &self.source
    }

    /// Profile of the entity's language
    pub fn profile(&self) -> Option<&'static dyn LanguageProfile> {
        profile_for(self.info.language).ok()
    }

    /// Syntax subtree rooted at the callable
    ///
    /// `None` only if the shared tree no longer has a node of the recorded
    /// kind at the recorded span, which extraction never produces.
    pub fn node(&self) -> Option<Node<'_>> {
        let Range { start, end } = self.info.byte_range;
        let mut node = self
            .source
            .tree
            .root_node()
            .descendant_for_byte_range(start, end)?;
        loop {
            if node.kind() == self.node_kind && node.start_byte() == start && node.end_byte() == end
            {
                return Some(node);
            }
            node = node.parent()?;
        }
    }

    /// File text with the entity's span replaced by `rewrite`
    pub fn splice_into_file(&self, rewrite: &str) -> String {
        let Range { start, end } = self.info.byte_range;
        let text = &self.source.text;
        let mut out = String::with_capacity(text.len() - (end - start) + rewrite.len());
        out.push_str(&text[..start]);
        out.push_str(rewrite);
        out.push_str(&text[end..]);
        out
    }
}

impl fmt::Debug for CodeEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodeEntity")
            .field("info", &self.info)
            .field("node_kind", &self.node_kind)
            .finish_non_exhaustive()
    }
}
