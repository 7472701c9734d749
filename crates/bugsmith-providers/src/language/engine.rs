//! Entity extraction engine
//!
//! Parses a file with its language's grammar, enumerates every callable
//! (top-level and nested) and computes complexity and semantic tags for
//! each, counting only the statements that belong to that callable.

use super::common::{ElseShape, LanguageProfile, Visit, walk_scope};
use super::entity::{CodeEntity, ParsedSource};
use super::profile_for;
use bugsmith_domain::error::{Error, Result};
use bugsmith_domain::{CodeProperty, EntityInfo, EntityKind, Language, TagSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};
use tree_sitter::{Node, Parser, Tree};

/// Entities extracted from a batch of files plus the files that were skipped
#[derive(Debug, Default)]
pub struct ExtractionReport {
    pub entities: Vec<CodeEntity>,
    pub failures: Vec<(PathBuf, Error)>,
}

/// Naming scope pushed while descending: a callable or a class body
struct Frame {
    name: String,
    is_class: bool,
    closures: usize,
}

/// Tree-sitter based entity extractor
#[derive(Debug, Default, Clone, Copy)]
pub struct EntityExtractor;

impl EntityExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }

    /// Parse `text`, failing if the grammar reports any syntax error
    pub fn parse(&self, text: &str, path: &Path, language: Language) -> Result<Arc<ParsedSource>> {
        let profile = profile_for(language)?;
        let tree = parse_tree(profile, text, path)?;
        if tree.root_node().has_error() {
            return Err(Error::parse(path, "source contains syntax errors"));
        }
        Ok(Arc::new(ParsedSource::new(
            path.to_path_buf(),
            language,
            text.to_string(),
            tree,
        )))
    }

    /// Extract every callable from `text`
    pub fn extract(&self, text: &str, path: &Path, language: Language) -> Result<Vec<CodeEntity>> {
        let source = self.parse(text, path, language)?;
        let profile = profile_for(language)?;
        let entities = collect_entities(profile, &source);
        debug!(
            file = %path.display(),
            language = %language,
            entities = entities.len(),
            "Extracted entities"
        );
        Ok(entities)
    }

    /// Read and extract a file, detecting its language from the extension
    pub fn extract_file(&self, path: &Path) -> Result<Vec<CodeEntity>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnsupportedLanguage {
                name: path.display().to_string(),
            })?;
        let language = Language::from_extension(ext).ok_or_else(|| Error::UnsupportedLanguage {
            name: ext.to_string(),
        })?;
        let text = std::fs::read_to_string(path)?;
        self.extract(&text, path, language)
    }

    /// Extract many files; a file that fails is reported and skipped
    pub fn extract_files(&self, paths: &[PathBuf]) -> ExtractionReport {
        let mut report = ExtractionReport::default();
        for path in paths {
            match self.extract_file(path) {
                Ok(entities) => report.entities.extend(entities),
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "Skipping file");
                    report.failures.push((path.clone(), e));
                }
            }
        }
        report
    }
}

/// Whether `text` fails to parse cleanly with the language's grammar
pub fn has_syntax_errors(language: Language, text: &str) -> Result<bool> {
    let profile = profile_for(language)?;
    let tree = parse_tree(profile, text, Path::new("<memory>"))?;
    Ok(tree.root_node().has_error())
}

fn parse_tree(profile: &dyn LanguageProfile, text: &str, path: &Path) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&profile.grammar())
        .map_err(|e| Error::parse(path, format!("Failed to load grammar: {e}")))?;
    parser
        .parse(text, None)
        .ok_or_else(|| Error::parse(path, "Failed to parse file"))
}

fn collect_entities(profile: &dyn LanguageProfile, source: &Arc<ParsedSource>) -> Vec<CodeEntity> {
    let mut entities = Vec::new();
    let mut frames = Vec::new();
    visit(
        source.tree().root_node(),
        profile,
        source,
        &mut frames,
        &mut entities,
    );
    entities
}

fn visit(
    node: Node<'_>,
    profile: &dyn LanguageProfile,
    source: &Arc<ParsedSource>,
    frames: &mut Vec<Frame>,
    entities: &mut Vec<CodeEntity>,
) {
    let text = source.text();
    let pushed = if let Some(mut kind) = profile.callable_kind(node) {
        let name = qualified_name(profile, node, text, frames);
        if kind == EntityKind::Function && frames.last().is_some_and(|f| f.is_class) {
            kind = EntityKind::Method;
        }
        entities.push(build_entity(profile, node, source, name.clone(), kind));
        frames.push(Frame {
            name,
            is_class: false,
            closures: 0,
        });
        true
    } else if let Some(scope) = profile.scope_name(node, text) {
        let name = join_name(frames, &scope);
        frames.push(Frame {
            name,
            is_class: true,
            closures: 0,
        });
        true
    } else {
        false
    };

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        visit(child, profile, source, frames, entities);
    }

    if pushed {
        frames.pop();
    }
}

fn qualified_name(
    profile: &dyn LanguageProfile,
    node: Node<'_>,
    text: &str,
    frames: &mut [Frame],
) -> String {
    match profile.callable_name(node, text) {
        Some(own) => join_name(frames, &own),
        None => {
            let index = match frames.last_mut() {
                Some(frame) => {
                    frame.closures += 1;
                    frame.closures
                }
                None => 1,
            };
            join_name(frames, &format!("func{index}"))
        }
    }
}

fn join_name(frames: &[Frame], own: &str) -> String {
    match frames.last() {
        Some(parent) => format!("{}.{own}", parent.name),
        None => own.to_string(),
    }
}

fn build_entity(
    profile: &dyn LanguageProfile,
    node: Node<'_>,
    source: &Arc<ParsedSource>,
    name: String,
    kind: EntityKind,
) -> CodeEntity {
    let (complexity, tags) = analyze(profile, node);
    let text = source.text();
    let line_start = text[..node.start_byte()].rfind('\n').map_or(0, |i| i + 1);
    let indent = text[line_start..]
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    let info = EntityInfo {
        name,
        file_path: source.path().to_path_buf(),
        language: source.language(),
        kind,
        byte_range: node.start_byte()..node.end_byte(),
        start_line: node.start_position().row + 1,
        end_line: node.end_position().row + 1,
        indent,
        complexity,
        tags,
    };
    CodeEntity::new(info, node.kind(), Arc::clone(source))
}

/// Complexity (one plus decision points) and tags of a callable's own scope
pub(crate) fn analyze(profile: &dyn LanguageProfile, callable: Node<'_>) -> (u32, TagSet) {
    let mut complexity = 1u32;
    let mut tags = TagSet::empty().with(CodeProperty::IsFunction);

    walk_scope(callable, profile, &mut |node| {
        if profile.is_decision_point(node) {
            complexity += 1;
        }
        if profile.is_loop(node) {
            tags.insert(CodeProperty::HasLoop);
        }
        if profile.is_conditional(node) {
            match profile.else_shape(node) {
                ElseShape::Missing => tags.insert(CodeProperty::HasIf),
                ElseShape::Block => tags.insert(CodeProperty::HasIfElse),
                ElseShape::Chained => {}
            }
        }
        if profile.is_assignment(node) {
            tags.insert(CodeProperty::HasAssignment);
        }
        if profile.is_wrapper(node) {
            tags.insert(CodeProperty::HasWrapper);
        }
        Visit::Descend
    });

    (complexity, tags)
}
