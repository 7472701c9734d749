//! Removal modifier family
//!
//! Each strategy deletes whole statements of one syntactic category from an
//! entity. Sites are visited depth-first in source order and each one costs
//! a single draw; a removed statement's subtree is not visited further.
//! All removals of one invocation are accumulated into a single rewrite.

use super::base::Coin;
use crate::language::common::{LanguageProfile, TS_NODE_SEMICOLON, Visit, walk_scope};
use crate::language::CodeEntity;
use crate::splice::{TextEdit, apply_edits};
use bugsmith_domain::constants::{
    DEFAULT_MIN_COMPLEXITY, STRATEGY_REMOVE_ASSIGN, STRATEGY_REMOVE_COND, STRATEGY_REMOVE_LOOP,
    STRATEGY_REMOVE_WRAPPER,
};
use bugsmith_domain::CodeProperty;
use std::collections::HashSet;
use std::ops::Range;
use tree_sitter::Node;

/// Syntactic category a removal strategy deletes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalTarget {
    Loop,
    Conditional,
    Assignment,
    Wrapper,
}

impl RemovalTarget {
    fn matches(self, profile: &dyn LanguageProfile, node: Node<'_>) -> bool {
        match self {
            Self::Loop => profile.is_loop(node),
            Self::Conditional => profile.is_conditional(node),
            Self::Assignment => profile.is_assignment(node),
            Self::Wrapper => profile.is_wrapper(node),
        }
    }
}

procedural_modifier! {
    /// Deletes loop statements
    RemoveLoopModifier {
        name: STRATEGY_REMOVE_LOOP,
        explanation: "There is one or more missing loops that is causing the bug.",
        conditions: [CodeProperty::IsFunction, CodeProperty::HasLoop],
        min_complexity: DEFAULT_MIN_COMPLEXITY,
        mutate: remove_loops,
    }
}

procedural_modifier! {
    /// Deletes conditional statements, else-branches included
    RemoveConditionalModifier {
        name: STRATEGY_REMOVE_COND,
        explanation: "There is one or more missing conditionals that causes the bug.",
        conditions: [CodeProperty::IsFunction, CodeProperty::HasIf],
        min_complexity: DEFAULT_MIN_COMPLEXITY,
        mutate: remove_conditionals,
    }
}

procedural_modifier! {
    /// Deletes assignment and compound assignment statements
    RemoveAssignModifier {
        name: STRATEGY_REMOVE_ASSIGN,
        explanation: "There is likely a missing assignment in the code.",
        conditions: [CodeProperty::IsFunction, CodeProperty::HasAssignment],
        min_complexity: DEFAULT_MIN_COMPLEXITY,
        mutate: remove_assignments,
    }
}

procedural_modifier! {
    /// Deletes scoped-resource and error-handling blocks
    RemoveWrapperModifier {
        name: STRATEGY_REMOVE_WRAPPER,
        explanation: "There are missing wrappers (with, try blocks) in the code.",
        conditions: [CodeProperty::IsFunction, CodeProperty::HasWrapper],
        min_complexity: DEFAULT_MIN_COMPLEXITY,
        mutate: remove_wrappers,
    }
}

fn remove_loops(entity: &CodeEntity, coin: &mut Coin) -> Option<String> {
    remove_sites(entity, RemovalTarget::Loop, coin)
}

fn remove_conditionals(entity: &CodeEntity, coin: &mut Coin) -> Option<String> {
    remove_sites(entity, RemovalTarget::Conditional, coin)
}

fn remove_assignments(entity: &CodeEntity, coin: &mut Coin) -> Option<String> {
    remove_sites(entity, RemovalTarget::Assignment, coin)
}

fn remove_wrappers(entity: &CodeEntity, coin: &mut Coin) -> Option<String> {
    remove_sites(entity, RemovalTarget::Wrapper, coin)
}

/// Mark target statements with one draw each, then delete the marked ones
pub fn remove_sites(entity: &CodeEntity, target: RemovalTarget, coin: &mut Coin) -> Option<String> {
    let profile = entity.profile()?;
    let callable = entity.node()?;

    let mut marked = Vec::new();
    walk_scope(callable, profile, &mut |node| {
        if target.matches(profile, node) && profile.is_block_statement(node) && coin.flip() {
            marked.push(node);
            return Visit::Skip;
        }
        Visit::Descend
    });
    if marked.is_empty() {
        return None;
    }

    let edits = deletion_edits(profile, entity, &marked);
    let rewrite = apply_edits(entity.file_text(), entity.byte_range(), edits)?;
    // Removing the final statement leaves its line break behind
    Some(rewrite.trim_end().to_string())
}

fn deletion_edits(
    profile: &dyn LanguageProfile,
    entity: &CodeEntity,
    marked: &[Node<'_>],
) -> Vec<TextEdit> {
    let ids: HashSet<usize> = marked.iter().map(Node::id).collect();

    let mut edits = Vec::new();
    let mut spans = Vec::new();
    for node in marked {
        match profile.empty_block_filler() {
            Some(filler) if empties_block(profile, *node, &ids) => {
                edits.push(TextEdit::new(node.start_byte()..node.end_byte(), filler));
            }
            _ => spans.push(statement_span(*node)),
        }
    }
    edits.extend(
        deletion_ranges(entity.file_text(), spans, &entity.byte_range())
            .into_iter()
            .map(TextEdit::delete),
    );
    edits
}

/// Whether `node` opens a container whose every statement is being removed
fn empties_block(profile: &dyn LanguageProfile, node: Node<'_>, ids: &HashSet<usize>) -> bool {
    let Some(parent) = node.parent() else {
        return false;
    };
    let statements = profile.statements(parent);
    statements.first().is_some_and(|first| first.id() == node.id())
        && statements.iter().all(|statement| ids.contains(&statement.id()))
}

/// A statement plus its trailing `;`
fn statement_span(node: Node<'_>) -> Range<usize> {
    let end = node
        .next_sibling()
        .filter(|next| next.kind() == TS_NODE_SEMICOLON)
        .map_or(node.end_byte(), |semicolon| semicolon.end_byte());
    node.start_byte()..end
}

/// Ranges to delete for non-overlapping statement spans
///
/// Spans sharing a line are taken together: when nothing but whitespace
/// would be left on their lines, the whole lines go.
fn deletion_ranges(
    text: &str,
    mut spans: Vec<Range<usize>>,
    bounds: &Range<usize>,
) -> Vec<Range<usize>> {
    spans.sort_by_key(|span| span.start);

    let mut ranges = Vec::new();
    let mut i = 0;
    while i < spans.len() {
        let line_start = text[..spans[i].start].rfind('\n').map_or(0, |at| at + 1);
        let mut line_end = end_of_line(text, spans[i].end);
        let mut j = i + 1;
        while j < spans.len() && spans[j].start < line_end {
            line_end = line_end.max(end_of_line(text, spans[j].end));
            j += 1;
        }

        let group = &spans[i..j];
        if only_whitespace_left(text, line_start..line_end, group) {
            ranges.push(line_start.max(bounds.start)..line_end.min(bounds.end));
        } else {
            ranges.extend(group.iter().cloned());
        }
        i = j;
    }
    ranges
}

/// Offset just past the line break ending the line that holds `at`
fn end_of_line(text: &str, at: usize) -> usize {
    text[at..].find('\n').map_or(text.len(), |i| at + i + 1)
}

fn only_whitespace_left(text: &str, lines: Range<usize>, group: &[Range<usize>]) -> bool {
    let mut cursor = lines.start;
    for span in group {
        if !text[cursor..span.start].trim().is_empty() {
            return false;
        }
        cursor = span.end;
    }
    text[cursor..lines.end].trim().is_empty()
}
