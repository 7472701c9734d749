//! Control-flow modifier family
//!
//! - [`ControlIfElseInvertModifier`] swaps the body and else-body of
//!   complete if/else constructs, leaving condition and initializer as-is.
//! - [`ControlShuffleLinesModifier`] swaps adjacent statements in blocks.
//!
//! Both move sub-trees verbatim via [`Transplant`]s, so a moved block keeps
//! whatever swaps were chosen inside it.

use super::base::Coin;
use crate::language::common::{Visit, walk_scope};
use crate::language::CodeEntity;
use crate::splice::{Transplant, render_transplants};
use bugsmith_domain::constants::{
    DEFAULT_MIN_COMPLEXITY, STRATEGY_CTRL_INVERT_IF, STRATEGY_CTRL_SHUFFLE,
};
use bugsmith_domain::CodeProperty;
use tree_sitter::Node;

/// If/else inversion needs a few branches to be worth a bug
const INVERT_IF_MIN_COMPLEXITY: u32 = 5;

procedural_modifier! {
    /// Swaps if/else bodies while keeping the condition
    ///
    /// Chained else-if constructs are not complete if/else constructs and
    /// are never touched; their final `else` pair may be.
    ControlIfElseInvertModifier {
        name: STRATEGY_CTRL_INVERT_IF,
        explanation: "The if-else bodies are swapped while keeping the condition the same.",
        conditions: [CodeProperty::IsFunction, CodeProperty::HasIfElse],
        min_complexity: INVERT_IF_MIN_COMPLEXITY,
        mutate: invert_if_else,
    }
}

procedural_modifier! {
    /// Reorders adjacent statements
    ///
    /// No data-dependency analysis is done; the reordering may change
    /// behavior in ways unrelated to the intended defect.
    ControlShuffleLinesModifier {
        name: STRATEGY_CTRL_SHUFFLE,
        explanation: "The statements in a block are shuffled.",
        conditions: [CodeProperty::IsFunction],
        min_complexity: DEFAULT_MIN_COMPLEXITY,
        mutate: shuffle_statements,
    }
}

/// One draw per complete if/else construct, in pre-order
fn invert_if_else(entity: &CodeEntity, coin: &mut Coin) -> Option<String> {
    let profile = entity.profile()?;
    let callable = entity.node()?;

    let mut transplants = Vec::new();
    walk_scope(callable, profile, &mut |node| {
        if let Some((consequence, alternative)) = profile.if_else_branches(node) {
            if coin.flip() {
                transplants.extend(Transplant::swap(span(consequence), span(alternative)));
            }
        }
        Visit::Descend
    });
    if transplants.is_empty() {
        return None;
    }
    render_transplants(entity.file_text(), entity.byte_range(), &transplants)
}

/// Adjacent-pair swaps
///
/// Containers are visited in pre-order. Within a container, index `i`
/// starts at 0 and each pair `(i, i + 1)` costs one draw: on true the pair
/// is swapped and `i` advances by 2, otherwise by 1.
fn shuffle_statements(entity: &CodeEntity, coin: &mut Coin) -> Option<String> {
    let profile = entity.profile()?;
    let callable = entity.node()?;

    let mut transplants = Vec::new();
    walk_scope(callable, profile, &mut |node| {
        if profile.is_statement_container(node) {
            let statements = profile.statements(node);
            let mut i = 0;
            while i + 1 < statements.len() {
                if coin.flip() {
                    transplants.extend(Transplant::swap(
                        span(statements[i]),
                        span(statements[i + 1]),
                    ));
                    i += 2;
                } else {
                    i += 1;
                }
            }
        }
        Visit::Descend
    });
    if transplants.is_empty() {
        return None;
    }
    render_transplants(entity.file_text(), entity.byte_range(), &transplants)
}

fn span(node: Node<'_>) -> std::ops::Range<usize> {
    node.start_byte()..node.end_byte()
}
