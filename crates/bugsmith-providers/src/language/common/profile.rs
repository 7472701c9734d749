//! Language profile trait
//!
//! A profile maps grammar-specific node kinds onto the engine's vocabulary:
//! callables, statements, statement containers, decision points and the
//! structural categories that modifiers target. Everything above this trait
//! is language-agnostic.

use bugsmith_domain::{EntityKind, Language};
use tree_sitter::Node;

/// How a conditional continues after its consequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElseShape {
    /// No else-branch at all
    Missing,
    /// The else-branch is a plain block
    Block,
    /// The else-branch continues as another conditional
    Chained,
}

/// Trait for language-specific structural knowledge
///
/// # Example
///
/// ```ignore
/// use bugsmith_providers::language::profile_for;
///
/// let profile = profile_for(Language::Go)?;
/// let mut parser = tree_sitter::Parser::new();
/// parser.set_language(&profile.grammar())?;
/// let tree = parser.parse(content, None)
///     .ok_or_else(|| anyhow::anyhow!("Failed to parse content"))?;
/// assert!(profile.callable_kind(tree.root_node()).is_none());
/// ```
pub trait LanguageProfile: Send + Sync {
    /// Language this profile describes
    fn language(&self) -> Language;

    /// Tree-sitter grammar
    fn grammar(&self) -> tree_sitter::Language;

    /// Kind of callable rooted at `node`, if any
    fn callable_kind(&self, node: Node<'_>) -> Option<EntityKind>;

    /// Own name segment of a callable; `None` for anonymous ones
    fn callable_name(&self, node: Node<'_>, source: &str) -> Option<String>;

    /// Name contributed by a non-callable naming scope (a class body)
    fn scope_name(&self, _node: Node<'_>, _source: &str) -> Option<String> {
        None
    }

    /// Whether `node` counts as a decision point for complexity
    fn is_decision_point(&self, node: Node<'_>) -> bool;

    /// Whether `node` is a statement kind
    fn is_statement(&self, node: Node<'_>) -> bool;

    /// Whether `node` directly holds a sequence of statements
    fn is_statement_container(&self, node: Node<'_>) -> bool;

    fn is_loop(&self, node: Node<'_>) -> bool;

    fn is_conditional(&self, node: Node<'_>) -> bool;

    /// Assignment or compound assignment, as the statement that holds it
    fn is_assignment(&self, node: Node<'_>) -> bool;

    /// Scoped-resource or error-handling block
    fn is_wrapper(&self, node: Node<'_>) -> bool;

    /// Else-branch shape of a conditional
    fn else_shape(&self, node: Node<'_>) -> ElseShape;

    /// Body and else-body of a complete if/else construct
    ///
    /// Returns `None` unless `node` has a condition, a direct body block and
    /// a direct else block, or when the two blocks cannot trade places
    /// verbatim. Chained else-if constructs are never complete.
    fn if_else_branches<'t>(&self, node: Node<'t>) -> Option<(Node<'t>, Node<'t>)>;

    /// Statement that keeps a block valid once all of its statements are gone
    fn empty_block_filler(&self) -> Option<&'static str> {
        None
    }

    /// Statements held directly by a container, in source order
    ///
    /// Children attached through a field (a case header, a select
    /// communication) are part of the container's header, not its body.
    fn statements<'t>(&self, container: Node<'t>) -> Vec<Node<'t>> {
        let mut statements = Vec::new();
        let mut cursor = container.walk();
        if cursor.goto_first_child() {
            loop {
                let node = cursor.node();
                if node.is_named() && cursor.field_name().is_none() && self.is_statement(node) {
                    statements.push(node);
                }
                if !cursor.goto_next_sibling() {
                    break;
                }
            }
        }
        statements
    }

    /// Whether `node` sits directly in a statement container
    fn is_block_statement(&self, node: Node<'_>) -> bool {
        node.parent().is_some_and(|parent| {
            self.is_statement_container(parent)
                && self
                    .statements(parent)
                    .iter()
                    .any(|statement| statement.id() == node.id())
        })
    }
}
