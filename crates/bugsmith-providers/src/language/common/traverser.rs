//! Scoped AST traversal
//!
//! Visits the nodes that belong to one callable in depth-first, source
//! order. Nested callables are separate entities, so traversal stops at
//! them: a statement is only ever seen through its innermost callable.

use super::profile::LanguageProfile;
use tree_sitter::Node;

/// What the traverser does after visiting a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Descend,
    Skip,
}

/// Walk every node owned by `callable`, excluding the callable itself
pub fn walk_scope<'t, F>(callable: Node<'t>, profile: &dyn LanguageProfile, visit: &mut F)
where
    F: FnMut(Node<'t>) -> Visit,
{
    let mut cursor = callable.walk();
    let children: Vec<Node<'t>> = callable.children(&mut cursor).collect();
    for child in children {
        walk_node(child, profile, visit);
    }
}

fn walk_node<'t, F>(node: Node<'t>, profile: &dyn LanguageProfile, visit: &mut F)
where
    F: FnMut(Node<'t>) -> Visit,
{
    if profile.callable_kind(node).is_some() {
        return;
    }
    if visit(node) == Visit::Skip {
        return;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    for child in children {
        walk_node(child, profile, visit);
    }
}
