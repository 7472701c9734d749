//! Python language profile.

use crate::language::common::{
    ElseShape, LanguageProfile, STATEMENT_KIND_SUFFIX, TS_FIELD_BODY, TS_FIELD_CONDITION,
    TS_FIELD_CONSEQUENCE, TS_FIELD_NAME, TS_NODE_BLOCK, TS_NODE_FOR_STATEMENT,
    TS_NODE_IF_STATEMENT, TS_NODE_WHILE_STATEMENT,
};
use bugsmith_domain::{EntityKind, Language};
use tree_sitter::Node;

const TS_NODE_FUNCTION_DEFINITION: &str = "function_definition";
const TS_NODE_CLASS_DEFINITION: &str = "class_definition";
const TS_NODE_DECORATED_DEFINITION: &str = "decorated_definition";
const TS_NODE_EXPRESSION_STATEMENT: &str = "expression_statement";
const TS_NODE_ELIF_CLAUSE: &str = "elif_clause";
const TS_NODE_ELSE_CLAUSE: &str = "else_clause";

const DECISION_POINTS: &[&str] = &[
    TS_NODE_IF_STATEMENT,
    TS_NODE_ELIF_CLAUSE,
    TS_NODE_FOR_STATEMENT,
    TS_NODE_WHILE_STATEMENT,
    "except_clause",
    "case_clause",
    "conditional_expression",
    "boolean_operator",
];

const ASSIGNMENTS: &[&str] = &["assignment", "augmented_assignment"];

const WRAPPERS: &[&str] = &["with_statement", "try_statement"];

fn is_clause(node: &Node<'_>) -> bool {
    matches!(node.kind(), TS_NODE_ELIF_CLAUSE | TS_NODE_ELSE_CLAUSE)
}

/// Python language profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct PythonProfile;

impl PythonProfile {
    /// Create a new Python profile
    pub fn new() -> Self {
        Self
    }

    fn name_of(node: Node<'_>, source: &str) -> Option<String> {
        node.child_by_field_name(TS_FIELD_NAME)?
            .utf8_text(source.as_bytes())
            .ok()
            .map(str::to_string)
    }

    /// Clause continuing a chain link: the first clause of an `if`, the
    /// following clause of an `elif`
    fn continuation(node: Node<'_>) -> Option<Node<'_>> {
        match node.kind() {
            TS_NODE_IF_STATEMENT => {
                let mut cursor = node.walk();
                node.named_children(&mut cursor).find(is_clause)
            }
            TS_NODE_ELIF_CLAUSE => {
                let mut next = node.next_named_sibling();
                while let Some(sibling) = next {
                    if is_clause(&sibling) {
                        return Some(sibling);
                    }
                    next = sibling.next_named_sibling();
                }
                None
            }
            _ => None,
        }
    }

    /// Whether a block starts on a line of its own, below its header
    fn opens_own_line(block: Node<'_>) -> bool {
        block
            .prev_sibling()
            .is_some_and(|header| block.start_position().row > header.end_position().row)
    }
}

impl LanguageProfile for PythonProfile {
    fn language(&self) -> Language {
        Language::Python
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_python::LANGUAGE.into()
    }

    fn callable_kind(&self, node: Node<'_>) -> Option<EntityKind> {
        // Methods are told apart by the extractor, which knows the enclosing scope
        (node.kind() == TS_NODE_FUNCTION_DEFINITION).then_some(EntityKind::Function)
    }

    fn callable_name(&self, node: Node<'_>, source: &str) -> Option<String> {
        Self::name_of(node, source)
    }

    fn scope_name(&self, node: Node<'_>, source: &str) -> Option<String> {
        if node.kind() == TS_NODE_CLASS_DEFINITION {
            Self::name_of(node, source)
        } else {
            None
        }
    }

    fn is_decision_point(&self, node: Node<'_>) -> bool {
        DECISION_POINTS.contains(&node.kind())
    }

    fn is_statement(&self, node: Node<'_>) -> bool {
        let kind = node.kind();
        kind.ends_with(STATEMENT_KIND_SUFFIX)
            || matches!(
                kind,
                TS_NODE_FUNCTION_DEFINITION | TS_NODE_CLASS_DEFINITION | TS_NODE_DECORATED_DEFINITION
            )
    }

    fn is_statement_container(&self, node: Node<'_>) -> bool {
        node.kind() == TS_NODE_BLOCK
    }

    fn is_loop(&self, node: Node<'_>) -> bool {
        matches!(node.kind(), TS_NODE_FOR_STATEMENT | TS_NODE_WHILE_STATEMENT)
    }

    fn is_conditional(&self, node: Node<'_>) -> bool {
        // An elif is the next link of the chain, as Go's nested `else if`
        matches!(node.kind(), TS_NODE_IF_STATEMENT | TS_NODE_ELIF_CLAUSE)
    }

    fn is_assignment(&self, node: Node<'_>) -> bool {
        if node.kind() != TS_NODE_EXPRESSION_STATEMENT {
            return false;
        }
        let mut cursor = node.walk();
        let first = node.named_children(&mut cursor).next();
        first.is_some_and(|child| ASSIGNMENTS.contains(&child.kind()))
    }

    fn is_wrapper(&self, node: Node<'_>) -> bool {
        WRAPPERS.contains(&node.kind())
    }

    fn else_shape(&self, node: Node<'_>) -> ElseShape {
        match Self::continuation(node).map(|clause| clause.kind()) {
            None => ElseShape::Missing,
            Some(TS_NODE_ELSE_CLAUSE) => ElseShape::Block,
            Some(_) => ElseShape::Chained,
        }
    }

    fn if_else_branches<'t>(&self, node: Node<'t>) -> Option<(Node<'t>, Node<'t>)> {
        if !self.is_conditional(node) {
            return None;
        }
        node.child_by_field_name(TS_FIELD_CONDITION)?;
        let consequence = node.child_by_field_name(TS_FIELD_CONSEQUENCE)?;
        let else_clause =
            Self::continuation(node).filter(|clause| clause.kind() == TS_NODE_ELSE_CLAUSE)?;
        let alternative = else_clause.child_by_field_name(TS_FIELD_BODY)?;
        if consequence.kind() != TS_NODE_BLOCK || alternative.kind() != TS_NODE_BLOCK {
            return None;
        }
        // Moved text keeps its indentation, so both bodies must be laid out alike
        let aligned = Self::opens_own_line(consequence)
            && Self::opens_own_line(alternative)
            && consequence.start_position().column == alternative.start_position().column;
        aligned.then_some((consequence, alternative))
    }

    fn empty_block_filler(&self) -> Option<&'static str> {
        Some("pass")
    }
}
