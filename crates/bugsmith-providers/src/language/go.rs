//! Go language profile.

use crate::language::common::{
    ElseShape, LanguageProfile, STATEMENT_KIND_SUFFIX, TS_FIELD_ALTERNATIVE, TS_FIELD_CONDITION,
    TS_FIELD_CONSEQUENCE, TS_FIELD_NAME, TS_FIELD_OPERATOR, TS_NODE_BLOCK, TS_NODE_FOR_STATEMENT,
    TS_NODE_IF_STATEMENT,
};
use bugsmith_domain::{EntityKind, Language};
use tree_sitter::Node;

const TS_NODE_FUNCTION_DECLARATION: &str = "function_declaration";
const TS_NODE_METHOD_DECLARATION: &str = "method_declaration";
const TS_NODE_FUNC_LITERAL: &str = "func_literal";
const TS_NODE_STATEMENT_LIST: &str = "statement_list";
const TS_NODE_ASSIGNMENT_STATEMENT: &str = "assignment_statement";
const TS_NODE_DEFER_STATEMENT: &str = "defer_statement";
const TS_NODE_BINARY_EXPRESSION: &str = "binary_expression";
const TS_FIELD_RECEIVER: &str = "receiver";
const TS_FIELD_TYPE: &str = "type";

/// Case bodies hold statements directly after the case header
const CASE_CLAUSES: &[&str] = &[
    "expression_case",
    "default_case",
    "type_case",
    "communication_case",
];

/// Case clauses that add a path; `default` does not
const BRANCHING_CASES: &[&str] = &["expression_case", "type_case", "communication_case"];

/// Declarations that may appear as statements inside a block
const DECLARATION_STATEMENTS: &[&str] = &[
    "short_var_declaration",
    "var_declaration",
    "const_declaration",
    "type_declaration",
];

/// Go language profile.
#[derive(Debug, Default, Clone, Copy)]
pub struct GoProfile;

impl GoProfile {
    /// Create a new Go profile
    pub fn new() -> Self {
        Self
    }

    /// Receiver type of a method, without pointer marker or type arguments
    fn receiver_type(node: Node<'_>, source: &str) -> Option<String> {
        let receiver = node.child_by_field_name(TS_FIELD_RECEIVER)?;
        let mut cursor = receiver.walk();
        let declaration = receiver.named_children(&mut cursor).next()?;
        let type_node = declaration.child_by_field_name(TS_FIELD_TYPE)?;
        let text = type_node.utf8_text(source.as_bytes()).ok()?;
        let name = text
            .trim_start_matches('*')
            .split('[')
            .next()
            .unwrap_or_default()
            .trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

impl LanguageProfile for GoProfile {
    fn language(&self) -> Language {
        Language::Go
    }

    fn grammar(&self) -> tree_sitter::Language {
        tree_sitter_go::LANGUAGE.into()
    }

    fn callable_kind(&self, node: Node<'_>) -> Option<EntityKind> {
        match node.kind() {
            TS_NODE_FUNCTION_DECLARATION => Some(EntityKind::Function),
            TS_NODE_METHOD_DECLARATION => Some(EntityKind::Method),
            TS_NODE_FUNC_LITERAL => Some(EntityKind::Closure),
            _ => None,
        }
    }

    fn callable_name(&self, node: Node<'_>, source: &str) -> Option<String> {
        if node.kind() == TS_NODE_FUNC_LITERAL {
            return None;
        }
        let name = node
            .child_by_field_name(TS_FIELD_NAME)?
            .utf8_text(source.as_bytes())
            .ok()?;
        match Self::receiver_type(node, source) {
            Some(receiver) => Some(format!("{receiver}.{name}")),
            None => Some(name.to_string()),
        }
    }

    fn is_decision_point(&self, node: Node<'_>) -> bool {
        match node.kind() {
            TS_NODE_IF_STATEMENT | TS_NODE_FOR_STATEMENT => true,
            TS_NODE_BINARY_EXPRESSION => node
                .child_by_field_name(TS_FIELD_OPERATOR)
                .is_some_and(|op| matches!(op.kind(), "&&" | "||")),
            kind => BRANCHING_CASES.contains(&kind),
        }
    }

    fn is_statement(&self, node: Node<'_>) -> bool {
        let kind = node.kind();
        kind.ends_with(STATEMENT_KIND_SUFFIX)
            || kind == TS_NODE_BLOCK
            || DECLARATION_STATEMENTS.contains(&kind)
    }

    fn is_statement_container(&self, node: Node<'_>) -> bool {
        let kind = node.kind();
        kind == TS_NODE_BLOCK || kind == TS_NODE_STATEMENT_LIST || CASE_CLAUSES.contains(&kind)
    }

    fn is_loop(&self, node: Node<'_>) -> bool {
        node.kind() == TS_NODE_FOR_STATEMENT
    }

    fn is_conditional(&self, node: Node<'_>) -> bool {
        node.kind() == TS_NODE_IF_STATEMENT
    }

    fn is_assignment(&self, node: Node<'_>) -> bool {
        node.kind() == TS_NODE_ASSIGNMENT_STATEMENT
    }

    fn is_wrapper(&self, node: Node<'_>) -> bool {
        node.kind() == TS_NODE_DEFER_STATEMENT
    }

    fn else_shape(&self, node: Node<'_>) -> ElseShape {
        match node.child_by_field_name(TS_FIELD_ALTERNATIVE) {
            None => ElseShape::Missing,
            Some(alternative) if alternative.kind() == TS_NODE_BLOCK => ElseShape::Block,
            Some(_) => ElseShape::Chained,
        }
    }

    fn if_else_branches<'t>(&self, node: Node<'t>) -> Option<(Node<'t>, Node<'t>)> {
        if node.kind() != TS_NODE_IF_STATEMENT {
            return None;
        }
        node.child_by_field_name(TS_FIELD_CONDITION)?;
        let consequence = node.child_by_field_name(TS_FIELD_CONSEQUENCE)?;
        let alternative = node.child_by_field_name(TS_FIELD_ALTERNATIVE)?;
        (consequence.kind() == TS_NODE_BLOCK && alternative.kind() == TS_NODE_BLOCK)
            .then_some((consequence, alternative))
    }
}
