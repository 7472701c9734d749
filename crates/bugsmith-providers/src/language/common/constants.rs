//! Tree-sitter node kinds shared across grammars

pub const TS_NODE_BLOCK: &str = "block";
pub const TS_NODE_IF_STATEMENT: &str = "if_statement";
pub const TS_NODE_FOR_STATEMENT: &str = "for_statement";
pub const TS_NODE_WHILE_STATEMENT: &str = "while_statement";
pub const TS_NODE_COMMENT: &str = "comment";
pub const TS_NODE_SEMICOLON: &str = ";";

/// Suffix carried by most statement node kinds in both grammars
pub const STATEMENT_KIND_SUFFIX: &str = "_statement";

// Field names
pub const TS_FIELD_NAME: &str = "name";
pub const TS_FIELD_CONDITION: &str = "condition";
pub const TS_FIELD_CONSEQUENCE: &str = "consequence";
pub const TS_FIELD_ALTERNATIVE: &str = "alternative";
pub const TS_FIELD_BODY: &str = "body";
pub const TS_FIELD_OPERATOR: &str = "operator";
