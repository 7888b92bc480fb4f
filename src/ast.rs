use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::diag::Span;

/// One syntax-tree node in the external parser's ESTree shape: a `loc`
/// reporting span plus a kind tagged by the JSON `type` discriminator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loc: Option<Span>,
    #[serde(flatten)]
    pub kind: NodeKind,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self { loc: None, kind }
    }

    /// The statement sequence this node owns, if it is a block owner:
    /// a program body, a compound statement body, or a switch-case
    /// consequent list.
    pub fn block(&self) -> Option<&[Node]> {
        match &self.kind {
            NodeKind::Program { body } | NodeKind::BlockStatement { body } => Some(body),
            NodeKind::SwitchCase { consequent, .. } => Some(consequent),
            _ => None,
        }
    }

    pub fn block_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.kind {
            NodeKind::Program { body } | NodeKind::BlockStatement { body } => Some(body),
            NodeKind::SwitchCase { consequent, .. } => Some(consequent),
            _ => None,
        }
    }

    /// The body statement sequence of a function node. Arrow functions with
    /// an expression body have no statement sequence and yield `None`.
    pub fn function_body_mut(&mut self) -> Option<&mut Vec<Node>> {
        match &mut self.kind {
            NodeKind::FunctionDeclaration { body, .. }
            | NodeKind::FunctionExpression { body, .. }
            | NodeKind::ArrowFunctionExpression { body, .. } => match &mut body.kind {
                NodeKind::BlockStatement { body } => Some(body),
                _ => None,
            },
            _ => None,
        }
    }
}

/// Declaration keyword of a `VariableDeclaration`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    Var,
    Let,
    Const,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    #[serde(rename = "-")]
    Minus,
    #[serde(rename = "+")]
    Plus,
    #[serde(rename = "!")]
    Not,
    #[serde(rename = "~")]
    BitNot,
    #[serde(rename = "typeof")]
    TypeOf,
    #[serde(rename = "void")]
    Void,
    #[serde(rename = "delete")]
    Delete,
}

/// The ES5 node kinds an ESTree producer emits. Kinds the passes do not
/// inspect are carried (and traversed) as inert structure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum NodeKind {
    // --- Programs and statements ---
    Program {
        body: Vec<Node>,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    EmptyStatement,
    DebuggerStatement,
    ExpressionStatement {
        expression: Box<Node>,
    },
    IfStatement {
        test: Box<Node>,
        consequent: Box<Node>,
        #[serde(default)]
        alternate: Option<Box<Node>>,
    },
    LabeledStatement {
        label: Box<Node>,
        body: Box<Node>,
    },
    BreakStatement {
        #[serde(default)]
        label: Option<Box<Node>>,
    },
    ContinueStatement {
        #[serde(default)]
        label: Option<Box<Node>>,
    },
    WithStatement {
        object: Box<Node>,
        body: Box<Node>,
    },
    SwitchStatement {
        discriminant: Box<Node>,
        cases: Vec<Node>,
    },
    SwitchCase {
        #[serde(default)]
        test: Option<Box<Node>>,
        consequent: Vec<Node>,
    },
    ReturnStatement {
        #[serde(default)]
        argument: Option<Box<Node>>,
    },
    ThrowStatement {
        argument: Box<Node>,
    },
    TryStatement {
        block: Box<Node>,
        #[serde(default)]
        handler: Option<Box<Node>>,
        #[serde(default)]
        finalizer: Option<Box<Node>>,
    },
    CatchClause {
        param: Box<Node>,
        body: Box<Node>,
    },
    WhileStatement {
        test: Box<Node>,
        body: Box<Node>,
    },
    DoWhileStatement {
        body: Box<Node>,
        test: Box<Node>,
    },
    ForStatement {
        #[serde(default)]
        init: Option<Box<Node>>,
        #[serde(default)]
        test: Option<Box<Node>>,
        #[serde(default)]
        update: Option<Box<Node>>,
        body: Box<Node>,
    },
    ForInStatement {
        left: Box<Node>,
        right: Box<Node>,
        body: Box<Node>,
    },

    // --- Declarations ---
    FunctionDeclaration {
        #[serde(default)]
        id: Option<Box<Node>>,
        params: Vec<Node>,
        body: Box<Node>,
    },
    VariableDeclaration {
        declarations: Vec<Node>,
        kind: DeclKind,
    },
    VariableDeclarator {
        id: Box<Node>,
        #[serde(default)]
        init: Option<Box<Node>>,
    },

    // --- Expressions ---
    ThisExpression,
    Identifier {
        name: String,
    },
    Literal {
        #[serde(default)]
        value: Value,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        raw: Option<String>,
    },
    ArrayExpression {
        elements: Vec<Option<Node>>,
    },
    ObjectExpression {
        properties: Vec<Node>,
    },
    Property {
        key: Box<Node>,
        value: Box<Node>,
        kind: String,
    },
    FunctionExpression {
        #[serde(default)]
        id: Option<Box<Node>>,
        params: Vec<Node>,
        body: Box<Node>,
    },
    ArrowFunctionExpression {
        params: Vec<Node>,
        body: Box<Node>,
    },
    SequenceExpression {
        expressions: Vec<Node>,
    },
    UnaryExpression {
        operator: UnaryOp,
        #[serde(default = "default_true")]
        prefix: bool,
        argument: Box<Node>,
    },
    UpdateExpression {
        operator: String,
        argument: Box<Node>,
        #[serde(default)]
        prefix: bool,
    },
    BinaryExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    LogicalExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    AssignmentExpression {
        operator: String,
        left: Box<Node>,
        right: Box<Node>,
    },
    ConditionalExpression {
        test: Box<Node>,
        consequent: Box<Node>,
        alternate: Box<Node>,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    NewExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        #[serde(default)]
        computed: bool,
    },
}

impl NodeKind {
    /// Pure expressions have no observable effect when evaluated and
    /// discarded: a self reference, a literal, or a bare identifier.
    pub fn is_pure_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::ThisExpression | NodeKind::Literal { .. } | NodeKind::Identifier { .. }
        )
    }

    /// Source-ish rendering of a pure expression, for diagnostic messages.
    pub fn pure_expr_text(&self) -> Option<String> {
        match self {
            NodeKind::ThisExpression => Some("this".to_string()),
            NodeKind::Literal { value, .. } => Some(literal_text(value)),
            NodeKind::Identifier { name } => Some(name.clone()),
            _ => None,
        }
    }
}

fn literal_text(value: &Value) -> String {
    match value {
        // String literals render bare, without JSON quoting.
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn default_true() -> bool {
    true
}


#[cfg(test)]
#[path = "tests/t_ast.rs"]
mod tests;
