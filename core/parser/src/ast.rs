//! FILENAME: core/parser/src/ast.rs
//! PURPOSE: Defines the Abstract Syntax Tree (AST) for arithmetic expressions.
//! CONTEXT: The parser builds this tree bottom-up from the postfix token
//! sequence. Each node owns its children; nothing is shared and the tree is
//! not modified after the parser returns it.
//!
//! SHAPE:
//! - Leaves are numbers.
//! - Unary operators have a right child only.
//! - Binary operators have both children.

use crate::operators::Operator;
use crate::token::{Token, TokenKind};
use serde::Serialize;

#[derive(Debug, PartialEq, Clone, Serialize)]
#[serde(tag = "node", rename_all = "camelCase")]
pub enum Node {
    /// A numeric literal.
    Number { value: f64 },

    /// An operator applied to one or two operands.
    /// `left` is `None` exactly when the operator's arity is 1.
    Operator {
        operator: Token,
        #[serde(skip_serializing_if = "Option::is_none")]
        left: Option<Box<Node>>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn number(value: f64) -> Self {
        Node::Number { value }
    }

    pub fn unary(operator: Token, operand: Node) -> Self {
        Node::Operator {
            operator,
            left: None,
            right: Box::new(operand),
        }
    }

    pub fn binary(operator: Token, left: Node, right: Node) -> Self {
        Node::Operator {
            operator,
            left: Some(Box::new(left)),
            right: Box::new(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Number { .. })
    }

    /// The operator at this node, or `None` for a leaf.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Operator { operator, .. } => match operator.kind {
                TokenKind::Operator(op) => Some(op),
                _ => None,
            },
            Node::Number { .. } => None,
        }
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Node::Number { .. } => 1,
            Node::Operator { left, right, .. } => {
                let left_depth = left.as_ref().map_or(0, |node| node.depth());
                1 + left_depth.max(right.depth())
            }
        }
    }

    pub fn node_count(&self) -> usize {
        match self {
            Node::Number { .. } => 1,
            Node::Operator { left, right, .. } => {
                1 + left.as_ref().map_or(0, |node| node.node_count()) + right.node_count()
            }
        }
    }

    /// Renders the tree back into postfix order, e.g. "2 3 4 * +".
    pub fn to_postfix_string(&self) -> String {
        let mut parts = Vec::new();
        self.collect_postfix(&mut parts);
        parts.join(" ")
    }

    fn collect_postfix(&self, parts: &mut Vec<String>) {
        match self {
            Node::Number { value } => parts.push(value.to_string()),
            Node::Operator { left, right, .. } => {
                if let Some(left) = left {
                    left.collect_postfix(parts);
                }
                right.collect_postfix(parts);
                if let Some(op) = self.operator() {
                    parts.push(op.to_string());
                }
            }
        }
    }
}

/// Fully parenthesized infix form: `(2 + (3 * 4))`, `(-3)`.
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Node::Number { value } => write!(f, "{}", value),
            Node::Operator { left, right, .. } => {
                let symbol = self.operator().map_or('?', Operator::symbol);
                match left {
                    Some(left) => write!(f, "({} {} {})", left, symbol, right),
                    None => write!(f, "({}{})", symbol, right),
                }
            }
        }
    }
}
