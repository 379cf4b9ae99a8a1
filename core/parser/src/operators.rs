//! FILENAME: core/parser/src/operators.rs
//! PURPOSE: Static operator descriptor table.
//! CONTEXT: The lexer looks every operator character up here to learn its
//! precedence and arity. The table is built once on first use and never
//! written again, so concurrent parses share it without locking.
//!
//! PRECEDENCE CONVENTION: a lower number binds tighter.
//!
//!   2   prefix  !  +  -
//!   3   infix   *  /  %
//!   4   infix   +  -
//!   8   infix   &
//!   9   infix   |
//!   15  parentheses (never popped by precedence)

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Precedence given to parentheses. Larger than any operator so that an
/// open parenthesis on the stack acts as a barrier.
pub const MAX_PRECEDENCE: u8 = 15;

/// Whether an operator symbol is read before its operand or between two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Prefix,
    Infix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    // Binary
    Multiply,
    Divide,
    Modulus,
    Add,
    Subtract,
    And,
    Or,

    // Unary
    UnaryPlus,
    UnaryMinus,
    Not,
}

impl Operator {
    /// The source character this operator is written with.
    pub fn symbol(self) -> char {
        match self {
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Modulus => '%',
            Operator::Add | Operator::UnaryPlus => '+',
            Operator::Subtract | Operator::UnaryMinus => '-',
            Operator::And => '&',
            Operator::Or => '|',
            Operator::Not => '!',
        }
    }

    pub fn fixity(self) -> Fixity {
        match self {
            Operator::UnaryPlus | Operator::UnaryMinus | Operator::Not => Fixity::Prefix,
            _ => Fixity::Infix,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Signs are marked so they read differently from the binary forms
            Operator::UnaryPlus => write!(f, "u+"),
            Operator::UnaryMinus => write!(f, "u-"),
            op => write!(f, "{}", op.symbol()),
        }
    }
}

/// What the lexer needs to know about an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub operator: Operator,
    pub precedence: u8,
    pub arity: u8,
}

const DESCRIPTORS: [OperatorDescriptor; 10] = [
    OperatorDescriptor { operator: Operator::Multiply, precedence: 3, arity: 2 },
    OperatorDescriptor { operator: Operator::Divide, precedence: 3, arity: 2 },
    OperatorDescriptor { operator: Operator::Modulus, precedence: 3, arity: 2 },
    OperatorDescriptor { operator: Operator::Add, precedence: 4, arity: 2 },
    OperatorDescriptor { operator: Operator::Subtract, precedence: 4, arity: 2 },
    OperatorDescriptor { operator: Operator::And, precedence: 8, arity: 2 },
    OperatorDescriptor { operator: Operator::Or, precedence: 9, arity: 2 },
    OperatorDescriptor { operator: Operator::UnaryPlus, precedence: 2, arity: 1 },
    OperatorDescriptor { operator: Operator::UnaryMinus, precedence: 2, arity: 1 },
    OperatorDescriptor { operator: Operator::Not, precedence: 2, arity: 1 },
];

static OPERATOR_TABLE: Lazy<HashMap<(Fixity, char), OperatorDescriptor>> = Lazy::new(|| {
    DESCRIPTORS
        .iter()
        .map(|desc| ((desc.operator.fixity(), desc.operator.symbol()), *desc))
        .collect()
});

/// Looks up the descriptor registered for `symbol` under `fixity`.
pub fn lookup(fixity: Fixity, symbol: char) -> Option<&'static OperatorDescriptor> {
    OPERATOR_TABLE.get(&(fixity, symbol))
}
