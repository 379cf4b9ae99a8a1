//! FILENAME: core/parser/src/token.rs
//! PURPOSE: Token definitions for the expression lexer.
//! CONTEXT: Tokens are the atomic units produced by the lexer and consumed by the parser.
//! They are never modified after the lexer creates them.

use crate::operators::{Operator, OperatorDescriptor, MAX_PRECEDENCE};
use serde::Serialize;

#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub enum TokenKind {
    Number(f64),
    Operator(Operator),
    LParen,
    RParen,
}

/// A token together with the metadata the shunting yard needs.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Lower binds tighter. Zero for numbers and ')'.
    pub precedence: u8,
    /// 1 for unary operators, 2 for binary ones, 0 for everything else.
    pub arity: u8,
    /// Character offset of the token in the source line.
    pub position: usize,
}

impl Token {
    pub fn number(value: f64, position: usize) -> Self {
        Token {
            kind: TokenKind::Number(value),
            precedence: 0,
            arity: 0,
            position,
        }
    }

    pub fn operator(desc: &OperatorDescriptor, position: usize) -> Self {
        Token {
            kind: TokenKind::Operator(desc.operator),
            precedence: desc.precedence,
            arity: desc.arity,
            position,
        }
    }

    pub fn lparen(position: usize) -> Self {
        Token {
            kind: TokenKind::LParen,
            precedence: MAX_PRECEDENCE,
            arity: 0,
            position,
        }
    }

    pub fn rparen(position: usize) -> Self {
        Token {
            kind: TokenKind::RParen,
            precedence: 0,
            arity: 0,
            position,
        }
    }

    pub fn is_operator(&self) -> bool {
        matches!(self.kind, TokenKind::Operator(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Number(n) => write!(f, "NUM({})", n),
            TokenKind::Operator(op) => write!(f, "OP({})", op),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
        }
    }
}
