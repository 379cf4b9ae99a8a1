//! FILENAME: core/parser/src/error.rs
//! PURPOSE: Error type shared by the tokenizer and the parser.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A character that is not whitespace, a digit, a dot, a known
    /// operator symbol or a parenthesis.
    #[error("Invalid character '{ch}' at position {position}")]
    InvalidCharacter { ch: char, position: usize },

    /// The postfix sequence cannot supply the operands an operator needs,
    /// or operands are left over once the tree is complete.
    #[error("Invalid syntax: {message}")]
    InvalidSyntax { message: String },

    /// A ')' without a matching '(' or a '(' that is never closed.
    #[error("Unbalanced parentheses at position {position}")]
    UnbalancedParentheses { position: usize },
}

impl ParseError {
    pub fn invalid_syntax(message: impl Into<String>) -> Self {
        ParseError::InvalidSyntax {
            message: message.into(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
