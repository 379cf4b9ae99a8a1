//! FILENAME: core/parser/src/lib.rs
//! PURPOSE: Library root for the infix expression parser.
//! CONTEXT: This module exposes the lexer, parser, and AST components
//! needed to convert arithmetic expression strings into syntax trees.
//!
//! PIPELINE: Expression String --> Lexer --> Tokens --> Parser --> Postfix --> AST
//!
//! SUPPORTED FEATURES:
//! - Numbers: 42, 3.14, .5, 5.
//! - Binary operators: * / % + - & |
//! - Unary operators: + - (by context) and ! (always prefix)
//! - Parentheses for grouping
//!
//! The tree is not evaluated here; callers walk it themselves.

pub mod ast;
pub mod error;
pub mod lexer;
pub mod operators;
pub mod parser;
pub mod token;


// Re-export commonly used types for convenience
pub use ast::Node;
pub use error::{ParseError, ParseResult};
pub use lexer::{tokenize, Lexer};
pub use operators::{lookup, Fixity, Operator, OperatorDescriptor, MAX_PRECEDENCE};
pub use parser::{parse, Parser, MAX_NESTING_DEPTH};
pub use token::{Token, TokenKind};
