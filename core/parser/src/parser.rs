//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Shunting-yard parser that converts a stream of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. It runs in two
//! passes over the tokens from the Lexer:
//!
//!   1. to_postfix  -- infix order to postfix order with an operator stack
//!   2. build_tree  -- postfix order to a Node tree, consuming from the tail
//!
//! PRECEDENCE: lower numbers bind tighter. An incoming binary operator pops
//! every stacked operator whose number is smaller or equal, so operators of
//! equal precedence associate to the left. An incoming prefix operator only
//! pops strictly tighter ones. There is no right-associative binary operator.
//!
//! PARENTHESES: a ')' without a matching '(' and a '(' that is still open at
//! the end of the input are both errors.
//!
//! NESTING: build_tree recurses once per tree level and gives up past
//! MAX_NESTING_DEPTH with InvalidSyntax.

use crate::ast::Node;
use crate::error::{ParseError, ParseResult};
use crate::lexer::tokenize;
use crate::token::{Token, TokenKind};

/// Deepest tree `build_tree` will produce, counted in nodes from the root.
/// Walking a tree (display, serialization, drop) recurses once per level,
/// so anything deeper is rejected instead of overflowing the stack.
pub const MAX_NESTING_DEPTH: usize = 1_000;

/// The Parser holds the token stream and the current token.
pub struct Parser {
    tokens: std::vec::IntoIter<Token>,
    current_token: Option<Token>,
}

impl Parser {
    /// Creates a new parser over a finished token list.
    /// Automatically advances to the first token.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut tokens = tokens.into_iter();
        let current_token = tokens.next();
        Parser {
            tokens,
            current_token,
        }
    }

    /// Parses all tokens and returns the AST, or `None` if there were no
    /// tokens at all.
    pub fn parse(&mut self) -> ParseResult<Option<Node>> {
        if self.current_token.is_none() {
            return Ok(None);
        }

        let postfix = self.to_postfix()?;
        Parser::build_tree(postfix)
    }

    /// Advances to the next token.
    fn advance(&mut self) {
        self.current_token = self.tokens.next();
    }

    /// Reorders the remaining tokens into postfix order.
    pub fn to_postfix(&mut self) -> ParseResult<Vec<Token>> {
        let mut stack: Vec<Token> = Vec::new();
        let mut output: Vec<Token> = Vec::new();
        let mut previous: Option<TokenKind> = None;

        while let Some(token) = self.current_token {
            match token.kind {
                TokenKind::Number(_) => output.push(token),

                TokenKind::LParen => stack.push(token),

                TokenKind::RParen => {
                    if previous == Some(TokenKind::LParen) {
                        return Err(ParseError::invalid_syntax(format!(
                            "Empty parentheses at position {}",
                            token.position
                        )));
                    }
                    Self::close_group(token, &mut stack, &mut output)?;
                }

                TokenKind::Operator(_) => {
                    if token.arity < 2 && follows_operand(previous) {
                        return Err(ParseError::invalid_syntax(format!(
                            "Operator {} at position {} cannot follow an operand",
                            token, token.position
                        )));
                    }

                    while let Some(&top) = stack.last() {
                        if !binds_before(&top, &token) {
                            break;
                        }
                        log::trace!(target: "parser", "pop {} before {}", top, token);
                        stack.pop();
                        output.push(top);
                    }
                    stack.push(token);
                }
            }

            previous = Some(token.kind);
            self.advance();
        }

        while let Some(top) = stack.pop() {
            if top.kind == TokenKind::LParen {
                return Err(ParseError::UnbalancedParentheses {
                    position: top.position,
                });
            }
            output.push(top);
        }

        log::debug!(
            target: "parser",
            "postfix: {}",
            output.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
        );

        Ok(output)
    }

    /// Pops operators to the output until the '(' matching `rparen`.
    fn close_group(rparen: Token, stack: &mut Vec<Token>, output: &mut Vec<Token>) -> ParseResult<()> {
        loop {
            match stack.pop() {
                Some(top) if top.kind == TokenKind::LParen => return Ok(()),
                Some(top) => output.push(top),
                None => {
                    return Err(ParseError::UnbalancedParentheses {
                        position: rparen.position,
                    })
                }
            }
        }
    }

    /// Builds a tree from a postfix sequence.
    ///
    /// The sequence is consumed from its end: the last token is the root,
    /// and each operator takes its right operand before its left one.
    /// Returns `None` for an empty sequence. Tokens left over once the root
    /// is complete, and trees deeper than `MAX_NESTING_DEPTH`, are errors.
    pub fn build_tree(mut postfix: Vec<Token>) -> ParseResult<Option<Node>> {
        if postfix.is_empty() {
            return Ok(None);
        }

        let root = Self::build_node(&mut postfix, 1)?;

        if let Some(extra) = postfix.last() {
            return Err(ParseError::invalid_syntax(format!(
                "Unexpected operand {} at position {}",
                extra, extra.position
            )));
        }

        log::debug!(target: "parser", "tree: {} (depth {})", root, root.depth());
        Ok(Some(root))
    }

    fn build_node(postfix: &mut Vec<Token>, depth: usize) -> ParseResult<Node> {
        if depth > MAX_NESTING_DEPTH {
            return Err(ParseError::invalid_syntax(format!(
                "Expression nests deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }

        let token = postfix
            .pop()
            .ok_or_else(|| ParseError::invalid_syntax("Unexpected end of expression"))?;

        match token.kind {
            TokenKind::Number(value) => Ok(Node::number(value)),

            TokenKind::Operator(_) => {
                let right = Self::build_operand(postfix, &token, depth + 1)?;
                if token.arity < 2 {
                    return Ok(Node::unary(token, right));
                }
                let left = Self::build_operand(postfix, &token, depth + 1)?;
                Ok(Node::binary(token, left, right))
            }

            TokenKind::LParen | TokenKind::RParen => Err(ParseError::invalid_syntax(format!(
                "Unexpected parenthesis at position {}",
                token.position
            ))),
        }
    }

    fn build_operand(postfix: &mut Vec<Token>, operator: &Token, depth: usize) -> ParseResult<Node> {
        if postfix.is_empty() {
            return Err(ParseError::invalid_syntax(format!(
                "Operator {} at position {} is missing an operand",
                operator, operator.position
            )));
        }
        Self::build_node(postfix, depth)
    }
}

/// True if the stacked operator `top` must be emitted before `incoming` is
/// pushed. Binary operators also pop on equal precedence, which makes chains
/// like `8 - 3 - 2` group from the left. A prefix operator never pops an
/// equal one, so `--3` nests.
fn binds_before(top: &Token, incoming: &Token) -> bool {
    if !top.is_operator() {
        return false;
    }
    if incoming.arity < 2 {
        top.precedence < incoming.precedence
    } else {
        top.precedence <= incoming.precedence
    }
}

fn follows_operand(previous: Option<TokenKind>) -> bool {
    matches!(previous, Some(TokenKind::Number(_)) | Some(TokenKind::RParen))
}

/// Convenience function to tokenize and parse an expression string directly.
pub fn parse(input: &str) -> ParseResult<Option<Node>> {
    let tokens = tokenize(input)?;
    Parser::new(tokens).parse()
}
