//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. It handles
//! whitespace skipping, number scanning, and deciding whether a sign is
//! unary or binary.
//!
//! NUMBERS: a run of digits with at most one '.'. A second '.' ends the
//! literal and starts the next one, so "1.1.1" scans as 1.1 and .1.
//! ".5" reads as 0.5 and "5." as 5.0.
//!
//! SIGNS: '+' and '-' are unary at the start of the input, after another
//! operator, and after '('. Everywhere else they are binary.

use crate::error::{ParseError, ParseResult};
use crate::operators::{lookup, Fixity};
use crate::token::{Token, TokenKind};
use std::iter::{FusedIterator, Peekable};
use std::str::Chars;

/// Lazy tokenizer over one input line.
///
/// Yields `Ok(Token)` until the input is exhausted. After the first error
/// it yields `None`; create a new lexer to scan the input again.
pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
    position: usize,
    previous: Option<TokenKind>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
            position: 0,
            previous: None,
            finished: false,
        }
    }

    /// Scans the next token, or returns `None` at end of input.
    fn next_token(&mut self) -> Option<ParseResult<Token>> {
        self.skip_whitespace();

        let start = self.position;
        let ch = *self.input.peek()?;

        let token = match ch {
            '(' => {
                self.bump();
                Ok(Token::lparen(start))
            }
            ')' => {
                self.bump();
                Ok(Token::rparen(start))
            }
            ch if ch.is_ascii_digit() || ch == '.' => self.read_number(start),
            ch => self.read_operator(ch, start),
        };

        Some(token)
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.input.next()?;
        self.position += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// True when the next token has to be an operand, which is where a
    /// sign reads as unary.
    fn expects_operand(&self) -> bool {
        matches!(
            self.previous,
            None | Some(TokenKind::Operator(_)) | Some(TokenKind::LParen)
        )
    }

    fn read_number(&mut self, start: usize) -> ParseResult<Token> {
        let mut literal = String::new();
        let mut has_dot = false;

        while let Some(&ch) = self.input.peek() {
            if ch.is_ascii_digit() {
                literal.push(ch);
            } else if ch == '.' && !has_dot {
                has_dot = true;
                literal.push(ch);
            } else {
                break;
            }
            self.bump();
        }

        if literal.starts_with('.') {
            literal.insert(0, '0');
        }
        if literal.ends_with('.') {
            literal.push('0');
        }

        let value = literal.parse::<f64>().map_err(|_| {
            ParseError::invalid_syntax(format!("Malformed number literal '{}'", literal))
        })?;

        Ok(Token::number(value, start))
    }

    fn read_operator(&mut self, ch: char, start: usize) -> ParseResult<Token> {
        // Symbols with a single fixity ('*', '!') resolve the same either way
        let desc = if self.expects_operand() {
            lookup(Fixity::Prefix, ch).or_else(|| lookup(Fixity::Infix, ch))
        } else {
            lookup(Fixity::Infix, ch).or_else(|| lookup(Fixity::Prefix, ch))
        };

        match desc {
            Some(desc) => {
                self.bump();
                Ok(Token::operator(desc, start))
            }
            None => Err(ParseError::InvalidCharacter {
                ch,
                position: start,
            }),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = ParseResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Some(Ok(token)) => {
                log::trace!(target: "lexer", "token {} at {}", token, token.position);
                self.previous = Some(token.kind);
                Some(Ok(token))
            }
            Some(Err(err)) => {
                self.finished = true;
                Some(Err(err))
            }
            None => {
                self.finished = true;
                None
            }
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Scans the whole input, stopping at the first invalid character.
pub fn tokenize(input: &str) -> ParseResult<Vec<Token>> {
    let tokens = Lexer::new(input).collect::<ParseResult<Vec<Token>>>()?;
    log::debug!(target: "lexer", "scanned {} tokens", tokens.len());
    Ok(tokens)
}
