//! FILENAME: app/repl/src/session.rs
// PURPOSE: Read-parse-print loop.
// CONTEXT: For every line: tokenize, optionally print the tokens, convert to
// postfix, optionally print it, build the tree and print it. Parse errors
// are reported and the loop continues with the next line.

use crate::config::Config;
use crate::error::ReplError;
use crate::render::{render_tokens, render_tree};
use infix_parser::{tokenize, ParseError, Parser};
use std::io::{BufRead, Write};

/// Counts of what happened during a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub parsed: usize,
    pub failed: usize,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    stats: SessionStats,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Session {
            input,
            output,
            config,
            stats: SessionStats::default(),
        }
    }

    /// Runs until end of input or an `exit`/`quit` line.
    pub fn run(&mut self) -> Result<SessionStats, ReplError> {
        let mut line = String::new();

        loop {
            if !self.config.prompt.is_empty() {
                write!(self.output, "{}", self.config.prompt)?;
                self.output.flush()?;
            }

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            if text == "exit" || text == "quit" {
                break;
            }

            self.process_line(text)?;
        }

        log::info!(
            target: "REPL",
            "session done parsed={} failed={}",
            self.stats.parsed,
            self.stats.failed
        );
        Ok(self.stats)
    }

    /// Parses one line and prints the result. Returns whether it parsed.
    pub fn process_line(&mut self, text: &str) -> Result<bool, ReplError> {
        log::debug!(target: "REPL", "line: {}", text);

        match self.print_stages(text)? {
            Ok(()) => {
                self.stats.parsed += 1;
                Ok(true)
            }
            Err(err) => {
                log::warn!(target: "REPL", "rejected '{}': {}", text, err);
                writeln!(self.output, "error: {}", err)?;
                self.stats.failed += 1;
                Ok(false)
            }
        }
    }

    /// Outer error: the output failed. Inner error: the line did not parse.
    fn print_stages(&mut self, text: &str) -> Result<Result<(), ParseError>, ReplError> {
        let format = self.config.format;

        let tokens = match tokenize(text) {
            Ok(tokens) => tokens,
            Err(err) => return Ok(Err(err)),
        };
        if self.config.tokens {
            writeln!(self.output, "tokens: {}", render_tokens(&tokens, format)?)?;
        }

        let postfix = match Parser::new(tokens).to_postfix() {
            Ok(postfix) => postfix,
            Err(err) => return Ok(Err(err)),
        };
        if self.config.postfix {
            writeln!(self.output, "postfix: {}", render_tokens(&postfix, format)?)?;
        }

        let root = match Parser::build_tree(postfix) {
            Ok(root) => root,
            Err(err) => return Ok(Err(err)),
        };
        writeln!(self.output, "{}", render_tree(root.as_ref(), format)?)?;

        Ok(Ok(()))
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
