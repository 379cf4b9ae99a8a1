//! FILENAME: tests/common/mod.rs
//! Test harness for driving `infix` sessions over in-memory input.

#![allow(dead_code)]

use infix_repl::{Config, OutputFormat, Session, SessionStats};
use std::io::Cursor;

/// Test harness holding the configuration a session will run with.
pub struct TestHarness {
    pub config: Config,
}

impl TestHarness {
    /// Create a harness with default settings and no prompt.
    pub fn new() -> Self {
        TestHarness {
            config: Config {
                prompt: String::new(),
                ..Config::default()
            },
        }
    }

    /// Create a harness that also prints tokens and postfix sequences.
    pub fn verbose() -> Self {
        let mut harness = Self::new();
        harness.config.tokens = true;
        harness.config.postfix = true;
        harness
    }

    /// Create a harness that prints JSON.
    pub fn json() -> Self {
        let mut harness = Self::new();
        harness.config.format = OutputFormat::Json;
        harness
    }

    /// Run a whole session over `input` and return its output and stats.
    pub fn run(&self, input: &str) -> (String, SessionStats) {
        let mut session = Session::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            self.config.clone(),
        );
        let stats = session.run().expect("session failed");
        let output = String::from_utf8(session.into_output()).expect("output is not UTF-8");
        (output, stats)
    }

    /// Run a session and return only the output lines.
    pub fn lines(&self, input: &str) -> Vec<String> {
        let (output, _) = self.run(input);
        output.lines().map(str::to_string).collect()
    }
}
