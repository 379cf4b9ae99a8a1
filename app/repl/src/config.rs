//! FILENAME: app/repl/src/config.rs
// PURPOSE: Command-line configuration for the `infix` binary.

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

/// How trees, token lists and postfix sequences are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// infix reads arithmetic expressions one line at a time and prints the
/// syntax tree each one parses to.
#[derive(Parser, Debug, Clone)]
#[command(name = "infix", version, about, long_about = None)]
pub struct Config {
    /// Prompt printed before each line is read.
    #[arg(long, default_value = ">> ")]
    pub prompt: String,

    /// Print the token list before the tree.
    #[arg(long)]
    pub tokens: bool,

    /// Print the postfix sequence before the tree.
    #[arg(long)]
    pub postfix: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write log lines to this file instead of stderr.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Parse this expression and exit instead of reading lines.
    pub expression: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: ">> ".to_string(),
            tokens: false,
            postfix: false,
            format: OutputFormat::Text,
            log_file: None,
            log_level: LogLevel::Warn,
            expression: None,
        }
    }
}
