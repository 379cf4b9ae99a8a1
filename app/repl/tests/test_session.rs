//! FILENAME: tests/test_session.rs
//! Integration tests for the read-parse-print loop.

mod common;

use clap::Parser;
use common::TestHarness;
use infix_repl::render::render_tree;
use infix_repl::{Config, LogLevel, OutputFormat, Session};
use log::LevelFilter;
use std::io::Cursor;

// ============================================================================
// TREE OUTPUT
// ============================================================================

#[test]
fn test_prints_tree_per_line() {
    let harness = TestHarness::new();
    let (output, stats) = harness.run("2+3*4\n(2+3)*4\n");

    assert_eq!(output, "(2 + (3 * 4))\n((2 + 3) * 4)\n");
    assert_eq!(stats.parsed, 2);
    assert_eq!(stats.failed, 0);
}

#[test]
fn test_prints_tokens_and_postfix_when_asked() {
    let harness = TestHarness::verbose();
    let lines = harness.lines("-3\n");

    assert_eq!(
        lines,
        vec![
            "tokens: [OP(u-), NUM(3)]",
            "postfix: [NUM(3), OP(u-)]",
            "(-3)",
        ]
    );
}

#[test]
fn test_prints_json_tree() {
    let harness = TestHarness::json();
    let lines = harness.lines("1+2\n");
    assert_eq!(lines.len(), 1);

    let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(value["node"], "operator");
    assert_eq!(value["operator"]["arity"], 2);
    assert_eq!(value["left"]["value"], 1.0);
    assert_eq!(value["right"]["value"], 2.0);
}

#[test]
fn test_renders_missing_tree() {
    assert_eq!(render_tree(None, OutputFormat::Text).unwrap(), "empty");
    assert_eq!(render_tree(None, OutputFormat::Json).unwrap(), "null");
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_reports_error_and_continues() {
    let harness = TestHarness::new();
    let (output, stats) = harness.run("2+#3\n1+1\n");

    assert_eq!(output, "error: Invalid character '#' at position 2\n(1 + 1)\n");
    assert_eq!(stats.parsed, 1);
    assert_eq!(stats.failed, 1);
}

#[test]
fn test_reports_unbalanced_parentheses() {
    let harness = TestHarness::new();
    assert_eq!(
        harness.lines("(1+2\n"),
        vec!["error: Unbalanced parentheses at position 0"]
    );
}

#[test]
fn test_prints_tokens_before_postfix_failure() {
    let harness = TestHarness::verbose();
    assert_eq!(
        harness.lines("1+2)\n"),
        vec![
            "tokens: [NUM(1), OP(+), NUM(2), )]",
            "error: Unbalanced parentheses at position 3",
        ]
    );
}

#[test]
fn test_reports_missing_operand() {
    let harness = TestHarness::new();
    let lines = harness.lines("2*\n");
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("error: Invalid syntax:"), "{}", lines[0]);
}

// ============================================================================
// LOOP CONTROL
// ============================================================================

#[test]
fn test_skips_blank_lines_and_stops_at_exit() {
    let harness = TestHarness::new();
    let (output, stats) = harness.run("1\n\n   \nexit\n2\n");

    assert_eq!(output, "1\n");
    assert_eq!(stats.parsed, 1);
}

#[test]
fn test_quit_also_stops() {
    let harness = TestHarness::new();
    assert_eq!(harness.lines("quit\n1\n"), Vec::<String>::new());
}

#[test]
fn test_prints_prompt_before_each_read() {
    let mut harness = TestHarness::new();
    harness.config.prompt = ">> ".to_string();

    let (output, _) = harness.run("7\n");
    assert_eq!(output, ">> 7\n>> ");
}

#[test]
fn test_process_line_reports_outcome() {
    let mut session = Session::new(Cursor::new(Vec::new()), Vec::new(), Config::default());

    assert!(session.process_line("1 - -1").unwrap());
    assert!(!session.process_line("1 -").unwrap());
    assert_eq!(session.stats().parsed, 1);
    assert_eq!(session.stats().failed, 1);

    let output = String::from_utf8(session.into_output()).unwrap();
    assert!(output.starts_with("(1 - (-1))\nerror: "));
}

// ============================================================================
// CONFIGURATION
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = Config::try_parse_from(["infix"]).unwrap();

    assert_eq!(config.prompt, ">> ");
    assert!(!config.tokens);
    assert!(!config.postfix);
    assert_eq!(config.format, OutputFormat::Text);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert!(config.log_file.is_none());
    assert!(config.expression.is_none());
}

#[test]
fn test_config_parses_flags() {
    let config = Config::try_parse_from([
        "infix",
        "--tokens",
        "--postfix",
        "--format",
        "json",
        "--log-level",
        "debug",
        "--log-file",
        "parse.log",
        "1+2",
    ])
    .unwrap();

    assert!(config.tokens);
    assert!(config.postfix);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(LevelFilter::from(config.log_level), LevelFilter::Debug);
    assert_eq!(config.log_file.as_deref(), Some(std::path::Path::new("parse.log")));
    assert_eq!(config.expression.as_deref(), Some("1+2"));
}

#[test]
fn test_config_rejects_unknown_format() {
    assert!(Config::try_parse_from(["infix", "--format", "xml"]).is_err());
}
