//! FILENAME: tests/test_logging.rs
//! Integration tests for the unified log format.

use infix_repl::logging::{format_line, init, init_log_file, level_code, next_seq, write_log};
use log::LevelFilter;

#[test]
fn test_format_line() {
    assert_eq!(format_line(7, "I", "REPL", "hello"), "7|I|REPL|hello");
}

#[test]
fn test_level_codes() {
    assert_eq!(level_code(log::Level::Error), "E");
    assert_eq!(level_code(log::Level::Warn), "W");
    assert_eq!(level_code(log::Level::Info), "I");
    assert_eq!(level_code(log::Level::Debug), "D");
    assert_eq!(level_code(log::Level::Trace), "T");
}

#[test]
fn test_sequence_increases() {
    let first = next_seq();
    let second = next_seq();
    assert!(second > first);
}

// The log file and the installed logger are process-wide, so everything
// touching them lives in this one test.
#[test]
fn test_log_file_receives_direct_and_facade_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("infix.log");

    init_log_file(&path).unwrap();
    write_log("I", "TEST", "direct line");

    init(LevelFilter::Debug, None).unwrap();
    log::debug!(target: "TEST", "facade line {}", 42);
    log::trace!(target: "TEST", "filtered out");
    log::logger().flush();

    assert!(init(LevelFilter::Debug, None).is_err());

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines.len(), 2, "{:?}", lines);
    assert!(lines[0].ends_with("|I|TEST|direct line"));
    assert!(lines[1].ends_with("|D|TEST|facade line 42"));

    let seq = |line: &str| line.split('|').next().unwrap().parse::<u64>().unwrap();
    assert!(seq(lines[1]) > seq(lines[0]));
}
