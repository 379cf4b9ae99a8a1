//! FILENAME: app/repl/src/logging.rs
// PURPOSE: Unified logging for the driver and the parser crate.
// FORMAT: seq|level|category|message

use crate::error::ReplError;
use log::{LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

/// Global log file handle. `None` means lines go to stderr.
pub static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));

static LOGGER: UnifiedLogger = UnifiedLogger;

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Open (and truncate) the log file all further lines go to.
pub fn init_log_file(path: &Path) -> Result<(), ReplError> {
    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let mut guard = LOG_FILE
        .lock()
        .map_err(|e| ReplError::Logger(format!("Lock error: {}", e)))?;
    *guard = Some(file);

    Ok(())
}

/// Single-letter level code used in the log line.
pub fn level_code(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "E",
        log::Level::Warn => "W",
        log::Level::Info => "I",
        log::Level::Debug => "D",
        log::Level::Trace => "T",
    }
}

pub fn format_line(seq: u64, level: &str, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level, category, message)
}

/// Write a log line in unified format
pub fn write_log(level: &str, category: &str, message: &str) {
    let line = format_line(next_seq(), level, category, message);

    if let Ok(mut guard) = LOG_FILE.lock() {
        if let Some(ref mut file) = *guard {
            if let Err(e) = writeln!(file, "{}", line) {
                eprintln!("[LOG_ERROR] Failed to write: {}", e);
            }
            let _ = file.flush();
            return;
        }
    }

    eprintln!("{}", line);
}

// ============================================================================
// LOG FACADE BRIDGE
// ============================================================================

/// Routes `log` records into `write_log`, using the record target as the
/// category.
struct UnifiedLogger;

impl Log for UnifiedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        write_log(level_code(record.level()), record.target(), &record.args().to_string());
    }

    fn flush(&self) {
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(ref mut file) = *guard {
                let _ = file.flush();
            }
        }
    }
}

/// Install the logger. Only the first call in a process succeeds.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<(), ReplError> {
    if let Some(path) = log_file {
        init_log_file(path)?;
    }

    log::set_logger(&LOGGER).map_err(|e| ReplError::Logger(e.to_string()))?;
    log::set_max_level(level);

    Ok(())
}
