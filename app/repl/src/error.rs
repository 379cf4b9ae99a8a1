//! FILENAME: app/repl/src/error.rs
// PURPOSE: Errors that stop the driver.

use thiserror::Error;

/// Failures that end a session. Parse errors are not among them: the
/// session reports those and moves on to the next line.
#[derive(Error, Debug)]
pub enum ReplError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    Logger(String),
}
