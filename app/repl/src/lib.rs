//! FILENAME: app/repl/src/lib.rs
// PURPOSE: Library side of the `infix` binary.
// CONTEXT: Everything except argument parsing lives here so the tests can
// drive a session over in-memory input.

pub mod config;
pub mod error;
pub mod logging;
pub mod render;
pub mod session;

pub use config::{Config, LogLevel, OutputFormat};
pub use error::ReplError;
pub use session::{Session, SessionStats};

use std::io;

/// Runs the driver: one expression if the config carries one, otherwise a
/// loop over standard input.
pub fn run(config: Config) -> Result<SessionStats, ReplError> {
    let stdout = io::stdout();

    if let Some(expression) = config.expression.clone() {
        let mut session = Session::new(io::empty(), stdout.lock(), config);
        session.process_line(expression.trim())?;
        return Ok(session.stats());
    }

    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), stdout.lock(), config);
    session.run()
}
