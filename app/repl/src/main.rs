//! FILENAME: app/repl/src/main.rs
// PURPOSE: Entry point for the `infix` binary.

use clap::Parser;
use infix_repl::{logging, Config};

fn main() {
    let config = Config::parse();

    if let Err(e) = logging::init(config.log_level.into(), config.log_file.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = infix_repl::run(config) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
