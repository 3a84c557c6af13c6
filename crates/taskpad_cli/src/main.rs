//! Taskpad entry point.
//!
//! # Responsibility
//! - Wire stdin/stdout and the default paths into the session loop.
//! - Hold the single process-exit point; every path exits with status 0.

use std::io;
use std::path::Path;
use taskpad_cli::{config, session};

fn main() {
    // A logging failure is not fatal to the session.
    if let Err(err) = taskpad_core::init_logging(Path::new(config::LOG_DIR)) {
        println!("Warning: running without diagnostic logs: {err}");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    // The exit status is 0 on every path, including a lost stdout.
    let _ = session::run(
        stdin.lock(),
        &mut stdout,
        Path::new(config::DATA_DIR),
        config::DATA_FILE,
    );
}
