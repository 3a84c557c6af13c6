//! Interactive session loop.
//!
//! # Responsibility
//! - Bootstrap the store, load persisted tasks, then read-execute-print
//!   until `bye` or end of input.
//! - Report fatal store errors once and return; the caller owns process
//!   exit.
//!
//! # Invariants
//! - Whitespace-only input lines never reach the interpreter.
//! - A fatal error ends the session after exactly one report block.

use crate::console;
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::path::Path;
use taskpad_core::{
    FileTaskStore, Interpreter, Outcome, StoreBootstrap, StoreError, TaskStore, FAREWELL,
};

const GREETING: &str = "Hello! I'm Taskpad.\nWhat can I help you get done?";

/// Runs one full session over the given streams.
///
/// All task-protocol outcomes, including fatal store errors, are rendered to
/// `output` and end with `Ok(())`; the only `Err` is a failed write to
/// `output` itself.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    data_dir: &Path,
    file_name: &str,
) -> io::Result<()> {
    let (store, bootstrap) = match FileTaskStore::open(data_dir, file_name) {
        Ok(opened) => opened,
        Err(err) => return report_fatal(output, &err),
    };
    console::write_response_block(output, &bootstrap_report(data_dir, &store, bootstrap))?;

    let tasks = if bootstrap.file_preexisted() {
        match store.load() {
            Ok(tasks) => tasks,
            Err(err) => return report_fatal(output, &err),
        }
    } else {
        Vec::new()
    };

    info!(
        "event=session_start module=session status=ok loaded={}",
        tasks.len()
    );
    let mut interpreter = Interpreter::new(store, tasks);
    console::write_response_block(output, GREETING)?;

    for line in input.lines() {
        // A broken input stream gets the same graceful farewell as a clean
        // end of input.
        let Ok(line) = line else { break };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match interpreter.execute(line) {
            Ok(Outcome::Reply(feedback)) => {
                console::write_response_block(output, &feedback)?;
            }
            Ok(Outcome::Farewell(feedback)) => {
                console::write_response_block(output, &feedback)?;
                info!("event=session_end module=session status=ok reason=bye");
                return Ok(());
            }
            Err(err) => return report_fatal(output, &err),
        }
    }

    // End of input without `bye`.
    console::write_response_block(output, FAREWELL)?;
    info!("event=session_end module=session status=ok reason=end_of_input");
    Ok(())
}

fn bootstrap_report(data_dir: &Path, store: &FileTaskStore, bootstrap: StoreBootstrap) -> String {
    let file_path = store.file_path().display();
    if bootstrap.created_file {
        let mut report = String::new();
        if bootstrap.created_dir {
            report.push_str(&format!("Created new directory: '{}'\n", data_dir.display()));
        }
        report.push_str(&format!("No data file found. Created new file: '{file_path}'"));
        report
    } else {
        format!("Data file found. Using data from '{file_path}'")
    }
}

fn report_fatal<W: Write>(output: &mut W, err: &StoreError) -> io::Result<()> {
    error!("event=session_fatal module=session status=error error={err}");
    console::write_response_block(output, &format!("Oops! {err}"))
}
