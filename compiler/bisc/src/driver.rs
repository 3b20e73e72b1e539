//! Running a program and applying the top-level fault policy.
//!
//! | Outcome                     | Output                                   | Exit |
//! |-----------------------------|------------------------------------------|------|
//! | completed                   | whatever `print` wrote                   | 0    |
//! | fatal fault (out of bounds) | diagnostic on stdout                     | 1    |
//! | contract fault              | `error: <message>` + backtrace on stderr | 2    |
//! | link error                  | `error: <message>` on stderr             | 3    |
//! | bad command line            | message + usage on stderr                | 64   |

use std::io::Write;

use bis_eval::{run_program, stdout_handler, EvalError, RunError};
use bis_ir::SharedInterner;

use crate::cli::RunOptions;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FATAL: i32 = 1;
pub const EXIT_FAULT: i32 = 2;
pub const EXIT_LINK: i32 = 3;
pub const EXIT_USAGE: i32 = 64;

/// Link and run the selected program, returning the process exit code.
pub fn run(options: &RunOptions) -> i32 {
    let interner = SharedInterner::new();
    tracing::debug!(program = %options.program, entry = %options.config.entry, "run");
    let result = run_program(
        &options.program,
        &interner,
        stdout_handler(),
        &options.config,
    );
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => report(&err),
    }
}

/// Print the diagnostic for `err` to the process streams and choose the
/// exit code.
pub fn report(err: &RunError) -> i32 {
    report_to(err, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())
}

/// [`report`] against explicit sinks. Write errors are ignored.
pub fn report_to(err: &RunError, out: &mut dyn Write, diag: &mut dyn Write) -> i32 {
    tracing::warn!(error = %err, "program terminated");
    match err {
        RunError::Fault(fault) if fault.is_fatal() => {
            let _ = writeln!(out, "{}", fault.message);
            let _ = out.flush();
            EXIT_FATAL
        }
        RunError::Fault(fault) => {
            let _ = diag.write_all(render_fault(fault).as_bytes());
            EXIT_FAULT
        }
        RunError::Link(link) => {
            let _ = writeln!(diag, "error: {link}");
            EXIT_LINK
        }
    }
}

/// `error: <message>` followed by the backtrace, if any.
pub fn render_fault(fault: &EvalError) -> String {
    let mut text = format!("error: {}\n", fault.message);
    if let Some(backtrace) = fault.backtrace.as_ref().filter(|b| !b.is_empty()) {
        text.push_str(&backtrace.to_string());
    }
    text
}

#[cfg(test)]
mod tests;
