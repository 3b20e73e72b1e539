//! Bismuth CLI driver.
//!
//! Turns command-line arguments into a [`RunOptions`], links and runs the
//! selected program, and maps its outcome onto the process exit code.

pub mod cli;
pub mod driver;
mod tracing_setup;

pub use cli::{parse_args, usage, CliError, Command, RunOptions, MAX_DEPTH_ENV};
pub use driver::{report, report_to, run, EXIT_FATAL, EXIT_FAULT, EXIT_LINK, EXIT_SUCCESS, EXIT_USAGE};
pub use tracing_setup::init_tracing;
