//! Command-line parsing.
//!
//! ```text
//! bismuth [run] [--program=<name>] [--max-depth=<n>] [--entry=<name>]
//! bismuth --help
//! ```

use bis_eval::{RuntimeConfig, SampleProgram};

/// Environment fallback for `--max-depth`.
pub const MAX_DEPTH_ENV: &str = "BISMUTH_MAX_DEPTH";

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub program: SampleProgram,
    pub config: RuntimeConfig,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("invalid call depth '{0}': expected a positive integer")]
    InvalidDepth(String),
    #[error("{0}")]
    InvalidProgram(String),
    #[error("option '{0}' requires a value")]
    MissingValue(&'static str),
}

/// Parse `args` (without the binary name).
///
/// `env_max_depth` is the value of [`MAX_DEPTH_ENV`], if set; an explicit
/// `--max-depth` takes precedence.
pub fn parse_args(args: &[String], env_max_depth: Option<&str>) -> Result<Command, CliError> {
    let mut options = RunOptions::default();
    let mut depth_flag = None;
    let mut rest = args;

    if let Some((first, tail)) = rest.split_first() {
        if first == "run" {
            rest = tail;
        }
    }

    for arg in rest {
        if arg == "--help" || arg == "-h" {
            return Ok(Command::Help);
        } else if let Some(value) = arg.strip_prefix("--max-depth=") {
            depth_flag = Some(parse_depth(value)?);
        } else if let Some(value) = arg.strip_prefix("--entry=") {
            if value.is_empty() {
                return Err(CliError::MissingValue("--entry"));
            }
            options.config.entry = value.to_string();
        } else if let Some(value) = arg.strip_prefix("--program=") {
            options.program = value.parse().map_err(CliError::InvalidProgram)?;
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    options.config.max_call_depth = match depth_flag {
        Some(depth) => Some(depth),
        None => env_max_depth.map(parse_depth).transpose()?,
    };
    Ok(Command::Run(options))
}

fn parse_depth(value: &str) -> Result<usize, CliError> {
    match value.parse::<usize>() {
        Ok(depth) if depth > 0 => Ok(depth),
        _ => Err(CliError::InvalidDepth(value.to_string())),
    }
}

pub fn usage() -> String {
    let programs: Vec<&str> = SampleProgram::ALL.iter().map(|p| p.name()).collect();
    format!(
        "Usage: bismuth [run] [options]\n\
         \n\
         Options:\n\
         \x20 --program=<name>   Program to run: {} (default: pair)\n\
         \x20 --entry=<name>     Entry binding (default: main)\n\
         \x20 --max-depth=<n>    Call depth limit (env: {MAX_DEPTH_ENV})\n\
         \x20 -h, --help         Show this message\n",
        programs.join(", ")
    )
}
