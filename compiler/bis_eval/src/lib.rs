#![deny(clippy::arithmetic_side_effects)]
#![allow(
    clippy::result_large_err,
    reason = "EvalError is the single fault type for every callable; boxing it would touch every native entry point"
)]
//! Bismuth Eval - the runtime that linked programs execute on.
//!
//! This crate provides:
//! - `Interpreter`: invocation, call-depth tracking and witness dispatch
//! - Built-in operations (`print`, `at`, `appendArray`, `appendString`,
//!   `length`, `less`, `add`, `show`)
//! - Linkage: `Linker`, the frozen `BindingTable`, and `run_program`
//! - Print handlers and runtime configuration
//! - The bundled sample programs

pub mod builtins;
mod config;
mod diagnostics;
pub mod interpreter;
pub mod linkage;
mod print_handler;
pub mod programs;
mod stack;

pub use bis_value::{
    CallExecutor, Callable, EvalError, EvalErrorKind, EvalResult, FaultSeverity, Value,
};

pub use config::{RuntimeConfig, DEFAULT_ENTRY};
pub use diagnostics::{CallFrame, CallStack};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use linkage::{run_program, BindingTable, LinkError, Linker, Program, RunError};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use programs::SampleProgram;
