#![deny(clippy::arithmetic_side_effects)]
#![allow(
    clippy::result_large_err,
    reason = "EvalError is the single fault type for every callable; boxing it would touch every native entry point"
)]
//! Bismuth values - the boxed data model shared by every runtime crate.
//!
//! This crate provides:
//! - Runtime values (`Value`, `Heap`, `ScalarInt`, `Sequence`, `RecordValue`)
//! - Function values and the executor seam native code runs against
//!   (`Callable`, `CallExecutor`)
//! - Interfaces and witness records for static dispatch (`Interface`, `Witness`)
//! - Fault types (`EvalError`, `EvalResult`)

mod callable;
mod errors;
mod value;
mod witness;

pub use callable::{CallExecutor, CallTarget, Callable, NativeFn};
pub use errors::{
    BacktraceFrame, EvalBacktrace, EvalError, EvalErrorKind, EvalResult, FaultSeverity,
};
pub use value::{
    Heap, Name, RecordBuilder, RecordValue, ScalarInt, Sequence, StringLookup,
    Value,
};
pub use witness::{Interface, MethodSig, Witness, WitnessBuilder};

// Re-export error constructors for use by other crates
pub use errors::{
    call_depth_exceeded, duplicate_field, duplicate_method, index_out_of_bounds,
    integer_overflow, missing_requirement, no_field_on_record, no_such_method, not_implemented,
    type_mismatch, undefined_binding, witness_incomplete, wrong_arg_count,
};
