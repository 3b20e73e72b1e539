//! Runtime fault types.
//!
//! Every failure the runtime can produce is an `EvalError` carrying a typed
//! `EvalErrorKind`. Factory functions (e.g. `index_out_of_bounds()`) are the
//! public construction API; they populate both `kind` and `message`.
//!
//! # Severity
//!
//! Faults fall into two classes (see [`FaultSeverity`]):
//! - `Fatal`: a broken invariant in compiled code (out-of-bounds access). The
//!   driver terminates the process with the fault message on stdout.
//! - `Contract`: a calling-convention violation that native code would leave
//!   undefined (tag mismatch, arity mismatch, the unimplemented `show`, ...).

use std::fmt;

/// Result of invoking a callable.
pub type EvalResult = Result<crate::Value, EvalError>;

/// How the top-level policy treats a fault.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FaultSeverity {
    /// Process-terminating broken invariant.
    Fatal,
    /// Calling-convention or construction contract violation.
    Contract,
}

/// Typed fault category.
///
/// The `Display` impl produces the user-facing message; factory functions
/// copy it into `EvalError::message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Value model
    TypeMismatch {
        expected: String,
        got: String,
    },
    IntegerOverflow {
        operation: String,
    },

    // Sequences
    IndexOutOfBounds {
        index: i64,
        length: usize,
    },

    // Records
    UndefinedField {
        field: String,
        type_name: String,
    },
    DuplicateField {
        field: String,
        type_name: String,
    },

    // Callables
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },
    UndefinedBinding {
        name: String,
    },
    StackOverflow {
        depth: usize,
    },

    // Witnesses
    UndefinedMethod {
        method: String,
        interface: String,
    },
    DuplicateMethod {
        method: String,
        interface: String,
    },
    WitnessIncomplete {
        interface: String,
        type_name: String,
        missing: String,
    },
    MissingRequirement {
        interface: String,
        index: usize,
    },

    // Not Implemented
    NotImplemented {
        feature: String,
    },

}

impl EvalErrorKind {
    /// Classify this fault for the top-level termination policy.
    pub fn severity(&self) -> FaultSeverity {
        match self {
            Self::IndexOutOfBounds { .. } => FaultSeverity::Fatal,
            _ => FaultSeverity::Contract,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::IntegerOverflow { operation } => {
                write!(f, "integer overflow in {operation}")
            }
            Self::IndexOutOfBounds { index, length } => {
                write!(
                    f,
                    "out-of-bounds index; index {index} in array of length {length}"
                )
            }
            Self::UndefinedField { field, type_name } => {
                write!(f, "no field {field} on record {type_name}")
            }
            Self::DuplicateField { field, type_name } => {
                write!(f, "field {field} assigned twice in record {type_name}")
            }
            Self::ArityMismatch {
                name,
                expected,
                got,
            } => {
                let arg_word = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                if name.is_empty() {
                    write!(f, "expected {expected} {arg_word}, got {got}")
                } else {
                    write!(f, "{name} expects {expected} {arg_word}, got {got}")
                }
            }
            Self::UndefinedBinding { name } => write!(f, "unbound name: {name}"),
            Self::StackOverflow { depth } => {
                write!(f, "maximum call depth exceeded (limit: {depth})")
            }
            Self::UndefinedMethod { method, interface } => {
                write!(f, "interface {interface} has no method '{method}'")
            }
            Self::DuplicateMethod { method, interface } => {
                write!(f, "method '{method}' implemented twice for {interface}")
            }
            Self::WitnessIncomplete {
                interface,
                type_name,
                missing,
            } => write!(
                f,
                "witness {interface} for {type_name} is missing method '{missing}'"
            ),
            Self::MissingRequirement { interface, index } => {
                write!(f, "witness {interface} has no required witness #{index}")
            }
            Self::NotImplemented { feature } => write!(f, "{feature} is not implemented"),
        }
    }
}

/// A single frame in a fault backtrace.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BacktraceFrame {
    /// Name of the callable that was executing.
    pub name: String,
}

/// Snapshot of the call stack at the point a fault was raised.
///
/// Frames are ordered outermost first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EvalBacktrace {
    frames: Vec<BacktraceFrame>,
}

impl EvalBacktrace {
    /// Create a backtrace from a list of frames.
    pub fn new(frames: Vec<BacktraceFrame>) -> Self {
        Self { frames }
    }

    /// Get the backtrace frames.
    pub fn frames(&self) -> &[BacktraceFrame] {
        &self.frames
    }

    /// Check if the backtrace is empty.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames in the backtrace.
    pub fn len(&self) -> usize {
        self.frames.len()
    }
}

impl fmt::Display for EvalBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frames.is_empty() {
            return Ok(());
        }
        writeln!(f, "call backtrace:")?;
        for (i, frame) in self.frames.iter().enumerate() {
            writeln!(f, "  {i}: {}", frame.name)?;
        }
        Ok(())
    }
}

/// Runtime fault.
#[derive(Clone, Debug)]
pub struct EvalError {
    /// Structured fault category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()` for factory-built faults.
    pub message: String,
    /// Call stack at the fault site, attached by the interpreter.
    pub backtrace: Option<EvalBacktrace>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            backtrace: None,
        }
    }

    /// Attach a backtrace to this error.
    #[must_use]
    pub fn with_backtrace(mut self, backtrace: EvalBacktrace) -> Self {
        self.backtrace = Some(backtrace);
        self
    }

    /// Severity of the underlying kind.
    #[inline]
    pub fn severity(&self) -> FaultSeverity {
        self.kind.severity()
    }

    /// Whether the top-level policy must terminate with the fatal diagnostic.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        self.severity() == FaultSeverity::Fatal
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for EvalError {}

// Value model faults

/// Tag check failed on an accessor.
#[cold]
pub fn type_mismatch(expected: &str, got: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected: expected.to_string(),
        got: got.to_string(),
    })
}

/// Integer overflow error.
#[cold]
pub fn integer_overflow(operation: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IntegerOverflow {
        operation: operation.to_string(),
    })
}

// Sequence faults

/// Index outside `0..length`.
#[cold]
pub fn index_out_of_bounds(index: i64, length: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexOutOfBounds { index, length })
}

// Record faults

/// Field not present on a record.
#[cold]
pub fn no_field_on_record(field: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedField {
        field: field.to_string(),
        type_name: type_name.to_string(),
    })
}

/// Field assigned more than once in a record literal.
#[cold]
pub fn duplicate_field(field: &str, type_name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateField {
        field: field.to_string(),
        type_name: type_name.to_string(),
    })
}

// Callable faults

/// Wrong argument count for a callable.
#[cold]
pub fn wrong_arg_count(name: &str, expected: usize, got: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ArityMismatch {
        name: name.to_string(),
        expected,
        got,
    })
}

/// Name missing from the binding table.
#[cold]
pub fn undefined_binding(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedBinding {
        name: name.to_string(),
    })
}

/// Maximum call depth exceeded error.
#[cold]
pub fn call_depth_exceeded(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { depth: limit })
}

// Witness faults

/// Method not declared by the interface.
#[cold]
pub fn no_such_method(method: &str, interface: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UndefinedMethod {
        method: method.to_string(),
        interface: interface.to_string(),
    })
}

/// Method implemented more than once in one witness.
#[cold]
pub fn duplicate_method(method: &str, interface: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateMethod {
        method: method.to_string(),
        interface: interface.to_string(),
    })
}

/// Witness built without an implementation for a declared method.
#[cold]
pub fn witness_incomplete(interface: &str, type_name: &str, missing: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WitnessIncomplete {
        interface: interface.to_string(),
        type_name: type_name.to_string(),
        missing: missing.to_string(),
    })
}

/// Required witness index out of range.
#[cold]
pub fn missing_requirement(interface: &str, index: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MissingRequirement {
        interface: interface.to_string(),
        index,
    })
}

// Not implemented

/// Declared operation without an implementation.
#[cold]
pub fn not_implemented(feature: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotImplemented {
        feature: feature.to_string(),
    })
}
