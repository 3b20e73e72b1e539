//! Uniform function values.
//!
//! Every piece of callable code (user functions, built-ins, witness
//! constructors, interface method extractors) is a [`Callable`]. Invocation
//! always supplies a receiver slot followed by positional arguments; the
//! receiver is the `Unit` placeholder unless the call is witness-mediated,
//! in which case it is the witness itself (the "self bundle").

use std::fmt;

use bis_ir::{Name, StringInterner};

use crate::{EvalResult, Value};

/// Native entry point.
///
/// Receives the executing runtime, the receiver and the positional
/// arguments. Argument count has already been checked against the
/// callable's arity when this runs.
pub type NativeFn = fn(&mut dyn CallExecutor, &Value, &[Value]) -> EvalResult;

/// What a callable runs when invoked.
#[derive(Copy, Clone)]
pub enum CallTarget {
    /// Native code.
    Native(NativeFn),
    /// Interface method extractor: takes `(witness, forwarded...)`, selects
    /// the witness's slot for `method` and invokes it.
    Method { interface: Name, method: Name },
}

impl fmt::Debug for CallTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallTarget::Native(_) => write!(f, "Native"),
            CallTarget::Method { interface, method } => {
                write!(f, "Method({interface:?}.{method:?})")
            }
        }
    }
}

/// A function value wrapping exactly one invocation target.
#[derive(Copy, Clone, Debug)]
pub struct Callable {
    name: Name,
    arity: usize,
    target: CallTarget,
}

impl Callable {
    /// Wrap a native entry point taking `arity` positional arguments.
    pub fn native(name: Name, arity: usize, entry: NativeFn) -> Self {
        Callable {
            name,
            arity,
            target: CallTarget::Native(entry),
        }
    }

    /// Extractor for one interface method.
    ///
    /// `arity` counts the leading witness argument plus the method's own
    /// positional arguments.
    pub fn method_extractor(
        name: Name,
        arity: usize,
        interface: Name,
        method: Name,
    ) -> Self {
        Callable {
            name,
            arity,
            target: CallTarget::Method { interface, method },
        }
    }

    /// Name the callable was bound under, for diagnostics.
    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// Number of positional arguments (the receiver is not counted).
    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    #[inline]
    pub fn target(&self) -> CallTarget {
        self.target
    }
}

/// The runtime surface native code executes against.
///
/// Implemented by the interpreter; native entry points never see the
/// concrete type, which keeps this crate independent of the evaluator.
pub trait CallExecutor {
    /// Invoke `callable` with `receiver` and positional `args`.
    fn invoke(&mut self, callable: &Callable, receiver: &Value, args: &[Value]) -> EvalResult;

    /// Look up a top-level binding.
    fn lookup(&self, name: Name) -> Option<Callable>;

    /// Look up `name` in the binding table and invoke it with the
    /// placeholder receiver.
    fn call(&mut self, name: Name, args: &[Value]) -> EvalResult;

    /// Write `line` followed by a newline to the program's output.
    fn println(&mut self, line: &str);

    /// Interner owning every name reachable from the binding table.
    fn interner(&self) -> &StringInterner;

    /// `call` by textual name.
    fn call_named(&mut self, name: &str, args: &[Value]) -> EvalResult {
        let name = self.interner().intern(name);
        self.call(name, args)
    }

    /// Intern a name (record field, type or method) from native code.
    fn intern(&self, text: &str) -> Name {
        self.interner().intern(text)
    }
}

#[cfg(test)]
mod tests;
