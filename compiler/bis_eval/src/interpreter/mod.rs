//! The interpreter: the one place callables are invoked.
//!
//! Every invocation goes through [`Interpreter::invoke`], which enforces
//! the calling convention (receiver slot plus exactly `arity` positional
//! arguments), tracks the call stack, and routes the call to its target:
//!
//! - `Native` targets run their entry point against this interpreter.
//! - `Method` targets are interface extractors. The first argument is the
//!   witness; the matching slot is invoked with the witness as its receiver
//!   and the remaining arguments forwarded unchanged.
//!
//! Witness dispatch is a single slot selection followed by an ordinary
//! invocation, so a witness-mediated call and a direct call to the same
//! implementation are indistinguishable to the callee.

mod builder;

pub use builder::InterpreterBuilder;

use bis_ir::{Name, StringInterner};
use bis_value::{
    no_such_method, type_mismatch, undefined_binding, wrong_arg_count, CallExecutor, CallTarget,
    Callable, EvalError, EvalResult, Heap, Value, Witness,
};

use crate::diagnostics::{CallFrame, CallStack};
use crate::linkage::BindingTable;
use crate::print_handler::SharedPrintHandler;
use crate::stack::ensure_sufficient_stack;

/// Executes callables against a frozen binding table.
pub struct Interpreter<'a> {
    interner: &'a StringInterner,
    bindings: &'a BindingTable,
    print_handler: SharedPrintHandler,
    call_stack: CallStack,
}

impl<'a> Interpreter<'a> {
    /// Invoke the entry binding with the placeholder receiver and no
    /// arguments.
    pub fn run_entry(&mut self, entry: Name) -> EvalResult {
        tracing::debug!(entry = self.interner.lookup(entry), "invoking entry");
        self.call(entry, &[])
    }

    /// Select `method` from `witness` and invoke it with the witness as the
    /// receiver.
    pub fn dispatch(&mut self, witness: &Heap<Witness>, method: Name, args: &[Value]) -> EvalResult {
        let Some(callable) = witness.method(method).copied() else {
            let err = no_such_method(
                self.interner.lookup(method),
                self.interner.lookup(witness.interface()),
            );
            return Err(self.fault(err));
        };
        tracing::trace!(
            interface = self.interner.lookup(witness.interface()),
            type_name = self.interner.lookup(witness.type_name()),
            method = self.interner.lookup(method),
            "dispatch"
        );
        self.invoke(&callable, &Value::Witness(witness.clone()), args)
    }

    #[inline]
    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    fn fault(&self, err: EvalError) -> EvalError {
        self.call_stack.attach_backtrace(err, self.interner)
    }

    fn run_target(&mut self, callable: &Callable, receiver: &Value, args: &[Value]) -> EvalResult {
        match callable.target() {
            CallTarget::Native(entry) => entry(self, receiver, args),
            CallTarget::Method { interface, method } => {
                let Some((first, forwarded)) = args.split_first() else {
                    return Err(wrong_arg_count(
                        self.interner.lookup(callable.name()),
                        1,
                        0,
                    ));
                };
                let witness = first.expect_witness()?;
                if witness.interface() != interface {
                    return Err(type_mismatch(
                        self.interner.lookup(interface),
                        self.interner.lookup(witness.interface()),
                    ));
                }
                let witness = witness.clone();
                self.dispatch(&witness, method, forwarded)
            }
        }
    }
}

impl CallExecutor for Interpreter<'_> {
    fn invoke(&mut self, callable: &Callable, receiver: &Value, args: &[Value]) -> EvalResult {
        if args.len() != callable.arity() {
            let err = wrong_arg_count(
                self.interner.lookup(callable.name()),
                callable.arity(),
                args.len(),
            );
            return Err(self.fault(err));
        }
        let frame = CallFrame {
            name: callable.name(),
        };
        if let Err(err) = self.call_stack.push(frame) {
            return Err(self.fault(err));
        }
        tracing::trace!(
            callable = self.interner.lookup(callable.name()),
            depth = self.call_stack.depth(),
            "invoke"
        );

        let result =
            ensure_sufficient_stack(|| self.run_target(callable, receiver, args)).map_err(|e| self.fault(e));
        self.call_stack.pop();
        result
    }

    fn lookup(&self, name: Name) -> Option<Callable> {
        self.bindings.get(name)
    }

    fn call(&mut self, name: Name, args: &[Value]) -> EvalResult {
        let Some(callable) = self.bindings.get(name) else {
            let err = undefined_binding(self.interner.lookup(name));
            return Err(self.fault(err));
        };
        self.invoke(&callable, &Value::unit(), args)
    }

    fn println(&mut self, line: &str) {
        self.print_handler.println(line);
    }

    fn interner(&self) -> &StringInterner {
        self.interner
    }
}

#[cfg(test)]
mod tests;
