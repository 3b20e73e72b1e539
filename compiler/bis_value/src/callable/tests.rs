use super::*;
use pretty_assertions::assert_eq;

use crate::errors::{undefined_binding, wrong_arg_count};

/// Runs native targets directly against a fixed list of bindings.
struct DirectExecutor {
    interner: StringInterner,
    bindings: Vec<Callable>,
    output: Vec<String>,
}

impl DirectExecutor {
    fn new() -> Self {
        DirectExecutor {
            interner: StringInterner::new(),
            bindings: Vec::new(),
            output: Vec::new(),
        }
    }

    fn bind(&mut self, name: &str, arity: usize, entry: NativeFn) {
        let name = self.interner.intern(name);
        self.bindings.push(Callable::native(name, arity, entry));
    }
}

impl CallExecutor for DirectExecutor {
    fn invoke(&mut self, callable: &Callable, receiver: &Value, args: &[Value]) -> EvalResult {
        if args.len() != callable.arity() {
            let name = self.interner.lookup(callable.name());
            return Err(wrong_arg_count(name, callable.arity(), args.len()));
        }
        match callable.target() {
            CallTarget::Native(entry) => entry(self, receiver, args),
            CallTarget::Method { .. } => Ok(Value::unit()),
        }
    }

    fn lookup(&self, name: Name) -> Option<Callable> {
        self.bindings.iter().copied().find(|c| c.name() == name)
    }

    fn call(&mut self, name: Name, args: &[Value]) -> EvalResult {
        let Some(callable) = self.lookup(name) else {
            return Err(undefined_binding(self.interner.lookup(name)));
        };
        self.invoke(&callable, &Value::unit(), args)
    }

    fn println(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn interner(&self) -> &StringInterner {
        &self.interner
    }
}

fn echo(exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let text = args[0].expect_str()?;
    exec.println(text);
    Ok(Value::unit())
}

fn receiver_is_unit(_: &mut dyn CallExecutor, receiver: &Value, _: &[Value]) -> EvalResult {
    Ok(Value::boolean(receiver.is_unit()))
}

fn greet_twice(exec: &mut dyn CallExecutor, _: &Value, _: &[Value]) -> EvalResult {
    exec.call_named("echo", &[Value::string("hi")])?;
    exec.call_named("echo", &[Value::string("hi")])
}

#[test]
fn native_accessors() {
    let interner = StringInterner::new();
    let name = interner.intern("echo");
    let callable = Callable::native(name, 1, echo);
    assert_eq!(callable.name(), name);
    assert_eq!(callable.arity(), 1);
    assert!(matches!(callable.target(), CallTarget::Native(_)));
}

#[test]
fn extractor_records_interface_and_method() {
    let interner = StringInterner::new();
    let iface = interner.intern("ToString");
    let method = interner.intern("str");
    let name = interner.intern("ToString.str");
    let callable = Callable::method_extractor(name, 2, iface, method);
    assert_eq!(callable.arity(), 2);
    match callable.target() {
        CallTarget::Method { interface, method: m } => {
            assert_eq!(interface, iface);
            assert_eq!(m, method);
        }
        CallTarget::Native(_) => panic!("expected a method target"),
    }
}

#[test]
fn call_named_resolves_through_bindings() {
    let mut exec = DirectExecutor::new();
    exec.bind("echo", 1, echo);
    exec.bind("greet", 0, greet_twice);

    let result = exec.call_named("greet", &[]);
    assert!(result.is_ok());
    assert_eq!(exec.output, vec!["hi".to_string(), "hi".to_string()]);
}

#[test]
fn call_passes_placeholder_receiver() {
    let mut exec = DirectExecutor::new();
    exec.bind("probe", 0, receiver_is_unit);
    let result = exec.call_named("probe", &[]);
    assert_eq!(result.ok().and_then(|v| v.as_bool()), Some(true));
}

#[test]
fn unknown_binding_is_an_error() {
    let mut exec = DirectExecutor::new();
    assert!(exec.call_named("missing", &[]).is_err());
}

#[test]
fn callable_is_a_first_class_value() {
    let interner = StringInterner::new();
    let callable = Callable::native(interner.intern("echo"), 1, echo);
    let value = Value::callable(callable);
    assert_eq!(value.as_callable().map(Callable::arity), Some(1));
    assert_eq!(value.type_name(), "function");
}
