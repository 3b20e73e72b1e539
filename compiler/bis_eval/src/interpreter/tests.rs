use super::*;
use bis_value::{EvalErrorKind, Interface, MethodSig, RecordBuilder, WitnessBuilder};
use pretty_assertions::assert_eq;

use crate::linkage::Linker;
use crate::print_handler::buffer_handler;

fn countdown(exec: &mut dyn CallExecutor, _: &Value, args: &[Value]) -> EvalResult {
    let n = args[0].expect_int()?.raw();
    if n == 0 {
        return Ok(Value::int(0));
    }
    exec.call_named("countdown", &[Value::int(n.saturating_sub(1))])
}

fn describe(exec: &mut dyn CallExecutor, receiver: &Value, args: &[Value]) -> EvalResult {
    let witness = receiver.expect_witness()?;
    let type_name = exec.interner().lookup(witness.type_name()).to_string();
    let label = args[0].expect_str()?;
    Ok(Value::string(format!("{type_name}:{label}")))
}

fn text_interface(interner: &StringInterner) -> Interface {
    Interface::new(
        interner.intern("Describe"),
        vec![MethodSig {
            name: interner.intern("describe"),
            arity: 1,
        }],
    )
}

fn text_witness(interner: &StringInterner, iface: &Interface) -> Heap<Witness> {
    let imp = Callable::native(interner.intern("Describe.Label.describe"), 1, describe);
    let Ok(witness) = WitnessBuilder::new(iface, interner.intern("Label"))
        .method(interner.intern("describe"), imp)
        .build(interner)
    else {
        panic!("witness should build");
    };
    let Value::Witness(witness) = Value::witness(witness) else {
        panic!("expected a witness value");
    };
    witness
}

fn link(interner: &StringInterner, iface: &Interface) -> BindingTable {
    let mut linker = Linker::new(interner);
    assert!(linker.bind_builtins().is_ok());
    assert!(linker.bind_function("countdown", 1, countdown).is_ok());
    assert!(linker.bind_interface(iface).is_ok());
    linker.finish()
}

#[test]
fn call_runs_native_with_placeholder_receiver() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let table = link(&interner, &iface);
    let handler = buffer_handler();
    let mut interp = InterpreterBuilder::new(&interner, &table)
        .print_handler(handler.clone())
        .build();

    let result = interp.call_named("print", &[Value::string("abcxyz")]);
    assert_eq!(result.ok(), Some(Value::unit()));
    assert_eq!(handler.get_output(), "abcxyz\n");
    assert!(interp.call_stack().is_empty());
}

#[test]
fn wrong_argument_count_is_a_contract_fault() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let table = link(&interner, &iface);
    let mut interp = InterpreterBuilder::new(&interner, &table).build();

    let err = interp.call_named("less", &[Value::int(1)]).err();
    assert_eq!(
        err.as_ref().map(|e| &e.kind),
        Some(&EvalErrorKind::ArityMismatch {
            name: "less".to_string(),
            expected: 2,
            got: 1,
        })
    );
    assert!(err.is_some_and(|e| !e.is_fatal()));
}

#[test]
fn unknown_binding_is_reported() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let table = link(&interner, &iface);
    let mut interp = InterpreterBuilder::new(&interner, &table).build();

    let err = interp.call_named("nope", &[]).err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::UndefinedBinding {
            name: "nope".to_string()
        })
    );
}

#[test]
fn recursion_within_limit_completes() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let table = link(&interner, &iface);
    let mut interp = InterpreterBuilder::new(&interner, &table)
        .max_call_depth(Some(64))
        .build();

    let result = interp.call_named("countdown", &[Value::int(10)]);
    assert_eq!(result.ok().and_then(|v| v.as_int()), Some(0));
    assert_eq!(interp.call_stack().depth(), 0);
}

#[test]
fn recursion_past_limit_overflows() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let table = link(&interner, &iface);
    let mut interp = InterpreterBuilder::new(&interner, &table)
        .max_call_depth(Some(8))
        .build();

    let err = interp.call_named("countdown", &[Value::int(100)]).err();
    let Some(err) = err else {
        panic!("expected a stack overflow");
    };
    assert_eq!(err.kind, EvalErrorKind::StackOverflow { depth: 8 });
    assert_eq!(err.backtrace.map(|b| b.len()), Some(8));
    assert!(interp.call_stack().is_empty());
}

#[test]
fn witness_call_matches_direct_call() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let table = link(&interner, &iface);
    let witness = text_witness(&interner, &iface);
    let mut interp = InterpreterBuilder::new(&interner, &table).build();

    let via_extractor =
        interp.call_named("Describe.describe", &[Value::Witness(witness.clone()), Value::string("x")]);
    let via_dispatch = interp.dispatch(&witness, interner.intern("describe"), &[Value::string("x")]);
    let Some(imp) = witness.method(interner.intern("describe")).copied() else {
        panic!("slot should exist");
    };
    let direct = interp.invoke(&imp, &Value::Witness(witness.clone()), &[Value::string("x")]);

    assert_eq!(via_extractor.ok(), Some(Value::string("Label:x")));
    assert_eq!(via_dispatch.ok(), Some(Value::string("Label:x")));
    assert_eq!(direct.ok(), Some(Value::string("Label:x")));
}

#[test]
fn extractor_rejects_non_witness() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let table = link(&interner, &iface);
    let mut interp = InterpreterBuilder::new(&interner, &table).build();

    let err = interp
        .call_named("Describe.describe", &[Value::int(1), Value::string("x")])
        .err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::TypeMismatch {
            expected: "witness".to_string(),
            got: "Int".to_string(),
        })
    );
}

#[test]
fn extractor_rejects_witness_of_other_interface() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let other = Interface::new(
        interner.intern("Other"),
        vec![MethodSig {
            name: interner.intern("describe"),
            arity: 1,
        }],
    );
    let table = link(&interner, &iface);
    let foreign = text_witness(&interner, &other);
    let mut interp = InterpreterBuilder::new(&interner, &table).build();

    let err = interp
        .call_named("Describe.describe", &[Value::Witness(foreign), Value::string("x")])
        .err();
    assert_eq!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::TypeMismatch {
            expected: "Describe".to_string(),
            got: "Other".to_string(),
        })
    );
}

#[test]
fn dispatch_to_undeclared_method_faults() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let table = link(&interner, &iface);
    let witness = text_witness(&interner, &iface);
    let mut interp = InterpreterBuilder::new(&interner, &table).build();

    let err = interp.dispatch(&witness, interner.intern("render"), &[]).err();
    assert!(matches!(
        err.map(|e| e.kind),
        Some(EvalErrorKind::UndefinedMethod { .. })
    ));
}

#[test]
fn fault_backtrace_names_the_failing_frames() {
    let interner = StringInterner::new();
    let iface = text_interface(&interner);
    let table = link(&interner, &iface);
    let mut interp = InterpreterBuilder::new(&interner, &table).build();

    let Ok(pair) = RecordBuilder::new(interner.intern("Pair")).build(&interner) else {
        panic!("record should build");
    };
    let err = interp.call_named("length", &[Value::record(pair)]).err();
    let frames: Vec<String> = err
        .and_then(|e| e.backtrace)
        .map(|b| b.frames().iter().map(|f| f.name.clone()).collect())
        .unwrap_or_default();
    assert_eq!(frames, vec!["length".to_string()]);
}
