use super::*;
use bis_value::{CallExecutor, EvalErrorKind, Value};
use pretty_assertions::assert_eq;

use crate::config::RuntimeConfig;
use crate::linkage::{run_program, RunError};
use crate::print_handler::buffer_handler;
use crate::InterpreterBuilder;

fn run(program: SampleProgram) -> (Result<(), RunError>, String) {
    let interner = StringInterner::new();
    let handler = buffer_handler();
    let result = run_program(&program, &interner, handler.clone(), &RuntimeConfig::default());
    (result, handler.get_output())
}

#[test]
fn pair_prints_concatenated_fields() {
    let (result, output) = run(SampleProgram::Pair);
    assert!(result.is_ok());
    assert_eq!(output, "abcxyz\n");
}

#[test]
fn direct_and_witness_calls_agree() {
    let interner = StringInterner::new();
    let mut linker = Linker::new(&interner);
    assert!(linker.bind_builtins().is_ok());
    assert!(PairProgram.link(&mut linker).is_ok());
    let table = linker.finish();
    let mut interp = InterpreterBuilder::new(&interner, &table).build();

    let Ok(pair) = pair::make_pair(&mut interp, "abc", "xyz") else {
        panic!("pair should build");
    };
    let Ok(witness) = interp.call_named("ToString.Pair", &[]) else {
        panic!("witness should build");
    };
    let direct = interp.call_named("str", &[pair.clone()]);
    let mediated = interp.call_named("ToString.str", &[witness, pair]);
    assert_eq!(direct.ok(), Some(Value::string("abcxyz")));
    assert_eq!(mediated.ok(), Some(Value::string("abcxyz")));
}

#[test]
fn array_uses_parametric_witness() {
    let (result, output) = run(SampleProgram::Array);
    assert!(result.is_ok());
    assert_eq!(output, "[abcxyz, defuvw]\n");
}

#[test]
fn bounds_prints_then_faults_fatally() {
    let (result, output) = run(SampleProgram::Bounds);
    assert_eq!(output, "a\n");
    let Err(RunError::Fault(err)) = result else {
        panic!("expected a runtime fault");
    };
    assert!(err.is_fatal());
    assert_eq!(err.kind, EvalErrorKind::IndexOutOfBounds { index: 5, length: 2 });
    let frames: Vec<String> = err
        .backtrace
        .map(|b| b.frames().iter().map(|f| f.name.clone()).collect())
        .unwrap_or_default();
    assert_eq!(frames, vec!["main".to_string(), "at".to_string()]);
}

#[test]
fn show_faults_as_not_implemented() {
    let (result, output) = run(SampleProgram::Show);
    assert_eq!(output, "");
    let Err(RunError::Fault(err)) = result else {
        panic!("expected a runtime fault");
    };
    assert!(!err.is_fatal());
    assert!(matches!(err.kind, EvalErrorKind::NotImplemented { .. }));
}

#[test]
fn names_round_trip_through_from_str() {
    for program in SampleProgram::ALL {
        assert_eq!(program.name().parse::<SampleProgram>(), Ok(program));
    }
    assert!("nope".parse::<SampleProgram>().is_err());
}
