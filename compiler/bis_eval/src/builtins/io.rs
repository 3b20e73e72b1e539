use bis_value::{not_implemented, wrong_arg_count, CallExecutor, EvalResult, Value};

/// `print(line: String) -> Unit`
pub fn print(exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [line] = args else {
        return Err(wrong_arg_count("print", 1, args.len()));
    };
    exec.println(line.expect_str()?);
    Ok(Value::unit())
}

/// `show` is declared by the language surface but has no implementation.
pub fn show(_exec: &mut dyn CallExecutor, _receiver: &Value, _args: &[Value]) -> EvalResult {
    Err(not_implemented("show"))
}
