use bis_value::{integer_overflow, wrong_arg_count, CallExecutor, EvalResult, Value};

/// `less(x: Int, y: Int) -> Bool`
pub fn less(_exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [x, y] = args else {
        return Err(wrong_arg_count("less", 2, args.len()));
    };
    Ok(Value::boolean(x.expect_int()?.raw() < y.expect_int()?.raw()))
}

/// `add(x: Int, y: Int) -> Int`, faulting on overflow.
pub fn add(_exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [x, y] = args else {
        return Err(wrong_arg_count("add", 2, args.len()));
    };
    x.expect_int()?
        .checked_add(y.expect_int()?)
        .map(Value::Int)
        .ok_or_else(|| integer_overflow("add"))
}
