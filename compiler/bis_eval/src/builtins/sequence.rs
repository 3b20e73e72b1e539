use bis_value::{wrong_arg_count, CallExecutor, EvalResult, Value};

/// `at(array: Array[T], index: Int) -> T`
pub fn at(_exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [array, index] = args else {
        return Err(wrong_arg_count("at", 2, args.len()));
    };
    let seq = array.expect_seq()?;
    seq.at(index.expect_int()?).cloned()
}

/// `appendArray(first: Array[T], second: Array[T]) -> Array[T]`
pub fn append_array(_exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [first, second] = args else {
        return Err(wrong_arg_count("appendArray", 2, args.len()));
    };
    Ok(Value::seq(first.expect_seq()?.concat(second.expect_seq()?)))
}

/// `length(array: Array[T]) -> Int`
pub fn length(_exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [array] = args else {
        return Err(wrong_arg_count("length", 1, args.len()));
    };
    array.expect_seq()?.length().map(Value::Int)
}
