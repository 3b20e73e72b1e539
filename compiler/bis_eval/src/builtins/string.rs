use bis_value::{wrong_arg_count, CallExecutor, EvalResult, Value};

/// `appendString(first: String, second: String) -> String`
pub fn append_string(_exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [first, second] = args else {
        return Err(wrong_arg_count("appendString", 2, args.len()));
    };
    let (first, second) = (first.expect_str()?, second.expect_str()?);
    let mut joined = String::with_capacity(first.len().saturating_add(second.len()));
    joined.push_str(first);
    joined.push_str(second);
    Ok(Value::string(joined))
}
