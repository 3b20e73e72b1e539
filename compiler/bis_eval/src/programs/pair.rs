//! ```text
//! type Pair = { x: String, y: String }
//!
//! func str(p: Pair) -> String { appendString(p.x, p.y) }
//!
//! instance ToString for Pair {
//!     func str(p: Pair) -> String { appendString(p.x, p.y) }
//! }
//!
//! func main() { print(ToString.str(Pair{ x: "abc", y: "xyz" })) }
//! ```

use bis_value::{
    wrong_arg_count, CallExecutor, Callable, EvalResult, RecordBuilder, Value, WitnessBuilder,
};

use super::to_string_interface;
use crate::linkage::{LinkError, Linker, Program};

/// The canonical sample: prints `abcxyz`.
pub struct PairProgram;

impl Program for PairProgram {
    fn link(&self, linker: &mut Linker<'_>) -> Result<(), LinkError> {
        linker.bind_function("str", 1, user_str)?;
        linker.bind_function("main", 0, user_main)?;
        link_pair_instance(linker)
    }
}

/// Bind `ToString`'s extractor and the `ToString for Pair` constructor.
pub(super) fn link_pair_instance(linker: &mut Linker<'_>) -> Result<(), LinkError> {
    if !linker.is_bound("ToString.str") {
        linker.bind_interface(&to_string_interface(linker.interner()))?;
    }
    linker.bind_function("ToString.Pair", 0, make_to_string_pair)?;
    Ok(())
}

/// `Pair{ x, y }`; fields may be given in any order.
pub(super) fn make_pair(exec: &mut dyn CallExecutor, x: &str, y: &str) -> EvalResult {
    RecordBuilder::new(exec.intern("Pair"))
        .field(exec.intern("y"), Value::string(y))
        .field(exec.intern("x"), Value::string(x))
        .build(exec.interner())
        .map(Value::record)
}

fn concat_fields(exec: &mut dyn CallExecutor, p: &Value) -> EvalResult {
    let record = p.expect_record()?;
    let x = record.field(exec.intern("x"), exec.interner())?.clone();
    let y = record.field(exec.intern("y"), exec.interner())?.clone();
    exec.call_named("appendString", &[x, y])
}

fn user_str(exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [p] = args else {
        return Err(wrong_arg_count("str", 1, args.len()));
    };
    concat_fields(exec, p)
}

fn user_main(exec: &mut dyn CallExecutor, _receiver: &Value, _args: &[Value]) -> EvalResult {
    let witness = exec.call_named("ToString.Pair", &[])?;
    let pair = make_pair(exec, "abc", "xyz")?;
    let text = exec.call_named("ToString.str", &[witness, pair])?;
    exec.call_named("print", &[text])?;
    Ok(Value::unit())
}

/// `ToString for Pair`: `str` receives the witness as its receiver.
fn pair_str_impl(exec: &mut dyn CallExecutor, _self_bundle: &Value, args: &[Value]) -> EvalResult {
    let [p] = args else {
        return Err(wrong_arg_count("ToString.Pair.str", 1, args.len()));
    };
    concat_fields(exec, p)
}

fn make_to_string_pair(exec: &mut dyn CallExecutor, _receiver: &Value, _args: &[Value]) -> EvalResult {
    let iface = to_string_interface(exec.interner());
    let imp = Callable::native(exec.intern("ToString.Pair.str"), 1, pair_str_impl);
    WitnessBuilder::new(&iface, exec.intern("Pair"))
        .method(exec.intern("str"), imp)
        .build(exec.interner())
        .map(Value::witness)
}
