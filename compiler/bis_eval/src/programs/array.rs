//! ```text
//! instance ToString for Array[T] given T: ToString {
//!     func str(items: Array[T]) -> String {
//!         appendString("[", appendString(join(items, 0), "]"))
//!     }
//! }
//!
//! func main() {
//!     let pairs = [Pair{ x: "abc", y: "xyz" }, Pair{ x: "def", y: "uvw" }];
//!     print(ToString.str(pairs));
//! }
//! ```
//!
//! The instance is parametric: its constructor takes the element witness
//! and records it as a requirement, and the method reaches it again
//! through the self bundle.

use bis_value::{
    missing_requirement, wrong_arg_count, CallExecutor, Callable, EvalResult, Sequence, Value,
    WitnessBuilder,
};

use super::pair::{link_pair_instance, make_pair};
use super::to_string_interface;
use crate::linkage::{LinkError, Linker, Program};

/// Prints `[abcxyz, defuvw]`.
pub struct ArrayProgram;

impl Program for ArrayProgram {
    fn link(&self, linker: &mut Linker<'_>) -> Result<(), LinkError> {
        linker.bind_function("main", 0, user_main)?;
        link_pair_instance(linker)?;
        linker.bind_function("ToString.Array", 1, make_to_string_array)?;
        linker.bind_function("join", 3, user_join)?;
        Ok(())
    }
}

fn user_main(exec: &mut dyn CallExecutor, _receiver: &Value, _args: &[Value]) -> EvalResult {
    // `[a, b]` lowers to append(append(empty, a), b)
    let first = make_pair(exec, "abc", "xyz")?;
    let second = make_pair(exec, "def", "uvw")?;
    let pairs = Sequence::empty().append(first).append(second);

    let element = exec.call_named("ToString.Pair", &[])?;
    let witness = exec.call_named("ToString.Array", &[element])?;
    let text = exec.call_named("ToString.str", &[witness, Value::seq(pairs)])?;
    exec.call_named("print", &[text])?;
    Ok(Value::unit())
}

/// `join(element: ToString, items: Array[T], i: Int) -> String`
///
/// Renders `items[i..]` separated by `", "`.
fn user_join(exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [element, items, i] = args else {
        return Err(wrong_arg_count("join", 3, args.len()));
    };
    let len = exec.call_named("length", &[items.clone()])?;
    let in_range = exec.call_named("less", &[i.clone(), len.clone()])?;
    if !in_range.expect_bool()? {
        return Ok(Value::string(""));
    }

    let item = exec.call_named("at", &[items.clone(), i.clone()])?;
    let head = exec.call_named("ToString.str", &[element.clone(), item])?;
    let next = exec.call_named("add", &[i.clone(), Value::int(1)])?;
    let has_more = exec.call_named("less", &[next.clone(), len])?;
    if !has_more.expect_bool()? {
        return Ok(head);
    }

    let head = exec.call_named("appendString", &[head, Value::string(", ")])?;
    let rest = exec.call_named("join", &[element.clone(), items.clone(), next])?;
    exec.call_named("appendString", &[head, rest])
}

fn array_str_impl(exec: &mut dyn CallExecutor, self_bundle: &Value, args: &[Value]) -> EvalResult {
    let [items] = args else {
        return Err(wrong_arg_count("ToString.Array.str", 1, args.len()));
    };
    let Some(element) = self_bundle.expect_witness()?.requirement(0).cloned() else {
        return Err(missing_requirement("ToString", 0));
    };
    let body = exec.call_named(
        "join",
        &[Value::Witness(element), items.clone(), Value::int(0)],
    )?;
    let closed = exec.call_named("appendString", &[body, Value::string("]")])?;
    exec.call_named("appendString", &[Value::string("["), closed])
}

fn make_to_string_array(exec: &mut dyn CallExecutor, _receiver: &Value, args: &[Value]) -> EvalResult {
    let [element] = args else {
        return Err(wrong_arg_count("ToString.Array", 1, args.len()));
    };
    let element = element.expect_witness()?.clone();
    let iface = to_string_interface(exec.interner());
    let imp = Callable::native(exec.intern("ToString.Array.str"), 1, array_str_impl);
    WitnessBuilder::new(&iface, exec.intern("Array"))
        .method(exec.intern("str"), imp)
        .requires(element)
        .build(exec.interner())
        .map(Value::witness)
}
