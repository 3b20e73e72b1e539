//! ```text
//! func main() {
//!     let letters = ["a", "b"];
//!     print(at(letters, 0));
//!     print(at(letters, 5));
//! }
//! ```

use bis_value::{CallExecutor, EvalResult, Sequence, Value};

use crate::linkage::{LinkError, Linker, Program};

/// Prints `a`, then faults indexing past the end.
pub struct BoundsProgram;

impl Program for BoundsProgram {
    fn link(&self, linker: &mut Linker<'_>) -> Result<(), LinkError> {
        linker.bind_function("main", 0, user_main)?;
        Ok(())
    }
}

fn user_main(exec: &mut dyn CallExecutor, _receiver: &Value, _args: &[Value]) -> EvalResult {
    let letters = Value::seq(
        Sequence::empty()
            .append(Value::string("a"))
            .append(Value::string("b")),
    );
    for index in [0, 5] {
        let letter = exec.call_named("at", &[letters.clone(), Value::int(index)])?;
        exec.call_named("print", &[letter])?;
    }
    Ok(Value::unit())
}
