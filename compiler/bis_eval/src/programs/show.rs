//! ```text
//! func main() { print(show(42)) }
//! ```

use bis_value::{CallExecutor, EvalResult, Value};

use crate::linkage::{LinkError, Linker, Program};

/// Faults on the unimplemented `show` before printing anything.
pub struct ShowProgram;

impl Program for ShowProgram {
    fn link(&self, linker: &mut Linker<'_>) -> Result<(), LinkError> {
        linker.bind_function("main", 0, user_main)?;
        Ok(())
    }
}

fn user_main(exec: &mut dyn CallExecutor, _receiver: &Value, _args: &[Value]) -> EvalResult {
    let shown = exec.call_named("show", &[Value::int(42)])?;
    exec.call_named("print", &[shown])?;
    Ok(Value::unit())
}
