//! Built-in operations.
//!
//! Each built-in is a fixed-arity native callable. The receiver is ignored;
//! arguments are checked by tag and a mismatch raises `TypeMismatch`.

mod io;
mod numeric;
mod sequence;
mod string;

use bis_ir::StringInterner;
use bis_value::{Callable, NativeFn};

pub use io::{print, show};
pub use numeric::{add, less};
pub use sequence::{append_array, at, length};
pub use string::append_string;

/// `(name, arity, entry)` for every prelude operation.
const PRELUDE: [(&str, usize, NativeFn); 8] = [
    ("print", 1, print),
    ("at", 2, at),
    ("appendArray", 2, append_array),
    ("appendString", 2, append_string),
    ("length", 1, length),
    ("show", 1, show),
    ("less", 2, less),
    ("add", 2, add),
];

/// The prelude as callables, in binding order.
pub fn prelude(interner: &StringInterner) -> Vec<Callable> {
    PRELUDE
        .iter()
        .map(|&(name, arity, entry)| Callable::native(interner.intern(name), arity, entry))
        .collect()
}
