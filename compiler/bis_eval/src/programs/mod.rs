//! Bundled programs.
//!
//! Each is hand-lowered the way the compiler emits code: user functions,
//! witness constructors and interface extractors are native callables bound
//! at linkage, and every operation goes through the binding table.

mod array;
mod bounds;
mod pair;
mod show;

use std::fmt;
use std::str::FromStr;

use bis_ir::StringInterner;
use bis_value::{Interface, MethodSig};

use crate::linkage::{LinkError, Linker, Program};

pub use array::ArrayProgram;
pub use bounds::BoundsProgram;
pub use pair::PairProgram;
pub use show::ShowProgram;

/// `interface ToString { str(self) -> String }`
pub fn to_string_interface(interner: &StringInterner) -> Interface {
    Interface::new(
        interner.intern("ToString"),
        vec![MethodSig {
            name: interner.intern("str"),
            arity: 1,
        }],
    )
}

/// Selects one of the bundled programs by name.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SampleProgram {
    /// Prints `abcxyz` through a `ToString` witness for `Pair`.
    #[default]
    Pair,
    /// Prints an array of pairs through a parametric `ToString` witness.
    Array,
    /// Indexes past the end of a sequence.
    Bounds,
    /// Calls the unimplemented `show` built-in.
    Show,
}

impl SampleProgram {
    pub const ALL: [SampleProgram; 4] = [
        SampleProgram::Pair,
        SampleProgram::Array,
        SampleProgram::Bounds,
        SampleProgram::Show,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SampleProgram::Pair => "pair",
            SampleProgram::Array => "array",
            SampleProgram::Bounds => "bounds",
            SampleProgram::Show => "show",
        }
    }
}

impl fmt::Display for SampleProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SampleProgram {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SampleProgram::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown program '{s}'"))
    }
}

impl Program for SampleProgram {
    fn link(&self, linker: &mut Linker<'_>) -> Result<(), LinkError> {
        match self {
            SampleProgram::Pair => PairProgram.link(linker),
            SampleProgram::Array => ArrayProgram.link(linker),
            SampleProgram::Bounds => BoundsProgram.link(linker),
            SampleProgram::Show => ShowProgram.link(linker),
        }
    }
}

#[cfg(test)]
mod tests;
