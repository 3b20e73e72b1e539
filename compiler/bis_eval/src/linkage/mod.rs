//! Program linkage: the one-time startup phase.
//!
//! A [`Linker`] collects every top-level binding (built-ins, user
//! functions, witness constructors and interface extractors). Once all
//! names are bound, [`Linker::finish`] freezes them into a [`BindingTable`].
//! The table has no mutating API, so the write-then-freeze lifecycle is
//! enforced by ownership: empty, populated through `&mut Linker`, then
//! read-only behind `&BindingTable` for the rest of the run.

use bis_ir::{InternError, Name, StringInterner};
use bis_value::{Callable, EvalError, Interface, NativeFn, Value};
use rustc_hash::FxHashMap;

use crate::builtins;
use crate::config::RuntimeConfig;
use crate::print_handler::SharedPrintHandler;
use crate::InterpreterBuilder;

/// Failure while wiring a program together.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("'{name}' is bound more than once")]
    DuplicateBinding { name: String },
    #[error("entry point '{name}' is not bound")]
    MissingEntry { name: String },
    #[error(transparent)]
    Intern(#[from] InternError),
}

/// Anything that can go wrong in [`run_program`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Link(#[from] LinkError),
    #[error(transparent)]
    Fault(#[from] EvalError),
}

/// A linkable program: the generated code between the prelude and `main`.
pub trait Program {
    /// Bind every top-level name the program defines.
    ///
    /// Built-ins are already bound when this runs.
    fn link(&self, linker: &mut Linker<'_>) -> Result<(), LinkError>;
}

/// Accumulates bindings during linkage.
pub struct Linker<'a> {
    interner: &'a StringInterner,
    bindings: FxHashMap<Name, Callable>,
    order: Vec<Name>,
}

impl<'a> Linker<'a> {
    pub fn new(interner: &'a StringInterner) -> Self {
        Linker {
            interner,
            bindings: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    #[inline]
    pub fn interner(&self) -> &'a StringInterner {
        self.interner
    }

    /// Bind `callable` under its own name.
    pub fn bind(&mut self, callable: Callable) -> Result<(), LinkError> {
        let name = callable.name();
        if self.bindings.contains_key(&name) {
            return Err(LinkError::DuplicateBinding {
                name: self.interner.lookup(name).to_string(),
            });
        }
        tracing::debug!(
            name = self.interner.lookup(name),
            arity = callable.arity(),
            "bind"
        );
        self.bindings.insert(name, callable);
        self.order.push(name);
        Ok(())
    }

    /// Bind a native function (user function or witness constructor).
    pub fn bind_function(
        &mut self,
        name: &str,
        arity: usize,
        entry: NativeFn,
    ) -> Result<Name, LinkError> {
        let name = self.interner.try_intern(name)?;
        self.bind(Callable::native(name, arity, entry))?;
        Ok(name)
    }

    /// Bind the prelude: `print`, `at`, `appendArray`, `appendString`,
    /// `length`, `show`, `less` and `add`.
    pub fn bind_builtins(&mut self) -> Result<(), LinkError> {
        for callable in builtins::prelude(self.interner) {
            self.bind(callable)?;
        }
        Ok(())
    }

    /// Bind one extractor per method of `interface`, as `<Interface>.<method>`.
    pub fn bind_interface(&mut self, interface: &Interface) -> Result<(), LinkError> {
        for extractor in interface.extractors(self.interner) {
            self.bind(extractor)?;
        }
        Ok(())
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.interner
            .get(name)
            .is_some_and(|name| self.bindings.contains_key(&name))
    }

    /// Freeze the bindings.
    pub fn finish(self) -> BindingTable {
        tracing::debug!(bindings = self.order.len(), "linkage complete");
        BindingTable {
            bindings: self.bindings,
            order: self.order,
        }
    }
}

/// Immutable mapping from top-level name to callable.
#[derive(Debug)]
pub struct BindingTable {
    bindings: FxHashMap<Name, Callable>,
    order: Vec<Name>,
}

impl BindingTable {
    #[inline]
    pub fn get(&self, name: Name) -> Option<Callable> {
        self.bindings.get(&name).copied()
    }

    pub fn contains(&self, name: Name) -> bool {
        self.bindings.contains_key(&name)
    }

    /// Bound names, in the order they were linked.
    pub fn names(&self) -> &[Name] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Link `program` against the prelude, then invoke the configured entry
/// with the placeholder receiver and no arguments.
///
/// The entry's return value is discarded.
#[tracing::instrument(level = "debug", skip_all, fields(entry = %config.entry))]
pub fn run_program<P: Program + ?Sized>(
    program: &P,
    interner: &StringInterner,
    print_handler: SharedPrintHandler,
    config: &RuntimeConfig,
) -> Result<(), RunError> {
    let mut linker = Linker::new(interner);
    linker.bind_builtins()?;
    program.link(&mut linker)?;
    let table = linker.finish();

    let entry = interner.try_intern(&config.entry).map_err(LinkError::from)?;
    if !table.contains(entry) {
        return Err(LinkError::MissingEntry {
            name: config.entry.clone(),
        }
        .into());
    }

    let mut interpreter = InterpreterBuilder::new(interner, &table)
        .print_handler(print_handler)
        .config(config)
        .build();
    let _: Value = interpreter.run_entry(entry)?;
    Ok(())
}
