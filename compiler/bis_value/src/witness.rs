//! Interface declarations and witness records.
//!
//! A structural interface compiles to one witness per implementing type: a
//! record holding one `Callable` per declared method, in declaration order.
//! A polymorphic call site receives the witness as an ordinary argument and
//! dispatches by slot, with no lookup keyed on the receiver's runtime type.
//!
//! Witnesses for parametric instances (`ToString for Array[T] given
//! T: ToString`) carry the witnesses they were instantiated with as
//! `requirements`. The method implementation reaches them through its
//! receiver, which is the witness itself.

use std::fmt;

use bis_ir::{Name, StringInterner, StringLookup};

use crate::errors::{
    duplicate_method, no_such_method, witness_incomplete, wrong_arg_count, EvalError,
};
use crate::value::Heap;
use crate::Callable;

/// One declared interface method.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MethodSig {
    pub name: Name,
    /// Positional arguments, not counting the receiver.
    pub arity: usize,
}

/// A structural interface: a named, ordered set of method signatures.
#[derive(Clone, Debug)]
pub struct Interface {
    name: Name,
    methods: Vec<MethodSig>,
}

impl Interface {
    pub fn new(name: Name, methods: Vec<MethodSig>) -> Self {
        Interface { name, methods }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    /// Methods in declaration (slot) order.
    pub fn methods(&self) -> &[MethodSig] {
        &self.methods
    }

    pub fn method(&self, name: Name) -> Option<&MethodSig> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Binding name of the extractor for `method`: `<Interface>.<method>`.
    pub fn qualified_name(&self, method: Name, interner: &StringInterner) -> Name {
        let qualified = format!("{}.{}", interner.lookup(self.name), interner.lookup(method));
        interner.intern(&qualified)
    }

    /// One extractor callable per declared method.
    ///
    /// Each takes the witness as its first argument, followed by the
    /// method's own arguments.
    pub fn extractors(&self, interner: &StringInterner) -> Vec<Callable> {
        self.methods
            .iter()
            .map(|sig| {
                Callable::method_extractor(
                    self.qualified_name(sig.name, interner),
                    sig.arity.saturating_add(1),
                    self.name,
                    sig.name,
                )
            })
            .collect()
    }
}

/// Proof that one concrete type implements one interface.
#[derive(Clone)]
pub struct Witness {
    interface: Name,
    type_name: Name,
    /// `(method, implementation)` in interface declaration order.
    slots: Vec<(Name, Callable)>,
    requirements: Vec<Heap<Witness>>,
}

impl Witness {
    #[inline]
    pub fn interface(&self) -> Name {
        self.interface
    }

    /// The implementing type this witness was built for.
    #[inline]
    pub fn type_name(&self) -> Name {
        self.type_name
    }

    /// Implementation of `method`, if the interface declares it.
    pub fn method(&self, method: Name) -> Option<&Callable> {
        self.slots
            .iter()
            .find(|(name, _)| *name == method)
            .map(|(_, callable)| callable)
    }

    /// Implementations in slot order.
    pub fn slots(&self) -> impl Iterator<Item = &Callable> + '_ {
        self.slots.iter().map(|(_, callable)| callable)
    }

    /// Witness this instance was parameterised with, by position.
    pub fn requirement(&self, index: usize) -> Option<&Heap<Witness>> {
        self.requirements.get(index)
    }

    pub fn requirements(&self) -> &[Heap<Witness>] {
        &self.requirements
    }
}

impl fmt::Debug for Witness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Witness")
            .field("interface", &self.interface)
            .field("type_name", &self.type_name)
            .field("slots", &self.slots.len())
            .field("requirements", &self.requirements.len())
            .finish()
    }
}

/// Builds a witness, checking it against its interface.
pub struct WitnessBuilder<'a> {
    interface: &'a Interface,
    type_name: Name,
    impls: Vec<(Name, Callable)>,
    requirements: Vec<Heap<Witness>>,
}

impl<'a> WitnessBuilder<'a> {
    pub fn new(interface: &'a Interface, type_name: Name) -> Self {
        WitnessBuilder {
            interface,
            type_name,
            impls: Vec::new(),
            requirements: Vec::new(),
        }
    }

    /// Supply the implementation of `method`.
    #[must_use]
    pub fn method(mut self, method: Name, implementation: Callable) -> Self {
        self.impls.push((method, implementation));
        self
    }

    /// Record a witness this instance depends on.
    #[must_use]
    pub fn requires(mut self, witness: Heap<Witness>) -> Self {
        self.requirements.push(witness);
        self
    }

    /// Check that every declared method has exactly one implementation of
    /// the declared arity, then freeze the slots in declaration order.
    pub fn build<I: StringLookup>(self, interner: &I) -> Result<Witness, EvalError> {
        let iface = self.interface;
        let iface_name = interner.lookup(iface.name());

        for (i, (name, callable)) in self.impls.iter().enumerate() {
            let Some(sig) = iface.method(*name) else {
                return Err(no_such_method(interner.lookup(*name), iface_name));
            };
            if self.impls[..i].iter().any(|(seen, _)| seen == name) {
                return Err(duplicate_method(interner.lookup(*name), iface_name));
            }
            if callable.arity() != sig.arity {
                let qualified = format!("{iface_name}.{}", interner.lookup(*name));
                return Err(wrong_arg_count(&qualified, sig.arity, callable.arity()));
            }
        }

        let mut slots = Vec::with_capacity(iface.methods().len());
        for sig in iface.methods() {
            let Some((_, callable)) = self.impls.iter().find(|(name, _)| *name == sig.name) else {
                return Err(witness_incomplete(
                    iface_name,
                    interner.lookup(self.type_name),
                    interner.lookup(sig.name),
                ));
            };
            slots.push((sig.name, *callable));
        }

        tracing::trace!(
            interface = iface_name,
            type_name = interner.lookup(self.type_name),
            requirements = self.requirements.len(),
            "built witness"
        );

        Ok(Witness {
            interface: iface.name(),
            type_name: self.type_name,
            slots,
            requirements: self.requirements,
        })
    }
}
