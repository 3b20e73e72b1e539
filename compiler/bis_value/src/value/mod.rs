//! Runtime values.
//!
//! Every runtime datum is a [`Value`]. Heap-backed payloads go through
//! `Value::` factory methods: the `Heap<T>` constructor is crate-private, so
//! code outside this crate cannot allocate a heap value any other way.
//!
//! ```text
//! let s = Value::string("abc");            // OK
//! let xs = Value::seq(Sequence::empty());  // OK
//! let s = Value::Str(Heap::new(...));      // ERROR: Heap::new is pub(crate)
//! ```
//!
//! Values are immutable after creation. Cloning a value clones a reference
//! count, never the payload.

mod heap;
mod record;
mod scalar_int;
mod sequence;

use std::fmt;

pub use bis_ir::{Name, StringLookup};

pub use heap::Heap;
pub use record::{RecordBuilder, RecordValue};
pub use scalar_int::ScalarInt;
pub use sequence::Sequence;

use crate::errors::{type_mismatch, EvalError};
use crate::{Callable, Witness};

/// Runtime value.
#[derive(Clone)]
pub enum Value {
    /// 64-bit signed integer (checked arithmetic only).
    Int(ScalarInt),
    /// Boolean.
    Bool(bool),
    /// The placeholder receiver, and the result of `print`.
    Unit,
    /// Immutable text.
    Str(Heap<String>),
    /// Persistent sequence.
    Seq(Sequence),
    /// Record instance.
    Record(RecordValue),
    /// Function value.
    Callable(Callable),
    /// Interface witness.
    Witness(Heap<Witness>),
}

// Factory methods

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(ScalarInt::new(n))
    }

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Bool(b)
    }

    #[inline]
    pub fn unit() -> Self {
        Value::Unit
    }

    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Heap::new(s.into()))
    }

    #[inline]
    pub fn seq(seq: Sequence) -> Self {
        Value::Seq(seq)
    }

    /// Create a sequence value from owned elements.
    pub fn list(items: Vec<Value>) -> Self {
        Value::Seq(Sequence::from_vec(items))
    }

    #[inline]
    pub fn record(record: RecordValue) -> Self {
        Value::Record(record)
    }

    #[inline]
    pub fn callable(callable: Callable) -> Self {
        Value::Callable(callable)
    }

    /// Box a finished witness.
    pub fn witness(witness: Witness) -> Self {
        Value::Witness(Heap::new(witness))
    }
}

// Accessors

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(n.raw()),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<ScalarInt> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&Sequence> {
        match self {
            Value::Seq(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_callable(&self) -> Option<&Callable> {
        match self {
            Value::Callable(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_witness(&self) -> Option<&Heap<Witness>> {
        match self {
            Value::Witness(w) => Some(w),
            _ => None,
        }
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    // The `expect_*` family is used where the program is well-typed by
    // construction; a mismatch is a contract fault, not a user error.

    pub fn expect_int(&self) -> Result<ScalarInt, EvalError> {
        self.as_scalar()
            .ok_or_else(|| type_mismatch("Int", self.type_name()))
    }

    pub fn expect_bool(&self) -> Result<bool, EvalError> {
        self.as_bool()
            .ok_or_else(|| type_mismatch("Bool", self.type_name()))
    }

    pub fn expect_str(&self) -> Result<&str, EvalError> {
        match self {
            Value::Str(s) => Ok(s.as_str()),
            _ => Err(type_mismatch("String", self.type_name())),
        }
    }

    pub fn expect_seq(&self) -> Result<&Sequence, EvalError> {
        match self {
            Value::Seq(seq) => Ok(seq),
            _ => Err(type_mismatch("Array", self.type_name())),
        }
    }

    pub fn expect_record(&self) -> Result<&RecordValue, EvalError> {
        match self {
            Value::Record(r) => Ok(r),
            _ => Err(type_mismatch("record", self.type_name())),
        }
    }

    pub fn expect_witness(&self) -> Result<&Heap<Witness>, EvalError> {
        match self {
            Value::Witness(w) => Ok(w),
            _ => Err(type_mismatch("witness", self.type_name())),
        }
    }

    /// Runtime category name, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
            Value::Unit => "Unit",
            Value::Str(_) => "String",
            Value::Seq(_) => "Array",
            Value::Record(_) => "record",
            Value::Callable(_) => "function",
            Value::Witness(_) => "witness",
        }
    }

    /// Structural equality.
    ///
    /// Callables compare by bound name and arity; witnesses by identity, or
    /// by interface and type when built separately.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Unit, Value::Unit) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a.equals(b),
            (Value::Record(a), Value::Record(b)) => a.equals(b),
            (Value::Callable(a), Value::Callable(b)) => {
                a.name() == b.name() && a.arity() == b.arity()
            }
            (Value::Witness(a), Value::Witness(b)) => {
                Heap::ptr_eq(a, b)
                    || (a.interface() == b.interface() && a.type_name() == b.type_name())
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Unit => write!(f, "Unit"),
            Value::Str(s) => write!(f, "Str({:?})", &**s),
            Value::Seq(seq) => write!(f, "Seq({seq:?})"),
            Value::Record(r) => write!(f, "Record({r:?})"),
            Value::Callable(c) => write!(f, "Callable({:?}/{})", c.name(), c.arity()),
            Value::Witness(w) => write!(f, "{:?}", &**w),
        }
    }
}

/// Strings display as their raw text, which is what `print` writes.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Unit => write!(f, "()"),
            Value::Str(s) => write!(f, "{}", s.as_str()),
            Value::Seq(seq) => {
                write!(f, "[")?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Record(_) => write!(f, "<record>"),
            Value::Callable(_) => write!(f, "<function>"),
            Value::Witness(_) => write!(f, "<witness>"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}
