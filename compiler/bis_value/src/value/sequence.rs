//! Persistent sequence.
//!
//! Every growth operation returns a new `Sequence` and leaves its inputs
//! untouched. Storage is an `im::Vector` (RRB tree), so `prepend`, `append`
//! and `concat` share structure with their inputs instead of copying, while
//! indexing and equality behave as if each sequence were an independent copy.

use std::fmt;

use im::Vector;

use super::{ScalarInt, Value};
use crate::errors::{index_out_of_bounds, integer_overflow, EvalError};

/// Immutable ordered container of values.
#[derive(Clone, Default)]
pub struct Sequence {
    items: Vector<Value>,
}

impl Sequence {
    /// Sequence of length 0.
    #[inline]
    pub fn empty() -> Self {
        Sequence {
            items: Vector::new(),
        }
    }

    /// Build a sequence holding `items` in order.
    pub fn from_vec(items: Vec<Value>) -> Self {
        Sequence {
            items: Vector::from(items),
        }
    }

    /// New sequence with `head` in front of every element of `self`.
    #[must_use]
    pub fn prepend(&self, head: Value) -> Self {
        let mut items = self.items.clone();
        items.push_front(head);
        Sequence { items }
    }

    /// New sequence with `last` after every element of `self`.
    #[must_use]
    pub fn append(&self, last: Value) -> Self {
        let mut items = self.items.clone();
        items.push_back(last);
        Sequence { items }
    }

    /// New sequence with the elements of `self` followed by those of `other`.
    #[must_use]
    pub fn concat(&self, other: &Sequence) -> Self {
        let mut items = self.items.clone();
        items.append(other.items.clone());
        Sequence { items }
    }

    /// Element at `index`, faulting with `IndexOutOfBounds` outside `0..len`.
    pub fn at(&self, index: ScalarInt) -> Result<&Value, EvalError> {
        index
            .to_index(self.items.len())
            .and_then(|i| self.items.get(i))
            .ok_or_else(|| index_out_of_bounds(index.raw(), self.items.len()))
    }

    /// Element at a host-side index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Element count, O(1).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element count as a runtime integer.
    pub fn length(&self) -> Result<ScalarInt, EvalError> {
        ScalarInt::from_len(self.items.len()).ok_or_else(|| integer_overflow("length"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> + '_ {
        self.items.iter()
    }

    /// Structural equality, element by element.
    pub fn equals(&self, other: &Sequence) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| a.equals(b))
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
