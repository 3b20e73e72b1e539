//! Records: user-defined product types.
//!
//! A record literal assigns each field exactly once at creation; after
//! `RecordBuilder::build` there is no way to store into a field.

use std::fmt;

use bis_ir::{Name, StringLookup};
use rustc_hash::FxHashMap;

use super::{Heap, Value};
use crate::errors::{duplicate_field, no_field_on_record, EvalError};

/// Layout information for O(1) record field access.
#[derive(Clone, Debug)]
struct RecordLayout {
    /// Field names in layout order.
    names: Vec<Name>,
    /// Map from field name to index.
    field_indices: FxHashMap<Name, usize>,
}

impl RecordLayout {
    /// Create a layout from field names, already in layout order.
    fn new(names: Vec<Name>) -> Self {
        let field_indices = names.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        RecordLayout {
            names,
            field_indices,
        }
    }

    /// Get the index of a field by name.
    fn get_index(&self, field: Name) -> Option<usize> {
        self.field_indices.get(&field).copied()
    }

    /// Field names in layout order.
    fn names(&self) -> &[Name] {
        &self.names
    }
}

/// Record instance with efficient field access.
#[derive(Clone)]
pub struct RecordValue {
    /// Type name of the record.
    pub type_name: Name,
    fields: Heap<Vec<Value>>,
    layout: Heap<RecordLayout>,
}

impl RecordValue {
    /// Get a field value by name.
    pub fn get_field(&self, field: Name) -> Option<&Value> {
        let index = self.layout.get_index(field)?;
        self.fields.get(index)
    }

    /// Field by name, faulting with `UndefinedField` when absent.
    pub fn field<I: StringLookup>(&self, field: Name, interner: &I) -> Result<&Value, EvalError> {
        self.get_field(field).ok_or_else(|| {
            no_field_on_record(interner.lookup(field), interner.lookup(self.type_name))
        })
    }

    /// Iterate `(name, value)` pairs in layout order.
    pub fn fields(&self) -> impl Iterator<Item = (Name, &Value)> + '_ {
        self.layout.names().iter().copied().zip(self.fields.iter())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Structural equality: same type, same fields, equal values.
    pub fn equals(&self, other: &RecordValue) -> bool {
        self.type_name == other.type_name
            && self.layout.names() == other.layout.names()
            && self
                .fields
                .iter()
                .zip(other.fields.iter())
                .all(|(a, b)| a.equals(b))
    }
}

impl fmt::Debug for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, value) in self.fields() {
            map.entry(&name, value);
        }
        map.finish()
    }
}

/// One-shot builder for a record literal.
///
/// Fields may be given in any order; the layout sorts them by field name
/// text, so two literals of the same type always share one layout.
pub struct RecordBuilder {
    type_name: Name,
    fields: Vec<(Name, Value)>,
}

impl RecordBuilder {
    pub fn new(type_name: Name) -> Self {
        RecordBuilder {
            type_name,
            fields: Vec::new(),
        }
    }

    /// Assign a field.
    #[must_use]
    pub fn field(mut self, name: Name, value: Value) -> Self {
        self.fields.push((name, value));
        self
    }

    /// Freeze the record. Assigning the same field twice is a fault.
    pub fn build<I: StringLookup>(mut self, interner: &I) -> Result<RecordValue, EvalError> {
        self.fields
            .sort_by(|(a, _), (b, _)| interner.lookup(*a).cmp(interner.lookup(*b)));
        if let Some(pair) = self.fields.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(duplicate_field(
                interner.lookup(pair[0].0),
                interner.lookup(self.type_name),
            ));
        }
        let (names, values): (Vec<Name>, Vec<Value>) = self.fields.into_iter().unzip();
        Ok(RecordValue {
            type_name: self.type_name,
            fields: Heap::new(values),
            layout: Heap::new(RecordLayout::new(names)),
        })
    }
}

#[cfg(test)]
mod tests;
