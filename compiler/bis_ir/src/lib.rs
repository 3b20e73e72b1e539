//! Bismuth IR - identifiers shared by every runtime layer.
//!
//! Every declared name the runtime sees (top-level bindings, record fields,
//! interface and method names, implementing type names) is interned once and
//! carried around as a 32-bit [`Name`].

mod interner;
mod name;

pub use interner::{InternError, SharedInterner, StringInterner, StringLookup};
pub use name::Name;
