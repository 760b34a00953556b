//! dotmap: a nested string-keyed map with attribute-style access and
//! deep, structure-preserving conversion.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one recursive invariant (every mapping reachable from a
//!   [`DotMap`] through map entries, list elements, or tuple elements is
//!   itself a `DotMap`), enforced at every write path by a single wrap
//!   rule, so nested access chains work without special-casing.
//! - Layers:
//!   - [`Plain`]/[`PlainMap`]: the unwrapped value universe, the input
//!     to construction and the output of export. [`Opaque`] models
//!     container *subtypes*, which are deliberately excluded from
//!     conversion.
//!   - [`Value`]: the stored universe; its mapping variant holds a
//!     `DotMap`, so the invariant is type-enforced. `Value::from(Plain)`
//!     is the wrap rule.
//!   - [`DotMap`]: insertion-ordered storage plus the key-style and
//!     attribute-style operation surfaces and the plain export.
//!   - [`Update`]: argument bundle for the two-mode update engine
//!     (shallow overwrite vs. recursive per-level merge).
//!
//! Attribute surface
//! - The host language has no dynamic property resolution, so attribute
//!   access is string-indexed: `d.attr("a")?.attr("b")?` reads,
//!   `d.attr_mut("a")?.set_attr("b", v)?` writes. For any non-reserved
//!   name, `attr` and `get` agree exactly, including `KeyNotFound` on
//!   absence.
//! - Twelve reserved names ([`Method`]), the map's own operations,
//!   always read as [`Attr::Method`] and are refused as write/delete
//!   targets; data can never shadow them, and a same-named entry stays
//!   reachable by key.
//!
//! Conversion rules
//! - Exact maps, lists, and tuples convert recursively on every write
//!   (construction, insert, attribute set, update, `set_default`).
//! - Opaque container subtypes are treated as scalar data: never
//!   recursed into, never converted, payload untouched. This is a kind
//!   identity check, not a capability check.
//! - `to_plain` is the inverse walk; the export holds no wrapped maps.
//!
//! Update modes
//! - Shallow: source entries then named overrides overwrite present keys
//!   wholesale, each value wrapping on the way in.
//! - Recursive: overrides merge into the source first, then mapping
//!   values merge key-by-key at every depth (non-map targets are
//!   discarded and re-initialized); non-mapping values, including lists,
//!   tuples, and opaque containers, overwrite without recursion.
//! - Argument shape (at most one source; mapping or string-keyed pair
//!   sequence) is validated before any mutation.
//!
//! Constraints and non-goals
//! - Single-threaded mutation on an owned tree; no internal locking.
//!   Cycles are unrepresentable by ownership.
//! - Not a schema layer: values are never validated, only converted.
//! - No substructure sharing: every exact container reached through
//!   map/list/tuple boundaries is rebuilt on the way in and on the way
//!   out.
//! - Equality is content-based, order-insensitive, and crosses the
//!   plain/wrapped boundary (`DotMap::from(m) == m`); kinds never
//!   coerce (`Int(1) != Float(1.0)`, exact != opaque).
//!
//! Serialization (`serde` feature, on by default)
//! - `Serialize` renders a `DotMap` exactly as the equivalent plain
//!   mapping (insertion order, no tagging), so YAML/JSON output is
//!   indistinguishable from plain data. `Deserialize` restores a plain
//!   snapshot and re-wraps through the construction path, preserving
//!   equality across save/restore.

mod attr;
mod error;
mod macros;
mod map;
mod plain;
#[cfg(feature = "serde")]
mod ser;
mod update;
mod value;

// Public surface
pub use attr::{Attr, Method};
pub use error::{Error, Result};
pub use map::DotMap;
pub use plain::{Opaque, Plain, PlainMap};
pub use update::Update;
pub use value::Value;
