//! The enhanced mapping itself.
//!
//! `DotMap` stores string keys in insertion order and funnels every write
//! path (construction, key assignment, attribute assignment, update,
//! `set_default`) through the wrap rule (`Value::from`), so the central
//! invariant holds after any sequence of operations. Export walks the
//! structure back out through [`DotMap::to_plain`].

use std::fmt;
use std::ops::Index;

use indexmap::map::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};
use indexmap::IndexMap;

use crate::attr::{Attr, Method};
use crate::error::{Error, Result};
use crate::plain::{self, Opaque, Plain, PlainMap};
use crate::value::Value;

/// A nested mapping with key-style and attribute-style access.
///
/// Keys are strings, insertion order is preserved, and every stored value
/// satisfies the wrap invariant: any mapping reachable through map, list,
/// or tuple boundaries is itself a `DotMap`. Equality is content-based and
/// order-insensitive, and extends across the plain/wrapped boundary:
/// `DotMap::from(m) == m` for any plain map `m`.
///
/// ```
/// use dotmap::{plain, DotMap};
///
/// let d = DotMap::from_plain(plain!({"spam": {"egg": 69}})).unwrap();
/// let egg = d.attr("spam").unwrap().attr("egg").unwrap();
/// assert_eq!(egg.entry().unwrap().as_int(), Some(69));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DotMap {
    entries: IndexMap<String, Value>,
}

impl DotMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Builds a map from any merge-constructor source.
    ///
    /// Accepts a mapping or a sequence of string-keyed 2-element pairs;
    /// opaque containers are accepted one level deep, since a
    /// mapping-like subtype still conforms to the mapping input contract
    /// (its entries become the source, its payload values wrap normally).
    /// Any other kind fails with [`Error::InvalidSource`] and no map is
    /// produced.
    pub fn from_plain(source: Plain) -> Result<Self> {
        match source {
            Plain::Map(m) => Ok(Self::from(m)),
            Plain::List(items) => Ok(plain::into_pairs(items)?.into_iter().collect()),
            Plain::Tuple(items) => {
                Ok(plain::into_pairs(items.into_vec())?.into_iter().collect())
            }
            Plain::Opaque(Opaque::Map(m)) => Ok(Self::from(m)),
            Plain::Opaque(Opaque::List(items)) => {
                Ok(plain::into_pairs(items)?.into_iter().collect())
            }
            Plain::Opaque(Opaque::Tuple(items)) => {
                Ok(plain::into_pairs(items.into_vec())?.into_iter().collect())
            }
            other => Err(Error::InvalidSource { kind: other.kind() }),
        }
    }

    /// Builds a map with the given keys, each holding a copy of `value`.
    pub fn from_keys(
        keys: impl IntoIterator<Item = impl Into<String>>,
        value: impl Into<Plain>,
    ) -> Self {
        let value = value.into();
        let mut map = Self::new();
        for key in keys {
            map.insert(key, value.clone());
        }
        map
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Borrows the value at `key`.
    ///
    /// Absence is an error, never a silent default.
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.entries
            .get(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Mutably borrows the value at `key`.
    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value> {
        self.entries
            .get_mut(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Stores `value` at `key`, wrapping it first.
    ///
    /// Returns the displaced value if the key already existed; an
    /// existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Removes and returns the value at `key`.
    ///
    /// Remaining entries keep their relative order. Absence is an error.
    pub fn remove(&mut self, key: &str) -> Result<Value> {
        self.entries
            .shift_remove(key)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// Removes and returns the most recently inserted entry.
    pub fn pop(&mut self) -> Option<(String, Value)> {
        self.entries.pop()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the value at `key`, inserting `wrap(default)` first if the
    /// key is absent.
    pub fn set_default(
        &mut self,
        key: impl Into<String>,
        default: impl Into<Value>,
    ) -> &mut Value {
        self.entries.entry(key.into()).or_insert_with(|| default.into())
    }

    /// Attribute read.
    ///
    /// Reserved names resolve to their [`Method`] regardless of stored
    /// data; any other name behaves exactly as [`DotMap::get`], including
    /// the `KeyNotFound` failure on absence.
    pub fn attr(&self, name: &str) -> Result<Attr<'_>> {
        if let Some(method) = Method::from_name(name) {
            return Ok(Attr::Method(method));
        }
        self.get(name).map(Attr::Entry)
    }

    /// Mutable attribute access, for chained writes.
    ///
    /// Reserved names have no mutable form and are refused; an absent
    /// intermediate surfaces as `KeyNotFound`, the same failure the read
    /// path reports.
    pub fn attr_mut(&mut self, name: &str) -> Result<&mut Value> {
        if Method::is_reserved(name) {
            return Err(Error::read_only(name));
        }
        self.get_mut(name)
    }

    /// Attribute write.
    ///
    /// Refused for reserved names with storage untouched; otherwise
    /// identical to [`DotMap::insert`].
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        if Method::is_reserved(name) {
            return Err(Error::read_only(name));
        }
        Ok(self.insert(name, value))
    }

    /// Attribute delete.
    ///
    /// Refused for reserved names; otherwise identical to
    /// [`DotMap::remove`], including the `KeyNotFound` failure.
    pub fn remove_attr(&mut self, name: &str) -> Result<Value> {
        if Method::is_reserved(name) {
            return Err(Error::read_only(name));
        }
        self.remove(name)
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> Keys<'_, String, Value> {
        self.entries.keys()
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> Values<'_, String, Value> {
        self.entries.values()
    }

    /// Iterates over values mutably, in insertion order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, String, Value> {
        self.entries.values_mut()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Iterates over entries mutably, in insertion order.
    pub fn iter_mut(&mut self) -> IterMut<'_, String, Value> {
        self.entries.iter_mut()
    }

    /// Deep-converts the map and everything reachable from it back into
    /// plain containers.
    ///
    /// Follows mapping entries, sequence elements, and tuple elements;
    /// opaque payloads are cloned as-is. The export contains no `DotMap`
    /// and the source is not mutated.
    pub fn to_plain(&self) -> PlainMap {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_plain()))
            .collect()
    }

    // Direct slot access for already-wrapped values; the update engine
    // stores merge results without re-wrapping.
    pub(crate) fn store(&mut self, key: String, value: Value) {
        self.entries.insert(key, value);
    }

    // Normalizes the slot at `key` to a nested map, initializing it or
    // discarding a non-map value as needed, and hands it back for merging.
    pub(crate) fn ensure_map_slot(&mut self, key: String) -> &mut DotMap {
        let slot = self
            .entries
            .entry(key)
            .and_modify(|existing| {
                if !existing.is_map() {
                    *existing = Value::Map(DotMap::new());
                }
            })
            .or_insert_with(|| Value::Map(DotMap::new()));
        match slot {
            Value::Map(map) => map,
            _ => unreachable!("slot normalized to a map"),
        }
    }
}

/// Per-entry wrap of an owned plain map; the construction path.
impl From<PlainMap> for DotMap {
    fn from(source: PlainMap) -> Self {
        source.into_iter().collect()
    }
}

/// Builds a map from key/value pairs, wrapping each value.
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for DotMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Inserts key/value pairs, wrapping each value; later pairs win.
impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for DotMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value.into())));
    }
}

impl IntoIterator for DotMap {
    type Item = (String, Value);
    type IntoIter = IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a DotMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a mut DotMap {
    type Item = (&'a String, &'a mut Value);
    type IntoIter = IterMut<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

/// Panicking lookup, mirroring the standard map convention. Use
/// [`DotMap::get`] for the error-reporting path.
impl Index<&str> for DotMap {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("key not found: {key:?}"),
        }
    }
}

// Equality against plain maps ignores wrapper identity.
impl PartialEq<PlainMap> for DotMap {
    fn eq(&self, other: &PlainMap) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|plain| value == plain))
    }
}

impl PartialEq<DotMap> for PlainMap {
    fn eq(&self, other: &DotMap) -> bool {
        other == self
    }
}

impl PartialEq<Plain> for DotMap {
    fn eq(&self, other: &Plain) -> bool {
        matches!(other, Plain::Map(m) if self == m)
    }
}

impl PartialEq<DotMap> for Plain {
    fn eq(&self, other: &DotMap) -> bool {
        other == self
    }
}

impl fmt::Display for DotMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key:?}: {value}")?;
        }
        write!(f, "}}")
    }
}
