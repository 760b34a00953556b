//! Plain, unwrapped data: the input to construction and the output of
//! export.
//!
//! [`Plain`] is the closed universe of values as they exist outside a
//! [`DotMap`](crate::DotMap): scalars, exact containers (map, list,
//! tuple), and [`Opaque`] container subtypes. The wrap rule
//! (`Value::from(Plain)`) converts exact containers recursively and leaves
//! everything else untouched; `to_plain` is its inverse.
//!
//! Kind identity is strict: `Int(1)` never equals `Float(1.0)`, and an
//! exact container never equals an opaque one of the same shape. Float
//! equality is IEEE-754 (`NaN != NaN`).

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// An insertion-ordered plain mapping with string keys.
pub type PlainMap = IndexMap<String, Plain>;

/// A plain value: scalar, exact container, or opaque container subtype.
#[derive(Debug, Clone, PartialEq)]
pub enum Plain {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float (IEEE-754 equality).
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Exact mapping; converted to a `DotMap` by the wrap rule.
    Map(PlainMap),
    /// Exact ordered sequence; elements are wrapped recursively.
    List(Vec<Plain>),
    /// Exact fixed-size tuple; elements are wrapped recursively.
    Tuple(Box<[Plain]>),
    /// Container subtype; carried as-is, never recursed into.
    Opaque(Opaque),
}

impl Plain {
    /// Builds a fixed-size tuple value from its elements.
    pub fn tuple(elems: impl IntoIterator<Item = Plain>) -> Self {
        Plain::Tuple(elems.into_iter().collect())
    }

    /// Kind name for diagnostics and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Plain::Null => "null",
            Plain::Bool(_) => "bool",
            Plain::Int(_) => "int",
            Plain::Float(_) => "float",
            Plain::Str(_) => "str",
            Plain::Map(_) => "map",
            Plain::List(_) => "list",
            Plain::Tuple(_) => "tuple",
            Plain::Opaque(o) => o.kind(),
        }
    }

    /// True if this is the exact mapping kind.
    pub fn is_map(&self) -> bool {
        matches!(self, Plain::Map(_))
    }

    /// Borrows the contained exact mapping, if any.
    pub fn as_map(&self) -> Option<&PlainMap> {
        match self {
            Plain::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Borrows the contained exact sequence, if any.
    pub fn as_list(&self) -> Option<&[Plain]> {
        match self {
            Plain::List(xs) => Some(xs),
            _ => None,
        }
    }

    /// Borrows the contained tuple elements, if any.
    pub fn as_tuple(&self) -> Option<&[Plain]> {
        match self {
            Plain::Tuple(xs) => Some(xs),
            _ => None,
        }
    }

    /// Borrows the contained opaque container, if any.
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Plain::Opaque(o) => Some(o),
            _ => None,
        }
    }
}

/// A container whose runtime kind is a *subtype* of map/list/tuple.
///
/// Opaque containers model values that merely behave like one of the exact
/// container kinds. They are deliberately excluded from deep conversion:
/// the wrap rule, recursive update, and export all treat them as scalar
/// data. Their payload is `Plain` and stays `Plain`, so a mapping inside
/// an opaque container has no attribute-access surface at all.
#[derive(Debug, Clone, PartialEq)]
pub enum Opaque {
    /// Mapping-like subtype.
    Map(PlainMap),
    /// Sequence-like subtype.
    List(Vec<Plain>),
    /// Tuple-like subtype.
    Tuple(Box<[Plain]>),
}

impl Opaque {
    /// Kind name for diagnostics and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Opaque::Map(_) => "opaque map",
            Opaque::List(_) => "opaque list",
            Opaque::Tuple(_) => "opaque tuple",
        }
    }

    /// Number of entries or elements.
    pub fn len(&self) -> usize {
        match self {
            Opaque::Map(m) => m.len(),
            Opaque::List(xs) => xs.len(),
            Opaque::Tuple(xs) => xs.len(),
        }
    }

    /// True if the container holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positional element of a list- or tuple-like container.
    pub fn get(&self, index: usize) -> Option<&Plain> {
        match self {
            Opaque::List(xs) => xs.get(index),
            Opaque::Tuple(xs) => xs.get(index),
            Opaque::Map(_) => None,
        }
    }

    /// Keyed entry of a map-like container.
    pub fn entry(&self, key: &str) -> Option<&Plain> {
        match self {
            Opaque::Map(m) => m.get(key),
            _ => None,
        }
    }
}

impl From<bool> for Plain {
    fn from(v: bool) -> Self {
        Plain::Bool(v)
    }
}

impl From<i64> for Plain {
    fn from(v: i64) -> Self {
        Plain::Int(v)
    }
}

impl From<i32> for Plain {
    fn from(v: i32) -> Self {
        Plain::Int(v as i64)
    }
}

impl From<u32> for Plain {
    fn from(v: u32) -> Self {
        Plain::Int(v as i64)
    }
}

impl From<f64> for Plain {
    fn from(v: f64) -> Self {
        Plain::Float(v)
    }
}

impl From<&str> for Plain {
    fn from(v: &str) -> Self {
        Plain::Str(v.to_string())
    }
}

impl From<String> for Plain {
    fn from(v: String) -> Self {
        Plain::Str(v)
    }
}

impl From<PlainMap> for Plain {
    fn from(v: PlainMap) -> Self {
        Plain::Map(v)
    }
}

impl From<Vec<Plain>> for Plain {
    fn from(v: Vec<Plain>) -> Self {
        Plain::List(v)
    }
}

impl From<Opaque> for Plain {
    fn from(v: Opaque) -> Self {
        Plain::Opaque(v)
    }
}

impl From<()> for Plain {
    fn from(_: ()) -> Self {
        Plain::Null
    }
}

/// Converts a sequence of pair-shaped elements into key/value pairs.
///
/// Each element must be a 2-element tuple or list whose first element is a
/// string; anything else is an [`Error::InvalidSource`]. Used by the
/// merge-constructor input contract and by update-source materialization,
/// which both need to reject malformed sources before building anything.
pub(crate) fn into_pairs(items: Vec<Plain>) -> Result<Vec<(String, Plain)>> {
    items
        .into_iter()
        .map(|item| {
            let kind = item.kind();
            let elems: Vec<Plain> = match item {
                Plain::Tuple(xs) => xs.into_vec(),
                Plain::List(xs) => xs,
                _ => return Err(Error::InvalidSource { kind }),
            };
            let [key, value] =
                <[Plain; 2]>::try_from(elems).map_err(|_| Error::InvalidSource { kind })?;
            match key {
                Plain::Str(key) => Ok((key, value)),
                other => Err(Error::InvalidSource { kind: other.kind() }),
            }
        })
        .collect()
}
