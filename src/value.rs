//! Stored values: the always-wrapped side of the value universe.
//!
//! [`Value`] mirrors [`Plain`](crate::Plain) except that its mapping
//! variant holds a [`DotMap`]. The conversion `Value::from(Plain)` *is*
//! the wrap rule: exact containers are rebuilt recursively, scalars and
//! opaque containers pass through untouched. Because no variant can hold
//! an unwrapped mapping, the central invariant (every mapping reachable
//! through map/list/tuple boundaries is a `DotMap`) holds by
//! construction and is restored by every write path that converts through
//! this type.

use std::fmt;

use crate::attr::Attr;
use crate::error::{Error, Result};
use crate::map::DotMap;
use crate::plain::{Opaque, Plain};

/// A value stored inside a [`DotMap`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float (IEEE-754 equality).
    Float(f64),
    /// UTF-8 string.
    Str(String),
    /// Nested mapping, always wrapped.
    Map(DotMap),
    /// Ordered sequence of stored values.
    List(Vec<Value>),
    /// Fixed-size tuple of stored values.
    Tuple(Box<[Value]>),
    /// Container subtype; payload stays plain and untouched.
    Opaque(Opaque),
}

impl Value {
    /// Kind name for diagnostics and error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Map(_) => "map",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
            Value::Opaque(o) => o.kind(),
        }
    }

    /// True for the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for a nested mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Borrows the nested mapping, if any.
    pub fn as_map(&self) -> Option<&DotMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Mutably borrows the nested mapping, if any.
    pub fn as_map_mut(&mut self) -> Option<&mut DotMap> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Borrows the sequence elements, if any.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(xs) => Some(xs),
            _ => None,
        }
    }

    /// Mutably borrows the sequence, if any.
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(xs) => Some(xs),
            _ => None,
        }
    }

    /// Borrows the tuple elements, if any.
    pub fn as_tuple(&self) -> Option<&[Value]> {
        match self {
            Value::Tuple(xs) => Some(xs),
            _ => None,
        }
    }

    /// Borrows the opaque container, if any.
    pub fn as_opaque(&self) -> Option<&Opaque> {
        match self {
            Value::Opaque(o) => Some(o),
            _ => None,
        }
    }

    /// The boolean scalar, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer scalar, if this is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The float scalar, if this is one.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The string scalar, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Attribute read on this value.
    ///
    /// Mappings delegate to [`DotMap::attr`]; every other kind (scalars,
    /// sequences, tuples, and opaque containers) has no attribute
    /// surface and fails with `NoSuchAttribute`. This is where the
    /// opacity contract becomes visible: a mapping carried inside an
    /// opaque container cannot be reached by attribute chains.
    pub fn attr(&self, name: &str) -> Result<Attr<'_>> {
        match self {
            Value::Map(m) => m.attr(name),
            other => Err(Error::no_attr(other.kind(), name)),
        }
    }

    /// Mutable attribute access, for chained writes.
    pub fn attr_mut(&mut self, name: &str) -> Result<&mut Value> {
        match self {
            Value::Map(m) => m.attr_mut(name),
            other => Err(Error::no_attr(other.kind(), name)),
        }
    }

    /// Attribute write on this value; mappings only.
    pub fn set_attr(&mut self, name: &str, value: impl Into<Value>) -> Result<Option<Value>> {
        match self {
            Value::Map(m) => m.set_attr(name, value),
            other => Err(Error::no_attr(other.kind(), name)),
        }
    }

    /// Attribute delete on this value; mappings only.
    pub fn remove_attr(&mut self, name: &str) -> Result<Value> {
        match self {
            Value::Map(m) => m.remove_attr(name),
            other => Err(Error::no_attr(other.kind(), name)),
        }
    }

    /// Deep-converts back into a plain value.
    ///
    /// Inverse of the wrap rule: nested maps export their entries,
    /// sequence and tuple elements are converted in order, opaque
    /// payloads are cloned as-is. The result contains no wrapped mapping.
    pub fn to_plain(&self) -> Plain {
        match self {
            Value::Null => Plain::Null,
            Value::Bool(b) => Plain::Bool(*b),
            Value::Int(n) => Plain::Int(*n),
            Value::Float(f) => Plain::Float(*f),
            Value::Str(s) => Plain::Str(s.clone()),
            Value::Map(m) => Plain::Map(m.to_plain()),
            Value::List(xs) => Plain::List(xs.iter().map(Value::to_plain).collect()),
            Value::Tuple(xs) => Plain::Tuple(xs.iter().map(Value::to_plain).collect()),
            Value::Opaque(o) => Plain::Opaque(o.clone()),
        }
    }
}

/// The wrap rule: converts a plain value into its stored form.
///
/// Exact maps become `DotMap`s recursively; exact lists and tuples are
/// rebuilt with each element wrapped; scalars and opaque containers move
/// through unchanged with no recursion.
impl From<Plain> for Value {
    fn from(plain: Plain) -> Self {
        match plain {
            Plain::Null => Value::Null,
            Plain::Bool(b) => Value::Bool(b),
            Plain::Int(n) => Value::Int(n),
            Plain::Float(f) => Value::Float(f),
            Plain::Str(s) => Value::Str(s),
            Plain::Map(m) => Value::Map(DotMap::from(m)),
            Plain::List(xs) => Value::List(xs.into_iter().map(Value::from).collect()),
            Plain::Tuple(xs) => {
                Value::Tuple(xs.into_vec().into_iter().map(Value::from).collect())
            }
            Plain::Opaque(o) => Value::Opaque(o),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<DotMap> for Value {
    fn from(v: DotMap) -> Self {
        Value::Map(v)
    }
}

impl From<Opaque> for Value {
    fn from(v: Opaque) -> Self {
        Value::Opaque(v)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

// Equality across the plain/wrapped boundary ignores wrapper identity:
// a wrapped map equals the plain map with equal contents. Kind identity
// stays strict, so exact containers never equal opaque ones.
impl PartialEq<Plain> for Value {
    fn eq(&self, other: &Plain) -> bool {
        match (self, other) {
            (Value::Null, Plain::Null) => true,
            (Value::Bool(a), Plain::Bool(b)) => a == b,
            (Value::Int(a), Plain::Int(b)) => a == b,
            (Value::Float(a), Plain::Float(b)) => a == b,
            (Value::Str(a), Plain::Str(b)) => a == b,
            (Value::Map(a), Plain::Map(b)) => a == b,
            (Value::List(a), Plain::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x == y)
            }
            (Value::Tuple(a), Plain::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
            }
            (Value::Opaque(a), Plain::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialEq<Value> for Plain {
    fn eq(&self, other: &Value) -> bool {
        other == self
    }
}

// Scalar comparisons for ergonomic assertions and lookups.
impl PartialEq<i64> for Value {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Value::Int(n) if n == other)
    }
}

impl PartialEq<bool> for Value {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Value::Bool(b) if b == other)
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        matches!(self, Value::Float(f) if f == other)
    }
}

impl PartialEq<str> for Value {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Value::Str(s) if s == other)
    }
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s:?}"),
            Value::Map(m) => write!(f, "{m}"),
            Value::List(xs) => write_seq(f, "[", xs.iter(), "]"),
            Value::Tuple(xs) => write_seq(f, "(", xs.iter(), ")"),
            Value::Opaque(o) => match o {
                Opaque::Map(m) => {
                    write!(f, "{{")?;
                    for (i, (k, v)) in m.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{k:?}: {v:?}")?;
                    }
                    write!(f, "}}")
                }
                Opaque::List(xs) => write!(f, "{xs:?}"),
                Opaque::Tuple(xs) => write!(f, "{xs:?}"),
            },
        }
    }
}

fn write_seq<'a>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    elems: impl Iterator<Item = &'a Value>,
    close: &str,
) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, elem) in elems.enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{elem}")?;
    }
    write!(f, "{close}")
}
