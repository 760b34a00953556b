//! Reserved method names and the result of attribute reads.
//!
//! Attribute access is a second view over the same key/value storage: for
//! any non-reserved name, `d.attr(name)` and `d.get(name)` agree exactly,
//! including the failure on absence. The twelve reserved names are the
//! map's own operations; they always resolve to [`Attr::Method`] on reads
//! and are refused on writes and deletes, so data can never shadow them.

use crate::error::{Error, Result};
use crate::value::Value;

/// A reserved operation of [`DotMap`](crate::DotMap).
///
/// The set is fixed: these are the map's own method names, permanently
/// readable through the attribute surface and never writable there. A
/// same-named data entry stays reachable through key access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Clear,
    Clone,
    FromKeys,
    Get,
    Iter,
    Keys,
    Pop,
    Remove,
    SetDefault,
    ToPlain,
    Update,
    Values,
}

impl Method {
    /// Every reserved method, in name order.
    pub const ALL: [Method; 12] = [
        Method::Clear,
        Method::Clone,
        Method::FromKeys,
        Method::Get,
        Method::Iter,
        Method::Keys,
        Method::Pop,
        Method::Remove,
        Method::SetDefault,
        Method::ToPlain,
        Method::Update,
        Method::Values,
    ];

    /// The identifier this method reserves.
    pub fn name(self) -> &'static str {
        match self {
            Method::Clear => "clear",
            Method::Clone => "clone",
            Method::FromKeys => "from_keys",
            Method::Get => "get",
            Method::Iter => "iter",
            Method::Keys => "keys",
            Method::Pop => "pop",
            Method::Remove => "remove",
            Method::SetDefault => "set_default",
            Method::ToPlain => "to_plain",
            Method::Update => "update",
            Method::Values => "values",
        }
    }

    /// Resolves an identifier to its reserved method, if it is one.
    pub fn from_name(name: &str) -> Option<Method> {
        match name {
            "clear" => Some(Method::Clear),
            "clone" => Some(Method::Clone),
            "from_keys" => Some(Method::FromKeys),
            "get" => Some(Method::Get),
            "iter" => Some(Method::Iter),
            "keys" => Some(Method::Keys),
            "pop" => Some(Method::Pop),
            "remove" => Some(Method::Remove),
            "set_default" => Some(Method::SetDefault),
            "to_plain" => Some(Method::ToPlain),
            "update" => Some(Method::Update),
            "values" => Some(Method::Values),
            _ => None,
        }
    }

    /// True if `name` is in the reserved set.
    pub fn is_reserved(name: &str) -> bool {
        Method::from_name(name).is_some()
    }
}

/// Result of an attribute read: a reserved method or a borrowed entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Attr<'a> {
    /// The name resolved to a reserved operation.
    Method(Method),
    /// The name resolved to a stored entry.
    Entry(&'a Value),
}

impl<'a> Attr<'a> {
    /// Continues an attribute chain one level deeper.
    ///
    /// Entries delegate to [`Value::attr`]; methods have no attributes of
    /// their own.
    pub fn attr(self, name: &str) -> Result<Attr<'a>> {
        match self {
            Attr::Entry(value) => value.attr(name),
            Attr::Method(_) => Err(Error::no_attr("method", name)),
        }
    }

    /// The borrowed entry, if the read resolved to data.
    pub fn entry(self) -> Option<&'a Value> {
        match self {
            Attr::Entry(value) => Some(value),
            Attr::Method(_) => None,
        }
    }

    /// The reserved method, if the read resolved to one.
    pub fn method(self) -> Option<Method> {
        match self {
            Attr::Method(method) => Some(method),
            Attr::Entry(_) => None,
        }
    }

    /// True if the read resolved to a reserved method.
    pub fn is_method(self) -> bool {
        matches!(self, Attr::Method(_))
    }
}
