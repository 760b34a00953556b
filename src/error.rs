//! Error types for map, attribute, and update operations.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by [`DotMap`](crate::DotMap) operations.
///
/// Absence is never papered over with a default: lookups and removals on a
/// missing key report [`Error::KeyNotFound`] through both the key-style and
/// attribute-style surfaces. Attribute writes aimed at a reserved method
/// name are refused without touching storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Lookup or removal of a key that is not present.
    #[error("key not found: {key:?}")]
    KeyNotFound { key: String },

    /// Attribute write or delete aimed at a reserved method name.
    #[error("attribute {name:?} is read-only")]
    ReadOnlyAttribute { name: String },

    /// Attribute access on a value kind that has no attribute surface.
    #[error("value of kind {kind} has no attribute {name:?}")]
    NoSuchAttribute { kind: &'static str, name: String },

    /// More than one positional source passed to an update.
    #[error("update expected at most 1 source, got {count}")]
    SourceCount { count: usize },

    /// Update or construction source that is neither a mapping nor a
    /// sequence of string-keyed key/value pairs.
    #[error("source must be a mapping or a sequence of string-keyed pairs, got {kind}")]
    InvalidSource { kind: &'static str },
}

impl Error {
    pub(crate) fn key_not_found(key: impl Into<String>) -> Self {
        Error::KeyNotFound { key: key.into() }
    }

    pub(crate) fn read_only(name: impl Into<String>) -> Self {
        Error::ReadOnlyAttribute { name: name.into() }
    }

    pub(crate) fn no_attr(kind: &'static str, name: impl Into<String>) -> Self {
        Error::NoSuchAttribute {
            kind,
            name: name.into(),
        }
    }

    /// True for lookup/removal failures on an absent key.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Error::KeyNotFound { .. })
    }

    /// True for refused writes/deletes on a reserved attribute name.
    pub fn is_read_only(&self) -> bool {
        matches!(self, Error::ReadOnlyAttribute { .. })
    }

    /// True for malformed update arguments (count or shape).
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            Error::SourceCount { .. } | Error::InvalidSource { .. }
        )
    }
}
