//! The two-mode update engine.
//!
//! An [`Update`] is the argument bundle of one update call: at most one
//! positional source (a mapping or a sequence of string-keyed pairs),
//! named overrides in call order, and the recursive flag. Argument shape
//! is validated in full before the target map is touched, so a malformed
//! update never leaves a partial merge behind.

use crate::error::{Error, Result};
use crate::map::DotMap;
use crate::plain::Plain;
use crate::value::Value;

/// Argument bundle for [`DotMap::update`].
///
/// ```
/// use dotmap::{plain, DotMap, Update};
///
/// let mut d = DotMap::from_plain(plain!({"a": 1, "c": {"d": 3, "e": 4}})).unwrap();
/// d.update(
///     Update::new()
///         .source(plain!({"a": 42, "c": {"d": 69}}))
///         .recursive(),
/// )
/// .unwrap();
/// assert_eq!(d, DotMap::from_plain(plain!({"a": 42, "c": {"d": 69, "e": 4}})).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Update {
    sources: Vec<Plain>,
    overrides: Vec<(String, Plain)>,
    recursive: bool,
}

impl Update {
    /// Starts an empty update: no source, no overrides, shallow mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a positional source.
    ///
    /// At most one source is accepted; adding more makes the update fail
    /// with [`Error::SourceCount`] when applied.
    pub fn source(mut self, source: impl Into<Plain>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Adds a named override. Overrides apply after the source and win on
    /// conflict; in recursive mode they merge recursively into it first.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<Plain>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Switches the update to recursive merging.
    pub fn recursive(mut self) -> Self {
        self.recursive = true;
        self
    }
}

impl DotMap {
    /// Updates this map from a source and named overrides, in place.
    ///
    /// Shallow mode overwrites present keys wholesale; recursive mode
    /// merges mapping values key-by-key at every depth, initializing (or
    /// discarding) non-map targets as needed, and overwrites everything
    /// that is not mapping-shaped (scalars, lists, tuples, and opaque
    /// containers) without recursing into it. Either way each written
    /// value has passed through the wrap rule.
    ///
    /// Argument errors (more than one source, a source that is neither
    /// mapping nor pair sequence) are reported before any mutation.
    pub fn update(&mut self, update: Update) -> Result<()> {
        let Update {
            sources,
            overrides,
            recursive,
        } = update;

        if sources.len() > 1 {
            return Err(Error::SourceCount {
                count: sources.len(),
            });
        }
        // Materializing the source validates its shape and wraps its
        // values; nothing below this point can fail.
        let source = match sources.into_iter().next() {
            Some(plain) => Some(DotMap::from_plain(plain)?),
            None => None,
        };

        if recursive {
            // Combine source and overrides with this same algorithm, so
            // override maps merge into source maps instead of replacing
            // them; the combined result then merges into self.
            let mut combined = source.unwrap_or_default();
            for (key, value) in overrides {
                merge_entry(&mut combined, key, Value::from(value));
            }
            for (key, value) in combined {
                merge_entry(self, key, value);
            }
        } else {
            if let Some(source) = source {
                for (key, value) in source {
                    self.store(key, value);
                }
            }
            for (key, value) in overrides {
                self.insert(key, value);
            }
        }
        Ok(())
    }
}

/// Merges one already-wrapped entry into `target`, recursively.
///
/// A mapping value merges into the (normalized) map at `key`; any other
/// kind overwrites the slot wholesale.
fn merge_entry(target: &mut DotMap, key: String, value: Value) {
    match value {
        Value::Map(incoming) => {
            let nested = target.ensure_map_slot(key);
            for (k, v) in incoming {
                merge_entry(nested, k, v);
            }
        }
        other => target.store(key, other),
    }
}
