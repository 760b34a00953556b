//! Serialization integration (the `serde` feature).
//!
//! A wrapped map renders exactly as the equivalent plain data: maps as
//! maps in insertion order, lists and tuples as sequences, opaque
//! containers as their underlying shape, with no enum tagging anywhere.
//! Generic mapping serializers (JSON, YAML) therefore cannot tell a
//! `DotMap` apart from the plain mapping it wraps.
//!
//! Deserialization restores from a plain snapshot: `Plain` captures the
//! data as-is, while `DotMap` re-wraps nested mappings through the normal
//! construction path, so a save/restore cycle preserves equality.
//! Interchange formats carry no tuple kind, so sequences always restore
//! as lists.

use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::map::DotMap;
use crate::plain::{Opaque, Plain, PlainMap};
use crate::value::Value;

fn serialize_elems<S, V>(serializer: S, elems: &[V]) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    let mut seq = serializer.serialize_seq(Some(elems.len()))?;
    for elem in elems {
        seq.serialize_element(elem)?;
    }
    seq.end()
}

impl Serialize for Plain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Plain::Null => serializer.serialize_unit(),
            Plain::Bool(b) => serializer.serialize_bool(*b),
            Plain::Int(n) => serializer.serialize_i64(*n),
            Plain::Float(x) => serializer.serialize_f64(*x),
            Plain::Str(s) => serializer.serialize_str(s),
            Plain::Map(m) => {
                let mut map = serializer.serialize_map(Some(m.len()))?;
                for (key, value) in m {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Plain::List(xs) => serialize_elems(serializer, xs),
            Plain::Tuple(xs) => serialize_elems(serializer, xs),
            Plain::Opaque(o) => o.serialize(serializer),
        }
    }
}

impl Serialize for Opaque {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Opaque::Map(m) => {
                let mut map = serializer.serialize_map(Some(m.len()))?;
                for (key, value) in m {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Opaque::List(xs) => serialize_elems(serializer, xs),
            Opaque::Tuple(xs) => serialize_elems(serializer, xs),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
            Value::Map(m) => m.serialize(serializer),
            Value::List(xs) => serialize_elems(serializer, xs),
            Value::Tuple(xs) => serialize_elems(serializer, xs),
            Value::Opaque(o) => o.serialize(serializer),
        }
    }
}

impl Serialize for DotMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct PlainVisitor;

impl<'de> Visitor<'de> for PlainVisitor {
    type Value = Plain;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any plain value")
    }

    fn visit_unit<E>(self) -> Result<Plain, E>
    where
        E: de::Error,
    {
        Ok(Plain::Null)
    }

    fn visit_none<E>(self) -> Result<Plain, E>
    where
        E: de::Error,
    {
        Ok(Plain::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Plain, D::Error> {
        deserializer.deserialize_any(PlainVisitor)
    }

    fn visit_bool<E>(self, v: bool) -> Result<Plain, E>
    where
        E: de::Error,
    {
        Ok(Plain::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Plain, E>
    where
        E: de::Error,
    {
        Ok(Plain::Int(v))
    }

    // Magnitudes beyond i64 fall back to float, keeping restore total.
    fn visit_u64<E>(self, v: u64) -> Result<Plain, E>
    where
        E: de::Error,
    {
        Ok(i64::try_from(v)
            .map(Plain::Int)
            .unwrap_or(Plain::Float(v as f64)))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Plain, E>
    where
        E: de::Error,
    {
        Ok(Plain::Float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Plain, E>
    where
        E: de::Error,
    {
        Ok(Plain::Str(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Plain, E>
    where
        E: de::Error,
    {
        Ok(Plain::Str(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Plain, A::Error> {
        let mut elems = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(elem) = seq.next_element()? {
            elems.push(elem);
        }
        Ok(Plain::List(elems))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Plain, A::Error> {
        let mut map = PlainMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Plain>()? {
            map.insert(key, value);
        }
        Ok(Plain::Map(map))
    }
}

impl<'de> Deserialize<'de> for Plain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Plain, D::Error> {
        deserializer.deserialize_any(PlainVisitor)
    }
}

struct DotMapVisitor;

impl<'de> Visitor<'de> for DotMapVisitor {
    type Value = DotMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<DotMap, A::Error> {
        let mut map = PlainMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Plain>()? {
            map.insert(key, value);
        }
        // Re-wrap through the normal construction path.
        Ok(DotMap::from(map))
    }
}

impl<'de> Deserialize<'de> for DotMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<DotMap, D::Error> {
        deserializer.deserialize_map(DotMapVisitor)
    }
}
