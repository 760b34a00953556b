// Serialization test suite (consolidated).
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The invariants exercised:
// - Rendering: a DotMap serializes exactly as the plain mapping it
//   wraps (same key order, no tagging), through YAML and JSON alike.
// - Save/restore: deserializing a serialized DotMap reconstructs an
//   equal map with nested mappings re-wrapped.
// - Interchange: parsing the serialized text as plain data yields a
//   structure equal to the map (unwrapped).
#![cfg(feature = "serde")]

use dotmap::{plain, DotMap, Opaque, Plain};

fn sample() -> DotMap {
    DotMap::from_plain(plain!({"a": 42, "b": {"c": 69}})).expect("mapping source")
}

// Test: YAML renders a DotMap as a plain mapping.
// Assumes: serialization carries insertion order and no tags.
// Verifies: exact text output, identical to the plain source's.
#[test]
fn yaml_renders_as_plain_mapping() {
    let d = sample();
    let text = serde_yaml::to_string(&d).unwrap();
    assert_eq!(text, "a: 42\nb:\n  c: 69\n");
    let plain_text = serde_yaml::to_string(&plain!({"a": 42, "b": {"c": 69}})).unwrap();
    assert_eq!(text, plain_text);
}

// Test: JSON renders a DotMap as a plain object.
// Assumes: same rendering contract as YAML.
// Verifies: exact text output, identical to the plain source's.
#[test]
fn json_renders_as_plain_object() {
    let d = sample();
    let text = serde_json::to_string(&d).unwrap();
    assert_eq!(text, r#"{"a":42,"b":{"c":69}}"#);
    let plain_text = serde_json::to_string(&plain!({"a": 42, "b": {"c": 69}})).unwrap();
    assert_eq!(text, plain_text);
}

// Test: tuples and opaque containers render as their underlying shape.
// Assumes: interchange formats carry no tuple or subtype kinds.
// Verifies: sequences for both, mapping for opaque maps.
#[test]
fn json_renders_tuples_and_opaque_shapes() {
    let d = DotMap::from_plain(plain!({
        "t": (Plain::tuple([plain!(1), plain!(2)])),
        "o": (Opaque::List(vec![plain!(3)])),
    }))
    .unwrap();
    assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"t":[1,2],"o":[3]}"#);
}

// Test: save/restore reconstructs an equal DotMap.
// Assumes: Deserialize re-wraps nested mappings through construction.
// Verifies: round-tripped map equals the original and is wrapped.
#[test]
fn json_round_trip_restores_equal_map() {
    let d = sample();
    let text = serde_json::to_string(&d).unwrap();
    let restored: DotMap = serde_json::from_str(&text).unwrap();
    assert_eq!(restored, d);
    assert!(restored.get("b").unwrap().is_map());
}

// Test: YAML save/restore reconstructs an equal DotMap.
// Assumes: the restore path is format-agnostic.
// Verifies: round-tripped map equals the original.
#[test]
fn yaml_round_trip_restores_equal_map() {
    let d = sample();
    let text = serde_yaml::to_string(&d).unwrap();
    let restored: DotMap = serde_yaml::from_str(&text).unwrap();
    assert_eq!(restored, d);
}

// Test: parsing the serialized text as plain data equals the map.
// Assumes: the map behaves as a standard mapping for interchange.
// Verifies: the parsed plain structure equals the (unwrapped) map.
#[test]
fn json_parses_back_as_equal_plain() {
    let d = sample();
    let text = serde_json::to_string(&d).unwrap();
    let parsed: Plain = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed, d);
    assert!(matches!(parsed, Plain::Map(_)));
}

// Test: restore handles scalars, nulls, and nested sequences.
// Assumes: the plain visitor covers the full scalar range.
// Verifies: a mixed document restores with expected kinds.
#[test]
fn restore_covers_scalar_kinds() {
    let text = r#"{"n":null,"b":true,"i":-3,"f":2.5,"s":"x","l":[1,{"m":2}]}"#;
    let d: DotMap = serde_json::from_str(text).unwrap();
    assert!(d.get("n").unwrap().is_null());
    assert_eq!(d.get("b").unwrap().as_bool(), Some(true));
    assert_eq!(d.get("i").unwrap().as_int(), Some(-3));
    assert_eq!(d.get("f").unwrap().as_float(), Some(2.5));
    assert_eq!(d.get("s").unwrap().as_str(), Some("x"));
    // Mappings nested in restored sequences are wrapped.
    let l = d.get("l").unwrap().as_list().unwrap();
    assert!(l[1].is_map());
}
