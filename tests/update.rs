// Update test suite (consolidated).
//
// Each test documents what behavior is being verified and which
// invariants are assumed or asserted. The invariants exercised:
// - Shallow mode overwrites present keys wholesale; every written value
//   passes through the wrap rule.
// - Recursive mode merges mapping values key-by-key at every depth,
//   preserving siblings, and overwrites anything not mapping-shaped
//   (scalars, lists, tuples, opaque containers) without recursion.
// - Overrides apply after the source and win on conflict; in recursive
//   mode they merge into the source first.
// - Argument shape is validated before any mutation: at most one
//   source, and a source must be a mapping or string-keyed pairs.
use dotmap::{plain, DotMap, Error, Opaque, Plain, Update};

fn sample() -> DotMap {
    DotMap::from_plain(plain!({
        "a": 1,
        "b": 2,
        "c": {
            "d": 3,
            "e": 4,
            "f": {
                "g": 5,
                "h": 6
            }
        }
    }))
    .expect("mapping source")
}

// ---- Shallow mode ----

// Test: shallow update from a mapping source.
// Assumes: present keys are overwritten wholesale.
// Verifies: a nested map value replaces the whole subtree.
#[test]
fn shallow_map_source() {
    let mut d = sample();
    d.update(Update::new().source(plain!({"a": 42, "c": {"d": 69}})))
        .unwrap();
    assert_eq!(d, plain!({"a": 42, "b": 2, "c": {"d": 69}}));
}

// Test: shallow update from a pair sequence.
// Assumes: the pairs path matches the mapping path entry-for-entry.
// Verifies: same result as the mapping source.
#[test]
fn shallow_pair_sequence_source() {
    let mut d = sample();
    d.update(Update::new().source(plain!([["a", 42], ["c", {"d": 69}]])))
        .unwrap();
    assert_eq!(d, plain!({"a": 42, "b": 2, "c": {"d": 69}}));
}

// Test: shallow update wraps written values.
// Assumes: the wrap-on-write rule covers shallow mode too.
// Verifies: a nested map written by update is attribute-accessible.
#[test]
fn shallow_update_wraps() {
    let mut d = DotMap::new();
    d.update(Update::new().source(plain!({"x": {"y": 1}})))
        .unwrap();
    let y = d.attr("x").unwrap().attr("y").unwrap();
    assert_eq!(*y.entry().unwrap(), 1);
}

// Test: overrides apply after the source and win.
// Assumes: override order is source-then-overrides.
// Verifies: an override clobbers a source value for the same key.
#[test]
fn shallow_overrides_win() {
    let mut d = sample();
    d.update(
        Update::new()
            .source(plain!({"a": 42, "c": {"d": 69}}))
            .set("c", 69),
    )
    .unwrap();
    assert_eq!(d, plain!({"a": 42, "b": 2, "c": 69}));
}

// Test: overrides alone, no source.
// Assumes: a source is optional in both modes.
// Verifies: override entries land wrapped.
#[test]
fn shallow_overrides_only() {
    let mut d = DotMap::from_plain(plain!({"a": 1, "b": 2})).unwrap();
    d.update(Update::new().set("a", 42).set("q", plain!({"r": 1})))
        .unwrap();
    assert_eq!(d, plain!({"a": 42, "b": 2, "q": {"r": 1}}));
    assert!(d.get("q").unwrap().is_map());
}

// ---- Recursive mode ----

// Test: recursive update merges nested mappings.
// Assumes: only keys present in the source are overwritten per level.
// Verifies: the sibling keys survive at every depth.
#[test]
fn recursive_merges_nested_maps() {
    let mut d = sample();
    d.update(
        Update::new()
            .source(plain!({"a": 42, "c": {"d": 69}}))
            .recursive(),
    )
    .unwrap();
    assert_eq!(
        d,
        plain!({"a": 42, "b": 2, "c": {"d": 69, "e": 4, "f": {"g": 5, "h": 6}}})
    );
}

// Test: recursive update from a pair sequence.
// Assumes: source materialization is shared with construction.
// Verifies: same merge result as the mapping source.
#[test]
fn recursive_pair_sequence_source() {
    let mut d = sample();
    d.update(
        Update::new()
            .source(plain!([["a", 42], ["c", {"d": 69}]]))
            .recursive(),
    )
    .unwrap();
    assert_eq!(
        d,
        plain!({"a": 42, "b": 2, "c": {"d": 69, "e": 4, "f": {"g": 5, "h": 6}}})
    );
}

// Test: a nested pair sequence is a list, not a mapping.
// Assumes: only the top-level source is pair-interpreted; values keep
// their own kinds.
// Verifies: a list-of-pairs value replaces the subtree wholesale.
#[test]
fn recursive_nested_pairs_stay_a_list() {
    let mut d = sample();
    d.update(
        Update::new()
            .source(plain!([["a", 42], ["c", [["d", 69]]]]))
            .recursive(),
    )
    .unwrap();
    assert_eq!(d, plain!({"a": 42, "b": 2, "c": [["d", 69]]}));
}

// Test: recursive update does not recurse into lists or tuples.
// Assumes: merge recursion is mapping-only, unlike construction wrap.
// Verifies: list and tuple values replace map subtrees wholesale.
#[test]
fn recursive_replaces_sequences_wholesale() {
    let mut d = sample();
    d.update(
        Update::new()
            .source(plain!({"c": [1, {"x": 2}]}))
            .recursive(),
    )
    .unwrap();
    assert_eq!(d, plain!({"a": 1, "b": 2, "c": [1, {"x": 2}]}));

    let mut d = sample();
    d.update(
        Update::new()
            .source(plain!({"c": (Plain::tuple([plain!(1)]))}))
            .recursive(),
    )
    .unwrap();
    assert_eq!(
        d,
        plain!({"a": 1, "b": 2, "c": (Plain::tuple([plain!(1)]))})
    );
}

// Test: opaque containers are not mapping-shaped for merging.
// Assumes: the merge kind check is on the stored kind, so a mapping
// subtype overwrites instead of merging.
// Verifies: the opaque value replaces the map subtree wholesale.
#[test]
fn recursive_replaces_opaque_wholesale() {
    let mut d = sample();
    d.update(
        Update::new()
            .source(plain!({"c": (Opaque::Map(Default::default()))}))
            .recursive(),
    )
    .unwrap();
    assert!(d.get("c").unwrap().as_opaque().is_some());
    assert_eq!(*d.get("a").unwrap(), 1);
}

// Test: merging into a non-map initializes an empty map first.
// Assumes: the existing value is discarded before merging.
// Verifies: a scalar at the key is replaced by the merged mapping.
#[test]
fn recursive_initializes_non_map_targets() {
    let mut d = DotMap::from_plain(plain!({"a": 1, "c": 7})).unwrap();
    d.update(Update::new().source(plain!({"c": {"d": 69}})).recursive())
        .unwrap();
    assert_eq!(d, plain!({"a": 1, "c": {"d": 69}}));

    // Absent keys initialize the same way.
    let mut d = DotMap::new();
    d.update(Update::new().source(plain!({"c": {"d": 69}})).recursive())
        .unwrap();
    assert_eq!(d, plain!({"c": {"d": 69}}));
}

// Test: recursive overrides clobber source values.
// Assumes: overrides merge into the source before self.
// Verifies: a scalar override replaces the source's map for that key.
#[test]
fn recursive_overrides_win() {
    let mut d = sample();
    d.update(
        Update::new()
            .source(plain!({"a": 42, "c": {"d": 69}}))
            .set("c", 69)
            .recursive(),
    )
    .unwrap();
    assert_eq!(
        d,
        plain!({"a": 42, "b": 2, "c": 69})
    );
}

// Test: recursive map overrides merge with the source's map.
// Assumes: override merging uses the same recursive algorithm.
// Verifies: the override's leaf wins, the target's siblings survive.
#[test]
fn recursive_map_overrides_merge() {
    let mut d = sample();
    d.update(
        Update::new()
            .source(plain!({"a": 42, "c": {"d": 69}}))
            .set("c", plain!({"d": 420}))
            .recursive(),
    )
    .unwrap();
    assert_eq!(
        d,
        plain!({"a": 42, "b": 2, "c": {"d": 420, "e": 4, "f": {"g": 5, "h": 6}}})
    );
}

// ---- Argument validation ----

// Test: argument errors in shallow mode.
// Assumes: shape is validated before any mutation.
// Verifies: a scalar source and a two-source update both fail and the
// map is untouched.
#[test]
fn shallow_argument_errors() {
    let mut d = sample();
    let before = d.clone();

    let err = d.update(Update::new().source(plain!(42))).unwrap_err();
    assert!(matches!(err, Error::InvalidSource { .. }));
    assert!(err.is_argument_error());

    let err = d
        .update(Update::new().source(plain!(42)).source(plain!(69)))
        .unwrap_err();
    assert_eq!(err, Error::SourceCount { count: 2 });

    assert_eq!(d, before);
}

// Test: malformed pair sequences fail in shallow mode.
// Assumes: every element must be a string-keyed 2-element pair.
// Verifies: scalar elements are rejected without mutating.
#[test]
fn shallow_bad_pairs_error() {
    let mut d = sample();
    let before = d.clone();
    let err = d
        .update(Update::new().source(plain!([42, 69])))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSource { .. }));
    assert_eq!(d, before);
}

// Test: argument errors in recursive mode.
// Assumes: the same validation runs before the merge.
// Verifies: scalar source, two sources, and bad pairs all fail with
// the map untouched, even with overrides present.
#[test]
fn recursive_argument_errors() {
    let mut d = sample();
    let before = d.clone();

    let err = d
        .update(Update::new().source(plain!(42)).recursive())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSource { .. }));

    let err = d
        .update(
            Update::new()
                .source(plain!(42))
                .source(plain!(69))
                .recursive(),
        )
        .unwrap_err();
    assert_eq!(err, Error::SourceCount { count: 2 });

    let err = d
        .update(
            Update::new()
                .source(plain!([42, 69]))
                .set("a", 1)
                .recursive(),
        )
        .unwrap_err();
    assert!(matches!(err, Error::InvalidSource { .. }));

    assert_eq!(d, before);
}
