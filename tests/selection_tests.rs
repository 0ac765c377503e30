use locale_sync::persist::kv::{KeyValueStore, MemoryStore};
use locale_sync::selection::store::{
    SELECTION_STATE_KEY, get_all, is_selected, set_bulk, set_one,
};

// =========================================================================
// Compaction invariant: only `false` entries are ever persisted
// =========================================================================

#[test]
fn persisted_map_never_contains_true() {
    let mut store = MemoryStore::new();

    set_one(&mut store, "a", false).unwrap();
    set_one(&mut store, "b", true).unwrap();
    set_bulk(
        &mut store,
        &[
            ("c".to_string(), false),
            ("a".to_string(), true),
            ("d".to_string(), true),
        ],
    )
    .unwrap();

    let raw = store.get(SELECTION_STATE_KEY).unwrap().expect("map persisted");
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = parsed.as_object().expect("map is a JSON object");

    for (id, value) in entries {
        assert_eq!(
            value,
            &serde_json::Value::Bool(false),
            "Entry '{}' must be literally false",
            id
        );
    }
    assert_eq!(entries.len(), 1, "Only 'c' remains excluded");
    assert!(entries.contains_key("c"));
}

#[test]
fn setting_true_deletes_the_entry() {
    let mut store = MemoryStore::new();

    set_one(&mut store, "a", false).unwrap();
    assert_eq!(get_all(&mut store).unwrap().len(), 1);

    set_one(&mut store, "a", true).unwrap();
    assert!(
        get_all(&mut store).unwrap().is_empty(),
        "Re-including must free the storage, not write true"
    );
}

// =========================================================================
// Purge-on-load migrates legacy formats
// =========================================================================

#[test]
fn load_purges_non_false_entries_and_rewrites() {
    let mut store = MemoryStore::new();
    store.seed(
        SELECTION_STATE_KEY,
        r#"{"a": true, "b": false, "c": "yes", "d": 1}"#,
    );

    let map = get_all(&mut store).unwrap();

    assert_eq!(map.len(), 1, "Only the false entry survives the purge");
    assert_eq!(map.get("b"), Some(&false));
    assert_eq!(store.writes, 1, "Purge rewrites the compacted map eagerly");

    let raw = store.get(SELECTION_STATE_KEY).unwrap().unwrap();
    assert_eq!(raw, r#"{"b":false}"#);
}

#[test]
fn clean_map_loads_without_rewriting() {
    let mut store = MemoryStore::new();
    store.seed(SELECTION_STATE_KEY, r#"{"x":false}"#);

    let map = get_all(&mut store).unwrap();

    assert_eq!(map.len(), 1);
    assert_eq!(store.writes, 0, "Already-compacted maps are not rewritten");
}

#[test]
fn missing_or_malformed_map_loads_empty() {
    let mut store = MemoryStore::new();
    assert!(get_all(&mut store).unwrap().is_empty(), "Missing map");

    store.seed(SELECTION_STATE_KEY, "not json at all");
    assert!(get_all(&mut store).unwrap().is_empty(), "Malformed map");
}

// =========================================================================
// Bulk semantics
// =========================================================================

#[test]
fn empty_bulk_is_a_no_op_with_no_write() {
    let mut store = MemoryStore::new();

    set_bulk(&mut store, &[]).unwrap();

    assert_eq!(store.writes, 0, "Empty batch must not touch persistence");
    assert!(store.get(SELECTION_STATE_KEY).unwrap().is_none());
}

#[test]
fn bulk_applies_as_a_single_write() {
    let mut store = MemoryStore::new();

    set_bulk(
        &mut store,
        &[
            ("a".to_string(), false),
            ("b".to_string(), false),
            ("c".to_string(), true),
        ],
    )
    .unwrap();

    assert_eq!(store.writes, 1, "One batch, one persisted write");
    let map = get_all(&mut store).unwrap();
    assert_eq!(map.len(), 2);
    assert!(map.contains_key("a") && map.contains_key("b"));
}

// =========================================================================
// Derivation rule
// =========================================================================

#[test]
fn absent_ids_default_to_included() {
    let mut store = MemoryStore::new();
    set_one(&mut store, "excluded", false).unwrap();

    let map = get_all(&mut store).unwrap();

    assert!(!is_selected(&map, "excluded"));
    assert!(is_selected(&map, "never-seen"), "Absence means included");
}
