use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::SyncError;
use crate::persist::kv::KeyValueStore;

/// Key-value entry holding the persisted selection map.
pub const SELECTION_STATE_KEY: &str = "selection_state";

/// Per-element inclusion state, persisted as an exceptions-only map.
///
/// Only `false` entries are ever stored: an absent id means included, and
/// any persisted entry whose value is not literally `false` is stale by
/// definition. Elements default to included.
///
/// Load the persisted map, purging anything that is not a literal `false`
/// entry. A purge rewrites the compacted map immediately, which also
/// migrates legacy formats in place.
pub fn get_all(store: &mut dyn KeyValueStore) -> Result<BTreeMap<String, bool>, SyncError> {
    let raw = store.get(SELECTION_STATE_KEY)?;

    let parsed: BTreeMap<String, Value> = match raw.as_deref() {
        Some(content) => serde_json::from_str(content).unwrap_or_default(),
        None => BTreeMap::new(),
    };

    let mut map = BTreeMap::new();
    for (id, value) in &parsed {
        if value == &Value::Bool(false) {
            map.insert(id.clone(), false);
        }
    }

    if raw.is_some() && map.len() != parsed.len() {
        write_map(store, &map)?;
    }

    Ok(map)
}

/// Record one element's inclusion. `false` writes an exception entry;
/// `true` deletes any entry, restoring the default without consuming
/// storage.
pub fn set_one(store: &mut dyn KeyValueStore, id: &str, selected: bool) -> Result<(), SyncError> {
    set_bulk(store, &[(id.to_string(), selected)])
}

/// Apply a batch of inclusion changes as a single persisted write. An empty
/// batch is a no-op, including no write.
pub fn set_bulk(
    store: &mut dyn KeyValueStore,
    entries: &[(String, bool)],
) -> Result<(), SyncError> {
    if entries.is_empty() {
        return Ok(());
    }

    let mut map = get_all(store)?;
    for (id, selected) in entries {
        if *selected {
            map.remove(id);
        } else {
            map.insert(id.clone(), false);
        }
    }
    write_map(store, &map)
}

/// Derivation rule used by every caller: included unless mapped to exactly
/// `false`.
pub fn is_selected(map: &BTreeMap<String, bool>, id: &str) -> bool {
    map.get(id).copied().unwrap_or(true)
}

fn write_map(store: &mut dyn KeyValueStore, map: &BTreeMap<String, bool>) -> Result<(), SyncError> {
    let content = serde_json::to_string(map).map_err(|e| SyncError::JsonSerialize {
        context: "selection state map".to_string(),
        source: e,
    })?;
    store.set(SELECTION_STATE_KEY, &content)
}
