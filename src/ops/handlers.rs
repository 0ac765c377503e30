use crate::document::provider::{DocumentProvider, working_set};
use crate::error::SyncError;
use crate::keys::assign::scan_elements;
use crate::keys::namespace::derive_namespaces;
use crate::keys::scan_model::{ScanItem, ScanResponse, compose_key};
use crate::persist::kv::KeyValueStore;
use crate::selection::store as selection;
use crate::sync::flatten::TranslationMap;
use crate::sync::restore;
use crate::sync::translate;

pub const EMPTY_SCAN_WARNING: &str =
    "No text elements found. Select frames or text elements, or clear the selection to scan the whole document.";

pub const EMPTY_ASSIGNED_WARNING: &str =
    "No elements with assigned keys found in the current scope.";

/// Scan the working set and propose a key for every text element.
///
/// Elements keep their stored key; the rest get generated ones, unique
/// within the batch. Selection state from the store is merged onto the
/// items. An empty working set returns a warning instead of an error.
pub fn scan(
    provider: &dyn DocumentProvider,
    state: &mut dyn KeyValueStore,
    namespace: &str,
) -> Result<ScanResponse, SyncError> {
    let ids = working_set(provider);
    if ids.is_empty() {
        return Ok(ScanResponse {
            items: Vec::new(),
            warning: Some(EMPTY_SCAN_WARNING.to_string()),
        });
    }

    let mut items = scan_elements(provider, &ids, namespace);
    merge_selection(state, &mut items)?;

    Ok(ScanResponse {
        items,
        warning: None,
    })
}

/// Persist scanned keys onto their elements.
///
/// Per element: capture the original display name once (never overwritten
/// on later assignments), store the full key, and rename the element to it.
/// Deleted elements are skipped; a rejected rename skips that element's
/// rename only. Returns the recomputed namespace set.
pub fn apply_keys(
    provider: &mut dyn DocumentProvider,
    items: &[ScanItem],
) -> Result<Vec<String>, SyncError> {
    for item in items {
        let Some(current_name) = provider.display_name(&item.element_id) else {
            continue; // deleted between scan and apply
        };

        if provider.stored_original_name(&item.element_id).is_none() {
            let _ = provider.set_stored_original_name(&item.element_id, &current_name);
        }
        let _ = provider.set_stored_key(&item.element_id, &item.key);
        let _ = provider.set_display_name(&item.element_id, &item.key);
    }

    Ok(derive_namespaces(&*provider))
}

/// Apply a translation map to the working set. See
/// `sync::translate::apply_translations` for the lookup contract.
pub fn apply_language(
    provider: &mut dyn DocumentProvider,
    map: &TranslationMap,
    namespace: &str,
) -> Result<usize, SyncError> {
    translate::apply_translations(provider, map, namespace)
}

/// List the working set's elements that already carry a key.
///
/// With a non-empty namespace, items are limited to that namespace plus
/// bare (namespace-relative) keys, since those are the ones a translation
/// pass for the namespace can reach.
pub fn get_assigned(
    provider: &dyn DocumentProvider,
    state: &mut dyn KeyValueStore,
    namespace: &str,
) -> Result<ScanResponse, SyncError> {
    let ids: Vec<String> = working_set(provider)
        .into_iter()
        .filter(|id| provider.stored_key(id).is_some_and(|k| !k.is_empty()))
        .collect();

    let mut items = scan_elements(provider, &ids, namespace);
    if !namespace.is_empty() {
        items.retain(|item| item.namespace.is_empty() || item.namespace == namespace);
    }
    merge_selection(state, &mut items)?;

    let warning = if items.is_empty() {
        Some(EMPTY_ASSIGNED_WARNING.to_string())
    } else {
        None
    };

    Ok(ScanResponse { items, warning })
}

/// Revert display names to their stored originals, then return the
/// refreshed assigned listing.
pub fn restore_names(
    provider: &mut dyn DocumentProvider,
    state: &mut dyn KeyValueStore,
    ids: &[String],
    namespace: &str,
) -> Result<ScanResponse, SyncError> {
    restore::restore_names(provider, ids);
    get_assigned(&*provider, state, namespace)
}

/// Namespaces currently in use, from stored keys over the working set.
pub fn get_namespaces(provider: &dyn DocumentProvider) -> Vec<String> {
    derive_namespaces(provider)
}

/// Record one element's inclusion state.
pub fn set_selected(
    state: &mut dyn KeyValueStore,
    id: &str,
    selected: bool,
) -> Result<(), SyncError> {
    selection::set_one(state, id, selected)
}

/// Record a batch of inclusion states as one persisted write.
pub fn set_selected_bulk(
    state: &mut dyn KeyValueStore,
    entries: &[(String, bool)],
) -> Result<(), SyncError> {
    selection::set_bulk(state, entries)
}

/// One-time key-format migration: qualify bare stored keys with the given
/// namespace, across the whole document. Already-qualified keys are left
/// alone. Returns how many keys were rewritten.
pub fn migrate_bare_keys(
    provider: &mut dyn DocumentProvider,
    namespace: &str,
) -> Result<usize, SyncError> {
    if namespace.is_empty() {
        return Ok(0);
    }

    let mut migrated = 0;
    for id in provider.all_text_elements() {
        let Some(key) = provider.stored_key(&id).filter(|k| !k.is_empty()) else {
            continue;
        };
        if key.contains('.') {
            continue;
        }
        let qualified = compose_key(namespace, &key);
        if provider.set_stored_key(&id, &qualified).is_ok() {
            migrated += 1;
        }
    }

    Ok(migrated)
}

fn merge_selection(
    state: &mut dyn KeyValueStore,
    items: &mut [ScanItem],
) -> Result<(), SyncError> {
    let map = selection::get_all(state)?;
    for item in items {
        item.selected = selection::is_selected(&map, &item.element_id);
    }
    Ok(())
}
