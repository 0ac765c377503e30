use std::collections::BTreeSet;

use crate::document::provider::{DocumentProvider, working_set};

/// Namespaces currently in use, derived from stored keys over the working
/// set. A key contributes its prefix before the first separator; bare keys
/// contribute nothing. Sorted, deduplicated, no side effects.
pub fn derive_namespaces(provider: &dyn DocumentProvider) -> Vec<String> {
    let mut namespaces = BTreeSet::new();

    for id in working_set(provider) {
        if let Some(key) = provider.stored_key(&id) {
            if let Some(dot) = key.find('.') {
                if dot > 0 {
                    namespaces.insert(key[..dot].to_string());
                }
            }
        }
    }

    namespaces.into_iter().collect()
}
