use crate::document::provider::DocumentProvider;

/// Revert display names to their stored originals.
///
/// Elements without a stored original, elements that no longer resolve, and
/// elements refusing the rename are skipped. The stored key, the stored
/// original, and the text content are never touched — only the display name
/// reverts.
///
/// Returns the number of elements renamed.
pub fn restore_names(provider: &mut dyn DocumentProvider, ids: &[String]) -> usize {
    let mut restored = 0;

    for id in ids {
        let Some(original) = provider.stored_original_name(id) else {
            continue;
        };
        if provider.set_display_name(id, &original).is_ok() {
            restored += 1;
        }
    }

    restored
}
