use crate::document::document_model::FontRef;
use crate::document::provider::{DocumentProvider, working_set};
use crate::error::SyncError;
use crate::sync::flatten::TranslationMap;

/// Apply a translation map to the working set.
///
/// Only elements carrying a non-empty stored key participate. Every
/// distinct font among them is loaded in one batch before any text changes
/// — the host requires loaded fonts, so a load failure aborts before
/// mutation. Lookup per element is full stored key first, then, when a
/// target namespace is given and the key carries that prefix, the bare key
/// with the prefix stripped. The first hit wins; misses leave the element
/// untouched. Elements mutate independently; a rejected mutation skips that
/// element only.
///
/// Returns the number of elements whose text was updated.
pub fn apply_translations(
    provider: &mut dyn DocumentProvider,
    map: &TranslationMap,
    namespace: &str,
) -> Result<usize, SyncError> {
    let keyed: Vec<(String, String)> = working_set(&*provider)
        .into_iter()
        .filter_map(|id| {
            provider
                .stored_key(&id)
                .filter(|key| !key.is_empty())
                .map(|key| (id, key))
        })
        .collect();

    let mut fonts: Vec<FontRef> = Vec::new();
    for (id, _) in &keyed {
        if let Some(font) = provider.font_of(id) {
            if !fonts.contains(&font) {
                fonts.push(font);
            }
        }
    }
    provider.load_fonts(&fonts)?;

    let prefix = format!("{}.", namespace);
    let mut applied = 0;

    for (id, key) in &keyed {
        let translation = map.get(key).or_else(|| {
            if !namespace.is_empty() && key.starts_with(&prefix) {
                map.get(&key[prefix.len()..])
            } else {
                None
            }
        });

        if let Some(text) = translation {
            if provider.set_text_content(id, text).is_ok() {
                applied += 1;
            }
        }
    }

    Ok(applied)
}
