use std::collections::HashSet;

use crate::document::provider::DocumentProvider;
use crate::keys::hierarchy::resolve_path;
use crate::keys::scan_model::{KeyOutcome, ScanItem, compose_key, split_key};
use crate::keys::slug::slugify;

/// Substituted when normalization leaves nothing to build a key from.
pub const FALLBACK_TOKEN: &str = "text";

/// Nearest ancestors kept in a generated key.
const MAX_PATH_SEGMENTS: usize = 3;

/// Characters of text content used as a base name fallback.
const MAX_TEXT_BASE_CHARS: usize = 30;

/// Assigns keys for one scan batch.
///
/// Tracks the local fragments taken so far, so every key resolved through
/// the same assigner is unique in local-fragment space — including fragments
/// claimed by pre-existing stored keys.
pub struct KeyAssigner {
    used: HashSet<String>,
}

impl KeyAssigner {
    pub fn new() -> Self {
        Self {
            used: HashSet::new(),
        }
    }

    /// Resolve the key for one element.
    ///
    /// A stored key is reused verbatim and its local fragment registered so
    /// later generated keys cannot collide with it. Otherwise a key is
    /// generated from the last `MAX_PATH_SEGMENTS` ancestor names plus the
    /// element's base name, slug-normalized, suffixed on collision.
    pub fn resolve(
        &mut self,
        provider: &dyn DocumentProvider,
        id: &str,
        namespace: &str,
    ) -> KeyOutcome {
        if let Some(stored) = provider.stored_key(id).filter(|k| !k.is_empty()) {
            let (_, local) = split_key(&stored);
            self.used.insert(local);
            return KeyOutcome::Reused(stored);
        }

        let path = resolve_path(provider, id);
        let base = base_name(provider, id);

        let mut parts: Vec<String> = path
            .into_iter()
            .rev()
            .take(MAX_PATH_SEGMENTS)
            .rev()
            .collect();
        parts.push(base);

        let mut candidate = slugify(&parts.join("_"));
        if candidate.is_empty() {
            candidate = FALLBACK_TOKEN.to_string();
        }

        let local = self.claim(candidate);
        KeyOutcome::Generated(compose_key(namespace, &local))
    }

    /// Register `candidate` in the used set, suffixing `_2`, `_3`, … until
    /// it is free. Returns the fragment actually claimed.
    fn claim(&mut self, candidate: String) -> String {
        if self.used.insert(candidate.clone()) {
            return candidate;
        }
        let mut n = 2usize;
        loop {
            let suffixed = format!("{}_{}", candidate, n);
            if self.used.insert(suffixed.clone()) {
                return suffixed;
            }
            n += 1;
        }
    }
}

impl Default for KeyAssigner {
    fn default() -> Self {
        Self::new()
    }
}

/// The name part a generated key ends with: the element's display name
/// unless it is empty or an auto-generated placeholder, else the leading
/// characters of its text content.
fn base_name(provider: &dyn DocumentProvider, id: &str) -> String {
    let name = provider.display_name(id).unwrap_or_default();
    if !name.is_empty() && !is_placeholder_name(&name) {
        return name;
    }
    provider
        .text_content(id)
        .unwrap_or_default()
        .chars()
        .take(MAX_TEXT_BASE_CHARS)
        .collect()
}

/// Whether a display name looks auto-generated: the word "text"
/// (case-insensitive) at the start, followed by nothing or a non-letter.
/// "Text", "Text 12", "text2" match; "Texture" does not.
pub fn is_placeholder_name(name: &str) -> bool {
    let lowered = name.trim().to_lowercase();
    if !lowered.starts_with("text") {
        return false;
    }
    match lowered.chars().nth(4) {
        None => true,
        Some(c) => !c.is_alphabetic(),
    }
}

/// Run the assignment engine over a batch of elements, in the given
/// traversal order. `selected` starts true on every item; callers merge the
/// selection state afterwards.
pub fn scan_elements(
    provider: &dyn DocumentProvider,
    ids: &[String],
    namespace: &str,
) -> Vec<ScanItem> {
    let mut assigner = KeyAssigner::new();
    let mut items = Vec::with_capacity(ids.len());

    for id in ids {
        let outcome = assigner.resolve(provider, id, namespace);
        let (ns, local) = split_key(outcome.key());

        let current_name = provider.display_name(id).unwrap_or_default();
        let original_name = provider
            .stored_original_name(id)
            .unwrap_or_else(|| current_name.clone());

        items.push(ScanItem {
            element_id: id.clone(),
            current_name,
            original_name,
            text: provider.text_content(id).unwrap_or_default(),
            key: outcome.key().to_string(),
            namespace: ns,
            local_key: local,
            existing: outcome.is_existing(),
            selected: true,
        });
    }

    items
}

#[cfg(test)]
mod tests {
    use super::is_placeholder_name;

    #[test]
    fn placeholder_names() {
        assert!(is_placeholder_name("Text"));
        assert!(is_placeholder_name("Text 12"));
        assert!(is_placeholder_name("text2"));
        assert!(is_placeholder_name("  TEXT  "));
        assert!(!is_placeholder_name("Texture"));
        assert!(!is_placeholder_name("Subtext label"));
        assert!(!is_placeholder_name("Title"));
    }
}
