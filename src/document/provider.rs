use crate::document::document_model::FontRef;
use crate::error::SyncError;

/// Access to the host document.
///
/// The engines never own elements; they hold opaque ids and go through this
/// trait for every read and mutation. Getters return `None` when an id no
/// longer resolves (e.g. the element was deleted between scan and apply) —
/// callers skip such elements rather than fail the batch.
pub trait DocumentProvider {
    /// All text elements of the document, in traversal (depth-first) order.
    fn all_text_elements(&self) -> Vec<String>;

    /// Ids the user currently has selected in the host editor. May contain
    /// containers; use `text_elements_within` to expand them.
    fn selection(&self) -> Vec<String>;

    /// Text elements at or below the given roots, in traversal order.
    fn text_elements_within(&self, roots: &[String]) -> Vec<String>;

    /// Parent id, or `None` for the document root or an unknown id.
    fn parent_of(&self, id: &str) -> Option<String>;

    /// Whether the id names a top-level page/container (excluded from
    /// hierarchy paths).
    fn is_top_container(&self, id: &str) -> bool;

    fn display_name(&self, id: &str) -> Option<String>;
    fn set_display_name(&mut self, id: &str, name: &str) -> Result<(), SyncError>;

    fn text_content(&self, id: &str) -> Option<String>;
    fn set_text_content(&mut self, id: &str, text: &str) -> Result<(), SyncError>;

    fn stored_key(&self, id: &str) -> Option<String>;
    fn set_stored_key(&mut self, id: &str, key: &str) -> Result<(), SyncError>;

    fn stored_original_name(&self, id: &str) -> Option<String>;
    fn set_stored_original_name(&mut self, id: &str, name: &str) -> Result<(), SyncError>;

    fn font_of(&self, id: &str) -> Option<FontRef>;

    /// Load every font in the batch before returning. The host requires
    /// loaded fonts before text content can change, so callers must invoke
    /// this once per batch ahead of any `set_text_content`.
    fn load_fonts(&mut self, fonts: &[FontRef]) -> Result<(), SyncError>;
}

/// The working set: text elements under the current selection when there is
/// one, otherwise every text element of the document.
pub fn working_set(provider: &dyn DocumentProvider) -> Vec<String> {
    let selection = provider.selection();
    if selection.is_empty() {
        provider.all_text_elements()
    } else {
        provider.text_elements_within(&selection)
    }
}
