use crate::document::provider::DocumentProvider;

/// Ancestor display names of an element, root-to-element order.
///
/// Walks the parent chain upward, stopping before the top-level
/// page/container. Unnamed ancestors are skipped; the element's own name is
/// not included. May be empty.
pub fn resolve_path(provider: &dyn DocumentProvider, id: &str) -> Vec<String> {
    let mut names = Vec::new();
    let mut cursor = provider.parent_of(id);

    while let Some(ancestor) = cursor {
        if provider.is_top_container(&ancestor) {
            break;
        }
        if let Some(name) = provider.display_name(&ancestor) {
            if !name.is_empty() {
                names.push(name);
            }
        }
        cursor = provider.parent_of(&ancestor);
    }

    names.reverse();
    names
}
