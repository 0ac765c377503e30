use locale_sync::{DocumentNode, DocumentSnapshot, FontRef, JsonDocument, NodeKind};

pub fn text(id: &str, name: &str, content: &str) -> DocumentNode {
    DocumentNode {
        id: id.to_string(),
        name: name.to_string(),
        kind: NodeKind::Text,
        children: vec![],
        characters: Some(content.to_string()),
        font: Some(FontRef {
            family: "Inter".to_string(),
            style: "Regular".to_string(),
        }),
        locked: false,
        stored_key: None,
        stored_original_name: None,
    }
}

pub fn text_with_font(
    id: &str,
    name: &str,
    content: &str,
    family: &str,
    style: &str,
) -> DocumentNode {
    let mut node = text(id, name, content);
    node.font = Some(FontRef {
        family: family.to_string(),
        style: style.to_string(),
    });
    node
}

pub fn keyed_text(id: &str, name: &str, content: &str, key: &str) -> DocumentNode {
    let mut node = text(id, name, content);
    node.stored_key = Some(key.to_string());
    node
}

pub fn frame(id: &str, name: &str, children: Vec<DocumentNode>) -> DocumentNode {
    DocumentNode {
        id: id.to_string(),
        name: name.to_string(),
        kind: NodeKind::Frame,
        children,
        characters: None,
        font: None,
        locked: false,
        stored_key: None,
        stored_original_name: None,
    }
}

/// A single-page document with the given top-level children. The page
/// itself is the top container and never contributes to hierarchy paths.
pub fn doc(children: Vec<DocumentNode>) -> JsonDocument {
    JsonDocument::new(DocumentSnapshot {
        root: DocumentNode {
            id: "0:1".to_string(),
            name: "Home".to_string(),
            kind: NodeKind::Page,
            children,
            characters: None,
            font: None,
            locked: false,
            stored_key: None,
            stored_original_name: None,
        },
        selection: vec![],
    })
}
