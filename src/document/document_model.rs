use serde::{Deserialize, Serialize};

/// A node in the document snapshot tree.
///
/// Containers (pages, frames, groups) carry children; only text nodes carry
/// `characters` and `font`. The two `stored*` slots persist with the
/// document and survive round-trips through the snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DocumentNode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<FontRef>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub locked: bool,

    #[serde(rename = "storedKey", default, skip_serializing_if = "Option::is_none")]
    pub stored_key: Option<String>,

    #[serde(
        rename = "storedOriginalName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub stored_original_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeKind {
    Page,
    Frame,
    Group,
    Component,
    Instance,
    Text,
}

impl DocumentNode {
    pub fn is_text(&self) -> bool {
        self.kind == NodeKind::Text
    }
}

/// Font identity of a text node. Two nodes share a font when family and
/// style both match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontRef {
    pub family: String,
    pub style: String,
}

/// On-disk document snapshot: the node tree plus the ids the user currently
/// has selected in the host editor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub root: DocumentNode,

    #[serde(default)]
    pub selection: Vec<String>,
}
