use crate::document::document_model::{DocumentNode, DocumentSnapshot, FontRef, NodeKind};
use crate::document::provider::DocumentProvider;
use crate::error::SyncError;

/// Document provider backed by a JSON snapshot file.
///
/// Holds the node tree in memory; mutations apply to the tree and are
/// persisted by `save`. Fonts requested through `load_fonts` are recorded so
/// callers (and tests) can verify the preload happened.
pub struct JsonDocument {
    snapshot: DocumentSnapshot,
    loaded_fonts: Vec<FontRef>,
}

impl JsonDocument {
    pub fn new(snapshot: DocumentSnapshot) -> Self {
        Self {
            snapshot,
            loaded_fonts: Vec::new(),
        }
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &str) -> Result<Self, SyncError> {
        let content = std::fs::read_to_string(path).map_err(|e| SyncError::Io {
            path: path.to_string(),
            source: e,
        })?;
        let snapshot: DocumentSnapshot =
            serde_json::from_str(&content).map_err(|e| SyncError::JsonParse {
                context: format!("document snapshot '{}'", path),
                source: e,
            })?;
        Ok(Self::new(snapshot))
    }

    /// Write the snapshot back to a JSON file.
    pub fn save(&self, path: &str) -> Result<(), SyncError> {
        let content =
            serde_json::to_string_pretty(&self.snapshot).map_err(|e| SyncError::JsonSerialize {
                context: format!("document snapshot '{}'", path),
                source: e,
            })?;
        std::fs::write(path, content).map_err(|e| SyncError::Io {
            path: path.to_string(),
            source: e,
        })
    }

    pub fn set_selection(&mut self, ids: Vec<String>) {
        self.snapshot.selection = ids;
    }

    /// Fonts that have been requested through `load_fonts`, in request order.
    pub fn loaded_fonts(&self) -> &[FontRef] {
        &self.loaded_fonts
    }

    fn find(&self, id: &str) -> Option<&DocumentNode> {
        find_node(&self.snapshot.root, id)
    }

    fn find_mut(&mut self, id: &str) -> Option<&mut DocumentNode> {
        find_node_mut(&mut self.snapshot.root, id)
    }

    fn writable(&mut self, id: &str) -> Result<&mut DocumentNode, SyncError> {
        let node = find_node_mut(&mut self.snapshot.root, id)
            .ok_or_else(|| SyncError::ElementNotFound { id: id.to_string() })?;
        if node.locked {
            return Err(SyncError::ElementLocked { id: id.to_string() });
        }
        Ok(node)
    }
}

impl DocumentProvider for JsonDocument {
    fn all_text_elements(&self) -> Vec<String> {
        let mut ids = Vec::new();
        collect_text_ids(&self.snapshot.root, &mut ids);
        ids
    }

    fn selection(&self) -> Vec<String> {
        self.snapshot.selection.clone()
    }

    fn text_elements_within(&self, roots: &[String]) -> Vec<String> {
        let mut ids = Vec::new();
        for root in roots {
            if let Some(node) = self.find(root) {
                collect_text_ids(node, &mut ids);
            }
        }
        // Overlapping roots (a node and its ancestor both selected) must not
        // produce duplicate elements.
        let mut seen = std::collections::HashSet::new();
        ids.retain(|id| seen.insert(id.clone()));
        ids
    }

    fn parent_of(&self, id: &str) -> Option<String> {
        if id == self.snapshot.root.id {
            return None;
        }
        find_parent(&self.snapshot.root, id).map(|n| n.id.clone())
    }

    fn is_top_container(&self, id: &str) -> bool {
        if id == self.snapshot.root.id {
            return true;
        }
        self.find(id).map_or(false, |n| n.kind == NodeKind::Page)
    }

    fn display_name(&self, id: &str) -> Option<String> {
        self.find(id).map(|n| n.name.clone())
    }

    fn set_display_name(&mut self, id: &str, name: &str) -> Result<(), SyncError> {
        let node = self.writable(id)?;
        node.name = name.to_string();
        Ok(())
    }

    fn text_content(&self, id: &str) -> Option<String> {
        self.find(id).and_then(|n| n.characters.clone())
    }

    fn set_text_content(&mut self, id: &str, text: &str) -> Result<(), SyncError> {
        let node = self.writable(id)?;
        node.characters = Some(text.to_string());
        Ok(())
    }

    fn stored_key(&self, id: &str) -> Option<String> {
        self.find(id).and_then(|n| n.stored_key.clone())
    }

    fn set_stored_key(&mut self, id: &str, key: &str) -> Result<(), SyncError> {
        // Persisted slots are metadata, writable even on locked nodes.
        let node = self
            .find_mut(id)
            .ok_or_else(|| SyncError::ElementNotFound { id: id.to_string() })?;
        node.stored_key = Some(key.to_string());
        Ok(())
    }

    fn stored_original_name(&self, id: &str) -> Option<String> {
        self.find(id).and_then(|n| n.stored_original_name.clone())
    }

    fn set_stored_original_name(&mut self, id: &str, name: &str) -> Result<(), SyncError> {
        let node = self
            .find_mut(id)
            .ok_or_else(|| SyncError::ElementNotFound { id: id.to_string() })?;
        node.stored_original_name = Some(name.to_string());
        Ok(())
    }

    fn font_of(&self, id: &str) -> Option<FontRef> {
        self.find(id).and_then(|n| n.font.clone())
    }

    fn load_fonts(&mut self, fonts: &[FontRef]) -> Result<(), SyncError> {
        for font in fonts {
            if !self.loaded_fonts.contains(font) {
                self.loaded_fonts.push(font.clone());
            }
        }
        Ok(())
    }
}

fn collect_text_ids(node: &DocumentNode, out: &mut Vec<String>) {
    if node.is_text() {
        out.push(node.id.clone());
    }
    for child in &node.children {
        collect_text_ids(child, out);
    }
}

fn find_node<'a>(node: &'a DocumentNode, id: &str) -> Option<&'a DocumentNode> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter().find_map(|c| find_node(c, id))
}

fn find_node_mut<'a>(node: &'a mut DocumentNode, id: &str) -> Option<&'a mut DocumentNode> {
    if node.id == id {
        return Some(node);
    }
    node.children.iter_mut().find_map(|c| find_node_mut(c, id))
}

fn find_parent<'a>(node: &'a DocumentNode, id: &str) -> Option<&'a DocumentNode> {
    if node.children.iter().any(|c| c.id == id) {
        return Some(node);
    }
    node.children.iter().find_map(|c| find_parent(c, id))
}
