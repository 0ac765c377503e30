use serde::{Deserialize, Serialize};

/// One row of a scan result: everything the caller needs to render, edit,
/// and later apply a key for a single text element. Transient — rebuilt on
/// every scan, never persisted on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanItem {
    pub element_id: String,
    pub current_name: String,
    pub original_name: String,
    pub text: String,

    /// Full key. Equals `namespace + "." + local_key` whenever `namespace`
    /// is non-empty, else equals `local_key`.
    pub key: String,
    pub namespace: String,
    pub local_key: String,

    /// Whether the key was already stored on the element before this scan.
    pub existing: bool,

    /// Whether the element is included, per the selection state store.
    pub selected: bool,
}

/// How a key was resolved for an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The element already carried a stored key; reused verbatim.
    Reused(String),
    /// Freshly generated from the hierarchy path and base name.
    Generated(String),
}

impl KeyOutcome {
    pub fn key(&self) -> &str {
        match self {
            KeyOutcome::Reused(key) | KeyOutcome::Generated(key) => key,
        }
    }

    pub fn is_existing(&self) -> bool {
        matches!(self, KeyOutcome::Reused(_))
    }
}

/// Split a full key into `(namespace, local_key)`. A key without a
/// separator has an empty namespace and is its own local key.
pub fn split_key(key: &str) -> (String, String) {
    match key.find('.') {
        Some(dot) if dot > 0 => (key[..dot].to_string(), key[dot + 1..].to_string()),
        _ => (String::new(), key.to_string()),
    }
}

/// Compose a full key from a namespace (possibly empty) and local fragment.
pub fn compose_key(namespace: &str, local: &str) -> String {
    if namespace.is_empty() {
        local.to_string()
    } else {
        format!("{}.{}", namespace, local)
    }
}

/// Scan result returned to the caller. An empty document or selection is
/// not an error: `items` is empty and `warning` carries guidance instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    pub items: Vec<ScanItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}
