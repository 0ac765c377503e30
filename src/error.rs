use std::fmt;

#[derive(Debug)]
pub enum SyncError {
    /// File read/write failed (document snapshot, state file, map file)
    Io { path: String, source: std::io::Error },

    /// JSON parsing failed (document snapshot, persisted state, translation map)
    JsonParse { context: String, source: serde_json::Error },

    /// JSON serialization failed (document snapshot, persisted state)
    JsonSerialize { context: String, source: serde_json::Error },

    /// HTTP request to the translation store failed
    HttpRequest { context: String, source: reqwest::Error },

    /// Translation store responded with an error or unexpected payload
    StoreProtocol { context: String, error: String },

    /// Element id no longer resolves in the document
    ElementNotFound { id: String },

    /// Element refused mutation (locked in the host document)
    ElementLocked { id: String },

    /// A required store setting has not been configured
    MissingSetting(String),

    /// Font loading was rejected by the document host
    FontLoad(String),
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncError::Io { path, source } => {
                write!(f, "I/O error on '{}': {}", path, source)
            }
            SyncError::JsonParse { context, source } => {
                write!(f, "JSON parse error ({}): {}", context, source)
            }
            SyncError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            SyncError::HttpRequest { context, source } => {
                write!(f, "Translation store request failed ({}): {}", context, source)
            }
            SyncError::StoreProtocol { context, error } => {
                write!(f, "Translation store error ({}): {}", context, error)
            }
            SyncError::ElementNotFound { id } => {
                write!(f, "Element '{}' not found in document", id)
            }
            SyncError::ElementLocked { id } => {
                write!(f, "Element '{}' is locked and cannot be modified", id)
            }
            SyncError::MissingSetting(name) => {
                write!(f, "Store setting '{}' is not configured", name)
            }
            SyncError::FontLoad(msg) => {
                write!(f, "Font loading failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::Io { source, .. } => Some(source),
            SyncError::JsonParse { source, .. } => Some(source),
            SyncError::JsonSerialize { source, .. } => Some(source),
            SyncError::HttpRequest { source, .. } => Some(source),
            _ => None,
        }
    }
}
