use std::collections::BTreeMap;

use crate::error::SyncError;

/// Named string values that outlive a single invocation: store settings and
/// the selection state map. Each `set` is one persisted write.
pub trait KeyValueStore {
    fn get(&self, name: &str) -> Result<Option<String>, SyncError>;
    fn set(&mut self, name: &str, value: &str) -> Result<(), SyncError>;
}

/// JSON-file-backed store, write-through on every `set`.
///
/// A missing or malformed file loads as empty rather than failing — the
/// store is recoverable state, not source data.
pub struct FileStore {
    path: String,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    pub fn open(path: &str) -> Self {
        let entries = std::fs::read_to_string(path)
            .ok()
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self {
            path: path.to_string(),
            entries,
        }
    }

    fn flush(&self) -> Result<(), SyncError> {
        let content =
            serde_json::to_string_pretty(&self.entries).map_err(|e| SyncError::JsonSerialize {
                context: format!("state file '{}'", self.path),
                source: e,
            })?;
        std::fs::write(&self.path, content).map_err(|e| SyncError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, name: &str) -> Result<Option<String>, SyncError> {
        Ok(self.entries.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), SyncError> {
        self.entries.insert(name.to_string(), value.to_string());
        self.flush()
    }
}

/// In-memory store. Counts writes so tests can assert the no-write
/// guarantees of the selection store.
#[derive(Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
    pub writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry without counting it as a write.
    pub fn seed(&mut self, name: &str, value: &str) {
        self.entries.insert(name.to_string(), value.to_string());
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, name: &str) -> Result<Option<String>, SyncError> {
        Ok(self.entries.get(name).cloned())
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), SyncError> {
        self.entries.insert(name.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
