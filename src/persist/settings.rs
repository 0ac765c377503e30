use crate::error::SyncError;
use crate::persist::kv::KeyValueStore;

pub const PROJECT_ID: &str = "project_id";
pub const WRITE_KEY: &str = "write_key";
pub const VERSION: &str = "version";
pub const DEFAULT_NAMESPACE: &str = "default_namespace";
pub const BASE_LANGUAGE: &str = "base_language";

/// Translation-store settings, persisted as individual key-value entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub project_id: String,
    pub write_key: String,
    pub version: String,
    pub default_namespace: String,
    pub base_language: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            write_key: String::new(),
            version: "1".to_string(),
            default_namespace: String::new(),
            base_language: "en".to_string(),
        }
    }
}

impl StoreSettings {
    pub fn load(store: &dyn KeyValueStore) -> Result<Self, SyncError> {
        let defaults = Self::default();
        Ok(Self {
            project_id: store.get(PROJECT_ID)?.unwrap_or(defaults.project_id),
            write_key: store.get(WRITE_KEY)?.unwrap_or(defaults.write_key),
            version: store.get(VERSION)?.unwrap_or(defaults.version),
            default_namespace: store
                .get(DEFAULT_NAMESPACE)?
                .unwrap_or(defaults.default_namespace),
            base_language: store.get(BASE_LANGUAGE)?.unwrap_or(defaults.base_language),
        })
    }

    pub fn save(&self, store: &mut dyn KeyValueStore) -> Result<(), SyncError> {
        store.set(PROJECT_ID, &self.project_id)?;
        store.set(WRITE_KEY, &self.write_key)?;
        store.set(VERSION, &self.version)?;
        store.set(DEFAULT_NAMESPACE, &self.default_namespace)?;
        store.set(BASE_LANGUAGE, &self.base_language)
    }
}
