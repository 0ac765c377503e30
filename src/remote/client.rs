use serde::Deserialize;
use serde_json::Value;

use crate::error::SyncError;
use crate::persist::settings::StoreSettings;
use crate::sync::flatten::{TranslationMap, flatten_translations};

/// Response from the store's namespace listing endpoint.
#[derive(Debug, Deserialize)]
struct NamespacesResponse {
    namespaces: Vec<String>,
}

/// Blocking client for the remote translation store.
///
/// Fetches key→string maps per namespace and language, and lists the
/// namespaces the store knows about. Authentication is the project write
/// key sent as an API-key header.
pub struct StoreClient {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
}

impl StoreClient {
    pub fn new(endpoint: &str, project_id: &str, api_key: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            project_id: project_id.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Build a client from persisted settings; fails when the project has
    /// not been configured yet.
    pub fn from_settings(endpoint: &str, settings: &StoreSettings) -> Result<Self, SyncError> {
        if settings.project_id.is_empty() {
            return Err(SyncError::MissingSetting("project_id".to_string()));
        }
        if settings.write_key.is_empty() {
            return Err(SyncError::MissingSetting("write_key".to_string()));
        }
        Ok(Self::new(
            endpoint,
            &settings.project_id,
            &settings.write_key,
        ))
    }

    /// Fetch the translation map for one namespace and language, flattened
    /// to dotted keys. An empty namespace fetches the default namespace.
    pub fn fetch_translations(
        &self,
        namespace: &str,
        language: &str,
    ) -> Result<TranslationMap, SyncError> {
        let mut url = format!(
            "{}/projects/{}/translations/{}",
            self.endpoint, self.project_id, language
        );
        if !namespace.is_empty() {
            url.push_str(&format!("?ns={}", namespace));
        }

        let client = reqwest::blocking::Client::new();
        let response = client
            .get(&url)
            .header("X-API-Key", &self.api_key)
            .send()
            .map_err(|e| SyncError::HttpRequest {
                context: format!("fetch translations for '{}'", language),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(SyncError::StoreProtocol {
                context: format!("fetch translations for '{}'", language),
                error: format!("HTTP {}", response.status()),
            });
        }

        let payload: Value = response.json().map_err(|e| SyncError::HttpRequest {
            context: "decode translations payload".to_string(),
            source: e,
        })?;

        Ok(flatten_translations(&payload))
    }

    /// List the namespaces the store has for this project.
    pub fn list_namespaces(&self) -> Result<Vec<String>, SyncError> {
        let url = format!("{}/projects/{}/namespaces", self.endpoint, self.project_id);

        let client = reqwest::blocking::Client::new();
        let response = client
            .get(&url)
            .header("X-API-Key", &self.api_key)
            .send()
            .map_err(|e| SyncError::HttpRequest {
                context: "list namespaces".to_string(),
                source: e,
            })?;

        if !response.status().is_success() {
            return Err(SyncError::StoreProtocol {
                context: "list namespaces".to_string(),
                error: format!("HTTP {}", response.status()),
            });
        }

        let parsed: NamespacesResponse = response.json().map_err(|e| SyncError::HttpRequest {
            context: "decode namespaces payload".to_string(),
            source: e,
        })?;

        let mut namespaces = parsed.namespaces;
        namespaces.sort();
        Ok(namespaces)
    }
}
