use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One operation record in the JSONL trace.
#[derive(Debug, Serialize)]
pub struct OpEvent {
    pub timestamp_ms: u128,
    pub op: String,

    pub namespace: Option<String>,
    pub item_count: Option<usize>,
    pub applied: Option<usize>,
    pub warning: Option<String>,
}

impl OpEvent {
    pub fn now(op: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap()
                .as_millis(),
            op: op.to_string(),
            namespace: None,
            item_count: None,
            applied: None,
            warning: None,
        }
    }

    pub fn with_namespace(mut self, namespace: &str) -> Self {
        if !namespace.is_empty() {
            self.namespace = Some(namespace.to_string());
        }
        self
    }

    pub fn with_items(mut self, count: usize) -> Self {
        self.item_count = Some(count);
        self
    }

    pub fn with_applied(mut self, applied: usize) -> Self {
        self.applied = Some(applied);
        self
    }

    pub fn with_warning(mut self, warning: impl ToString) -> Self {
        self.warning = Some(warning.to_string());
        self
    }
}
