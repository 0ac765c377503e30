pub mod cli;
pub mod document;
pub mod error;
pub mod keys;
pub mod ops;
pub mod persist;
pub mod remote;
pub mod selection;
pub mod sync;
pub mod trace;

pub use crate::document::document_model::{DocumentNode, DocumentSnapshot, FontRef, NodeKind};
pub use crate::document::json_document::JsonDocument;
pub use crate::document::provider::DocumentProvider;
pub use crate::error::SyncError;
pub use crate::keys::scan_model::{KeyOutcome, ScanItem, ScanResponse};
pub use crate::sync::flatten::TranslationMap;
