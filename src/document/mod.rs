pub mod document_model;
pub mod json_document;
pub mod provider;
