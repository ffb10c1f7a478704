//! MySQL implementations of the core repository traits

pub mod document_store;

pub use document_store::MySqlDocumentStore;
