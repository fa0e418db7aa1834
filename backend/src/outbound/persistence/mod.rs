//! Persistence adapters for the [`DocumentStore`] port.
//!
//! [`DocumentStore`]: crate::domain::ports::DocumentStore

mod in_memory_document_store;

pub use in_memory_document_store::InMemoryDocumentStore;
