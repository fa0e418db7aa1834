//! Driven port for the document store.
//!
//! The domain consumes storage through seven operations. Identities arrive as
//! raw strings: deciding whether a string is a well-formed identity is the
//! store's job, and a malformed one is reported as [`StoreError::Cast`]
//! naming the collection that was queried.

use async_trait::async_trait;

use crate::domain::{Collection, Document, Filter, Increment};

use super::define_port_error;

define_port_error! {
    /// Errors raised by document store adapters.
    pub enum StoreError {
        /// A create violated the collection schema.
        Validation { message: String } => "{message}",
        /// An identity argument was not in the store's identity shape.
        Cast { collection: String, kind: String, value: String } =>
            "{collection} not found: invalid {kind}.",
        /// The store refused an operation on otherwise valid input.
        Rejected { message: String } => "{message}",
        /// The store could not serve the request at all.
        Unavailable { message: String } => "document store unavailable: {message}",
    }
}

/// Port for querying and mutating documents.
///
/// Lists preserve insertion order. Single-document operations return
/// `Ok(None)` when a well-formed identity matches nothing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Documents in `collection` matching `filter`.
    async fn find(&self, collection: Collection, filter: &Filter)
    -> Result<Vec<Document>, StoreError>;

    /// Document with identity `id`.
    async fn find_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Validate `document` against the collection schema, assign an identity
    /// and persist it. Returns the document as stored.
    async fn create(&self, collection: Collection, document: Document)
    -> Result<Document, StoreError>;

    /// Atomically apply `update` to the document with identity `id`,
    /// returning the updated document.
    async fn update_by_id(
        &self,
        collection: Collection,
        id: &str,
        update: &Increment,
    ) -> Result<Option<Document>, StoreError>;

    /// Remove the document with identity `id`, returning its prior state.
    async fn delete_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError>;

    /// Number of documents in `collection` matching `filter`.
    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, StoreError>;

    /// One document picked uniformly at random, or `None` when empty.
    async fn sample(&self, collection: Collection) -> Result<Option<Document>, StoreError>;
}
