//! In-process `DocumentStore` adapter.
//!
//! Collections are insertion-ordered vectors behind a single
//! [`RwLock`]; every call takes the lock once, so each operation is
//! atomic with respect to the others.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use serde_json::Value;
use tracing::error;

use crate::domain::document::ID_FIELD;
use crate::domain::ports::{DocumentStore, StoreError};
use crate::domain::{Collection, Document, DocumentId, Filter, Increment};

type Collections = HashMap<Collection, Vec<Document>>;

/// Document store held entirely in memory.
#[derive(Debug, Default)]
pub struct InMemoryDocumentStore {
    collections: RwLock<Collections>,
}

impl InMemoryDocumentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every document in every collection.
    ///
    /// # Errors
    /// Returns [`StoreError::Unavailable`] when the lock is poisoned.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.write(Collections::clear)
    }

    fn read<T>(&self, f: impl FnOnce(&Collections) -> T) -> Result<T, StoreError> {
        let guard = self.collections.read().map_err(poisoned)?;
        Ok(f(&guard))
    }

    fn write<T>(&self, f: impl FnOnce(&mut Collections) -> T) -> Result<T, StoreError> {
        let mut guard = self.collections.write().map_err(poisoned)?;
        Ok(f(&mut guard))
    }
}

fn poisoned<T>(_: PoisonError<T>) -> StoreError {
    error!("in-memory document store lock poisoned");
    StoreError::unavailable("store lock poisoned")
}

fn has_id(document: &Document, id: DocumentId) -> bool {
    document.get(ID_FIELD) == Some(&Value::from(id))
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn find(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<Document>, StoreError> {
        let filter = collection.cast_filter(filter)?;
        self.read(|collections| {
            collections
                .get(&collection)
                .map(|documents| {
                    documents
                        .iter()
                        .filter(|document| filter.matches(document))
                        .cloned()
                        .collect()
                })
                .unwrap_or_default()
        })
    }

    async fn find_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let id = collection.cast_id(id)?;
        self.read(|collections| {
            collections
                .get(&collection)
                .and_then(|documents| documents.iter().find(|document| has_id(document, id)))
                .cloned()
        })
    }

    async fn create(
        &self,
        collection: Collection,
        document: Document,
    ) -> Result<Document, StoreError> {
        let mut stored = collection.conform(&document, Utc::now())?;
        stored.insert(ID_FIELD.to_owned(), Value::from(DocumentId::random()));
        self.write(|collections| {
            collections
                .entry(collection)
                .or_default()
                .push(stored.clone());
        })?;
        Ok(stored)
    }

    async fn update_by_id(
        &self,
        collection: Collection,
        id: &str,
        update: &Increment,
    ) -> Result<Option<Document>, StoreError> {
        let id = collection.cast_id(id)?;
        update.validate()?;
        self.write(|collections| {
            let Some(document) = collections
                .get_mut(&collection)
                .and_then(|documents| documents.iter_mut().find(|document| has_id(document, id)))
            else {
                return Ok(None);
            };
            let mut updated = document.clone();
            update.apply(&mut updated)?;
            *document = updated.clone();
            Ok(Some(updated))
        })?
    }

    async fn delete_by_id(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<Document>, StoreError> {
        let id = collection.cast_id(id)?;
        self.write(|collections| {
            let documents = collections.get_mut(&collection)?;
            let index = documents.iter().position(|document| has_id(document, id))?;
            Some(documents.remove(index))
        })
    }

    async fn count(&self, collection: Collection, filter: &Filter) -> Result<u64, StoreError> {
        let filter = collection.cast_filter(filter)?;
        self.read(|collections| {
            collections.get(&collection).map_or(0, |documents| {
                documents
                    .iter()
                    .filter(|document| filter.matches(document))
                    .count() as u64
            })
        })
    }

    async fn sample(&self, collection: Collection) -> Result<Option<Document>, StoreError> {
        self.read(|collections| {
            collections
                .get(&collection)
                .and_then(|documents| documents.choose(&mut rand::thread_rng()))
                .cloned()
        })
    }
}
