//! Seed a document store from a named dataset.
//!
//! Order matters: topics and users go in first, their identities feed the
//! article rows, and stored articles feed the comment rows.

use std::sync::Arc;

use seed_data::SeedDataset;
use serde::de::DeserializeOwned;
use serde_json::json;
use thiserror::Error;

use super::ports::{DocumentStore, StoreError};
use super::references::{
    create_article_ref, create_user_ref, format_article_data, format_comment_data,
};
use super::{Article, Collection, Comment, Document, Error, Topic, User, decode};

/// Errors raised while seeding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedingError {
    /// A raw row names a record the reference map does not hold.
    #[error("{kind} '{name}' is not in the reference map")]
    UnresolvedReference {
        /// Kind of record referenced.
        kind: &'static str,
        /// The unresolved name.
        name: String,
    },
    /// The store refused a seed document.
    #[error("failed to store seed document: {0}")]
    Store(#[from] StoreError),
    /// A stored seed document could not be decoded.
    #[error("failed to decode seeded document: {0}")]
    Decode(#[from] Error),
}

/// Records inserted by a seeding run, per collection, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Inserted topics.
    pub topics: Vec<Topic>,
    /// Inserted users.
    pub users: Vec<User>,
    /// Inserted articles.
    pub articles: Vec<Article>,
    /// Inserted comments.
    pub comments: Vec<Comment>,
}

/// Inserts datasets through the [`DocumentStore`] port.
pub struct Seeder<S> {
    store: Arc<S>,
}

impl<S> Seeder<S>
where
    S: DocumentStore,
{
    /// Create a seeder writing to `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Insert every record of `dataset`.
    ///
    /// # Errors
    /// Returns [`SeedingError`] when a reference cannot be resolved or the
    /// store rejects a document.
    pub async fn seed(&self, dataset: &SeedDataset) -> Result<SeedOutcome, SeedingError> {
        let topics: Vec<Topic> = self
            .insert_all(
                Collection::Topics,
                dataset
                    .topics()
                    .iter()
                    .map(|seed| object([("slug", json!(seed.slug)), ("description", json!(seed.description))]))
                    .collect(),
            )
            .await?;

        let users: Vec<User> = self
            .insert_all(
                Collection::Users,
                dataset
                    .users()
                    .iter()
                    .map(|seed| {
                        object([
                            ("username", json!(seed.username)),
                            ("name", json!(seed.name)),
                            ("avatar_url", json!(seed.avatar_url)),
                        ])
                    })
                    .collect(),
            )
            .await?;

        let user_ref = create_user_ref(&users);
        let articles: Vec<Article> = self
            .insert_all(
                Collection::Articles,
                format_article_data(dataset.articles(), &user_ref)?,
            )
            .await?;

        let article_ref = create_article_ref(&articles);
        let comments: Vec<Comment> = self
            .insert_all(
                Collection::Comments,
                format_comment_data(dataset.comments(), &user_ref, &article_ref)?,
            )
            .await?;

        Ok(SeedOutcome {
            topics,
            users,
            articles,
            comments,
        })
    }

    async fn insert_all<T: DeserializeOwned>(
        &self,
        collection: Collection,
        documents: Vec<Document>,
    ) -> Result<Vec<T>, SeedingError> {
        let mut inserted = Vec::with_capacity(documents.len());
        for document in documents {
            let stored = self.store.create(collection, document).await?;
            inserted.push(decode(collection, stored)?);
        }
        Ok(inserted)
    }
}

fn object<const N: usize>(fields: [(&str, serde_json::Value); N]) -> Document {
    fields
        .into_iter()
        .map(|(key, value)| (key.to_owned(), value))
        .collect()
}
