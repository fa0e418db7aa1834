//! Placeholder acting-user policy: a random existing user.

use std::sync::Arc;

use async_trait::async_trait;

use super::ports::{ActingUserResolver, DocumentStore};
use super::{Collection, Error, User, decode};

/// Resolves the acting user by sampling one user from the store.
#[derive(Clone)]
pub struct RandomUserResolver<S> {
    store: Arc<S>,
}

impl<S> RandomUserResolver<S> {
    /// Create a resolver sampling from `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S> ActingUserResolver for RandomUserResolver<S>
where
    S: DocumentStore,
{
    async fn resolve_acting_user(&self) -> Result<User, Error> {
        let document = self
            .store
            .sample(Collection::Users)
            .await?
            .ok_or_else(|| Error::internal("no users available to author content"))?;
        decode(Collection::Users, document)
    }
}
