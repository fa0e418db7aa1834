//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    ArticlesCommand, ArticlesQuery, CommentsCommand, CommentsQuery, TopicsQuery, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Topic reads.
    pub topics: Arc<dyn TopicsQuery>,
    /// Article reads, scoped or global.
    pub articles_query: Arc<dyn ArticlesQuery>,
    /// Article creation and voting.
    pub articles: Arc<dyn ArticlesCommand>,
    /// Comment reads.
    pub comments_query: Arc<dyn CommentsQuery>,
    /// Comment creation, voting and removal.
    pub comments: Arc<dyn CommentsCommand>,
    /// User reads.
    pub users: Arc<dyn UsersQuery>,
}

impl HttpState {
    /// Build state where one service implements every port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use newsdesk::domain::{NewsService, RandomUserResolver};
    /// use newsdesk::inbound::http::state::HttpState;
    /// use newsdesk::outbound::persistence::InMemoryDocumentStore;
    ///
    /// let store = Arc::new(InMemoryDocumentStore::new());
    /// let resolver = Arc::new(RandomUserResolver::new(store.clone()));
    /// let state = HttpState::from_service(Arc::new(NewsService::new(store, resolver)));
    /// let _topics = state.topics.clone();
    /// ```
    pub fn from_service<T>(service: Arc<T>) -> Self
    where
        T: TopicsQuery
            + ArticlesQuery
            + ArticlesCommand
            + CommentsQuery
            + CommentsCommand
            + UsersQuery
            + 'static,
    {
        Self {
            topics: service.clone(),
            articles_query: service.clone(),
            articles: service.clone(),
            comments_query: service.clone(),
            comments: service.clone(),
            users: service,
        }
    }
}
