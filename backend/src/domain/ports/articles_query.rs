//! Driving port for article reads.
//!
//! Every article returned here is formatted for clients: `created_by` holds
//! the author's username and `comments` the number of comments on it.

use async_trait::async_trait;

use crate::domain::{ArticleView, Error};

/// Domain use-case port for reading articles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticlesQuery: Send + Sync {
    /// Articles under the topic `slug`.
    ///
    /// An empty result is reported as not found: a scoped list cannot tell an
    /// empty topic from an unknown one.
    async fn list_articles_by_topic(&self, slug: &str) -> Result<Vec<ArticleView>, Error>;

    /// Every article. An empty list is a normal result.
    async fn list_articles(&self) -> Result<Vec<ArticleView>, Error>;

    /// The article with identity `id`.
    async fn get_article(&self, id: &str) -> Result<ArticleView, Error>;
}
