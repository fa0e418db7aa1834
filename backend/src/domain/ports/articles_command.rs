//! Driving port for article mutations.
//!
//! Results are returned as stored, without author-name substitution.

use async_trait::async_trait;

use crate::domain::{Article, Error, NewArticle, Vote};

/// Domain use-case port for creating and voting on articles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticlesCommand: Send + Sync {
    /// Create an article under the topic `slug`, authored by the acting user.
    async fn create_article(&self, slug: &str, article: NewArticle) -> Result<Article, Error>;

    /// Apply `vote` to the article with identity `id`.
    async fn vote_article(&self, id: &str, vote: Vote) -> Result<Article, Error>;
}
