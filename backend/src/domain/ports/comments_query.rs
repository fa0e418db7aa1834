//! Driving port for comment reads.

use async_trait::async_trait;

use crate::domain::{CommentView, Error};

/// Domain use-case port for reading comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsQuery: Send + Sync {
    /// Comments on the article with identity `article_id`; empty is not found.
    async fn list_comments_by_article(&self, article_id: &str)
    -> Result<Vec<CommentView>, Error>;

    /// Every comment. An empty list is a normal result.
    async fn list_comments(&self) -> Result<Vec<CommentView>, Error>;

    /// The comment with identity `id`.
    async fn get_comment(&self, id: &str) -> Result<CommentView, Error>;
}
