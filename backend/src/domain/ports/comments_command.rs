//! Driving port for comment mutations.

use async_trait::async_trait;

use crate::domain::{Comment, Error, NewComment, Vote};

/// Domain use-case port for creating, voting on and deleting comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentsCommand: Send + Sync {
    /// Create a comment on the article with identity `article_id`, authored
    /// by the acting user.
    async fn create_comment(&self, article_id: &str, comment: NewComment)
    -> Result<Comment, Error>;

    /// Apply `vote` to the comment with identity `id`.
    async fn vote_comment(&self, id: &str, vote: Vote) -> Result<Comment, Error>;

    /// Delete the comment with identity `id`, returning its prior state.
    async fn delete_comment(&self, id: &str) -> Result<Comment, Error>;
}
