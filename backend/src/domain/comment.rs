//! Comments and the payload used to create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::document::{Document, timestamp};
use super::{DocumentId, User};

/// A stored comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Store-assigned identity.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Comment text.
    pub body: String,
    /// Vote tally; any integer.
    pub votes: i64,
    /// Identity of the article commented on.
    pub belongs_to: DocumentId,
    /// Identity of the author.
    pub created_by: DocumentId,
    /// Creation instant.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for a new comment: `{ "comment": "..." }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewComment {
    /// Comment text, stored as the comment's `body`.
    #[serde(default)]
    pub comment: Option<String>,
}

impl NewComment {
    /// Document to hand to the store for article `article` and author `author`.
    #[must_use]
    pub fn into_document(self, article: DocumentId, author: &User) -> Document {
        let mut document = Document::new();
        document.insert("body".to_owned(), self.comment.map_or(Value::Null, Value::String));
        document.insert("belongs_to".to_owned(), Value::from(article));
        document.insert("created_by".to_owned(), Value::from(author.id));
        document
    }
}
