//! Articles and the payload used to create them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::document::{Document, timestamp};
use super::{DocumentId, User};

/// A stored article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Store-assigned identity.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Headline.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Vote tally; any integer.
    pub votes: i64,
    /// Slug of the owning topic.
    pub belongs_to: String,
    /// Identity of the author.
    pub created_by: DocumentId,
    /// Creation instant.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for a new article.
///
/// Both fields are optional here; the store's schema decides whether a
/// missing or empty value is acceptable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewArticle {
    /// Headline.
    #[serde(default)]
    pub title: Option<String>,
    /// Body text.
    #[serde(default)]
    pub body: Option<String>,
}

impl NewArticle {
    /// Document to hand to the store for topic `slug` and author `author`.
    #[must_use]
    pub fn into_document(self, slug: &str, author: &User) -> Document {
        let mut document = Document::new();
        document.insert("title".to_owned(), self.title.map_or(Value::Null, Value::String));
        document.insert("body".to_owned(), self.body.map_or(Value::Null, Value::String));
        document.insert("belongs_to".to_owned(), json!(slug));
        document.insert("created_by".to_owned(), Value::from(author.id));
        document
    }
}
