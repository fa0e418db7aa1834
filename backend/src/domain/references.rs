//! Reference builders used while seeding.
//!
//! Seed datasets refer to users by username and to articles by title. Once
//! those records are stored, these helpers map names to identities and turn
//! the remaining raw rows into storable documents.

use std::collections::HashMap;

use seed_data::{ArticleSeed, CommentSeed};
use serde_json::{Value, json};

use super::{Article, Document, DocumentId, User};
use super::seeding::SeedingError;

/// Lookup from a human key to a stored identity.
pub type ReferenceMap = HashMap<String, DocumentId>;

/// Map each username to its user's identity.
///
/// # Examples
/// ```
/// use newsdesk::domain::references::create_user_ref;
/// use newsdesk::domain::{DocumentId, User};
///
/// let user = User {
///     id: DocumentId::random(),
///     username: "jess".to_owned(),
///     name: String::new(),
///     avatar_url: String::new(),
/// };
/// let refs = create_user_ref(std::slice::from_ref(&user));
/// assert_eq!(refs.get("jess"), Some(&user.id));
/// ```
#[must_use]
pub fn create_user_ref(users: &[User]) -> ReferenceMap {
    users
        .iter()
        .map(|user| (user.username.clone(), user.id))
        .collect()
}

/// Map each article title to its article's identity.
#[must_use]
pub fn create_article_ref(articles: &[Article]) -> ReferenceMap {
    articles
        .iter()
        .map(|article| (article.title.clone(), article.id))
        .collect()
}

/// Turn raw article rows into documents: `topic` becomes `belongs_to` and
/// the author's username becomes their identity.
///
/// # Errors
/// Returns [`SeedingError::UnresolvedReference`] for an unknown author.
pub fn format_article_data(
    articles: &[ArticleSeed],
    user_ref: &ReferenceMap,
) -> Result<Vec<Document>, SeedingError> {
    articles
        .iter()
        .map(|seed| {
            let author = resolve(user_ref, "user", &seed.created_by)?;
            let mut document = Document::new();
            document.insert("title".to_owned(), json!(seed.title));
            document.insert("body".to_owned(), json!(seed.body));
            document.insert("belongs_to".to_owned(), json!(seed.topic));
            document.insert("created_by".to_owned(), Value::from(author));
            insert_optional(&mut document, seed.votes, seed.created_at.as_deref());
            Ok(document)
        })
        .collect()
}

/// Turn raw comment rows into documents: the article title and author
/// username become identities.
///
/// # Errors
/// Returns [`SeedingError::UnresolvedReference`] for an unknown article or
/// author.
pub fn format_comment_data(
    comments: &[CommentSeed],
    user_ref: &ReferenceMap,
    article_ref: &ReferenceMap,
) -> Result<Vec<Document>, SeedingError> {
    comments
        .iter()
        .map(|seed| {
            let article = resolve(article_ref, "article", &seed.belongs_to)?;
            let author = resolve(user_ref, "user", &seed.created_by)?;
            let mut document = Document::new();
            document.insert("body".to_owned(), json!(seed.body));
            document.insert("belongs_to".to_owned(), Value::from(article));
            document.insert("created_by".to_owned(), Value::from(author));
            insert_optional(&mut document, seed.votes, seed.created_at.as_deref());
            Ok(document)
        })
        .collect()
}

fn resolve(refs: &ReferenceMap, kind: &'static str, name: &str) -> Result<DocumentId, SeedingError> {
    refs.get(name)
        .copied()
        .ok_or_else(|| SeedingError::UnresolvedReference {
            kind,
            name: name.to_owned(),
        })
}

fn insert_optional(document: &mut Document, votes: Option<i64>, created_at: Option<&str>) {
    if let Some(votes) = votes {
        document.insert("votes".to_owned(), json!(votes));
    }
    if let Some(created_at) = created_at {
        document.insert("created_at".to_owned(), json!(created_at));
    }
}
