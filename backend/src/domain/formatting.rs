//! Client-facing projections of articles and comments.
//!
//! Stored records reference their author by identity. Before anything reaches
//! a client the author is joined in ([`populate_authors`]) and `created_by`
//! is replaced by the author's username. Articles additionally gain a
//! `comments` count, one count query per article issued concurrently.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use futures_util::future::try_join_all;
use serde::Serialize;

use super::document::timestamp;
use super::ports::DocumentStore;
use super::{Article, Collection, Comment, DocumentId, Error, Filter, User, decode};

/// Article as returned by list and get operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleView {
    /// Store-assigned identity.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Headline.
    pub title: String,
    /// Body text.
    pub body: String,
    /// Vote tally.
    pub votes: i64,
    /// Slug of the owning topic.
    pub belongs_to: String,
    /// Author's username.
    pub created_by: String,
    /// Creation instant.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Number of comments on the article.
    pub comments: u64,
}

impl ArticleView {
    fn new(article: Article, author: &User, comments: u64) -> Self {
        let Article {
            id,
            title,
            body,
            votes,
            belongs_to,
            created_by: _,
            created_at,
        } = article;
        Self {
            id,
            title,
            body,
            votes,
            belongs_to,
            created_by: author.username.clone(),
            created_at,
            comments,
        }
    }
}

/// Comment as returned by list and get operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    /// Store-assigned identity.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Comment text.
    pub body: String,
    /// Vote tally.
    pub votes: i64,
    /// Identity of the article commented on.
    pub belongs_to: DocumentId,
    /// Author's username.
    pub created_by: String,
    /// Creation instant.
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
}

impl CommentView {
    fn new(comment: Comment, author: &User) -> Self {
        let Comment {
            id,
            body,
            votes,
            belongs_to,
            created_by: _,
            created_at,
        } = comment;
        Self {
            id,
            body,
            votes,
            belongs_to,
            created_by: author.username.clone(),
            created_at,
        }
    }
}

/// Join each record with its author.
///
/// Distinct authors are fetched concurrently. Output order matches input
/// order.
///
/// # Errors
/// Store failures propagate. An author that cannot be found is an internal
/// error: `created_by` is only ever written from an existing user.
pub async fn populate_authors<S, T, F>(
    store: &S,
    records: Vec<T>,
    author_of: F,
) -> Result<Vec<(T, User)>, Error>
where
    S: DocumentStore + ?Sized,
    F: Fn(&T) -> DocumentId,
{
    let mut seen = HashSet::new();
    let ids: Vec<DocumentId> = records
        .iter()
        .map(&author_of)
        .filter(|id| seen.insert(*id))
        .collect();

    let keys: Vec<String> = ids.iter().map(ToString::to_string).collect();
    let found = try_join_all(
        keys.iter()
            .map(|key| store.find_by_id(Collection::Users, key)),
    )
    .await?;

    let mut authors = HashMap::with_capacity(ids.len());
    for (id, document) in ids.into_iter().zip(found) {
        let document =
            document.ok_or_else(|| Error::internal(format!("author {id} could not be resolved")))?;
        authors.insert(id, decode::<User>(Collection::Users, document)?);
    }

    records
        .into_iter()
        .map(|record| {
            let id = author_of(&record);
            authors
                .get(&id)
                .cloned()
                .map(|author| (record, author))
                .ok_or_else(|| Error::internal(format!("author {id} could not be resolved")))
        })
        .collect()
}

/// Project articles for clients, counting comments concurrently.
///
/// # Errors
/// Propagates the first failed count query.
pub async fn format_articles_for_client<S>(
    store: &S,
    articles: Vec<(Article, User)>,
) -> Result<Vec<ArticleView>, Error>
where
    S: DocumentStore + ?Sized,
{
    let filters: Vec<Filter> = articles
        .iter()
        .map(|(article, _)| Filter::all().eq("belongs_to", article.id))
        .collect();
    let counts = try_join_all(
        filters
            .iter()
            .map(|filter| store.count(Collection::Comments, filter)),
    )
    .await?;

    Ok(articles
        .into_iter()
        .zip(counts)
        .map(|((article, author), comments)| ArticleView::new(article, &author, comments))
        .collect())
}

/// Project comments for clients.
#[must_use]
pub fn format_comments_for_client(comments: Vec<(Comment, User)>) -> Vec<CommentView> {
    comments
        .into_iter()
        .map(|(comment, author)| CommentView::new(comment, &author))
        .collect()
}
