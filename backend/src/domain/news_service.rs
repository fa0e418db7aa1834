//! News domain service.
//!
//! Implements every driving port on top of the [`DocumentStore`] and
//! [`ActingUserResolver`] driven ports. Each operation is one best-effort
//! pass: validate the parent, query, format. Failures are returned as
//! [`Error`] and classified by the inbound adapter.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::formatting::{format_articles_for_client, format_comments_for_client, populate_authors};
use super::ports::{
    ActingUserResolver, ArticlesCommand, ArticlesQuery, CommentsCommand, CommentsQuery,
    DocumentStore, TopicsQuery, UsersQuery,
};
use super::{
    Article, ArticleView, Collection, Comment, CommentView, Error, Filter, Increment, NewArticle,
    NewComment, Topic, User, Vote, decode,
};

const ARTICLES_BY_TOPIC_NOT_FOUND: &str = "articles not found: invalid topic name.";
const TOPIC_NOT_FOUND: &str = "topic not found: invalid topic name.";
const ARTICLE_NOT_FOUND: &str = "article not found: invalid article id.";
const COMMENTS_NOT_FOUND: &str = "comments not found: invalid article id.";
const COMMENT_NOT_FOUND: &str = "comment not found: invalid comment id.";
const USER_NOT_FOUND: &str = "user not found: invalid username.";

/// Service implementing the topic, article, comment and user ports.
#[derive(Clone)]
pub struct NewsService<S, R> {
    store: Arc<S>,
    acting_user: Arc<R>,
}

impl<S, R> NewsService<S, R> {
    /// Create a new service over the given store and acting-user resolver.
    pub fn new(store: Arc<S>, acting_user: Arc<R>) -> Self {
        Self { store, acting_user }
    }
}

impl<S, R> NewsService<S, R>
where
    S: DocumentStore,
    R: ActingUserResolver,
{
    async fn find<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<T>, Error> {
        self.store
            .find(collection, filter)
            .await?
            .into_iter()
            .map(|document| decode(collection, document))
            .collect()
    }

    async fn find_by_id<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &str,
    ) -> Result<Option<T>, Error> {
        self.store
            .find_by_id(collection, id)
            .await?
            .map(|document| decode(collection, document))
            .transpose()
    }

    async fn vote<T: DeserializeOwned>(
        &self,
        collection: Collection,
        id: &str,
        vote: Vote,
        not_found: &str,
    ) -> Result<T, Error> {
        let updated = self
            .store
            .update_by_id(collection, id, &Increment::votes(vote.delta()))
            .await?
            .ok_or_else(|| Error::not_found(not_found))?;
        decode(collection, updated)
    }

    async fn format_articles(&self, articles: Vec<Article>) -> Result<Vec<ArticleView>, Error> {
        let joined = populate_authors(self.store.as_ref(), articles, |a: &Article| a.created_by).await?;
        format_articles_for_client(self.store.as_ref(), joined).await
    }

    async fn format_comments(&self, comments: Vec<Comment>) -> Result<Vec<CommentView>, Error> {
        let joined = populate_authors(self.store.as_ref(), comments, |c: &Comment| c.created_by).await?;
        Ok(format_comments_for_client(joined))
    }
}

fn single<T>(mut items: Vec<T>) -> Result<T, Error> {
    items
        .pop()
        .ok_or_else(|| Error::internal("formatting dropped a single record"))
}

#[async_trait]
impl<S, R> TopicsQuery for NewsService<S, R>
where
    S: DocumentStore,
    R: ActingUserResolver,
{
    async fn list_topics(&self) -> Result<Vec<Topic>, Error> {
        self.find(Collection::Topics, &Filter::all()).await
    }
}

#[async_trait]
impl<S, R> ArticlesQuery for NewsService<S, R>
where
    S: DocumentStore,
    R: ActingUserResolver,
{
    async fn list_articles_by_topic(&self, slug: &str) -> Result<Vec<ArticleView>, Error> {
        let articles = self
            .find(Collection::Articles, &Filter::all().eq("belongs_to", slug))
            .await?;
        let views = self.format_articles(articles).await?;
        if views.is_empty() {
            return Err(Error::not_found(ARTICLES_BY_TOPIC_NOT_FOUND));
        }
        Ok(views)
    }

    async fn list_articles(&self) -> Result<Vec<ArticleView>, Error> {
        let articles = self.find(Collection::Articles, &Filter::all()).await?;
        self.format_articles(articles).await
    }

    async fn get_article(&self, id: &str) -> Result<ArticleView, Error> {
        let article: Article = self
            .find_by_id(Collection::Articles, id)
            .await?
            .ok_or_else(|| Error::not_found(ARTICLE_NOT_FOUND))?;
        single(self.format_articles(vec![article]).await?)
    }
}

#[async_trait]
impl<S, R> ArticlesCommand for NewsService<S, R>
where
    S: DocumentStore,
    R: ActingUserResolver,
{
    async fn create_article(&self, slug: &str, article: NewArticle) -> Result<Article, Error> {
        let topics = self
            .store
            .find(Collection::Topics, &Filter::all().eq("slug", slug))
            .await?;
        if topics.is_empty() {
            return Err(Error::not_found(TOPIC_NOT_FOUND));
        }

        let author = self.acting_user.resolve_acting_user().await?;
        let stored = self
            .store
            .create(Collection::Articles, article.into_document(slug, &author))
            .await?;
        decode(Collection::Articles, stored)
    }

    async fn vote_article(&self, id: &str, vote: Vote) -> Result<Article, Error> {
        self.vote(Collection::Articles, id, vote, ARTICLE_NOT_FOUND)
            .await
    }
}

#[async_trait]
impl<S, R> CommentsQuery for NewsService<S, R>
where
    S: DocumentStore,
    R: ActingUserResolver,
{
    async fn list_comments_by_article(
        &self,
        article_id: &str,
    ) -> Result<Vec<CommentView>, Error> {
        let comments = self
            .find(
                Collection::Comments,
                &Filter::all().eq("belongs_to", article_id),
            )
            .await?;
        if comments.is_empty() {
            return Err(Error::not_found(COMMENTS_NOT_FOUND));
        }
        self.format_comments(comments).await
    }

    async fn list_comments(&self) -> Result<Vec<CommentView>, Error> {
        let comments = self.find(Collection::Comments, &Filter::all()).await?;
        self.format_comments(comments).await
    }

    async fn get_comment(&self, id: &str) -> Result<CommentView, Error> {
        let comment: Comment = self
            .find_by_id(Collection::Comments, id)
            .await?
            .ok_or_else(|| Error::not_found(COMMENT_NOT_FOUND))?;
        single(self.format_comments(vec![comment]).await?)
    }
}

#[async_trait]
impl<S, R> CommentsCommand for NewsService<S, R>
where
    S: DocumentStore,
    R: ActingUserResolver,
{
    async fn create_comment(
        &self,
        article_id: &str,
        comment: NewComment,
    ) -> Result<Comment, Error> {
        let article: Article = self
            .find_by_id(Collection::Articles, article_id)
            .await?
            .ok_or_else(|| Error::not_found(ARTICLE_NOT_FOUND))?;

        let author = self.acting_user.resolve_acting_user().await?;
        let stored = self
            .store
            .create(Collection::Comments, comment.into_document(article.id, &author))
            .await?;
        decode(Collection::Comments, stored)
    }

    async fn vote_comment(&self, id: &str, vote: Vote) -> Result<Comment, Error> {
        self.vote(Collection::Comments, id, vote, COMMENT_NOT_FOUND)
            .await
    }

    async fn delete_comment(&self, id: &str) -> Result<Comment, Error> {
        let removed = self
            .store
            .delete_by_id(Collection::Comments, id)
            .await?
            .ok_or_else(|| Error::not_found(COMMENT_NOT_FOUND))?;
        decode(Collection::Comments, removed)
    }
}

#[async_trait]
impl<S, R> UsersQuery for NewsService<S, R>
where
    S: DocumentStore,
    R: ActingUserResolver,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.find(Collection::Users, &Filter::all()).await
    }

    async fn get_user(&self, username: &str) -> Result<User, Error> {
        self.find::<User>(Collection::Users, &Filter::all().eq("username", username))
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[cfg(test)]
#[path = "news_service_tests.rs"]
mod tests;
