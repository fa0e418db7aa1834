//! Article HTTP handlers.
//!
//! ```text
//! GET  /api/articles
//! GET  /api/articles/{id}
//! PUT  /api/articles/{id}?vote=up|down
//! GET  /api/articles/{id}/comments
//! POST /api/articles/{id}/comments {"comment":"..."}
//! ```

use actix_web::{HttpResponse, get, post, put, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{NewComment, Vote};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query string accepted by vote endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct VoteQuery {
    /// Raw `vote` parameter, usually `up` or `down`.
    pub vote: Option<String>,
}

impl VoteQuery {
    /// Interpret the `vote` parameter.
    #[must_use]
    pub fn vote(&self) -> Vote {
        Vote::from_query(self.vote.as_deref())
    }

    /// Vote carried by an extracted query string.
    ///
    /// A query that failed to deserialise, such as a repeated `vote`, is
    /// unrecognised and left for the store to reject.
    #[must_use]
    pub fn vote_from(query: Option<&web::Query<Self>>) -> Vote {
        query.map_or(Vote::Unrecognised, |query| query.vote())
    }
}

/// List every article, formatted for clients.
#[get("/articles")]
pub async fn list_articles(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let articles = state.articles_query.list_articles().await?;
    Ok(HttpResponse::Ok().json(json!({ "articles": articles })))
}

/// Fetch one article, formatted for clients.
#[get("/articles/{id}")]
pub async fn get_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let article = state.articles_query.get_article(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "article": article })))
}

/// Apply an up or down vote to an article.
#[put("/articles/{id}")]
pub async fn vote_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: Option<web::Query<VoteQuery>>,
) -> ApiResult<HttpResponse> {
    let article = state
        .articles
        .vote_article(&path.into_inner(), VoteQuery::vote_from(query.as_ref()))
        .await?;
    Ok(HttpResponse::Accepted().json(json!({ "article": article })))
}

/// List the comments on an article, formatted for clients.
#[get("/articles/{id}/comments")]
pub async fn list_comments_by_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let comments = state
        .comments_query
        .list_comments_by_article(&path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(json!({ "comments": comments })))
}

/// Post a comment on an article.
#[post("/articles/{id}/comments")]
pub async fn create_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Option<web::Json<NewComment>>,
) -> ApiResult<HttpResponse> {
    let comment = payload.map(web::Json::into_inner).unwrap_or_default();
    let created = state
        .comments
        .create_comment(&path.into_inner(), comment)
        .await?;
    Ok(HttpResponse::Created().json(json!({ "comment": created })))
}

#[cfg(test)]
#[path = "articles_tests.rs"]
mod tests;
