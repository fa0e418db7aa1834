//! Topic HTTP handlers.
//!
//! ```text
//! GET  /api/topics
//! GET  /api/topics/{slug}/articles
//! POST /api/topics/{slug}/articles {"title":"A","body":"B"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde_json::json;

use crate::domain::NewArticle;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// List every topic.
#[get("/topics")]
pub async fn list_topics(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let topics = state.topics.list_topics().await?;
    Ok(HttpResponse::Ok().json(json!({ "topics": topics })))
}

/// List the articles filed under a topic, formatted for clients.
#[get("/topics/{slug}/articles")]
pub async fn list_articles_by_topic(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let slug = path.into_inner();
    let articles = state.articles_query.list_articles_by_topic(&slug).await?;
    Ok(HttpResponse::Ok().json(json!({ "articles": articles })))
}

/// Create an article under a topic.
///
/// A missing or unparsable body is treated as empty so the store's schema
/// decides what is missing.
#[post("/topics/{slug}/articles")]
pub async fn create_article(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: Option<web::Json<NewArticle>>,
) -> ApiResult<HttpResponse> {
    let slug = path.into_inner();
    let article = payload.map(web::Json::into_inner).unwrap_or_default();
    let created = state.articles.create_article(&slug, article).await?;
    Ok(HttpResponse::Created().json(json!({ "article": created })))
}

#[cfg(test)]
#[path = "topics_tests.rs"]
mod tests;
