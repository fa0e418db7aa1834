//! Service description, welcome and fallback handlers.

use actix_web::{HttpResponse, get};
use serde::Serialize;
use serde_json::json;

use crate::inbound::http::ApiResult;
use crate::domain::Error;

/// One row of the `GET /api` endpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// HTTP method, upper case.
    pub method: &'static str,
    /// Route pattern with `{param}` placeholders.
    pub path: &'static str,
    /// What the route does.
    pub description: &'static str,
}

const fn endpoint(method: &'static str, path: &'static str, description: &'static str) -> Endpoint {
    Endpoint {
        method,
        path,
        description,
    }
}

/// Every route served under `/api`.
pub const ENDPOINTS: &[Endpoint] = &[
    endpoint("GET", "/api", "describes every endpoint served by the api"),
    endpoint("GET", "/api/topics", "lists every topic"),
    endpoint(
        "GET",
        "/api/topics/:topic_slug/articles",
        "lists the articles filed under a topic",
    ),
    endpoint(
        "POST",
        "/api/topics/:topic_slug/articles",
        "adds an article to a topic; body {title, body}",
    ),
    endpoint("GET", "/api/articles", "lists every article"),
    endpoint("GET", "/api/articles/:article_id", "fetches one article"),
    endpoint(
        "PUT",
        "/api/articles/:article_id?vote=up|down",
        "increments or decrements an article's votes",
    ),
    endpoint(
        "GET",
        "/api/articles/:article_id/comments",
        "lists the comments on an article",
    ),
    endpoint(
        "POST",
        "/api/articles/:article_id/comments",
        "adds a comment to an article; body {comment}",
    ),
    endpoint("GET", "/api/comments", "lists every comment"),
    endpoint("GET", "/api/comments/:comment_id", "fetches one comment"),
    endpoint(
        "PUT",
        "/api/comments/:comment_id?vote=up|down",
        "increments or decrements a comment's votes",
    ),
    endpoint("DELETE", "/api/comments/:comment_id", "removes a comment"),
    endpoint("GET", "/api/users", "lists every user"),
    endpoint("GET", "/api/users/:username", "fetches one user by username"),
];

/// Describe the API.
#[get("/api")]
pub async fn describe_api() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "endpoints": ENDPOINTS }))
}

#[get("/")]
pub async fn welcome() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "msg": "welcome..." }))
}

/// Default service for anything no route matched.
pub async fn not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("page not found."))
}
