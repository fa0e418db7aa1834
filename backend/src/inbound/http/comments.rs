//! Comment HTTP handlers.

use actix_web::{HttpResponse, delete, get, put, web};
use serde_json::json;

use crate::inbound::http::ApiResult;
use crate::inbound::http::articles::VoteQuery;
use crate::inbound::http::state::HttpState;

/// List every comment, formatted for clients.
#[get("/comments")]
pub async fn list_comments(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let comments = state.comments_query.list_comments().await?;
    Ok(HttpResponse::Ok().json(json!({ "comments": comments })))
}

/// Fetch one comment, formatted for clients.
#[get("/comments/{id}")]
pub async fn get_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let comment = state.comments_query.get_comment(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "comment": comment })))
}

/// Apply an up or down vote to a comment.
#[put("/comments/{id}")]
pub async fn vote_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: Option<web::Query<VoteQuery>>,
) -> ApiResult<HttpResponse> {
    let comment = state
        .comments
        .vote_comment(&path.into_inner(), VoteQuery::vote_from(query.as_ref()))
        .await?;
    Ok(HttpResponse::Accepted().json(json!({ "comment": comment })))
}

/// Remove a comment, echoing the removed document.
#[delete("/comments/{id}")]
pub async fn delete_comment(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let removed = state.comments.delete_comment(&path.into_inner()).await?;
    Ok(HttpResponse::Accepted().json(json!({ "comment": removed })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Comment, DocumentId, Error, Vote};
    use crate::inbound::http::test_utils::{MockPorts, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use chrono::Utc;
    use serde_json::Value;

    fn comment(votes: i64) -> Comment {
        Comment {
            id: DocumentId::random(),
            body: "nice".to_owned(),
            votes,
            belongs_to: DocumentId::random(),
            created_by: DocumentId::random(),
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn vote_forwards_the_parsed_direction() {
        let mut ports = MockPorts::default();
        ports
            .comments
            .expect_vote_comment()
            .withf(|id, vote| id == "abc" && *vote == Vote::Down)
            .return_once(|_, _| Ok(comment(-1)));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/api/comments/abc?vote=down")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::ACCEPTED);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body.pointer("/comment/votes"), Some(&Value::from(-1)));
    }

    #[actix_web::test]
    async fn delete_of_missing_comment_is_not_found() {
        let mut ports = MockPorts::default();
        ports
            .comments
            .expect_delete_comment()
            .return_once(|_| Err(Error::not_found("comment not found: invalid comment id.")));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/comments/abc")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body.get("msg").and_then(Value::as_str),
            Some("comment not found: invalid comment id.")
        );
    }
}
