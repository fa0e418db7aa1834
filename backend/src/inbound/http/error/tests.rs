//! Tests for HTTP error mapping.

use super::*;
use actix_web::ResponseError;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

use crate::domain::TraceId;

async fn body_of(error: &Error) -> Value {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error JSON deserialisation succeeds")
}

#[rstest]
#[case(Error::not_found("topic not found: invalid topic name."), StatusCode::NOT_FOUND)]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(
    Error::Store(StoreError::validation("articles validation failed: title: Path `title` is required.")),
    StatusCode::BAD_REQUEST
)]
#[case(Error::Store(StoreError::cast("articles", "id", "x")), StatusCode::BAD_REQUEST)]
#[case(
    Error::Store(StoreError::rejected("Cannot increment with non-numeric argument: {votes: null}")),
    StatusCode::BAD_REQUEST
)]
#[case(Error::Store(StoreError::unavailable("down")), StatusCode::INTERNAL_SERVER_ERROR)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_follows_classification(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
    assert_eq!(classify(&error).status, status);
}

#[rstest]
#[actix_web::test]
async fn explicit_messages_pass_through_verbatim() {
    let error = Error::not_found("article not found: invalid article id.");
    assert_eq!(
        body_of(&error).await,
        json!({ "msg": "article not found: invalid article id." })
    );
}

#[rstest]
#[actix_web::test]
async fn cast_failures_name_the_collection() {
    let error = Error::Store(StoreError::cast("comments", "id", "not-an-id"));
    assert_eq!(
        body_of(&error).await,
        json!({ "msg": "comments not found: invalid id." })
    );
}

#[rstest]
#[actix_web::test]
async fn internal_detail_is_redacted() {
    let error = TraceId::scope(TraceId::generate(), async { Error::internal("secret detail") }).await;
    assert!(error.trace_id().is_some());
    let body = body_of(&error).await;
    assert_eq!(body, json!({ "msg": INTERNAL_SERVER_ERROR_MSG }));
}

#[rstest]
fn unavailable_store_is_not_a_client_failure() {
    let error = Error::Store(StoreError::unavailable("store lock poisoned"));
    assert_eq!(
        classify(&error),
        Classified::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MSG)
    );
}

#[rstest]
#[tokio::test]
async fn store_failures_log_the_request_trace_id() {
    let expected = TraceId::generate();
    let observed = TraceId::scope(expected, async {
        logged_trace_id(&Error::Store(StoreError::unavailable("store lock poisoned")))
    })
    .await;
    assert_eq!(observed, Some(expected));
}

#[rstest]
fn store_failures_outside_a_request_have_no_trace_id() {
    assert!(logged_trace_id(&Error::Store(StoreError::unavailable("down"))).is_none());
}
