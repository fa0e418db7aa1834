//! End-to-end HTTP tests against a seeded in-memory store.

mod support;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use newsdesk::domain::{Article, Collection, DocumentId, Filter};
use newsdesk::domain::ports::DocumentStore;
use rstest::rstest;
use seed_data::SeedDataset;
use serde_json::{Value, json};

use support::{Seeded, init_app, msg, seed, seed_test_dataset, send};

fn first_article(seeded: &Seeded) -> &Article {
    seeded.outcome.articles.first().expect("seeded article")
}

fn id_of(value: &Value) -> &str {
    value
        .get("_id")
        .and_then(Value::as_str)
        .expect("document carries _id")
}

fn list<'a>(body: &'a Value, key: &str) -> &'a Vec<Value> {
    body.get(key).and_then(Value::as_array).expect("list envelope")
}

#[rstest]
#[actix_web::test]
async fn topic_listing_follows_the_scoped_list_rule() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;

    for topic in &seeded.outcome.topics {
        let (status, body) = send(
            &app,
            TestRequest::get().uri(&format!("/api/topics/{}/articles", topic.slug)),
        )
        .await;
        let expected: Vec<&Article> = seeded
            .outcome
            .articles
            .iter()
            .filter(|article| article.belongs_to == topic.slug)
            .collect();

        if expected.is_empty() {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(msg(&body), "articles not found: invalid topic name.");
            continue;
        }

        assert_eq!(status, StatusCode::OK);
        let listed = list(&body, "articles");
        assert_eq!(listed.len(), expected.len());
        for (view, article) in listed.iter().zip(expected) {
            assert_eq!(id_of(view), article.id.to_string());
            let comment_count = seeded
                .outcome
                .comments
                .iter()
                .filter(|comment| comment.belongs_to == article.id)
                .count();
            assert_eq!(view.get("comments"), Some(&json!(comment_count)));
        }
    }
}

#[rstest]
#[actix_web::test]
async fn up_then_down_vote_is_net_zero() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let article = first_article(&seeded);
    let uri = format!("/api/articles/{}", article.id);

    let (status, body) = send(&app, TestRequest::put().uri(&format!("{uri}?vote=up"))).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body.pointer("/article/votes"), Some(&json!(article.votes + 1)));

    let (status, body) = send(&app, TestRequest::put().uri(&format!("{uri}?vote=down"))).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body.pointer("/article/votes"), Some(&json!(article.votes)));
}

#[rstest]
#[case("/api/articles", "vote=invalid")]
#[case("/api/comments", "vote=invalid")]
#[case("/api/articles", "vote=up&vote=down")]
#[case("/api/comments", "vote=up&vote=down")]
#[actix_web::test]
async fn unrecognised_votes_are_rejected_by_the_store(#[case] prefix: &str, #[case] query: &str) {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let id = if prefix.ends_with("articles") {
        first_article(&seeded).id
    } else {
        seeded.outcome.comments.first().expect("seeded comment").id
    };

    let (status, body) = send(
        &app,
        TestRequest::put().uri(&format!("{prefix}/{id}?{query}")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        msg(&body),
        "Cannot increment with non-numeric argument: {votes: null}"
    );
}

#[rstest]
#[actix_web::test]
async fn repeated_vote_parameter_answers_with_json() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let article = first_article(&seeded);

    let res = test::call_service(
        &app,
        TestRequest::put()
            .uri(&format!("/api/articles/{}?vote=up&vote=down", article.id))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let content_type = res
        .headers()
        .get(actix_web::http::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    assert_eq!(content_type.as_deref(), Some("application/json"));

    let stored = seeded
        .store
        .find_by_id(Collection::Articles, &article.id.to_string())
        .await
        .expect("lookup succeeds")
        .expect("article still stored");
    assert_eq!(stored.get("votes"), Some(&json!(article.votes)));
}

#[rstest]
#[actix_web::test]
async fn creating_an_article_with_an_empty_body_is_rejected() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let before = seeded
        .store
        .count(Collection::Articles, &Filter::all())
        .await
        .expect("count");

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/api/topics/cats/articles")
            .set_json(json!({ "title": "Lazy afternoons", "body": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        msg(&body),
        "articles validation failed: body: Path `body` is required."
    );

    let after = seeded
        .store
        .count(Collection::Articles, &Filter::all())
        .await
        .expect("count");
    assert_eq!(after, before);
}

#[rstest]
#[actix_web::test]
async fn creating_an_article_returns_the_stored_document() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/api/topics/paper/articles")
            .set_json(json!({ "title": "Origami", "body": "Fold it" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let article = body.get("article").expect("article envelope");
    assert_eq!(article.get("belongs_to"), Some(&json!("paper")));
    assert_eq!(article.get("votes"), Some(&json!(0)));
    let author = article
        .get("created_by")
        .and_then(Value::as_str)
        .expect("author id");
    assert!(
        seeded
            .outcome
            .users
            .iter()
            .any(|user| user.id.to_string() == author),
        "author is an existing user identity"
    );

    let (status, _) = send(&app, TestRequest::get().uri("/api/topics/paper/articles")).await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[actix_web::test]
async fn creating_an_article_under_an_unknown_topic_is_not_found() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/api/topics/dogs/articles")
            .set_json(json!({ "title": "Woof", "body": "Bark" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "topic not found: invalid topic name.");
}

#[rstest]
#[actix_web::test]
async fn deleting_a_comment_removes_it_once() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let article = first_article(&seeded);
    let comment = seeded
        .outcome
        .comments
        .iter()
        .find(|comment| comment.belongs_to == article.id)
        .expect("article has a comment");
    let uri = format!("/api/comments/{}", comment.id);

    let (status, body) = send(&app, TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(
        body.pointer("/comment/_id"),
        Some(&json!(comment.id.to_string()))
    );

    let (status, body) = send(
        &app,
        TestRequest::get().uri(&format!("/api/articles/{}/comments", article.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        list(&body, "comments")
            .iter()
            .all(|listed| id_of(listed) != comment.id.to_string())
    );

    let (status, body) = send(&app, TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "comment not found: invalid comment id.");
}

#[rstest]
#[actix_web::test]
async fn another_kinds_identity_is_not_found() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let user = seeded.outcome.users.first().expect("seeded user");

    let (status, body) = send(
        &app,
        TestRequest::get().uri(&format!("/api/articles/{}", user.id)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "article not found: invalid article id.");
}

#[rstest]
#[case(TestRequest::get().uri("/api/articles/not-a-valid-id-shape"), "articles not found: invalid id.")]
#[case(TestRequest::put().uri("/api/articles/invalid?vote=up"), "articles not found: invalid id.")]
#[case(TestRequest::get().uri("/api/articles/invalid/comments"), "comments not found: invalid id.")]
#[case(
    TestRequest::post().uri("/api/articles/invalid/comments").set_json(json!({ "comment": "hi" })),
    "articles not found: invalid id."
)]
#[case(TestRequest::delete().uri("/api/comments/invalid"), "comments not found: invalid id.")]
#[actix_web::test]
async fn malformed_identities_are_bad_requests(#[case] request: TestRequest, #[case] expected: &str) {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(msg(&body), expected);
}

#[rstest]
#[actix_web::test]
async fn article_without_comments_is_a_scoped_not_found() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let quiet = seeded
        .outcome
        .articles
        .iter()
        .find(|article| {
            seeded
                .outcome
                .comments
                .iter()
                .all(|comment| comment.belongs_to != article.id)
        })
        .expect("an article without comments");

    let (status, body) = send(
        &app,
        TestRequest::get().uri(&format!("/api/articles/{}/comments", quiet.id)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "comments not found: invalid article id.");
}

#[rstest]
#[actix_web::test]
async fn posting_a_comment_attributes_it_to_an_existing_user() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let article = first_article(&seeded);

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri(&format!("/api/articles/{}/comments", article.id))
            .set_json(json!({ "comment": "First!" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.pointer("/comment/body"), Some(&json!("First!")));
    assert_eq!(
        body.pointer("/comment/belongs_to"),
        Some(&json!(article.id.to_string()))
    );
    assert_eq!(body.pointer("/comment/votes"), Some(&json!(0)));

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri(&format!("/api/articles/{}/comments", article.id))
            .set_json(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        msg(&body),
        "comments validation failed: body: Path `body` is required."
    );
}

#[rstest]
#[actix_web::test]
async fn posting_a_comment_on_a_missing_article_is_not_found() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri(&format!("/api/articles/{}/comments", DocumentId::random()))
            .set_json(json!({ "comment": "Hello?" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "article not found: invalid article id.");
}

#[rstest]
#[actix_web::test]
async fn global_lists_are_formatted() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let usernames: Vec<&str> = seeded
        .outcome
        .users
        .iter()
        .map(|user| user.username.as_str())
        .collect();

    let (status, body) = send(&app, TestRequest::get().uri("/api/articles")).await;
    assert_eq!(status, StatusCode::OK);
    let articles = list(&body, "articles");
    assert_eq!(articles.len(), seeded.outcome.articles.len());
    assert_eq!(id_of(&articles[0]), first_article(&seeded).id.to_string());

    let (status, body) = send(&app, TestRequest::get().uri("/api/comments")).await;
    assert_eq!(status, StatusCode::OK);
    let comments = list(&body, "comments");
    assert_eq!(comments.len(), seeded.outcome.comments.len());
    assert!(comments.iter().all(|comment| {
        comment
            .get("created_by")
            .and_then(Value::as_str)
            .is_some_and(|author| usernames.contains(&author))
    }));
}

#[rstest]
#[actix_web::test]
async fn single_comment_is_formatted() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;
    let comment = seeded.outcome.comments.first().expect("seeded comment");
    let author = seeded
        .outcome
        .users
        .iter()
        .find(|user| user.id == comment.created_by)
        .expect("comment author");

    let (status, body) = send(
        &app,
        TestRequest::get().uri(&format!("/api/comments/{}", comment.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body.pointer("/comment/created_by"),
        Some(&json!(author.username))
    );
}

#[rstest]
#[actix_web::test]
async fn users_are_listed_and_fetched_by_username() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;

    let (status, body) = send(&app, TestRequest::get().uri("/api/users")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list(&body, "users").len(), seeded.outcome.users.len());

    let (status, body) = send(&app, TestRequest::get().uri("/api/users/butter_bridge")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.pointer("/user/username"), Some(&json!("butter_bridge")));

    let (status, body) = send(&app, TestRequest::get().uri("/api/users/nobody")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "user not found: invalid username.");
}

#[rstest]
#[actix_web::test]
async fn topics_are_listed() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;

    let (status, body) = send(&app, TestRequest::get().uri("/api/topics")).await;
    assert_eq!(status, StatusCode::OK);
    let slugs: Vec<&str> = list(&body, "topics")
        .iter()
        .filter_map(|topic| topic.get("slug").and_then(Value::as_str))
        .collect();
    assert_eq!(slugs, ["mitch", "cats", "paper"]);
}

#[rstest]
#[actix_web::test]
async fn worked_example_round_trip() {
    let dataset = SeedDataset::from_json(
        r#"{
            "topics": [{ "slug": "coding", "description": "Code is love" }],
            "users": [{ "username": "jess", "name": "Jess" }],
            "articles": [{ "title": "A", "body": "B", "topic": "coding", "created_by": "jess" }]
        }"#,
    )
    .expect("worked example dataset");
    let seeded = seed(&dataset).await;
    let app = init_app(seeded.store.clone()).await;
    let article = first_article(&seeded);
    assert_eq!(article.votes, 0);

    let (status, body) = send(
        &app,
        TestRequest::put().uri(&format!("/api/articles/{}?vote=up", article.id)),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body.pointer("/article/votes"), Some(&json!(1)));

    let (status, body) = send(&app, TestRequest::get().uri("/api/topics/coding/articles")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.pointer("/articles/0/comments"), Some(&json!(0)));
    assert_eq!(body.pointer("/articles/0/created_by"), Some(&json!("jess")));
}

#[rstest]
#[actix_web::test]
async fn api_root_and_fallback() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;

    let (status, body) = send(&app, TestRequest::get().uri("/api")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!list(&body, "endpoints").is_empty());

    let (status, body) = send(&app, TestRequest::get().uri("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "welcome..." }));

    let (status, body) = send(&app, TestRequest::get().uri("/api/bananas")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg(&body), "page not found.");
}

#[rstest]
#[actix_web::test]
async fn error_responses_carry_a_trace_id() {
    let seeded = seed_test_dataset().await;
    let app = init_app(seeded.store.clone()).await;

    let res = test::call_service(
        &app,
        TestRequest::get().uri("/api/articles/invalid").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let header = res
        .headers()
        .get(newsdesk::domain::TRACE_ID_HEADER)
        .expect("trace-id header")
        .to_str()
        .expect("ascii header");
    assert!(header.parse::<newsdesk::TraceId>().is_ok());
}
