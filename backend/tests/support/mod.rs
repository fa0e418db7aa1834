//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use newsdesk::Trace;
use newsdesk::domain::{NewsService, RandomUserResolver, SeedOutcome, Seeder};
use newsdesk::inbound::http::configure;
use newsdesk::inbound::http::endpoints::not_found;
use newsdesk::inbound::http::state::HttpState;
use newsdesk::outbound::persistence::InMemoryDocumentStore;
use seed_data::{DatasetName, SeedDataset};
use serde_json::Value;

/// A store seeded with a dataset, plus the inserted records.
pub struct Seeded {
    pub store: Arc<InMemoryDocumentStore>,
    pub outcome: SeedOutcome,
}

pub async fn seed(dataset: &SeedDataset) -> Seeded {
    let store = Arc::new(InMemoryDocumentStore::new());
    let outcome = Seeder::new(store.clone())
        .seed(dataset)
        .await
        .expect("dataset seeds");
    Seeded { store, outcome }
}

pub async fn seed_test_dataset() -> Seeded {
    seed(&SeedDataset::named(DatasetName::Test).expect("test dataset loads")).await
}

pub async fn init_app(
    store: Arc<InMemoryDocumentStore>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    let resolver = Arc::new(RandomUserResolver::new(store.clone()));
    let state = HttpState::from_service(Arc::new(NewsService::new(store, resolver)));
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure)
            .default_service(web::to(not_found)),
    )
    .await
}

/// Send `request` and decode the JSON body.
pub async fn send<S>(app: &S, request: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = test::call_service(app, request.to_request()).await;
    let status = res.status();
    let body: Value = test::read_body_json(res).await;
    (status, body)
}

pub fn msg(body: &Value) -> &str {
    body.get("msg")
        .and_then(Value::as_str)
        .expect("error body carries msg")
}
