//! Builders for HTTP state.

use std::sync::Arc;

use actix_web::web;

use newsdesk::domain::ports::DocumentStore;
use newsdesk::domain::{NewsService, RandomUserResolver};
use newsdesk::inbound::http::state::HttpState;

/// Wire the news service over `store`, with acting users sampled from it.
pub(super) fn build_http_state<S>(store: Arc<S>) -> web::Data<HttpState>
where
    S: DocumentStore + 'static,
{
    let acting_user = Arc::new(RandomUserResolver::new(store.clone()));
    let service = Arc::new(NewsService::new(store, acting_user));
    web::Data::new(HttpState::from_service(service))
}
