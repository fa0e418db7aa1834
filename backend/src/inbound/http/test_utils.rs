//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::App;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::web;

use crate::Trace;
use crate::domain::ports::{
    MockArticlesCommand, MockArticlesQuery, MockCommentsCommand, MockCommentsQuery,
    MockTopicsQuery, MockUsersQuery,
};
use crate::inbound::http::configure;
use crate::inbound::http::endpoints::not_found;
use crate::inbound::http::state::HttpState;

/// One mock per driving port. Unconfigured mocks panic when called.
#[derive(Default)]
pub struct MockPorts {
    pub topics: MockTopicsQuery,
    pub articles_query: MockArticlesQuery,
    pub articles: MockArticlesCommand,
    pub comments_query: MockCommentsQuery,
    pub comments: MockCommentsCommand,
    pub users: MockUsersQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            topics: Arc::new(self.topics),
            articles_query: Arc::new(self.articles_query),
            articles: Arc::new(self.articles),
            comments_query: Arc::new(self.comments_query),
            comments: Arc::new(self.comments),
            users: Arc::new(self.users),
        }
    }
}

/// Application wired the way the server wires it.
pub fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(not_found))
}
