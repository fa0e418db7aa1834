//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use newsdesk::Trace;
use newsdesk::inbound::http::configure;
use newsdesk::inbound::http::endpoints::not_found;
use newsdesk::inbound::http::state::HttpState;

fn build_app(http_state: web::Data<HttpState>) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .default_service(web::to(not_found))
}

/// Construct an Actix HTTP server over the configured store.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, store } = config;
    let http_state = build_http_state(store);

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();
    Ok(server)
}
