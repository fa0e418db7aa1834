//! Backend entry-point: loads settings, seeds the store and serves the API.

mod server;

use std::ffi::OsString;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use newsdesk::bootstrap::{ServerSettings, seed_on_startup};
use newsdesk::outbound::persistence::InMemoryDocumentStore;
use ortho_config::OrthoConfig;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args: Vec<OsString> = std::env::args_os().collect();
    let settings = ServerSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;

    let host: IpAddr = settings.bind_host().parse().map_err(|e| {
        std::io::Error::other(format!("invalid bind host {}: {e}", settings.bind_host()))
    })?;
    let bind_addr = SocketAddr::new(host, settings.port());

    let store = Arc::new(InMemoryDocumentStore::new());
    seed_on_startup(&settings, store.clone())
        .await
        .map_err(std::io::Error::other)?;

    let server = create_server(ServerConfig::new(bind_addr, store))?;
    info!(%bind_addr, "listening");
    server.await
}
