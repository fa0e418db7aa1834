//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use newsdesk::outbound::persistence::InMemoryDocumentStore;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) store: Arc<InMemoryDocumentStore>,
}

impl ServerConfig {
    /// Construct a server configuration serving `store`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: Arc<InMemoryDocumentStore>) -> Self {
        Self { bind_addr, store }
    }
}
