//! News platform backend library modules.

pub mod bootstrap;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

pub use domain::TraceId;
pub use middleware::Trace;
