//! Process configuration and startup seeding.

pub mod config;
pub mod startup;

pub use config::{DEFAULT_BIND_HOST, DEFAULT_PORT, ServerSettings};
pub use startup::{StartupSeedingError, seed_on_startup};
