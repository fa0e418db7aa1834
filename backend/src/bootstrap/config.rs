//! Server configuration loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use seed_data::{DatasetError, DatasetName};
use serde::Deserialize;

/// Host bound when none is configured.
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
/// Port bound when none is configured.
pub const DEFAULT_PORT: u16 = 9090;

const DEFAULT_DATASET: &str = "dev";
const NO_DATASET: &str = "none";

/// Configuration values read from CLI arguments, `NEWSDESK_*` environment
/// variables and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "NEWSDESK")]
pub struct ServerSettings {
    /// Interface to bind.
    pub bind_host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
    /// Built-in dataset seeded on startup: `dev`, `test` or `none`.
    pub seed_dataset: Option<String>,
    /// Dataset file seeded instead of a built-in dataset.
    pub seed_path: Option<PathBuf>,
}

impl ServerSettings {
    /// Return the configured host, falling back to the default.
    pub fn bind_host(&self) -> &str {
        self.bind_host.as_deref().unwrap_or(DEFAULT_BIND_HOST)
    }

    /// Return the configured port, falling back to the default.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve the built-in dataset to seed. `none` disables seeding.
    ///
    /// # Errors
    /// Returns [`DatasetError::UnknownName`] for an unrecognised name.
    pub fn dataset(&self) -> Result<Option<DatasetName>, DatasetError> {
        let raw = self.seed_dataset.as_deref().unwrap_or(DEFAULT_DATASET);
        if raw.trim().eq_ignore_ascii_case(NO_DATASET) {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}
