//! Startup seeding orchestration.

use std::sync::Arc;

use seed_data::{DatasetError, SeedDataset};
use thiserror::Error;
use tracing::info;

use crate::bootstrap::config::ServerSettings;
use crate::domain::ports::DocumentStore;
use crate::domain::seeding::SeedingError;
use crate::domain::{SeedOutcome, Seeder};

/// Errors returned while executing startup seeding.
#[derive(Debug, Error)]
pub enum StartupSeedingError {
    /// The dataset could not be resolved or loaded.
    #[error("failed to load seed dataset: {0}")]
    Dataset(#[from] DatasetError),
    /// Inserting the dataset failed.
    #[error("seeding failed: {0}")]
    Seeding(#[from] SeedingError),
}

/// Seed `store` with the configured dataset.
///
/// A configured `seed_path` wins over `seed_dataset`. Returns `Ok(None)` when
/// seeding is disabled.
///
/// # Examples
///
/// ```rust,no_run
/// use std::sync::Arc;
///
/// use newsdesk::bootstrap::{ServerSettings, seed_on_startup};
/// use newsdesk::outbound::persistence::InMemoryDocumentStore;
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let settings = ServerSettings {
///     bind_host: None,
///     port: None,
///     seed_dataset: Some("test".to_owned()),
///     seed_path: None,
/// };
/// let store = Arc::new(InMemoryDocumentStore::new());
/// let outcome = seed_on_startup(&settings, store).await?;
/// assert!(outcome.is_some());
/// # Ok(())
/// # }
/// ```
pub async fn seed_on_startup<S>(
    settings: &ServerSettings,
    store: Arc<S>,
) -> Result<Option<SeedOutcome>, StartupSeedingError>
where
    S: DocumentStore,
{
    let dataset = match &settings.seed_path {
        Some(path) => SeedDataset::from_file(path)?,
        None => match settings.dataset()? {
            Some(name) => SeedDataset::named(name)?,
            None => {
                info!(reason = "disabled", "seeding skipped");
                return Ok(None);
            }
        },
    };

    let outcome = Seeder::new(store).seed(&dataset).await?;
    info!(
        topics = outcome.topics.len(),
        users = outcome.users.len(),
        articles = outcome.articles.len(),
        comments = outcome.comments.len(),
        "seeded document store"
    );
    Ok(Some(outcome))
}
