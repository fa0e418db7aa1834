//! Driven port resolving which user a create request acts as.
//!
//! There is no authentication yet: the shipped resolver picks an existing
//! user at random. Swapping in a session-backed resolver only touches server
//! wiring.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Port for resolving the author of newly created articles and comments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActingUserResolver: Send + Sync {
    /// The user a create request is attributed to.
    async fn resolve_acting_user(&self) -> Result<User, Error>;
}
