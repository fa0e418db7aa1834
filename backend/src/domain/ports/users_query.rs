//! Driving port for user reads.
//!
//! Inbound adapters use this port to fetch users without importing
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user, in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// The user named `username`.
    async fn get_user(&self, username: &str) -> Result<User, Error>;
}
