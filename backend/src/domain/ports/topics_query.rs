//! Driving port for topic reads.

use async_trait::async_trait;

use crate::domain::{Error, Topic};

/// Domain use-case port for listing topics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicsQuery: Send + Sync {
    /// Every topic, in insertion order.
    async fn list_topics(&self) -> Result<Vec<Topic>, Error>;
}
