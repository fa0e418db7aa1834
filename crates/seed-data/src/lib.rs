//! Named seed datasets for the newsdesk backend.
//!
//! Datasets describe topics, users, articles and comments in their raw,
//! human-keyed form: articles name their topic by slug and their author by
//! username, comments name their article by title. The backend resolves
//! those names into store identities while seeding, so this crate stays
//! independent of backend domain types.
//!
//! # Example
//!
//! ```
//! use seed_data::{DatasetName, SeedDataset};
//!
//! let dataset = SeedDataset::named(DatasetName::Test).expect("embedded dataset is valid");
//! assert!(!dataset.topics().is_empty());
//! assert!(!dataset.users().is_empty());
//! ```

mod dataset;
mod error;
mod validation;

pub use dataset::{ArticleSeed, CommentSeed, DatasetName, SeedDataset, TopicSeed, UserSeed};
pub use error::DatasetError;
