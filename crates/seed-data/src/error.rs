//! Error types for the seed-data crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a seed dataset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file at '{path}': {message}")]
    Io {
        /// Path to the dataset file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The dataset JSON is malformed or missing required fields.
    #[error("invalid dataset JSON: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
    },

    /// The requested dataset name is not known.
    #[error("unknown dataset '{name}', expected one of: dev, test")]
    UnknownName {
        /// The name that failed to match.
        name: String,
    },

    /// Two topics share a slug.
    #[error("duplicate topic slug '{slug}'")]
    DuplicateTopic {
        /// The repeated slug.
        slug: String,
    },

    /// Two users share a username.
    #[error("duplicate username '{username}'")]
    DuplicateUser {
        /// The repeated username.
        username: String,
    },

    /// Two articles share a title, making comment references ambiguous.
    #[error("duplicate article title '{title}'")]
    DuplicateArticle {
        /// The repeated title.
        title: String,
    },

    /// A record names a topic that the dataset does not define.
    #[error("{owner} references unknown topic '{slug}'")]
    UnknownTopic {
        /// Human-readable description of the referencing record.
        owner: String,
        /// The missing topic slug.
        slug: String,
    },

    /// A record names an author that the dataset does not define.
    #[error("{owner} references unknown user '{username}'")]
    UnknownUser {
        /// Human-readable description of the referencing record.
        owner: String,
        /// The missing username.
        username: String,
    },

    /// A comment names an article title that the dataset does not define.
    #[error("{owner} references unknown article '{title}'")]
    UnknownArticle {
        /// Human-readable description of the referencing record.
        owner: String,
        /// The missing article title.
        title: String,
    },
}
