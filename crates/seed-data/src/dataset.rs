//! Seed dataset types and JSON loading.
//!
//! A dataset holds four record lists in their raw, human-keyed form. Loading
//! always validates cross references so the backend can resolve every name
//! without further checks.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::DatasetError;
use crate::validation::validate_dataset;

const DEV_JSON: &str = include_str!("../data/dev.json");
const TEST_JSON: &str = include_str!("../data/test.json");

/// Names of the datasets embedded in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetName {
    /// A larger dataset for local development.
    Dev,
    /// A small, stable dataset used by integration tests.
    Test,
}

impl DatasetName {
    /// Returns the lowercase name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Test => "test",
        }
    }

    const fn source(self) -> &'static str {
        match self {
            Self::Dev => DEV_JSON,
            Self::Test => TEST_JSON,
        }
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetName {
    type Err = DatasetError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dev" => Ok(Self::Dev),
            "test" => Ok(Self::Test),
            _ => Err(DatasetError::UnknownName {
                name: value.to_owned(),
            }),
        }
    }
}

/// A raw topic record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TopicSeed {
    /// Unique slug identifying the topic.
    pub slug: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

/// A raw user record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSeed {
    /// Unique login name.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,
}

/// A raw article record keyed by topic slug and author username.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticleSeed {
    /// Article title, unique within a dataset.
    pub title: String,
    /// Article body text.
    pub body: String,
    /// Slug of the topic the article belongs to.
    pub topic: String,
    /// Username of the author.
    pub created_by: String,
    /// Initial vote tally.
    #[serde(default)]
    pub votes: Option<i64>,
    /// Creation timestamp in RFC 3339 form; the store applies "now" when absent.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A raw comment record keyed by article title and author username.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CommentSeed {
    /// Comment text.
    pub body: String,
    /// Title of the article the comment belongs to.
    pub belongs_to: String,
    /// Username of the author.
    pub created_by: String,
    /// Initial vote tally.
    #[serde(default)]
    pub votes: Option<i64>,
    /// Creation timestamp in RFC 3339 form; the store applies "now" when absent.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A validated seed dataset.
///
/// # Example
///
/// ```
/// use seed_data::SeedDataset;
///
/// let json = r#"{
///     "topics": [{"slug": "coding", "description": "Code is love"}],
///     "users": [{"username": "jess", "name": "Jess", "avatar_url": ""}],
///     "articles": [{"title": "A", "body": "B", "topic": "coding", "created_by": "jess"}],
///     "comments": [{"body": "nice", "belongs_to": "A", "created_by": "jess"}]
/// }"#;
///
/// let dataset = SeedDataset::from_json(json).expect("valid dataset");
/// assert_eq!(dataset.articles().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDataset {
    topics: Vec<TopicSeed>,
    users: Vec<UserSeed>,
    articles: Vec<ArticleSeed>,
    comments: Vec<CommentSeed>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDataset {
    #[serde(default)]
    topics: Vec<TopicSeed>,
    #[serde(default)]
    users: Vec<UserSeed>,
    #[serde(default)]
    articles: Vec<ArticleSeed>,
    #[serde(default)]
    comments: Vec<CommentSeed>,
}

impl SeedDataset {
    /// Parses and validates a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Parse`] for malformed JSON and one of the
    /// duplicate or unknown-reference variants when validation fails.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: RawDataset = serde_json::from_str(json).map_err(|e| DatasetError::Parse {
            message: e.to_string(),
        })?;
        let dataset = Self {
            topics: raw.topics,
            users: raw.users,
            articles: raw.articles,
            comments: raw.comments,
        };
        validate_dataset(&dataset)?;
        Ok(dataset)
    }

    /// Loads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Io`] if the file cannot be read, otherwise any
    /// error [`SeedDataset::from_json`] produces.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let contents = fs::read_to_string(path).map_err(|e| DatasetError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents)
    }

    /// Loads one of the embedded datasets.
    ///
    /// # Errors
    ///
    /// Returns an error only if the embedded JSON is invalid.
    pub fn named(name: DatasetName) -> Result<Self, DatasetError> {
        Self::from_json(name.source())
    }

    /// Topics in file order.
    #[must_use]
    pub fn topics(&self) -> &[TopicSeed] {
        &self.topics
    }

    /// Users in file order.
    #[must_use]
    pub fn users(&self) -> &[UserSeed] {
        &self.users
    }

    /// Articles in file order.
    #[must_use]
    pub fn articles(&self) -> &[ArticleSeed] {
        &self.articles
    }

    /// Comments in file order.
    #[must_use]
    pub fn comments(&self) -> &[CommentSeed] {
        &self.comments
    }
}
