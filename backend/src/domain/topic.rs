//! Topics group articles under a human-readable slug.

use serde::{Deserialize, Serialize};

use super::DocumentId;

/// A stored topic.
///
/// ## Invariants
/// - `slug` is unique and never changes once created; articles reference
///   topics by slug rather than identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Store-assigned identity.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Unique human key.
    pub slug: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}
