//! Users author articles and comments.

use serde::{Deserialize, Serialize};

use super::DocumentId;

/// A stored user.
///
/// ## Invariants
/// - `username` is unique and immutable; it is the key clients look users up
///   by and the value `created_by` is rendered as.
///
/// # Examples
/// ```
/// use newsdesk::domain::User;
/// use serde_json::json;
///
/// let user: User = serde_json::from_value(json!({
///     "_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
///     "username": "jess",
/// }))
/// .expect("valid user");
/// assert_eq!(user.username, "jess");
/// assert!(user.name.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identity.
    #[serde(rename = "_id")]
    pub id: DocumentId,
    /// Unique login name.
    pub username: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Avatar image URL.
    #[serde(default)]
    pub avatar_url: String,
}
