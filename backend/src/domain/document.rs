//! Document model shared by the store port and its adapters.
//!
//! Documents are JSON objects carrying a store-assigned `_id`. Each
//! [`Collection`] owns a schema which adapters enforce on create: unknown
//! fields are dropped, defaults applied, required fields checked and
//! identity-typed fields cast. Casting and increment rules live here so every
//! adapter reports the same failures.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use uuid::Uuid;

use super::error::Error;
use super::ports::StoreError;

/// A stored JSON object.
pub type Document = Map<String, Value>;

/// Field holding the store-assigned identity.
pub const ID_FIELD: &str = "_id";

/// Field holding the vote tally on articles and comments.
pub const VOTES_FIELD: &str = "votes";

/// Store-assigned document identity.
///
/// Any string that is not a UUID is a malformed identity; stores reject it
/// with [`StoreError::Cast`] rather than treating it as absent.
///
/// # Examples
/// ```
/// use newsdesk::domain::DocumentId;
///
/// let id: DocumentId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().expect("valid id");
/// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
/// assert!("not-an-id".parse::<DocumentId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Generate a fresh identity.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl From<DocumentId> for Value {
    fn from(value: DocumentId) -> Self {
        Self::String(value.to_string())
    }
}

/// The four collections the platform stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// Topic documents keyed by slug.
    Topics,
    /// Article documents.
    Articles,
    /// Comment documents.
    Comments,
    /// User documents keyed by username.
    Users,
}

/// Value type a schema field is cast to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text.
    Text,
    /// Signed integer.
    Integer,
    /// A [`DocumentId`] reference.
    Identity,
    /// RFC 3339 timestamp.
    Timestamp,
}

/// Value applied when a field is absent on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    /// Leave the field absent.
    Absent,
    /// Integer zero.
    Zero,
    /// The creation instant.
    Now,
}

/// One schema entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name.
    pub name: &'static str,
    /// Cast target.
    pub kind: FieldKind,
    /// Whether a non-empty value must be present after defaults.
    pub required: bool,
    /// Default applied when absent.
    pub default: FieldDefault,
}

impl FieldSpec {
    const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            default: FieldDefault::Absent,
        }
    }

    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            default: FieldDefault::Absent,
        }
    }

    const fn defaulted(name: &'static str, kind: FieldKind, default: FieldDefault) -> Self {
        Self {
            name,
            kind,
            required: false,
            default,
        }
    }
}

const TOPIC_SCHEMA: &[FieldSpec] = &[
    FieldSpec::required("slug", FieldKind::Text),
    FieldSpec::optional("description", FieldKind::Text),
];

const ARTICLE_SCHEMA: &[FieldSpec] = &[
    FieldSpec::required("title", FieldKind::Text),
    FieldSpec::required("body", FieldKind::Text),
    FieldSpec::defaulted(VOTES_FIELD, FieldKind::Integer, FieldDefault::Zero),
    FieldSpec::required("belongs_to", FieldKind::Text),
    FieldSpec::required("created_by", FieldKind::Identity),
    FieldSpec::defaulted("created_at", FieldKind::Timestamp, FieldDefault::Now),
];

const COMMENT_SCHEMA: &[FieldSpec] = &[
    FieldSpec::required("body", FieldKind::Text),
    FieldSpec::defaulted(VOTES_FIELD, FieldKind::Integer, FieldDefault::Zero),
    FieldSpec::required("belongs_to", FieldKind::Identity),
    FieldSpec::required("created_by", FieldKind::Identity),
    FieldSpec::defaulted("created_at", FieldKind::Timestamp, FieldDefault::Now),
];

const USER_SCHEMA: &[FieldSpec] = &[
    FieldSpec::required("username", FieldKind::Text),
    FieldSpec::optional("name", FieldKind::Text),
    FieldSpec::optional("avatar_url", FieldKind::Text),
];

impl Collection {
    /// Every collection, in seeding order.
    pub const ALL: [Self; 4] = [Self::Topics, Self::Users, Self::Articles, Self::Comments];

    /// Collection name used in store messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Topics => "topics",
            Self::Articles => "articles",
            Self::Comments => "comments",
            Self::Users => "users",
        }
    }

    /// Schema enforced on create.
    #[must_use]
    pub const fn schema(self) -> &'static [FieldSpec] {
        match self {
            Self::Topics => TOPIC_SCHEMA,
            Self::Articles => ARTICLE_SCHEMA,
            Self::Comments => COMMENT_SCHEMA,
            Self::Users => USER_SCHEMA,
        }
    }

    fn field_kind(self, field: &str) -> Option<FieldKind> {
        if field == ID_FIELD {
            return Some(FieldKind::Identity);
        }
        self.schema()
            .iter()
            .find(|spec| spec.name == field)
            .map(|spec| spec.kind)
    }

    /// Parse a raw identity, reporting a cast failure against this collection.
    ///
    /// # Errors
    /// Returns [`StoreError::Cast`] when `raw` is not a UUID.
    pub fn cast_id(self, raw: &str) -> Result<DocumentId, StoreError> {
        raw.parse()
            .map_err(|_| StoreError::cast(self.name(), "id", raw))
    }

    /// Cast identity-typed filter values, rejecting malformed identities.
    ///
    /// # Errors
    /// Returns [`StoreError::Cast`] when an identity-typed condition does not
    /// hold a UUID string.
    pub fn cast_filter(self, filter: &Filter) -> Result<Filter, StoreError> {
        let mut cast = Filter::all();
        for (field, value) in filter.conditions() {
            let value = match self.field_kind(field) {
                Some(FieldKind::Identity) => {
                    let raw = value.as_str().map_or_else(|| value.to_string(), str::to_owned);
                    Value::from(self.cast_id(&raw)?)
                }
                _ => value.clone(),
            };
            cast = cast.eq(field.clone(), value);
        }
        Ok(cast)
    }

    /// Apply this collection's schema to an incoming document.
    ///
    /// Unknown fields (including any caller-supplied `_id`) are dropped.
    ///
    /// # Errors
    /// Returns [`StoreError::Validation`] naming every missing or uncastable
    /// field, in schema order.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use newsdesk::domain::{Collection, Document};
    /// use serde_json::json;
    ///
    /// let mut input = Document::new();
    /// input.insert("slug".into(), json!("coding"));
    /// input.insert("colour".into(), json!("red"));
    /// let stored = Collection::Topics.conform(&input, Utc::now()).expect("valid topic");
    /// assert!(stored.get("colour").is_none());
    /// ```
    pub fn conform(self, input: &Document, now: DateTime<Utc>) -> Result<Document, StoreError> {
        let mut output = Document::new();
        let mut problems = Vec::new();

        for spec in self.schema() {
            let supplied = input.get(spec.name).filter(|value| !value.is_null()).cloned();
            let Some(value) = supplied.or_else(|| default_value(spec.default, now)) else {
                if spec.required {
                    problems.push(required_message(spec.name));
                }
                continue;
            };
            match cast_value(spec.kind, &value) {
                Some(cast) if spec.required && is_blank(&cast) => {
                    problems.push(required_message(spec.name));
                }
                Some(cast) => {
                    output.insert(spec.name.to_owned(), cast);
                }
                None => problems.push(cast_message(spec, &value)),
            }
        }

        if problems.is_empty() {
            Ok(output)
        } else {
            Err(StoreError::validation(format!(
                "{} validation failed: {}",
                self.name(),
                problems.join(", ")
            )))
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn default_value(default: FieldDefault, now: DateTime<Utc>) -> Option<Value> {
    match default {
        FieldDefault::Absent => None,
        FieldDefault::Zero => Some(Value::from(0_i64)),
        FieldDefault::Now => Some(Value::String(format_timestamp(now))),
    }
}

fn cast_value(kind: FieldKind, value: &Value) -> Option<Value> {
    match (kind, value) {
        (FieldKind::Text, Value::String(_)) => Some(value.clone()),
        (FieldKind::Text, Value::Number(n)) => Some(Value::String(n.to_string())),
        (FieldKind::Text, Value::Bool(b)) => Some(Value::String(b.to_string())),
        (FieldKind::Integer, Value::Number(n)) => n.as_i64().map(Value::from),
        (FieldKind::Integer, Value::String(s)) => s.trim().parse::<i64>().ok().map(Value::from),
        (FieldKind::Identity, Value::String(s)) => {
            s.parse::<DocumentId>().ok().map(Value::from)
        }
        (FieldKind::Timestamp, Value::String(s)) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|parsed| Value::String(format_timestamp(parsed.with_timezone(&Utc)))),
        _ => None,
    }
}

fn is_blank(value: &Value) -> bool {
    value.as_str().is_some_and(str::is_empty)
}

fn required_message(field: &str) -> String {
    format!("{field}: Path `{field}` is required.")
}

fn cast_message(spec: &FieldSpec, value: &Value) -> String {
    let target = match spec.kind {
        FieldKind::Text => "String",
        FieldKind::Integer => "Number",
        FieldKind::Identity => "Id",
        FieldKind::Timestamp => "Date",
    };
    format!(
        "{name}: Cast to {target} failed for value \"{value}\" at path \"{name}\"",
        name = spec.name
    )
}

/// Render a timestamp the way stores persist `created_at`.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serde adapter keeping typed timestamps byte-identical to stored ones.
pub mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialise with millisecond precision and a `Z` suffix.
    pub fn serialize<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_timestamp(*at))
    }

    /// Accept any RFC 3339 timestamp.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// Conjunction of field-equality conditions.
///
/// # Examples
/// ```
/// use newsdesk::domain::{Document, Filter};
/// use serde_json::json;
///
/// let mut doc = Document::new();
/// doc.insert("belongs_to".into(), json!("coding"));
/// assert!(Filter::all().eq("belongs_to", "coding").matches(&doc));
/// assert!(!Filter::all().eq("belongs_to", "cats").matches(&doc));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Vec<(String, Value)>,
}

impl Filter {
    /// Filter matching every document.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Add an equality condition.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    /// Conditions in insertion order.
    #[must_use]
    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    /// Whether `document` satisfies every condition.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

/// Atomic increment applied by `update_by_id`.
///
/// A missing amount models an unrecognised vote; stores reject it rather
/// than leaving the document untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Increment {
    field: String,
    by: Option<i64>,
}

impl Increment {
    /// Increment `field` by `by`.
    pub fn new(field: impl Into<String>, by: Option<i64>) -> Self {
        Self {
            field: field.into(),
            by,
        }
    }

    /// Increment of the vote tally.
    #[must_use]
    pub fn votes(by: Option<i64>) -> Self {
        Self::new(VOTES_FIELD, by)
    }

    /// Target field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Amount, if numeric.
    #[must_use]
    pub fn by(&self) -> Option<i64> {
        self.by
    }

    /// Reject a non-numeric amount before any document is touched.
    ///
    /// # Errors
    /// Returns [`StoreError::Rejected`] when the amount is missing.
    pub fn validate(&self) -> Result<i64, StoreError> {
        self.by.ok_or_else(|| {
            StoreError::rejected(format!(
                "Cannot increment with non-numeric argument: {{{}: null}}",
                self.field
            ))
        })
    }

    /// Apply the increment in place.
    ///
    /// # Errors
    /// Returns [`StoreError::Rejected`] when the amount is missing, the
    /// current value is not an integer, or the sum overflows.
    pub fn apply(&self, document: &mut Document) -> Result<(), StoreError> {
        let by = self.validate()?;
        let current = match document.get(&self.field) {
            None | Some(Value::Null) => 0,
            Some(Value::Number(n)) => n.as_i64().ok_or_else(|| self.non_numeric())?,
            Some(_) => return Err(self.non_numeric()),
        };
        let next = current.checked_add(by).ok_or_else(|| {
            StoreError::rejected(format!("increment of {} overflows", self.field))
        })?;
        document.insert(self.field.clone(), Value::Number(Number::from(next)));
        Ok(())
    }

    fn non_numeric(&self) -> StoreError {
        StoreError::rejected(format!(
            "Cannot apply $inc to a value of non-numeric type at path '{}'",
            self.field
        ))
    }
}

/// Decode a stored document into a typed record.
///
/// # Errors
/// Returns an internal [`Error`]; a stored document that does not match its
/// record type is a defect, not a client failure.
pub fn decode<T: DeserializeOwned>(collection: Collection, document: Document) -> Result<T, Error> {
    serde_json::from_value(Value::Object(document))
        .map_err(|err| Error::internal(format!("failed to decode {collection} document: {err}")))
}
