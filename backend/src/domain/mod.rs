//! Domain primitives, services and ports.
//!
//! Purpose: hold the news pipeline independent of transport and storage.
//! Documents flow in from a [`ports::DocumentStore`], are decoded into typed
//! records, joined with their authors and projected into client views.
//!
//! Public surface:
//! - Error / ErrorCode — transport-agnostic failure signal.
//! - DocumentId, Document, Collection, Filter, Increment — the document model.
//! - Topic, Article, Comment, User — typed records decoded from documents.
//! - ArticleView, CommentView — client-facing projections.
//! - NewsService — implementation of every driving port.

pub mod acting_user;
pub mod article;
pub mod comment;
pub mod document;
pub mod error;
pub mod formatting;
pub mod news_service;
pub mod ports;
pub mod references;
pub mod seeding;
pub mod topic;
pub mod trace_id;
pub mod user;
pub mod vote;

pub use self::acting_user::RandomUserResolver;
pub use self::article::{Article, NewArticle};
pub use self::comment::{Comment, NewComment};
pub use self::document::{Collection, Document, DocumentId, Filter, Increment, decode};
pub use self::error::{Error, ErrorCode};
pub use self::formatting::{ArticleView, CommentView};
pub use self::news_service::NewsService;
pub use self::seeding::{SeedOutcome, Seeder};
pub use self::topic::Topic;
pub use self::trace_id::TraceId;
pub use self::user::User;
pub use self::vote::Vote;

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
