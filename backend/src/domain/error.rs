//! Domain-level error types.
//!
//! These errors are transport agnostic. The HTTP adapter classifies them into
//! a status code and a `{ msg }` body in one place.

use std::fmt;

use super::ports::StoreError;
use super::trace_id::TraceId;

/// Stable category for failures the domain raises deliberately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// The request is malformed or fails a domain rule.
    InvalidRequest,
    /// The requested resource, or the parent it hangs off, does not exist.
    NotFound,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
        })
    }
}

/// Failure signal returned by every driving port.
///
/// A failure is either an explicit `{code, message}` pair, a store failure
/// carried through untouched, or an internal fault whose message never
/// reaches clients.
///
/// # Examples
/// ```
/// use newsdesk::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("topic not found: invalid topic name.");
/// assert_eq!(err.code(), Some(ErrorCode::NotFound));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Failure with an explicit category and client-facing message.
    #[error("{message}")]
    Explicit {
        /// Failure category.
        code: ErrorCode,
        /// Message returned to the client verbatim.
        message: String,
    },
    /// Failure reported by the document store.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Unexpected fault; detail is logged, never returned.
    #[error("internal error: {message}")]
    Internal {
        /// Diagnostic detail.
        message: String,
        /// Trace identifier in scope when the fault was raised.
        trace_id: Option<TraceId>,
    },
}

impl Error {
    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::Explicit {
            code: ErrorCode::NotFound,
            message: message.into(),
        }
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::Explicit {
            code: ErrorCode::InvalidRequest,
            message: message.into(),
        }
    }

    /// Internal fault, capturing the trace identifier currently in scope.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            trace_id: TraceId::current(),
        }
    }

    /// Explicit category, when the failure carries one.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            Self::Explicit { code, .. } => Some(*code),
            Self::Store(_) | Self::Internal { .. } => None,
        }
    }

    /// Trace identifier attached to an internal fault.
    pub fn trace_id(&self) -> Option<TraceId> {
        match self {
            Self::Internal { trace_id, .. } => *trace_id,
            Self::Explicit { .. } | Self::Store(_) => None,
        }
    }
}
