//! HTTP adapter mapping for domain errors.
//!
//! Every failure raised during a request funnels into one classifier. It
//! runs an ordered list of stages; the first stage that recognises the error
//! decides the status and the `{ "msg": ... }` body. Anything no stage
//! recognises becomes a logged `500`.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use tracing::error;

use crate::domain::ports::StoreError;
use crate::domain::{Error, ErrorCode, TraceId};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Body returned by the catch-all stage.
pub const INTERNAL_SERVER_ERROR_MSG: &str = "internal server error.";

/// Outcome of classification: a status and the client-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    /// Response status.
    pub status: StatusCode,
    /// Message placed in the `msg` field.
    pub msg: String,
}

impl Classified {
    fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            msg: msg.into(),
        }
    }
}

/// Error payload serialised for clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    /// Human readable message.
    pub msg: &'a str,
}

type Stage = fn(&Error) -> Option<Classified>;

/// Stages in precedence order.
const STAGES: [Stage; 2] = [explicit_not_found, client_failure];

fn explicit_not_found(error: &Error) -> Option<Classified> {
    match error {
        Error::Explicit {
            code: ErrorCode::NotFound,
            message,
        } => Some(Classified::new(StatusCode::NOT_FOUND, message.as_str())),
        _ => None,
    }
}

fn client_failure(error: &Error) -> Option<Classified> {
    match error {
        Error::Explicit {
            code: ErrorCode::InvalidRequest,
            message,
        } => Some(Classified::new(StatusCode::BAD_REQUEST, message.as_str())),
        Error::Store(
            err @ (StoreError::Validation { .. }
            | StoreError::Cast { .. }
            | StoreError::Rejected { .. }),
        ) => Some(Classified::new(StatusCode::BAD_REQUEST, err.to_string())),
        _ => None,
    }
}

fn run_stages(error: &Error) -> Option<Classified> {
    STAGES.iter().find_map(|stage| stage(error))
}

/// Trace id recorded on the error, else the one of the current request.
fn logged_trace_id(error: &Error) -> Option<TraceId> {
    error.trace_id().or_else(TraceId::current)
}

fn catch_all(error: &Error) -> Classified {
    match logged_trace_id(error) {
        Some(trace_id) => error!(%error, %trace_id, "unhandled error"),
        None => error!(%error, "unhandled error"),
    }
    Classified::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR_MSG)
}

/// Classify `error`, logging it when it falls through to the catch-all.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use newsdesk::domain::Error;
/// use newsdesk::inbound::http::error::classify;
///
/// let classified = classify(&Error::not_found("article not found: invalid article id."));
/// assert_eq!(classified.status, StatusCode::NOT_FOUND);
/// ```
#[must_use]
pub fn classify(error: &Error) -> Classified {
    run_stages(error).unwrap_or_else(|| catch_all(error))
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        run_stages(self).map_or(StatusCode::INTERNAL_SERVER_ERROR, |c| c.status)
    }

    fn error_response(&self) -> HttpResponse {
        let classified = classify(self);
        HttpResponse::build(classified.status).json(ErrorBody {
            msg: &classified.msg,
        })
    }
}

#[cfg(test)]
mod tests;
