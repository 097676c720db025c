//! Uniform error shape for every backend call.
//!
//! Transport and HTTP failures are normalized into `ApiError` at the API
//! client boundary. Callers branch on `kind`; `detail` is the
//! human-readable message sourced from the response body when the backend
//! provided one, else a generic per-kind fallback.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

/// HTTP-status-derived failure class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// 4xx with request-level detail; shown inline at the offending form.
    BadRequest,
    /// 401 — triggers global session invalidation.
    Unauthorized,
    /// 403 — role mismatch; handled by route redirection, not fatal.
    Forbidden,
    /// 404 — rendered as an empty/"not found" view state.
    NotFound,
    /// 5xx — generic banner, safe to retry manually.
    ServerError,
    /// Transport failure before any HTTP status arrived.
    Network,
}

/// A failed backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub detail: String,
}

impl ApiError {
    /// Build from an HTTP error status and the raw response body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = kind_for_status(status);
        let detail = body_detail(body).unwrap_or_else(|| fallback_detail(kind).to_owned());
        Self { kind, detail }
    }

    /// Transport-level failure with the transport's own message.
    pub fn network(detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let detail = if detail.is_empty() {
            fallback_detail(ErrorKind::Network).to_owned()
        } else {
            detail
        };
        Self { kind: ErrorKind::Network, detail }
    }

    /// Whether this error should be shown inline near a form field
    /// rather than as a page-level banner.
    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::BadRequest
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.detail)
    }
}

fn kind_for_status(status: u16) -> ErrorKind {
    match status {
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        404 => ErrorKind::NotFound,
        400..=499 => ErrorKind::BadRequest,
        500..=599 => ErrorKind::ServerError,
        _ => ErrorKind::Network,
    }
}

fn fallback_detail(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::BadRequest => "The request was rejected. Check the form and try again.",
        ErrorKind::Unauthorized => "Your session has expired. Please log in again.",
        ErrorKind::Forbidden => "You do not have access to this resource.",
        ErrorKind::NotFound => "Not found.",
        ErrorKind::ServerError => "Something went wrong on the server. Please try again.",
        ErrorKind::Network => "Could not reach the server. Please try again.",
    }
}

/// Extract a message from the backend's `detail` field.
///
/// FastAPI-style bodies carry either a plain string or a list of
/// validation entries with `msg` fields; both are flattened to one line.
fn body_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Array(entries) => {
            let msgs: Vec<&str> = entries
                .iter()
                .filter_map(|e| e.get("msg").and_then(|m| m.as_str()))
                .collect();
            if msgs.is_empty() { None } else { Some(msgs.join("; ")) }
        }
        _ => None,
    }
}
