//! Error type returned by every REST call.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::form_errors::FormErrors;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    /// The backend rejected the session; cookies are already cleared.
    #[error("session expired")]
    Unauthorized,
    #[error("request failed: {status}")]
    Status { status: u16, body: Option<serde_json::Value> },
    #[error("invalid response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Translate into form state, using `fallback` when the backend said
    /// nothing field- or form-specific.
    pub fn form_errors(&self, fallback: &str) -> FormErrors {
        match self {
            Self::Status { body: Some(body), .. } => FormErrors::from_server_body(body, fallback),
            _ => FormErrors::with_root(fallback),
        }
    }
}
