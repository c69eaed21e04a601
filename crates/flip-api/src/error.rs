//! API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the remote API.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Transport-level failure: the request never produced a response.
    /// Retryable; surfaced to the user with a "try again" affordance.
    #[error("Network unavailable: {0}")]
    Network(String),

    /// The request was valid but the resource does not exist. Rendered as
    /// "item unavailable", distinct from a generic network error.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server rejected the request with a message (account calls).
    #[error("{0}")]
    Rejected(String),

    /// Any other non-success HTTP response.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body did not parse as the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    /// Check whether this is the item-unavailable case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Parse(e.to_string())
    }
}
