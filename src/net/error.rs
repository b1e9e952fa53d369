//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every client failure lands in one `ApiError` so services can propagate it
//! with `?` and pages can show its `Display` text directly.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed: {status} {message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected type.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// HTTP is only wired up in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status { status, message: message.into() }
    }

    /// HTTP status code for `Status` errors.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
