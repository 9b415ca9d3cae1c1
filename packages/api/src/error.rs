//! Errors returned by every [`crate::PostsApi`] implementation.

use thiserror::Error;

/// Failure of a post/comment operation. `Display` is what the dashboard banner shows.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected on the client before any request was made.
    #[error("{0}")]
    Validation(String),
    /// The request never produced a response (DNS, connection, CORS...).
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),
    /// The service answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body was not the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        ApiError::Status {
            status,
            message: message.into(),
        }
    }

    /// `Status` error with the generic `Request failed with status code N` text.
    pub fn from_status(status: u16) -> Self {
        Self::status(status, format!("Request failed with status code {status}"))
    }

    pub fn not_found(what: &str, id: u64) -> Self {
        Self::status(404, format!("{what} with id '{id}' not found"))
    }
}
