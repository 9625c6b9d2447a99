//! Client error types

use thiserror::Error;

use shared::response::ApiResponse;

/// Fallback message when the server error payload has an unexpected shape
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Error reported by the backend with a response code
    #[error("{message}")]
    Api { code: String, message: String },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Build an error from a non-success HTTP response body.
    ///
    /// The backend reports errors through the standard envelope, with the
    /// message either a single string or an array of strings; the parts are
    /// concatenated for display. Payloads that do not match the envelope fall
    /// back to [`GENERIC_ERROR_MESSAGE`].
    pub fn from_error_body(status: reqwest::StatusCode, body: &str) -> Self {
        let envelope = serde_json::from_str::<ApiResponse<serde_json::Value>>(body).ok();
        let message = envelope
            .as_ref()
            .map(|resp| resp.message.joined())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        match status {
            reqwest::StatusCode::UNAUTHORIZED => Self::Unauthorized,
            reqwest::StatusCode::FORBIDDEN => Self::Forbidden(message),
            reqwest::StatusCode::NOT_FOUND => Self::NotFound(message),
            reqwest::StatusCode::BAD_REQUEST => Self::Validation(message),
            _ => match envelope {
                Some(resp) => Self::Api {
                    code: resp.code,
                    message,
                },
                None => Self::Internal(message),
            },
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
