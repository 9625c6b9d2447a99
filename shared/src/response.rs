//! API Response types
//!
//! Standardized response envelope used by every backend endpoint.

use serde::{Deserialize, Serialize};

/// Standard API response code
pub const API_CODE_SUCCESS: &str = "E0000";

/// Response message: a single string or a list of strings.
///
/// Validation endpoints report one message per violated rule; everything else
/// sends a single string. Consumers display the concatenation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ErrorMessage {
    /// Concatenate multi-part messages with newlines.
    pub fn joined(&self) -> String {
        match self {
            Self::One(msg) => msg.clone(),
            Self::Many(msgs) => msgs.join("\n"),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(msg) => msg.is_empty(),
            Self::Many(msgs) => msgs.iter().all(|m| m.is_empty()),
        }
    }
}

impl std::fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.joined())
    }
}

impl From<String> for ErrorMessage {
    fn from(msg: String) -> Self {
        Self::One(msg)
    }
}

impl From<&str> for ErrorMessage {
    fn from(msg: &str) -> Self {
        Self::One(msg.to_string())
    }
}

impl From<Vec<String>> for ErrorMessage {
    fn from(msgs: Vec<String>) -> Self {
        Self::Many(msgs)
    }
}

/// Unified API response structure
///
/// All API responses follow this format:
/// ```json
/// {
///     "code": "E0000",
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (E0000 = success, others = error codes)
    pub code: String,
    /// Human-readable message (string or list of strings)
    pub message: ErrorMessage,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: ErrorMessage::One("Success".to_string()),
            data: Some(data),
        }
    }

    /// Create a successful response with custom message
    pub fn ok_with_message(data: T, message: impl Into<ErrorMessage>) -> Self {
        Self {
            code: API_CODE_SUCCESS.to_string(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: impl Into<String>, message: impl Into<ErrorMessage>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Whether this response carries the success code
    pub fn is_success(&self) -> bool {
        self.code == API_CODE_SUCCESS
    }
}
