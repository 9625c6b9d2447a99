//! Client-related types shared between the backend and the storefront client
//!
//! Common request/response types used in API communication.

use serde::{Deserialize, Serialize};

use crate::models::User;

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// Token lifetime in minutes
    pub expires_in: i64,
    pub user: User,
    /// Unread notifications at login time
    #[serde(default)]
    pub notice_count: u32,
}

/// Upload response data (object storage)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub size: usize,
    /// Public URL of the stored object
    pub url: String,
}
