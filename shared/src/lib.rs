//! Shared types for the Savora storefront
//!
//! Wire contract exchanged between the storefront client and the backend of
//! record: entity models, request/response payloads, the response envelope,
//! and error types.

pub mod client;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorCode, ApiResult};
pub use response::{ApiResponse, ErrorMessage, API_CODE_SUCCESS};
