//! Savora Client - HTTP client for the storefront backend
//!
//! Provides typed wrappers over the backend REST API, the client-side state
//! containers (cart, session, notification inbox, navigation), and the pure
//! formatting/validation helpers used by storefront views.

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod http;
pub mod routes;
pub mod session;
pub mod store;
pub mod validate;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::Session;
pub use store::{Cart, CartLine, NavEntry, NotificationInbox};

// Re-export shared types for convenience
pub use shared::client::{ApiResponse, LoginRequest, LoginResponse, UploadResponse};
pub use shared::models::{
    Item, Notification, Order, OrderInfo, OrderStatus, PaymentLink, Role, User,
};
