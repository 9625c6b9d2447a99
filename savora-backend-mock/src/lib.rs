//! Savora Backend Mock - in-memory stand-in for the storefront backend
//!
//! Implements the storefront REST contract over axum with in-memory state:
//! accounts with Argon2 password hashes and JWT sessions, menu items, orders
//! with server-authoritative status transitions, checkout/payment links,
//! invoices, notifications, and an object-storage upload endpoint.
//!
//! Built for integration tests and demos; nothing is persisted.

pub mod api;
pub mod auth;
pub mod config;
pub mod state;

pub use api::router;
pub use auth::{CurrentUser, JwtService};
pub use config::{Config, JwtConfig};
pub use state::AppState;

/// Initialize the tracing subscriber for binary and test runs.
///
/// Respects `RUST_LOG`; defaults to `info`. Safe to call more than once.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
