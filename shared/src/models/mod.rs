//! Data models
//!
//! Shared between the storefront client and the backend API.
//! All IDs are `i64`; monetary fields are decimal strings on the wire.

pub mod invoice;
pub mod item;
pub mod notification;
pub mod order;
pub mod payment;
pub mod role;
pub mod user;

// Re-exports
pub use invoice::*;
pub use item::*;
pub use notification::*;
pub use order::*;
pub use payment::*;
pub use role::*;
pub use user::*;
