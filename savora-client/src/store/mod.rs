//! Client-side state containers
//!
//! Explicit stores with reducer-style mutation methods, owned and injected by
//! the embedding view layer. State is transient: nothing here survives a
//! restart, and server data is simply refetched on navigation.

pub mod cart;
pub mod inbox;
pub mod menu;

pub use cart::{Cart, CartLine};
pub use inbox::NotificationInbox;
pub use menu::{filter_by_role, NavEntry, CONSOLE_MENU};
