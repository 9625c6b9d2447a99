//! Role-filtered navigation
//!
//! Console navigation entries tagged with the roles allowed to see them.
//! Presentation-layer filtering only; the backend enforces authorization on
//! every admin endpoint.

use shared::models::Role;

/// One console navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    /// Route key (e.g. "admin/item")
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    /// Roles allowed to see this entry
    pub roles: &'static [Role],
}

/// Default console menu: the account entry is shared, order and item
/// management are admin-only.
pub const CONSOLE_MENU: &[NavEntry] = &[
    NavEntry {
        key: "admin/user",
        label: "User",
        roles: &[Role::Customer, Role::Admin],
    },
    NavEntry {
        key: "admin/order",
        label: "Order",
        roles: &[Role::Admin],
    },
    NavEntry {
        key: "admin/item",
        label: "Item",
        roles: &[Role::Admin],
    },
];

/// Filter menu entries by role. An unknown role (logged out) sees nothing.
pub fn filter_by_role(menu: &[NavEntry], role: Option<Role>) -> Vec<NavEntry> {
    match role {
        Some(role) => menu
            .iter()
            .filter(|entry| entry.roles.contains(&role))
            .copied()
            .collect(),
        None => Vec::new(),
    }
}
