//! Server state
//!
//! All entities live in concurrent in-memory maps keyed by ids drawn from
//! atomic counters. Dropped when the process exits.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

use shared::models::{
    Invoice, Item, Notification, NotificationKind, OrderInfo, Payment, Role, User,
};
use shared::ApiError;

use crate::auth::{hash_password, CurrentUser, JwtService};
use crate::config::Config;

/// Stored account: public profile plus credentials
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub user: User,
    pub username: String,
    pub password_hash: String,
}

/// Stored notification with its audience
///
/// `recipient` is the addressed user for `TO_USER` notifications and `None`
/// for `TO_ADMIN` ones, which every administrator sees.
#[derive(Debug, Clone)]
pub struct StoredNotification {
    pub noti: Notification,
    pub recipient: Option<i64>,
}

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<StateInner>,
}

pub struct StateInner {
    jwt: JwtService,
    pub config: Config,
    pub users: DashMap<i64, UserRecord>,
    pub items: DashMap<i64, Item>,
    pub orders: DashMap<i64, OrderInfo>,
    pub payments: DashMap<i64, Payment>,
    pub invoices: DashMap<i64, Invoice>,
    pub notifications: DashMap<i64, StoredNotification>,
    pub uploads: DashMap<String, Vec<u8>>,
    user_seq: AtomicI64,
    item_seq: AtomicI64,
    order_seq: AtomicI64,
    payment_seq: AtomicI64,
    invoice_seq: AtomicI64,
    noti_seq: AtomicI64,
}

impl std::ops::Deref for AppState {
    type Target = StateInner;

    fn deref(&self) -> &StateInner {
        &self.inner
    }
}

impl AppState {
    /// Initialize state from configuration and seed the administrator account.
    pub fn initialize(config: &Config) -> Result<Self, ApiError> {
        let state = Self {
            inner: Arc::new(StateInner {
                jwt: JwtService::with_config(config.jwt.clone()),
                config: config.clone(),
                users: DashMap::new(),
                items: DashMap::new(),
                orders: DashMap::new(),
                payments: DashMap::new(),
                invoices: DashMap::new(),
                notifications: DashMap::new(),
                uploads: DashMap::new(),
                user_seq: AtomicI64::new(1),
                item_seq: AtomicI64::new(1),
                order_seq: AtomicI64::new(1),
                payment_seq: AtomicI64::new(1),
                invoice_seq: AtomicI64::new(1),
                noti_seq: AtomicI64::new(1),
            }),
        };

        let admin_id = state.next_user_id();
        let record = UserRecord {
            user: User {
                user_id: admin_id,
                name: "Administrator".to_string(),
                email: "admin@savora.test".to_string(),
                phone: "0900000000".to_string(),
                address: String::new(),
                avatar_url: String::new(),
                role: Role::Admin,
                is_active: true,
            },
            username: config.admin_username.clone(),
            password_hash: hash_password(&config.admin_password)?,
        };
        state.users.insert(admin_id, record);
        tracing::info!(username = %config.admin_username, "Seeded administrator account");

        Ok(state)
    }

    pub fn jwt(&self) -> &JwtService {
        &self.inner.jwt
    }

    // ========== ID allocation ==========

    pub fn next_user_id(&self) -> i64 {
        self.user_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_item_id(&self) -> i64 {
        self.item_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_order_id(&self) -> i64 {
        self.order_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_payment_id(&self) -> i64 {
        self.payment_seq.fetch_add(1, Ordering::Relaxed)
    }

    pub fn next_invoice_id(&self) -> i64 {
        self.invoice_seq.fetch_add(1, Ordering::Relaxed)
    }

    // ========== Lookups ==========

    pub fn find_user_by_username(&self, username: &str) -> Option<UserRecord> {
        self.users
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.value().clone())
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<UserRecord> {
        self.users
            .iter()
            .find(|entry| entry.user.email == email)
            .map(|entry| entry.value().clone())
    }

    // ========== Notifications ==========

    /// Record a notification for its audience.
    pub fn notify(
        &self,
        kind: NotificationKind,
        recipient: Option<i64>,
        title: impl Into<String>,
        describe: impl Into<String>,
    ) -> Notification {
        let noti_id = self.noti_seq.fetch_add(1, Ordering::Relaxed);
        let noti = Notification {
            noti_id,
            noti_title: title.into(),
            noti_describe: describe.into(),
            noti_type: kind,
            is_new: true,
            created_at: Utc::now(),
        };
        self.notifications.insert(
            noti_id,
            StoredNotification {
                noti: noti.clone(),
                recipient,
            },
        );
        noti
    }

    /// Whether a stored notification is addressed to the given user.
    ///
    /// `TO_USER` notifications without an explicit recipient are broadcasts
    /// to every customer.
    pub fn notification_visible_to(&self, stored: &StoredNotification, user: &CurrentUser) -> bool {
        match stored.noti.noti_type {
            NotificationKind::ToAdmin => user.is_admin(),
            NotificationKind::ToUser => match stored.recipient {
                Some(recipient) => recipient == user.user_id,
                None => !user.is_admin(),
            },
        }
    }

    /// Notifications addressed to the given user, newest first.
    pub fn notifications_for(&self, user: &CurrentUser) -> Vec<Notification> {
        let mut notis: Vec<Notification> = self
            .notifications
            .iter()
            .filter(|entry| self.notification_visible_to(entry.value(), user))
            .map(|entry| entry.noti.clone())
            .collect();
        notis.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.noti_id.cmp(&a.noti_id)));
        notis
    }

    /// Unread notifications addressed to the given user.
    pub fn unseen_count_for(&self, user: &CurrentUser) -> u32 {
        self.notifications
            .iter()
            .filter(|entry| entry.noti.is_new && self.notification_visible_to(entry.value(), user))
            .count() as u32
    }
}
