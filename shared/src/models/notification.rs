//! Notification Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Notification audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    ToUser,
    ToAdmin,
}

/// Notification entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub noti_id: i64,
    pub noti_title: String,
    pub noti_describe: String,
    pub noti_type: NotificationKind,
    /// Unread flag; the only field clients may mutate (via mark-seen)
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
}

/// Create notification payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationCreate {
    pub noti_title: String,
    pub noti_describe: String,
    pub noti_type: NotificationKind,
    pub is_new: bool,
    pub created_at: DateTime<Utc>,
}

/// Update notification payload (mark-seen)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationUpdate {
    pub noti_title: String,
    pub noti_describe: String,
    pub noti_type: NotificationKind,
    pub is_new: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_wire_values() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::ToUser).unwrap(),
            r#""TO_USER""#
        );
        assert_eq!(
            serde_json::to_string(&NotificationKind::ToAdmin).unwrap(),
            r#""TO_ADMIN""#
        );
    }
}
