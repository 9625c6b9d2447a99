//! Notification API

use crate::routes;
use crate::{ClientError, ClientResult, HttpClient};
use shared::client::ApiResponse;
use shared::models::{Notification, NotificationCreate, NotificationUpdate};

impl HttpClient {
    /// List notifications addressed to the logged-in user
    pub async fn list_notifications(&self) -> ClientResult<Vec<Notification>> {
        self.get::<ApiResponse<Vec<Notification>>>(routes::notification::LIST)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing notification list".to_string()))
    }

    /// Create a notification (admin)
    pub async fn create_notification(
        &self,
        payload: &NotificationCreate,
    ) -> ClientResult<Notification> {
        self.post::<ApiResponse<Notification>, _>(routes::notification::CREATE, payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing notification data".to_string()))
    }

    /// Mark every notification in the inbox as seen
    pub async fn mark_all_notifications_seen(&self) -> ClientResult<()> {
        self.post_empty::<ApiResponse<serde_json::Value>>(routes::notification::MARK_ALL_SEEN)
            .await?;
        Ok(())
    }

    /// Mark one notification as seen
    pub async fn mark_notification_seen(
        &self,
        noti_id: i64,
        payload: &NotificationUpdate,
    ) -> ClientResult<Notification> {
        let path = format!("{}/{}", routes::notification::MARK_SEEN, noti_id);
        self.post::<ApiResponse<Notification>, _>(&path, payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing notification data".to_string()))
    }
}
