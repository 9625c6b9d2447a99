//! Notification handlers
//!
//! Listing and the two mark-seen calls. The read flag is the only field a
//! client can change on an existing notification.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use shared::models::{Notification, NotificationCreate, NotificationUpdate};
use shared::{ApiError, ApiResponse, ApiResult};

use super::ok;
use crate::auth::CurrentUser;
use crate::state::AppState;

/// List notifications addressed to the logged-in user, newest first
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<ApiResponse<Vec<Notification>>>> {
    Ok(ok(state.notifications_for(&user)))
}

/// Create a notification (admin)
///
/// `TO_USER` notifications created here are broadcast to every customer.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<NotificationCreate>,
) -> ApiResult<Json<ApiResponse<Notification>>> {
    user.require_admin()?;

    if req.noti_title.trim().is_empty() {
        return Err(ApiError::validation("Title is required"));
    }

    // No explicit recipient: TO_USER broadcasts to customers, TO_ADMIN to admins
    let noti = state.notify(req.noti_type, None, req.noti_title, req.noti_describe);
    Ok(ok(noti))
}

/// Mark every notification addressed to the logged-in user as seen
pub async fn mark_all_seen(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<ApiResponse<()>>> {
    for mut entry in state.notifications.iter_mut() {
        if state.notification_visible_to(entry.value(), &user) {
            entry.value_mut().noti.is_new = false;
        }
    }
    Ok(ok(()))
}

/// Mark one notification as seen
///
/// Only the read flag of the payload is honored.
pub async fn mark_seen(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(noti_id): Path<i64>,
    Json(req): Json<NotificationUpdate>,
) -> ApiResult<Json<ApiResponse<Notification>>> {
    let mut entry = state
        .notifications
        .get_mut(&noti_id)
        .ok_or_else(|| ApiError::not_found("Notification"))?;

    if !state.notification_visible_to(entry.value(), &user) {
        return Err(ApiError::not_found("Notification"));
    }

    entry.value_mut().noti.is_new = req.is_new;
    Ok(ok(entry.noti.clone()))
}
