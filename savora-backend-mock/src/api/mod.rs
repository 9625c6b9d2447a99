//! API routes
//!
//! # Structure
//!
//! - [`users`] - registration, login, profile, password, admin user list
//! - [`items`] - menu item CRUD
//! - [`orders`] - order placement, listing, status transitions
//! - [`payments`] - checkout / payment-link creation
//! - [`invoices`] - billing summaries
//! - [`notifications`] - inbox listing and mark-seen
//! - [`storage`] - image upload and retrieval

pub mod invoices;
pub mod items;
pub mod notifications;
pub mod orders;
pub mod payments;
pub mod storage;
pub mod users;

use axum::{
    middleware,
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use shared::ApiResponse;

use crate::auth;
use crate::state::AppState;

/// Wrap handler data in the standard success envelope
pub(crate) fn ok<T>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::ok(data))
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        // User
        .route("/user/register", post(users::register))
        .route("/user/login", post(users::login))
        .route("/user/get-user-info", get(users::get_profile))
        .route("/user/update-user", post(users::update_profile))
        .route("/user/change-password", post(users::change_password))
        .route("/user/forgot-password", post(users::forgot_password))
        .route("/user/get-list-user", get(users::list))
        // Item
        .route("/item/create-new-item", post(items::create))
        .route("/item/update-item", post(items::update))
        .route("/item/get-list-item", get(items::list))
        .route("/item/get-item-info/{id}", get(items::get_by_id))
        .route("/item/delete-item", delete(items::delete))
        // Order
        .route("/order/create-new-order", post(orders::create))
        .route("/order/get-list-order", get(orders::list))
        .route("/order/get-list-order-by-user", get(orders::list_by_user))
        .route("/order/get-order-info/{id}", get(orders::get_by_id))
        .route("/order/change-order-to-delivery", post(orders::to_ready))
        .route("/order/change-order-to-received", post(orders::to_received))
        .route("/order/change-order-to-cancel", post(orders::to_canceled))
        // Payment
        .route("/payment/create-payment-link", post(payments::create_link))
        // Invoice
        .route("/invoice/invoices", get(invoices::list))
        // Notification
        .route(
            "/notification/get-all-notifications",
            get(notifications::list),
        )
        .route(
            "/notification/create-notification",
            post(notifications::create),
        )
        .route(
            "/notification/mark-all-as-seen",
            post(notifications::mark_all_seen),
        )
        .route(
            "/notification/update-notification/{id}",
            post(notifications::mark_seen),
        )
        // Storage
        .route("/storage/upload", post(storage::upload))
        .route("/storage/files/{name}", get(storage::get_file))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_auth,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
