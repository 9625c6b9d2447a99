//! Order handlers
//!
//! Order placement and the status lifecycle. Transitions are decided here:
//! Pending -> Ready (admin), Ready -> Received (owning customer), and
//! Pending -> Canceled (owner or admin). Everything else is rejected.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use chrono::Utc;
use rust_decimal::Decimal;

use shared::models::{
    NotificationKind, Order, OrderCancel, OrderCreate, OrderDetail, OrderId, OrderInfo, OrderLine,
    OrderStatus,
};
use shared::{ApiError, ApiResponse, ApiResult};

use super::ok;
use crate::auth::CurrentUser;
use crate::state::AppState;

/// Snapshot the menu into order lines and compute the total.
///
/// Shared with checkout, which re-prices the submitted details against the
/// current menu instead of trusting the client total.
pub(crate) fn build_lines(
    state: &AppState,
    details: &[OrderDetail],
) -> ApiResult<(Vec<OrderLine>, Decimal)> {
    if details.is_empty() {
        return Err(ApiError::validation("Order must contain at least one item"));
    }

    let mut lines = Vec::with_capacity(details.len());
    let mut total = Decimal::ZERO;

    for detail in details {
        if detail.quantity == 0 {
            return Err(ApiError::validation("Quantity must be at least 1"));
        }

        let item = state
            .items
            .get(&detail.item_id)
            .ok_or_else(|| ApiError::not_found(format!("Item {}", detail.item_id)))?;
        if !item.availability {
            return Err(ApiError::business_rule(format!(
                "'{}' is currently unavailable",
                item.item_name
            )));
        }

        total += item.price * Decimal::from(detail.quantity);
        lines.push(OrderLine {
            item_id: item.item_id,
            item_name: item.item_name.clone(),
            quantity: detail.quantity,
            price: item.price,
            image_url: item.image_url.clone(),
        });
    }

    Ok((lines, total))
}

/// Store a new pending order and notify the administrators.
pub(crate) fn place_order(
    state: &AppState,
    user_id: i64,
    note: String,
    lines: Vec<OrderLine>,
    total: Decimal,
) -> OrderInfo {
    let order_id = state.next_order_id();
    let info = OrderInfo {
        order: Order {
            order_id,
            order_date: Utc::now(),
            status: OrderStatus::Pending,
            note,
            total,
            user_id,
        },
        details: lines,
    };
    state.orders.insert(order_id, info.clone());

    state.notify(
        NotificationKind::ToAdmin,
        None,
        format!("New order #{}", order_id),
        "A new order has been placed and is awaiting preparation".to_string(),
    );
    tracing::info!(order_id, user_id, total = %total, "Order placed");

    info
}

/// Place a new order
///
/// Orders always start Pending; any status in the payload is ignored.
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<OrderCreate>,
) -> ApiResult<Json<ApiResponse<OrderInfo>>> {
    if req.user_id != user.user_id && !user.is_admin() {
        return Err(ApiError::forbidden("Cannot order on behalf of another user"));
    }

    let (lines, total) = build_lines(&state, &req.details)?;
    let info = place_order(&state, req.user_id, req.note, lines, total);
    Ok(ok(info))
}

/// List every order (admin)
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<ApiResponse<Vec<Order>>>> {
    user.require_admin()?;

    let mut orders: Vec<Order> = state
        .orders
        .iter()
        .map(|entry| entry.order.clone())
        .collect();
    orders.sort_by_key(|o| std::cmp::Reverse(o.order_id));
    Ok(ok(orders))
}

/// List the logged-in user's orders
pub async fn list_by_user(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<ApiResponse<Vec<Order>>>> {
    let mut orders: Vec<Order> = state
        .orders
        .iter()
        .filter(|entry| entry.order.user_id == user.user_id)
        .map(|entry| entry.order.clone())
        .collect();
    orders.sort_by_key(|o| std::cmp::Reverse(o.order_id));
    Ok(ok(orders))
}

/// Get one order with its lines (owner or admin)
pub async fn get_by_id(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(order_id): Path<i64>,
) -> ApiResult<Json<ApiResponse<OrderInfo>>> {
    let entry = state
        .orders
        .get(&order_id)
        .ok_or_else(|| ApiError::not_found("Order"))?;

    if entry.order.user_id != user.user_id && !user.is_admin() {
        return Err(ApiError::forbidden("Not your order"));
    }
    Ok(ok(entry.value().clone()))
}

/// Pending -> Ready (admin)
pub async fn to_ready(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<OrderId>,
) -> ApiResult<Json<ApiResponse<Order>>> {
    user.require_admin()?;

    let order = {
        let mut entry = state
            .orders
            .get_mut(&req.order_id)
            .ok_or_else(|| ApiError::not_found("Order"))?;

        if entry.order.status != OrderStatus::Pending {
            return Err(ApiError::business_rule(format!(
                "Cannot move a {} order to Ready",
                entry.order.status
            )));
        }
        entry.order.status = OrderStatus::Ready;
        entry.order.clone()
    };

    state.notify(
        NotificationKind::ToUser,
        Some(order.user_id),
        format!("Order #{} is ready", order.order_id),
        "Your order has been prepared and is on its way".to_string(),
    );
    tracing::info!(order_id = order.order_id, "Order marked ready");
    Ok(ok(order))
}

/// Ready -> Received (owning customer)
pub async fn to_received(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<OrderId>,
) -> ApiResult<Json<ApiResponse<Order>>> {
    let order = {
        let mut entry = state
            .orders
            .get_mut(&req.order_id)
            .ok_or_else(|| ApiError::not_found("Order"))?;

        if entry.order.user_id != user.user_id {
            return Err(ApiError::forbidden("Not your order"));
        }
        if entry.order.status != OrderStatus::Ready {
            return Err(ApiError::business_rule(format!(
                "Cannot mark a {} order as Received",
                entry.order.status
            )));
        }
        entry.order.status = OrderStatus::Received;
        entry.order.clone()
    };

    state.notify(
        NotificationKind::ToAdmin,
        None,
        format!("Order #{} received", order.order_id),
        "The customer has confirmed delivery".to_string(),
    );
    tracing::info!(order_id = order.order_id, "Order marked received");
    Ok(ok(order))
}

/// Pending -> Canceled (owner or admin), with the reason recorded in the note
pub async fn to_canceled(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<OrderCancel>,
) -> ApiResult<Json<ApiResponse<Order>>> {
    let order = {
        let mut entry = state
            .orders
            .get_mut(&req.order_id)
            .ok_or_else(|| ApiError::not_found("Order"))?;

        if entry.order.user_id != user.user_id && !user.is_admin() {
            return Err(ApiError::forbidden("Not your order"));
        }
        if entry.order.status != OrderStatus::Pending {
            return Err(ApiError::business_rule(
                "Only pending orders can be canceled",
            ));
        }
        entry.order.status = OrderStatus::Canceled;
        entry.order.note = req.note;
        entry.order.clone()
    };

    if user.is_admin() {
        state.notify(
            NotificationKind::ToUser,
            Some(order.user_id),
            format!("Order #{} canceled", order.order_id),
            order.note.clone(),
        );
    } else {
        state.notify(
            NotificationKind::ToAdmin,
            None,
            format!("Order #{} canceled", order.order_id),
            order.note.clone(),
        );
    }
    tracing::info!(order_id = order.order_id, "Order canceled");
    Ok(ok(order))
}
