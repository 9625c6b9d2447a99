//! Item handlers
//!
//! Menu CRUD. Listing and detail are public; mutations are admin-only.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use rust_decimal::Decimal;

use shared::models::{Item, ItemCreate, ItemId};
use shared::{ApiError, ApiResponse, ApiResult};

use super::ok;
use crate::auth::CurrentUser;
use crate::state::AppState;

fn validate_item(name: &str, price: Decimal, category: &str) -> ApiResult<()> {
    let mut violations = Vec::new();

    if name.trim().is_empty() {
        violations.push("Item name is required".to_string());
    }
    if price.is_sign_negative() {
        violations.push("Price must not be negative".to_string());
    }
    if category.trim().is_empty() {
        violations.push("Category is required".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_all(violations))
    }
}

/// Create a menu item (admin)
pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<ItemCreate>,
) -> ApiResult<Json<ApiResponse<Item>>> {
    user.require_admin()?;
    validate_item(&req.item_name, req.price, &req.category)?;

    let item = Item {
        item_id: state.next_item_id(),
        item_name: req.item_name,
        price: req.price,
        category: req.category,
        description: req.description,
        availability: req.availability,
        image_url: req.image_url,
    };
    state.items.insert(item.item_id, item.clone());

    tracing::info!(item_id = item.item_id, item_name = %item.item_name, "Item created");
    Ok(ok(item))
}

/// Update a menu item in full (admin)
pub async fn update(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<Item>,
) -> ApiResult<Json<ApiResponse<Item>>> {
    user.require_admin()?;
    validate_item(&req.item_name, req.price, &req.category)?;

    let mut entry = state
        .items
        .get_mut(&req.item_id)
        .ok_or_else(|| ApiError::not_found("Item"))?;
    *entry = req.clone();

    Ok(ok(req))
}

/// List the menu (public)
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Item>>>> {
    let mut items: Vec<Item> = state.items.iter().map(|entry| entry.value().clone()).collect();
    items.sort_by_key(|i| i.item_id);
    Ok(ok(items))
}

/// Get one menu item (public)
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
) -> ApiResult<Json<ApiResponse<Item>>> {
    let item = state
        .items
        .get(&item_id)
        .ok_or_else(|| ApiError::not_found("Item"))?;
    Ok(ok(item.value().clone()))
}

/// Delete a menu item (admin)
pub async fn delete(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<ItemId>,
) -> ApiResult<Json<ApiResponse<()>>> {
    user.require_admin()?;

    state
        .items
        .remove(&req.item_id)
        .ok_or_else(|| ApiError::not_found("Item"))?;

    tracing::info!(item_id = req.item_id, "Item deleted");
    Ok(ok(()))
}
