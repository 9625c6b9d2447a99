//! Invoice handlers

use axum::{extract::State, Extension, Json};

use shared::models::Invoice;
use shared::{ApiResponse, ApiResult};

use super::ok;
use crate::auth::CurrentUser;
use crate::state::AppState;

/// List invoices: administrators see all, customers only their own
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<ApiResponse<Vec<Invoice>>>> {
    let mut invoices: Vec<Invoice> = state
        .invoices
        .iter()
        .filter(|entry| user.is_admin() || entry.order.order.user_id == user.user_id)
        .map(|entry| entry.value().clone())
        .collect();
    invoices.sort_by_key(|i| std::cmp::Reverse(i.invoice_id));
    Ok(ok(invoices))
}
