//! Payment handlers
//!
//! Checkout re-prices the submitted details against the current menu before
//! anything is created; the client-computed total is verified, not trusted.

use axum::{extract::State, Extension, Json};
use chrono::Utc;

use shared::models::{CheckoutRequest, CustomerSnapshot, Invoice, InvoiceOrder, Payment, PaymentLink};
use shared::{ApiError, ApiResponse, ApiResult};

use super::ok;
use super::orders::{build_lines, place_order};
use crate::auth::CurrentUser;
use crate::state::AppState;

/// Create a payment link for a checkout request
///
/// Creates the pending order, its payment record, and the invoice, and
/// returns the redirect URL of the external payment page.
pub async fn create_link(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<CheckoutRequest>,
) -> ApiResult<Json<ApiResponse<PaymentLink>>> {
    if req.user_id != user.user_id && !user.is_admin() {
        return Err(ApiError::forbidden(
            "Cannot check out on behalf of another user",
        ));
    }

    let customer = {
        let record = state
            .users
            .get(&req.user_id)
            .ok_or_else(|| ApiError::not_found("User"))?;
        CustomerSnapshot {
            name: record.user.name.clone(),
            address: record.user.address.clone(),
            phone: record.user.phone.clone(),
        }
    };

    let (lines, total) = build_lines(&state, &req.details)?;
    if total != req.total {
        tracing::warn!(
            user_id = req.user_id,
            submitted = %req.total,
            computed = %total,
            "Checkout total mismatch"
        );
        return Err(ApiError::business_rule(
            "Order total does not match current menu prices",
        ));
    }

    let info = place_order(&state, req.user_id, req.note, lines, total);

    let payment = Payment {
        payment_id: state.next_payment_id(),
        payment_method: "payment_link".to_string(),
        payment_status: "PENDING".to_string(),
        payment_date: Utc::now(),
    };
    state.payments.insert(payment.payment_id, payment.clone());

    let invoice = Invoice {
        invoice_id: state.next_invoice_id(),
        invoice_date: Utc::now(),
        order_id: info.order.order_id,
        order: InvoiceOrder {
            order: info.order.clone(),
            customer,
        },
        payment,
    };
    state.invoices.insert(invoice.invoice_id, invoice);

    let checkout_url = format!(
        "{}/checkout/{}",
        state.config.payment_base_url.trim_end_matches('/'),
        info.order.order_id
    );

    Ok(ok(PaymentLink {
        order_id: info.order.order_id,
        checkout_url,
    }))
}
