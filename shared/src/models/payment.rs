//! Payment Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::OrderDetail;

/// Payment record, produced by the payment-link flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub payment_method: String,
    pub payment_status: String,
    pub payment_date: DateTime<Utc>,
}

/// Checkout payload sent to the payment-link endpoint
///
/// The total is advisory; the backend re-prices the details before charging.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub user_id: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub note: String,
    pub details: Vec<OrderDetail>,
}

/// Payment redirect produced by checkout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentLink {
    pub order_id: i64,
    pub checkout_url: String,
}
