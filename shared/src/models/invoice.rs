//! Invoice Model
//!
//! Read-only billing view joining an order, its customer snapshot, and the
//! payment outcome. Produced entirely by the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::Order;
use super::payment::Payment;

/// Customer snapshot captured at invoicing time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Order header with its customer snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceOrder {
    #[serde(flatten)]
    pub order: Order,
    pub customer: CustomerSnapshot,
}

/// Invoice entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: i64,
    pub invoice_date: DateTime<Utc>,
    pub order_id: i64,
    pub order: InvoiceOrder,
    pub payment: Payment,
}
