//! Item Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub item_id: i64,
    pub item_name: String,
    /// Unit price, decimal string on the wire
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub category: String,
    pub description: String,
    pub availability: bool,
    pub image_url: String,
}

/// Create item payload (admin)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub item_name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub category: String,
    pub description: String,
    pub availability: bool,
    pub image_url: String,
}

/// Item reference payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemId {
    pub item_id: i64,
}
