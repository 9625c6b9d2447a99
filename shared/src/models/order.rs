//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// Serialized as the wire integers `0`..`3`. Transitions are decided by the
/// backend; clients only request them through the dedicated endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OrderStatus {
    Canceled,
    Pending,
    Ready,
    Received,
}

impl OrderStatus {
    /// Human-readable status name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Canceled => "Canceled",
            Self::Pending => "Pending",
            Self::Ready => "Ready",
            Self::Received => "Received",
        }
    }

    /// Whether the order still awaits fulfilment
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Pending | Self::Ready)
    }
}

impl From<OrderStatus> for u8 {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Canceled => 0,
            OrderStatus::Pending => 1,
            OrderStatus::Ready => 2,
            OrderStatus::Received => 3,
        }
    }
}

impl TryFrom<u8> for OrderStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Canceled),
            1 => Ok(Self::Pending),
            2 => Ok(Self::Ready),
            3 => Ok(Self::Received),
            other => Err(format!("unknown order status: {}", other)),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Order header
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub order_id: i64,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub note: String,
    /// Order total, decimal string on the wire
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub user_id: i64,
}

/// Order line: item snapshot at ordering time plus quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: i64,
    pub item_name: String,
    pub quantity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub image_url: String,
}

/// Order header plus its lines
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderInfo {
    #[serde(flatten)]
    pub order: Order,
    #[serde(default)]
    pub details: Vec<OrderLine>,
}

/// Line reference used in create/checkout payloads
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDetail {
    pub item_id: i64,
    pub quantity: u32,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: i64,
    pub status: OrderStatus,
    pub note: String,
    pub details: Vec<OrderDetail>,
}

/// Cancel order payload (note records the reason)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCancel {
    pub order_id: i64,
    pub note: String,
}

/// Order reference payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OrderId {
    pub order_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(serde_json::to_string(&OrderStatus::Canceled).unwrap(), "0");
        assert_eq!(serde_json::to_string(&OrderStatus::Received).unwrap(), "3");

        let status: OrderStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, OrderStatus::Ready);

        assert!(serde_json::from_str::<OrderStatus>("4").is_err());
    }

    #[test]
    fn test_order_info_flattens_header() {
        let json = serde_json::json!({
            "order_id": 7,
            "order_date": "2024-05-01T10:30:00Z",
            "status": 1,
            "note": "",
            "total": "90000",
            "user_id": 3,
            "details": [
                {"item_id": 1, "item_name": "Pho Bo", "quantity": 2, "price": "45000", "image_url": ""}
            ]
        });

        let info: OrderInfo = serde_json::from_value(json).unwrap();
        assert_eq!(info.order.order_id, 7);
        assert_eq!(info.details.len(), 1);
        assert_eq!(info.details[0].quantity, 2);
    }
}
