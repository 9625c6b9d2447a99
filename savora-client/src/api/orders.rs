//! Order API
//!
//! Status transitions are requested through dedicated endpoints; the backend
//! decides whether a transition is legal.

use crate::routes;
use crate::{ClientError, ClientResult, HttpClient};
use shared::client::ApiResponse;
use shared::models::{Order, OrderCancel, OrderCreate, OrderId, OrderInfo};

impl HttpClient {
    /// Place a new order
    pub async fn create_order(&self, payload: &OrderCreate) -> ClientResult<OrderInfo> {
        self.post::<ApiResponse<OrderInfo>, _>(routes::order::CREATE, payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order data".to_string()))
    }

    /// List every order (admin)
    pub async fn list_orders(&self) -> ClientResult<Vec<Order>> {
        self.get::<ApiResponse<Vec<Order>>>(routes::order::LIST)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order list".to_string()))
    }

    /// List the logged-in user's orders
    pub async fn list_my_orders(&self) -> ClientResult<Vec<Order>> {
        self.get::<ApiResponse<Vec<Order>>>(routes::order::LIST_BY_USER)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order list".to_string()))
    }

    /// Get one order with its lines
    pub async fn get_order(&self, order_id: i64) -> ClientResult<OrderInfo> {
        let path = format!("{}/{}", routes::order::INFO, order_id);
        self.get::<ApiResponse<OrderInfo>>(&path)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order data".to_string()))
    }

    /// Request Pending -> Ready (admin)
    pub async fn mark_order_ready(&self, order_id: i64) -> ClientResult<Order> {
        self.post::<ApiResponse<Order>, _>(routes::order::TO_DELIVERY, &OrderId { order_id })
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order data".to_string()))
    }

    /// Request Ready -> Received (owning customer)
    pub async fn mark_order_received(&self, order_id: i64) -> ClientResult<Order> {
        self.post::<ApiResponse<Order>, _>(routes::order::TO_RECEIVED, &OrderId { order_id })
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order data".to_string()))
    }

    /// Request cancellation with a reason note
    pub async fn cancel_order(&self, order_id: i64, note: impl Into<String>) -> ClientResult<Order> {
        let payload = OrderCancel {
            order_id,
            note: note.into(),
        };
        self.post::<ApiResponse<Order>, _>(routes::order::TO_CANCEL, &payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing order data".to_string()))
    }
}
