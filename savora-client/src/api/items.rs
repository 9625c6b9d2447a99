//! Item API

use crate::routes;
use crate::{ClientError, ClientResult, HttpClient};
use shared::client::ApiResponse;
use shared::models::{Item, ItemCreate, ItemId};

impl HttpClient {
    /// Create a new menu item (admin)
    pub async fn create_item(&self, payload: &ItemCreate) -> ClientResult<Item> {
        self.post::<ApiResponse<Item>, _>(routes::item::CREATE, payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing item data".to_string()))
    }

    /// Update a menu item (admin); the full record is sent
    pub async fn update_item(&self, payload: &Item) -> ClientResult<Item> {
        self.post::<ApiResponse<Item>, _>(routes::item::UPDATE, payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing item data".to_string()))
    }

    /// List the menu (public)
    pub async fn list_items(&self) -> ClientResult<Vec<Item>> {
        self.get::<ApiResponse<Vec<Item>>>(routes::item::LIST)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing item list".to_string()))
    }

    /// Get one menu item (public)
    pub async fn get_item(&self, item_id: i64) -> ClientResult<Item> {
        let path = format!("{}/{}", routes::item::INFO, item_id);
        self.get::<ApiResponse<Item>>(&path)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing item data".to_string()))
    }

    /// Delete a menu item (admin)
    pub async fn delete_item(&self, item_id: i64) -> ClientResult<()> {
        self.delete::<ApiResponse<serde_json::Value>, _>(
            routes::item::DELETE,
            &ItemId { item_id },
        )
        .await?;
        Ok(())
    }
}
