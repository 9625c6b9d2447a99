//! Invoice API

use crate::routes;
use crate::{ClientError, ClientResult, HttpClient};
use shared::client::ApiResponse;
use shared::models::Invoice;

impl HttpClient {
    /// List invoices visible to the logged-in user
    pub async fn list_invoices(&self) -> ClientResult<Vec<Invoice>> {
        self.get::<ApiResponse<Vec<Invoice>>>(routes::invoice::LIST)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing invoice list".to_string()))
    }
}
