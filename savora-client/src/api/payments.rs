//! Payment API

use crate::routes;
use crate::store::Cart;
use crate::{ClientError, ClientResult, HttpClient};
use shared::client::ApiResponse;
use shared::models::{CheckoutRequest, PaymentLink};

impl HttpClient {
    /// Create a payment link for a checkout request
    pub async fn create_payment_link(
        &self,
        payload: &CheckoutRequest,
    ) -> ClientResult<PaymentLink> {
        self.post::<ApiResponse<PaymentLink>, _>(routes::payment::CREATE_LINK, payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing payment link".to_string()))
    }

    /// Check out the cart: request a payment link and, on success, empty the
    /// cart. On failure the cart is left untouched so the user can retry.
    pub async fn checkout(
        &self,
        cart: &mut Cart,
        user_id: i64,
        note: impl Into<String>,
    ) -> ClientResult<PaymentLink> {
        let payload = CheckoutRequest {
            user_id,
            total: cart.total(),
            note: note.into(),
            details: cart.to_details(),
        };

        let link = self.create_payment_link(&payload).await?;
        cart.clear();
        Ok(link)
    }
}
