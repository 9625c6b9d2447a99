//! User API

use crate::routes;
use crate::{ClientError, ClientResult, HttpClient};
use shared::client::{ApiResponse, LoginRequest, LoginResponse};
use shared::models::{ChangePassword, ForgotPassword, User, UserRegister, UserUpdate};

impl HttpClient {
    /// Register a new account
    pub async fn register(&self, payload: &UserRegister) -> ClientResult<User> {
        self.post::<ApiResponse<User>, _>(routes::user::REGISTER, payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing user data".to_string()))
    }

    /// Login with username and password
    ///
    /// On success the returned bearer token is attached to all subsequent
    /// requests made through this client.
    pub async fn login(&mut self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .post::<ApiResponse<LoginResponse>, _>(routes::user::LOGIN, &request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing login data".to_string()))?;

        self.set_token(&response.access_token);
        Ok(response)
    }

    /// Get the logged-in user's profile
    pub async fn get_profile(&self) -> ClientResult<User> {
        self.get::<ApiResponse<User>>(routes::user::GET_INFO)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing user data".to_string()))
    }

    /// Update the logged-in user's profile
    pub async fn update_profile(&self, payload: &UserUpdate) -> ClientResult<User> {
        self.post::<ApiResponse<User>, _>(routes::user::UPDATE_INFO, payload)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing user data".to_string()))
    }

    /// Change the logged-in user's password
    pub async fn change_password(&self, payload: &ChangePassword) -> ClientResult<()> {
        self.post::<ApiResponse<serde_json::Value>, _>(routes::user::CHANGE_PASSWORD, payload)
            .await?;
        Ok(())
    }

    /// Request a password reset email
    pub async fn forgot_password(&self, payload: &ForgotPassword) -> ClientResult<()> {
        self.post::<ApiResponse<serde_json::Value>, _>(routes::user::FORGOT_PASSWORD, payload)
            .await?;
        Ok(())
    }

    /// List all users (admin)
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.get::<ApiResponse<Vec<User>>>(routes::user::LIST)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing user list".to_string()))
    }
}
