//! User Model

use serde::{Deserialize, Serialize};

use super::role::Role;

/// User entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar_url: String,
    pub role: Role,
    pub is_active: bool,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRegister {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar_url: String,
    pub role: Role,
}

/// Profile update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub avatar_url: String,
}

/// Password change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePassword {
    pub old_password: String,
    pub new_password: String,
}

/// Password reset request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgotPassword {
    pub email: String,
}

/// User reference payload
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserId {
    pub user_id: i64,
}
