//! User handlers
//!
//! Registration, login, profile management, and the admin user list.

use axum::{extract::State, Extension, Json};

use shared::client::{LoginRequest, LoginResponse};
use shared::models::{ChangePassword, ForgotPassword, User, UserRegister, UserUpdate};
use shared::{ApiError, ApiResponse, ApiResult};

use super::ok;
use crate::auth::{self, CurrentUser};
use crate::state::{AppState, UserRecord};

fn validate_register(req: &UserRegister) -> ApiResult<()> {
    let mut violations = Vec::new();

    for (value, field) in [
        (&req.username, "Username"),
        (&req.password, "Password"),
        (&req.name, "Name"),
        (&req.email, "Email"),
        (&req.phone, "Phone"),
    ] {
        if value.trim().is_empty() {
            violations.push(format!("{} is required", field));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation_all(violations))
    }
}

/// Register handler
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<UserRegister>,
) -> ApiResult<Json<ApiResponse<User>>> {
    validate_register(&req)?;

    if state.find_user_by_username(&req.username).is_some() {
        return Err(ApiError::conflict("Username"));
    }
    if state.find_user_by_email(&req.email).is_some() {
        return Err(ApiError::conflict("Email"));
    }

    let user_id = state.next_user_id();
    let record = UserRecord {
        user: User {
            user_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            avatar_url: req.avatar_url,
            role: req.role,
            is_active: true,
        },
        username: req.username.clone(),
        password_hash: auth::hash_password(&req.password)?,
    };
    let user = record.user.clone();
    state.users.insert(user_id, record);

    tracing::info!(user_id, username = %req.username, "User registered");
    Ok(ok(user))
}

/// Login handler
///
/// Authenticates credentials and returns a bearer token with the profile.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<ApiResponse<LoginResponse>>> {
    // Unified error message to prevent username enumeration
    let record = state
        .find_user_by_username(&req.username)
        .ok_or_else(|| ApiError::invalid("Invalid username or password"))?;

    if !record.user.is_active {
        return Err(ApiError::forbidden("Account has been disabled"));
    }

    if !auth::verify_password(&req.password, &record.password_hash)? {
        tracing::warn!(username = %req.username, "Login failed - invalid credentials");
        return Err(ApiError::invalid("Invalid username or password"));
    }

    let token = state.jwt().generate_token(&record.user, &record.username)?;
    let current = CurrentUser {
        user_id: record.user.user_id,
        username: record.username.clone(),
        role: record.user.role,
    };

    tracing::info!(
        user_id = record.user.user_id,
        username = %record.username,
        role = %record.user.role,
        "User logged in"
    );

    Ok(ok(LoginResponse {
        access_token: token,
        token_type: "Bearer".to_string(),
        expires_in: state.jwt().expiration_minutes(),
        notice_count: state.unseen_count_for(&current),
        user: record.user,
    }))
}

/// Get the logged-in user's profile
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let record = state
        .users
        .get(&user.user_id)
        .ok_or_else(|| ApiError::not_found("User"))?;
    Ok(ok(record.user.clone()))
}

/// Update the logged-in user's profile
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<UserUpdate>,
) -> ApiResult<Json<ApiResponse<User>>> {
    let mut record = state
        .users
        .get_mut(&user.user_id)
        .ok_or_else(|| ApiError::not_found("User"))?;

    record.user.name = req.name;
    record.user.email = req.email;
    record.user.phone = req.phone;
    record.user.address = req.address;
    record.user.avatar_url = req.avatar_url;

    Ok(ok(record.user.clone()))
}

/// Change the logged-in user's password
pub async fn change_password(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<ChangePassword>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let mut record = state
        .users
        .get_mut(&user.user_id)
        .ok_or_else(|| ApiError::not_found("User"))?;

    if !auth::verify_password(&req.old_password, &record.password_hash)? {
        return Err(ApiError::invalid("Old password is incorrect"));
    }
    if req.new_password.trim().is_empty() {
        return Err(ApiError::validation("New password is required"));
    }

    record.password_hash = auth::hash_password(&req.new_password)?;
    tracing::info!(user_id = user.user_id, "Password changed");
    Ok(ok(()))
}

/// Request a password reset
///
/// Always reports success so the endpoint cannot be used to probe for
/// registered addresses.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(req): Json<ForgotPassword>,
) -> ApiResult<Json<ApiResponse<()>>> {
    if state.find_user_by_email(&req.email).is_some() {
        tracing::info!(email = %req.email, "Password reset requested");
    }
    Ok(Json(ApiResponse::ok_with_message(
        (),
        "If the address is registered, a reset link has been sent",
    )))
}

/// List every user (admin)
pub async fn list(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<ApiResponse<Vec<User>>>> {
    user.require_admin()?;

    let mut users: Vec<User> = state
        .users
        .iter()
        .map(|entry| entry.user.clone())
        .collect();
    users.sort_by_key(|u| u.user_id);
    Ok(ok(users))
}
