//! Authentication
//!
//! JWT issuance/validation, Argon2 password hashing, and the bearer-token
//! middleware that injects [`CurrentUser`] into request extensions.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use shared::models::{Role, User};
use shared::ApiError;

use crate::config::JwtConfig;
use crate::state::AppState;

/// Claims stored in the token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (subject)
    pub sub: String,
    /// Username
    pub username: String,
    /// Role claim (wire integer)
    pub role: Role,
    /// Expiry timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Token lifetime in minutes
    pub fn expiration_minutes(&self) -> i64 {
        self.config.expiration_minutes
    }

    /// Generate a token for a user
    pub fn generate_token(&self, user: &User, username: &str) -> Result<String, ApiError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: user.user_id.to_string(),
            username: username.to_string(),
            role: user.role,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| ApiError::internal(format!("Failed to generate token: {}", e)))
    }

    /// Validate and decode a token
    pub fn validate_token(&self, token: &str) -> Result<Claims, ApiError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["sub", "exp", "iat"]);

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => ApiError::TokenExpired,
                _ => ApiError::invalid_token(format!("Token validation failed: {}", e)),
            })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }
}

/// Current user context, injected by the authentication middleware
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl TryFrom<Claims> for CurrentUser {
    type Error = ApiError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        let user_id = claims
            .sub
            .parse()
            .map_err(|_| ApiError::invalid_token("Malformed subject claim"))?;
        Ok(Self {
            user_id,
            username: claims.username,
            role: claims.role,
        })
    }
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Reject non-admin callers
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(ApiError::forbidden("Administrator access required"))
        }
    }
}

/// Public routes reachable without a token: registration, login, password
/// reset, and menu browsing.
fn is_public_route(path: &str) -> bool {
    path == "/user/register"
        || path == "/user/login"
        || path == "/user/forgot-password"
        || path == "/item/get-list-item"
        || path.starts_with("/item/get-item-info/")
        || path.starts_with("/storage/files/")
}

/// Authentication middleware
///
/// Extracts and validates the bearer token from `Authorization: Bearer
/// <token>`, then injects [`CurrentUser`] into the request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Allow CORS preflight through
    if req.method() == axum::http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    if is_public_route(req.uri().path()) {
        return Ok(next.run(req).await);
    }

    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let token = match auth_header {
        Some(header) => JwtService::extract_from_header(header)
            .ok_or_else(|| ApiError::invalid_token("Invalid authorization header"))?,
        None => {
            tracing::warn!(uri = %req.uri(), "Request without authorization header");
            return Err(ApiError::Unauthorized);
        }
    };

    let claims = state.jwt().validate_token(token)?;
    req.extensions_mut().insert(CurrentUser::try_from(claims)?);
    Ok(next.run(req).await)
}

// ========== Password hashing ==========

/// Hash a password with Argon2
pub fn hash_password(password: &str) -> Result<String, ApiError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ApiError::internal(format!("Password hashing failed: {}", e)))
}

/// Verify a password against its Argon2 hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ApiError> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| ApiError::internal(format!("Stored hash is invalid: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user(role: Role) -> User {
        User {
            user_id: 7,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            phone: "0900000000".to_string(),
            address: String::new(),
            avatar_url: String::new(),
            role,
            is_active: true,
        }
    }

    #[test]
    fn test_token_roundtrip() {
        let service = JwtService::with_config(JwtConfig {
            secret: "unit-test-secret-key-of-sufficient-length".to_string(),
            expiration_minutes: 60,
        });

        let token = service
            .generate_token(&test_user(Role::Customer), "tester")
            .expect("token generation");
        let claims = service.validate_token(&token).expect("token validation");

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.username, "tester");
        assert_eq!(claims.role, Role::Customer);

        let current = CurrentUser::try_from(claims).expect("claims conversion");
        assert_eq!(current.user_id, 7);
        assert!(!current.is_admin());
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issuer = JwtService::with_config(JwtConfig {
            secret: "unit-test-secret-key-of-sufficient-length".to_string(),
            expiration_minutes: 60,
        });
        let verifier = JwtService::with_config(JwtConfig {
            secret: "a-completely-different-signing-secret!!!".to_string(),
            expiration_minutes: 60,
        });

        let token = issuer
            .generate_token(&test_user(Role::Admin), "admin")
            .expect("token generation");
        assert!(verifier.validate_token(&token).is_err());
    }

    #[test]
    fn test_password_hash_roundtrip() {
        let hash = hash_password("s3cret").expect("hashing");
        assert!(verify_password("s3cret", &hash).expect("verification"));
        assert!(!verify_password("wrong", &hash).expect("verification"));
    }

    #[test]
    fn test_public_routes() {
        assert!(is_public_route("/user/login"));
        assert!(is_public_route("/item/get-list-item"));
        assert!(is_public_route("/item/get-item-info/3"));
        assert!(!is_public_route("/order/create-new-order"));
        assert!(!is_public_route("/user/get-list-user"));
    }
}
