//! Session state
//!
//! In-memory session held during the client's lifecycle: bearer token, the
//! logged-in profile, and the token lifetime used for the expiry check.

use chrono::{DateTime, Duration, Utc};

use shared::client::LoginResponse;
use shared::models::{Role, User};

/// Session data stored in memory after login.
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
    logged_in_at: Option<DateTime<Utc>>,
    /// Token lifetime in minutes
    expires_in: i64,
}

impl Session {
    /// Creates a new empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the token and profile after a successful login.
    pub fn set_login(&mut self, response: &LoginResponse, now: DateTime<Utc>) {
        self.token = Some(response.access_token.clone());
        self.user = Some(response.user.clone());
        self.logged_in_at = Some(now);
        self.expires_in = response.expires_in;
    }

    /// Clears the session data on logout.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.logged_in_at = None;
        self.expires_in = 0;
    }

    /// Returns the bearer token if available.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the logged-in profile if available.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the logged-in role, if any. `None` means logged out, which
    /// restricts access to the public read endpoints.
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Whether the logged-in user is an admin. Presentation-layer gating
    /// only; the backend enforces authorization.
    pub fn is_admin(&self) -> bool {
        matches!(self.role(), Some(Role::Admin))
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the token has outlived its lifetime at the given instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.logged_in_at {
            Some(logged_in_at) => logged_in_at + Duration::minutes(self.expires_in) <= now,
            None => true,
        }
    }

    /// Whether the token has outlived its lifetime.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Role;

    fn login_response(expires_in: i64) -> LoginResponse {
        LoginResponse {
            access_token: "tok".to_string(),
            token_type: "Bearer".to_string(),
            expires_in,
            user: User {
                user_id: 1,
                name: "Nguyen Van A".to_string(),
                email: "a@example.com".to_string(),
                phone: "0900000000".to_string(),
                address: String::new(),
                avatar_url: String::new(),
                role: Role::Customer,
                is_active: true,
            },
            notice_count: 0,
        }
    }

    #[test]
    fn test_empty_session_is_expired() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert!(session.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_expiry_window() {
        let mut session = Session::new();
        let login_time = Utc::now();
        session.set_login(&login_response(60), login_time);

        assert!(session.is_logged_in());
        assert!(!session.is_expired_at(login_time + Duration::minutes(59)));
        assert!(session.is_expired_at(login_time + Duration::minutes(60)));
        assert!(session.is_expired_at(login_time + Duration::minutes(61)));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut session = Session::new();
        session.set_login(&login_response(60), Utc::now());
        session.clear();

        assert!(session.token().is_none());
        assert!(session.user().is_none());
        assert!(session.role().is_none());
        assert!(!session.is_admin());
    }
}
