//! Form validation helpers
//!
//! Client-side checks run before submission; a failed check blocks the call
//! entirely. The backend remains the authority on every rule.

use std::sync::LazyLock;

use regex::Regex;

use crate::{ClientError, ClientResult};
use shared::models::{UserRegister, UserUpdate};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{10}$").unwrap());

/// Whether a string looks like an email address (local, domain, and TLD part).
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether a string is a 10-digit phone number.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Whether the confirmation field matches the chosen password.
pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

fn require(value: &str, field: &str, violations: &mut Vec<String>) {
    if value.trim().is_empty() {
        violations.push(format!("{} is required", field));
    }
}

/// Validate a registration payload, collecting one message per violated rule.
pub fn validate_register(payload: &UserRegister) -> ClientResult<()> {
    let mut violations = Vec::new();

    require(&payload.username, "Username", &mut violations);
    require(&payload.password, "Password", &mut violations);
    require(&payload.name, "Name", &mut violations);
    require(&payload.email, "Email", &mut violations);
    require(&payload.phone, "Phone", &mut violations);

    if !payload.email.trim().is_empty() && !is_valid_email(&payload.email) {
        violations.push("Email is invalid".to_string());
    }
    if !payload.phone.trim().is_empty() && !is_valid_phone(&payload.phone) {
        violations.push("Phone must be exactly 10 digits".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ClientError::Validation(violations.join("\n")))
    }
}

/// Validate a profile update payload.
pub fn validate_profile(payload: &UserUpdate) -> ClientResult<()> {
    let mut violations = Vec::new();

    require(&payload.name, "Name", &mut violations);

    if !payload.email.trim().is_empty() && !is_valid_email(&payload.email) {
        violations.push("Email is invalid".to_string());
    }
    if !payload.phone.trim().is_empty() && !is_valid_phone(&payload.phone) {
        violations.push("Phone must be exactly 10 digits".to_string());
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ClientError::Validation(violations.join("\n")))
    }
}
