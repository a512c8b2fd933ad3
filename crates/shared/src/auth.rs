//! Authentication request and response payloads.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::validation::nicht_leer;

/// Login request payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(custom(function = "nicht_leer"))]
    pub username: String,
    /// Password.
    #[validate(custom(function = "nicht_leer"))]
    pub password: String,
}

/// Payload for claiming the bootstrap admin and for self-registration.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username (unique).
    #[validate(length(min = 3, max = 64))]
    pub username: String,
    /// Name shown in the UI.
    #[validate(custom(function = "nicht_leer"))]
    pub display_name: String,
    /// Plaintext password; minimum length comes from `auth.min_password_length`.
    pub password: String,
}

/// Admin approval of a pending user.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ApproveUserRequest {
    /// Kunde the user is scoped to.
    #[validate(range(min = 1))]
    pub kunde_id: i32,
}

/// Admin password reset.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SetPasswordRequest {
    /// New plaintext password.
    pub password: String,
}

/// Public view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    /// User ID; sent back as `x-user-id` on later requests.
    pub id: i32,
    /// Username, absent only for the unclaimed bootstrap row.
    pub username: Option<String>,
    /// Display name.
    pub display_name: String,
    /// `admin` or `user`.
    pub role: String,
    /// `bootstrap`, `pending`, `active` or `disabled`.
    pub status: String,
    /// Kunde the user is scoped to.
    pub kunde_id: Option<i32>,
}

/// Response of the auth status probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthStatus {
    /// Whether the auth gate is active.
    pub enabled: bool,
    /// Whether the bootstrap admin can still be claimed.
    pub bootstrap_pending: bool,
}
