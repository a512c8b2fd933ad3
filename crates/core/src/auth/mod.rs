//! Users, roles and the request-scoped caller.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - User roles and the status lifecycle
//! - Caller scoping rules for the auth gate

mod access;
mod password;

pub use access::{AccessError, Caller, Principal};
pub use password::{PasswordError, ensure_password_length, hash_password, verify_password};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Full access, bypasses per-Kunde scoping.
    Admin,
    /// Restricted to the records of one Kunde.
    User,
}

impl UserRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Returns true if this role can manage users and admin-only ledgers.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User lifecycle status.
///
/// The valid transitions are:
/// - Bootstrap → Active (claim, once)
/// - Pending → Active (approve)
/// - Disabled → Active (approve again)
/// - Pending | Active → Disabled (disable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    /// Seeded admin row that has not been claimed yet.
    Bootstrap,
    /// Self-registered, waiting for approval.
    Pending,
    /// May log in and call the API.
    Active,
    /// Locked out.
    Disabled,
}

impl UserStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Bootstrap => "bootstrap",
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Disabled => "disabled",
        }
    }

    /// Returns true if the user may authenticate.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Claims the bootstrap row.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::AlreadyClaimed`] for any status but `Bootstrap`.
    pub const fn claim(self) -> Result<Self, LifecycleError> {
        match self {
            Self::Bootstrap => Ok(Self::Active),
            _ => Err(LifecycleError::AlreadyClaimed),
        }
    }

    /// Approves a user. Approving an active user again only reassigns its Kunde.
    ///
    /// # Errors
    ///
    /// Rejects the unclaimed bootstrap row.
    pub const fn approve(self) -> Result<Self, LifecycleError> {
        match self {
            Self::Pending | Self::Active | Self::Disabled => Ok(Self::Active),
            Self::Bootstrap => Err(LifecycleError::InvalidTransition {
                from: self,
                to: Self::Active,
            }),
        }
    }

    /// Disables a user.
    ///
    /// # Errors
    ///
    /// Rejects the unclaimed bootstrap row.
    pub const fn disable(self) -> Result<Self, LifecycleError> {
        match self {
            Self::Pending | Self::Active | Self::Disabled => Ok(Self::Disabled),
            Self::Bootstrap => Err(LifecycleError::InvalidTransition {
                from: self,
                to: Self::Disabled,
            }),
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during user lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// The bootstrap admin has already been claimed.
    #[error("bootstrap admin has already been claimed")]
    AlreadyClaimed,

    /// Attempted an invalid status transition.
    #[error("invalid user status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: UserStatus,
        /// The attempted target status.
        to: UserStatus,
    },
}
