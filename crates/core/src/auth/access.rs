//! Caller identity and per-Kunde scoping.

use thiserror::Error;

use super::UserRole;

/// An authenticated, active user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    /// User ID.
    pub user_id: i32,
    /// Role of the user.
    pub role: UserRole,
    /// Kunde the user is scoped to, if any.
    pub kunde_id: Option<i32>,
}

/// The identity a request runs under.
///
/// `Unrestricted` is used while the auth gate is disabled; every check passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    /// Auth gate disabled.
    Unrestricted,
    /// Auth gate enabled and the caller resolved.
    User(Principal),
}

/// Access denied for a resolved caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The operation is reserved for admins.
    #[error("admin role required")]
    AdminRequired,

    /// The record belongs to another Kunde.
    #[error("access to kunde {kunde_id} is not permitted")]
    ForeignKunde {
        /// Kunde of the requested record.
        kunde_id: i32,
    },

    /// The user has no Kunde assigned.
    #[error("user is not assigned to a kunde")]
    Unassigned,
}

impl Caller {
    /// ID of the calling user, if any.
    #[must_use]
    pub const fn user_id(&self) -> Option<i32> {
        match self {
            Self::Unrestricted => None,
            Self::User(principal) => Some(principal.user_id),
        }
    }

    /// Requires the admin role (or a disabled gate).
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::AdminRequired`] for role `user`.
    pub const fn require_admin(&self) -> Result<(), AccessError> {
        match self {
            Self::User(Principal {
                role: UserRole::User,
                ..
            }) => Err(AccessError::AdminRequired),
            _ => Ok(()),
        }
    }

    /// Requires access to the records of `kunde_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if a `user` caller is scoped to another Kunde or to none.
    pub fn ensure_kunde(&self, kunde_id: i32) -> Result<(), AccessError> {
        match self.kunde_scope()? {
            Some(own) if own != kunde_id => Err(AccessError::ForeignKunde { kunde_id }),
            _ => Ok(()),
        }
    }

    /// The Kunde list results must be filtered to; `None` means all.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::Unassigned`] for a `user` without a Kunde.
    pub fn kunde_scope(&self) -> Result<Option<i32>, AccessError> {
        match self {
            Self::Unrestricted => Ok(None),
            Self::User(principal) => match principal.role {
                UserRole::Admin => Ok(None),
                UserRole::User => principal.kunde_id.map(Some).ok_or(AccessError::Unassigned),
            },
        }
    }
}
