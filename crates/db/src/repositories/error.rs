//! Error type shared by all repositories.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use kontor_core::material::MaterialError;
use kontor_core::posten::PostenError;

/// Errors raised by repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A record or a referenced record does not exist.
    #[error("{entity} {id} not found")]
    NotFound {
        /// Entity label, e.g. `Kunde`.
        entity: &'static str,
        /// The missing ID.
        id: i32,
    },

    /// A unique field is taken or the record is still referenced.
    #[error("{0}")]
    Conflict(String),

    /// A domain precondition failed (e.g. insufficient stock).
    #[error("{0}")]
    Precondition(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(DbErr),
}

impl RepositoryError {
    pub(crate) const fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                Self::Conflict(format!("unique constraint violated: {detail}"))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                Self::Conflict(format!("foreign key constraint violated: {detail}"))
            }
            _ => Self::Database(err),
        }
    }
}

impl From<PostenError> for RepositoryError {
    fn from(err: PostenError) -> Self {
        Self::Precondition(err.to_string())
    }
}

impl From<MaterialError> for RepositoryError {
    fn from(err: MaterialError) -> Self {
        Self::Precondition(err.to_string())
    }
}
