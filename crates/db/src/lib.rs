//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions
//! - Repository abstractions for data access
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{
    DashboardRepository, GlaeubigerRepository, KundeRepository, KundenPostenMatRepository,
    KundenPostenRepository, MaterialBewegungRepository, MaterialRepository, PostenLedger,
    RepositoryError, SchuldnerRepository, UserRepository,
};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

/// Establishes a connection to the database.
///
/// The pool holds exactly one connection. Every multi-statement mutation runs
/// in a transaction on it, so concurrent requests against one record are
/// serialized.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(options).await
}

/// Applies all pending migrations.
///
/// # Errors
///
/// Returns an error if a migration fails.
pub async fn migrate(db: &DatabaseConnection) -> Result<(), DbErr> {
    migration::Migrator::up(db, None).await
}
