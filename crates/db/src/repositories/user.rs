//! User repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use kontor_core::auth::{LifecycleError, UserStatus as Lifecycle};

use super::RepositoryError;
use super::kunde::require_kunde;
use crate::entities::{
    sea_orm_active_enums::{UserRole, UserStatus},
    users,
};

const ENTITY: &str = "User";

/// Display name of the seeded bootstrap row.
pub const BOOTSTRAP_DISPLAY_NAME: &str = "Administrator";

impl From<LifecycleError> for RepositoryError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::AlreadyClaimed => Self::Conflict(err.to_string()),
            LifecycleError::InvalidTransition { .. } => Self::Precondition(err.to_string()),
        }
    }
}

/// User repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<users::Model>, RepositoryError> {
        Ok(users::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Finds a user by username.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<users::Model>, RepositoryError> {
        Ok(users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.db)
            .await?)
    }

    /// Lists all users in creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<users::Model>, RepositoryError> {
        Ok(users::Entity::find()
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Returns true while the bootstrap row is still unclaimed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn bootstrap_pending(&self) -> Result<bool, RepositoryError> {
        let count = users::Entity::find()
            .filter(users::Column::Status.eq(UserStatus::Bootstrap))
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// Seeds the bootstrap admin row unless an admin already exists.
    ///
    /// Returns the row if one was inserted. Safe to call on every start.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn ensure_bootstrap(&self) -> Result<Option<users::Model>, RepositoryError> {
        let txn = self.db.begin().await?;
        let admins = users::Entity::find()
            .filter(users::Column::Role.eq(UserRole::Admin))
            .count(&txn)
            .await?;
        if admins > 0 {
            return Ok(None);
        }

        let now = Utc::now();
        let row = users::ActiveModel {
            id: NotSet,
            username: Set(None),
            display_name: Set(BOOTSTRAP_DISPLAY_NAME.to_string()),
            role: Set(UserRole::Admin),
            status: Set(UserStatus::Bootstrap),
            kunde_id: Set(None),
            password_hash: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            approved_at: Set(None),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        info!(user_id = row.id, "Bootstrap admin seeded");
        Ok(Some(row))
    }

    /// Claims the bootstrap row: sets credentials and activates it.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if it was already claimed or the username is taken.
    pub async fn claim_bootstrap(
        &self,
        username: &str,
        display_name: &str,
        password_hash: &str,
    ) -> Result<users::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let bootstrap = users::Entity::find()
            .filter(users::Column::Status.eq(UserStatus::Bootstrap))
            .one(&txn)
            .await?
            .ok_or(RepositoryError::from(LifecycleError::AlreadyClaimed))?;
        let status = Lifecycle::from(bootstrap.status).claim()?;

        let taken = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&txn)
            .await?;
        if taken > 0 {
            return Err(username_taken(username));
        }

        let now = Utc::now();
        let mut user: users::ActiveModel = bootstrap.into();
        user.username = Set(Some(username.to_string()));
        user.display_name = Set(display_name.to_string());
        user.password_hash = Set(Some(password_hash.to_string()));
        user.status = Set(status.into());
        user.approved_at = Set(Some(now));
        user.updated_at = Set(now);
        let claimed = user.update(&txn).await?;
        txn.commit().await?;

        info!(user_id = claimed.id, username, "Bootstrap admin claimed");
        Ok(claimed)
    }

    /// Registers a new user awaiting approval.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the username is taken.
    pub async fn register(
        &self,
        username: &str,
        display_name: &str,
        password_hash: &str,
    ) -> Result<users::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let taken = users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .count(&txn)
            .await?;
        if taken > 0 {
            return Err(username_taken(username));
        }

        let now = Utc::now();
        let user = users::ActiveModel {
            id: NotSet,
            username: Set(Some(username.to_string())),
            display_name: Set(display_name.to_string()),
            role: Set(UserRole::User),
            status: Set(UserStatus::Pending),
            kunde_id: Set(None),
            password_hash: Set(Some(password_hash.to_string())),
            created_at: Set(now),
            updated_at: Set(now),
            approved_at: Set(None),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        info!(user_id = user.id, username, "User registered");
        Ok(user)
    }

    /// Activates a user and scopes it to a Kunde.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown user or Kunde, and `Precondition` for
    /// admins or the unclaimed bootstrap row.
    pub async fn approve(&self, id: i32, kunde_id: i32) -> Result<users::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = find_in(&txn, id).await?;
        if current.role == UserRole::Admin {
            return Err(RepositoryError::Precondition(
                "admins are not scoped to a kunde".to_string(),
            ));
        }
        let status = Lifecycle::from(current.status).approve()?;
        require_kunde(&txn, kunde_id).await?;

        let now = Utc::now();
        let mut user: users::ActiveModel = current.into();
        user.status = Set(status.into());
        user.kunde_id = Set(Some(kunde_id));
        user.approved_at = Set(Some(now));
        user.updated_at = Set(now);
        let approved = user.update(&txn).await?;
        txn.commit().await?;

        info!(user_id = id, kunde_id, "User approved");
        Ok(approved)
    }

    /// Disables a user.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown user and `Precondition` for the
    /// unclaimed bootstrap row.
    pub async fn disable(&self, id: i32) -> Result<users::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = find_in(&txn, id).await?;
        let status = Lifecycle::from(current.status).disable()?;

        let mut user: users::ActiveModel = current.into();
        user.status = Set(status.into());
        user.updated_at = Set(Utc::now());
        let disabled = user.update(&txn).await?;
        txn.commit().await?;

        info!(user_id = id, "User disabled");
        Ok(disabled)
    }

    /// Replaces a user's password hash.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown user.
    pub async fn set_password(
        &self,
        id: i32,
        password_hash: &str,
    ) -> Result<users::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = find_in(&txn, id).await?;

        let mut user: users::ActiveModel = current.into();
        user.password_hash = Set(Some(password_hash.to_string()));
        user.updated_at = Set(Utc::now());
        let updated = user.update(&txn).await?;
        txn.commit().await?;

        info!(user_id = id, "Password changed");
        Ok(updated)
    }
}

async fn find_in(
    txn: &sea_orm::DatabaseTransaction,
    id: i32,
) -> Result<users::Model, RepositoryError> {
    users::Entity::find_by_id(id)
        .one(txn)
        .await?
        .ok_or(RepositoryError::not_found(ENTITY, id))
}

fn username_taken(username: &str) -> RepositoryError {
    RepositoryError::Conflict(format!("username '{username}' is already taken"))
}
