//! Kunde repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use kontor_core::kunde::{CreateKundeInput, UpdateKundeInput};

use super::RepositoryError;
use crate::entities::{kunden, kunden_posten, kunden_posten_mat, users};

const ENTITY: &str = "Kunde";

/// Loads a Kunde or fails with `NotFound`.
pub(crate) async fn require_kunde<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<kunden::Model, RepositoryError> {
    kunden::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(RepositoryError::not_found(ENTITY, id))
}

async fn ensure_name_free<C: ConnectionTrait>(
    conn: &C,
    name: &str,
    except: Option<i32>,
) -> Result<(), RepositoryError> {
    let mut query = kunden::Entity::find().filter(kunden::Column::Name.eq(name));
    if let Some(id) = except {
        query = query.filter(kunden::Column::Id.ne(id));
    }
    if query.count(conn).await? > 0 {
        return Err(RepositoryError::Conflict(format!(
            "Kunde with name '{name}' already exists"
        )));
    }
    Ok(())
}

/// Kunde repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct KundeRepository {
    db: DatabaseConnection,
}

impl KundeRepository {
    /// Creates a new Kunde repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists Kunden, newest first, optionally restricted to one ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, only: Option<i32>) -> Result<Vec<kunden::Model>, RepositoryError> {
        let mut query = kunden::Entity::find().order_by_desc(kunden::Column::Id);
        if let Some(id) = only {
            query = query.filter(kunden::Column::Id.eq(id));
        }
        Ok(query.all(&self.db).await?)
    }

    /// Gets a Kunde by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the Kunde does not exist.
    pub async fn get(&self, id: i32) -> Result<kunden::Model, RepositoryError> {
        require_kunde(&self.db, id).await
    }

    /// Creates a Kunde.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the name is taken.
    pub async fn create(&self, input: CreateKundeInput) -> Result<kunden::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_name_free(&txn, &input.name, None).await?;

        let now = Utc::now();
        let kunde = kunden::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        info!(kunde_id = kunde.id, name = %kunde.name, "Kunde created");
        Ok(kunde)
    }

    /// Updates a Kunde.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if absent or `Conflict` if the new name is taken.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateKundeInput,
    ) -> Result<kunden::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = require_kunde(&txn, id).await?;

        let mut kunde: kunden::ActiveModel = current.into();
        if let Some(name) = input.name {
            ensure_name_free(&txn, &name, Some(id)).await?;
            kunde.name = Set(name);
        }
        kunde.updated_at = Set(Utc::now());
        let updated = kunde.update(&txn).await?;
        txn.commit().await?;

        info!(kunde_id = id, "Kunde updated");
        Ok(updated)
    }

    /// Deletes a Kunde that nothing references any more.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if absent or `Conflict` if posten or users still
    /// point to it.
    pub async fn delete(&self, id: i32) -> Result<kunden::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = require_kunde(&txn, id).await?;

        let references = kunden_posten::Entity::find()
            .filter(kunden_posten::Column::KundeId.eq(id))
            .count(&txn)
            .await?
            + kunden_posten_mat::Entity::find()
                .filter(kunden_posten_mat::Column::KundeId.eq(id))
                .count(&txn)
                .await?
            + users::Entity::find()
                .filter(users::Column::KundeId.eq(id))
                .count(&txn)
                .await?;
        if references > 0 {
            return Err(RepositoryError::Conflict(format!(
                "Kunde {id} is still referenced by {references} record(s)"
            )));
        }

        kunden::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(kunde_id = id, "Kunde deleted");
        Ok(current)
    }
}
