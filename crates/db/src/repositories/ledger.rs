//! Operations shared by the four posten ledgers.
//!
//! `list`, `get`, `delete` and `verbuche_zahlung` are identical for every
//! posten table and are generated by [`impl_posten_ledger!`]. `create` and
//! `update` differ per table (reference checks, computed `betrag`) and
//! delegate to inherent `insert` and `apply` methods of the repository.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Serialize;

use super::RepositoryError;

/// A posten ledger: create, update, delete and payment booking with
/// `offen`/`status` kept derived.
#[async_trait]
pub trait PostenLedger: Send + Sync {
    /// Stored record.
    type Record: Serialize + Send + Sync;
    /// Create payload.
    type Create: Send;
    /// Partial update payload.
    type Update: Send;

    /// Entity label used in errors and logs.
    const ENTITY: &'static str;

    /// Lists all records, newest first.
    async fn list(&self) -> Result<Vec<Self::Record>, RepositoryError>;

    /// Gets a record by ID.
    async fn get(&self, id: i32) -> Result<Self::Record, RepositoryError>;

    /// Creates a record and returns it as stored.
    async fn create(&self, input: Self::Create) -> Result<Self::Record, RepositoryError>;

    /// Merges a partial update, re-derives `offen`/`status` and returns the stored record.
    async fn update(&self, id: i32, input: Self::Update) -> Result<Self::Record, RepositoryError>;

    /// Deletes a record and returns its last state.
    async fn delete(&self, id: i32) -> Result<Self::Record, RepositoryError>;

    /// Adds a payment to `bezahlt` and re-derives `offen`/`status`.
    async fn verbuche_zahlung(
        &self,
        id: i32,
        betrag: Decimal,
    ) -> Result<Self::Record, RepositoryError>;
}

/// Implements [`PostenLedger`] for a repository over one posten entity.
///
/// The repository must have a `db: DatabaseConnection` field and inherent
/// `insert(input)` and `apply(id, input)` methods.
macro_rules! impl_posten_ledger {
    ($repo:ty, $entity:ident, $label:expr, $create:ty, $update:ty) => {
        #[::async_trait::async_trait]
        impl $crate::repositories::PostenLedger for $repo {
            type Record = $crate::entities::$entity::Model;
            type Create = $create;
            type Update = $update;

            const ENTITY: &'static str = $label;

            async fn list(&self) -> Result<Vec<Self::Record>, $crate::repositories::RepositoryError> {
                use ::sea_orm::{EntityTrait, QueryOrder};

                Ok($crate::entities::$entity::Entity::find()
                    .order_by_desc($crate::entities::$entity::Column::Id)
                    .all(&self.db)
                    .await?)
            }

            async fn get(&self, id: i32) -> Result<Self::Record, $crate::repositories::RepositoryError> {
                use ::sea_orm::EntityTrait;

                $crate::entities::$entity::Entity::find_by_id(id)
                    .one(&self.db)
                    .await?
                    .ok_or($crate::repositories::RepositoryError::not_found(Self::ENTITY, id))
            }

            async fn create(
                &self,
                input: Self::Create,
            ) -> Result<Self::Record, $crate::repositories::RepositoryError> {
                let created = self.insert(input).await?;
                ::tracing::info!(
                    entity = Self::ENTITY,
                    id = created.id,
                    betrag = %::kontor_shared::types::format_eur(created.betrag),
                    status = ?created.status,
                    "Posten created"
                );
                Ok(created)
            }

            async fn update(
                &self,
                id: i32,
                input: Self::Update,
            ) -> Result<Self::Record, $crate::repositories::RepositoryError> {
                let updated = self.apply(id, input).await?;
                ::tracing::info!(
                    entity = Self::ENTITY,
                    id,
                    offen = %::kontor_shared::types::format_eur(updated.offen),
                    status = ?updated.status,
                    "Posten updated"
                );
                Ok(updated)
            }

            async fn delete(&self, id: i32) -> Result<Self::Record, $crate::repositories::RepositoryError> {
                use ::sea_orm::{EntityTrait, TransactionTrait};

                let txn = self.db.begin().await?;
                let current = $crate::entities::$entity::Entity::find_by_id(id)
                    .one(&txn)
                    .await?
                    .ok_or($crate::repositories::RepositoryError::not_found(Self::ENTITY, id))?;
                $crate::entities::$entity::Entity::delete_by_id(id)
                    .exec(&txn)
                    .await?;
                txn.commit().await?;

                ::tracing::info!(entity = Self::ENTITY, id, "Posten deleted");
                Ok(current)
            }

            async fn verbuche_zahlung(
                &self,
                id: i32,
                betrag: ::rust_decimal::Decimal,
            ) -> Result<Self::Record, $crate::repositories::RepositoryError> {
                use ::sea_orm::{ActiveModelTrait, EntityTrait, Set, TransactionTrait};

                let txn = self.db.begin().await?;
                let current = $crate::entities::$entity::Entity::find_by_id(id)
                    .one(&txn)
                    .await?
                    .ok_or($crate::repositories::RepositoryError::not_found(Self::ENTITY, id))?;

                let stand = ::kontor_core::posten::Stand::berechnen(current.betrag, current.bezahlt)
                    .mit_zahlung(betrag)?;

                let mut active: $crate::entities::$entity::ActiveModel = current.into();
                active.bezahlt = Set(stand.bezahlt);
                active.offen = Set(stand.offen);
                active.status = Set(stand.status.into());
                active.updated_at = Set(::chrono::Utc::now());
                let updated = active.update(&txn).await?;
                txn.commit().await?;

                ::tracing::info!(
                    entity = Self::ENTITY,
                    id,
                    zahlung = %::kontor_shared::types::format_eur(betrag),
                    bezahlt = %::kontor_shared::types::format_eur(stand.bezahlt),
                    status = %stand.status,
                    "Payment booked"
                );
                Ok(updated)
            }
        }
    };
}

pub(crate) use impl_posten_ledger;
