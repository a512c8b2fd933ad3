//! Kunden-posten repository: posten booked against one Kunde.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use kontor_core::posten::{CreateKundenPostenInput, Stand, UpdateKundenPostenInput};

use super::RepositoryError;
use super::kunde::require_kunde;
use super::ledger::impl_posten_ledger;
use crate::entities::kunden_posten;

const ENTITY: &str = "KundenPosten";

/// Kunden-posten repository.
#[derive(Debug, Clone)]
pub struct KundenPostenRepository {
    db: DatabaseConnection,
}

impl KundenPostenRepository {
    /// Creates a new Kunden-posten repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the posten of one Kunde, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_kunde(
        &self,
        kunde_id: i32,
    ) -> Result<Vec<kunden_posten::Model>, RepositoryError> {
        Ok(kunden_posten::Entity::find()
            .filter(kunden_posten::Column::KundeId.eq(kunde_id))
            .order_by_desc(kunden_posten::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn insert(
        &self,
        input: CreateKundenPostenInput,
    ) -> Result<kunden_posten::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        require_kunde(&txn, input.kunde_id).await?;

        let stand = Stand::neu(input.betrag, input.bezahlt);
        let now = Utc::now();
        let posten = kunden_posten::ActiveModel {
            id: NotSet,
            kunde_id: Set(input.kunde_id),
            datum: Set(input.datum),
            bezeichnung: Set(input.bezeichnung),
            betrag: Set(stand.betrag),
            bezahlt: Set(stand.bezahlt),
            offen: Set(stand.offen),
            status: Set(stand.status.into()),
            faelligkeit: Set(input.faelligkeit),
            notiz: Set(input.notiz),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(posten)
    }

    async fn apply(
        &self,
        id: i32,
        input: UpdateKundenPostenInput,
    ) -> Result<kunden_posten::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = kunden_posten::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::not_found(ENTITY, id))?;

        if let Some(kunde_id) = input.kunde_id {
            require_kunde(&txn, kunde_id).await?;
        }

        let stand =
            Stand::berechnen(current.betrag, current.bezahlt).geaendert(input.betrag, input.bezahlt);

        let mut posten: kunden_posten::ActiveModel = current.into();
        if let Some(kunde_id) = input.kunde_id {
            posten.kunde_id = Set(kunde_id);
        }
        if let Some(datum) = input.datum {
            posten.datum = Set(datum);
        }
        if let Some(bezeichnung) = input.bezeichnung {
            posten.bezeichnung = Set(bezeichnung);
        }
        if let Some(faelligkeit) = input.faelligkeit {
            posten.faelligkeit = Set(faelligkeit);
        }
        if let Some(notiz) = input.notiz {
            posten.notiz = Set(notiz);
        }
        posten.betrag = Set(stand.betrag);
        posten.bezahlt = Set(stand.bezahlt);
        posten.offen = Set(stand.offen);
        posten.status = Set(stand.status.into());
        posten.updated_at = Set(Utc::now());

        let updated = posten.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }
}

impl_posten_ledger!(
    KundenPostenRepository,
    kunden_posten,
    ENTITY,
    CreateKundenPostenInput,
    UpdateKundenPostenInput
);
