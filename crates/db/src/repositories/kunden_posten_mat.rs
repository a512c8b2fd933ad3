//! Material Kunden-posten: material sold to a Kunde, `betrag = menge × preis`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use kontor_core::posten::{CreateMatPostenInput, MatPosition, Stand, UpdateMatPostenInput};

use super::RepositoryError;
use super::kunde::require_kunde;
use super::ledger::impl_posten_ledger;
use super::material::require_material;
use crate::entities::kunden_posten_mat;

const ENTITY: &str = "KundenPostenMat";

/// Material Kunden-posten repository.
#[derive(Debug, Clone)]
pub struct KundenPostenMatRepository {
    db: DatabaseConnection,
}

impl KundenPostenMatRepository {
    /// Creates a new repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the material posten of one Kunde, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_by_kunde(
        &self,
        kunde_id: i32,
    ) -> Result<Vec<kunden_posten_mat::Model>, RepositoryError> {
        Ok(kunden_posten_mat::Entity::find()
            .filter(kunden_posten_mat::Column::KundeId.eq(kunde_id))
            .order_by_desc(kunden_posten_mat::Column::Id)
            .all(&self.db)
            .await?)
    }

    async fn insert(
        &self,
        input: CreateMatPostenInput,
    ) -> Result<kunden_posten_mat::Model, RepositoryError> {
        let position = MatPosition::new(input.menge, input.preis)?;

        let txn = self.db.begin().await?;
        require_kunde(&txn, input.kunde_id).await?;
        require_material(&txn, input.material_id).await?;

        let stand = Stand::neu(position.betrag()?, input.bezahlt);
        let now = Utc::now();
        let posten = kunden_posten_mat::ActiveModel {
            id: NotSet,
            kunde_id: Set(input.kunde_id),
            material_id: Set(input.material_id),
            datum: Set(input.datum),
            bezeichnung: Set(input.bezeichnung),
            menge: Set(position.menge),
            preis: Set(position.preis),
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
        input: UpdateMatPostenInput,
    ) -> Result<kunden_posten_mat::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = kunden_posten_mat::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(RepositoryError::not_found(ENTITY, id))?;

        if let Some(kunde_id) = input.kunde_id {
            require_kunde(&txn, kunde_id).await?;
        }
        if let Some(material_id) = input.material_id {
            require_material(&txn, material_id).await?;
        }

        let position = MatPosition {
            menge: current.menge,
            preis: current.preis,
        }
        .geaendert(input.menge, input.preis)?;
        let betrag = if input.menge.is_some() || input.preis.is_some() {
            Some(position.betrag()?)
        } else {
            None
        };
        let stand = Stand::berechnen(current.betrag, current.bezahlt).geaendert(betrag, input.bezahlt);

        let mut posten: kunden_posten_mat::ActiveModel = current.into();
        if let Some(kunde_id) = input.kunde_id {
            posten.kunde_id = Set(kunde_id);
        }
        if let Some(material_id) = input.material_id {
            posten.material_id = Set(material_id);
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
        posten.menge = Set(position.menge);
        posten.preis = Set(position.preis);
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
    KundenPostenMatRepository,
    kunden_posten_mat,
    ENTITY,
    CreateMatPostenInput,
    UpdateMatPostenInput
);
