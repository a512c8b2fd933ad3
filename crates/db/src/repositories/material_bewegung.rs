//! Append-only material movement logs.
//!
//! Booking a movement appends it and updates the material's stock and income
//! rollups in one transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use tracing::info;

use kontor_core::material::{
    Buchung, CreateBarBewegungInput, CreateKombiBewegungInput, Lagerstand,
};
use kontor_shared::types::format_eur;

use super::RepositoryError;
use super::material::require_material;
use crate::entities::{material, material_bewegungen_bar, material_bewegungen_kombi};

/// Repository for cash and split movement logs.
#[derive(Debug, Clone)]
pub struct MaterialBewegungRepository {
    db: DatabaseConnection,
}

impl MaterialBewegungRepository {
    /// Creates a new movement repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists cash bookings, newest first, optionally for one material.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown material.
    pub async fn list_bar(
        &self,
        material_id: Option<i32>,
    ) -> Result<Vec<material_bewegungen_bar::Model>, RepositoryError> {
        let mut query = material_bewegungen_bar::Entity::find()
            .order_by_desc(material_bewegungen_bar::Column::Id);
        if let Some(material_id) = material_id {
            require_material(&self.db, material_id).await?;
            query = query.filter(material_bewegungen_bar::Column::MaterialId.eq(material_id));
        }
        Ok(query.all(&self.db).await?)
    }

    /// Lists split bookings, newest first, optionally for one material.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown material.
    pub async fn list_kombi(
        &self,
        material_id: Option<i32>,
    ) -> Result<Vec<material_bewegungen_kombi::Model>, RepositoryError> {
        let mut query = material_bewegungen_kombi::Entity::find()
            .order_by_desc(material_bewegungen_kombi::Column::Id);
        if let Some(material_id) = material_id {
            require_material(&self.db, material_id).await?;
            query = query.filter(material_bewegungen_kombi::Column::MaterialId.eq(material_id));
        }
        Ok(query.all(&self.db).await?)
    }

    /// Books a cash movement.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown material and `Precondition` if the
    /// stock is insufficient.
    pub async fn book_bar(
        &self,
        input: CreateBarBewegungInput,
    ) -> Result<material_bewegungen_bar::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = require_material(&txn, input.material_id).await?;

        let buchung = Buchung::bar(input.menge, input.preis.unwrap_or(current.verkaufspreis))?;
        let lager = lagerstand(&current).buchen(&buchung)?;

        let bewegung = material_bewegungen_bar::ActiveModel {
            id: NotSet,
            material_id: Set(input.material_id),
            datum: Set(input.datum),
            menge: Set(buchung.menge),
            preis: Set(buchung.preis),
            betrag: Set(buchung.betrag),
            notiz: Set(input.notiz),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        store_lagerstand(&txn, current, lager).await?;
        txn.commit().await?;

        info!(
            material_id = bewegung.material_id,
            menge = %buchung.menge,
            betrag = %format_eur(buchung.betrag),
            "Cash movement booked"
        );
        Ok(bewegung)
    }

    /// Books a split cash/invoice movement.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown material and `Precondition` if the
    /// stock is insufficient or the cash share exceeds the amount.
    pub async fn book_kombi(
        &self,
        input: CreateKombiBewegungInput,
    ) -> Result<material_bewegungen_kombi::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = require_material(&txn, input.material_id).await?;

        let buchung = Buchung::kombi(
            input.menge,
            input.preis.unwrap_or(current.verkaufspreis),
            input.bar,
        )?;
        let lager = lagerstand(&current).buchen(&buchung)?;

        let bewegung = material_bewegungen_kombi::ActiveModel {
            id: NotSet,
            material_id: Set(input.material_id),
            datum: Set(input.datum),
            menge: Set(buchung.menge),
            preis: Set(buchung.preis),
            betrag: Set(buchung.betrag),
            bar: Set(buchung.bar),
            rechnung: Set(buchung.rechnung),
            notiz: Set(input.notiz),
            created_at: Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        store_lagerstand(&txn, current, lager).await?;
        txn.commit().await?;

        info!(
            material_id = bewegung.material_id,
            menge = %buchung.menge,
            bar = %format_eur(buchung.bar),
            rechnung = %format_eur(buchung.rechnung),
            "Split movement booked"
        );
        Ok(bewegung)
    }
}

const fn lagerstand(material: &material::Model) -> Lagerstand {
    Lagerstand {
        bestand: material.bestand,
        einnahmen_bar: material.einnahmen_bar,
        einnahmen_rechnung: material.einnahmen_rechnung,
    }
}

async fn store_lagerstand(
    txn: &sea_orm::DatabaseTransaction,
    current: material::Model,
    lager: Lagerstand,
) -> Result<(), RepositoryError> {
    let mut model: material::ActiveModel = current.into();
    model.bestand = Set(lager.bestand);
    model.einnahmen_bar = Set(lager.einnahmen_bar);
    model.einnahmen_rechnung = Set(lager.einnahmen_rechnung);
    model.updated_at = Set(Utc::now());
    model.update(txn).await?;
    Ok(())
}
