//! Material repository for database operations.

use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use serde::Serialize;
use tracing::info;

use kontor_core::material::{CreateMaterialInput, Summen, UpdateMaterialInput};

use super::RepositoryError;
use crate::entities::{
    kunden_posten_mat, material, material_bewegungen_bar, material_bewegungen_kombi,
};

const ENTITY: &str = "Material";

/// Loads a material or fails with `NotFound`.
pub(crate) async fn require_material<C: ConnectionTrait>(
    conn: &C,
    id: i32,
) -> Result<material::Model, RepositoryError> {
    material::Entity::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(RepositoryError::not_found(ENTITY, id))
}

async fn ensure_bezeichnung_free<C: ConnectionTrait>(
    conn: &C,
    bezeichnung: &str,
    except: Option<i32>,
) -> Result<(), RepositoryError> {
    let mut query =
        material::Entity::find().filter(material::Column::Bezeichnung.eq(bezeichnung));
    if let Some(id) = except {
        query = query.filter(material::Column::Id.ne(id));
    }
    if query.count(conn).await? > 0 {
        return Err(RepositoryError::Conflict(format!(
            "Material '{bezeichnung}' already exists"
        )));
    }
    Ok(())
}

/// Movement history of one material.
#[derive(Debug, Clone, Serialize)]
pub struct MaterialHistorie {
    /// The material itself.
    pub material: material::Model,
    /// Cash bookings, newest first.
    pub bar: Vec<material_bewegungen_bar::Model>,
    /// Split bookings, newest first.
    pub kombi: Vec<material_bewegungen_kombi::Model>,
    /// Totals over both logs.
    pub summen: Summen,
}

/// Material repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct MaterialRepository {
    db: DatabaseConnection,
}

impl MaterialRepository {
    /// Creates a new material repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all materials, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<material::Model>, RepositoryError> {
        Ok(material::Entity::find()
            .order_by_desc(material::Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Gets a material by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the material does not exist.
    pub async fn get(&self, id: i32) -> Result<material::Model, RepositoryError> {
        require_material(&self.db, id).await
    }

    /// Creates a material with empty income rollups.
    ///
    /// # Errors
    ///
    /// Returns `Conflict` if the label is taken.
    pub async fn create(
        &self,
        input: CreateMaterialInput,
    ) -> Result<material::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        ensure_bezeichnung_free(&txn, &input.bezeichnung, None).await?;

        let now = Utc::now();
        let created = material::ActiveModel {
            id: NotSet,
            bezeichnung: Set(input.bezeichnung),
            bestand: Set(input.bestand),
            einkaufspreis: Set(input.einkaufspreis),
            verkaufspreis: Set(input.verkaufspreis),
            einnahmen_bar: Set(Decimal::ZERO),
            einnahmen_rechnung: Set(Decimal::ZERO),
            notiz: Set(input.notiz),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;
        txn.commit().await?;

        info!(material_id = created.id, bezeichnung = %created.bezeichnung, "Material created");
        Ok(created)
    }

    /// Updates a material. Income rollups only change through bookings.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if absent or `Conflict` if the new label is taken.
    pub async fn update(
        &self,
        id: i32,
        input: UpdateMaterialInput,
    ) -> Result<material::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = require_material(&txn, id).await?;

        let mut model: material::ActiveModel = current.into();
        if let Some(bezeichnung) = input.bezeichnung {
            ensure_bezeichnung_free(&txn, &bezeichnung, Some(id)).await?;
            model.bezeichnung = Set(bezeichnung);
        }
        if let Some(bestand) = input.bestand {
            model.bestand = Set(bestand);
        }
        if let Some(einkaufspreis) = input.einkaufspreis {
            model.einkaufspreis = Set(einkaufspreis);
        }
        if let Some(verkaufspreis) = input.verkaufspreis {
            model.verkaufspreis = Set(verkaufspreis);
        }
        if let Some(notiz) = input.notiz {
            model.notiz = Set(notiz);
        }
        model.updated_at = Set(Utc::now());

        let updated = model.update(&txn).await?;
        txn.commit().await?;

        info!(material_id = id, "Material updated");
        Ok(updated)
    }

    /// Deletes a material without movements or posten.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if absent or `Conflict` if it is still referenced.
    pub async fn delete(&self, id: i32) -> Result<material::Model, RepositoryError> {
        let txn = self.db.begin().await?;
        let current = require_material(&txn, id).await?;

        let references = material_bewegungen_bar::Entity::find()
            .filter(material_bewegungen_bar::Column::MaterialId.eq(id))
            .count(&txn)
            .await?
            + material_bewegungen_kombi::Entity::find()
                .filter(material_bewegungen_kombi::Column::MaterialId.eq(id))
                .count(&txn)
                .await?
            + kunden_posten_mat::Entity::find()
                .filter(kunden_posten_mat::Column::MaterialId.eq(id))
                .count(&txn)
                .await?;
        if references > 0 {
            return Err(RepositoryError::Conflict(format!(
                "Material {id} is still referenced by {references} record(s)"
            )));
        }

        material::Entity::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        info!(material_id = id, "Material deleted");
        Ok(current)
    }

    /// Loads a material with both movement logs and their totals.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the material does not exist.
    pub async fn historie(&self, id: i32) -> Result<MaterialHistorie, RepositoryError> {
        let material = require_material(&self.db, id).await?;

        let bar = material_bewegungen_bar::Entity::find()
            .filter(material_bewegungen_bar::Column::MaterialId.eq(id))
            .order_by_desc(material_bewegungen_bar::Column::Id)
            .all(&self.db)
            .await?;
        let kombi = material_bewegungen_kombi::Entity::find()
            .filter(material_bewegungen_kombi::Column::MaterialId.eq(id))
            .order_by_desc(material_bewegungen_kombi::Column::Id)
            .all(&self.db)
            .await?;

        let mut summen = Summen::default();
        for bewegung in &bar {
            summen.erfassen(bewegung.menge, bewegung.betrag, Decimal::ZERO)?;
        }
        for bewegung in &kombi {
            summen.erfassen(bewegung.menge, bewegung.bar, bewegung.rechnung)?;
        }

        Ok(MaterialHistorie {
            material,
            bar,
            kombi,
            summen,
        })
    }
}
