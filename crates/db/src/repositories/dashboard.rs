//! Dashboard aggregates over all ledgers and the material stock.

use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;

use kontor_core::material::MaterialError;
use kontor_core::posten::{PostenUebersicht, Stand};
use kontor_shared::types::betrag_aus;

use super::RepositoryError;
use crate::entities::{glaeubiger, kunden, kunden_posten, kunden_posten_mat, material, schuldner};

/// Material figures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MaterialUebersicht {
    /// Number of materials.
    pub anzahl: u64,
    /// `Σ bestand × einkaufspreis`.
    pub lagerwert: Decimal,
}

/// Dashboard figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    /// Number of Kunden.
    pub kunden: u64,
    /// Schuldner ledger.
    pub schuldner: PostenUebersicht,
    /// Gläubiger ledger.
    pub glaeubiger: PostenUebersicht,
    /// Both Kunden-posten ledgers combined.
    pub kunden_posten: PostenUebersicht,
    /// Material stock.
    pub material: MaterialUebersicht,
}

/// Read-only aggregate queries.
#[derive(Debug, Clone)]
pub struct DashboardRepository {
    db: DatabaseConnection,
}

impl DashboardRepository {
    /// Creates a new dashboard repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the dashboard figures.
    ///
    /// # Errors
    ///
    /// Returns an error if a database query fails, or `Precondition` if a
    /// sum leaves the `Decimal` range.
    pub async fn overview(&self) -> Result<Dashboard, RepositoryError> {
        let kunden = kunden::Entity::find().count(&self.db).await?;

        let mut schuldner = PostenUebersicht::default();
        for posten in schuldner::Entity::find().all(&self.db).await? {
            schuldner.erfassen(&Stand::berechnen(posten.betrag, posten.bezahlt))?;
        }

        let mut glaeubiger = PostenUebersicht::default();
        for posten in glaeubiger::Entity::find().all(&self.db).await? {
            glaeubiger.erfassen(&Stand::berechnen(posten.betrag, posten.bezahlt))?;
        }

        let mut kunden_posten = PostenUebersicht::default();
        for posten in kunden_posten::Entity::find().all(&self.db).await? {
            kunden_posten.erfassen(&Stand::berechnen(posten.betrag, posten.bezahlt))?;
        }
        for posten in kunden_posten_mat::Entity::find().all(&self.db).await? {
            kunden_posten.erfassen(&Stand::berechnen(posten.betrag, posten.bezahlt))?;
        }

        let mut material = MaterialUebersicht::default();
        for eintrag in material::Entity::find().all(&self.db).await? {
            material.anzahl += 1;
            material.lagerwert = betrag_aus(eintrag.bestand, eintrag.einkaufspreis)
                .and_then(|wert| material.lagerwert.checked_add(wert))
                .ok_or(MaterialError::BetragZuGross)?;
        }

        Ok(Dashboard {
            kunden,
            schuldner,
            glaeubiger,
            kunden_posten,
            material,
        })
    }
}
