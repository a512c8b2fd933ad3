//! Shared setup for repository integration tests.

#![allow(dead_code)]

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use kontor_core::kunde::CreateKundeInput;
use kontor_core::material::CreateMaterialInput;
use kontor_db::{KundeRepository, MaterialRepository};

/// Fresh in-memory database with all migrations applied.
pub async fn setup() -> DatabaseConnection {
    let db = kontor_db::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");
    kontor_db::migrate(&db).await.expect("Failed to run migrations");
    db
}

/// Creates a Kunde and returns its ID.
pub async fn kunde(db: &DatabaseConnection, name: &str) -> i32 {
    KundeRepository::new(db.clone())
        .create(CreateKundeInput {
            name: name.to_string(),
        })
        .await
        .expect("Failed to create kunde")
        .id
}

/// Creates a material and returns its ID.
pub async fn material(
    db: &DatabaseConnection,
    bezeichnung: &str,
    bestand: Decimal,
    verkaufspreis: Decimal,
) -> i32 {
    MaterialRepository::new(db.clone())
        .create(CreateMaterialInput {
            bezeichnung: bezeichnung.to_string(),
            bestand,
            einkaufspreis: Decimal::ONE,
            verkaufspreis,
            notiz: None,
        })
        .await
        .expect("Failed to create material")
        .id
}
