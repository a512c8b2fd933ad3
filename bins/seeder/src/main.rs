//! Demo data seeder for Kontor development.
//!
//! Seeds a few Kunden, materials with bookings and open posten in every
//! ledger so the UI has something to show. Does nothing if Kunden exist.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kontor_core::kunde::CreateKundeInput;
use kontor_core::material::{CreateBarBewegungInput, CreateKombiBewegungInput, CreateMaterialInput};
use kontor_core::posten::{CreateKundenPostenInput, CreateMatPostenInput, CreatePostenInput};
use kontor_db::{
    GlaeubigerRepository, KundeRepository, KundenPostenMatRepository, KundenPostenRepository,
    MaterialBewegungRepository, MaterialRepository, PostenLedger, SchuldnerRepository,
    UserRepository,
};
use kontor_shared::AppConfig;
use sea_orm::DatabaseConnection;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = kontor_db::connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;
    kontor_db::migrate(&db).await.context("Failed to run migrations")?;

    if !KundeRepository::new(db.clone()).list(None).await?.is_empty() {
        println!("  Kunden already exist, skipping...");
        return Ok(());
    }

    UserRepository::new(db.clone()).ensure_bootstrap().await?;

    println!("Seeding Kunden...");
    let kunden = seed_kunden(&db).await?;

    println!("Seeding materials...");
    let materials = seed_materials(&db).await?;

    println!("Seeding material bookings...");
    seed_bookings(&db, &materials).await?;

    println!("Seeding Schuldner and Gläubiger...");
    seed_named_posten(&db).await?;

    println!("Seeding Kunden-posten...");
    seed_kunden_posten(&db, &kunden, &materials).await?;

    println!("Seeding complete!");
    Ok(())
}

async fn seed_kunden(db: &DatabaseConnection) -> anyhow::Result<Vec<i32>> {
    let repo = KundeRepository::new(db.clone());
    let mut ids = Vec::new();
    for name in ["Bäckerei Sommer", "Gartenbau Krüger", "Malerbetrieb Wolf"] {
        let kunde = repo
            .create(CreateKundeInput {
                name: name.to_string(),
            })
            .await?;
        ids.push(kunde.id);
    }
    Ok(ids)
}

async fn seed_materials(db: &DatabaseConnection) -> anyhow::Result<Vec<i32>> {
    let repo = MaterialRepository::new(db.clone());
    let mut ids = Vec::new();
    for (bezeichnung, bestand, einkaufspreis, verkaufspreis) in [
        ("Kies 0/16 (t)", dec!(40), dec!(18.50), dec!(29.90)),
        ("Sand 0/2 (t)", dec!(25), dec!(15.00), dec!(24.50)),
        ("Mutterboden (m³)", dec!(12), dec!(9.80), dec!(19.00)),
    ] {
        let material = repo
            .create(CreateMaterialInput {
                bezeichnung: bezeichnung.to_string(),
                bestand,
                einkaufspreis,
                verkaufspreis,
                notiz: None,
            })
            .await?;
        ids.push(material.id);
    }
    Ok(ids)
}

async fn seed_bookings(db: &DatabaseConnection, materials: &[i32]) -> anyhow::Result<()> {
    let repo = MaterialBewegungRepository::new(db.clone());
    repo.book_bar(CreateBarBewegungInput {
        material_id: materials[0],
        datum: "2026-09-02".to_string(),
        menge: dec!(3),
        preis: None,
        notiz: Some("Abholung".to_string()),
    })
    .await?;
    repo.book_kombi(CreateKombiBewegungInput {
        material_id: materials[1],
        datum: "2026-09-05".to_string(),
        menge: dec!(6),
        preis: Some(dec!(23.00)),
        bar: dec!(50),
        notiz: None,
    })
    .await?;
    Ok(())
}

async fn seed_named_posten(db: &DatabaseConnection) -> anyhow::Result<()> {
    let schuldner = SchuldnerRepository::new(db.clone());
    schuldner
        .create(posten("2026-08-14", "Hausverwaltung Lenz", dec!(1250), None))
        .await?;
    schuldner
        .create(posten("2026-09-01", "Autohaus Brandt", dec!(480), Some(dec!(200))))
        .await?;

    let glaeubiger = GlaeubigerRepository::new(db.clone());
    glaeubiger
        .create(posten("2026-09-10", "Baustoffhandel Nord", dec!(2310.40), None))
        .await?;
    Ok(())
}

fn posten(datum: &str, name: &str, betrag: Decimal, bezahlt: Option<Decimal>) -> CreatePostenInput {
    CreatePostenInput {
        datum: datum.to_string(),
        name: name.to_string(),
        betrag,
        bezahlt,
        faelligkeit: Some("2026-11-30".to_string()),
        notiz: None,
    }
}

async fn seed_kunden_posten(
    db: &DatabaseConnection,
    kunden: &[i32],
    materials: &[i32],
) -> anyhow::Result<()> {
    KundenPostenRepository::new(db.clone())
        .create(CreateKundenPostenInput {
            kunde_id: kunden[0],
            datum: "2026-09-15".to_string(),
            bezeichnung: "Pflasterarbeiten Hof".to_string(),
            betrag: dec!(860),
            bezahlt: Some(dec!(300)),
            faelligkeit: None,
            notiz: None,
        })
        .await?;

    KundenPostenMatRepository::new(db.clone())
        .create(CreateMatPostenInput {
            kunde_id: kunden[1],
            material_id: materials[2],
            datum: "2026-09-20".to_string(),
            bezeichnung: "Mutterboden geliefert".to_string(),
            menge: dec!(4),
            preis: dec!(19.00),
            bezahlt: None,
            faelligkeit: Some("2026-10-31".to_string()),
            notiz: None,
        })
        .await?;
    Ok(())
}
