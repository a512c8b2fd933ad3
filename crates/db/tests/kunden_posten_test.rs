//! Integration tests for both Kunden-posten ledgers.

mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kontor_core::posten::{
    CreateKundenPostenInput, CreateMatPostenInput, UpdateKundenPostenInput, UpdateMatPostenInput,
};
use kontor_db::entities::sea_orm_active_enums::PostenStatus;
use kontor_db::{KundenPostenMatRepository, KundenPostenRepository, PostenLedger, RepositoryError};

fn posten(kunde_id: i32, betrag: Decimal) -> CreateKundenPostenInput {
    CreateKundenPostenInput {
        kunde_id,
        datum: "2026-03-01".to_string(),
        bezeichnung: "Wartung".to_string(),
        betrag,
        bezahlt: None,
        faelligkeit: None,
        notiz: None,
    }
}

fn mat_posten(kunde_id: i32, material_id: i32) -> CreateMatPostenInput {
    CreateMatPostenInput {
        kunde_id,
        material_id,
        datum: "2026-03-02".to_string(),
        bezeichnung: "Kies".to_string(),
        menge: dec!(4),
        preis: dec!(12.5),
        bezahlt: Some(dec!(10)),
        faelligkeit: None,
        notiz: None,
    }
}

#[tokio::test]
async fn test_unknown_kunde_is_not_found_and_nothing_is_written() {
    let db = common::setup().await;
    let repo = KundenPostenRepository::new(db);

    let result = repo.create(posten(4711, dec!(100))).await;

    assert!(matches!(
        result,
        Err(RepositoryError::NotFound { entity: "Kunde", id: 4711 })
    ));
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_list_by_kunde_filters() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    let bert = common::kunde(&db, "Bert KG").await;
    let repo = KundenPostenRepository::new(db);

    repo.create(posten(anna, dec!(10))).await.unwrap();
    repo.create(posten(bert, dec!(20))).await.unwrap();
    repo.create(posten(anna, dec!(30))).await.unwrap();

    let annas = repo.list_by_kunde(anna).await.unwrap();
    assert_eq!(annas.len(), 2);
    assert!(annas.iter().all(|p| p.kunde_id == anna));
    assert_eq!(annas[0].betrag, dec!(30));
    assert_eq!(repo.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_moving_to_unknown_kunde_keeps_record() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    let repo = KundenPostenRepository::new(db);
    let created = repo.create(posten(anna, dec!(10))).await.unwrap();

    let result = repo
        .update(
            created.id,
            UpdateKundenPostenInput {
                kunde_id: Some(999),
                betrag: Some(dec!(5)),
                ..UpdateKundenPostenInput::default()
            },
        )
        .await;

    assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    assert_eq!(repo.get(created.id).await.unwrap(), created);
}

#[tokio::test]
async fn test_kunden_posten_payment() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    let repo = KundenPostenRepository::new(db);
    let created = repo.create(posten(anna, dec!(80))).await.unwrap();

    let paid = repo.verbuche_zahlung(created.id, dec!(80)).await.unwrap();
    assert_eq!(paid.status, PostenStatus::Bezahlt);
    assert_eq!(paid.offen, Decimal::ZERO);
}

#[tokio::test]
async fn test_mat_posten_computes_betrag() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    let kies = common::material(&db, "Kies", dec!(100), dec!(12.5)).await;
    let repo = KundenPostenMatRepository::new(db);

    let created = repo.create(mat_posten(anna, kies)).await.unwrap();

    assert_eq!(created.betrag, dec!(50));
    assert_eq!(created.bezahlt, dec!(10));
    assert_eq!(created.offen, dec!(40));
    assert_eq!(created.status, PostenStatus::Offen);
}

#[tokio::test]
async fn test_mat_posten_requires_material() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    let repo = KundenPostenMatRepository::new(db);

    let result = repo.create(mat_posten(anna, 77)).await;
    assert!(matches!(
        result,
        Err(RepositoryError::NotFound { entity: "Material", id: 77 })
    ));
}

#[tokio::test]
async fn test_mat_posten_update_recomputes_betrag() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    let kies = common::material(&db, "Kies", dec!(100), dec!(12.5)).await;
    let repo = KundenPostenMatRepository::new(db);
    let created = repo.create(mat_posten(anna, kies)).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateMatPostenInput {
                menge: Some(dec!(2)),
                ..UpdateMatPostenInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.betrag, dec!(25));
    assert_eq!(updated.offen, dec!(15));

    let untouched = repo
        .update(
            created.id,
            UpdateMatPostenInput {
                bezeichnung: Some("Feinkies".to_string()),
                ..UpdateMatPostenInput::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(untouched.betrag, dec!(25));
    assert_eq!(untouched.bezeichnung, "Feinkies");
}
