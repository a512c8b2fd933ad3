//! Integration tests for the Schuldner and Gläubiger ledgers.

mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kontor_core::posten::{CreatePostenInput, UpdatePostenInput};
use kontor_db::entities::sea_orm_active_enums::PostenStatus;
use kontor_db::{GlaeubigerRepository, PostenLedger, RepositoryError, SchuldnerRepository};

fn acme(betrag: Decimal, bezahlt: Option<Decimal>) -> CreatePostenInput {
    CreatePostenInput {
        datum: "2026-01-01".to_string(),
        name: "Acme".to_string(),
        betrag,
        bezahlt,
        faelligkeit: Some("2026-02-01".to_string()),
        notiz: None,
    }
}

#[tokio::test]
async fn test_create_derives_open_state() {
    let db = common::setup().await;
    let repo = SchuldnerRepository::new(db);

    let created = repo.create(acme(dec!(1000), None)).await.unwrap();

    assert_eq!(created.bezahlt, Decimal::ZERO);
    assert_eq!(created.offen, dec!(1000));
    assert_eq!(created.status, PostenStatus::Offen);
    assert_eq!(created.created_at, created.updated_at);
}

#[tokio::test]
async fn test_create_then_get_round_trip() {
    let db = common::setup().await;
    let repo = GlaeubigerRepository::new(db);

    let created = repo.create(acme(dec!(250.5), Some(dec!(50)))).await.unwrap();
    let fetched = repo.get(created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched.offen, dec!(200.5));
    assert_eq!(fetched.faelligkeit.as_deref(), Some("2026-02-01"));
}

#[tokio::test]
async fn test_payment_settles_posten() {
    let db = common::setup().await;
    let repo = SchuldnerRepository::new(db);
    let created = repo.create(acme(dec!(1000), None)).await.unwrap();

    let paid = repo.verbuche_zahlung(created.id, dec!(1000)).await.unwrap();

    assert_eq!(paid.bezahlt, dec!(1000));
    assert_eq!(paid.offen, Decimal::ZERO);
    assert_eq!(paid.status, PostenStatus::Bezahlt);
    assert_eq!(paid.name, created.name);
    assert!(paid.updated_at >= created.updated_at);
}

#[tokio::test]
async fn test_partial_payments_accumulate() {
    let db = common::setup().await;
    let repo = SchuldnerRepository::new(db);
    let created = repo.create(acme(dec!(100), None)).await.unwrap();

    repo.verbuche_zahlung(created.id, dec!(30)).await.unwrap();
    let after = repo.verbuche_zahlung(created.id, dec!(69)).await.unwrap();

    assert_eq!(after.bezahlt, dec!(99));
    assert_eq!(after.offen, dec!(1));
    assert_eq!(after.status, PostenStatus::Offen);
}

#[tokio::test]
async fn test_overpayment_keeps_negative_offen() {
    let db = common::setup().await;
    let repo = GlaeubigerRepository::new(db);
    let created = repo.create(acme(dec!(100), Some(dec!(80)))).await.unwrap();

    let after = repo.verbuche_zahlung(created.id, dec!(50)).await.unwrap();

    assert_eq!(after.bezahlt, dec!(130));
    assert_eq!(after.offen, dec!(-30));
    assert_eq!(after.status, PostenStatus::Bezahlt);
}

#[tokio::test]
async fn test_payment_rejects_non_positive_amount() {
    let db = common::setup().await;
    let repo = SchuldnerRepository::new(db);
    let created = repo.create(acme(dec!(100), None)).await.unwrap();

    let result = repo.verbuche_zahlung(created.id, Decimal::ZERO).await;
    assert!(matches!(result, Err(RepositoryError::Precondition(_))));
    assert_eq!(repo.get(created.id).await.unwrap().bezahlt, Decimal::ZERO);
}

#[tokio::test]
async fn test_empty_update_only_refreshes_timestamp() {
    let db = common::setup().await;
    let repo = SchuldnerRepository::new(db);
    let created = repo.create(acme(dec!(100), Some(dec!(40)))).await.unwrap();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let updated = repo
        .update(created.id, UpdatePostenInput::default())
        .await
        .unwrap();

    assert_eq!(updated.betrag, created.betrag);
    assert_eq!(updated.bezahlt, created.bezahlt);
    assert_eq!(updated.offen, created.offen);
    assert_eq!(updated.status, created.status);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_rederives_and_clears_nullable_fields() {
    let db = common::setup().await;
    let repo = SchuldnerRepository::new(db);
    let created = repo.create(acme(dec!(100), Some(dec!(40)))).await.unwrap();

    let updated = repo
        .update(
            created.id,
            UpdatePostenInput {
                betrag: Some(dec!(40)),
                faelligkeit: Some(None),
                notiz: Some(Some("Teilzahlung vereinbart".to_string())),
                ..UpdatePostenInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.offen, Decimal::ZERO);
    assert_eq!(updated.status, PostenStatus::Bezahlt);
    assert_eq!(updated.faelligkeit, None);
    assert_eq!(updated.notiz.as_deref(), Some("Teilzahlung vereinbart"));
    assert_eq!(updated.name, "Acme");
}

#[tokio::test]
async fn test_delete_returns_snapshot() {
    let db = common::setup().await;
    let repo = GlaeubigerRepository::new(db);
    let created = repo.create(acme(dec!(10), None)).await.unwrap();

    let deleted = repo.delete(created.id).await.unwrap();

    assert_eq!(deleted, created);
    assert!(matches!(
        repo.get(created.id).await,
        Err(RepositoryError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_missing_id_is_not_found_everywhere() {
    let db = common::setup().await;
    let repo = SchuldnerRepository::new(db);

    assert!(matches!(repo.get(99).await, Err(RepositoryError::NotFound { id: 99, .. })));
    assert!(matches!(
        repo.update(99, UpdatePostenInput::default()).await,
        Err(RepositoryError::NotFound { .. })
    ));
    assert!(matches!(repo.delete(99).await, Err(RepositoryError::NotFound { .. })));
    assert!(matches!(
        repo.verbuche_zahlung(99, dec!(1)).await,
        Err(RepositoryError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_not_found_names_the_ledger() {
    assert_eq!(SchuldnerRepository::ENTITY, "Schuldner");
    assert_eq!(GlaeubigerRepository::ENTITY, "Gläubiger");

    let db = common::setup().await;
    assert!(matches!(
        SchuldnerRepository::new(db.clone())
            .update(7, UpdatePostenInput::default())
            .await,
        Err(RepositoryError::NotFound { entity: "Schuldner", id: 7 })
    ));

    let glaeubiger = GlaeubigerRepository::new(db);
    assert!(matches!(
        glaeubiger.update(7, UpdatePostenInput::default()).await,
        Err(RepositoryError::NotFound { entity: "Gläubiger", id: 7 })
    ));
    assert!(matches!(
        glaeubiger.verbuche_zahlung(7, dec!(1)).await,
        Err(RepositoryError::NotFound { entity: "Gläubiger", .. })
    ));
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let db = common::setup().await;
    let repo = SchuldnerRepository::new(db);
    let first = repo.create(acme(dec!(1), None)).await.unwrap();
    let second = repo.create(acme(dec!(2), None)).await.unwrap();

    let ids: Vec<i32> = repo.list().await.unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn test_ledgers_are_separate_tables() {
    let db = common::setup().await;
    SchuldnerRepository::new(db.clone())
        .create(acme(dec!(5), None))
        .await
        .unwrap();

    assert!(GlaeubigerRepository::new(db).list().await.unwrap().is_empty());
}
