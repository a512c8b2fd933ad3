//! Integration tests for the Kunden registry and the dashboard.

mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kontor_core::kunde::{CreateKundeInput, UpdateKundeInput};
use kontor_core::posten::{CreateKundenPostenInput, CreatePostenInput};
use kontor_db::{
    DashboardRepository, KundeRepository, KundenPostenRepository, PostenLedger, RepositoryError,
    SchuldnerRepository, UserRepository,
};

#[tokio::test]
async fn test_duplicate_name_conflicts() {
    let db = common::setup().await;
    common::kunde(&db, "Anna GmbH").await;
    let bert = common::kunde(&db, "Bert KG").await;
    let repo = KundeRepository::new(db);

    let create = repo
        .create(CreateKundeInput {
            name: "Anna GmbH".to_string(),
        })
        .await;
    assert!(matches!(create, Err(RepositoryError::Conflict(_))));

    let rename = repo
        .update(
            bert,
            UpdateKundeInput {
                name: Some("Anna GmbH".to_string()),
            },
        )
        .await;
    assert!(matches!(rename, Err(RepositoryError::Conflict(_))));

    let same = repo
        .update(
            bert,
            UpdateKundeInput {
                name: Some("Bert KG".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(same.name, "Bert KG");
}

#[tokio::test]
async fn test_list_restricted_to_one_kunde() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    let bert = common::kunde(&db, "Bert KG").await;
    let repo = KundeRepository::new(db);

    let all = repo.list(None).await.unwrap();
    assert_eq!(all.iter().map(|k| k.id).collect::<Vec<_>>(), vec![bert, anna]);

    let only = repo.list(Some(anna)).await.unwrap();
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].name, "Anna GmbH");
}

#[tokio::test]
async fn test_referenced_kunde_cannot_be_deleted() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    let bert = common::kunde(&db, "Bert KG").await;
    let carl = common::kunde(&db, "Carl AG").await;

    KundenPostenRepository::new(db.clone())
        .create(CreateKundenPostenInput {
            kunde_id: anna,
            datum: "2026-05-01".to_string(),
            bezeichnung: "Wartung".to_string(),
            betrag: dec!(80),
            bezahlt: None,
            faelligkeit: None,
            notiz: None,
        })
        .await
        .unwrap();
    let users = UserRepository::new(db.clone());
    let user = users.register("bert", "Bert", "hash").await.unwrap();
    users.approve(user.id, bert).await.unwrap();

    let repo = KundeRepository::new(db);
    assert!(matches!(repo.delete(anna).await, Err(RepositoryError::Conflict(_))));
    assert!(matches!(repo.delete(bert).await, Err(RepositoryError::Conflict(_))));
    assert_eq!(repo.delete(carl).await.unwrap().id, carl);
    assert!(matches!(
        repo.delete(carl).await,
        Err(RepositoryError::NotFound { entity: "Kunde", .. })
    ));
}

#[tokio::test]
async fn test_dashboard_aggregates() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    common::material(&db, "Sand", dec!(10), dec!(4)).await;

    let schuldner = SchuldnerRepository::new(db.clone());
    for (betrag, bezahlt) in [(dec!(100), None), (dec!(50), Some(dec!(50)))] {
        schuldner
            .create(CreatePostenInput {
                datum: "2026-05-02".to_string(),
                name: "Acme".to_string(),
                betrag,
                bezahlt,
                faelligkeit: None,
                notiz: None,
            })
            .await
            .unwrap();
    }
    KundenPostenRepository::new(db.clone())
        .create(CreateKundenPostenInput {
            kunde_id: anna,
            datum: "2026-05-03".to_string(),
            bezeichnung: "Wartung".to_string(),
            betrag: dec!(30),
            bezahlt: Some(dec!(10)),
            faelligkeit: None,
            notiz: None,
        })
        .await
        .unwrap();

    let dashboard = DashboardRepository::new(db).overview().await.unwrap();

    assert_eq!(dashboard.kunden, 1);
    assert_eq!(dashboard.schuldner.anzahl, 2);
    assert_eq!(dashboard.schuldner.offen_anzahl, 1);
    assert_eq!(dashboard.schuldner.offen_summe, dec!(100));
    assert_eq!(dashboard.glaeubiger.anzahl, 0);
    assert_eq!(dashboard.glaeubiger.offen_summe, Decimal::ZERO);
    assert_eq!(dashboard.kunden_posten.offen_summe, dec!(20));
    assert_eq!(dashboard.material.anzahl, 1);
    assert_eq!(dashboard.material.lagerwert, dec!(10));
}
