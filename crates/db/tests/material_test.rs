//! Integration tests for materials and their movement logs.

mod common;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kontor_core::material::{
    CreateBarBewegungInput, CreateKombiBewegungInput, CreateMaterialInput, UpdateMaterialInput,
};
use kontor_core::posten::CreateMatPostenInput;
use kontor_db::{
    KundenPostenMatRepository, MaterialBewegungRepository, MaterialRepository, PostenLedger,
    RepositoryError,
};

fn bar(material_id: i32, menge: Decimal, preis: Option<Decimal>) -> CreateBarBewegungInput {
    CreateBarBewegungInput {
        material_id,
        datum: "2026-04-01".to_string(),
        menge,
        preis,
        notiz: None,
    }
}

#[tokio::test]
async fn test_bar_booking_updates_stock_and_income() {
    let db = common::setup().await;
    let sand = common::material(&db, "Sand", dec!(10), dec!(4)).await;
    let bewegungen = MaterialBewegungRepository::new(db.clone());

    let booked = bewegungen.book_bar(bar(sand, dec!(3), None)).await.unwrap();
    assert_eq!(booked.preis, dec!(4));
    assert_eq!(booked.betrag, dec!(12));

    let material = MaterialRepository::new(db).get(sand).await.unwrap();
    assert_eq!(material.bestand, dec!(7));
    assert_eq!(material.einnahmen_bar, dec!(12));
    assert_eq!(material.einnahmen_rechnung, Decimal::ZERO);
}

#[tokio::test]
async fn test_kombi_booking_splits_income() {
    let db = common::setup().await;
    let sand = common::material(&db, "Sand", dec!(10), dec!(4)).await;
    let bewegungen = MaterialBewegungRepository::new(db.clone());

    let booked = bewegungen
        .book_kombi(CreateKombiBewegungInput {
            material_id: sand,
            datum: "2026-04-02".to_string(),
            menge: dec!(5),
            preis: Some(dec!(6)),
            bar: dec!(10),
            notiz: Some("Rest auf Rechnung".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(booked.betrag, dec!(30));
    assert_eq!(booked.rechnung, dec!(20));

    let material = MaterialRepository::new(db).get(sand).await.unwrap();
    assert_eq!(material.bestand, dec!(5));
    assert_eq!(material.einnahmen_bar, dec!(10));
    assert_eq!(material.einnahmen_rechnung, dec!(20));
}

#[tokio::test]
async fn test_insufficient_stock_writes_nothing() {
    let db = common::setup().await;
    let sand = common::material(&db, "Sand", dec!(2), dec!(4)).await;
    let bewegungen = MaterialBewegungRepository::new(db.clone());

    let result = bewegungen.book_bar(bar(sand, dec!(3), None)).await;

    assert!(matches!(result, Err(RepositoryError::Precondition(_))));
    assert!(bewegungen.list_bar(Some(sand)).await.unwrap().is_empty());
    let material = MaterialRepository::new(db).get(sand).await.unwrap();
    assert_eq!(material.bestand, dec!(2));
}

#[tokio::test]
async fn test_booking_unknown_material_is_not_found() {
    let db = common::setup().await;
    let bewegungen = MaterialBewegungRepository::new(db);

    assert!(matches!(
        bewegungen.book_bar(bar(42, dec!(1), None)).await,
        Err(RepositoryError::NotFound { entity: "Material", id: 42 })
    ));
}

#[tokio::test]
async fn test_historie_totals() {
    let db = common::setup().await;
    let sand = common::material(&db, "Sand", dec!(20), dec!(2)).await;
    let kies = common::material(&db, "Kies", dec!(20), dec!(3)).await;
    let bewegungen = MaterialBewegungRepository::new(db.clone());

    bewegungen.book_bar(bar(sand, dec!(1), None)).await.unwrap();
    bewegungen.book_bar(bar(sand, dec!(2), Some(dec!(5)))).await.unwrap();
    bewegungen.book_bar(bar(kies, dec!(9), None)).await.unwrap();
    bewegungen
        .book_kombi(CreateKombiBewegungInput {
            material_id: sand,
            datum: "2026-04-03".to_string(),
            menge: dec!(4),
            preis: None,
            bar: dec!(3),
            notiz: None,
        })
        .await
        .unwrap();

    let historie = MaterialRepository::new(db).historie(sand).await.unwrap();

    assert_eq!(historie.bar.len(), 2);
    assert_eq!(historie.kombi.len(), 1);
    assert_eq!(historie.bar[0].menge, dec!(2));
    assert_eq!(historie.summen.menge_gesamt, dec!(7));
    assert_eq!(historie.summen.summe_bar, dec!(15));
    assert_eq!(historie.summen.summe_rechnung, dec!(5));
    assert_eq!(historie.material.bestand, dec!(13));
}

#[tokio::test]
async fn test_duplicate_bezeichnung_conflicts() {
    let db = common::setup().await;
    common::material(&db, "Sand", dec!(1), dec!(1)).await;
    let repo = MaterialRepository::new(db);

    let result = repo
        .create(CreateMaterialInput {
            bezeichnung: "Sand".to_string(),
            bestand: Decimal::ZERO,
            einkaufspreis: Decimal::ZERO,
            verkaufspreis: Decimal::ZERO,
            notiz: None,
        })
        .await;
    assert!(matches!(result, Err(RepositoryError::Conflict(_))));
}

#[tokio::test]
async fn test_update_keeps_rollups() {
    let db = common::setup().await;
    let sand = common::material(&db, "Sand", dec!(10), dec!(4)).await;
    MaterialBewegungRepository::new(db.clone())
        .book_bar(bar(sand, dec!(1), None))
        .await
        .unwrap();
    let repo = MaterialRepository::new(db);

    let updated = repo
        .update(
            sand,
            UpdateMaterialInput {
                bestand: Some(dec!(50)),
                notiz: Some(Some("Lieferung".to_string())),
                ..UpdateMaterialInput::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.bestand, dec!(50));
    assert_eq!(updated.einnahmen_bar, dec!(4));
    assert_eq!(updated.notiz.as_deref(), Some("Lieferung"));
}

#[tokio::test]
async fn test_referenced_material_cannot_be_deleted() {
    let db = common::setup().await;
    let anna = common::kunde(&db, "Anna GmbH").await;
    let sand = common::material(&db, "Sand", dec!(10), dec!(4)).await;
    let unused = common::material(&db, "Lehm", dec!(1), dec!(1)).await;
    KundenPostenMatRepository::new(db.clone())
        .create(CreateMatPostenInput {
            kunde_id: anna,
            material_id: sand,
            datum: "2026-04-04".to_string(),
            bezeichnung: "Sand".to_string(),
            menge: dec!(1),
            preis: dec!(4),
            bezahlt: None,
            faelligkeit: None,
            notiz: None,
        })
        .await
        .unwrap();
    let repo = MaterialRepository::new(db);

    assert!(matches!(repo.delete(sand).await, Err(RepositoryError::Conflict(_))));
    assert_eq!(repo.delete(unused).await.unwrap().bezeichnung, "Lehm");
    assert!(matches!(repo.get(unused).await, Err(RepositoryError::NotFound { .. })));
}
