//! Initial database migration.
//!
//! Creates the Kunden, the four posten ledgers, material and both movement logs.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Kunden::Table)
                    .if_not_exists()
                    .col(id(Kunden::Id))
                    .col(ColumnDef::new(Kunden::Name).string().not_null().unique_key())
                    .col(timestamp(Kunden::CreatedAt))
                    .col(timestamp(Kunden::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Material::Table)
                    .if_not_exists()
                    .col(id(Material::Id))
                    .col(
                        ColumnDef::new(Material::Bezeichnung)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(amount(Material::Bestand))
                    .col(amount(Material::Einkaufspreis))
                    .col(amount(Material::Verkaufspreis))
                    .col(amount(Material::EinnahmenBar))
                    .col(amount(Material::EinnahmenRechnung))
                    .col(ColumnDef::new(Material::Notiz).text().null())
                    .col(timestamp(Material::CreatedAt))
                    .col(timestamp(Material::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        for table in [Posten::Schuldner, Posten::Glaeubiger] {
            manager
                .create_table(
                    Table::create()
                        .table(table)
                        .if_not_exists()
                        .col(id(Posten::Id))
                        .col(ColumnDef::new(Posten::Datum).string().not_null())
                        .col(ColumnDef::new(Posten::Name).string().not_null())
                        .col(amount(Posten::Betrag))
                        .col(amount(Posten::Bezahlt))
                        .col(amount(Posten::Offen))
                        .col(status(Posten::Status))
                        .col(ColumnDef::new(Posten::Faelligkeit).string().null())
                        .col(ColumnDef::new(Posten::Notiz).text().null())
                        .col(timestamp(Posten::CreatedAt))
                        .col(timestamp(Posten::UpdatedAt))
                        .to_owned(),
                )
                .await?;
        }

        manager
            .create_table(
                Table::create()
                    .table(Posten::KundenPosten)
                    .if_not_exists()
                    .col(id(Posten::Id))
                    .col(ColumnDef::new(Posten::KundeId).integer().not_null())
                    .col(ColumnDef::new(Posten::Datum).string().not_null())
                    .col(ColumnDef::new(Posten::Bezeichnung).string().not_null())
                    .col(amount(Posten::Betrag))
                    .col(amount(Posten::Bezahlt))
                    .col(amount(Posten::Offen))
                    .col(status(Posten::Status))
                    .col(ColumnDef::new(Posten::Faelligkeit).string().null())
                    .col(ColumnDef::new(Posten::Notiz).text().null())
                    .col(timestamp(Posten::CreatedAt))
                    .col(timestamp(Posten::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kunden_posten_kunde")
                            .from(Posten::KundenPosten, Posten::KundeId)
                            .to(Kunden::Table, Kunden::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Posten::KundenPostenMat)
                    .if_not_exists()
                    .col(id(Posten::Id))
                    .col(ColumnDef::new(Posten::KundeId).integer().not_null())
                    .col(ColumnDef::new(Posten::MaterialId).integer().not_null())
                    .col(ColumnDef::new(Posten::Datum).string().not_null())
                    .col(ColumnDef::new(Posten::Bezeichnung).string().not_null())
                    .col(amount(Posten::Menge))
                    .col(amount(Posten::Preis))
                    .col(amount(Posten::Betrag))
                    .col(amount(Posten::Bezahlt))
                    .col(amount(Posten::Offen))
                    .col(status(Posten::Status))
                    .col(ColumnDef::new(Posten::Faelligkeit).string().null())
                    .col(ColumnDef::new(Posten::Notiz).text().null())
                    .col(timestamp(Posten::CreatedAt))
                    .col(timestamp(Posten::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kunden_posten_mat_kunde")
                            .from(Posten::KundenPostenMat, Posten::KundeId)
                            .to(Kunden::Table, Kunden::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kunden_posten_mat_material")
                            .from(Posten::KundenPostenMat, Posten::MaterialId)
                            .to(Material::Table, Material::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bewegung::MaterialBewegungenBar)
                    .if_not_exists()
                    .col(id(Bewegung::Id))
                    .col(ColumnDef::new(Bewegung::MaterialId).integer().not_null())
                    .col(ColumnDef::new(Bewegung::Datum).string().not_null())
                    .col(amount(Bewegung::Menge))
                    .col(amount(Bewegung::Preis))
                    .col(amount(Bewegung::Betrag))
                    .col(ColumnDef::new(Bewegung::Notiz).text().null())
                    .col(timestamp(Bewegung::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_material_bewegungen_bar_material")
                            .from(Bewegung::MaterialBewegungenBar, Bewegung::MaterialId)
                            .to(Material::Table, Material::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Bewegung::MaterialBewegungenKombi)
                    .if_not_exists()
                    .col(id(Bewegung::Id))
                    .col(ColumnDef::new(Bewegung::MaterialId).integer().not_null())
                    .col(ColumnDef::new(Bewegung::Datum).string().not_null())
                    .col(amount(Bewegung::Menge))
                    .col(amount(Bewegung::Preis))
                    .col(amount(Bewegung::Betrag))
                    .col(amount(Bewegung::Bar))
                    .col(amount(Bewegung::Rechnung))
                    .col(ColumnDef::new(Bewegung::Notiz).text().null())
                    .col(timestamp(Bewegung::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_material_bewegungen_kombi_material")
                            .from(Bewegung::MaterialBewegungenKombi, Bewegung::MaterialId)
                            .to(Material::Table, Material::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, table, column) in [
            ("idx_kunden_posten_kunde", Posten::KundenPosten, Posten::KundeId),
            ("idx_kunden_posten_mat_kunde", Posten::KundenPostenMat, Posten::KundeId),
            ("idx_kunden_posten_mat_material", Posten::KundenPostenMat, Posten::MaterialId),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        for (name, table) in [
            ("idx_material_bewegungen_bar_material", Bewegung::MaterialBewegungenBar),
            ("idx_material_bewegungen_kombi_material", Bewegung::MaterialBewegungenKombi),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(table)
                        .col(Bewegung::MaterialId)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for table in [Bewegung::MaterialBewegungenKombi, Bewegung::MaterialBewegungenBar] {
            manager.drop_table(Table::drop().table(table).to_owned()).await?;
        }
        for table in [
            Posten::KundenPostenMat,
            Posten::KundenPosten,
            Posten::Glaeubiger,
            Posten::Schuldner,
        ] {
            manager.drop_table(Table::drop().table(table).to_owned()).await?;
        }
        manager
            .drop_table(Table::drop().table(Material::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Kunden::Table).to_owned())
            .await
    }
}

fn id<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

// Stored as REAL; the repositories read and write `rust_decimal::Decimal`.
fn amount<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column).double().not_null().to_owned()
}

fn status<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column).string_len(16).not_null().to_owned()
}

fn timestamp<T: IntoIden>(column: T) -> ColumnDef {
    ColumnDef::new(column)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

#[derive(DeriveIden)]
enum Kunden {
    Table,
    Id,
    Name,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Material {
    Table,
    Id,
    Bezeichnung,
    Bestand,
    Einkaufspreis,
    Verkaufspreis,
    EinnahmenBar,
    EinnahmenRechnung,
    Notiz,
    CreatedAt,
    UpdatedAt,
}

#[derive(Clone, Copy, DeriveIden)]
enum Posten {
    Schuldner,
    Glaeubiger,
    KundenPosten,
    KundenPostenMat,
    Id,
    KundeId,
    MaterialId,
    Datum,
    Name,
    Bezeichnung,
    Menge,
    Preis,
    Betrag,
    Bezahlt,
    Offen,
    Status,
    Faelligkeit,
    Notiz,
    CreatedAt,
    UpdatedAt,
}

#[derive(Clone, Copy, DeriveIden)]
enum Bewegung {
    MaterialBewegungenBar,
    MaterialBewegungenKombi,
    Id,
    MaterialId,
    Datum,
    Menge,
    Preis,
    Betrag,
    Bar,
    Rechnung,
    Notiz,
    CreatedAt,
}
