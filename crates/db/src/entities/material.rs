//! `SeaORM` Entity for material table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "material")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub bezeichnung: String,
    #[sea_orm(column_type = "Double")]
    pub bestand: Decimal,
    #[sea_orm(column_type = "Double")]
    pub einkaufspreis: Decimal,
    #[sea_orm(column_type = "Double")]
    pub verkaufspreis: Decimal,
    #[sea_orm(column_type = "Double")]
    pub einnahmen_bar: Decimal,
    #[sea_orm(column_type = "Double")]
    pub einnahmen_rechnung: Decimal,
    pub notiz: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kunden_posten_mat::Entity")]
    KundenPostenMat,
    #[sea_orm(has_many = "super::material_bewegungen_bar::Entity")]
    BewegungenBar,
    #[sea_orm(has_many = "super::material_bewegungen_kombi::Entity")]
    BewegungenKombi,
}

impl Related<super::kunden_posten_mat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KundenPostenMat.def()
    }
}

impl Related<super::material_bewegungen_bar::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BewegungenBar.def()
    }
}

impl Related<super::material_bewegungen_kombi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BewegungenKombi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
