//! `SeaORM` Entity for kunden_posten table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PostenStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kunden_posten")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub kunde_id: i32,
    pub datum: String,
    pub bezeichnung: String,
    #[sea_orm(column_type = "Double")]
    pub betrag: Decimal,
    #[sea_orm(column_type = "Double")]
    pub bezahlt: Decimal,
    #[sea_orm(column_type = "Double")]
    pub offen: Decimal,
    pub status: PostenStatus,
    pub faelligkeit: Option<String>,
    pub notiz: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kunden::Entity",
        from = "Column::KundeId",
        to = "super::kunden::Column::Id"
    )]
    Kunden,
}

impl Related<super::kunden::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kunden.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
