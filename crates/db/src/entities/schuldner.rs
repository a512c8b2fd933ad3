//! `SeaORM` Entity for schuldner table (money owed to the business).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::PostenStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "schuldner")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub datum: String,
    pub name: String,
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
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
