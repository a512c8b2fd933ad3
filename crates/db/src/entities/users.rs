//! `SeaORM` Entity for users table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::{UserRole, UserStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: Option<String>,
    pub display_name: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub kunde_id: Option<i32>,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub approved_at: Option<DateTimeUtc>,
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
