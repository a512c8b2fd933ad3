//! `SeaORM` Entity for kunden table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "kunden")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kunden_posten::Entity")]
    KundenPosten,
    #[sea_orm(has_many = "super::kunden_posten_mat::Entity")]
    KundenPostenMat,
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
}

impl Related<super::kunden_posten::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KundenPosten.def()
    }
}

impl Related<super::kunden_posten_mat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KundenPostenMat.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
