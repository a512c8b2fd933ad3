//! `SeaORM` Entity for material_bewegungen_bar table (append-only).

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "material_bewegungen_bar")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub material_id: i32,
    pub datum: String,
    #[sea_orm(column_type = "Double")]
    pub menge: Decimal,
    #[sea_orm(column_type = "Double")]
    pub preis: Decimal,
    #[sea_orm(column_type = "Double")]
    pub betrag: Decimal,
    pub notiz: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::material::Entity",
        from = "Column::MaterialId",
        to = "super::material::Column::Id"
    )]
    Material,
}

impl Related<super::material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Material.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
