//! `SeaORM` entity definitions.

pub mod glaeubiger;
pub mod kunden;
pub mod kunden_posten;
pub mod kunden_posten_mat;
pub mod material;
pub mod material_bewegungen_bar;
pub mod material_bewegungen_kombi;
pub mod schuldner;
pub mod sea_orm_active_enums;
pub mod users;
