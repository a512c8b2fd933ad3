//! Material stock and movement bookings.
//!
//! A booking reduces `bestand` by `menge` and adds its amount to the cash and
//! invoice income rollups of the material. Movements are append-only.

pub mod buchung;
pub mod error;
pub mod types;

#[cfg(test)]
mod buchung_props;

pub use buchung::{Buchung, Lagerstand, Summen};
pub use error::MaterialError;
pub use types::{
    CreateBarBewegungInput, CreateKombiBewegungInput, CreateMaterialInput, UpdateMaterialInput,
};
