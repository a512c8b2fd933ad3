//! Ledger posten: the shared shape behind Schuldner, Gläubiger and both
//! Kunden-posten variants.
//!
//! Every posten carries `betrag`, `bezahlt`, `offen` and `status`. The last two
//! are never client-settable; they are derived by [`Stand`] after each create,
//! update and payment booking.

pub mod error;
pub mod stand;
pub mod types;
pub mod uebersicht;

#[cfg(test)]
mod stand_props;

pub use error::PostenError;
pub use stand::{MatPosition, Stand};
pub use types::{
    CreateKundenPostenInput, CreateMatPostenInput, CreatePostenInput, PostenStatus,
    UpdateKundenPostenInput, UpdateMatPostenInput, UpdatePostenInput, ZahlungInput,
};
pub use uebersicht::PostenUebersicht;
