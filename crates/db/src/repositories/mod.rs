//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.
//! Every read-recompute-write sequence runs inside one transaction.

pub mod dashboard;
pub mod error;
pub mod kunde;
pub mod kunden_posten;
pub mod kunden_posten_mat;
pub mod ledger;
pub mod material;
pub mod material_bewegung;
pub mod named_posten;
pub mod user;

pub use dashboard::{Dashboard, DashboardRepository, MaterialUebersicht};
pub use error::RepositoryError;
pub use kunde::KundeRepository;
pub use kunden_posten::KundenPostenRepository;
pub use kunden_posten_mat::KundenPostenMatRepository;
pub use ledger::PostenLedger;
pub use material::{MaterialHistorie, MaterialRepository};
pub use material_bewegung::MaterialBewegungRepository;
pub use named_posten::{GlaeubigerRepository, SchuldnerRepository};
pub use user::{BOOTSTRAP_DISPLAY_NAME, UserRepository};
