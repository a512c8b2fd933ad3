//! Common types used across the application.

pub mod money;

pub use money::{betrag_aus, format_eur, ist_nicht_negativ, ist_positiv, offen};
