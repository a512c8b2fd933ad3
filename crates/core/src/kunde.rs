//! Kunde payloads.

use serde::Deserialize;
use validator::Validate;

use kontor_shared::validation::{nicht_leer, present};

/// Create payload for a Kunde.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateKundeInput {
    /// Unique name.
    #[validate(custom(function = "nicht_leer"))]
    pub name: String,
}

/// Partial update payload for a Kunde.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateKundeInput {
    /// New unique name.
    #[validate(custom(function = "nicht_leer"))]
    #[serde(default, deserialize_with = "present")]
    pub name: Option<String>,
}
