//! Material and movement request payloads.

use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use kontor_shared::validation::{nicht_leer, nicht_negativ, positiv, present};

/// Create payload for a material. Income rollups start at zero.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMaterialInput {
    /// Unique label.
    #[validate(custom(function = "nicht_leer"))]
    pub bezeichnung: String,
    /// Units in stock.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default)]
    pub bestand: Decimal,
    /// Unit purchase price.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default)]
    pub einkaufspreis: Decimal,
    /// Unit sale price, the default price of bookings.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default)]
    pub verkaufspreis: Decimal,
    /// Free text.
    #[serde(default)]
    pub notiz: Option<String>,
}

/// Partial update payload for a material. Rollups are not settable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMaterialInput {
    /// Unique label.
    #[validate(custom(function = "nicht_leer"))]
    #[serde(default, deserialize_with = "present")]
    pub bezeichnung: Option<String>,
    /// Units in stock, e.g. after a delivery or stock-take.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default, deserialize_with = "present")]
    pub bestand: Option<Decimal>,
    /// Unit purchase price.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default, deserialize_with = "present")]
    pub einkaufspreis: Option<Decimal>,
    /// Unit sale price.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default, deserialize_with = "present")]
    pub verkaufspreis: Option<Decimal>,
    /// Free text; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notiz: Option<Option<String>>,
}

/// Cash booking payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBarBewegungInput {
    /// Material moved.
    #[validate(range(min = 1))]
    pub material_id: i32,
    /// Business date, free-form.
    #[validate(custom(function = "nicht_leer"))]
    pub datum: String,
    /// Quantity.
    #[validate(custom(function = "positiv"))]
    pub menge: Decimal,
    /// Unit price; the material's `verkaufspreis` when omitted.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default)]
    pub preis: Option<Decimal>,
    /// Free text.
    #[serde(default)]
    pub notiz: Option<String>,
}

/// Split cash/invoice booking payload.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateKombiBewegungInput {
    /// Material moved.
    #[validate(range(min = 1))]
    pub material_id: i32,
    /// Business date, free-form.
    #[validate(custom(function = "nicht_leer"))]
    pub datum: String,
    /// Quantity.
    #[validate(custom(function = "positiv"))]
    pub menge: Decimal,
    /// Unit price; the material's `verkaufspreis` when omitted.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default)]
    pub preis: Option<Decimal>,
    /// Cash share of the amount; the rest is invoiced.
    #[validate(custom(function = "nicht_negativ"))]
    pub bar: Decimal,
    /// Free text.
    #[serde(default)]
    pub notiz: Option<String>,
}
