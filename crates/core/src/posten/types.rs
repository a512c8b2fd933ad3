//! Posten domain types and request payloads.
//!
//! Create payloads require every non-nullable field; update payloads make
//! every field optional with the same per-field constraints. Nullable fields
//! (`faelligkeit`, `notiz`) use a double option on update so that an explicit
//! `null` clears the value while an omitted key keeps it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use kontor_shared::validation::{nicht_leer, nicht_negativ, positiv, present};

/// Payment status of a posten. There is no partially-paid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostenStatus {
    /// Something is still owed.
    Offen,
    /// Fully paid (or over-paid).
    Bezahlt,
}

impl PostenStatus {
    /// Derives the status: `bezahlt >= betrag` counts as fully paid.
    #[must_use]
    pub fn ableiten(betrag: Decimal, bezahlt: Decimal) -> Self {
        if bezahlt >= betrag {
            Self::Bezahlt
        } else {
            Self::Offen
        }
    }

    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Offen => "offen",
            Self::Bezahlt => "bezahlt",
        }
    }
}

impl fmt::Display for PostenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create payload for Schuldner and Gläubiger.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostenInput {
    /// Business date, free-form.
    #[validate(custom(function = "nicht_leer"))]
    pub datum: String,
    /// Counterparty.
    #[validate(custom(function = "nicht_leer"))]
    pub name: String,
    /// Total amount.
    #[validate(custom(function = "positiv"))]
    pub betrag: Decimal,
    /// Amount already paid, defaults to 0.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default)]
    pub bezahlt: Option<Decimal>,
    /// Due date.
    #[serde(default)]
    pub faelligkeit: Option<String>,
    /// Free text.
    #[serde(default)]
    pub notiz: Option<String>,
}

/// Partial update payload for Schuldner and Gläubiger.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePostenInput {
    /// Business date.
    #[validate(custom(function = "nicht_leer"))]
    #[serde(default, deserialize_with = "present")]
    pub datum: Option<String>,
    /// Counterparty.
    #[validate(custom(function = "nicht_leer"))]
    #[serde(default, deserialize_with = "present")]
    pub name: Option<String>,
    /// Total amount.
    #[validate(custom(function = "positiv"))]
    #[serde(default, deserialize_with = "present")]
    pub betrag: Option<Decimal>,
    /// Amount paid, set directly.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default, deserialize_with = "present")]
    pub bezahlt: Option<Decimal>,
    /// Due date; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub faelligkeit: Option<Option<String>>,
    /// Free text; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notiz: Option<Option<String>>,
}

/// Create payload for a Kunden-posten.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateKundenPostenInput {
    /// Owning Kunde, must exist.
    #[validate(range(min = 1))]
    pub kunde_id: i32,
    /// Business date, free-form.
    #[validate(custom(function = "nicht_leer"))]
    pub datum: String,
    /// Label.
    #[validate(custom(function = "nicht_leer"))]
    pub bezeichnung: String,
    /// Total amount.
    #[validate(custom(function = "positiv"))]
    pub betrag: Decimal,
    /// Amount already paid, defaults to 0.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default)]
    pub bezahlt: Option<Decimal>,
    /// Due date.
    #[serde(default)]
    pub faelligkeit: Option<String>,
    /// Free text.
    #[serde(default)]
    pub notiz: Option<String>,
}

/// Partial update payload for a Kunden-posten.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateKundenPostenInput {
    /// New owning Kunde, re-checked before the write.
    #[validate(range(min = 1))]
    #[serde(default, deserialize_with = "present")]
    pub kunde_id: Option<i32>,
    /// Business date.
    #[validate(custom(function = "nicht_leer"))]
    #[serde(default, deserialize_with = "present")]
    pub datum: Option<String>,
    /// Label.
    #[validate(custom(function = "nicht_leer"))]
    #[serde(default, deserialize_with = "present")]
    pub bezeichnung: Option<String>,
    /// Total amount.
    #[validate(custom(function = "positiv"))]
    #[serde(default, deserialize_with = "present")]
    pub betrag: Option<Decimal>,
    /// Amount paid, set directly.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default, deserialize_with = "present")]
    pub bezahlt: Option<Decimal>,
    /// Due date; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub faelligkeit: Option<Option<String>>,
    /// Free text; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notiz: Option<Option<String>>,
}

/// Create payload for a material Kunden-posten. `betrag` is computed as
/// `menge × preis`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMatPostenInput {
    /// Owning Kunde, must exist.
    #[validate(range(min = 1))]
    pub kunde_id: i32,
    /// Material sold, must exist.
    #[validate(range(min = 1))]
    pub material_id: i32,
    /// Business date, free-form.
    #[validate(custom(function = "nicht_leer"))]
    pub datum: String,
    /// Label.
    #[validate(custom(function = "nicht_leer"))]
    pub bezeichnung: String,
    /// Quantity.
    #[validate(custom(function = "positiv"))]
    pub menge: Decimal,
    /// Unit price.
    #[validate(custom(function = "positiv"))]
    pub preis: Decimal,
    /// Amount already paid, defaults to 0.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default)]
    pub bezahlt: Option<Decimal>,
    /// Due date.
    #[serde(default)]
    pub faelligkeit: Option<String>,
    /// Free text.
    #[serde(default)]
    pub notiz: Option<String>,
}

/// Partial update payload for a material Kunden-posten.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMatPostenInput {
    /// New owning Kunde.
    #[validate(range(min = 1))]
    #[serde(default, deserialize_with = "present")]
    pub kunde_id: Option<i32>,
    /// New material.
    #[validate(range(min = 1))]
    #[serde(default, deserialize_with = "present")]
    pub material_id: Option<i32>,
    /// Business date.
    #[validate(custom(function = "nicht_leer"))]
    #[serde(default, deserialize_with = "present")]
    pub datum: Option<String>,
    /// Label.
    #[validate(custom(function = "nicht_leer"))]
    #[serde(default, deserialize_with = "present")]
    pub bezeichnung: Option<String>,
    /// Quantity; changes `betrag`.
    #[validate(custom(function = "positiv"))]
    #[serde(default, deserialize_with = "present")]
    pub menge: Option<Decimal>,
    /// Unit price; changes `betrag`.
    #[validate(custom(function = "positiv"))]
    #[serde(default, deserialize_with = "present")]
    pub preis: Option<Decimal>,
    /// Amount paid, set directly.
    #[validate(custom(function = "nicht_negativ"))]
    #[serde(default, deserialize_with = "present")]
    pub bezahlt: Option<Decimal>,
    /// Due date; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub faelligkeit: Option<Option<String>>,
    /// Free text; `null` clears it.
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub notiz: Option<Option<String>>,
}

/// Payment booking payload.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct ZahlungInput {
    /// Amount to add to `bezahlt`.
    #[validate(custom(function = "positiv"))]
    pub betrag: Decimal,
}
