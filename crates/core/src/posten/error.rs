//! Posten error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by posten rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostenError {
    /// A payment must add a strictly positive amount.
    #[error("payment amount must be greater than 0, got {betrag}")]
    ZahlungNichtPositiv {
        /// The rejected amount.
        betrag: Decimal,
    },

    /// Quantity of a material posten must be strictly positive.
    #[error("quantity must be greater than 0, got {menge}")]
    MengeNichtPositiv {
        /// The rejected quantity.
        menge: Decimal,
    },

    /// An amount left the range a `Decimal` can hold.
    #[error("amount exceeds the supported range")]
    BetragZuGross,
}
