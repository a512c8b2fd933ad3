//! Material error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised by material bookings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterialError {
    /// Quantity must be strictly positive.
    #[error("quantity must be greater than 0, got {menge}")]
    MengeNichtPositiv {
        /// The rejected quantity.
        menge: Decimal,
    },

    /// Unit price must not be negative.
    #[error("price must not be negative, got {preis}")]
    PreisNegativ {
        /// The rejected price.
        preis: Decimal,
    },

    /// The cash share must lie within `0..=betrag`.
    #[error("cash share {bar} must be between 0 and the booking amount {betrag}")]
    BarAnteilUngueltig {
        /// The requested cash share.
        bar: Decimal,
        /// Total amount of the booking.
        betrag: Decimal,
    },

    /// Not enough stock for the booking.
    #[error("insufficient stock: {bestand} available, {menge} requested")]
    BestandUnzureichend {
        /// Current stock.
        bestand: Decimal,
        /// Requested quantity.
        menge: Decimal,
    },

    /// An amount left the range a `Decimal` can hold.
    #[error("amount exceeds the supported range")]
    BetragZuGross,
}
