//! Booking arithmetic for material movements.

use rust_decimal::Decimal;
use serde::Serialize;

use kontor_shared::types::{betrag_aus, ist_nicht_negativ, ist_positiv};

use super::error::MaterialError;

/// One resolved movement: quantity, unit price and the split of its amount
/// into cash (`bar`) and invoice (`rechnung`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Buchung {
    /// Quantity taken from stock.
    pub menge: Decimal,
    /// Unit price.
    pub preis: Decimal,
    /// `menge × preis`.
    pub betrag: Decimal,
    /// Cash share.
    pub bar: Decimal,
    /// Invoice share, `betrag - bar`.
    pub rechnung: Decimal,
}

impl Buchung {
    /// A pure cash booking: the whole amount is cash.
    ///
    /// # Errors
    ///
    /// Rejects a non-positive quantity, a negative price or an amount that
    /// overflows.
    pub fn bar(menge: Decimal, preis: Decimal) -> Result<Self, MaterialError> {
        let betrag = checked_betrag(menge, preis)?;
        Ok(Self {
            menge,
            preis,
            betrag,
            bar: betrag,
            rechnung: Decimal::ZERO,
        })
    }

    /// A split booking: `bar` is paid in cash, the rest is invoiced.
    ///
    /// # Errors
    ///
    /// Rejects a non-positive quantity, a negative price, or a cash share
    /// outside `0..=betrag`.
    pub fn kombi(menge: Decimal, preis: Decimal, bar: Decimal) -> Result<Self, MaterialError> {
        let betrag = checked_betrag(menge, preis)?;
        if !ist_nicht_negativ(bar) || bar > betrag {
            return Err(MaterialError::BarAnteilUngueltig { bar, betrag });
        }
        Ok(Self {
            menge,
            preis,
            betrag,
            bar,
            rechnung: betrag - bar,
        })
    }
}

fn checked_betrag(menge: Decimal, preis: Decimal) -> Result<Decimal, MaterialError> {
    if !ist_positiv(menge) {
        return Err(MaterialError::MengeNichtPositiv { menge });
    }
    if !ist_nicht_negativ(preis) {
        return Err(MaterialError::PreisNegativ { preis });
    }
    betrag_aus(menge, preis).ok_or(MaterialError::BetragZuGross)
}

fn summe(a: Decimal, b: Decimal) -> Result<Decimal, MaterialError> {
    a.checked_add(b).ok_or(MaterialError::BetragZuGross)
}

/// Stock and income rollups of one material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lagerstand {
    /// Units in stock.
    pub bestand: Decimal,
    /// Income paid in cash.
    pub einnahmen_bar: Decimal,
    /// Income invoiced.
    pub einnahmen_rechnung: Decimal,
}

impl Lagerstand {
    /// Applies a booking.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::BestandUnzureichend`] if `menge > bestand`, and
    /// [`MaterialError::BetragZuGross`] if an income total overflows.
    pub fn buchen(&self, buchung: &Buchung) -> Result<Self, MaterialError> {
        if buchung.menge > self.bestand {
            return Err(MaterialError::BestandUnzureichend {
                bestand: self.bestand,
                menge: buchung.menge,
            });
        }
        Ok(Self {
            bestand: self.bestand - buchung.menge,
            einnahmen_bar: summe(self.einnahmen_bar, buchung.bar)?,
            einnahmen_rechnung: summe(self.einnahmen_rechnung, buchung.rechnung)?,
        })
    }
}

/// Totals over the movement history of one material.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summen {
    /// Total quantity moved.
    pub menge_gesamt: Decimal,
    /// Total cash share.
    pub summe_bar: Decimal,
    /// Total invoice share.
    pub summe_rechnung: Decimal,
}

impl Summen {
    /// Adds one movement.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::BetragZuGross`] if a total overflows; the
    /// totals are left unchanged then.
    pub fn erfassen(
        &mut self,
        menge: Decimal,
        bar: Decimal,
        rechnung: Decimal,
    ) -> Result<(), MaterialError> {
        *self = Self {
            menge_gesamt: summe(self.menge_gesamt, menge)?,
            summe_bar: summe(self.summe_bar, bar)?,
            summe_rechnung: summe(self.summe_rechnung, rechnung)?,
        };
        Ok(())
    }
}
