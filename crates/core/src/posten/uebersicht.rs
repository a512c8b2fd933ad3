//! Aggregate figures over one posten ledger.

use rust_decimal::Decimal;
use serde::Serialize;

use super::error::PostenError;
use super::stand::Stand;

/// Counts and open sum of a ledger, as shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PostenUebersicht {
    /// Number of posten.
    pub anzahl: u64,
    /// Number of posten still open.
    pub offen_anzahl: u64,
    /// Sum of `offen` over the open posten.
    pub offen_summe: Decimal,
}

impl PostenUebersicht {
    /// Adds one posten.
    ///
    /// # Errors
    ///
    /// Returns [`PostenError::BetragZuGross`] if the open sum overflows.
    pub fn erfassen(&mut self, stand: &Stand) -> Result<(), PostenError> {
        if !stand.ist_bezahlt() {
            self.offen_summe = self
                .offen_summe
                .checked_add(stand.offen)
                .ok_or(PostenError::BetragZuGross)?;
            self.offen_anzahl += 1;
        }
        self.anzahl += 1;
        Ok(())
    }

    /// Builds the figures of a whole ledger.
    ///
    /// # Errors
    ///
    /// Returns [`PostenError::BetragZuGross`] if the open sum overflows.
    pub fn aus<'a>(staende: impl IntoIterator<Item = &'a Stand>) -> Result<Self, PostenError> {
        let mut uebersicht = Self::default();
        for stand in staende {
            uebersicht.erfassen(stand)?;
        }
        Ok(uebersicht)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_overpaid_posten_do_not_count_as_open() {
        let staende = [
            Stand::neu(dec!(100), None),
            Stand::neu(dec!(50), Some(dec!(20))),
            Stand::neu(dec!(10), Some(dec!(15))),
        ];
        let uebersicht = PostenUebersicht::aus(&staende).unwrap();

        assert_eq!(uebersicht.anzahl, 3);
        assert_eq!(uebersicht.offen_anzahl, 2);
        assert_eq!(uebersicht.offen_summe, dec!(130));
    }

    #[test]
    fn test_empty_ledger() {
        let uebersicht = PostenUebersicht::aus(std::iter::empty()).unwrap();
        assert_eq!(uebersicht, PostenUebersicht::default());
    }

    #[test]
    fn test_open_sum_overflow() {
        let staende = [Stand::neu(Decimal::MAX, None), Stand::neu(dec!(1), None)];
        assert_eq!(
            PostenUebersicht::aus(&staende),
            Err(PostenError::BetragZuGross)
        );
    }
}
