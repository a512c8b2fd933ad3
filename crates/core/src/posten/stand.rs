//! Derived posten state.

use rust_decimal::Decimal;
use serde::Serialize;

use kontor_shared::types::{betrag_aus, ist_positiv, offen};

use super::error::PostenError;
use super::types::PostenStatus;

/// The monetary state of a posten: the stored amounts plus everything derived
/// from them.
///
/// `offen == betrag - bezahlt` and `status == PostenStatus::ableiten(betrag, bezahlt)`
/// hold for every value built through this type. Over-payment is kept as is,
/// so `offen` may be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stand {
    /// Total amount due.
    pub betrag: Decimal,
    /// Amount paid so far.
    pub bezahlt: Decimal,
    /// Remaining open amount.
    pub offen: Decimal,
    /// Derived status.
    pub status: PostenStatus,
}

impl Stand {
    /// Derives `offen` and `status` from `betrag` and `bezahlt`.
    #[must_use]
    pub fn berechnen(betrag: Decimal, bezahlt: Decimal) -> Self {
        Self {
            betrag,
            bezahlt,
            offen: offen(betrag, bezahlt),
            status: PostenStatus::ableiten(betrag, bezahlt),
        }
    }

    /// State of a freshly created posten; `bezahlt` defaults to zero.
    #[must_use]
    pub fn neu(betrag: Decimal, bezahlt: Option<Decimal>) -> Self {
        Self::berechnen(betrag, bezahlt.unwrap_or(Decimal::ZERO))
    }

    /// Merges a partial update over the current amounts and re-derives.
    ///
    /// Omitted amounts keep their current value. An update without amounts
    /// yields the same state.
    #[must_use]
    pub fn geaendert(&self, betrag: Option<Decimal>, bezahlt: Option<Decimal>) -> Self {
        Self::berechnen(
            betrag.unwrap_or(self.betrag),
            bezahlt.unwrap_or(self.bezahlt),
        )
    }

    /// Books a payment: `bezahlt += zahlung`, then re-derives.
    ///
    /// # Errors
    ///
    /// Returns [`PostenError::ZahlungNichtPositiv`] unless `zahlung > 0`, and
    /// [`PostenError::BetragZuGross`] if the new `bezahlt` overflows.
    pub fn mit_zahlung(&self, zahlung: Decimal) -> Result<Self, PostenError> {
        if !ist_positiv(zahlung) {
            return Err(PostenError::ZahlungNichtPositiv { betrag: zahlung });
        }
        let bezahlt = self
            .bezahlt
            .checked_add(zahlung)
            .ok_or(PostenError::BetragZuGross)?;
        Ok(Self::berechnen(self.betrag, bezahlt))
    }

    /// Returns true if the posten is fully paid.
    #[must_use]
    pub fn ist_bezahlt(&self) -> bool {
        self.status == PostenStatus::Bezahlt
    }
}

/// Quantity and unit price of a material posten; its `betrag` is always
/// `menge × preis`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatPosition {
    /// Quantity.
    pub menge: Decimal,
    /// Unit price.
    pub preis: Decimal,
}

impl MatPosition {
    /// Builds a position.
    ///
    /// # Errors
    ///
    /// Returns [`PostenError::MengeNichtPositiv`] unless `menge > 0`, and
    /// [`PostenError::BetragZuGross`] if `menge × preis` overflows.
    pub fn new(menge: Decimal, preis: Decimal) -> Result<Self, PostenError> {
        if !ist_positiv(menge) {
            return Err(PostenError::MengeNichtPositiv { menge });
        }
        let position = Self { menge, preis };
        position.betrag()?;
        Ok(position)
    }

    /// Total amount of the position.
    ///
    /// # Errors
    ///
    /// Returns [`PostenError::BetragZuGross`] if `menge × preis` overflows.
    pub fn betrag(&self) -> Result<Decimal, PostenError> {
        betrag_aus(self.menge, self.preis).ok_or(PostenError::BetragZuGross)
    }

    /// Applies optional replacements for quantity and price.
    ///
    /// # Errors
    ///
    /// Returns [`PostenError::MengeNichtPositiv`] if the merged quantity is not
    /// positive, and [`PostenError::BetragZuGross`] if its amount overflows.
    pub fn geaendert(
        &self,
        menge: Option<Decimal>,
        preis: Option<Decimal>,
    ) -> Result<Self, PostenError> {
        Self::new(menge.unwrap_or(self.menge), preis.unwrap_or(self.preis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn fuenf_e28() -> Decimal {
        Decimal::from_i128_with_scale(5 * 10_i128.pow(28), 0)
    }

    #[test]
    fn test_neu_defaults_bezahlt_to_zero() {
        let stand = Stand::neu(dec!(1000), None);
        assert_eq!(stand.bezahlt, Decimal::ZERO);
        assert_eq!(stand.offen, dec!(1000));
        assert_eq!(stand.status, PostenStatus::Offen);
    }

    #[rstest]
    #[case(dec!(100), dec!(100), PostenStatus::Bezahlt, dec!(0))]
    #[case(dec!(100), dec!(99), PostenStatus::Offen, dec!(1))]
    #[case(dec!(100), dec!(99.99), PostenStatus::Offen, dec!(0.01))]
    #[case(dec!(100), dec!(150), PostenStatus::Bezahlt, dec!(-50))]
    #[case(dec!(100), dec!(0), PostenStatus::Offen, dec!(100))]
    fn test_berechnen_boundaries(
        #[case] betrag: Decimal,
        #[case] bezahlt: Decimal,
        #[case] status: PostenStatus,
        #[case] expected_offen: Decimal,
    ) {
        let stand = Stand::berechnen(betrag, bezahlt);
        assert_eq!(stand.status, status);
        assert_eq!(stand.offen, expected_offen);
    }

    #[test]
    fn test_zahlung_settles_schuldner() {
        let stand = Stand::neu(dec!(1000), None).mit_zahlung(dec!(1000)).unwrap();
        assert_eq!(stand.bezahlt, dec!(1000));
        assert_eq!(stand.offen, Decimal::ZERO);
        assert!(stand.ist_bezahlt());
    }

    #[test]
    fn test_zahlung_overpayment_goes_negative() {
        let stand = Stand::neu(dec!(50), Some(dec!(40)))
            .mit_zahlung(dec!(25))
            .unwrap();
        assert_eq!(stand.bezahlt, dec!(65));
        assert_eq!(stand.offen, dec!(-15));
        assert_eq!(stand.status, PostenStatus::Bezahlt);
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(-10))]
    fn test_zahlung_rejects_non_positive(#[case] zahlung: Decimal) {
        let stand = Stand::neu(dec!(10), None);
        assert_eq!(
            stand.mit_zahlung(zahlung),
            Err(PostenError::ZahlungNichtPositiv { betrag: zahlung })
        );
    }

    #[test]
    fn test_geaendert_without_fields_is_identity() {
        let stand = Stand::neu(dec!(80), Some(dec!(30)));
        assert_eq!(stand.geaendert(None, None), stand);
    }

    #[test]
    fn test_geaendert_lowering_betrag_settles() {
        let stand = Stand::neu(dec!(80), Some(dec!(30))).geaendert(Some(dec!(30)), None);
        assert_eq!(stand.offen, Decimal::ZERO);
        assert!(stand.ist_bezahlt());
    }

    #[test]
    fn test_mat_position_betrag() {
        let position = MatPosition::new(dec!(3), dec!(12.50)).unwrap();
        assert_eq!(position.betrag(), Ok(dec!(37.50)));

        let changed = position.geaendert(None, Some(dec!(10))).unwrap();
        assert_eq!(changed.betrag(), Ok(dec!(30)));
    }

    #[rstest]
    #[case(Decimal::from(10_i64.pow(15)), Decimal::from(10_i64.pow(15)))]
    #[case(Decimal::MAX, dec!(1.5))]
    fn test_mat_position_rejects_overflowing_betrag(
        #[case] menge: Decimal,
        #[case] preis: Decimal,
    ) {
        assert_eq!(
            MatPosition::new(menge, preis),
            Err(PostenError::BetragZuGross)
        );
        let position = MatPosition::new(dec!(1), dec!(1)).unwrap();
        assert_eq!(
            position.geaendert(Some(menge), Some(preis)),
            Err(PostenError::BetragZuGross)
        );
    }

    #[rstest]
    #[case(Decimal::MAX, dec!(1))]
    #[case(fuenf_e28(), fuenf_e28())]
    fn test_zahlung_rejects_overflowing_bezahlt(
        #[case] bezahlt: Decimal,
        #[case] zahlung: Decimal,
    ) {
        let stand = Stand::neu(Decimal::MAX, Some(bezahlt));
        assert_eq!(stand.mit_zahlung(zahlung), Err(PostenError::BetragZuGross));
    }

    #[test]
    fn test_mat_position_rejects_zero_menge() {
        assert!(matches!(
            MatPosition::new(Decimal::ZERO, dec!(1)),
            Err(PostenError::MengeNichtPositiv { .. })
        ));
    }
}
