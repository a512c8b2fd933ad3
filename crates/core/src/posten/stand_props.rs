//! Property-based tests for posten state derivation.
//!
//! - `offen == betrag - bezahlt` after create, update and payment
//! - `status` depends only on `(betrag, bezahlt)`
//! - payments are additive

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::stand::Stand;
use super::types::PostenStatus;

/// Strategy to generate positive amounts (0.01 to 100,000.00).
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate non-negative amounts (0.00 to 100,000.00).
fn non_negative_amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

fn assert_consistent(stand: &Stand) {
    assert_eq!(stand.offen, stand.betrag - stand.bezahlt);
    assert_eq!(
        stand.status,
        if stand.bezahlt >= stand.betrag {
            PostenStatus::Bezahlt
        } else {
            PostenStatus::Offen
        }
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_create_derives_consistently(
        betrag in positive_amount(),
        bezahlt in proptest::option::of(non_negative_amount()),
    ) {
        let stand = Stand::neu(betrag, bezahlt);
        prop_assert_eq!(stand.bezahlt, bezahlt.unwrap_or(Decimal::ZERO));
        assert_consistent(&stand);
    }

    #[test]
    fn prop_payment_is_additive(
        betrag in positive_amount(),
        bezahlt in non_negative_amount(),
        zahlungen in proptest::collection::vec(positive_amount(), 1..8),
    ) {
        let mut stand = Stand::berechnen(betrag, bezahlt);
        for zahlung in &zahlungen {
            let before = stand.bezahlt;
            stand = stand.mit_zahlung(*zahlung).unwrap();
            prop_assert_eq!(stand.bezahlt, before + *zahlung);
            assert_consistent(&stand);
        }
        let total: Decimal = zahlungen.iter().copied().sum();
        prop_assert_eq!(stand.bezahlt, bezahlt + total);
        prop_assert_eq!(stand.betrag, betrag);
    }

    #[test]
    fn prop_payment_never_reopens(
        betrag in positive_amount(),
        zahlung in positive_amount(),
    ) {
        let paid = Stand::berechnen(betrag, betrag);
        let after = paid.mit_zahlung(zahlung).unwrap();
        prop_assert_eq!(after.status, PostenStatus::Bezahlt);
        prop_assert!(after.offen < Decimal::ZERO);
    }

    #[test]
    fn prop_update_rederives(
        betrag in positive_amount(),
        bezahlt in non_negative_amount(),
        neuer_betrag in proptest::option::of(positive_amount()),
        neu_bezahlt in proptest::option::of(non_negative_amount()),
    ) {
        let stand = Stand::berechnen(betrag, bezahlt).geaendert(neuer_betrag, neu_bezahlt);
        prop_assert_eq!(stand.betrag, neuer_betrag.unwrap_or(betrag));
        prop_assert_eq!(stand.bezahlt, neu_bezahlt.unwrap_or(bezahlt));
        assert_consistent(&stand);
    }

    #[test]
    fn prop_empty_update_is_identity(
        betrag in positive_amount(),
        bezahlt in non_negative_amount(),
    ) {
        let stand = Stand::berechnen(betrag, bezahlt);
        prop_assert_eq!(stand.geaendert(None, None), stand);
    }
}
