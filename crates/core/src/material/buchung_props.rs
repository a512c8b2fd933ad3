//! Property-based tests for material bookings.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::buchung::{Buchung, Lagerstand};

fn positive_quantity() -> impl Strategy<Value = Decimal> {
    (1i64..10_000i64).prop_map(|v| Decimal::new(v, 1))
}

fn price() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #[test]
    fn prop_kombi_split_sums_to_betrag(
        menge in positive_quantity(),
        preis in price(),
        anteil in 0u32..=100u32,
    ) {
        let betrag = menge * preis;
        let bar = (betrag * Decimal::from(anteil) / Decimal::ONE_HUNDRED).round_dp(2).min(betrag);
        let buchung = Buchung::kombi(menge, preis, bar).unwrap();
        prop_assert_eq!(buchung.bar + buchung.rechnung, buchung.betrag);
        prop_assert!(buchung.rechnung >= Decimal::ZERO);
    }

    #[test]
    fn prop_booking_conserves_stock_and_income(
        bestand in positive_quantity(),
        menge in positive_quantity(),
        preis in price(),
    ) {
        let lager = Lagerstand {
            bestand,
            einnahmen_bar: Decimal::ZERO,
            einnahmen_rechnung: Decimal::ZERO,
        };
        let buchung = Buchung::bar(menge, preis).unwrap();
        match lager.buchen(&buchung) {
            Ok(after) => {
                prop_assert!(menge <= bestand);
                prop_assert_eq!(after.bestand + menge, bestand);
                prop_assert_eq!(after.einnahmen_bar, buchung.betrag);
            }
            Err(_) => prop_assert!(menge > bestand),
        }
    }
}
