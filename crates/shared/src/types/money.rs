//! Money arithmetic and presentation.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; JSON carries them as numbers.

use rust_decimal::Decimal;

/// Remaining open amount: `betrag - bezahlt`.
///
/// Over-payment yields a negative result; nothing is clamped.
#[must_use]
pub fn offen(betrag: Decimal, bezahlt: Decimal) -> Decimal {
    betrag - bezahlt
}

/// Total of a quantity at a unit price, or `None` if it does not fit a `Decimal`.
#[must_use]
pub fn betrag_aus(menge: Decimal, preis: Decimal) -> Option<Decimal> {
    menge.checked_mul(preis)
}

/// Returns true if the amount is zero or positive.
#[must_use]
pub fn ist_nicht_negativ(amount: Decimal) -> bool {
    !amount.is_sign_negative() || amount.is_zero()
}

/// Returns true if the amount is strictly positive.
#[must_use]
pub fn ist_positiv(amount: Decimal) -> bool {
    amount > Decimal::ZERO
}

/// Formats an amount as German Euro text, e.g. `1.234,56 €`.
///
/// Digits beyond the second decimal place are cut off, never rounded.
#[must_use]
pub fn format_eur(amount: Decimal) -> String {
    let truncated = amount.trunc_with_scale(2);
    let sign = if truncated.is_sign_negative() && !truncated.is_zero() {
        "-"
    } else {
        ""
    };

    let plain = format!("{:.2}", truncated.abs());
    let (euros, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!("{sign}{},{cents} €", group_thousands(euros))
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
