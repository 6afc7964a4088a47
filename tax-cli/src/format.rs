//! Display formatting for monetary values and rates.
//!
//! Half-up rounding to two decimal places follows financial convention. This
//! is display formatting only; the engine's results stay unrounded.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a dollar amount: `"$1,234.56"`, `"-$500.00"`.
pub fn currency(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let cents = (rounded.abs() * Decimal::ONE_HUNDRED)
        .to_i128()
        .unwrap_or(0);
    let sign = if rounded.is_sign_negative() && cents != 0 {
        "-"
    } else {
        ""
    };
    format!(
        "{sign}${}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Formats a percentage with two decimal places: `"22.27%"`.
pub fn percent(value: Decimal) -> String {
    let hundredths = (value * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i128()
        .unwrap_or(0);
    format!("{}.{:02}%", hundredths / 100, (hundredths % 100).abs())
}

fn group_thousands(value: i128) -> String {
    let digits = value.to_string();
    let mut groups: Vec<&str> = digits
        .as_bytes()
        .rchunks(3)
        .map(|chunk| std::str::from_utf8(chunk).expect("digits are ascii"))
        .collect();
    groups.reverse();
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(currency(dec!(1234567.89)), "$1,234,567.89");
        assert_eq!(currency(dec!(168600)), "$168,600.00");
        assert_eq!(currency(dec!(999)), "$999.00");
    }

    #[test]
    fn currency_rounds_half_up() {
        assert_eq!(currency(dec!(3292.2)), "$3,292.20");
        assert_eq!(currency(dec!(0.005)), "$0.01");
        assert_eq!(currency(dec!(0.004)), "$0.00");
    }

    #[test]
    fn currency_handles_negative_amounts() {
        assert_eq!(currency(dec!(-6133.2)), "-$6,133.20");
        // Rounds to zero: no stray sign.
        assert_eq!(currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn currency_handles_zero() {
        assert_eq!(currency(dec!(0)), "$0.00");
    }

    #[test]
    fn percent_keeps_two_decimal_places() {
        assert_eq!(percent(dec!(22.2664)), "22.27%");
        assert_eq!(percent(dec!(12)), "12.00%");
        assert_eq!(percent(dec!(0)), "0.00%");
    }
}
