//! Dutch-locale number and currency rendering.
//!
//! Report and result views show whole-euro amounts with Dutch grouping
//! (`€ 1.250.000`). Amounts are rounded to whole units before grouping.

use rust_decimal::{Decimal, RoundingStrategy};

/// Renders an amount as Dutch-locale EUR currency, zero decimal places.
///
/// `1250000 -> "€ 1.250.000"`; negative amounts render as `"€ -1.250.000"`.
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    format!("\u{20ac} {}", format_number(amount))
}

/// Renders a number with Dutch thousand separators, no currency symbol.
#[must_use]
pub fn format_number(n: Decimal) -> String {
    let rounded = n.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().to_string();
    let grouped = group_thousands(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Inserts a `.` between every group of three digits, right to left.
fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        let remaining = bytes.len() - i;
        if i > 0 && remaining % 3 == 0 {
            out.push('.');
        }
        out.push(char::from(*b));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "0")]
    #[case(dec!(7), "7")]
    #[case(dec!(999), "999")]
    #[case(dec!(1000), "1.000")]
    #[case(dec!(920000), "920.000")]
    #[case(dec!(1250000), "1.250.000")]
    #[case(dec!(50000000), "50.000.000")]
    #[case(dec!(-60000), "-60.000")]
    fn test_format_number(#[case] input: Decimal, #[case] expected: &str) {
        assert_eq!(format_number(input), expected);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(1250000)), "€ 1.250.000");
        assert_eq!(format_currency(dec!(920000)), "€ 920.000");
        assert_eq!(format_currency(dec!(0)), "€ 0");
        assert_eq!(format_currency(dec!(-1250000)), "€ -1.250.000");
    }

    #[test]
    fn test_format_currency_rounds_to_whole_units() {
        assert_eq!(format_currency(dec!(1249.50)), "€ 1.250");
        assert_eq!(format_currency(dec!(1249.49)), "€ 1.249");
    }

    #[test]
    fn test_format_currency_round_trips() {
        // Stripping the symbol and separators recovers the original amount.
        let formatted = format_currency(dec!(920000));
        let stripped: String = formatted
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '-')
            .collect();
        assert_eq!(stripped.parse::<i64>().unwrap(), 920_000);
    }
}
