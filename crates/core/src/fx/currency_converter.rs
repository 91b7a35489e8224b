//! Currency conversion through the INR pivot, plus display formatting.

use crate::constants::PIVOT_CURRENCY;

use super::currency::{display_symbol, inr_rate};

/// Rate for a code, defaulting unknown codes to 1.0.
///
/// The default is deliberate: an unrecognized currency is treated as already
/// pivot-denominated instead of failing the caller. Conversion never errors.
fn rate(code: &str) -> f64 {
    inr_rate(code).unwrap_or(1.0)
}

/// Converts `amount` from one currency to another.
///
/// Same-currency conversions return the amount untouched (no float
/// round-trip). Cross rates are routed through INR. Full f64 precision is
/// kept; rounding happens only in [`format`].
pub fn convert(amount: f64, from: &str, to: &str) -> f64 {
    if from == to {
        return amount;
    }

    if to == PIVOT_CURRENCY {
        amount * rate(from)
    } else if from == PIVOT_CURRENCY {
        amount / rate(to)
    } else {
        (amount * rate(from)) / rate(to)
    }
}

/// Renders an amount with its currency symbol and two decimals.
///
/// INR uses Indian digit grouping (rightmost three digits, then pairs):
/// `1000000.5` formats as `₹10,00,000.50`. Every other currency is the plain
/// symbol-prefixed two-decimal form with no grouping. Unknown codes fall back
/// to the raw code string as prefix.
pub fn format(amount: f64, currency: &str) -> String {
    let symbol = display_symbol(currency).unwrap_or(currency);

    if currency == PIVOT_CURRENCY {
        let sign = if amount < 0.0 { "-" } else { "" };
        let fixed = format!("{:.2}", amount.abs());
        let (whole, decimal) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        return format!("{}{}{}.{}", symbol, sign, group_indian(whole), decimal);
    }

    format!("{}{:.2}", symbol, amount)
}

/// Indian grouping of an unsigned integer digit string.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CODES: &[&str] = &["USD", "EUR", "GBP", "CAD", "AUD", "HKD", "TWD", "INR"];

    #[test]
    fn same_currency_is_identity() {
        for &code in CODES {
            assert_eq!(convert(123.456, code, code), 123.456);
        }
    }

    #[test]
    fn pivot_round_trip_reconstructs_amount() {
        for &code in CODES {
            let through_pivot = convert(convert(42.42, code, "INR"), "INR", code);
            assert!(
                (through_pivot - 42.42).abs() < 1e-9,
                "round trip failed for {}",
                code
            );
        }
    }

    #[test]
    fn cross_rate_pivots_through_inr() {
        let direct = convert(100.0, "USD", "EUR");
        let manual = (100.0 * 83.11) / 89.26;
        assert!((direct - manual).abs() < 1e-9);
    }

    #[test]
    fn unknown_codes_default_to_rate_one() {
        assert_eq!(convert(5.0, "XYZ", "INR"), 5.0);
        assert_eq!(convert(5.0, "INR", "XYZ"), 5.0);
    }

    #[test]
    fn formats_inr_with_indian_grouping() {
        assert_eq!(format(1234567.5, "INR"), "₹12,34,567.50");
        assert_eq!(format(1000000.5, "INR"), "₹10,00,000.50");
        assert_eq!(format(100.0, "INR"), "₹100.00");
        assert_eq!(format(1000.0, "INR"), "₹1,000.00");
        assert_eq!(format(0.0, "INR"), "₹0.00");
    }

    #[test]
    fn formats_other_currencies_without_grouping() {
        assert_eq!(format(1234.5, "USD"), "$1234.50");
        assert_eq!(format(1234567.891, "EUR"), "€1234567.89");
        assert_eq!(format(2.0, "XYZ"), "XYZ2.00");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format(-1234.5, "USD"), "$-1234.50");
        assert_eq!(format(-123456.78, "INR"), "₹-1,23,456.78");
    }
}
