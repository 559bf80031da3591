//! Money formatting for `rust_decimal::Decimal` aggregates.
//!
//! PnL totals are summed exactly as `Decimal` and rendered here with a currency
//! sign, thousands separators and fixed cents, or abbreviated with K/M/B/T
//! suffixes for compact cards.

use rust_decimal::prelude::*;

const SUFFIXES: [(u64, &str); 4] = [
    (1_000_000_000_000, "T"),
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// `1234.5` → `"$1,234.50"`, `-12` → `"-$12.00"`.
pub fn currency(value: &Decimal) -> String {
    let rounded = value.round_dp(2);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let abs = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = abs.split_once('.').unwrap_or((abs.as_str(), "00"));
    format!(
        "{}${}.{}",
        sign,
        super::num::display_formatted_string(int_part.to_string()),
        frac_part
    )
}

/// Like [`currency`], with an explicit `+` for gains.
pub fn signed_currency(value: &Decimal) -> String {
    let body = currency(value);
    if value.round_dp(2) > Decimal::ZERO {
        format!("+{}", body)
    } else {
        body
    }
}

/// Abbreviate a `Decimal` with K/M/B/T suffixes.
pub fn abbr_number(amount: &Decimal, digits: Option<usize>, show_sign: Option<bool>) -> String {
    let digits = digits.unwrap_or(2);
    let show_sign = show_sign.unwrap_or(true);
    let sign = if show_sign && amount < &Decimal::ZERO {
        "-"
    } else {
        ""
    };
    let abs_amount = amount.abs();

    for (threshold, suffix) in SUFFIXES {
        let threshold = Decimal::from(threshold);
        if abs_amount >= threshold {
            return format!(
                "{}{:.precision$}{}",
                sign,
                abs_amount / threshold,
                suffix,
                precision = digits
            );
        }
    }

    format!("{}{:.precision$}", sign, abs_amount, precision = digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(&dec("0")), "$0.00");
        assert_eq!(currency(&dec("1234.5")), "$1,234.50");
        assert_eq!(currency(&dec("1234567.891")), "$1,234,567.89");
        assert_eq!(currency(&dec("-12")), "-$12.00");
        assert_eq!(currency(&dec("-0.001")), "$0.00");
    }

    #[test]
    fn test_signed_currency() {
        assert_eq!(signed_currency(&dec("15.25")), "+$15.25");
        assert_eq!(signed_currency(&dec("-15.25")), "-$15.25");
        assert_eq!(signed_currency(&dec("0")), "$0.00");
        assert_eq!(signed_currency(&dec("0.004")), "$0.00");
    }

    #[test]
    fn test_abbr_number_below_thousand() {
        assert_eq!(abbr_number(&dec("0"), None, None), "0.00");
        assert_eq!(abbr_number(&dec("999"), None, None), "999.00");
    }

    #[test]
    fn test_abbr_number_thousands_and_millions() {
        assert_eq!(abbr_number(&dec("1000"), None, None), "1.00K");
        assert_eq!(abbr_number(&dec("1500"), None, None), "1.50K");
        assert_eq!(abbr_number(&dec("1500000"), None, None), "1.50M");
    }

    #[test]
    fn test_abbr_number_negative() {
        assert_eq!(abbr_number(&dec("-1500000"), None, None), "-1.50M");
        assert_eq!(abbr_number(&dec("-1500000"), None, Some(false)), "1.50M");
    }
}
