//! Conversions between human decimal strings and smallest-unit integers.

use alloy_primitives::{
    utils::{format_units, parse_units, ParseUnits},
    U256,
};
use config::DEFAULT_SYMBOL;

/// Fraction digits kept when showing amounts.
const DISPLAY_FRACTION_DIGITS: u8 = 4;

/// Parse a human amount like `"12.5"` into smallest units.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, String> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err("Amount is required".to_string());
    }

    match parse_units(amount, decimals) {
        Ok(ParseUnits::U256(value)) => Ok(value),
        Ok(ParseUnits::I256(_)) => Err(format!("Amount must not be negative: {amount}")),
        Err(e) => Err(format!("Invalid amount {amount:?}: {e}")),
    }
}

/// Format smallest units as a decimal string, e.g. `25.0` or `0.125`.
///
/// Trailing fractional zeros are dropped but one fraction digit is kept.
pub fn format_amount(value: U256, decimals: u8) -> Result<String, String> {
    let formatted = format_units(value, decimals).map_err(|e| e.to_string())?;
    Ok(trim_fraction(formatted))
}

/// Amount for display: rounded to four fraction digits, grouped thousands,
/// followed by the symbol. A blank symbol shows as [`DEFAULT_SYMBOL`].
pub fn format_display_amount(value: U256, decimals: u8, symbol: &str) -> String {
    let (rounded, digits) = if decimals > DISPLAY_FRACTION_DIGITS {
        let scale = U256::from(10u64).pow(U256::from(decimals - DISPLAY_FRACTION_DIGITS));
        ((value + scale / U256::from(2u64)) / scale, DISPLAY_FRACTION_DIGITS)
    } else {
        (value, decimals)
    };

    let text = format_amount(rounded, digits).unwrap_or_else(|_| value.to_string());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = group_thousands(int_part);
    if !frac_part.is_empty() && frac_part != "0" {
        out.push('.');
        out.push_str(frac_part);
    }
    out.push(' ');
    out.push_str(display_symbol(symbol));
    out
}

/// `symbol`, or [`DEFAULT_SYMBOL`] when the token reported none.
pub fn display_symbol(symbol: &str) -> &str {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        DEFAULT_SYMBOL
    } else {
        symbol
    }
}

fn trim_fraction(formatted: String) -> String {
    match formatted.split_once('.') {
        Some((int_part, frac)) => {
            let frac = frac.trim_end_matches('0');
            let frac = if frac.is_empty() { "0" } else { frac };
            format!("{int_part}.{frac}")
        }
        None => formatted,
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        let value = parse_amount("25", 18).unwrap();
        assert_eq!(value, U256::from(25u64) * U256::from(10u64).pow(U256::from(18u64)));

        let value = parse_amount("0.5", 6).unwrap();
        assert_eq!(value, U256::from(500_000u64));
    }

    #[test]
    fn test_parse_amount_rejects_bad_input() {
        assert!(parse_amount("", 18).is_err());
        assert!(parse_amount("   ", 18).is_err());
        assert!(parse_amount("abc", 18).is_err());
        assert!(parse_amount("-1", 18).is_err());
    }

    #[test]
    fn test_round_trip_up_to_decimals() {
        for (input, expected) in [
            ("25", "25.0"),
            ("0.125", "0.125"),
            ("1000000", "1000000.0"),
            ("3.140000", "3.14"),
            ("0.000000000000000001", "0.000000000000000001"),
        ] {
            let value = parse_amount(input, 18).unwrap();
            assert_eq!(format_amount(value, 18).unwrap(), expected, "input {input}");
            assert_eq!(parse_amount(expected, 18).unwrap(), value);
        }
    }

    #[test]
    fn test_format_display_amount() {
        let value = parse_amount("1234567.123456", 18).unwrap();
        assert_eq!(format_display_amount(value, 18, "CET"), "1,234,567.1235 CET");

        let value = parse_amount("25", 18).unwrap();
        assert_eq!(format_display_amount(value, 18, "CET"), "25 CET");

        let value = parse_amount("0.5", 2).unwrap();
        assert_eq!(format_display_amount(value, 2, "CET"), "0.5 CET");
    }

    #[test]
    fn test_blank_symbol_falls_back() {
        let value = parse_amount("7", 18).unwrap();
        assert_eq!(format_display_amount(value, 18, ""), "7 CET");
        assert_eq!(display_symbol("  "), "CET");
        assert_eq!(display_symbol("WATT"), "WATT");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1000000"), "1,000,000");
    }
}
