//! Monetary amount parsing for MRP and unit-sale-price declarations.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::record::TypedValue;

lazy_static! {
    // Leading currency symbols or words: "₹", "Rs.", "Rs", "INR",
    // optionally prefixed by an "MRP" label.
    static ref CURRENCY_PREFIX: Regex = Regex::new(
        r"(?i)^\s*(?:mrp\.?:?\s*)?(?:₹|rs\.?|inr)?\s*"
    ).unwrap();

    // Trailing per-unit suffix, e.g. the "/kg" of "₹40/kg".
    static ref PER_UNIT_SUFFIX: Regex = Regex::new(
        r"(?i)\s*(?:/|\bper\b)\s*[a-z]+\.?\s*$"
    ).unwrap();

    static ref PLAIN_AMOUNT: Regex = Regex::new(
        r"^\d+(?:\.\d{1,2})?$"
    ).unwrap();
}

/// Parse a monetary declaration into a typed value.
///
/// Strips leading currency markers and thousands separators, tolerates a
/// trailing per-unit suffix (unit sale prices read "₹40/kg"), and parses
/// the remainder as a positive decimal. Returns `None` on anything else;
/// the caller records that as `Malformed`.
pub fn parse_money(raw: &str, currency: &str) -> Option<TypedValue> {
    let without_suffix = PER_UNIT_SUFFIX.replace(raw, "");
    let without_prefix = CURRENCY_PREFIX.replace(&without_suffix, "");
    let cleaned = without_prefix.trim().replace(',', "");

    if !PLAIN_AMOUNT.is_match(&cleaned) {
        return None;
    }

    let amount = Decimal::from_str(&cleaned).ok()?;
    if amount <= Decimal::ZERO {
        return None;
    }

    Some(TypedValue::Money {
        amount,
        currency: currency.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn money(s: &str) -> TypedValue {
        TypedValue::Money {
            amount: Decimal::from_str(s).unwrap(),
            currency: "INR".to_string(),
        }
    }

    #[test]
    fn test_parse_money_symbol_variants() {
        assert_eq!(parse_money("₹40.00", "INR"), Some(money("40.00")));
        assert_eq!(parse_money("Rs. 40", "INR"), Some(money("40")));
        assert_eq!(parse_money("Rs 40", "INR"), Some(money("40")));
        assert_eq!(parse_money("INR 1,250.50", "INR"), Some(money("1250.50")));
        assert_eq!(parse_money("40", "INR"), Some(money("40")));
    }

    #[test]
    fn test_parse_money_mrp_label() {
        assert_eq!(parse_money("MRP: ₹99.00", "INR"), Some(money("99.00")));
    }

    #[test]
    fn test_parse_money_per_unit_suffix() {
        assert_eq!(parse_money("₹40/kg", "INR"), Some(money("40")));
        assert_eq!(parse_money("Rs. 12 per piece", "INR"), Some(money("12")));
    }

    #[test]
    fn test_parse_money_rejects_nonpositive_and_garbage() {
        assert_eq!(parse_money("0", "INR"), None);
        assert_eq!(parse_money("₹0.00", "INR"), None);
        assert_eq!(parse_money("forty rupees", "INR"), None);
        assert_eq!(parse_money("-40", "INR"), None);
        assert_eq!(parse_money("", "INR"), None);
    }
}
