//! Net-quantity parsing and unit canonicalization.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::record::{CanonicalUnit, TypedValue};

lazy_static! {
    // Numeric literal (optional thousands separators, optional decimal
    // part) immediately followed by a unit token, e.g. "1kg", "500 ml",
    // "1,000 g", "2.5 l".
    static ref QUANTITY: Regex = Regex::new(
        r"(?i)^\s*(\d{1,3}(?:,\d{3})+|\d+)(?:\.(\d+))?\s*([a-z]+)\.?\s*$"
    ).unwrap();
}

/// Map a raw unit spelling to its canonical unit.
pub fn unit_from_token(token: &str) -> Option<CanonicalUnit> {
    match token.to_lowercase().as_str() {
        "g" | "gm" | "gms" | "gram" | "grams" => Some(CanonicalUnit::Gram),
        "kg" | "kgs" | "kilogram" | "kilograms" => Some(CanonicalUnit::Kilogram),
        "ml" | "millilitre" | "milliliter" | "millilitres" | "milliliters" => {
            Some(CanonicalUnit::Millilitre)
        }
        "l" | "ltr" | "ltrs" | "litre" | "liter" | "litres" | "liters" => {
            Some(CanonicalUnit::Litre)
        }
        "cm" | "centimetre" | "centimeter" | "centimetres" | "centimeters" => {
            Some(CanonicalUnit::Centimetre)
        }
        "m" | "mtr" | "metre" | "meter" | "metres" | "meters" => Some(CanonicalUnit::Metre),
        "pc" | "pcs" | "piece" | "pieces" | "unit" | "units" | "n" => Some(CanonicalUnit::Piece),
        _ => None,
    }
}

/// Parse a net-quantity declaration into a typed value.
///
/// Returns `None` when the string does not match number-plus-unit, the
/// unit is not a Legal Metrology unit, or the amount is not positive;
/// the caller records those as `Malformed`.
pub fn parse_quantity(raw: &str) -> Option<TypedValue> {
    let caps = QUANTITY.captures(raw)?;

    let integer_part = caps[1].replace(',', "");
    let amount_str = match caps.get(2) {
        Some(frac) => format!("{}.{}", integer_part, frac.as_str()),
        None => integer_part,
    };

    let amount = Decimal::from_str(&amount_str).ok()?;
    if amount <= Decimal::ZERO {
        return None;
    }

    let unit = unit_from_token(&caps[3])?;
    Some(TypedValue::Quantity { amount, unit })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_quantity_no_space() {
        assert_eq!(
            parse_quantity("1kg"),
            Some(TypedValue::Quantity {
                amount: Decimal::from(1),
                unit: CanonicalUnit::Kilogram,
            })
        );
    }

    #[test]
    fn test_parse_quantity_spaced_and_decimal() {
        assert_eq!(
            parse_quantity("2.5 l"),
            Some(TypedValue::Quantity {
                amount: Decimal::from_str("2.5").unwrap(),
                unit: CanonicalUnit::Litre,
            })
        );
        assert_eq!(
            parse_quantity("500 ml"),
            Some(TypedValue::Quantity {
                amount: Decimal::from(500),
                unit: CanonicalUnit::Millilitre,
            })
        );
    }

    #[test]
    fn test_parse_quantity_thousands_separator() {
        assert_eq!(
            parse_quantity("1,000 g"),
            Some(TypedValue::Quantity {
                amount: Decimal::from(1000),
                unit: CanonicalUnit::Gram,
            })
        );
    }

    #[test]
    fn test_unit_synonyms_collapse() {
        assert_eq!(unit_from_token("gms"), Some(CanonicalUnit::Gram));
        assert_eq!(unit_from_token("Ltr"), Some(CanonicalUnit::Litre));
        assert_eq!(unit_from_token("L"), Some(CanonicalUnit::Litre));
        assert_eq!(unit_from_token("pcs"), Some(CanonicalUnit::Piece));
        assert_eq!(unit_from_token("oz"), None);
    }

    #[test]
    fn test_parse_quantity_rejects_words_and_zero() {
        assert_eq!(parse_quantity("one kg"), None);
        assert_eq!(parse_quantity("0 g"), None);
        assert_eq!(parse_quantity("500"), None);
        assert_eq!(parse_quantity("500 oz"), None);
    }
}
