//! Free-text field cleanup and sufficiency checks.

use crate::models::record::{DeclaredField, TypedValue};

/// Minimum information length per free-text field. Values below it carry
/// no legally sufficient declaration (a bare "Mumbai" is not a
/// manufacturer address).
pub fn min_length(field: DeclaredField) -> usize {
    match field {
        DeclaredField::ManufacturerDetails => 10,
        DeclaredField::CountryOfOrigin => 3,
        DeclaredField::GenericName => 2,
        _ => 1,
    }
}

/// Collapse internal whitespace and trim.
pub fn clean_free_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a free-text declaration.
///
/// Under-length values stay `Present` with `sufficient = false`; the rule
/// engine treats them as equivalent in severity to an absent field but
/// with a distinct message.
pub fn parse_free_text(field: DeclaredField, raw: &str) -> TypedValue {
    let value = clean_free_text(raw);
    let sufficient = value.chars().count() >= min_length(field);
    TypedValue::Text { value, sufficient }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(
            clean_free_text("  ABC Foods\t Pvt  Ltd \n Mumbai "),
            "ABC Foods Pvt Ltd Mumbai"
        );
    }

    #[test]
    fn test_manufacturer_length_check() {
        let ok = parse_free_text(
            DeclaredField::ManufacturerDetails,
            "ABC Foods Pvt Ltd, Mumbai",
        );
        assert_eq!(
            ok,
            TypedValue::Text {
                value: "ABC Foods Pvt Ltd, Mumbai".to_string(),
                sufficient: true,
            }
        );

        let short = parse_free_text(DeclaredField::ManufacturerDetails, "ABC Ltd");
        assert!(matches!(short, TypedValue::Text { sufficient: false, .. }));
    }

    #[test]
    fn test_country_and_generic_name_thresholds() {
        let country = parse_free_text(DeclaredField::CountryOfOrigin, "In");
        assert!(matches!(country, TypedValue::Text { sufficient: false, .. }));

        let country = parse_free_text(DeclaredField::CountryOfOrigin, "India");
        assert!(matches!(country, TypedValue::Text { sufficient: true, .. }));

        let name = parse_free_text(DeclaredField::GenericName, "X");
        assert!(matches!(name, TypedValue::Text { sufficient: false, .. }));
    }
}
