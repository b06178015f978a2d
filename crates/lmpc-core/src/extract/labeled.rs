//! Stage-1 extraction: label/spec-table style key-value matching.

use regex::Regex;

use super::patterns::*;
use super::ExtractionStrategy;
use crate::models::record::DeclaredField;

/// Matches "Label: value" and tabular key-value declarations against a
/// per-field set of label synonyms.
pub struct LabeledFieldStrategy;

impl LabeledFieldStrategy {
    pub fn new() -> Self {
        Self
    }

    fn pattern_for(field: DeclaredField) -> &'static Regex {
        match field {
            DeclaredField::ManufacturerDetails => &MANUFACTURER_LABELED,
            DeclaredField::CountryOfOrigin => &COUNTRY_LABELED,
            DeclaredField::GenericName => &GENERIC_NAME_LABELED,
            DeclaredField::NetQuantity => &NET_QUANTITY_LABELED,
            DeclaredField::Mrp => &MRP_LABELED,
            DeclaredField::BestBeforeDate => &BEST_BEFORE_LABELED,
            DeclaredField::DateOfManufacture => &MFG_DATE_LABELED,
            DeclaredField::UnitSalePrice => &UNIT_SALE_PRICE_LABELED,
        }
    }
}

impl Default for LabeledFieldStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtractionStrategy for LabeledFieldStrategy {
    fn name(&self) -> &'static str {
        "labeled"
    }

    fn extract(&self, field: DeclaredField, text: &str) -> Option<String> {
        let caps = Self::pattern_for(field).captures(text)?;
        let value = caps[1].trim().trim_end_matches([',', ';']).to_string();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    }
}
