//! Field normalization: raw strings to canonical typed values.
//!
//! Per declared field a type-specific parser runs; any string that fails
//! to parse becomes `Malformed(original)` rather than being dropped, so
//! the rule engine can distinguish "present but wrong" from "missing".

pub mod dates;
pub mod money;
pub mod quantity;
pub mod text;

use std::collections::BTreeMap;

use tracing::debug;

use crate::models::record::{
    DeclaredField, FieldState, NormalizedProductRecord, RawProductRecord, TypedValue,
};

pub use dates::parse_date_or_duration;
pub use money::parse_money;
pub use quantity::{parse_quantity, unit_from_token};
pub use text::{clean_free_text, parse_free_text};

/// Normalizes raw product records into canonical typed records.
pub struct FieldNormalizer {
    default_currency: String,
}

impl FieldNormalizer {
    pub fn new(default_currency: impl Into<String>) -> Self {
        Self {
            default_currency: default_currency.into(),
        }
    }

    /// Normalize every declared field of a record.
    ///
    /// Every entry of [`DeclaredField::ALL`] maps to exactly one
    /// [`FieldState`]; absent raw values map to `Absent`.
    pub fn normalize(&self, raw: &RawProductRecord) -> NormalizedProductRecord {
        let mut fields = BTreeMap::new();

        for field in DeclaredField::ALL {
            let state = match raw.get(field) {
                None => FieldState::Absent,
                Some(value) => self.normalize_field(field, value),
            };
            fields.insert(field, state);
        }

        let malformed = fields.values().filter(|s| s.is_malformed()).count();
        if malformed > 0 {
            debug!(product_id = ?raw.product_id, malformed, "record has malformed fields");
        }

        NormalizedProductRecord {
            product_id: raw.product_id.clone(),
            category: raw.category,
            is_imported: raw.is_imported,
            fields,
        }
    }

    fn normalize_field(&self, field: DeclaredField, value: &str) -> FieldState {
        let parsed: Option<TypedValue> = match field {
            DeclaredField::ManufacturerDetails
            | DeclaredField::CountryOfOrigin
            | DeclaredField::GenericName => Some(parse_free_text(field, value)),
            DeclaredField::NetQuantity => parse_quantity(value),
            DeclaredField::Mrp | DeclaredField::UnitSalePrice => {
                parse_money(value, &self.default_currency)
            }
            DeclaredField::BestBeforeDate | DeclaredField::DateOfManufacture => {
                parse_date_or_duration(value)
            }
        };

        match parsed {
            Some(typed) => FieldState::Present { value: typed },
            None => FieldState::Malformed {
                original: value.to_string(),
            },
        }
    }
}

impl Default for FieldNormalizer {
    fn default() -> Self {
        Self::new("INR")
    }
}
