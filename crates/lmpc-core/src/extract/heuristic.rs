//! Stage-2 extraction: keyword-anchored free-text scanning.
//!
//! Runs only for fields the labeled stage left unresolved. Each field has
//! a value-shaped token pattern; price-like fields additionally anchor on
//! a keyword ("MRP") and search the window of text that follows it before
//! falling back to the whole text.

use lazy_static::lazy_static;
use regex::Regex;

use super::patterns::*;
use super::ExtractionStrategy;
use crate::models::record::DeclaredField;

lazy_static! {
    // Price with an explicit per-unit suffix, e.g. "₹40/kg".
    static ref PER_UNIT_PRICE_TOKEN: Regex = Regex::new(
        r"(?i)(?:₹|rs\.?|inr)\s*[\d,]+(?:\.\d{1,2})?\s*/\s*[a-z]+"
    ).unwrap();

    static ref MRP_KEYWORD: Regex = Regex::new(r"(?i)\bm\.?r\.?p\.?").unwrap();
}

/// Keyword-anchored windowed free-text scan.
pub struct KeywordWindowStrategy {
    window_chars: usize,
}

impl KeywordWindowStrategy {
    pub fn new(window_chars: usize) -> Self {
        Self { window_chars }
    }

    /// The window of text following the first match of `keyword`, clamped
    /// to a character boundary. The keyword regex matches the original
    /// string, so offsets stay valid for text whose lowercase form has a
    /// different byte length.
    fn window_after<'t>(&self, text: &'t str, keyword: &Regex) -> Option<&'t str> {
        let start = keyword.find(text)?.end();
        if start >= text.len() {
            return None;
        }
        let mut end = (start + self.window_chars).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }
        Some(&text[start..end])
    }
}

impl Default for KeywordWindowStrategy {
    fn default() -> Self {
        Self::new(40)
    }
}

impl ExtractionStrategy for KeywordWindowStrategy {
    fn name(&self) -> &'static str {
        "keyword_window"
    }

    fn extract(&self, field: DeclaredField, text: &str) -> Option<String> {
        match field {
            DeclaredField::Mrp => {
                // Text near "MRP" wins over any other price token.
                if let Some(window) = self.window_after(text, &MRP_KEYWORD) {
                    if let Some(m) = PRICE_TOKEN.find(window) {
                        return Some(m.as_str().to_string());
                    }
                }
                PRICE_TOKEN.find(text).map(|m| m.as_str().to_string())
            }
            DeclaredField::UnitSalePrice => PER_UNIT_PRICE_TOKEN
                .find(text)
                .map(|m| m.as_str().to_string()),
            DeclaredField::NetQuantity => {
                QUANTITY_TOKEN.find(text).map(|m| m.as_str().to_string())
            }
            DeclaredField::CountryOfOrigin => MADE_IN
                .captures(text)
                .map(|caps| caps[1].trim().to_string()),
            DeclaredField::BestBeforeDate => {
                DURATION_TOKEN.find(text).map(|m| m.as_str().to_string())
            }
            DeclaredField::DateOfManufacture => {
                DATE_TOKEN.find(text).map(|m| m.as_str().to_string())
            }
            // Names and addresses have no reliable free-text shape; leave
            // them to the labeled stage.
            DeclaredField::ManufacturerDetails | DeclaredField::GenericName => None,
        }
    }
}
