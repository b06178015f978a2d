//! Platform attribute-label registry.
//!
//! Scraped listings carry spec-table attributes under platform-specific
//! labels. The registry maps a platform to a pure alias table resolving
//! those labels onto declared fields, with a generic fallback shared by
//! all platforms. A registry lookup never mutates anything, which keeps
//! per-platform behavior independently testable.

use crate::models::record::{DeclaredField, Platform};

type AliasTable = &'static [(&'static str, DeclaredField)];

/// Aliases every platform understands.
const GENERIC_ALIASES: AliasTable = &[
    ("manufacturer", DeclaredField::ManufacturerDetails),
    ("manufacturer details", DeclaredField::ManufacturerDetails),
    ("manufactured by", DeclaredField::ManufacturerDetails),
    ("marketed by", DeclaredField::ManufacturerDetails),
    ("country of origin", DeclaredField::CountryOfOrigin),
    ("generic name", DeclaredField::GenericName),
    ("common name", DeclaredField::GenericName),
    ("net quantity", DeclaredField::NetQuantity),
    ("net qty", DeclaredField::NetQuantity),
    ("net weight", DeclaredField::NetQuantity),
    ("mrp", DeclaredField::Mrp),
    ("maximum retail price", DeclaredField::Mrp),
    ("best before", DeclaredField::BestBeforeDate),
    ("use by", DeclaredField::BestBeforeDate),
    ("expiry date", DeclaredField::BestBeforeDate),
    ("date of manufacture", DeclaredField::DateOfManufacture),
    ("mfg date", DeclaredField::DateOfManufacture),
    ("unit sale price", DeclaredField::UnitSalePrice),
    ("unit price", DeclaredField::UnitSalePrice),
];

const AMAZON_ALIASES: AliasTable = &[
    ("item weight", DeclaredField::NetQuantity),
    ("item name", DeclaredField::GenericName),
    ("manufacturer contact", DeclaredField::ManufacturerDetails),
];

const FLIPKART_ALIASES: AliasTable = &[
    ("net quantity", DeclaredField::NetQuantity),
    ("maximum retail price", DeclaredField::Mrp),
    ("shelf life", DeclaredField::BestBeforeDate),
    ("manufacturing, packaging and import info", DeclaredField::ManufacturerDetails),
];

const JIOMART_ALIASES: AliasTable = &[
    ("weight", DeclaredField::NetQuantity),
    ("manufacturer name & address", DeclaredField::ManufacturerDetails),
    ("country of origin or manufacture", DeclaredField::CountryOfOrigin),
];

/// Registry of platform attribute-alias tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformRegistry;

impl PlatformRegistry {
    pub fn new() -> Self {
        Self
    }

    fn platform_table(platform: Platform) -> AliasTable {
        match platform {
            Platform::Amazon => AMAZON_ALIASES,
            Platform::Flipkart => FLIPKART_ALIASES,
            Platform::Jiomart => JIOMART_ALIASES,
            Platform::Generic => &[],
        }
    }

    /// Resolve a raw attribute label to a declared field.
    ///
    /// Platform-specific aliases are consulted first, then the generic
    /// table. Labels are compared case-insensitively with collapsed
    /// whitespace and trailing colons stripped.
    pub fn resolve(&self, platform: Platform, label: &str) -> Option<DeclaredField> {
        let normalized = label
            .trim()
            .trim_end_matches(':')
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Self::platform_table(platform)
            .iter()
            .chain(GENERIC_ALIASES.iter())
            .find(|(alias, _)| *alias == normalized)
            .map(|(_, field)| *field)
    }
}
