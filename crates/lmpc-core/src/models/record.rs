//! Product record data models.
//!
//! A [`RawProductRecord`] carries declared-field values exactly as they
//! arrived (scraped attributes or text recovered from a label image). The
//! normalizer turns it into a [`NormalizedProductRecord`] in which every
//! declared field maps to exactly one [`FieldState`] - never omitted.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The eight mandatory Legal Metrology declaration fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredField {
    /// Name and address of the manufacturer or importer.
    ManufacturerDetails,
    /// Country of origin (mandatory for imported goods).
    CountryOfOrigin,
    /// Common, generic name of the commodity.
    GenericName,
    /// Net quantity in a standard unit.
    NetQuantity,
    /// Maximum Retail Price including all taxes.
    Mrp,
    /// Best before / use by date.
    BestBeforeDate,
    /// Date of manufacture or import.
    DateOfManufacture,
    /// Unit sale price.
    UnitSalePrice,
}

impl DeclaredField {
    /// All declared fields in the fixed declaration order used for rule
    /// evaluation and report output.
    pub const ALL: [DeclaredField; 8] = [
        DeclaredField::ManufacturerDetails,
        DeclaredField::CountryOfOrigin,
        DeclaredField::GenericName,
        DeclaredField::NetQuantity,
        DeclaredField::Mrp,
        DeclaredField::BestBeforeDate,
        DeclaredField::DateOfManufacture,
        DeclaredField::UnitSalePrice,
    ];

    /// The snake_case key used in requests and responses.
    pub fn key(&self) -> &'static str {
        match self {
            DeclaredField::ManufacturerDetails => "manufacturer_details",
            DeclaredField::CountryOfOrigin => "country_of_origin",
            DeclaredField::GenericName => "generic_name",
            DeclaredField::NetQuantity => "net_quantity",
            DeclaredField::Mrp => "mrp",
            DeclaredField::BestBeforeDate => "best_before_date",
            DeclaredField::DateOfManufacture => "date_of_manufacture",
            DeclaredField::UnitSalePrice => "unit_sale_price",
        }
    }

    /// Human-readable field label for violation messages.
    pub fn label(&self) -> &'static str {
        match self {
            DeclaredField::ManufacturerDetails => "Name and address of manufacturer/importer",
            DeclaredField::CountryOfOrigin => "Country of origin",
            DeclaredField::GenericName => "Common/generic name of commodity",
            DeclaredField::NetQuantity => "Net quantity in standard unit",
            DeclaredField::Mrp => "MRP including all taxes",
            DeclaredField::BestBeforeDate => "Best before/use by date",
            DeclaredField::DateOfManufacture => "Date of manufacture",
            DeclaredField::UnitSalePrice => "Unit sale price",
        }
    }
}

impl fmt::Display for DeclaredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Product category, driving conditional rule applicability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(alias = "Food")]
    Food,
    #[serde(alias = "Beverage", alias = "Beverages", alias = "beverages")]
    Beverage,
    #[serde(alias = "Grocery")]
    Grocery,
    #[serde(alias = "Snack", alias = "Snacks", alias = "snacks")]
    Snack,
    #[serde(alias = "Cosmetics", alias = "cosmetic", alias = "Cosmetic")]
    Cosmetics,
    #[serde(alias = "PersonalCare", alias = "personal care")]
    PersonalCare,
    #[serde(alias = "Electronics")]
    Electronics,
    #[serde(alias = "Other")]
    #[default]
    Other,
}

impl Category {
    /// Time-sensitive categories that must declare a best-before date.
    pub fn is_perishable(&self) -> bool {
        matches!(
            self,
            Category::Food
                | Category::Beverage
                | Category::Snack
                | Category::Cosmetics
                | Category::PersonalCare
        )
    }

    /// Categories that must declare a unit sale price.
    pub fn requires_unit_sale_price(&self) -> bool {
        matches!(self, Category::Food | Category::Beverage | Category::Grocery)
    }
}

/// Where a record's raw values came from.
///
/// Controls whether text recognition is invoked: scraped listings are
/// assumed structured, image-sourced records must be recognized first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    #[serde(alias = "Scraped")]
    #[default]
    Scraped,
    #[serde(alias = "Uploaded")]
    Uploaded,
    #[serde(alias = "Batch")]
    Batch,
}

impl Source {
    /// Whether this source requires the text-recognition collaborator.
    pub fn needs_recognition(&self) -> bool {
        matches!(self, Source::Uploaded | Source::Batch)
    }
}

/// E-commerce platform a scraped record came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    #[serde(alias = "Amazon")]
    Amazon,
    #[serde(alias = "Flipkart")]
    Flipkart,
    #[serde(alias = "JioMart", alias = "Jiomart")]
    Jiomart,
    #[serde(alias = "Generic")]
    #[default]
    Generic,
}

/// A product record with raw, unparsed field values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProductRecord {
    /// Caller-supplied product identifier, preserved through batch results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Source platform for scraped records.
    #[serde(default)]
    pub platform: Platform,

    /// Product category.
    #[serde(default)]
    pub category: Category,

    /// Whether the product is imported; `None` when unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_imported: Option<bool>,

    /// Where the raw values came from.
    #[serde(default)]
    pub source: Source,

    /// Label image reference for image-sourced records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Declared-field values; an absent key means the field is absent.
    #[serde(default)]
    pub fields: BTreeMap<DeclaredField, String>,

    /// Platform-specific attribute table scraped alongside the listing
    /// ("Net Qty" → "1 kg"). Resolved onto declared fields through the
    /// platform alias registry; never overwrites `fields`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl RawProductRecord {
    /// Raw value of a declared field, if present and non-blank.
    pub fn get(&self, field: DeclaredField) -> Option<&str> {
        self.fields
            .get(&field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Set a declared-field value, ignoring blank strings.
    pub fn set(&mut self, field: DeclaredField, value: impl Into<String>) {
        let value = value.into();
        if !value.trim().is_empty() {
            self.fields.insert(field, value);
        }
    }
}

/// Canonical measurement units after synonym collapsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalUnit {
    Gram,
    Kilogram,
    Millilitre,
    Litre,
    Centimetre,
    Metre,
    Piece,
}

impl CanonicalUnit {
    /// Standard symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            CanonicalUnit::Gram => "g",
            CanonicalUnit::Kilogram => "kg",
            CanonicalUnit::Millilitre => "ml",
            CanonicalUnit::Litre => "l",
            CanonicalUnit::Centimetre => "cm",
            CanonicalUnit::Metre => "m",
            CanonicalUnit::Piece => "pc",
        }
    }
}

/// A successfully parsed field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TypedValue {
    /// Net quantity with a canonical unit.
    Quantity { amount: Decimal, unit: CanonicalUnit },

    /// Monetary amount with an ISO currency code.
    Money { amount: Decimal, currency: String },

    /// Absolute calendar point; day is optional (month-level declarations
    /// like "01/2026" are legal).
    Calendar {
        year: i32,
        month: u32,
        #[serde(skip_serializing_if = "Option::is_none")]
        day: Option<u32>,
    },

    /// Relative duration such as "12 months from manufacture".
    Duration { months: u32 },

    /// Cleaned free text. `sufficient` is false when the value fails the
    /// per-field minimum-length check and carries no legally sufficient
    /// information.
    Text { value: String, sufficient: bool },
}

/// Normalization outcome for one declared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FieldState {
    /// Parsed successfully into a typed value.
    Present { value: TypedValue },
    /// A value was supplied but could not be parsed; the original string
    /// is kept for violation messages.
    Malformed { original: String },
    /// No value was supplied or recovered.
    Absent,
}

impl FieldState {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldState::Absent)
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, FieldState::Malformed { .. })
    }

    /// Present with a value that carries sufficient information.
    ///
    /// Under-length free text is `Present` but not valid.
    pub fn is_valid(&self) -> bool {
        match self {
            FieldState::Present { value } => {
                !matches!(value, TypedValue::Text { sufficient: false, .. })
            }
            _ => false,
        }
    }
}

/// A product record after normalization.
///
/// Immutable once built; every entry of [`DeclaredField::ALL`] is mapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProductRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_imported: Option<bool>,
    pub fields: BTreeMap<DeclaredField, FieldState>,
}

impl NormalizedProductRecord {
    /// State of a declared field. Every field is always mapped, so a
    /// missing entry only happens on a hand-built record and reads as
    /// `Absent`.
    pub fn get(&self, field: DeclaredField) -> &FieldState {
        static ABSENT: FieldState = FieldState::Absent;
        self.fields.get(&field).unwrap_or(&ABSENT)
    }
}
