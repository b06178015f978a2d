//! Common regex patterns for label-text field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // ---- Stage 1: labeled "key: value" patterns, one per declared field ----

    pub static ref MANUFACTURER_LABELED: Regex = Regex::new(
        r"(?im)^\s*(?:manufactured\s+by|mfg\.?\s+by|marketed\s+by|packed\s+by|made\s+by|manufacturer)[\s:\-]+(.+?)\s*$"
    ).unwrap();

    pub static ref COUNTRY_LABELED: Regex = Regex::new(
        r"(?im)(?:country\s+of\s+origin|origin)[\s:\-]+([a-z][a-z .]+)"
    ).unwrap();

    pub static ref GENERIC_NAME_LABELED: Regex = Regex::new(
        r"(?im)^\s*(?:generic\s+name|common\s+name|commodity|product\s+name)[\s:\-]+(.+?)\s*$"
    ).unwrap();

    pub static ref NET_QUANTITY_LABELED: Regex = Regex::new(
        r"(?im)(?:net\s+(?:quantity|qty\.?|wt\.?|weight|contents?))[\s:\-]+([\d,]+(?:\.\d+)?\s*[a-z]+)"
    ).unwrap();

    pub static ref MRP_LABELED: Regex = Regex::new(
        r"(?im)(?:m\.?r\.?p\.?|maximum\s+retail\s+price)[\s:\-]*((?:₹|rs\.?|inr)?\s*[\d,]+(?:\.\d{1,2})?)"
    ).unwrap();

    pub static ref BEST_BEFORE_LABELED: Regex = Regex::new(
        r"(?im)(?:best\s+before|use\s+by|expiry(?:\s+date)?|exp\.?\s+date)[\s:\-]+(.+?)\s*$"
    ).unwrap();

    pub static ref MFG_DATE_LABELED: Regex = Regex::new(
        r"(?im)(?:date\s+of\s+(?:manufacture|mfg\.?|import)|mfg\.?\s+date|mfd\.?|manufactured\s+on|pkd\.?)[\s:\-]+(.+?)\s*$"
    ).unwrap();

    pub static ref UNIT_SALE_PRICE_LABELED: Regex = Regex::new(
        r"(?im)(?:unit\s+sale\s+price|unit\s+price)[\s:\-]+(.+?)\s*$"
    ).unwrap();

    // ---- Stage 2: free-text value patterns for the keyword window scan ----

    /// Currency-marked amount anywhere in a window ("₹40.00", "Rs. 40").
    pub static ref PRICE_TOKEN: Regex = Regex::new(
        r"(?i)(?:₹|rs\.?|inr)\s*[\d,]+(?:\.\d{1,2})?"
    ).unwrap();

    /// Bare number immediately followed by a measurement unit token.
    pub static ref QUANTITY_TOKEN: Regex = Regex::new(
        r"(?i)\b\d+(?:[,.]\d+)?\s*(?:kg|gm?s?|ml|ltrs?|l\b|litres?|liters?|cm|m\b|pcs?|pieces?|units?)\b\.?"
    ).unwrap();

    /// "made in <country>". Single-token capture; multi-word countries
    /// come through the labeled country-of-origin pattern instead.
    pub static ref MADE_IN: Regex = Regex::new(
        r"(?i)made\s+in\s+([a-z]{3,})"
    ).unwrap();

    /// Relative shelf-life declarations ("12 months from manufacture").
    pub static ref DURATION_TOKEN: Regex = Regex::new(
        r"(?i)\b\d{1,3}\s*(?:months?|years?)(?:\s+from\s+[a-z]+)?\b"
    ).unwrap();

    /// Standalone date tokens with a four-digit year.
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"\b\d{1,2}[/\-.]\d{1,2}[/\-.]\d{4}\b|\b\d{1,2}[/\-.]\d{4}\b"
    ).unwrap();
}
