//! The versioned catalogue of mandatory Legal Metrology declaration
//! rules.
//!
//! Fixed at compile time and exposed read-only; the declaration order
//! below is the evaluation and report order.

use super::{Applicability, Rule, RuleKind};
use crate::models::api::RuleInfo;
use crate::models::record::DeclaredField;
use crate::models::report::Severity;

static CATALOGUE: [Rule; 10] = [
    Rule {
        id: "LM_RULE_01_MANUFACTURER_MISSING",
        description: "Name and address of manufacturer/importer is mandatory.",
        field: DeclaredField::ManufacturerDetails,
        severity: Severity::Critical,
        kind: RuleKind::Presence {
            reports_malformed: true,
        },
        applicability: Applicability::Always,
    },
    Rule {
        id: "LM_RULE_02_COUNTRY_OF_ORIGIN_MISSING",
        description: "Country of origin is mandatory for imported products.",
        field: DeclaredField::CountryOfOrigin,
        severity: Severity::Critical,
        kind: RuleKind::Presence {
            reports_malformed: true,
        },
        applicability: Applicability::ImportedOnly,
    },
    Rule {
        id: "LM_RULE_03_GENERIC_NAME_MISSING",
        description: "Common/generic name of the commodity is mandatory.",
        field: DeclaredField::GenericName,
        severity: Severity::Critical,
        kind: RuleKind::Presence {
            reports_malformed: true,
        },
        applicability: Applicability::Always,
    },
    Rule {
        id: "LM_RULE_04_NET_QTY_MISSING",
        description: "Net quantity in a standard unit is mandatory.",
        field: DeclaredField::NetQuantity,
        severity: Severity::Critical,
        // format problems are rule 05's concern
        kind: RuleKind::Presence {
            reports_malformed: false,
        },
        applicability: Applicability::Always,
    },
    Rule {
        id: "LM_RULE_05_NET_QTY_UNIT_INVALID",
        description: "Net quantity must parse as a number with a valid Legal Metrology unit.",
        field: DeclaredField::NetQuantity,
        severity: Severity::High,
        kind: RuleKind::Format,
        applicability: Applicability::Always,
    },
    Rule {
        id: "LM_RULE_06_MRP_MISSING",
        description: "MRP (Maximum Retail Price) is mandatory.",
        field: DeclaredField::Mrp,
        severity: Severity::Critical,
        // format problems are rule 07's concern
        kind: RuleKind::Presence {
            reports_malformed: false,
        },
        applicability: Applicability::Always,
    },
    Rule {
        id: "LM_RULE_07_MRP_FORMAT",
        description: "MRP must be a positive amount like '₹50.00' or 'Rs. 50'.",
        field: DeclaredField::Mrp,
        severity: Severity::High,
        kind: RuleKind::Format,
        applicability: Applicability::Always,
    },
    Rule {
        id: "LM_RULE_08_BEST_BEFORE_MISSING",
        description: "Best before/use by date is mandatory for time-sensitive commodities.",
        field: DeclaredField::BestBeforeDate,
        severity: Severity::Critical,
        kind: RuleKind::Presence {
            reports_malformed: true,
        },
        applicability: Applicability::PerishableCategories,
    },
    Rule {
        id: "LM_RULE_09_DATE_OF_MANUFACTURE_MISSING",
        description: "Date of manufacture or import is mandatory.",
        field: DeclaredField::DateOfManufacture,
        severity: Severity::Critical,
        kind: RuleKind::Presence {
            reports_malformed: true,
        },
        applicability: Applicability::Always,
    },
    Rule {
        id: "LM_RULE_10_UNIT_SALE_PRICE_MISSING",
        description: "Unit sale price is mandatory for unit-priced categories.",
        field: DeclaredField::UnitSalePrice,
        severity: Severity::Critical,
        kind: RuleKind::Presence {
            reports_malformed: true,
        },
        applicability: Applicability::UnitPricedCategories,
    },
];

/// The active rule catalogue, in declaration order.
pub fn catalogue() -> &'static [Rule] {
    &CATALOGUE
}

/// Read-only serializable view of the catalogue.
pub fn rule_infos() -> Vec<RuleInfo> {
    CATALOGUE
        .iter()
        .map(|rule| RuleInfo {
            rule_id: rule.id.to_string(),
            description: rule.description.to_string(),
            field: rule.field,
            severity: rule.severity,
            applicability: rule.applicability.describe().to_string(),
        })
        .collect()
}
