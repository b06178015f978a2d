//! Rule engine for the mandatory-declaration checklist.
//!
//! Rules are immutable definitions evaluated independently against a
//! normalized record, in fixed declaration order, with no
//! short-circuiting; an inapplicable rule never produces a violation and
//! does not count toward the rules-evaluated total.

pub mod catalog;

use tracing::debug;

use crate::models::record::{DeclaredField, FieldState, NormalizedProductRecord, TypedValue};
use crate::models::report::{Severity, Violation};

pub use catalog::{catalogue, rule_infos};

/// Applicability predicate over `{category, is_imported}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applicability {
    /// Rule applies to every record.
    Always,
    /// Only when the product is known to be imported.
    ImportedOnly,
    /// Only for time-sensitive (perishable) categories.
    PerishableCategories,
    /// Only for categories that must declare a unit sale price.
    UnitPricedCategories,
}

impl Applicability {
    /// Deterministic applicability for a given record.
    pub fn applies(&self, record: &NormalizedProductRecord) -> bool {
        match self {
            Applicability::Always => true,
            Applicability::ImportedOnly => record.is_imported == Some(true),
            Applicability::PerishableCategories => record.category.is_perishable(),
            Applicability::UnitPricedCategories => record.category.requires_unit_sale_price(),
        }
    }

    /// Condition text for the read-only catalogue listing.
    pub fn describe(&self) -> &'static str {
        match self {
            Applicability::Always => "always",
            Applicability::ImportedOnly => "imported products only",
            Applicability::PerishableCategories => {
                "time-sensitive categories (food, beverage, snack, cosmetics, personal care)"
            }
            Applicability::UnitPricedCategories => {
                "unit-priced categories (food, beverage, grocery)"
            }
        }
    }
}

/// What a rule checks about its target field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// The field must be present with sufficient information.
    ///
    /// `reports_malformed` is false when a separate format rule covers
    /// badly-formatted values for the same field, so the two never fire
    /// together for one cause.
    Presence { reports_malformed: bool },
    /// The field, when supplied, must parse into its expected format.
    Format,
}

/// An immutable rule definition.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub description: &'static str,
    pub field: DeclaredField,
    /// Severity when the rule fires in its primary mode.
    pub severity: Severity,
    pub kind: RuleKind,
    pub applicability: Applicability,
}

impl Rule {
    pub fn applies_to(&self, record: &NormalizedProductRecord) -> bool {
        self.applicability.applies(record)
    }

    /// Validation predicate over the field's normalized state.
    fn check(&self, state: &FieldState) -> Option<(Severity, String)> {
        let label = self.field.label();
        match self.kind {
            RuleKind::Presence { reports_malformed } => match state {
                FieldState::Absent => Some((
                    self.severity,
                    format!("{label} is mandatory but missing"),
                )),
                FieldState::Present {
                    value: TypedValue::Text {
                        value,
                        sufficient: false,
                    },
                } => Some((
                    self.severity,
                    format!("{label} is present but carries insufficient detail: '{value}'"),
                )),
                FieldState::Malformed { original } if reports_malformed => Some((
                    Severity::High,
                    format!("{label} is present but not in the expected format: '{original}'"),
                )),
                _ => None,
            },
            RuleKind::Format => match state {
                FieldState::Malformed { original } => Some((
                    Severity::High,
                    format!("{label} is present but not in the expected format: '{original}'"),
                )),
                _ => None,
            },
        }
    }
}

/// Evaluate a normalized record against an ordered rule sequence.
///
/// Every applicable rule is scanned; output preserves rule order for
/// stable, reproducible reports.
pub fn evaluate(record: &NormalizedProductRecord, rules: &[Rule]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for rule in rules {
        if !rule.applies_to(record) {
            continue;
        }

        if let Some((severity, details)) = rule.check(record.get(rule.field)) {
            debug!(rule_id = rule.id, field = %rule.field, "rule violated");
            violations.push(Violation {
                rule_id: rule.id.to_string(),
                description: rule.description.to_string(),
                field: rule.field,
                severity,
                violated: true,
                details,
            });
        }
    }

    violations
}

/// Number of rules applicable to a record.
pub fn applicable_count(record: &NormalizedProductRecord, rules: &[Rule]) -> usize {
    rules.iter().filter(|r| r.applies_to(record)).count()
}
