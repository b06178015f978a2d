//! Violation and compliance-report models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::DeclaredField;

/// Severity of a rule violation.
///
/// `Medium` is representable but unused by the current rule catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Identifier of the originating rule.
    pub rule_id: String,
    /// Fixed rule description.
    pub description: String,
    /// The declared field the rule targets.
    pub field: DeclaredField,
    /// Severity of this violation.
    pub severity: Severity,
    /// Always true; kept for wire compatibility with rule-result consumers.
    pub violated: bool,
    /// Message filled with the concrete field value or label.
    pub details: String,
}

/// Aggregated compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallStatus {
    /// No applicable rule was violated.
    Compliant,
    /// Violations exist but none is Critical.
    Partial,
    /// At least one Critical violation.
    NonCompliant,
}

impl OverallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverallStatus::Compliant => "compliant",
            OverallStatus::Partial => "partial",
            OverallStatus::NonCompliant => "non_compliant",
        }
    }
}

/// The compliance report for one product record.
///
/// A pure function of the normalized record and the rule catalogue:
/// `violations_count` always equals `violations.len()` and
/// `total_rules_evaluated` counts the rules applicable to the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub violations: Vec<Violation>,
    pub total_rules_evaluated: usize,
    pub violations_count: usize,
    pub overall_status: OverallStatus,
    pub timestamp: DateTime<Utc>,
}
