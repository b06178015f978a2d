//! Compliance report aggregation.

use chrono::Utc;

use crate::models::report::{ComplianceReport, OverallStatus, Severity, Violation};

/// Aggregate rule outcomes into a compliance verdict.
///
/// Severity-threshold policy: no violations is `Compliant`, any Critical
/// violation is `NonCompliant`, anything else (only High/Medium) is
/// `Partial`.
pub fn build(violations: Vec<Violation>, total_rules_evaluated: usize) -> ComplianceReport {
    let overall_status = if violations.is_empty() {
        OverallStatus::Compliant
    } else if violations.iter().any(|v| v.severity == Severity::Critical) {
        OverallStatus::NonCompliant
    } else {
        OverallStatus::Partial
    };

    ComplianceReport {
        violations_count: violations.len(),
        violations,
        total_rules_evaluated,
        overall_status,
        timestamp: Utc::now(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::DeclaredField;
    use pretty_assertions::assert_eq;

    fn violation(severity: Severity) -> Violation {
        Violation {
            rule_id: "LM_RULE_06_MRP_MISSING".to_string(),
            description: "MRP (Maximum Retail Price) is mandatory.".to_string(),
            field: DeclaredField::Mrp,
            severity,
            violated: true,
            details: "MRP including all taxes is mandatory but missing".to_string(),
        }
    }

    #[test]
    fn test_empty_violations_is_compliant() {
        let report = build(vec![], 8);
        assert_eq!(report.overall_status, OverallStatus::Compliant);
        assert_eq!(report.violations_count, 0);
        assert_eq!(report.total_rules_evaluated, 8);
    }

    #[test]
    fn test_any_critical_is_non_compliant() {
        let report = build(vec![violation(Severity::High), violation(Severity::Critical)], 10);
        assert_eq!(report.overall_status, OverallStatus::NonCompliant);
        assert_eq!(report.violations_count, 2);
    }

    #[test]
    fn test_only_high_or_medium_is_partial() {
        let report = build(vec![violation(Severity::High), violation(Severity::Medium)], 10);
        assert_eq!(report.overall_status, OverallStatus::Partial);
    }

    #[test]
    fn test_count_matches_list_length() {
        let report = build(vec![violation(Severity::High); 3], 10);
        assert_eq!(report.violations_count, report.violations.len());
    }
}
