//! Request and response schemas for the validation boundary.
//!
//! These are the JSON shapes exchanged with callers. Schema problems
//! (unknown enum values, blank identifiers, image sources without an
//! image) are rejected here as [`RequestError`] before the pipeline runs;
//! once a record passes conversion the pipeline has no fatal path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RequestError;
use crate::models::record::{
    Category, DeclaredField, Platform, RawProductRecord, Source,
};
use crate::models::report::{ComplianceReport, OverallStatus, Severity, Violation};

/// Single-product validation request. Absent keys are absent fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_before_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_manufacture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_sale_price: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_imported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Raw platform attribute table for scraped listings.
    #[serde(default, skip_serializing_if = "std::collections::BTreeMap::is_empty")]
    pub attributes: std::collections::BTreeMap<String, String>,
}

impl ValidationRequest {
    /// Parse a request from JSON, mapping deserialization failures (for
    /// example a non-enum category) to a schema rejection.
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        serde_json::from_str(json).map_err(|e| RequestError::Schema(e.to_string()))
    }
}

impl TryFrom<ValidationRequest> for RawProductRecord {
    type Error = RequestError;

    fn try_from(req: ValidationRequest) -> Result<Self, Self::Error> {
        if let Some(ref id) = req.product_id {
            if id.trim().is_empty() {
                return Err(RequestError::BlankId("product_id".to_string()));
            }
        }

        let source = req.source.unwrap_or_default();
        if source.needs_recognition() && req.image_url.is_none() {
            return Err(RequestError::MissingImage {
                source_kind: format!("{:?}", source).to_lowercase(),
            });
        }

        let mut record = RawProductRecord {
            product_id: req.product_id,
            platform: req.platform.unwrap_or_default(),
            category: req.category.unwrap_or_default(),
            is_imported: req.is_imported,
            source,
            image_url: req.image_url,
            fields: Default::default(),
            attributes: req.attributes,
        };

        let pairs = [
            (DeclaredField::ManufacturerDetails, req.manufacturer_details),
            (DeclaredField::CountryOfOrigin, req.country_of_origin),
            (DeclaredField::GenericName, req.generic_name),
            (DeclaredField::NetQuantity, req.net_quantity),
            (DeclaredField::Mrp, req.mrp),
            (DeclaredField::BestBeforeDate, req.best_before_date),
            (DeclaredField::DateOfManufacture, req.date_of_manufacture),
            (DeclaredField::UnitSalePrice, req.unit_sale_price),
        ];
        for (field, value) in pairs {
            if let Some(value) = value {
                record.set(field, value);
            }
        }

        Ok(record)
    }
}

/// Response for a single validated product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub validation_id: Uuid,
    /// Always "completed"; the pipeline has no partial-result state.
    pub status: String,
    pub overall_status: OverallStatus,
    pub total_rules: usize,
    pub violations_count: usize,
    pub violations: Vec<Violation>,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

impl ValidationResponse {
    pub fn from_report(report: ComplianceReport, product_id: Option<String>) -> Self {
        Self {
            validation_id: Uuid::new_v4(),
            status: "completed".to_string(),
            overall_status: report.overall_status,
            total_rules: report.total_rules_evaluated,
            violations_count: report.violations_count,
            violations: report.violations,
            timestamp: report.timestamp,
            product_id,
        }
    }
}

/// Batch validation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchRequest {
    /// Default platform applied to products that do not set their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub products: Vec<ValidationRequest>,
}

impl BatchRequest {
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        let req: BatchRequest =
            serde_json::from_str(json).map_err(|e| RequestError::Schema(e.to_string()))?;
        if req.products.is_empty() {
            return Err(RequestError::EmptyBatch);
        }
        Ok(req)
    }
}

/// Acknowledgement returned when a batch is accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSubmitResponse {
    pub batch_id: Uuid,
    pub status: String,
    pub total_products: usize,
    pub message: String,
}

/// Completed batch results, retrievable by batch id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub batch_id: Uuid,
    pub status: String,
    /// One entry per processed product; identity is carried by
    /// `product_id`, ordering is not significant.
    pub results: Vec<ValidationResponse>,
    pub completed: usize,
    /// Products never dispatched because the batch was cancelled.
    pub skipped: usize,
}

/// Read-only view of one catalogue rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleInfo {
    pub rule_id: String,
    pub description: String,
    pub field: DeclaredField,
    pub severity: Severity,
    pub applicability: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_to_record_skips_absent_keys() {
        let req = ValidationRequest {
            generic_name: Some("Iodized Salt".to_string()),
            mrp: Some("₹40.00".to_string()),
            category: Some(Category::Food),
            ..Default::default()
        };

        let record = RawProductRecord::try_from(req).unwrap();
        assert_eq!(record.get(DeclaredField::GenericName), Some("Iodized Salt"));
        assert_eq!(record.get(DeclaredField::Mrp), Some("₹40.00"));
        assert_eq!(record.get(DeclaredField::ManufacturerDetails), None);
        assert_eq!(record.category, Category::Food);
    }

    #[test]
    fn test_non_enum_category_is_schema_rejection() {
        let err = ValidationRequest::from_json(r#"{"category": "furniture"}"#).unwrap_err();
        assert!(matches!(err, RequestError::Schema(_)));
    }

    #[test]
    fn test_uploaded_source_requires_image() {
        let req = ValidationRequest {
            source: Some(Source::Uploaded),
            ..Default::default()
        };
        let err = RawProductRecord::try_from(req).unwrap_err();
        assert!(matches!(err, RequestError::MissingImage { .. }));
    }

    #[test]
    fn test_blank_product_id_rejected() {
        let req = ValidationRequest {
            product_id: Some("  ".to_string()),
            ..Default::default()
        };
        let err = RawProductRecord::try_from(req).unwrap_err();
        assert!(matches!(err, RequestError::BlankId(_)));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let err = BatchRequest::from_json(r#"{"products": []}"#).unwrap_err();
        assert!(matches!(err, RequestError::EmptyBatch));
    }
}
