//! End-to-end pipeline scenarios: request JSON in, compliance verdict out.

use std::collections::BTreeMap;
use std::sync::Arc;

use pretty_assertions::assert_eq;

use lmpc_core::{
    BatchRequest, CancellationFlag, Category, DeclaredField, FixedRecognizer, OverallStatus,
    Pipeline, PipelineConfig, Severity, Source, ValidationRequest, ValidationResponse,
};

fn compliant_food_request(id: &str) -> ValidationRequest {
    ValidationRequest {
        product_id: Some(id.to_string()),
        generic_name: Some("Iodized Salt".to_string()),
        manufacturer_details: Some("ABC Foods Pvt Ltd, Plot 12, MIDC, Mumbai 400001".to_string()),
        net_quantity: Some("1kg".to_string()),
        mrp: Some("₹40.00".to_string()),
        best_before_date: Some("12 months from manufacture".to_string()),
        date_of_manufacture: Some("01/2026".to_string()),
        unit_sale_price: Some("₹40/kg".to_string()),
        category: Some(Category::Food),
        is_imported: Some(false),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_fully_declared_food_record_is_compliant() {
    let pipeline = Pipeline::default();
    let response = pipeline
        .validate(compliant_food_request("SKU-001"))
        .await
        .unwrap();

    assert_eq!(response.overall_status, OverallStatus::Compliant);
    assert_eq!(response.violations_count, 0);
    // food, not imported: the country rule is the only inapplicable one
    assert_eq!(response.total_rules, 9);
    assert_eq!(response.product_id.as_deref(), Some("SKU-001"));
}

#[tokio::test]
async fn test_single_missing_manufacturer_is_one_critical() {
    let pipeline = Pipeline::default();
    let mut request = compliant_food_request("SKU-001b");
    request.manufacturer_details = None;

    let response = pipeline.validate(request).await.unwrap();

    assert_eq!(response.overall_status, OverallStatus::NonCompliant);
    assert_eq!(response.violations_count, 1);
    assert_eq!(
        response.violations[0].field,
        DeclaredField::ManufacturerDetails
    );
    assert_eq!(response.violations[0].severity, Severity::Critical);
}

#[tokio::test]
async fn test_unit_sale_price_not_required_for_electronics() {
    let pipeline = Pipeline::default();
    let request = ValidationRequest {
        product_id: Some("SKU-008".to_string()),
        generic_name: Some("Bluetooth Speaker".to_string()),
        manufacturer_details: Some("GHI Electronics Pvt Ltd, Chennai, Tamil Nadu".to_string()),
        net_quantity: Some("1 pc".to_string()),
        mrp: Some("₹1,999.00".to_string()),
        date_of_manufacture: Some("02/2026".to_string()),
        category: Some(Category::Electronics),
        is_imported: Some(false),
        ..Default::default()
    };

    let response = pipeline.validate(request).await.unwrap();

    assert_eq!(response.overall_status, OverallStatus::Compliant);
    assert!(response
        .violations
        .iter()
        .all(|v| v.field != DeclaredField::UnitSalePrice));
}

#[tokio::test]
async fn test_missing_mandatory_fields_is_non_compliant() {
    let pipeline = Pipeline::default();
    let request = ValidationRequest {
        product_id: Some("SKU-002".to_string()),
        generic_name: Some("Instant Noodles".to_string()),
        net_quantity: Some("70 g".to_string()),
        category: Some(Category::Food),
        is_imported: Some(false),
        ..Default::default()
    };

    let response = pipeline.validate(request).await.unwrap();

    assert_eq!(response.overall_status, OverallStatus::NonCompliant);
    let critical_fields: Vec<DeclaredField> = response
        .violations
        .iter()
        .filter(|v| v.severity == Severity::Critical)
        .map(|v| v.field)
        .collect();
    assert!(critical_fields.contains(&DeclaredField::ManufacturerDetails));
    assert!(critical_fields.contains(&DeclaredField::Mrp));
    assert!(critical_fields.contains(&DeclaredField::BestBeforeDate));
}

#[tokio::test]
async fn test_unparsable_quantity_is_partial_with_single_high() {
    let pipeline = Pipeline::default();
    let mut request = compliant_food_request("SKU-003");
    request.net_quantity = Some("one kg".to_string());

    let response = pipeline.validate(request).await.unwrap();

    assert_eq!(response.overall_status, OverallStatus::Partial);
    assert_eq!(response.violations_count, 1);
    assert_eq!(response.violations[0].field, DeclaredField::NetQuantity);
    assert_eq!(response.violations[0].severity, Severity::High);
}

#[tokio::test]
async fn test_country_of_origin_required_only_when_imported() {
    let pipeline = Pipeline::default();

    let mut imported = compliant_food_request("SKU-004");
    imported.is_imported = Some(true);
    let response = pipeline.validate(imported).await.unwrap();

    assert_eq!(response.overall_status, OverallStatus::NonCompliant);
    let country = response
        .violations
        .iter()
        .find(|v| v.field == DeclaredField::CountryOfOrigin)
        .unwrap();
    assert_eq!(country.severity, Severity::Critical);

    // same record declared domestic: the rule is silent and uncounted
    let domestic = compliant_food_request("SKU-004");
    let response = pipeline.validate(domestic).await.unwrap();
    assert_eq!(response.overall_status, OverallStatus::Compliant);
    assert_eq!(response.total_rules, 9);
}

#[tokio::test]
async fn test_verdict_is_idempotent_for_identical_input() {
    let pipeline = Pipeline::default();

    let first = pipeline
        .validate(compliant_food_request("SKU-005"))
        .await
        .unwrap();
    let second = pipeline
        .validate(compliant_food_request("SKU-005"))
        .await
        .unwrap();

    // ids and timestamps are per-run; the verdict itself must match
    assert_eq!(first.overall_status, second.overall_status);
    assert_eq!(first.total_rules, second.total_rules);
    assert_eq!(first.violations, second.violations);
}

#[tokio::test]
async fn test_recognized_label_text_flows_to_verdict() {
    let label = "\
Generic Name: Basmati Rice
Manufactured by: XYZ Agro Mills Ltd, Karnal, Haryana 132001
Net Qty: 5 kg
MRP: ₹550.00
Unit Sale Price: ₹110/kg
Best Before: 06/2027
Mfg Date: 15/01/2026";

    let pipeline = Pipeline::new(
        Arc::new(FixedRecognizer::new(label, 0.94)),
        PipelineConfig::default(),
    );

    let request = ValidationRequest {
        product_id: Some("SKU-006".to_string()),
        source: Some(Source::Uploaded),
        image_url: Some("file://rice-label.jpg".to_string()),
        category: Some(Category::Food),
        is_imported: Some(false),
        ..Default::default()
    };

    let response = pipeline.validate(request).await.unwrap();
    assert_eq!(response.overall_status, OverallStatus::Compliant);
}

#[tokio::test]
async fn test_scraped_attributes_resolve_through_platform_aliases() {
    let pipeline = Pipeline::default();

    let mut attributes = BTreeMap::new();
    attributes.insert("Item Weight".to_string(), "500 g".to_string());
    attributes.insert("Manufacturer".to_string(), "DEF Spices Pvt Ltd, Kochi, Kerala".to_string());

    let request = ValidationRequest {
        product_id: Some("SKU-007".to_string()),
        platform: Some(lmpc_core::Platform::Amazon),
        category: Some(Category::Electronics),
        is_imported: Some(false),
        attributes,
        generic_name: Some("Mixer Grinder".to_string()),
        mrp: Some("Rs. 2499".to_string()),
        date_of_manufacture: Some("03/2026".to_string()),
        ..Default::default()
    };

    let response = pipeline.validate(request).await.unwrap();
    assert_eq!(response.overall_status, OverallStatus::Compliant);
    assert_eq!(response.total_rules, 7);
}

#[tokio::test]
async fn test_batch_isolates_one_extraction_failure() {
    // no recognizer wired: the one image-sourced record degrades to
    // all-absent fields while its 99 siblings are untouched
    let pipeline = Arc::new(Pipeline::default());

    let mut products: Vec<ValidationRequest> = (0..99)
        .map(|i| compliant_food_request(&format!("SKU-{i:03}")))
        .collect();
    products.push(ValidationRequest {
        product_id: Some("SKU-BAD".to_string()),
        source: Some(Source::Uploaded),
        image_url: Some("file://unreadable.jpg".to_string()),
        category: Some(Category::Food),
        is_imported: Some(false),
        ..Default::default()
    });

    let request = BatchRequest {
        platform: None,
        products,
    };
    let ack = Pipeline::acknowledge(&request);

    let result = pipeline
        .validate_batch(ack.batch_id, request, CancellationFlag::new())
        .await
        .unwrap();

    assert_eq!(result.batch_id, ack.batch_id);
    assert_eq!(result.completed, 100);
    assert_eq!(result.skipped, 0);
    assert_eq!(result.status, "completed");

    let by_id = |id: &str| -> &ValidationResponse {
        result
            .results
            .iter()
            .find(|r| r.product_id.as_deref() == Some(id))
            .unwrap()
    };

    let failed = by_id("SKU-BAD");
    assert_eq!(failed.overall_status, OverallStatus::NonCompliant);
    assert!(failed
        .violations
        .iter()
        .any(|v| v.severity == Severity::Critical));

    for i in 0..99 {
        let ok = by_id(&format!("SKU-{i:03}"));
        assert_eq!(ok.overall_status, OverallStatus::Compliant);
    }
}

#[tokio::test]
async fn test_batch_results_carry_identity_not_order() {
    let pipeline = Arc::new(Pipeline::default());

    let request = BatchRequest {
        platform: None,
        products: (0..20)
            .map(|i| compliant_food_request(&format!("P-{i}")))
            .collect(),
    };
    let ack = Pipeline::acknowledge(&request);

    let result = pipeline
        .validate_batch(ack.batch_id, request, CancellationFlag::new())
        .await
        .unwrap();

    let mut ids: Vec<String> = result
        .results
        .iter()
        .filter_map(|r| r.product_id.clone())
        .collect();
    ids.sort();
    let mut expected: Vec<String> = (0..20).map(|i| format!("P-{i}")).collect();
    expected.sort();
    assert_eq!(ids, expected);
}
