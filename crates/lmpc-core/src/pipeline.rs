//! Pipeline orchestration: route, normalize, evaluate, report.
//!
//! Per record the pipeline is a pure, synchronous computation apart from
//! the one collaborator call inside the router; given the same record and
//! rule catalogue it produces the same verdict. Batches fan records out
//! over a bounded worker pool with per-record failure isolation and
//! cooperative cancellation at record granularity.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{LmpcError, Result};
use crate::extract::{NullRecognizer, SourceRouter, TextRecognizer};
use crate::models::api::{
    BatchRequest, BatchResult, BatchSubmitResponse, ValidationRequest, ValidationResponse,
};
use crate::models::config::PipelineConfig;
use crate::models::record::RawProductRecord;
use crate::normalize::FieldNormalizer;
use crate::report;
use crate::rules::{self, catalogue};

/// Cooperative batch cancellation signal.
///
/// Flagging it stops new records from being dispatched; in-flight record
/// evaluations run to completion.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// The extraction-normalization and rule-validation pipeline.
pub struct Pipeline {
    router: SourceRouter,
    normalizer: FieldNormalizer,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(recognizer: Arc<dyn TextRecognizer>, config: PipelineConfig) -> Self {
        let router = SourceRouter::new(recognizer, config.extraction.clone());
        let normalizer = FieldNormalizer::new(config.report.default_currency.clone());
        Self {
            router,
            normalizer,
            config,
        }
    }

    /// Pipeline without a text-recognition collaborator; image-sourced
    /// records degrade to all-absent fields.
    pub fn without_recognizer(config: PipelineConfig) -> Self {
        Self::new(Arc::new(NullRecognizer), config)
    }

    /// Validate a schema-valid raw record.
    ///
    /// This path has no fatal error: every field state maps to a defined
    /// rule outcome.
    pub async fn validate_record(&self, record: RawProductRecord) -> ValidationResponse {
        let product_id = record.product_id.clone();

        let routed = self.router.route(record).await;
        let normalized = self.normalizer.normalize(&routed);
        let violations = rules::evaluate(&normalized, catalogue());
        let total = rules::applicable_count(&normalized, catalogue());
        let report = report::build(violations, total);

        debug!(
            product_id = ?product_id,
            status = report.overall_status.as_str(),
            violations = report.violations_count,
            "record validated"
        );

        ValidationResponse::from_report(report, product_id)
    }

    /// Validate a single request, rejecting schema violations before the
    /// pipeline runs.
    pub async fn validate(&self, request: ValidationRequest) -> Result<ValidationResponse> {
        let record = RawProductRecord::try_from(request)?;
        Ok(self.validate_record(record).await)
    }

    /// Acknowledge a batch request before processing it. The minted
    /// `batch_id` identifies the eventual results: pass it to
    /// [`Pipeline::validate_batch`].
    pub fn acknowledge(request: &BatchRequest) -> BatchSubmitResponse {
        BatchSubmitResponse {
            batch_id: Uuid::new_v4(),
            status: "accepted".to_string(),
            total_products: request.products.len(),
            message: format!("{} products queued for validation", request.products.len()),
        }
    }

    /// Validate a batch of records concurrently.
    ///
    /// Records are independent: they run on a worker pool bounded by
    /// `batch.workers`, one record's extraction failure cannot touch its
    /// siblings, and per-record identity is carried by `product_id`
    /// rather than result order.
    pub async fn validate_batch(
        self: Arc<Self>,
        batch_id: Uuid,
        request: BatchRequest,
        cancel: CancellationFlag,
    ) -> Result<BatchResult> {
        let default_platform = request.platform;

        // Schema validation for the whole batch happens up front, before
        // any record is dispatched.
        let mut records = Vec::with_capacity(request.products.len());
        for mut product in request.products {
            if product.platform.is_none() {
                product.platform = default_platform;
            }
            records.push(RawProductRecord::try_from(product)?);
        }

        let total = records.len();
        let workers = self.config.batch.workers.max(1);
        let semaphore = Arc::new(Semaphore::new(workers));
        let mut join_set = JoinSet::new();
        let mut skipped = 0usize;

        info!(%batch_id, total, workers, "starting batch validation");

        for record in records {
            if cancel.is_cancelled() {
                skipped += 1;
                continue;
            }

            let permit = semaphore
                .clone()
                .acquire_owned()
                .await
                .map_err(|e| LmpcError::Batch(e.to_string()))?;
            let pipeline = Arc::clone(&self);

            join_set.spawn(async move {
                let response = pipeline.validate_record(record).await;
                drop(permit);
                response
            });
        }

        let mut results = Vec::with_capacity(total - skipped);
        while let Some(joined) = join_set.join_next().await {
            results.push(joined.map_err(|e| LmpcError::Batch(e.to_string()))?);
        }

        let completed = results.len();
        info!(completed, skipped, "batch validation finished");

        Ok(BatchResult {
            batch_id,
            status: if skipped == 0 { "completed" } else { "cancelled" }.to_string(),
            results,
            completed,
            skipped,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::without_recognizer(PipelineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{Category, Source};
    use pretty_assertions::assert_eq;

    fn compliant_food_request() -> ValidationRequest {
        ValidationRequest {
            generic_name: Some("Iodized Salt".to_string()),
            manufacturer_details: Some("ABC Foods Pvt Ltd, Mumbai, Maharashtra".to_string()),
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
    async fn test_validate_rejects_schema_violation() {
        let pipeline = Pipeline::default();
        let request = ValidationRequest {
            source: Some(Source::Uploaded),
            ..Default::default()
        };

        let err = pipeline.validate(request).await.unwrap_err();
        assert!(matches!(err, LmpcError::Request(_)));
    }

    #[tokio::test]
    async fn test_single_record_completes() {
        let pipeline = Pipeline::default();
        let response = pipeline.validate(compliant_food_request()).await.unwrap();

        assert_eq!(response.status, "completed");
        assert_eq!(response.violations_count, 0);
    }

    #[tokio::test]
    async fn test_cancelled_batch_dispatches_nothing() {
        let pipeline = Arc::new(Pipeline::default());
        let cancel = CancellationFlag::new();
        cancel.cancel();

        let request = BatchRequest {
            platform: None,
            products: vec![compliant_food_request(); 5],
        };
        let ack = Pipeline::acknowledge(&request);

        let result = pipeline
            .validate_batch(ack.batch_id, request, cancel)
            .await
            .unwrap();
        assert_eq!(result.completed, 0);
        assert_eq!(result.skipped, 5);
        assert_eq!(result.status, "cancelled");
    }

    #[tokio::test]
    async fn test_batch_results_carry_acknowledged_id() {
        let pipeline = Arc::new(Pipeline::default());
        let request = BatchRequest {
            platform: None,
            products: vec![compliant_food_request(); 2],
        };
        let ack = Pipeline::acknowledge(&request);

        let result = pipeline
            .validate_batch(ack.batch_id, request, CancellationFlag::new())
            .await
            .unwrap();
        assert_eq!(result.batch_id, ack.batch_id);
    }
}
