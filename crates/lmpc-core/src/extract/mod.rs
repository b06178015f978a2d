//! Extraction source routing: from raw listings or recognized label text
//! to populated raw records.
//!
//! Scraped records pass through untouched apart from platform attribute
//! aliasing. Image-sourced records go through the external
//! text-recognition collaborator and a two-stage extraction strategy
//! chain. Strategies are an ordered list tried per field until one yields
//! a value, so future strategies slot in without touching call sites.

pub mod heuristic;
pub mod labeled;
pub mod patterns;
pub mod platform;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::{DeclaredField, RawProductRecord};

pub use heuristic::KeywordWindowStrategy;
pub use labeled::LabeledFieldStrategy;
pub use platform::PlatformRegistry;

/// A block of text recovered from a label image.
#[derive(Debug, Clone)]
pub struct RecognizedText {
    pub text: String,
    /// Recognition confidence (0.0 - 1.0).
    pub confidence: f32,
}

/// External text-recognition collaborator.
///
/// Treated as a black box; model selection, device placement and retries
/// are its own concern. The router only applies a deadline and degrades
/// to an all-absent record on failure.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    async fn recognize(&self, image_url: &str) -> Result<RecognizedText, ExtractionError>;
}

/// Recognizer used when no collaborator is wired; every image-sourced
/// record degrades to all-absent fields.
pub struct NullRecognizer;

#[async_trait]
impl TextRecognizer for NullRecognizer {
    async fn recognize(&self, _image_url: &str) -> Result<RecognizedText, ExtractionError> {
        Err(ExtractionError::NoRecognizer)
    }
}

/// Recognizer returning canned text, for tests and for feeding
/// pre-recognized text into the pipeline.
pub struct FixedRecognizer {
    text: String,
    confidence: f32,
}

impl FixedRecognizer {
    pub fn new(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }
}

#[async_trait]
impl TextRecognizer for FixedRecognizer {
    async fn recognize(&self, _image_url: &str) -> Result<RecognizedText, ExtractionError> {
        Ok(RecognizedText {
            text: self.text.clone(),
            confidence: self.confidence,
        })
    }
}

/// One way of pulling a declared-field value out of recognized text.
pub trait ExtractionStrategy: Send + Sync {
    /// Strategy name for logging.
    fn name(&self) -> &'static str;

    /// Extract a raw value for `field`, or `None` if this strategy cannot
    /// resolve it.
    fn extract(&self, field: DeclaredField, text: &str) -> Option<String>;
}

/// Routes a record to the extraction path its source tag requires.
pub struct SourceRouter {
    recognizer: Arc<dyn TextRecognizer>,
    strategies: Vec<Box<dyn ExtractionStrategy>>,
    registry: PlatformRegistry,
    config: ExtractionConfig,
}

impl SourceRouter {
    /// Build a router with the default strategy chain: labeled key-value
    /// matching first, keyword-window scanning second.
    pub fn new(recognizer: Arc<dyn TextRecognizer>, config: ExtractionConfig) -> Self {
        let strategies: Vec<Box<dyn ExtractionStrategy>> = vec![
            Box::new(LabeledFieldStrategy::new()),
            Box::new(KeywordWindowStrategy::new(config.window_chars)),
        ];
        Self {
            recognizer,
            strategies,
            registry: PlatformRegistry::new(),
            config,
        }
    }

    /// Assemble the raw field values for a record.
    ///
    /// Already-populated fields are never overwritten, whatever the
    /// source. A recognizer failure or timeout is recovered here: the
    /// record comes back with its unresolved fields absent and the
    /// pipeline continues.
    pub async fn route(&self, mut record: RawProductRecord) -> RawProductRecord {
        self.apply_attribute_aliases(&mut record);

        if !record.source.needs_recognition() {
            return record;
        }

        let text = match self.recognize(&record).await {
            Ok(text) => text,
            Err(e) => {
                warn!(product_id = ?record.product_id, error = %e, "extraction failed, fields default to absent");
                return record;
            }
        };

        for field in DeclaredField::ALL {
            if record.get(field).is_some() {
                continue;
            }
            for strategy in &self.strategies {
                if let Some(value) = strategy.extract(field, &text) {
                    debug!(field = %field, strategy = strategy.name(), "field resolved");
                    record.set(field, value);
                    break;
                }
            }
        }

        record
    }

    fn apply_attribute_aliases(&self, record: &mut RawProductRecord) {
        let resolved: Vec<(DeclaredField, String)> = record
            .attributes
            .iter()
            .filter_map(|(label, value)| {
                self.registry
                    .resolve(record.platform, label)
                    .map(|field| (field, value.clone()))
            })
            .collect();

        for (field, value) in resolved {
            if record.get(field).is_none() {
                record.set(field, value);
            }
        }
    }

    async fn recognize(&self, record: &RawProductRecord) -> Result<String, ExtractionError> {
        let image_url = record
            .image_url
            .as_deref()
            .ok_or_else(|| ExtractionError::Recognition("no image reference".to_string()))?;

        let deadline = Duration::from_millis(self.config.recognizer_timeout_ms);
        let recognized = tokio::time::timeout(deadline, self.recognizer.recognize(image_url))
            .await
            .map_err(|_| ExtractionError::Timeout(self.config.recognizer_timeout_ms))??;

        if recognized.confidence < self.config.min_confidence {
            return Err(ExtractionError::LowConfidence {
                confidence: recognized.confidence,
                threshold: self.config.min_confidence,
            });
        }

        debug!(
            chars = recognized.text.len(),
            confidence = recognized.confidence,
            "label text recognized"
        );
        Ok(recognized.text)
    }
}
