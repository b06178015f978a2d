//! Core library for Legal Metrology packaged-commodity compliance.
//!
//! This crate provides:
//! - Source routing (scraped listings vs. recognized label text)
//! - Field normalization into canonical typed values
//! - The mandatory-declaration rule engine and catalogue
//! - Compliance report aggregation and batch orchestration

pub mod error;
pub mod extract;
pub mod models;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod rules;

pub use error::{ExtractionError, LmpcError, RequestError, Result};
pub use extract::{
    ExtractionStrategy, FixedRecognizer, NullRecognizer, PlatformRegistry, RecognizedText,
    SourceRouter, TextRecognizer,
};
pub use models::api::{
    BatchRequest, BatchResult, BatchSubmitResponse, RuleInfo, ValidationRequest,
    ValidationResponse,
};
pub use models::config::PipelineConfig;
pub use models::record::{
    CanonicalUnit, Category, DeclaredField, FieldState, NormalizedProductRecord, Platform,
    RawProductRecord, Source, TypedValue,
};
pub use models::report::{ComplianceReport, OverallStatus, Severity, Violation};
pub use normalize::FieldNormalizer;
pub use pipeline::{CancellationFlag, Pipeline};
pub use rules::{catalogue, rule_infos, Applicability, Rule, RuleKind};
