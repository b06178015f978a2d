//! Data models for records, reports, configuration and the API boundary.

pub mod api;
pub mod config;
pub mod record;
pub mod report;

pub use api::{
    BatchRequest, BatchResult, BatchSubmitResponse, RuleInfo, ValidationRequest,
    ValidationResponse,
};
pub use config::PipelineConfig;
pub use record::{
    CanonicalUnit, Category, DeclaredField, FieldState, NormalizedProductRecord, Platform,
    RawProductRecord, Source, TypedValue,
};
pub use report::{ComplianceReport, OverallStatus, Severity, Violation};
