//! Error types for the lmpc-core library.

use thiserror::Error;

/// Main error type for the lmpc library.
#[derive(Error, Debug)]
pub enum LmpcError {
    /// Request failed schema validation before the pipeline ran.
    #[error("invalid request: {0}")]
    Request(#[from] RequestError),

    /// Text extraction error.
    ///
    /// Inside the pipeline this is recovered by degrading fields to
    /// `Absent`; it only surfaces when a caller drives the extraction
    /// layer directly.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Batch worker failure (task join error).
    #[error("batch worker error: {0}")]
    Batch(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors rejecting a request before pipeline execution.
///
/// The 4xx-equivalent class: nothing here is recoverable inside the
/// pipeline because the record never enters it.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Request body failed JSON schema validation.
    #[error("schema validation failed: {0}")]
    Schema(String),

    /// A provided identifier is blank.
    #[error("blank identifier: {0}")]
    BlankId(String),

    /// Image-sourced record without an image reference.
    #[error("source '{source_kind}' requires an image_url")]
    MissingImage { source_kind: String },

    /// Batch request with no products.
    #[error("batch request contains no products")]
    EmptyBatch,
}

/// Errors from the text-recognition collaborator boundary.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The recognizer returned an error.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The recognizer did not answer within the configured deadline.
    #[error("text recognition timed out after {0}ms")]
    Timeout(u64),

    /// Recognized text confidence was below the configured floor.
    #[error("recognized text confidence {confidence:.2} below threshold {threshold:.2}")]
    LowConfidence { confidence: f32, threshold: f32 },

    /// No recognizer is wired and an image-sourced record was routed.
    #[error("no text recognizer available")]
    NoRecognizer,
}

/// Result type for the lmpc library.
pub type Result<T> = std::result::Result<T, LmpcError>;
