//! Configuration structures for the compliance pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{LmpcError, Result};

/// Main configuration for the lmpc pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Text extraction configuration.
    pub extraction: ExtractionConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,

    /// Report configuration.
    pub report: ReportConfig,
}

/// Text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Deadline for the text-recognition collaborator, in milliseconds.
    pub recognizer_timeout_ms: u64,

    /// Minimum recognition confidence; recognized text below it is
    /// treated as an extraction failure.
    pub min_confidence: f32,

    /// Window size (characters) for the keyword-anchored heuristic scan.
    pub window_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            recognizer_timeout_ms: 10_000,
            min_confidence: 0.0,
            window_chars: 40,
        }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Number of records evaluated concurrently.
    pub workers: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self { workers: 4 }
    }
}

/// Report configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Currency code assumed for monetary declarations.
    pub default_currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_currency: "INR".to_string(),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| LmpcError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| LmpcError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
