//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod rules;
pub mod validate;

use std::path::Path;

use lmpc_core::PipelineConfig;

/// Load the pipeline configuration from `--config`, falling back to
/// defaults when no path is given.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PipelineConfig> {
    match config_path {
        Some(path) => Ok(PipelineConfig::from_file(Path::new(path))?),
        None => Ok(PipelineConfig::default()),
    }
}
