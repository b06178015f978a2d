//! Validate command - check a single product record for compliance.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use console::style;
use tracing::debug;

use lmpc_core::{
    FixedRecognizer, OverallStatus, Pipeline, ValidationRequest, ValidationResponse,
};

use super::load_config;

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Product record (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// File with pre-recognized label text, fed to the pipeline in place
    /// of a recognition service
    #[arg(long)]
    recognized_text: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON report
    Json,
    /// Plain text summary
    Text,
}

/// Exit code for a verdict: 0 compliant, 1 partial, 2 non-compliant.
fn exit_code(status: OverallStatus) -> i32 {
    match status {
        OverallStatus::Compliant => 0,
        OverallStatus::Partial => 1,
        OverallStatus::NonCompliant => 2,
    }
}

pub async fn run(args: ValidateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let request = ValidationRequest::from_json(&fs::read_to_string(&args.input)?)?;
    debug!("Validating record from {}", args.input.display());

    let pipeline = match &args.recognized_text {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Pipeline::new(Arc::new(FixedRecognizer::new(text, 1.0)), config)
        }
        None => Pipeline::without_recognizer(config),
    };

    let response = pipeline.validate(request).await?;

    let rendered = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&response)?,
        OutputFormat::Text => format_text(&response),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        println!(
            "{} Report written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", rendered);
    }

    let code = exit_code(response.overall_status);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

/// Render a validation response as a plain-text summary.
pub fn format_text(response: &ValidationResponse) -> String {
    let mut output = String::new();

    if let Some(id) = &response.product_id {
        output.push_str(&format!("Product: {}\n", id));
    }
    output.push_str(&format!(
        "Overall status: {}\n",
        response.overall_status.as_str()
    ));
    output.push_str(&format!("Rules evaluated: {}\n", response.total_rules));
    output.push_str(&format!("Violations: {}\n", response.violations_count));

    if !response.violations.is_empty() {
        output.push('\n');
        for violation in &response.violations {
            output.push_str(&format!(
                "  [{:?}] {}\n        {}\n",
                violation.severity, violation.rule_id, violation.details
            ));
        }
    }

    output
}
