//! Batch command - validate many product records concurrently.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use lmpc_core::{
    BatchRequest, CancellationFlag, OverallStatus, Pipeline, Severity, ValidationResponse,
};

use super::load_config;
use super::validate::OutputFormat;

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Batch request file (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Output directory for per-product reports
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each report
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers (overrides config)
    #[arg(short = 'j', long)]
    jobs: Option<usize>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let mut config = load_config(config_path)?;
    if let Some(jobs) = args.jobs {
        config.batch.workers = jobs;
    }

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let request = BatchRequest::from_json(&fs::read_to_string(&args.input)?)?;
    let total = request.products.len();

    let ack = Pipeline::acknowledge(&request);
    println!("{} Batch {}: {}", style("ℹ").blue(), ack.batch_id, ack.message);

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let pipeline = Arc::new(Pipeline::without_recognizer(config));

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Validating {} products...", total));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = pipeline
        .validate_batch(ack.batch_id, request, CancellationFlag::new())
        .await?;

    pb.finish_with_message("Validation complete");

    // Write per-product reports
    if let Some(ref output_dir) = args.output_dir {
        let extension = match args.format {
            OutputFormat::Json => "json",
            OutputFormat::Text => "txt",
        };

        for (i, response) in result.results.iter().enumerate() {
            let stem = response
                .product_id
                .clone()
                .unwrap_or_else(|| format!("product-{i:04}"));

            let content = match args.format {
                OutputFormat::Json => serde_json::to_string_pretty(response)?,
                OutputFormat::Text => super::validate::format_text(response),
            };

            let output_path = output_dir.join(format!("{}.{}", stem, extension));
            fs::write(&output_path, content)?;
            debug!("Wrote report to {}", output_path.display());
        }
    }

    // Generate summary if requested
    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &result.results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    // Print tally
    let compliant = count_status(&result.results, OverallStatus::Compliant);
    let partial = count_status(&result.results, OverallStatus::Partial);
    let non_compliant = count_status(&result.results, OverallStatus::NonCompliant);

    println!();
    println!(
        "{} Validated {} products in {:?}",
        style("✓").green(),
        result.completed,
        start.elapsed()
    );
    println!(
        "   {} compliant, {} partial, {} non-compliant",
        style(compliant).green(),
        style(partial).yellow(),
        style(non_compliant).red()
    );

    if non_compliant > 0 {
        println!();
        println!("{}", style("Non-compliant products:").red());
        for response in &result.results {
            if response.overall_status != OverallStatus::NonCompliant {
                continue;
            }
            println!(
                "  - {}: {} violations",
                response.product_id.as_deref().unwrap_or("(no id)"),
                response.violations_count
            );
        }
    }

    Ok(())
}

fn count_status(results: &[ValidationResponse], status: OverallStatus) -> usize {
    results.iter().filter(|r| r.overall_status == status).count()
}

fn write_summary(path: &PathBuf, results: &[ValidationResponse]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "product_id",
        "overall_status",
        "rules_evaluated",
        "violations",
        "critical",
        "high",
        "violated_rules",
    ])?;

    for response in results {
        let critical = response
            .violations
            .iter()
            .filter(|v| v.severity == Severity::Critical)
            .count();
        let high = response
            .violations
            .iter()
            .filter(|v| v.severity == Severity::High)
            .count();
        let rule_ids = response
            .violations
            .iter()
            .map(|v| v.rule_id.as_str())
            .collect::<Vec<_>>()
            .join(";");

        wtr.write_record([
            response.product_id.as_deref().unwrap_or(""),
            response.overall_status.as_str(),
            &response.total_rules.to_string(),
            &response.violations_count.to_string(),
            &critical.to_string(),
            &high.to_string(),
            &rule_ids,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
