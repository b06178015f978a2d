//! Rules command - list the active rule catalogue.

use clap::Args;
use console::style;

use lmpc_core::rule_infos;

use super::validate::OutputFormat;

/// Arguments for the rules command.
#[derive(Args)]
pub struct RulesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub async fn run(args: RulesArgs) -> anyhow::Result<()> {
    let infos = rule_infos();

    if matches!(args.format, OutputFormat::Json) {
        println!("{}", serde_json::to_string_pretty(&infos)?);
        return Ok(());
    }

    println!("{} active rules", infos.len());
    println!();

    for info in infos {
        println!(
            "{} {}",
            style(&info.rule_id).cyan().bold(),
            style(format!("[{:?}]", info.severity)).yellow()
        );
        println!("    {}", info.description);
        println!("    field: {}  applies: {}", info.field, info.applicability);
        println!();
    }

    Ok(())
}
