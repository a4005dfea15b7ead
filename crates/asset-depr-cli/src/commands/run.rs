use chrono::{Local, NaiveDate};
use clap::Args;
use serde_json::{json, Value};

use asset_depr_core::{depreciate, Config, Entry};

use crate::commands::ConfigArgs;
use crate::input;

/// Arguments for the full depreciation pass
#[derive(Args)]
pub struct RunArgs {
    /// Path to a JSON ledger file (array of entries; read from stdin when piped)
    #[arg(long)]
    pub ledger: Option<String>,

    /// Path to a JSON configuration file (overrides individual flags)
    #[arg(long)]
    pub config: Option<String>,

    #[command(flatten)]
    pub config_flags: ConfigArgs,

    /// Run date (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Print only the generated entries, not the full ledger
    #[arg(long)]
    pub generated_only: bool,
}

pub fn run_pass(args: RunArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let entries: Vec<Entry> = if let Some(ref path) = args.ledger {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--ledger is required (or pipe a JSON ledger on stdin)".into());
    };

    let config: Config = if let Some(ref path) = args.config {
        input::read_json(path)?
    } else {
        args.config_flags.into_config()?
    };

    // The clock is read once; everything downstream is deterministic.
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let run = depreciate(entries, &config, today)?;
    let generated: Vec<&Entry> = run
        .entries
        .iter()
        .filter(|e| e.is_auto_depreciation())
        .collect();
    let generated = serde_json::to_value(&generated)?;
    let diagnostics = serde_json::to_value(&run.diagnostics)?;

    if args.generated_only {
        Ok(json!({
            "generated": generated,
            "diagnostics": diagnostics,
        }))
    } else {
        Ok(json!({
            "entries": run.entries,
            "generated": generated,
            "diagnostics": diagnostics,
        }))
    }
}
