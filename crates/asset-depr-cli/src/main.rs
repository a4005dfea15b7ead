mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::calendar::ClosingDatesArgs;
use commands::run::RunArgs;
use commands::schedule::ScheduleArgs;

/// Fixed-asset depreciation schedules for ledger entries
#[derive(Parser)]
#[command(
    name = "depr",
    version,
    about = "Generate fixed-asset depreciation schedules",
    long_about = "A CLI for generating declining-balance depreciation schedules \
                  with decimal precision. Supports the Written-Down Value (WDV) \
                  and Canadian Revenue Agency (CRA) methods, configurable fiscal \
                  year closing, half-rate first-year rules, and per-year rate \
                  multipliers."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the depreciation pass over a JSON ledger
    Run(RunArgs),
    /// Generate the schedule for a single depreciable posting
    Schedule(ScheduleArgs),
    /// List fiscal-year closing dates for an acquisition date
    ClosingDates(ClosingDatesArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Run(args) => commands::run::run_pass(args),
        Commands::Schedule(args) => commands::schedule::run_schedule(args),
        Commands::ClosingDates(args) => commands::calendar::run_closing_dates(args),
        Commands::Version => {
            println!("depr {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
