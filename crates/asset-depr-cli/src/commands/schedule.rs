use chrono::{Local, NaiveDate};
use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use asset_depr_core::calendar::closing_dates;
use asset_depr_core::schedule::{schedule, DepreciablePosting};
use asset_depr_core::types::{Amount, Currency};
use asset_depr_core::DepreciationSpec;

use crate::commands::ConfigArgs;
use crate::input;

/// Arguments for a single-posting schedule
#[derive(Args)]
pub struct ScheduleArgs {
    /// Asset account holding the depreciable value
    #[arg(long)]
    pub asset_account: Option<String>,

    /// Acquisition date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Original value at acquisition
    #[arg(long)]
    pub value: Option<Decimal>,

    /// Currency of the original value
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Yearly rate as a fraction, e.g. 0.60 for 60%
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Narration for the generated entries
    #[arg(long)]
    pub narration: Option<String>,

    /// Path to a JSON posting file (overrides individual flags)
    #[arg(long)]
    pub posting: Option<String>,

    #[command(flatten)]
    pub config_flags: ConfigArgs,

    /// Run date (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let posting: DepreciablePosting = if let Some(ref path) = args.posting {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        let narration = args
            .narration
            .ok_or("--narration is required (or provide --posting)")?;
        let rate = args.rate.ok_or("--rate is required (or provide --posting)")?;
        DepreciablePosting {
            account: args
                .asset_account
                .ok_or("--asset-account is required (or provide --posting)")?,
            acquired: args.date.ok_or("--date is required (or provide --posting)")?,
            original_value: Amount::new(
                args.value.ok_or("--value is required (or provide --posting)")?,
                Currency::from(args.currency.as_str()),
            ),
            spec: DepreciationSpec::new(narration, rate)?,
        }
    };

    let config = args.config_flags.into_config()?;
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    let dates = closing_dates(posting.acquired, config.year_closing_month, today)?;
    let entries = schedule(&posting, &config, dates);

    let total_depreciation: Decimal = entries
        .iter()
        .map(|e| e.postings[1].amount.number)
        .sum();
    let residual_value = posting.original_value.number - total_depreciation;
    let currency = posting.original_value.currency.code().to_string();

    Ok(json!({
        "posting": posting,
        "entries": entries,
        "total_depreciation": total_depreciation,
        "residual_value": residual_value,
        "currency": currency,
    }))
}
