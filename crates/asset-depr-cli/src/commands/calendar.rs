use chrono::{Local, NaiveDate};
use clap::Args;
use serde_json::{json, Value};

use asset_depr_core::calendar::closing_dates;

/// Arguments for listing fiscal-year closing dates
#[derive(Args)]
pub struct ClosingDatesArgs {
    /// Acquisition date (YYYY-MM-DD)
    #[arg(long)]
    pub date: NaiveDate,

    /// Fiscal-year closing month (1-12)
    #[arg(long, default_value = "12")]
    pub closing_month: u32,

    /// Run date (YYYY-MM-DD); defaults to the local date
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

pub fn run_closing_dates(args: ClosingDatesArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let dates: Vec<NaiveDate> = closing_dates(args.date, args.closing_month, today)?.collect();
    let count = dates.len();

    Ok(json!({
        "closing_dates": dates,
        "count": count,
    }))
}
