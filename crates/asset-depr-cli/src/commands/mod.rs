pub mod calendar;
pub mod run;
pub mod schedule;

use clap::Args;
use rust_decimal::Decimal;

use asset_depr_core::{Config, Method};

/// Configuration flags shared by the `run` and `schedule` subcommands.
/// Each maps onto one field of the core `Config`.
#[derive(Args)]
pub struct ConfigArgs {
    /// Depreciation method (WDV or CRA)
    #[arg(long)]
    pub method: Option<String>,

    /// Fiscal-year closing month (1-12)
    #[arg(long)]
    pub closing_month: Option<u32>,

    /// Apply the half-rate rule for short first-year usage
    #[arg(long, value_name = "BOOL")]
    pub half_depr: Option<bool>,

    /// Account to post depreciation expense to
    #[arg(long)]
    pub account: Option<String>,

    /// Post expense to a subaccount named after the narration's first word
    #[arg(long)]
    pub expense_subaccount: bool,

    /// Post the asset leg to an ":Depreciation" subaccount
    #[arg(long)]
    pub asset_subaccount: bool,

    /// Per-fiscal-year rate multiplier (repeatable), e.g. 2010=0.5
    #[arg(long, value_name = "YEAR=FACTOR")]
    pub year_multiplier: Vec<String>,
}

impl ConfigArgs {
    /// Build and validate a core configuration from the flags.
    pub fn into_config(self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = Config::default();

        if let Some(method) = self.method {
            config.method = method.parse::<Method>()?;
        }
        if let Some(month) = self.closing_month {
            config.year_closing_month = month;
        }
        if let Some(half_depr) = self.half_depr {
            config.half_depr = half_depr;
        }
        if let Some(account) = self.account {
            config.account = account;
        }
        config.expense_subaccount = self.expense_subaccount;
        config.asset_subaccount = self.asset_subaccount;

        for pair in self.year_multiplier {
            let (year, factor) = pair
                .split_once('=')
                .ok_or_else(|| format!("invalid --year-multiplier '{pair}': expected YEAR=FACTOR"))?;
            let year: i32 = year
                .trim()
                .parse()
                .map_err(|_| format!("invalid --year-multiplier year '{year}'"))?;
            let factor: Decimal = factor
                .trim()
                .parse()
                .map_err(|_| format!("invalid --year-multiplier factor '{factor}'"))?;
            config.year_multipliers.insert(year, factor);
        }

        config.validate()?;
        Ok(config)
    }
}
