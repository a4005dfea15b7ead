//! Typed run configuration.
//!
//! Replaces the free-form option dict of the original plugin surface with
//! named, defaulted fields. Unknown keys are rejected at deserialization;
//! per-year rate multipliers live in an explicit map keyed by fiscal year.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AssetDeprError;
use crate::AssetDeprResult;

/// Default account generated depreciation expense is posted to.
pub const DEFAULT_EXPENSE_ACCOUNT: &str = "Expenses:Depreciation";

/// Declining-balance method applied at each fiscal-year closing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Written-Down Value: a fixed rate applied to the remaining value,
    /// with an optional half rate when the asset was used under 180 days.
    #[default]
    Wdv,
    /// Canadian Revenue Agency: assets acquired during the closing fiscal
    /// year get half the normal rate in their first year.
    Cra,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Wdv => f.write_str("WDV"),
            Method::Cra => f.write_str("CRA"),
        }
    }
}

impl FromStr for Method {
    type Err = AssetDeprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "WDV" => Ok(Method::Wdv),
            "CRA" => Ok(Method::Cra),
            _ => Err(AssetDeprError::UnsupportedMethod {
                method: s.to_string(),
            }),
        }
    }
}

/// Configuration for one depreciation run. Built once, immutable after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Depreciation method.
    pub method: Method,
    /// Month (1-12) whose last day closes each fiscal year.
    pub year_closing_month: u32,
    /// Apply the half-rate rule for short first-year usage.
    pub half_depr: bool,
    /// Account the expense leg is posted to.
    pub account: String,
    /// Append the narration's first word to the expense account,
    /// e.g. `Expenses:Depreciation:Printer`.
    pub expense_subaccount: bool,
    /// Post the asset leg to an `:Depreciation` subaccount,
    /// e.g. `Assets:Fixed:Comp:Depreciation`.
    pub asset_subaccount: bool,
    /// Per-fiscal-year rate multipliers, e.g. `{2010: 0.5}` for a
    /// business open only half of 2010. Years not present default to 1.
    pub year_multipliers: BTreeMap<i32, Decimal>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            method: Method::default(),
            year_closing_month: 12,
            half_depr: true,
            account: DEFAULT_EXPENSE_ACCOUNT.to_string(),
            expense_subaccount: false,
            asset_subaccount: false,
            year_multipliers: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Validate eagerly and completely, before any posting is processed.
    /// Any failure here is fatal for the whole run.
    pub fn validate(&self) -> AssetDeprResult<()> {
        if !(1..=12).contains(&self.year_closing_month) {
            return Err(AssetDeprError::InvalidClosingMonth {
                month: self.year_closing_month,
            });
        }
        if self.account.trim().is_empty() {
            return Err(AssetDeprError::InvalidConfiguration {
                field: "account".into(),
                reason: "expense account must not be empty".into(),
            });
        }
        for (year, multiplier) in &self.year_multipliers {
            // Above 1 an effective rate could reach 1 and push book
            // value to zero or below.
            if *multiplier <= Decimal::ZERO || *multiplier > Decimal::ONE {
                return Err(AssetDeprError::InvalidConfiguration {
                    field: format!("year_multipliers.{year}"),
                    reason: format!("multiplier {multiplier} must be in (0, 1]"),
                });
            }
        }
        Ok(())
    }

    /// Rate multiplier for the fiscal year a closing date falls in.
    pub fn multiplier_for(&self, year: i32) -> Decimal {
        self.year_multipliers
            .get(&year)
            .copied()
            .unwrap_or(Decimal::ONE)
    }
}
