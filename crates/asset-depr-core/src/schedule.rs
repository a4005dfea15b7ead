//! Declining-balance schedule generation for one depreciable posting.
//!
//! Walks the fiscal-year closing dates in order, maintaining the
//! remaining book value, and emits one balanced two-leg entry per
//! closing: a negative leg against the asset account and a matching
//! positive leg against the depreciation expense account.

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{Config, Method};
use crate::ledger::{Entry, Posting, AUTO_DEPRECIATION_TAG};
use crate::metadata::DepreciationSpec;
use crate::types::{Amount, Rate};

/// WDV half-rate threshold: usage under this many days in the first
/// fiscal year halves the allowed rate.
const SHORT_USAGE_DAYS: i64 = 180;

const WDV_HALF_SUFFIX: &str = " - Half Depreciation (<180days)";
const CRA_HALF_SUFFIX: &str = " - Half Depreciation (Same year)";

/// An asset posting marked for depreciation, extracted from the ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciablePosting {
    /// Asset account holding the depreciable value.
    pub account: String,
    /// Date of the acquiring entry.
    pub acquired: NaiveDate,
    /// Original value at acquisition.
    pub original_value: Amount,
    /// Parsed `depreciation` metadata.
    pub spec: DepreciationSpec,
}

/// Generate the depreciation entries for one posting across the given
/// closing dates, oldest first.
///
/// A pure fold: each step computes the year's depreciation from the
/// remaining book value and the effective rate, so depreciation
/// compounds on the declining balance. The residual value stays
/// internal; callers derive totals from the entries.
pub fn schedule(
    posting: &DepreciablePosting,
    config: &Config,
    dates: impl IntoIterator<Item = NaiveDate>,
) -> Vec<Entry> {
    let asset_account = if config.asset_subaccount {
        format!("{}:Depreciation", posting.account)
    } else {
        posting.account.clone()
    };
    let expense_account = if config.expense_subaccount {
        format!("{}:{}", config.account, posting.spec.category())
    } else {
        config.account.clone()
    };

    let mut entries = Vec::new();
    let mut current_value = posting.original_value.number;

    for date in dates {
        let (rate, suffix) = select_rate(config, posting.acquired, date, posting.spec.rate);
        let effective_rate = rate * config.multiplier_for(date.year());

        // Full decimal precision; rounding is the ledger's concern.
        let current_depr = current_value * effective_rate;
        let currency = posting.original_value.currency.clone();

        entries.push(Entry {
            date,
            flag: '*',
            payee: None,
            narration: format!("{}{}", posting.spec.narration, suffix),
            tags: BTreeSet::from([AUTO_DEPRECIATION_TAG.to_string()]),
            postings: vec![
                Posting::new(
                    asset_account.clone(),
                    Amount::new(-current_depr, currency.clone()),
                ),
                Posting::new(expense_account.clone(), Amount::new(current_depr, currency)),
            ],
        });

        current_value -= current_depr;
    }

    entries
}

/// Rate for one closing date: the full yearly rate, or half of it when
/// the method's short-first-year rule applies.
fn select_rate(
    config: &Config,
    acquired: NaiveDate,
    closing: NaiveDate,
    rate: Rate,
) -> (Rate, &'static str) {
    match config.method {
        Method::Wdv => {
            let used_days = (closing - acquired).num_days();
            if config.half_depr && used_days < SHORT_USAGE_DAYS {
                (rate / Decimal::TWO, WDV_HALF_SUFFIX)
            } else {
                (rate, "")
            }
        }
        Method::Cra => {
            if config.half_depr && closing < first_anniversary(acquired) {
                (rate / Decimal::TWO, CRA_HALF_SUFFIX)
            } else {
                (rate, "")
            }
        }
    }
}

/// One year after acquisition. A Feb 29 acquisition rolls over to
/// Mar 1 in non-leap years.
fn first_anniversary(acquired: NaiveDate) -> NaiveDate {
    match NaiveDate::from_ymd_opt(acquired.year() + 1, acquired.month(), acquired.day()) {
        Some(date) => date,
        None => acquired
            .with_day(28)
            .and_then(|d| d.with_year(acquired.year() + 1))
            .and_then(|d| d.checked_add_days(Days::new(1)))
            .unwrap_or(acquired),
    }
}
