//! The depreciation pass over a ledger entry sequence.
//!
//! Scans every posting for the `depreciation` metadata key, generates
//! each candidate's schedule, and appends the generated entries after
//! the originals. Malformed metadata is collected as a diagnostic for
//! its posting while the rest of the run continues; configuration
//! problems abort the whole run before any posting is touched.

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::calendar::closing_dates;
use crate::config::Config;
use crate::error::AssetDeprError;
use crate::ledger::{Entry, DEPRECIATION_META_KEY};
use crate::metadata::DepreciationSpec;
use crate::schedule::{schedule, DepreciablePosting};
use crate::AssetDeprResult;

/// Non-fatal problem with one posting's depreciation metadata.
#[derive(Debug, Serialize)]
pub struct Diagnostic {
    /// Account of the offending posting.
    pub account: String,
    /// Date of the entry holding the posting.
    pub date: NaiveDate,
    /// What went wrong.
    #[serde(serialize_with = "serialize_display")]
    pub error: AssetDeprError,
}

fn serialize_display<S: Serializer>(
    error: &AssetDeprError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Result of one depreciation pass.
#[derive(Debug, Serialize)]
pub struct DepreciationRun {
    /// The original entries with the generated ones appended. Merging
    /// generated entries into chronological order is the caller's
    /// concern.
    pub entries: Vec<Entry>,
    /// Non-fatal diagnostics, one per skipped posting.
    pub diagnostics: Vec<Diagnostic>,
}

/// Run the depreciation pass over a ledger as of `today`.
///
/// Pure over its inputs: the same entries, configuration, and `today`
/// always produce the same output.
pub fn depreciate(
    mut entries: Vec<Entry>,
    config: &Config,
    today: NaiveDate,
) -> AssetDeprResult<DepreciationRun> {
    config.validate()?;

    let mut candidates = Vec::new();
    let mut diagnostics = Vec::new();

    // Scan order: entry order, then posting order within the entry.
    for entry in &entries {
        for posting in &entry.postings {
            let Some(value) = posting.meta.get(DEPRECIATION_META_KEY) else {
                continue;
            };
            match DepreciationSpec::parse(value) {
                Ok(spec) => candidates.push(DepreciablePosting {
                    account: posting.account.clone(),
                    acquired: entry.date,
                    original_value: posting.amount.clone(),
                    spec,
                }),
                Err(error) => diagnostics.push(Diagnostic {
                    account: posting.account.clone(),
                    date: entry.date,
                    error,
                }),
            }
        }
    }

    for posting in &candidates {
        let dates = closing_dates(posting.acquired, config.year_closing_month, today)?;
        entries.extend(schedule(posting, config, dates));
    }

    Ok(DepreciationRun {
        entries,
        diagnostics,
    })
}
