//! In-memory ledger entries and postings.
//!
//! The depreciation pass consumes and produces this model; reading or
//! writing any on-disk ledger format is the caller's concern.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Amount;

/// Tag carried by every generated depreciation entry, distinguishing them
/// from manually entered ones.
pub const AUTO_DEPRECIATION_TAG: &str = "AUTO-DEPRECIATION";

/// Posting metadata key that marks a depreciable asset posting. Its value
/// has the form `"NARRATION @RATE"`.
pub const DEPRECIATION_META_KEY: &str = "depreciation";

fn default_flag() -> char {
    '*'
}

/// One leg of an entry: an account and the amount posted to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    /// Colon-separated account path, e.g. `"Assets:Fixed:Comp"`.
    pub account: String,
    /// Amount posted to the account.
    pub amount: Amount,
    /// Free-form posting metadata.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, String>,
}

impl Posting {
    pub fn new(account: impl Into<String>, amount: Amount) -> Self {
        Self {
            account: account.into(),
            amount,
            meta: BTreeMap::new(),
        }
    }
}

/// A dated ledger entry holding balanced postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry date.
    pub date: NaiveDate,
    /// Transaction flag, `'*'` unless stated otherwise.
    #[serde(default = "default_flag")]
    pub flag: char,
    /// Optional payee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payee: Option<String>,
    /// Narration describing the entry.
    pub narration: String,
    /// Entry tags.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    /// The entry's legs.
    pub postings: Vec<Posting>,
}

impl Entry {
    /// True when the posting amounts sum to zero within every currency.
    pub fn is_balanced(&self) -> bool {
        let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
        for posting in &self.postings {
            *totals.entry(posting.amount.currency.code()).or_default() += posting.amount.number;
        }
        totals.values().all(Decimal::is_zero)
    }

    /// True for entries produced by the depreciation pass.
    pub fn is_auto_depreciation(&self) -> bool {
        self.tags.contains(AUTO_DEPRECIATION_TAG)
    }
}
