//! Parsing of the `depreciation` posting metadata value.
//!
//! The metadata string has the form `"NARRATION @RATE"`, e.g.
//! `"Printer Depreciation @0.60"` for a 60% declining-balance rate.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::AssetDeprError;
use crate::types::Rate;
use crate::AssetDeprResult;

/// Parsed depreciation marker for one asset posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationSpec {
    /// Narration used for the generated entries.
    pub narration: String,
    /// Yearly declining-balance rate as a fraction (0.60 = 60%).
    pub rate: Rate,
}

impl DepreciationSpec {
    /// Build a spec, enforcing the rate and narration bounds.
    ///
    /// The rate must lie strictly between 0 and 1: anything else would
    /// either generate no depreciation or drive the book value to zero
    /// or below in one step.
    pub fn new(narration: impl Into<String>, rate: Rate) -> AssetDeprResult<Self> {
        let narration = narration.into();
        if narration.trim().is_empty() {
            return Err(AssetDeprError::MetadataFormat {
                value: narration,
                reason: "narration is empty".into(),
            });
        }
        if rate <= Decimal::ZERO || rate >= Decimal::ONE {
            return Err(AssetDeprError::MetadataFormat {
                value: rate.to_string(),
                reason: "rate must be a fraction strictly between 0 and 1".into(),
            });
        }
        Ok(Self {
            narration: narration.trim().to_string(),
            rate,
        })
    }

    /// Parse a `"NARRATION @RATE"` metadata value.
    ///
    /// Splits on the last `@` so narrations containing `@` still parse.
    pub fn parse(value: &str) -> AssetDeprResult<Self> {
        let Some((narration, rate_text)) = value.rsplit_once('@') else {
            return Err(AssetDeprError::MetadataFormat {
                value: value.to_string(),
                reason: "missing '@RATE' separator".into(),
            });
        };

        let rate = Decimal::from_str(rate_text.trim()).map_err(|_| {
            AssetDeprError::MetadataFormat {
                value: value.to_string(),
                reason: format!("rate '{}' is not a decimal", rate_text.trim()),
            }
        })?;

        Self::new(narration, rate).map_err(|_| AssetDeprError::MetadataFormat {
            value: value.to_string(),
            reason: if narration.trim().is_empty() {
                "narration is empty".into()
            } else {
                "rate must be a fraction strictly between 0 and 1".into()
            },
        })
    }

    /// First whitespace-delimited word of the narration, used as the
    /// expense subaccount leaf.
    pub fn category(&self) -> &str {
        self.narration.split_whitespace().next().unwrap_or_default()
    }
}
