use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetDeprError {
    #[error("Unsupported depreciation method '{method}': expected WDV or CRA")]
    UnsupportedMethod { method: String },

    #[error("Invalid year-closing month {month}: expected a month in 1..=12")]
    InvalidClosingMonth { month: u32 },

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfiguration { field: String, reason: String },

    #[error("Invalid depreciation metadata '{value}': {reason}")]
    MetadataFormat { value: String, reason: String },

    #[error("Date error: {0}")]
    Date(String),
}

impl AssetDeprError {
    /// Fatal errors invalidate every posting's schedule and abort the run.
    /// Metadata errors are scoped to a single posting and surface as
    /// diagnostics while the rest of the run continues.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, AssetDeprError::MetadataFormat { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality_split() {
        assert!(AssetDeprError::UnsupportedMethod {
            method: "SLN".into()
        }
        .is_fatal());
        assert!(AssetDeprError::InvalidClosingMonth { month: 13 }.is_fatal());
        assert!(!AssetDeprError::MetadataFormat {
            value: "Printer Depreciation".into(),
            reason: "missing '@RATE' separator".into()
        }
        .is_fatal());
    }
}
