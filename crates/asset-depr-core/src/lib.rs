pub mod calendar;
pub mod config;
pub mod depreciate;
pub mod error;
pub mod ledger;
pub mod metadata;
pub mod schedule;
pub mod types;

pub use config::{Config, Method};
pub use depreciate::{depreciate, DepreciationRun, Diagnostic};
pub use error::AssetDeprError;
pub use ledger::{Entry, Posting, AUTO_DEPRECIATION_TAG, DEPRECIATION_META_KEY};
pub use metadata::DepreciationSpec;
pub use schedule::{schedule, DepreciablePosting};
pub use types::*;

/// Standard result type for all depreciation operations
pub type AssetDeprResult<T> = Result<T, AssetDeprError>;
