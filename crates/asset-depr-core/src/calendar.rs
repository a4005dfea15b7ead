//! Fiscal-year closing date enumeration.
//!
//! A closing date is the last calendar day of the configured closing
//! month. An asset acquired on or before its year's closing month closes
//! first in the acquisition year, otherwise in the following year.

use chrono::{Datelike, NaiveDate};

use crate::error::AssetDeprError;
use crate::AssetDeprResult;

/// Last calendar day of the given month, handling 28/29/30/31-day
/// months and leap years. `None` only outside chrono's year range.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// All fiscal-year closings from an acquisition date through `today`.
///
/// `today` is an explicit parameter so the computation is deterministic;
/// callers read the clock once per run.
pub fn closing_dates(
    acquired: NaiveDate,
    year_closing_month: u32,
    today: NaiveDate,
) -> AssetDeprResult<ClosingDates> {
    if !(1..=12).contains(&year_closing_month) {
        return Err(AssetDeprError::InvalidClosingMonth {
            month: year_closing_month,
        });
    }

    let first_year = if acquired.month() <= year_closing_month {
        acquired.year()
    } else {
        acquired.year() + 1
    };

    Ok(ClosingDates {
        year: first_year,
        month: year_closing_month,
        today,
    })
}

/// Lazy iterator over fiscal-year closings, oldest first.
///
/// Strictly increasing, one closing per fiscal year, gap-free, every
/// item on or before `today`. Empty when the first closing is already
/// in the future.
#[derive(Debug, Clone)]
pub struct ClosingDates {
    year: i32,
    month: u32,
    today: NaiveDate,
}

impl Iterator for ClosingDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let date = last_day_of_month(self.year, self.month)?;
        if date > self.today {
            return None;
        }
        self.year += 1;
        Some(date)
    }
}
