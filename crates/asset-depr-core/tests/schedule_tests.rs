use std::collections::BTreeMap;

use asset_depr_core::calendar::{closing_dates, last_day_of_month};
use asset_depr_core::schedule::{schedule, DepreciablePosting};
use asset_depr_core::types::{Amount, Currency};
use asset_depr_core::{AssetDeprError, Config, DepreciationSpec, Method};
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn printer() -> DepreciablePosting {
    DepreciablePosting {
        account: "Assets:Fixed:Comp".into(),
        acquired: date(2014, 3, 2),
        original_value: Amount::new(dec!(100.00), Currency::INR),
        spec: DepreciationSpec::new("Printer Depreciation", dec!(0.60)).unwrap(),
    }
}

// ===========================================================================
// Fiscal calendar
// ===========================================================================

#[test]
fn test_closing_dates_are_month_ends_up_to_today() {
    for month in 1..=12 {
        let dates: Vec<_> = closing_dates(date(2010, 6, 15), month, date(2020, 6, 15))
            .unwrap()
            .collect();
        assert!(!dates.is_empty());
        for d in &dates {
            assert_eq!(d.month(), month);
            assert_eq!(Some(*d), last_day_of_month(d.year(), month));
            assert!(*d <= date(2020, 6, 15));
        }
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}

#[test]
fn test_fiscal_year_ending_march() {
    // Indian fiscal year: April through March.
    let dates: Vec<_> = closing_dates(date(2014, 3, 2), 3, date(2016, 6, 1))
        .unwrap()
        .collect();
    assert_eq!(
        dates,
        vec![date(2014, 3, 31), date(2015, 3, 31), date(2016, 3, 31)]
    );
}

#[test]
fn test_closing_month_out_of_range_is_fatal() {
    let err = closing_dates(date(2014, 3, 2), 13, date(2016, 6, 1)).unwrap_err();
    assert!(matches!(err, AssetDeprError::InvalidClosingMonth { month: 13 }));
    assert!(err.is_fatal());
}

// ===========================================================================
// WDV worked example
// ===========================================================================

#[test]
fn test_wdv_printer_example() {
    // Acquired 2014-03-02, 100.00 INR at 0.60, today 2016-06-01.
    // Closings: 2014-12-31, 2015-12-31.
    // Year 1: 100.00 * 0.60 = 60.00, residual 40.00
    // Year 2:  40.00 * 0.60 = 24.00, residual 16.00
    let config = Config {
        half_depr: false,
        ..Config::default()
    };
    let dates = closing_dates(date(2014, 3, 2), 12, date(2016, 6, 1)).unwrap();
    let entries = schedule(&printer(), &config, dates);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].date, date(2014, 12, 31));
    assert_eq!(entries[0].postings[1].amount.number, dec!(60.00));
    assert_eq!(entries[1].date, date(2015, 12, 31));
    assert_eq!(entries[1].postings[1].amount.number, dec!(24.00));

    let total: Decimal = entries.iter().map(|e| e.postings[1].amount.number).sum();
    assert_eq!(dec!(100.00) - total, dec!(16.00));
}

// ===========================================================================
// CRA worked example
// ===========================================================================

#[test]
fn test_cra_half_rate_first_year_example() {
    // Same posting under CRA with half_depr: 2014-12-31 precedes the
    // 2015-03-02 anniversary, so the first year runs at 0.30.
    let config = Config {
        method: Method::Cra,
        ..Config::default()
    };
    let dates = closing_dates(date(2014, 3, 2), 12, date(2016, 6, 1)).unwrap();
    let entries = schedule(&printer(), &config, dates);

    assert_eq!(entries[0].postings[1].amount.number, dec!(30.00));
    assert_eq!(
        entries[0].narration,
        "Printer Depreciation - Half Depreciation (Same year)"
    );
    // Year 2 at the full rate: 70.00 * 0.60 = 42.00
    assert_eq!(entries[1].postings[1].amount.number, dec!(42.00));
    assert_eq!(entries[1].narration, "Printer Depreciation");
}

// ===========================================================================
// Cross-cutting properties
// ===========================================================================

#[test]
fn test_declining_balance_property() {
    let config = Config {
        method: Method::Cra,
        year_multipliers: BTreeMap::from([(2017, dec!(0.5))]),
        ..Config::default()
    };
    let dates = closing_dates(date(2014, 3, 2), 12, date(2024, 1, 1)).unwrap();
    let entries = schedule(&printer(), &config, dates);
    assert_eq!(entries.len(), 10);

    let mut residual = dec!(100.00);
    for entry in &entries {
        // Both legs balance exactly.
        assert_eq!(
            entry.postings[0].amount.number,
            -entry.postings[1].amount.number
        );
        assert!(entry.is_balanced());
        residual -= entry.postings[1].amount.number;
        assert!(residual > Decimal::ZERO);
    }
}

#[test]
fn test_output_matches_input_date_order() {
    let dates: Vec<_> = closing_dates(date(2014, 3, 2), 12, date(2024, 1, 1))
        .unwrap()
        .collect();
    let entries = schedule(&printer(), &Config::default(), dates.clone());
    assert_eq!(entries.len(), dates.len());
    for (entry, d) in entries.iter().zip(&dates) {
        assert_eq!(entry.date, *d);
    }
}

#[test]
fn test_currency_follows_the_posting() {
    let posting = DepreciablePosting {
        original_value: Amount::new(dec!(100.00), Currency::CAD),
        ..printer()
    };
    let entries = schedule(&posting, &Config::default(), vec![date(2014, 12, 31)]);
    assert_eq!(entries[0].postings[0].amount.currency, Currency::CAD);
    assert_eq!(entries[0].postings[1].amount.currency, Currency::CAD);
}
