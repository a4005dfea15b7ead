use std::collections::BTreeMap;

use asset_depr_core::types::{Amount, Currency};
use asset_depr_core::{
    depreciate, AssetDeprError, Config, Entry, Method, Posting, DEPRECIATION_META_KEY,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn purchase(
    day: NaiveDate,
    account: &str,
    value: rust_decimal::Decimal,
    meta_value: &str,
) -> Entry {
    let mut asset = Posting::new(account, Amount::new(value, Currency::INR));
    asset.meta = BTreeMap::from([(DEPRECIATION_META_KEY.to_string(), meta_value.to_string())]);
    Entry {
        date: day,
        flag: '*',
        payee: None,
        narration: format!("{} Purchase", account),
        tags: Default::default(),
        postings: vec![
            Posting::new("Assets:Cash", Amount::new(-value, Currency::INR)),
            asset,
        ],
    }
}

// ===========================================================================
// Whole-pass behavior
// ===========================================================================

#[test]
fn test_pass_generates_per_posting_schedules_in_scan_order() {
    let entries = vec![
        purchase(
            date(2014, 3, 2),
            "Assets:Fixed:Comp",
            dec!(100.00),
            "Printer Depreciation @0.60",
        ),
        purchase(
            date(2015, 7, 1),
            "Assets:Fixed:Furniture",
            dec!(500.00),
            "Desk Depreciation @0.10",
        ),
    ];
    let run = depreciate(entries, &Config::default(), date(2016, 6, 1)).unwrap();

    // 2 originals + 2 printer closings + 1 desk closing.
    assert_eq!(run.entries.len(), 5);
    assert!(run.diagnostics.is_empty());

    let generated: Vec<_> = run
        .entries
        .iter()
        .filter(|e| e.is_auto_depreciation())
        .collect();
    assert_eq!(generated.len(), 3);

    // Printer's block first (scan order), dates increasing within it.
    assert_eq!(generated[0].date, date(2014, 12, 31));
    assert_eq!(generated[1].date, date(2015, 12, 31));
    assert_eq!(generated[2].date, date(2015, 12, 31));
    assert_eq!(generated[2].postings[1].account, "Expenses:Depreciation");
    // Desk used 183 days by closing, so the 180-day half rule does not
    // apply: 500.00 * 0.10 = 50.00.
    assert_eq!(generated[2].narration, "Desk Depreciation");
    assert_eq!(generated[2].postings[1].amount.number, dec!(50.00));
}

#[test]
fn test_malformed_metadata_skips_only_that_posting() {
    let entries = vec![
        purchase(
            date(2014, 3, 2),
            "Assets:Fixed:Comp",
            dec!(100.00),
            "Printer Depreciation",
        ),
        purchase(
            date(2014, 3, 2),
            "Assets:Fixed:Furniture",
            dec!(500.00),
            "Desk Depreciation @0.10",
        ),
    ];
    let run = depreciate(entries, &Config::default(), date(2016, 6, 1)).unwrap();

    assert_eq!(run.diagnostics.len(), 1);
    assert_eq!(run.diagnostics[0].account, "Assets:Fixed:Comp");
    assert!(matches!(
        run.diagnostics[0].error,
        AssetDeprError::MetadataFormat { .. }
    ));

    let generated: Vec<_> = run
        .entries
        .iter()
        .filter(|e| e.is_auto_depreciation())
        .collect();
    assert_eq!(generated.len(), 2);
    for entry in generated {
        assert_eq!(entry.postings[0].account, "Assets:Fixed:Furniture");
    }
}

#[test]
fn test_fatal_config_produces_no_output() {
    let entries = vec![purchase(
        date(2014, 3, 2),
        "Assets:Fixed:Comp",
        dec!(100.00),
        "Printer Depreciation @0.60",
    )];
    let config = Config {
        year_closing_month: 13,
        ..Config::default()
    };
    let err = depreciate(entries, &config, date(2016, 6, 1)).unwrap_err();
    assert!(err.is_fatal());
}

#[test]
fn test_acquisition_after_last_closing_generates_nothing() {
    let entries = vec![purchase(
        date(2016, 1, 15),
        "Assets:Fixed:Comp",
        dec!(100.00),
        "Printer Depreciation @0.60",
    )];
    let run = depreciate(entries, &Config::default(), date(2016, 6, 1)).unwrap();
    assert_eq!(run.entries.len(), 1);
    assert!(run.diagnostics.is_empty());
}

#[test]
fn test_cra_with_march_closing_and_multiplier() {
    let entries = vec![purchase(
        date(2014, 3, 2),
        "Assets:Fixed:Comp",
        dec!(100.00),
        "Printer Depreciation @0.60",
    )];
    let config = Config {
        method: Method::Cra,
        year_closing_month: 3,
        year_multipliers: BTreeMap::from([(2015, dec!(0.5))]),
        ..Config::default()
    };
    let run = depreciate(entries, &config, date(2016, 6, 1)).unwrap();

    let generated: Vec<_> = run
        .entries
        .iter()
        .filter(|e| e.is_auto_depreciation())
        .collect();
    // Closings 2014-03-31, 2015-03-31, 2016-03-31.
    assert_eq!(generated.len(), 3);
    // 2014-03-31 precedes the 2015-03-02 anniversary: 100 * 0.30 = 30.00
    assert_eq!(generated[0].postings[1].amount.number, dec!(30.00));
    // 2015 carries the 0.5 multiplier: 70 * 0.60 * 0.5 = 21.00
    assert_eq!(generated[1].postings[1].amount.number, dec!(21.00));
    // 2016 back to the full rate: 49 * 0.60 = 29.40
    assert_eq!(generated[2].postings[1].amount.number, dec!(29.40));
}

#[test]
fn test_every_generated_entry_balances() {
    let entries = vec![purchase(
        date(2010, 5, 20),
        "Assets:Fixed:Comp",
        dec!(1234.56),
        "Server Depreciation @0.40",
    )];
    let run = depreciate(entries, &Config::default(), date(2020, 1, 1)).unwrap();
    for entry in run.entries.iter().filter(|e| e.is_auto_depreciation()) {
        assert!(entry.is_balanced());
        assert_eq!(entry.flag, '*');
        assert_eq!(entry.payee, None);
    }
}
