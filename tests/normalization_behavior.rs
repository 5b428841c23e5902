//! Behavior-driven tests for dataset loading and normalization
//!
//! These tests verify WHAT ends up in the catalog for realistic, partially
//! incomplete coin datasets.

use coinstats_core::{
    load_from_path, load_from_str, normalize, CoinId, CoreError, RawDataset, RawRecord, RawValue,
};
use std::fs;
use tempfile::tempdir;

const FIXTURE: &str = include_str!("fixtures/coins.json");

fn coin(id: &str) -> CoinId {
    CoinId::parse(id).expect("valid coin id")
}

// =============================================================================
// Normalization: Incomplete Records
// =============================================================================

#[test]
fn when_a_record_lacks_volume_it_is_dropped_from_the_catalog() {
    // Given: A record with market cap and price but a null volume
    let mut raw = RawDataset::new();
    raw.insert(
        String::from("bitcoin"),
        vec![RawRecord {
            date: Some(String::from("01/01/2015")),
            volume: None,
            market_cap: Some(RawValue::Text(String::from("100"))),
            price_usd: Some(RawValue::Text(String::from("1"))),
        }],
    );

    // When: The dataset is normalized
    let catalog = normalize(raw).expect("normalization should succeed");

    // Then: The coin exists but holds no observations
    let series = catalog.get(&coin("bitcoin")).expect("coin should be present");
    assert!(series.is_empty(), "incomplete record must be excluded");
}

#[test]
fn fixture_dataset_keeps_only_complete_records_in_source_order() {
    // Given: The bundled fixture with null, empty, absent and non-numeric fields
    // When: It is loaded
    let (catalog, report) = load_from_str(FIXTURE).expect("fixture should load");

    // Then: Each coin keeps exactly its complete records
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.get(&coin("bitcoin")).expect("btc").len(), 4);
    assert_eq!(catalog.get(&coin("ethereum")).expect("eth").len(), 5);
    assert_eq!(catalog.get(&coin("ripple")).expect("xrp").len(), 1);

    // And: Skips are counted, not reported as errors
    let btc = report.coins[&coin("bitcoin")];
    assert_eq!(btc.missing_field, 2);
    let xrp = report.coins[&coin("ripple")];
    assert_eq!(xrp.missing_field, 1);
    assert_eq!(xrp.invalid_value, 1);
    assert_eq!(report.skipped(), 4);

    // And: Source order is preserved
    let dates: Vec<String> = catalog
        .get(&coin("bitcoin"))
        .expect("btc")
        .iter()
        .map(|obs| obs.date.to_string())
        .collect();
    assert_eq!(
        dates,
        vec!["01/01/2015", "01/06/2015", "01/01/2016", "31/10/2017"]
    );
}

#[test]
fn numeric_strings_and_json_numbers_normalize_to_the_same_values() {
    // Given: The ripple record stored with raw JSON numbers
    let (catalog, _) = load_from_str(FIXTURE).expect("fixture should load");

    // When: We read it back
    let obs = &catalog.get(&coin("ripple")).expect("xrp").as_slice()[0];

    // Then: The values are plain floats tagged with the coin
    assert_eq!(obs.volume, 1_330_620.0);
    assert_eq!(obs.market_cap, 44_980_600.0);
    assert!((obs.price_usd - 0.005613).abs() < 1e-12);
    assert_eq!(obs.coin, coin("ripple"));
}

// =============================================================================
// Normalization: Corrupt Input
// =============================================================================

#[test]
fn when_a_complete_record_has_a_malformed_date_the_load_is_aborted() {
    // Given: A complete record whose date uses the wrong format
    let input = r#"{"litecoin": [
        {"date": "2015-01-01", "24h_vol": "1", "market_cap": "1", "price_usd": "1"}
    ]}"#;

    // When: The dataset is loaded
    let err = load_from_str(input).expect_err("malformed date must abort");

    // Then: The error names the coin and the offending value
    match err {
        CoreError::MalformedDate { coin, index, value } => {
            assert_eq!(coin, "litecoin");
            assert_eq!(index, 0);
            assert_eq!(value, "2015-01-01");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unreadable_dataset_file_surfaces_an_io_error() {
    // Given: A path that does not exist
    let dir = tempdir().expect("tempdir");
    let missing = dir.path().join("missing.json");

    // When / Then: Loading reports an io error
    let err = load_from_path(&missing).expect_err("must fail");
    assert!(matches!(err, CoreError::Io(_)));
}

#[test]
fn dataset_file_on_disk_loads_like_the_in_memory_document() {
    // Given: The fixture written to a temporary file
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("coins.json");
    fs::write(&path, FIXTURE).expect("write fixture");

    // When: It is loaded from disk
    let (from_disk, _) = load_from_path(&path).expect("load from disk");
    let (in_memory, _) = load_from_str(FIXTURE).expect("load from str");

    // Then: Both catalogs are identical
    assert_eq!(from_disk, in_memory);
}

#[test]
fn catalog_reports_the_global_date_extent_for_the_slider() {
    let (catalog, _) = load_from_str(FIXTURE).expect("fixture should load");

    let extent = catalog.date_extent().expect("non-empty catalog");
    assert_eq!(extent.start().to_string(), "05/08/2013");
    assert_eq!(extent.end().to_string(), "31/10/2017");
}
