//! Behavior-driven tests for the chart update cycle
//!
//! Every control change produces a fresh ViewState; these tests verify the
//! filtered series and axis domains a renderer receives in response.

use coinstats_core::{
    compute_domain, date_domain, filter_by_range, load_from_str, Catalog, ChartConfig,
    ChartDate, ChartFrame, CoinId, CoreError, DateRange, Metric, ViewState,
};

const FIXTURE: &str = include_str!("fixtures/coins.json");

fn catalog() -> Catalog {
    load_from_str(FIXTURE).expect("fixture should load").0
}

fn coin(id: &str) -> CoinId {
    CoinId::parse(id).expect("valid coin id")
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::parse(start, end).expect("valid range")
}

// =============================================================================
// Range Filter
// =============================================================================

#[test]
fn filtered_points_always_lie_inside_the_selected_range() {
    let catalog = catalog();
    let selected = range("01/06/2015", "01/01/2016");

    for (_, series) in catalog.iter() {
        let filtered = filter_by_range(series, &selected);
        for obs in &filtered {
            assert!(selected.start() <= obs.date && obs.date <= selected.end());
        }
    }
}

#[test]
fn filtering_is_idempotent_for_every_coin() {
    let catalog = catalog();
    let selected = range("08/08/2015", "10/08/2015");

    for (_, series) in catalog.iter() {
        let once = filter_by_range(series, &selected);
        let twice = filter_by_range(&once, &selected);
        assert_eq!(once, twice);
    }
}

#[test]
fn range_bounds_are_inclusive() {
    // Given: A range whose ends land exactly on two ethereum observations
    let catalog = catalog();
    let eth = catalog.get(&coin("ethereum")).expect("eth");

    // When: The series is filtered
    let filtered = filter_by_range(eth, &range("08/08/2015", "10/08/2015"));

    // Then: Both boundary observations are included
    assert_eq!(filtered.len(), 3);
    assert_eq!(filtered.first_date().expect("first").to_string(), "08/08/2015");
    assert_eq!(filtered.last_date().expect("last").to_string(), "10/08/2015");
}

// =============================================================================
// Domain Computer
// =============================================================================

#[test]
fn value_domain_starts_at_zero_with_five_per_mille_headroom() {
    let catalog = catalog();
    let btc = catalog.get(&coin("bitcoin")).expect("btc");

    for metric in Metric::ALL {
        let domain = compute_domain(btc, metric).expect("non-empty series");
        let max = btc
            .iter()
            .map(|obs| obs.value(metric))
            .fold(f64::MIN, f64::max);

        assert_eq!(domain.min, 0.0, "{metric} domain must start at zero");
        assert!(
            (domain.max - max * 1.005).abs() <= 1e-9 * max.max(1.0),
            "{metric} domain must carry headroom"
        );
    }
}

#[test]
fn empty_range_filters_to_nothing_and_has_no_domain() {
    // Given: A range entirely after the dataset
    let catalog = catalog();
    let btc = catalog.get(&coin("bitcoin")).expect("btc");
    let future = range("01/01/2030", "02/01/2030");

    // When: The series is filtered
    let filtered = filter_by_range(btc, &future);

    // Then: The result is empty and both domains refuse to compute
    assert!(filtered.is_empty());
    assert!(matches!(
        compute_domain(&filtered, Metric::PriceUsd),
        Err(CoreError::EmptyDomain)
    ));
    assert!(matches!(date_domain(&filtered), Err(CoreError::EmptyDomain)));
}

// =============================================================================
// Frame Computation
// =============================================================================

#[test]
fn switching_metric_rescales_the_value_axis_only() {
    // Given: One coin and range, two metrics
    let catalog = catalog();
    let config = ChartConfig::default();
    let selected = range("01/01/2015", "31/10/2017");
    let price = ViewState::new(coin("bitcoin"), Metric::PriceUsd, selected);
    let volume = ViewState::new(coin("bitcoin"), Metric::Volume, selected);

    // When: Both frames are computed from the same immutable catalog
    let price_frame = ChartFrame::compute(&catalog, &price, &config).expect("price frame");
    let volume_frame = ChartFrame::compute(&catalog, &volume, &config).expect("volume frame");

    // Then: The time axis is shared and the value axis differs
    assert_eq!(price_frame.date_domain, volume_frame.date_domain);
    assert_eq!(price_frame.series, volume_frame.series);
    assert!(volume_frame.value_domain.max > price_frame.value_domain.max);
    assert_eq!(volume_frame.label, "24 Hour Trading Volume");
}

#[test]
fn volume_axis_labels_use_billions() {
    let catalog = catalog();
    let view = ViewState::new(
        coin("bitcoin"),
        Metric::Volume,
        range("01/01/2015", "31/10/2017"),
    );

    let frame = ChartFrame::compute(&catalog, &view, &ChartConfig::default()).expect("frame");

    let labels: Vec<&str> = frame.y_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels, vec!["0.0", "1.0B", "2.0B", "3.0B", "4.0B", "5.0B"]);
}

#[test]
fn multi_year_range_gets_quarterly_date_labels() {
    // Given: Nearly three years of bitcoin data
    let catalog = catalog();
    let view = ViewState::new(
        coin("bitcoin"),
        Metric::PriceUsd,
        range("01/01/2015", "31/10/2017"),
    );

    // When: The frame is computed
    let frame = ChartFrame::compute(&catalog, &view, &ChartConfig::default()).expect("frame");

    // Then: The time axis ticks every quarter, left to right
    let labels: Vec<&str> = frame.x_ticks.iter().map(|tick| tick.label.as_str()).collect();
    assert_eq!(labels.len(), 12);
    assert_eq!(&labels[..3], &["01/01/2015", "01/04/2015", "01/07/2015"]);
    assert_eq!(labels.last(), Some(&"01/10/2017"));
    assert!(frame
        .x_ticks
        .windows(2)
        .all(|pair| pair[0].offset < pair[1].offset));
}

#[test]
fn narrowing_the_range_moves_the_time_axis() {
    let catalog = catalog();
    let view = ViewState::new(
        coin("bitcoin"),
        Metric::MarketCap,
        range("01/02/2015", "31/12/2016"),
    );

    let frame = ChartFrame::compute(&catalog, &view, &ChartConfig::default()).expect("frame");

    assert_eq!(frame.series.len(), 2);
    assert_eq!(
        frame.date_domain.min,
        ChartDate::parse("01/06/2015").expect("date")
    );
    assert_eq!(
        frame.date_domain.max,
        ChartDate::parse("01/01/2016").expect("date")
    );
    let points = frame.points();
    assert_eq!(points.first().expect("first").0, 0.0);
    assert_eq!(points.last().expect("last").0, frame.width);
}

#[test]
fn empty_range_frame_reports_a_recoverable_error() {
    let catalog = catalog();
    let view = ViewState::new(
        coin("ethereum"),
        Metric::PriceUsd,
        range("01/01/2013", "31/12/2013"),
    );

    let err = ChartFrame::compute(&catalog, &view, &ChartConfig::default())
        .expect_err("no ethereum data in 2013");

    assert!(matches!(err, CoreError::EmptyDomain));
    assert!(err.is_empty_data(), "caller should render a placeholder");
}

#[test]
fn slider_bounds_follow_the_loaded_data() {
    let catalog = catalog();
    let bounds = catalog.slider_bounds(&ChartConfig::default());
    assert_eq!(bounds.start().to_string(), "05/08/2013");
    assert_eq!(bounds.end().to_string(), "31/10/2017");
}
