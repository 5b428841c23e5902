//! # coinstats core
//!
//! Data pipeline behind an interactive coin market chart.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`domain`] | Dates, coin ids, metrics, observations, series, catalog |
//! | [`loader`] | JSON dataset parsing and normalization |
//! | [`filter`] | Inclusive date-range filtering |
//! | [`extent`] | Value and date axis domains |
//! | [`locator`] | Bisection lookup of the nearest point |
//! | [`scale`] | Linear/time scales and axis ticks |
//! | [`format`] | SI and currency labels |
//! | [`view`] | Per-interaction frame computation and hover |
//! | [`config`] | Layout and dataset location |
//! | [`envelope`] | Machine-readable output envelope |
//! | [`error`] | Core error types |
//!
//! ## Flow
//!
//! ```text
//! coins.json ──▶ loader ──▶ Catalog (immutable)
//!                              │
//!           ViewState ─────────┤
//!                              ▼
//!                filter ─▶ extent ─▶ scale ─▶ ChartFrame
//!                                                 │
//!                          pixel x ─▶ locator ◀───┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use coinstats_core::{
//!     load_from_str, ChartConfig, ChartFrame, CoinId, DateRange, Metric, ViewState,
//! };
//!
//! let input = r#"{"bitcoin": [
//!     {"date": "01/01/2015", "24h_vol": "1", "market_cap": "2", "price_usd": "314.25"},
//!     {"date": "02/01/2015", "24h_vol": "1", "market_cap": "2", "price_usd": "315.03"}
//! ]}"#;
//! let (catalog, _report) = load_from_str(input)?;
//!
//! let view = ViewState::new(
//!     CoinId::parse("bitcoin")?,
//!     Metric::PriceUsd,
//!     DateRange::parse("01/01/2015", "31/12/2015")?,
//! );
//! let frame = ChartFrame::compute(&catalog, &view, &ChartConfig::default())?;
//! let tooltip = frame.hover(10.0)?;
//! assert_eq!(tooltip.text, "314.25");
//! # Ok::<(), coinstats_core::CoreError>(())
//! ```

pub mod config;
pub mod domain;
pub mod envelope;
pub mod error;
pub mod extent;
pub mod filter;
pub mod format;
pub mod loader;
pub mod locator;
pub mod scale;
pub mod view;

pub use config::{ChartConfig, DataConfig, Margin, PlotLayout, DEFAULT_HEADROOM};
pub use domain::{Catalog, ChartDate, CoinId, DateRange, Metric, Observation, Series};
pub use envelope::{Envelope, EnvelopeError, EnvelopeMeta, SCHEMA_VERSION};
pub use error::{CoreError, ValidationError};
pub use extent::{
    compute_domain, compute_domain_with_headroom, date_domain, DateDomain, ValueDomain,
};
pub use filter::filter_by_range;
pub use format::{format_abbreviation, format_currency, format_si};
pub use loader::{
    load_from_path, load_from_str, normalize, normalize_with_report, CoinReport,
    NormalizeReport, RawDataset, RawRecord, RawValue,
};
pub use locator::{bisect_left, locate_nearest, locate_nearest_date};
pub use scale::{nice_ticks, LinearScale, TimeScale};
pub use view::{ChartFrame, Tick, TimeTick, Tooltip, ViewState};
