//! # Domain Models
//!
//! Canonical types for per-coin market time series.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ChartDate`] | Calendar date written as `DD/MM/YYYY` |
//! | [`DateRange`] | Inclusive date interval from the range slider |
//! | [`CoinId`] | Validated coin identifier |
//! | [`Metric`] | Charted numeric field (volume, market cap, price) |
//! | [`Observation`] | One normalized daily record |
//! | [`Series`] | Observations of one coin, ascending by date |
//! | [`Catalog`] | Immutable coin -> series mapping |
//!
//! Construction validates invariants; a [`Catalog`] is only produced by the
//! [`loader`](crate::loader) and never mutated afterwards.

mod coin;
mod date;
mod metric;
mod models;

pub use coin::CoinId;
pub use date::{ChartDate, DateRange};
pub use metric::Metric;
pub use models::{Catalog, Observation, Series};
