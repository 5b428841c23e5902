use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::{ChartDate, CoinId, DateRange, Metric};

/// One normalized daily observation for one coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub coin: CoinId,
    pub date: ChartDate,
    pub volume: f64,
    pub market_cap: f64,
    pub price_usd: f64,
}

impl Observation {
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Volume => self.volume,
            Metric::MarketCap => self.market_cap,
            Metric::PriceUsd => self.price_usd,
        }
    }
}

/// Observations of one coin in source order (ascending by date).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub coin: CoinId,
    pub observations: Vec<Observation>,
}

impl Series {
    pub fn new(coin: CoinId, observations: Vec<Observation>) -> Self {
        Self { coin, observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn as_slice(&self) -> &[Observation] {
        &self.observations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.observations.iter()
    }

    pub fn first_date(&self) -> Option<ChartDate> {
        self.observations.first().map(|obs| obs.date)
    }

    pub fn last_date(&self) -> Option<ChartDate> {
        self.observations.last().map(|obs| obs.date)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}

/// Immutable coin -> series mapping built once per loaded dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    series: BTreeMap<CoinId, Series>,
}

impl Catalog {
    pub(crate) fn from_series(series: BTreeMap<CoinId, Series>) -> Self {
        Self { series }
    }

    pub fn get(&self, coin: &CoinId) -> Option<&Series> {
        self.series.get(coin)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CoinId, &Series)> {
        self.series.iter()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Earliest and latest date across every coin, `None` when no coin has data.
    pub fn date_extent(&self) -> Option<DateRange> {
        let dates = self.series.values().flat_map(|series| series.iter().map(|obs| obs.date));
        let (min, max) = dates.fold(None, |acc: Option<(ChartDate, ChartDate)>, date| match acc {
            None => Some((date, date)),
            Some((min, max)) => Some((min.min(date), max.max(date))),
        })?;
        DateRange::new(min, max).ok()
    }

    /// Bounds for the range slider: the catalog extent, or the configured default.
    pub fn slider_bounds(&self, config: &ChartConfig) -> DateRange {
        self.date_extent().unwrap_or(config.default_bounds)
    }
}
