//! Axis domain computation for a (filtered) series.

use serde::Serialize;

use crate::config::DEFAULT_HEADROOM;
use crate::{ChartDate, CoreError, Metric, Series};

/// Value-axis domain. `min` is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

/// Time-axis domain: earliest and latest date in the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateDomain {
    pub min: ChartDate,
    pub max: ChartDate,
}

/// Value domain `[0, max(metric) * 1.005]`.
pub fn compute_domain(series: &Series, metric: Metric) -> Result<ValueDomain, CoreError> {
    compute_domain_with_headroom(series, metric, DEFAULT_HEADROOM)
}

/// Value domain `[0, max(metric) * headroom]`.
pub fn compute_domain_with_headroom(
    series: &Series,
    metric: Metric,
    headroom: f64,
) -> Result<ValueDomain, CoreError> {
    let max = series
        .iter()
        .map(|obs| obs.value(metric))
        .reduce(f64::max)
        .ok_or(CoreError::EmptyDomain)?;

    Ok(ValueDomain {
        min: 0.0,
        max: max * headroom,
    })
}

/// Date extent of the series. Does not assume ordering.
pub fn date_domain(series: &Series) -> Result<DateDomain, CoreError> {
    let mut dates = series.iter().map(|obs| obs.date);
    let first = dates.next().ok_or(CoreError::EmptyDomain)?;
    let (min, max) = dates.fold((first, first), |(min, max), date| {
        (min.min(date), max.max(date))
    });

    Ok(DateDomain { min, max })
}
