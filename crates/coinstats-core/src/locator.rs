//! Nearest-point lookup for hover tooltips.

use time::PrimitiveDateTime;

use crate::{ChartDate, CoreError, Observation, Series};

/// Index of the first observation whose date is not before `target`.
pub fn bisect_left(series: &Series, target: PrimitiveDateTime) -> usize {
    series
        .as_slice()
        .partition_point(|obs| obs.date.midnight() < target)
}

/// Observation closest in time to `target`.
///
/// `series` must be sorted ascending by date. When both neighbours are equally
/// far from the target the later one wins.
pub fn locate_nearest(
    series: &Series,
    target: PrimitiveDateTime,
) -> Result<&Observation, CoreError> {
    let points = series.as_slice();
    if points.is_empty() {
        return Err(CoreError::EmptySeries);
    }

    let index = bisect_left(series, target);
    if index == 0 {
        return Ok(&points[0]);
    }
    if index >= points.len() {
        return Ok(&points[points.len() - 1]);
    }

    let before = &points[index - 1];
    let after = &points[index];
    let before_distance = (target - before.date.midnight()).abs();
    let after_distance = (after.date.midnight() - target).abs();

    if after_distance <= before_distance {
        Ok(after)
    } else {
        Ok(before)
    }
}

/// [`locate_nearest`] for a calendar date, taken at midnight.
pub fn locate_nearest_date(series: &Series, target: ChartDate) -> Result<&Observation, CoreError> {
    locate_nearest(series, target.midnight())
}
