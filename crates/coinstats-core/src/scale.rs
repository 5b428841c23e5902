//! Continuous scales mapping data to plot pixels, and axis tick generation.
//!
//! Scales are plain values rebuilt for every frame; nothing here is mutated
//! after construction.

use serde::Serialize;
use time::{Date, Duration, PrimitiveDateTime, Weekday};

use crate::extent::{DateDomain, ValueDomain};
use crate::ChartDate;

/// Linear map from a value domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: ValueDomain, range: (f64, f64)) -> Self {
        Self {
            domain: (domain.min, domain.max),
            range,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (value - d0) / span };
        r0 + t * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0;
        }
        d0 + (pixel - r0) / span * (d1 - d0)
    }

    /// About `count` round-valued ticks across the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Map from a date domain onto a pixel range, at one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeScale {
    pub domain: DateDomain,
    pub range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: DateDomain, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    fn span_seconds(&self) -> f64 {
        (self.domain.max.midnight() - self.domain.min.midnight()).whole_seconds() as f64
    }

    pub fn map(&self, instant: PrimitiveDateTime) -> f64 {
        let (r0, r1) = self.range;
        let span = self.span_seconds();
        let t = if span == 0.0 {
            0.5
        } else {
            (instant - self.domain.min.midnight()).whole_seconds() as f64 / span
        };
        r0 + t * (r1 - r0)
    }

    /// Instant under `pixel`, rounded to the nearest second.
    pub fn invert(&self, pixel: f64) -> PrimitiveDateTime {
        let (r0, r1) = self.range;
        let origin = self.domain.min.midnight();
        let width = r1 - r0;
        if width == 0.0 {
            return origin;
        }

        let offset = ((pixel - r0) / width * self.span_seconds()).round();
        origin.saturating_add(Duration::seconds(offset as i64))
    }

    /// About `count` calendar-aligned dates across the domain.
    pub fn ticks(&self, count: usize) -> Vec<ChartDate> {
        if count == 0 {
            return Vec::new();
        }

        let min = self.domain.min.into_inner();
        let max = self.domain.max.into_inner();
        let step = time_step((max - min).whole_days() as f64, count);

        let mut ticks = Vec::new();
        let mut day = Some(min);
        while let Some(date) = day.filter(|date| *date <= max) {
            if step.accepts(date) {
                ticks.push(ChartDate::from_date(date));
            }
            day = date.next_day();
        }
        ticks
    }
}

/// Calendar interval between time-axis ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimeStep {
    Days(u8),
    Week,
    Months(u8),
    Years(i32),
}

const TIME_STEPS: [TimeStep; 6] = [
    TimeStep::Days(1),
    TimeStep::Days(2),
    TimeStep::Week,
    TimeStep::Months(1),
    TimeStep::Months(3),
    TimeStep::Years(1),
];

impl TimeStep {
    fn approx_days(self) -> f64 {
        match self {
            Self::Days(n) => f64::from(n),
            Self::Week => 7.0,
            Self::Months(n) => 30.0 * f64::from(n),
            Self::Years(n) => 365.0 * f64::from(n),
        }
    }

    fn accepts(self, date: Date) -> bool {
        match self {
            Self::Days(n) => (date.day() - 1) % n == 0,
            // Weeks start on Sunday.
            Self::Week => date.weekday() == Weekday::Sunday,
            Self::Months(n) => date.day() == 1 && (u8::from(date.month()) - 1) % n == 0,
            Self::Years(n) => date.ordinal() == 1 && date.year().rem_euclid(n) == 0,
        }
    }
}

fn time_step(span_days: f64, count: usize) -> TimeStep {
    let target = span_days / count as f64;
    let index = TIME_STEPS.partition_point(|step| step.approx_days() < target);

    if index == TIME_STEPS.len() {
        return TimeStep::Years(year_step(target / 365.0));
    }
    if index > 0 {
        let below = TIME_STEPS[index - 1];
        let above = TIME_STEPS[index];
        if target / below.approx_days() < above.approx_days() / target {
            return below;
        }
    }
    TIME_STEPS[index]
}

fn year_step(years: f64) -> i32 {
    let power = 10f64.powf(years.log10().floor());
    let error = years / power;
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    (factor * power).clamp(1.0, f64::from(i32::MAX)) as i32
}

const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const MAX_TICKS: i64 = 1_000;

/// Tick positions stepping by 1, 2 or 5 times a power of ten.
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, increment)) = tick_range(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2.saturating_sub(i1) >= MAX_TICKS {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (i1..=i2)
        .map(|i| match increment {
            Increment::Divide(inc) => i as f64 / inc,
            Increment::Multiply(inc) => i as f64 * inc,
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

#[derive(Clone, Copy)]
enum Increment {
    Divide(f64),
    Multiply(f64),
}

impl Increment {
    fn value(self) -> f64 {
        match self {
            Self::Divide(inc) | Self::Multiply(inc) => inc,
        }
    }
}

fn tick_range(start: f64, stop: f64, count: f64) -> Option<(i64, i64, Increment)> {
    let step = (stop - start) / count;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (i1, i2, increment) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round();
        let mut i2 = (stop * inc).round();
        if i1 / inc < start {
            i1 += 1.0;
        }
        if i2 / inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, Increment::Divide(inc))
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round();
        let mut i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
        (i1, i2, Increment::Multiply(inc))
    };

    if !increment.value().is_finite() || !i1.is_finite() || !i2.is_finite() {
        return None;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_range(start, stop, count * 2.0);
    }
    if i2 < i1 {
        return None;
    }

    Some((i1 as i64, i2 as i64, increment))
}
