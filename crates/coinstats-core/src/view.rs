//! Frame computation for one chart interaction.
//!
//! A [`ViewState`] captures everything the controls select. [`ChartFrame::compute`]
//! turns it into the filtered series, both axis domains and the scales a
//! renderer needs; hover lookups then run against the frame.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use tracing::debug;

use crate::config::ChartConfig;
use crate::extent::{compute_domain_with_headroom, date_domain, DateDomain, ValueDomain};
use crate::filter::filter_by_range;
use crate::format::{format_abbreviation, format_currency};
use crate::locator::locate_nearest;
use crate::scale::{LinearScale, TimeScale};
use crate::{Catalog, ChartDate, CoinId, CoreError, DateRange, Metric, Observation, Series};

/// Control selection for one update: which coin, which metric, which dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub coin: CoinId,
    pub metric: Metric,
    pub range: DateRange,
}

impl ViewState {
    pub fn new(coin: CoinId, metric: Metric, range: DateRange) -> Self {
        Self {
            coin,
            metric,
            range,
        }
    }
}

/// Value-axis tick with its pixel offset and label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tick {
    pub value: f64,
    pub offset: f64,
    pub label: String,
}

/// Time-axis tick at a calendar date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeTick {
    pub date: ChartDate,
    pub offset: f64,
    pub label: String,
}

/// Everything a renderer needs to draw one state of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    pub view: ViewState,
    pub label: &'static str,
    pub series: Series,
    pub value_domain: ValueDomain,
    pub date_domain: DateDomain,
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
    pub x_ticks: Vec<TimeTick>,
    pub y_ticks: Vec<Tick>,
    pub width: f64,
    pub height: f64,
}

impl ChartFrame {
    pub fn compute(
        catalog: &Catalog,
        view: &ViewState,
        config: &ChartConfig,
    ) -> Result<Self, CoreError> {
        config.validate()?;

        let full = catalog.get(&view.coin).ok_or_else(|| CoreError::UnknownCoin {
            coin: view.coin.to_string(),
        })?;
        let series = filter_by_range(full, &view.range);
        debug!(
            coin = %view.coin,
            metric = %view.metric,
            start = %view.range.start(),
            end = %view.range.end(),
            visible = series.len(),
            "computing frame"
        );

        let value_domain = compute_domain_with_headroom(&series, view.metric, config.headroom)?;
        let date_domain = date_domain(&series)?;

        let width = config.layout.width();
        let height = config.layout.height();
        let x_scale = TimeScale::new(date_domain, (0.0, width));
        let y_scale = LinearScale::new(value_domain, (height, 0.0));

        let x_ticks = x_scale
            .ticks(config.x_ticks)
            .into_iter()
            .map(|date| TimeTick {
                date,
                offset: x_scale.map(date.midnight()),
                label: date.to_string(),
            })
            .collect();
        let y_ticks = y_scale
            .ticks(config.y_ticks)
            .into_iter()
            .map(|value| Tick {
                value,
                offset: y_scale.map(value),
                label: format_abbreviation(value),
            })
            .collect();

        Ok(Self {
            view: view.clone(),
            label: view.metric.label(),
            series,
            value_domain,
            date_domain,
            x_scale,
            y_scale,
            x_ticks,
            y_ticks,
            width,
            height,
        })
    }

    /// Pixel position of `obs` inside the plot area.
    pub fn position(&self, obs: &Observation) -> (f64, f64) {
        (
            self.x_scale.map(obs.date.midnight()),
            self.y_scale.map(obs.value(self.view.metric)),
        )
    }

    /// Line vertices in plot pixels, in series order.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.series.iter().map(|obs| self.position(obs)).collect()
    }

    /// SVG path data (`M x,y L x,y ...`) for the line.
    pub fn path_data(&self) -> String {
        let mut path = String::new();
        for (index, (x, y)) in self.points().into_iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            // Writing into a String cannot fail.
            let _ = write!(path, "{command}{x},{y}");
        }
        path
    }

    /// Tooltip for the point nearest to plot x-coordinate `pixel_x`.
    pub fn hover(&self, pixel_x: f64) -> Result<Tooltip, CoreError> {
        self.tooltip_at(self.x_scale.invert(pixel_x))
    }

    /// Tooltip for the point nearest to `date`, skipping the pixel round trip.
    pub fn hover_date(&self, date: ChartDate) -> Result<Tooltip, CoreError> {
        self.tooltip_at(date.midnight())
    }

    fn tooltip_at(&self, target: PrimitiveDateTime) -> Result<Tooltip, CoreError> {
        let obs = locate_nearest(&self.series, target)?;
        let value = obs.value(self.view.metric);
        let (x, y) = self.position(obs);

        Ok(Tooltip {
            observation: obs.clone(),
            value,
            text: format_currency(value),
            x,
            y,
            vertical_line: self.height - y,
            horizontal_line: -x,
        })
    }
}

/// Hover result: the nearest observation and where to draw its marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub observation: Observation,
    pub value: f64,
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Length of the guide from the marker down to the time axis.
    pub vertical_line: f64,
    /// Offset of the guide from the marker back to the value axis.
    pub horizontal_line: f64,
}
