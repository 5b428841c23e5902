use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use time::macros::date;

use crate::{ChartDate, DateRange, ValidationError};

/// Headroom applied above the largest plotted value.
pub const DEFAULT_HEADROOM: f64 = 1.005;

const DEFAULT_DATA_PATH: &str = "data/coins.json";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

/// Canvas size and margins; the plot area is the canvas minus margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub margin: Margin,
}

impl Default for PlotLayout {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 500.0,
            margin: Margin {
                left: 100.0,
                right: 100.0,
                top: 50.0,
                bottom: 100.0,
            },
        }
    }
}

impl PlotLayout {
    pub fn width(&self) -> f64 {
        self.canvas_width - self.margin.left - self.margin.right
    }

    pub fn height(&self) -> f64 {
        self.canvas_height - self.margin.top - self.margin.bottom
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let (width, height) = (self.width(), self.height());
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(ValidationError::InvalidLayout {
                width: width.to_string(),
                height: height.to_string(),
            });
        }
        Ok(())
    }
}

/// Presentation settings shared by every computed frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartConfig {
    pub layout: PlotLayout,
    pub headroom: f64,
    pub y_ticks: usize,
    pub x_ticks: usize,
    /// Slider bounds used when the catalog holds no observations.
    pub default_bounds: DateRange,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            layout: PlotLayout::default(),
            headroom: DEFAULT_HEADROOM,
            y_ticks: 6,
            x_ticks: 10,
            default_bounds: default_bounds(),
        }
    }
}

impl ChartConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.layout.validate()?;
        if !self.headroom.is_finite() || self.headroom < 1.0 {
            return Err(ValidationError::InvalidHeadroom {
                value: self.headroom.to_string(),
            });
        }
        Ok(())
    }
}

fn default_bounds() -> DateRange {
    let start = ChartDate::from_date(date!(2013 - 05 - 12));
    let end = ChartDate::from_date(date!(2017 - 10 - 31));
    DateRange::from_ordered(start, end)
}

/// Where the dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub data_path: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_path: resolve_data_path(),
        }
    }
}

fn resolve_data_path() -> PathBuf {
    if let Some(path) = env::var_os("COINSTATS_DATA") {
        let path = PathBuf::from(path);
        if !path.as_os_str().is_empty() {
            return path;
        }
    }

    PathBuf::from(DEFAULT_DATA_PATH)
}
