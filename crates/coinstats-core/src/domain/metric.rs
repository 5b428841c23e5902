use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Numeric field charted on the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "24h_vol")]
    Volume,
    #[serde(rename = "market_cap")]
    MarketCap,
    #[serde(rename = "price_usd")]
    PriceUsd,
}

impl Metric {
    pub const ALL: [Self; 3] = [Self::Volume, Self::MarketCap, Self::PriceUsd];

    /// Dataset key for the metric.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Volume => "24h_vol",
            Self::MarketCap => "market_cap",
            Self::PriceUsd => "price_usd",
        }
    }

    /// Value-axis label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Volume => "24 Hour Trading Volume",
            Self::MarketCap => "Market Capitalization",
            Self::PriceUsd => "Price in Dollars (USD)",
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "24h_vol" | "volume" => Ok(Self::Volume),
            "market_cap" | "marketcap" => Ok(Self::MarketCap),
            "price_usd" | "priceusd" | "price" => Ok(Self::PriceUsd),
            other => Err(ValidationError::InvalidMetric {
                value: other.to_owned(),
            }),
        }
    }
}
