//! Dataset loading and normalization.
//!
//! The input document is a JSON object mapping a coin id to its list of raw
//! daily records. Records missing any numeric field are skipped and counted;
//! a malformed date on a surviving record aborts the whole load.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{Catalog, ChartDate, CoinId, CoreError, Observation, Series};

/// Raw dataset as read from disk: coin id -> records.
pub type RawDataset = BTreeMap<String, Vec<RawRecord>>;

/// One observation as it appears in the dataset, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(rename = "24h_vol", default)]
    pub volume: Option<RawValue>,
    #[serde(default)]
    pub market_cap: Option<RawValue>,
    #[serde(default)]
    pub price_usd: Option<RawValue>,
}

/// Numeric field that may arrive as a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

enum Field {
    Missing,
    Invalid,
    Value(f64),
}

fn read_field(value: Option<&RawValue>) -> Field {
    let parsed = match value {
        None => return Field::Missing,
        Some(RawValue::Number(number)) => *number,
        Some(RawValue::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Field::Missing;
            }
            match text.parse::<f64>() {
                Ok(number) => number,
                Err(_) => return Field::Invalid,
            }
        }
    };

    if parsed.is_finite() && parsed >= 0.0 {
        Field::Value(parsed)
    } else {
        Field::Invalid
    }
}

/// Per-coin normalization counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoinReport {
    pub kept: usize,
    pub missing_field: usize,
    pub invalid_value: usize,
    /// Records dropped because another raw key normalized to the same coin id.
    pub replaced: usize,
}

impl CoinReport {
    pub fn skipped(&self) -> usize {
        self.missing_field + self.invalid_value + self.replaced
    }

    fn absorb(&mut self, earlier: CoinReport) {
        self.missing_field += earlier.missing_field;
        self.invalid_value += earlier.invalid_value;
        self.replaced += earlier.replaced + earlier.kept;
    }
}

/// Summary of what normalization kept and dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    pub coins: BTreeMap<CoinId, CoinReport>,
}

impl NormalizeReport {
    pub fn kept(&self) -> usize {
        self.coins.values().map(|report| report.kept).sum()
    }

    pub fn skipped(&self) -> usize {
        self.coins.values().map(CoinReport::skipped).sum()
    }
}

/// Normalize a raw dataset into an immutable catalog.
pub fn normalize(raw: RawDataset) -> Result<Catalog, CoreError> {
    normalize_with_report(raw).map(|(catalog, _)| catalog)
}

/// Normalize a raw dataset, also returning kept/skipped counts per coin.
pub fn normalize_with_report(raw: RawDataset) -> Result<(Catalog, NormalizeReport), CoreError> {
    let mut series = BTreeMap::new();
    let mut report = NormalizeReport::default();

    for (key, records) in raw {
        let coin = CoinId::parse(&key)?;
        let (coin_series, mut coin_report) = normalize_coin(&coin, records)?;

        if series.insert(coin.clone(), coin_series).is_some() {
            warn!(coin = %coin, key = %key, "duplicate coin id after normalization, keeping last");
        }
        if let Some(earlier) = report.coins.insert(coin.clone(), coin_report) {
            coin_report.absorb(earlier);
            report.coins.insert(coin, coin_report);
        }
    }

    info!(
        coins = series.len(),
        kept = report.kept(),
        skipped = report.skipped(),
        "normalized dataset"
    );

    Ok((Catalog::from_series(series), report))
}

fn normalize_coin(
    coin: &CoinId,
    records: Vec<RawRecord>,
) -> Result<(Series, CoinReport), CoreError> {
    let mut report = CoinReport::default();
    let mut observations = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        let fields = [
            read_field(record.volume.as_ref()),
            read_field(record.market_cap.as_ref()),
            read_field(record.price_usd.as_ref()),
        ];

        let (volume, market_cap, price_usd) = match fields {
            [Field::Value(volume), Field::Value(market_cap), Field::Value(price_usd)] => {
                (volume, market_cap, price_usd)
            }
            fields if fields.iter().any(|field| matches!(field, Field::Missing)) => {
                debug!(coin = %coin, index, "skipping record with missing field");
                report.missing_field += 1;
                continue;
            }
            _ => {
                debug!(coin = %coin, index, "skipping record with non-numeric or negative value");
                report.invalid_value += 1;
                continue;
            }
        };

        let raw_date = record.date.unwrap_or_default();
        let date = ChartDate::parse(&raw_date).map_err(|_| {
            warn!(coin = %coin, index, date = %raw_date, "malformed date, aborting load");
            CoreError::MalformedDate {
                coin: coin.to_string(),
                index,
                value: raw_date.clone(),
            }
        })?;

        observations.push(Observation {
            coin: coin.clone(),
            date,
            volume,
            market_cap,
            price_usd,
        });
        report.kept += 1;
    }

    Ok((Series::new(coin.clone(), observations), report))
}

/// Parse a JSON dataset document and normalize it.
pub fn load_from_str(input: &str) -> Result<(Catalog, NormalizeReport), CoreError> {
    let raw: RawDataset = serde_json::from_str(input)?;
    normalize_with_report(raw)
}

/// Read a JSON dataset file and normalize it.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<(Catalog, NormalizeReport), CoreError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading dataset");
    let contents = fs::read_to_string(path)?;
    load_from_str(&contents)
}
