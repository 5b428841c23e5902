use thiserror::Error;

/// Validation and contract errors exposed by `coinstats-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("coin id cannot be empty")]
    EmptyCoinId,
    #[error("coin id length {len} exceeds max {max}")]
    CoinIdTooLong { len: usize, max: usize },
    #[error("coin id must start with an ASCII letter: '{ch}'")]
    CoinIdInvalidStart { ch: char },
    #[error("coin id contains invalid character '{ch}' at index {index}")]
    CoinIdInvalidChar { ch: char, index: usize },

    #[error("invalid metric '{value}', expected one of 24h_vol, market_cap, price_usd")]
    InvalidMetric { value: String },

    #[error("date must match DD/MM/YYYY: '{value}'")]
    InvalidDate { value: String },
    #[error("range start {start} is after range end {end}")]
    InvertedRange { start: String, end: String },

    #[error("plot area must be positive, got {width}x{height}")]
    InvalidLayout { width: String, height: String },
    #[error("headroom factor must be finite and at least 1.0, got {value}")]
    InvalidHeadroom { value: String },

    #[error("request_id must be at least 8 characters")]
    InvalidRequestId,
    #[error("schema_version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidSchemaVersion { value: String },
    #[error("error code cannot be empty")]
    EmptyErrorCode,
    #[error("error message cannot be empty")]
    EmptyErrorMessage,
}

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("coin '{coin}' record {index} has malformed date '{value}', expected DD/MM/YYYY")]
    MalformedDate {
        coin: String,
        index: usize,
        value: String,
    },

    #[error("cannot compute a domain from an empty series")]
    EmptyDomain,

    #[error("cannot locate a point in an empty series")]
    EmptySeries,

    #[error("coin '{coin}' is not present in the catalog")]
    UnknownCoin { coin: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Stable machine-readable code used in output envelopes.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::MalformedDate { .. } => "malformed_date",
            Self::EmptyDomain => "empty_domain",
            Self::EmptySeries => "empty_series",
            Self::UnknownCoin { .. } => "unknown_coin",
            Self::Serialization(_) => "serialization",
            Self::Io(_) => "io",
        }
    }

    /// Empty-data failures the caller can recover from by widening the range.
    pub const fn is_empty_data(&self) -> bool {
        matches!(self, Self::EmptyDomain | Self::EmptySeries)
    }
}
