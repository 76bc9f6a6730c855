use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Requested lookback window, expressed in provider range codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Range {
    /// One trading day.
    #[default]
    D1,
    /// Five trading days.
    D5,
    /// One month.
    M1,
    /// One year.
    Y1,
}

impl Range {
    /// Provider query-string code for this range.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::D5 => "5d",
            Self::M1 => "1mo",
            Self::Y1 => "1y",
        }
    }
}

/// Bar cadence, expressed in provider interval codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Interval {
    /// Daily bars.
    #[default]
    D1,
    /// Weekly bars.
    W1,
}

impl Interval {
    /// Provider query-string code for this interval.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::D1 => "1d",
            Self::W1 => "1wk",
        }
    }
}

/// Parameters for a history fetch. The snapshot path uses the defaults
/// (one day of daily bars), matching the dashboard's per-click lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// Lookback window.
    pub range: Range,
    /// Bar cadence.
    pub interval: Interval,
}

/// One OHLC bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: Decimal,
    /// Session high.
    pub high: Decimal,
    /// Session low.
    pub low: Decimal,
    /// Closing (or latest) price.
    pub close: Decimal,
    /// Traded volume, when reported.
    pub volume: Option<u64>,
}

/// Ordered bar series returned by a history provider.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HistoryResponse {
    /// Bars in ascending timestamp order; may be empty.
    pub candles: Vec<Candle>,
}

impl HistoryResponse {
    /// Latest bar, when the series is non-empty.
    #[must_use]
    pub fn latest(&self) -> Option<&Candle> {
        self.candles.last()
    }

    /// Bar immediately before the latest one.
    #[must_use]
    pub fn previous(&self) -> Option<&Candle> {
        self.candles.len().checked_sub(2).map(|i| &self.candles[i])
    }
}
