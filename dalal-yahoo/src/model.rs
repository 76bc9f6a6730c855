//! Yahoo Finance API response models.
//!
//! Chart responses carry bar arrays with per-slot nulls; quoteSummary wraps
//! every numeric in a `{raw, fmt}` object, and returns empty objects (`{}`)
//! for fields with no data.

use rust_decimal::Decimal;
use serde::Deserialize;

use dalal_core::{Candle, CompanyProfile, DalalError, Fundamentals, HistoryResponse};

// ---------------------------------------------------------------------------
// v8 chart endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResponse {
    pub chart: ChartData,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartData {
    #[serde(default)]
    pub result: Vec<ChartResult>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartError {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub timestamp: Option<Vec<i64>>,
    pub indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartIndicators {
    pub quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartQuote {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

/// Convert a chart result into an ordered bar series. Slots with any missing
/// OHLC component are skipped rather than fabricated.
pub(crate) fn chart_to_history(result: &ChartResult) -> Result<HistoryResponse, DalalError> {
    let timestamps = result.timestamp.as_deref().unwrap_or_default();
    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| DalalError::Data("chart response carries no quote block".into()))?;

    let mut candles = Vec::with_capacity(timestamps.len());
    for (i, &ts) in timestamps.iter().enumerate() {
        let ts = chrono::DateTime::from_timestamp(ts, 0)
            .ok_or_else(|| DalalError::Data(format!("invalid bar timestamp {ts}")))?;
        if let (Some(Some(open)), Some(Some(high)), Some(Some(low)), Some(Some(close))) = (
            quote.open.get(i),
            quote.high.get(i),
            quote.low.get(i),
            quote.close.get(i),
        ) {
            candles.push(Candle {
                ts,
                open: to_decimal(*open)?,
                high: to_decimal(*high)?,
                low: to_decimal(*low)?,
                close: to_decimal(*close)?,
                volume: quote.volume.get(i).copied().flatten(),
            });
        }
    }
    Ok(HistoryResponse { candles })
}

fn to_decimal(v: f64) -> Result<Decimal, DalalError> {
    Decimal::from_f64_retain(v)
        .ok_or_else(|| DalalError::Data(format!("cannot represent {v} as a decimal")))
}

// ---------------------------------------------------------------------------
// v10 quoteSummary endpoint
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteSummaryResponse {
    pub quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteSummary {
    #[serde(default)]
    pub result: Vec<QuoteSummaryResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuoteSummaryResult {
    #[serde(default)]
    pub price: Option<PriceModule>,
    #[serde(default)]
    pub summary_profile: Option<SummaryProfileModule>,
    #[serde(default)]
    pub summary_detail: Option<SummaryDetailModule>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PriceModule {
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub long_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryProfileModule {
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub long_business_summary: Option<String>,
}

/// Numeric detail wrapped as `{"raw": 123.4, "fmt": "123.40"}` or `{}`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawValue {
    #[serde(default)]
    pub raw: Option<f64>,
}

impl RawValue {
    fn decimal(&self) -> Option<Decimal> {
        self.raw.and_then(Decimal::from_f64_retain)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryDetailModule {
    #[serde(default)]
    pub market_cap: Option<RawValue>,
    #[serde(rename = "trailingPE", default)]
    pub trailing_pe: Option<RawValue>,
    #[serde(default)]
    pub fifty_two_week_high: Option<RawValue>,
    #[serde(default)]
    pub fifty_two_week_low: Option<RawValue>,
}

/// Profile plus fundamentals mapped out of one quoteSummary result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryBundle {
    /// Descriptive company profile.
    pub profile: CompanyProfile,
    /// Valuation fundamentals.
    pub fundamentals: Fundamentals,
}

pub(crate) fn summary_to_bundle(result: &QuoteSummaryResult) -> SummaryBundle {
    let price = result.price.as_ref();
    let summary = result.summary_profile.as_ref();
    let detail = result.summary_detail.as_ref();

    let name = price
        .and_then(|p| p.long_name.clone())
        .or_else(|| price.and_then(|p| p.short_name.clone()));

    SummaryBundle {
        profile: CompanyProfile {
            name,
            sector: summary.and_then(|s| s.sector.clone()),
            industry: summary.and_then(|s| s.industry.clone()),
            website: summary.and_then(|s| s.website.clone()),
            summary: summary.and_then(|s| s.long_business_summary.clone()),
        },
        fundamentals: Fundamentals {
            market_cap: detail.and_then(|d| d.market_cap.as_ref()).and_then(RawValue::decimal),
            pe_ratio: detail.and_then(|d| d.trailing_pe.as_ref()).and_then(RawValue::decimal),
            fifty_two_week_high: detail
                .and_then(|d| d.fifty_two_week_high.as_ref())
                .and_then(RawValue::decimal),
            fifty_two_week_low: detail
                .and_then(|d| d.fifty_two_week_low.as_ref())
                .and_then(RawValue::decimal),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_rows_with_missing_components_are_skipped() {
        let json = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1704278400, 1704364800, 1704451200],
                    "indicators": {
                        "quote": [{
                            "open":   [1480.0, null,   1490.0],
                            "high":   [1495.0, 1500.0, 1512.0],
                            "low":    [1472.0, 1470.0, 1485.0],
                            "close":  [1488.0, 1489.5, 1500.25],
                            "volume": [4200000, null, 3900000]
                        }]
                    }
                }],
                "error": null
            }
        }"#;
        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let history = chart_to_history(&resp.chart.result[0]).unwrap();
        assert_eq!(history.candles.len(), 2);
        assert_eq!(history.candles[1].close.to_string(), "1500.25");
        assert_eq!(history.candles[0].volume, Some(4_200_000));
    }

    #[test]
    fn chart_without_timestamps_yields_empty_history() {
        let json = r#"{
            "chart": {
                "result": [{
                    "indicators": { "quote": [{"open":[],"high":[],"low":[],"close":[],"volume":[]}] }
                }],
                "error": null
            }
        }"#;
        let resp: ChartResponse = serde_json::from_str(json).unwrap();
        let history = chart_to_history(&resp.chart.result[0]).unwrap();
        assert!(history.candles.is_empty());
    }

    #[test]
    fn summary_maps_profile_and_detail_modules() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {"shortName": "INFY", "longName": "Infosys Limited"},
                    "summaryProfile": {
                        "sector": "Technology",
                        "industry": "Information Technology Services",
                        "website": "https://www.infosys.com",
                        "longBusinessSummary": "Infosys Limited provides consulting services."
                    },
                    "summaryDetail": {
                        "marketCap": {"raw": 6230000000000.0, "fmt": "6.23T"},
                        "trailingPE": {"raw": 24.1, "fmt": "24.10"},
                        "fiftyTwoWeekHigh": {"raw": 1733.0, "fmt": "1733.00"},
                        "fiftyTwoWeekLow": {"raw": 1351.65, "fmt": "1351.65"}
                    }
                }]
            }
        }"#;
        let resp: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let bundle = summary_to_bundle(&resp.quote_summary.result[0]);
        assert_eq!(bundle.profile.name.as_deref(), Some("Infosys Limited"));
        assert_eq!(bundle.profile.sector.as_deref(), Some("Technology"));
        assert_eq!(
            bundle.fundamentals.pe_ratio.map(|d| d.to_string()),
            Some("24.1".to_string())
        );
    }

    #[test]
    fn empty_detail_objects_decode_as_absent() {
        let json = r#"{
            "quoteSummary": {
                "result": [{
                    "price": {"shortName": "TCS"},
                    "summaryDetail": {
                        "marketCap": {"raw": 13480000000000.0},
                        "trailingPE": {},
                        "fiftyTwoWeekHigh": {"raw": 4254.75},
                        "fiftyTwoWeekLow": {"raw": 3311.0}
                    }
                }]
            }
        }"#;
        let resp: QuoteSummaryResponse = serde_json::from_str(json).unwrap();
        let bundle = summary_to_bundle(&resp.quote_summary.result[0]);
        assert_eq!(bundle.profile.name.as_deref(), Some("TCS"));
        assert!(bundle.fundamentals.pe_ratio.is_none());
        assert!(bundle.fundamentals.market_cap.is_some());
        assert!(bundle.profile.summary.is_none());
    }
}
