use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::format::Field;
use crate::types::Ticker;

/// Normalized snapshot for one ticker: the dashboard's two tables plus the
/// description block, with non-fatal provider issues carried as warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockReport {
    /// Resolved provider ticker this report describes.
    pub ticker: Ticker,
    /// Latest close.
    pub price: Decimal,
    /// Prior bar's close, or `price` when only one bar exists.
    pub previous_close: Decimal,
    /// Latest bar's high.
    pub day_high: Decimal,
    /// Latest bar's low.
    pub day_low: Decimal,
    /// Percent change from `previous_close`; zero when the previous close is zero.
    pub change_percent: Decimal,
    /// Market capitalization, when reported.
    pub market_cap: Option<Decimal>,
    /// Business summary, truncated for display; "Not available" when absent.
    pub about: String,
    /// Sector, when reported.
    pub sector: Option<String>,
    /// Trailing P/E ratio, when reported.
    pub pe_ratio: Option<Decimal>,
    /// 52-week high, when reported.
    pub fifty_two_week_high: Option<Decimal>,
    /// 52-week low, when reported.
    pub fifty_two_week_low: Option<Decimal>,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<String>,
}

impl StockReport {
    /// Rows of the "Key Stock Info" table, in display order.
    #[must_use]
    pub fn key_stats(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("Price", Field::num(self.price)),
            ("Previous Close", Field::num(self.previous_close)),
            ("Day High", Field::num(self.day_high)),
            ("Day Low", Field::num(self.day_low)),
            ("Change (%)", Field::num(self.change_percent)),
            ("Market Cap", Field::opt_num(self.market_cap)),
        ]
    }

    /// Rows of the "Key Metrics" table, in display order.
    #[must_use]
    pub fn key_metrics(&self) -> Vec<(&'static str, Field)> {
        vec![
            ("Sector", Field::opt_text(self.sector.clone())),
            ("PE Ratio", Field::opt_num(self.pe_ratio)),
            ("52 Week High", Field::opt_num(self.fifty_two_week_high)),
            ("52 Week Low", Field::opt_num(self.fifty_two_week_low)),
        ]
    }
}
