use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Descriptive company profile. All fields beyond the name are best-effort;
/// provider coverage varies by listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Company name.
    pub name: Option<String>,
    /// GICS-style sector, e.g. "Technology".
    pub sector: Option<String>,
    /// Industry within the sector.
    pub industry: Option<String>,
    /// Corporate website.
    pub website: Option<String>,
    /// Long business summary.
    pub summary: Option<String>,
}

/// Valuation fundamentals used by the dashboard's metrics table.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fundamentals {
    /// Market capitalization in the listing currency.
    pub market_cap: Option<Decimal>,
    /// Trailing price-to-earnings ratio.
    pub pe_ratio: Option<Decimal>,
    /// 52-week high price.
    pub fifty_two_week_high: Option<Decimal>,
    /// 52-week low price.
    pub fifty_two_week_low: Option<Decimal>,
}
