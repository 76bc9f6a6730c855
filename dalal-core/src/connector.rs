use async_trait::async_trait;

use crate::DalalError;
use crate::types::{CompanyProfile, Exchange, Fundamentals, HistoryRequest, HistoryResponse, Ticker};
pub use dalal_types::ConnectorKey;

/// Focused role trait for connectors that provide OHLC history.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Fetch recent bars for the given ticker and request.
    async fn history(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, DalalError>;
}

/// Focused role trait for connectors that provide company profiles.
#[async_trait]
pub trait ProfileProvider: Send + Sync {
    /// Fetch the descriptive profile for the given ticker.
    async fn profile(&self, ticker: &Ticker) -> Result<CompanyProfile, DalalError>;
}

/// Focused role trait for connectors that provide valuation fundamentals.
#[async_trait]
pub trait FundamentalsProvider: Send + Sync {
    /// Fetch valuation fundamentals for the given ticker.
    async fn fundamentals(&self, ticker: &Ticker) -> Result<Fundamentals, DalalError>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
#[async_trait]
pub trait DalalConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g. "dalal-yahoo", "dalal-mock").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this connector *claims* to cover a given exchange.
    ///
    /// Default: returns `false` for both exchanges. Connectors must explicitly
    /// override this method to declare coverage.
    fn supports_exchange(&self, exchange: Exchange) -> bool {
        let _ = exchange;
        false
    }

    /// Advertise history capability by returning a usable trait object reference when supported.
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        None
    }

    /// If implemented, returns a trait object for company profiles.
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        None
    }

    /// If implemented, returns a trait object for valuation fundamentals.
    fn as_fundamentals_provider(&self) -> Option<&dyn FundamentalsProvider> {
        None
    }
}
