use async_trait::async_trait;
use dalal_core::connector::{
    DalalConnector, FundamentalsProvider, HistoryProvider, ProfileProvider,
};
use dalal_core::{
    CompanyProfile, DalalError, Exchange, Fundamentals, HistoryRequest, HistoryResponse, Ticker,
};

mod fixtures;

/// Mock connector for CI-safe tests and examples. Provides deterministic data
/// from static fixtures for a handful of NSE/BSE tickers.
///
/// Control tickers:
/// - `FAIL.NS` / `FAIL.BO`: every call fails with a connector error.
/// - `TIMEOUT.NS` / `TIMEOUT.BO`: every call sleeps long enough to trip a
///   short provider timeout.
/// - `NEWIPO.NS`: history resolves to an empty bar series.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> DalalError {
        DalalError::not_found(what.to_string())
    }

    fn root(ticker: &Ticker) -> &str {
        ticker.as_str().split('.').next().unwrap_or_default()
    }

    async fn maybe_fail_or_timeout(
        ticker: &Ticker,
        capability: &'static str,
    ) -> Result<(), DalalError> {
        match Self::root(ticker) {
            "FAIL" => Err(DalalError::connector(
                "dalal-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Long enough to exceed a test-sized provider timeout.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl DalalConnector for MockConnector {
    fn name(&self) -> &'static str {
        "dalal-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn supports_exchange(&self, _exchange: Exchange) -> bool {
        true
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }
    fn as_fundamentals_provider(&self) -> Option<&dyn FundamentalsProvider> {
        Some(self as &dyn FundamentalsProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        _req: HistoryRequest,
    ) -> Result<HistoryResponse, DalalError> {
        Self::maybe_fail_or_timeout(ticker, "history").await?;
        fixtures::history::by_ticker(ticker.as_str())
            .ok_or_else(|| Self::not_found(&format!("history for {ticker}")))
    }
}

#[async_trait]
impl ProfileProvider for MockConnector {
    async fn profile(&self, ticker: &Ticker) -> Result<CompanyProfile, DalalError> {
        Self::maybe_fail_or_timeout(ticker, "profile").await?;
        fixtures::profile::by_ticker(ticker.as_str())
            .ok_or_else(|| Self::not_found(&format!("profile for {ticker}")))
    }
}

#[async_trait]
impl FundamentalsProvider for MockConnector {
    async fn fundamentals(&self, ticker: &Ticker) -> Result<Fundamentals, DalalError> {
        Self::maybe_fail_or_timeout(ticker, "fundamentals").await?;
        fixtures::fundamentals::by_ticker(ticker.as_str())
            .ok_or_else(|| Self::not_found(&format!("fundamentals for {ticker}")))
    }
}
