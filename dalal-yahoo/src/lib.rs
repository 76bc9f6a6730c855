//! dalal-yahoo
//!
//! Production connector that implements `DalalConnector` on top of the Yahoo
//! Finance JSON APIs: the v8 chart endpoint for recent bars and the v10
//! quoteSummary endpoint for profile and valuation detail.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by the HTTP client.
pub mod adapter;
/// HTTP client for the Yahoo endpoints, including crumb/cookie auth.
pub mod client;
mod model;

pub use client::{YahooClient, YahooClientBuilder};
pub use model::SummaryBundle;

use std::sync::Arc;

#[cfg(feature = "test-adapters")]
use adapter::CloneArcAdapters;
use adapter::{RealAdapter, YahooHistory, YahooSummary};
use async_trait::async_trait;
use dalal_core::connector::{
    ConnectorKey, DalalConnector, FundamentalsProvider, HistoryProvider, ProfileProvider,
};
use dalal_core::{
    CompanyProfile, DalalError, Exchange, Fundamentals, HistoryRequest, HistoryResponse, Ticker,
};

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YahooHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = Arc<RealAdapter>;

#[cfg(feature = "test-adapters")]
type SummaryAdapter = Arc<dyn YahooSummary>;
#[cfg(not(feature = "test-adapters"))]
type SummaryAdapter = Arc<RealAdapter>;

/// Public connector type. Production users construct with `try_default()`.
pub struct YahooConnector {
    history: HistoryAdapter,
    summary: SummaryAdapter,
}

impl YahooConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("dalal-yahoo");

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: DalalError, what: &str) -> DalalError {
        match e {
            DalalError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    DalalError::not_found(what.to_string())
                } else {
                    DalalError::connector("dalal-yahoo", msg)
                }
            }
            DalalError::Other(msg) => DalalError::connector("dalal-yahoo", msg),
            other => other,
        }
    }

    /// Build with a fresh HTTP client against the production endpoints.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn try_default() -> Result<Self, DalalError> {
        Ok(Self::from_adapter(&RealAdapter::try_default()?))
    }

    /// Build from an existing [`YahooClient`] (e.g. with overridden endpoints).
    #[must_use]
    pub fn new_with_client(client: YahooClient) -> Self {
        Self::from_adapter(&RealAdapter::new(client))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    pub fn from_adapter<A: CloneArcAdapters + 'static>(adapter: &A) -> Self {
        Self {
            history: adapter.clone_arc_history(),
            summary: adapter.clone_arc_summary(),
        }
    }

    /// Build from a concrete `RealAdapter` by cloning it into shared handles.
    #[cfg(not(feature = "test-adapters"))]
    pub fn from_adapter(adapter: &RealAdapter) -> Self {
        let shared = Arc::new(adapter.clone());
        Self {
            history: Arc::clone(&shared),
            summary: shared,
        }
    }
}

#[async_trait]
impl HistoryProvider for YahooConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, DalalError> {
        self.history
            .fetch(ticker.as_str(), req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {ticker}")))
    }
}

#[async_trait]
impl ProfileProvider for YahooConnector {
    async fn profile(&self, ticker: &Ticker) -> Result<CompanyProfile, DalalError> {
        let bundle = self
            .summary
            .load(ticker.as_str())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("profile for {ticker}")))?;
        Ok(bundle.profile)
    }
}

#[async_trait]
impl FundamentalsProvider for YahooConnector {
    async fn fundamentals(&self, ticker: &Ticker) -> Result<Fundamentals, DalalError> {
        let bundle = self
            .summary
            .load(ticker.as_str())
            .await
            .map_err(|e| Self::normalize_error(e, &format!("fundamentals for {ticker}")))?;
        Ok(bundle.fundamentals)
    }
}

#[async_trait]
impl DalalConnector for YahooConnector {
    fn name(&self) -> &'static str {
        "dalal-yahoo"
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    /// Yahoo lists both NSE (".NS") and BSE (".BO") instruments.
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
