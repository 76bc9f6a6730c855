//! Adapter seam between the connector and the HTTP client, so tests can
//! inject deterministic behavior without a network.

use std::sync::Arc;

use async_trait::async_trait;

use dalal_core::{DalalError, HistoryRequest, HistoryResponse};

use crate::client::YahooClient;
use crate::model::{SummaryBundle, chart_to_history, summary_to_bundle};

/// Modules requested from quoteSummary: name, description, and the valuation
/// detail the metrics table renders.
const SUMMARY_MODULES: &str = "price,summaryProfile,summaryDetail";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YahooHistory: Send + Sync {
    /// Fetch recent bars for a symbol.
    async fn fetch(
        &self,
        symbol: &str,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, DalalError>;
}

/// Profile/fundamentals abstraction over the quoteSummary endpoint.
#[async_trait]
pub trait YahooSummary: Send + Sync {
    /// Load the profile + fundamentals bundle for a symbol.
    async fn load(&self, symbol: &str) -> Result<SummaryBundle, DalalError>;
}

/// Production adapter backed by a shared [`YahooClient`].
#[derive(Clone)]
pub struct RealAdapter {
    client: Arc<YahooClient>,
}

impl RealAdapter {
    /// Wrap an existing client.
    #[must_use]
    pub fn new(client: YahooClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Build an adapter over a client with default (production) endpoints.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn try_default() -> Result<Self, DalalError> {
        Ok(Self::new(YahooClient::builder().build()?))
    }
}

#[async_trait]
impl YahooHistory for RealAdapter {
    async fn fetch(
        &self,
        symbol: &str,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, DalalError> {
        let result = self
            .client
            .chart(symbol, req.range.as_str(), req.interval.as_str())
            .await?;
        chart_to_history(&result)
    }
}

#[async_trait]
impl YahooSummary for RealAdapter {
    async fn load(&self, symbol: &str) -> Result<SummaryBundle, DalalError> {
        let result = self.client.quote_summary(symbol, SUMMARY_MODULES).await?;
        Ok(summary_to_bundle(&result))
    }
}

/* -------- Test-only lightweight adapter constructors ------- */

#[cfg(feature = "test-adapters")]
impl dyn YahooHistory {
    /// Build a `YahooHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YahooHistory>
    where
        F: Send + Sync + 'static + Fn(String, HistoryRequest) -> Result<HistoryResponse, DalalError>,
    {
        struct FnHistory<F>(F);
        #[async_trait]
        impl<F> YahooHistory for FnHistory<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(String, HistoryRequest) -> Result<HistoryResponse, DalalError>,
        {
            async fn fetch(
                &self,
                symbol: &str,
                req: HistoryRequest,
            ) -> Result<HistoryResponse, DalalError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHistory(f))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YahooSummary {
    /// Build a `YahooSummary` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YahooSummary>
    where
        F: Send + Sync + 'static + Fn(String) -> Result<SummaryBundle, DalalError>,
    {
        struct FnSummary<F>(F);
        #[async_trait]
        impl<F> YahooSummary for FnSummary<F>
        where
            F: Send + Sync + 'static + Fn(String) -> Result<SummaryBundle, DalalError>,
        {
            async fn load(&self, symbol: &str) -> Result<SummaryBundle, DalalError> {
                (self.0)(symbol.to_string())
            }
        }
        Arc::new(FnSummary(f))
    }
}

/// Helper trait to split a concrete adapter into arc trait objects.
#[cfg(feature = "test-adapters")]
pub trait CloneArcAdapters {
    /// Clone as `Arc<dyn YahooHistory>`.
    fn clone_arc_history(&self) -> Arc<dyn YahooHistory> {
        <dyn YahooHistory>::from_fn(|_, _| Err(DalalError::unsupported("history")))
    }
    /// Clone as `Arc<dyn YahooSummary>`.
    fn clone_arc_summary(&self) -> Arc<dyn YahooSummary> {
        <dyn YahooSummary>::from_fn(|_| Err(DalalError::unsupported("profile")))
    }
}

#[cfg(feature = "test-adapters")]
impl CloneArcAdapters for RealAdapter {
    fn clone_arc_history(&self) -> Arc<dyn YahooHistory> {
        Arc::new(self.clone()) as Arc<dyn YahooHistory>
    }
    fn clone_arc_summary(&self) -> Arc<dyn YahooSummary> {
        Arc::new(self.clone()) as Arc<dyn YahooSummary>
    }
}
