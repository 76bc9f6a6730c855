use dalal_core::{DalalError, HistoryRequest, HistoryResponse, Ticker};

use crate::Dalal;

impl Dalal {
    /// Fetch recent bars for a single ticker.
    ///
    /// Providers are tried in priority order with the per-provider timeout;
    /// `NotFound` from every attempted provider maps to a `NotFound` outcome.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the capability.
    pub async fn history(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, DalalError> {
        self.fetch_single(ticker, "history", "history", move |c, t| {
            if let Some(ex) = t.exchange()
                && !c.supports_exchange(ex)
            {
                return None;
            }
            c.as_history_provider()?;
            Some(async move {
                if let Some(p) = c.as_history_provider() {
                    p.history(&t, req).await
                } else {
                    Err(DalalError::connector(
                        c.name(),
                        "missing history capability during call",
                    ))
                }
            })
        })
        .await
    }
}
