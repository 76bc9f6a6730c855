use dalal_core::{DalalError, Fundamentals, Ticker};

use crate::Dalal;

impl Dalal {
    /// Fetch valuation fundamentals for a ticker.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the capability.
    pub async fn fundamentals(&self, ticker: &Ticker) -> Result<Fundamentals, DalalError> {
        self.fetch_single(ticker, "fundamentals", "fundamentals", move |c, t| {
            if let Some(ex) = t.exchange()
                && !c.supports_exchange(ex)
            {
                return None;
            }
            c.as_fundamentals_provider()?;
            Some(async move {
                if let Some(p) = c.as_fundamentals_provider() {
                    p.fundamentals(&t).await
                } else {
                    Err(DalalError::connector(
                        c.name(),
                        "missing fundamentals capability during call",
                    ))
                }
            })
        })
        .await
    }
}
