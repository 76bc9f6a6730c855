use dalal_core::{CompanyProfile, DalalError, Ticker};

use crate::Dalal;

impl Dalal {
    /// Fetch the descriptive company profile for a ticker.
    ///
    /// Some fields (e.g. website, summary) may be missing depending on
    /// provider coverage.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none support the capability.
    pub async fn profile(&self, ticker: &Ticker) -> Result<CompanyProfile, DalalError> {
        self.fetch_single(ticker, "profile", "profile", move |c, t| {
            if let Some(ex) = t.exchange()
                && !c.supports_exchange(ex)
            {
                return None;
            }
            c.as_profile_provider()?;
            Some(async move {
                if let Some(p) = c.as_profile_provider() {
                    p.profile(&t).await
                } else {
                    Err(DalalError::connector(
                        c.name(),
                        "missing profile capability during call",
                    ))
                }
            })
        })
        .await
    }
}
