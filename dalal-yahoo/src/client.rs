//! Thin HTTP client for the two Yahoo Finance endpoints the connector uses.
//!
//! Yahoo gates its JSON APIs behind a cookie + crumb pair: a cookie is issued
//! by `fc.yahoo.com` and a matching crumb by `/v1/test/getcrumb`. The pair is
//! cached per client and refreshed once when a request comes back 401.

use reqwest::StatusCode;
use reqwest::header;
use tokio::sync::RwLock;
use tracing::debug;

use dalal_core::DalalError;

use crate::model::{ChartResponse, ChartResult, QuoteSummaryResponse, QuoteSummaryResult};

const DEFAULT_CHART_BASE: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const DEFAULT_SUMMARY_BASE: &str = "https://query1.finance.yahoo.com/v10/finance/quoteSummary";
const DEFAULT_COOKIE_URL: &str = "https://fc.yahoo.com";
const DEFAULT_CRUMB_URL: &str = "https://query1.finance.yahoo.com/v1/test/getcrumb";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
struct CrumbData {
    cookie: String,
    crumb: String,
}

/// HTTP client bound to a set of Yahoo endpoint base URLs.
pub struct YahooClient {
    http: reqwest::Client,
    chart_base: String,
    summary_base: String,
    cookie_url: String,
    crumb_url: String,
    crumb: RwLock<Option<CrumbData>>,
}

/// Builder for [`YahooClient`]; base URLs are overridable for tests.
pub struct YahooClientBuilder {
    chart_base: String,
    summary_base: String,
    cookie_url: String,
    crumb_url: String,
}

impl Default for YahooClientBuilder {
    fn default() -> Self {
        Self {
            chart_base: DEFAULT_CHART_BASE.into(),
            summary_base: DEFAULT_SUMMARY_BASE.into(),
            cookie_url: DEFAULT_COOKIE_URL.into(),
            crumb_url: DEFAULT_CRUMB_URL.into(),
        }
    }
}

impl YahooClientBuilder {
    /// Override the chart endpoint base URL.
    #[must_use]
    pub fn chart_base(mut self, url: impl Into<String>) -> Self {
        self.chart_base = url.into();
        self
    }

    /// Override the quoteSummary endpoint base URL.
    #[must_use]
    pub fn summary_base(mut self, url: impl Into<String>) -> Self {
        self.summary_base = url.into();
        self
    }

    /// Override the cookie-issuing URL.
    #[must_use]
    pub fn cookie_url(mut self, url: impl Into<String>) -> Self {
        self.cookie_url = url.into();
        self
    }

    /// Override the crumb-issuing URL.
    #[must_use]
    pub fn crumb_url(mut self, url: impl Into<String>) -> Self {
        self.crumb_url = url.into();
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `Other` if the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<YahooClient, DalalError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DalalError::Other(format!("failed to build http client: {e}")))?;
        Ok(YahooClient {
            http,
            chart_base: self.chart_base,
            summary_base: self.summary_base,
            cookie_url: self.cookie_url,
            crumb_url: self.crumb_url,
            crumb: RwLock::new(None),
        })
    }
}

impl YahooClient {
    /// Start building a client with default (production) endpoints.
    #[must_use]
    pub fn builder() -> YahooClientBuilder {
        YahooClientBuilder::default()
    }

    async fn ensure_crumb(&self) -> Result<CrumbData, DalalError> {
        if let Some(crumb) = self.crumb.read().await.as_ref() {
            return Ok(crumb.clone());
        }
        self.fetch_crumb().await
    }

    async fn fetch_crumb(&self) -> Result<CrumbData, DalalError> {
        let response = self
            .http
            .get(&self.cookie_url)
            .send()
            .await
            .map_err(|e| transport_err("cookie", &e))?;

        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split_once(';').map(|(v, _)| v.to_string()))
            .ok_or_else(|| {
                DalalError::connector("dalal-yahoo", "no cookie issued by provider")
            })?;

        let crumb = self
            .http
            .get(&self.crumb_url)
            .header(header::COOKIE, &cookie)
            .send()
            .await
            .map_err(|e| transport_err("crumb", &e))?
            .text()
            .await
            .map_err(|e| transport_err("crumb body", &e))?;

        debug!(target: "dalal_yahoo", "refreshed provider crumb");
        let data = CrumbData { cookie, crumb };
        *self.crumb.write().await = Some(data.clone());
        Ok(data)
    }

    async fn clear_crumb(&self) {
        *self.crumb.write().await = None;
    }

    /// Authenticated GET returning the raw response; refreshes the crumb and
    /// retries once on 401.
    async fn get_authenticated(
        &self,
        base: &str,
        symbol: &str,
        query: &[(&str, &str)],
        what: &str,
    ) -> Result<reqwest::Response, DalalError> {
        let mut crumb = self.ensure_crumb().await?;
        for attempt in 0..2 {
            let url = format!("{}/{}", base, urlencode(symbol));
            let response = self
                .http
                .get(&url)
                .query(query)
                .query(&[("crumb", crumb.crumb.as_str())])
                .header(header::COOKIE, &crumb.cookie)
                .send()
                .await
                .map_err(|e| transport_err(what, &e))?;

            match response.status() {
                StatusCode::UNAUTHORIZED if attempt == 0 => {
                    self.clear_crumb().await;
                    crumb = self.ensure_crumb().await?;
                }
                StatusCode::NOT_FOUND => {
                    return Err(DalalError::not_found(format!("{what} for {symbol}")));
                }
                status if !status.is_success() => {
                    return Err(DalalError::connector(
                        "dalal-yahoo",
                        format!("server error {status}: {what} for {symbol}"),
                    ));
                }
                _ => return Ok(response),
            }
        }
        Err(DalalError::connector(
            "dalal-yahoo",
            format!("authentication expired: {what} for {symbol}"),
        ))
    }

    /// Fetch the chart result for `symbol` over `range` at `interval`.
    pub(crate) async fn chart(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<ChartResult, DalalError> {
        let response = self
            .get_authenticated(
                &self.chart_base,
                symbol,
                &[("range", range), ("interval", interval)],
                "history",
            )
            .await?;

        let parsed: ChartResponse = response
            .json()
            .await
            .map_err(|e| DalalError::Data(format!("failed to parse chart response: {e}")))?;

        if let Some(error) = parsed.chart.error {
            let msg = error
                .description
                .or(error.code)
                .unwrap_or_else(|| "unspecified chart error".into());
            return Err(DalalError::connector("dalal-yahoo", msg));
        }

        parsed
            .chart
            .result
            .into_iter()
            .next()
            .ok_or_else(|| DalalError::not_found(format!("history for {symbol}")))
    }

    /// Fetch the quoteSummary result for `symbol` with the given modules.
    pub(crate) async fn quote_summary(
        &self,
        symbol: &str,
        modules: &str,
    ) -> Result<QuoteSummaryResult, DalalError> {
        let response = self
            .get_authenticated(
                &self.summary_base,
                symbol,
                &[("modules", modules)],
                "summary",
            )
            .await?;

        let parsed: QuoteSummaryResponse = response
            .json()
            .await
            .map_err(|e| DalalError::Data(format!("failed to parse summary response: {e}")))?;

        parsed
            .quote_summary
            .result
            .into_iter()
            .next()
            .ok_or_else(|| DalalError::not_found(format!("summary for {symbol}")))
    }
}

fn transport_err(what: &str, e: &reqwest::Error) -> DalalError {
    DalalError::connector("dalal-yahoo", format!("{what} request failed: {e}"))
}

/// Percent-encode the path segment a ticker occupies.
fn urlencode(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
