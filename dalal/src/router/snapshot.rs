use rust_decimal::Decimal;

use dalal_core::{DalalError, HistoryRequest, StockReport, Ticker};

use crate::Dalal;

/// Display cut for the business summary.
const ABOUT_LIMIT: usize = 500;

fn append_actionable(warnings: &mut Vec<String>, err: DalalError) {
    match err {
        DalalError::AllProvidersFailed(list) => {
            for inner in list {
                append_actionable(warnings, inner);
            }
        }
        DalalError::Unsupported { .. } | DalalError::NotFound { .. } => {}
        other => warnings.push(other.to_string()),
    }
}

fn truncate_about(summary: &str) -> String {
    let truncated: String = summary.chars().take(ABOUT_LIMIT).collect();
    format!("{truncated}...")
}

impl Dalal {
    /// Build a normalized snapshot report for a ticker.
    ///
    /// Behavior:
    /// - Executes history, profile, and fundamentals concurrently.
    /// - The price block comes from the latest bar; with a single bar the
    ///   previous close falls back to the latest close and the change is zero.
    /// - A change against a zero previous close is reported as zero.
    /// - Profile/fundamentals failures do not fail the report; they are
    ///   collected into `warnings` and the affected fields stay absent.
    ///
    /// # Errors
    /// - `NotFound` when the provider has no recent bars for the ticker.
    /// - The history fetch error otherwise (provider failure, timeout, ...).
    pub async fn snapshot(&self, ticker: &Ticker) -> Result<StockReport, DalalError> {
        let (history_res, profile_res, fundamentals_res) = tokio::join!(
            self.history(ticker, HistoryRequest::default()),
            self.profile(ticker),
            self.fundamentals(ticker),
        );

        let history = history_res?;
        let Some(latest) = history.latest() else {
            return Err(DalalError::not_found(format!("recent bars for {ticker}")));
        };

        let price = latest.close;
        let day_high = latest.high;
        let day_low = latest.low;
        let previous_close = history.previous().map_or(price, |bar| bar.close);
        let change_percent = if previous_close.is_zero() {
            Decimal::ZERO
        } else {
            (price - previous_close) / previous_close * Decimal::ONE_HUNDRED
        };

        let mut warnings: Vec<String> = Vec::new();
        let profile = match profile_res {
            Ok(p) => Some(p),
            Err(e) => {
                append_actionable(&mut warnings, e);
                None
            }
        };
        let fundamentals = match fundamentals_res {
            Ok(f) => Some(f),
            Err(e) => {
                append_actionable(&mut warnings, e);
                None
            }
        };

        let about = profile
            .as_ref()
            .and_then(|p| p.summary.as_deref())
            .map_or_else(|| "Not available".to_string(), truncate_about);
        let sector = profile.as_ref().and_then(|p| p.sector.clone());
        let fundamentals = fundamentals.unwrap_or_default();

        Ok(StockReport {
            ticker: ticker.clone(),
            price,
            previous_close,
            day_high,
            day_low,
            change_percent,
            market_cap: fundamentals.market_cap,
            about,
            sector,
            pe_ratio: fundamentals.pe_ratio,
            fifty_two_week_high: fundamentals.fifty_two_week_high,
            fifty_two_week_low: fundamentals.fifty_two_week_low,
            warnings,
        })
    }
}
