use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dalal::{Dalal, DalalError, Ticker};
use dalal_core::connector::{DalalConnector, HistoryProvider};
use dalal_core::{Candle, Exchange, HistoryRequest, HistoryResponse};
use dalal_mock::MockConnector;
use rust_decimal::Decimal;

/// History-only connector whose bars carry a per-connector marker price.
struct NamedConnector {
    name: &'static str,
    marker: i64,
    outcome: Outcome,
}

enum Outcome {
    Succeed,
    NotFound,
    Fail,
}

impl NamedConnector {
    fn ok(name: &'static str, marker: i64) -> Arc<Self> {
        Arc::new(Self {
            name,
            marker,
            outcome: Outcome::Succeed,
        })
    }

    fn not_found(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            marker: 0,
            outcome: Outcome::NotFound,
        })
    }

    fn failing(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            name,
            marker: 0,
            outcome: Outcome::Fail,
        })
    }
}

#[async_trait]
impl DalalConnector for NamedConnector {
    fn name(&self) -> &'static str {
        self.name
    }
    fn supports_exchange(&self, _exchange: Exchange) -> bool {
        true
    }
    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self)
    }
}

#[async_trait]
impl HistoryProvider for NamedConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        _req: HistoryRequest,
    ) -> Result<HistoryResponse, DalalError> {
        match self.outcome {
            Outcome::Succeed => Ok(HistoryResponse {
                candles: vec![Candle {
                    ts: chrono::DateTime::from_timestamp(1_704_276_600, 0).unwrap(),
                    open: Decimal::from(self.marker),
                    high: Decimal::from(self.marker),
                    low: Decimal::from(self.marker),
                    close: Decimal::from(self.marker),
                    volume: None,
                }],
            }),
            Outcome::NotFound => Err(DalalError::not_found(format!("history for {ticker}"))),
            Outcome::Fail => Err(DalalError::connector(self.name, "boom")),
        }
    }
}

fn ticker() -> Ticker {
    Ticker::new("INFY.NS").unwrap()
}

#[tokio::test]
async fn priority_ordering_picks_the_preferred_connector() {
    let alpha = NamedConnector::ok("alpha", 1);
    let beta = NamedConnector::ok("beta", 2);
    let dalal = Dalal::builder()
        .with_connector(alpha)
        .with_connector(beta.clone())
        .priority(&[beta.key()])
        .build()
        .unwrap();

    let resp = dalal
        .history(&ticker(), HistoryRequest::default())
        .await
        .unwrap();
    assert_eq!(resp.latest().unwrap().close, Decimal::from(2));
}

#[tokio::test]
async fn registration_order_wins_without_priorities() {
    let alpha = NamedConnector::ok("alpha", 1);
    let beta = NamedConnector::ok("beta", 2);
    let dalal = Dalal::builder()
        .with_connector(alpha)
        .with_connector(beta)
        .build()
        .unwrap();

    let resp = dalal
        .history(&ticker(), HistoryRequest::default())
        .await
        .unwrap();
    assert_eq!(resp.latest().unwrap().close, Decimal::from(1));
}

#[tokio::test]
async fn not_found_falls_through_to_the_next_provider() {
    let dalal = Dalal::builder()
        .with_connector(NamedConnector::not_found("alpha"))
        .with_connector(NamedConnector::ok("beta", 2))
        .build()
        .unwrap();

    let resp = dalal
        .history(&ticker(), HistoryRequest::default())
        .await
        .unwrap();
    assert_eq!(resp.latest().unwrap().close, Decimal::from(2));
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let dalal = Dalal::builder()
        .with_connector(NamedConnector::not_found("alpha"))
        .with_connector(NamedConnector::not_found("beta"))
        .build()
        .unwrap();

    let err = dalal
        .history(&ticker(), HistoryRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DalalError::NotFound { .. }));
}

#[tokio::test]
async fn mixed_failures_aggregate() {
    let dalal = Dalal::builder()
        .with_connector(NamedConnector::failing("alpha"))
        .with_connector(NamedConnector::not_found("beta"))
        .build()
        .unwrap();

    let err = dalal
        .history(&ticker(), HistoryRequest::default())
        .await
        .unwrap_err();
    match err {
        DalalError::AllProvidersFailed(list) => assert_eq!(list.len(), 2),
        other => panic!("expected aggregate, got {other:?}"),
    }
}

#[tokio::test]
async fn no_capable_provider_is_unsupported() {
    /// Connector advertising nothing at all.
    struct Inert;
    #[async_trait]
    impl DalalConnector for Inert {
        fn name(&self) -> &'static str {
            "inert"
        }
        fn supports_exchange(&self, _exchange: Exchange) -> bool {
            true
        }
    }

    let dalal = Dalal::builder()
        .with_connector(Arc::new(Inert))
        .build()
        .unwrap();
    let err = dalal
        .history(&ticker(), HistoryRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, DalalError::Unsupported { .. }));
}

#[tokio::test]
async fn slow_providers_trip_the_per_provider_timeout() {
    let dalal = Dalal::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .provider_timeout(Duration::from_millis(20))
        .build()
        .unwrap();

    let err = dalal
        .history(&Ticker::new("TIMEOUT.NS").unwrap(), HistoryRequest::default())
        .await
        .unwrap_err();
    match err {
        DalalError::AllProvidersFailed(list) => {
            assert!(list
                .iter()
                .all(|e| matches!(e, DalalError::ProviderTimeout { .. })));
        }
        other => panic!("expected timeout aggregate, got {other:?}"),
    }
}

#[tokio::test]
async fn history_only_connector_yields_na_fields_without_warnings() {
    let dalal = Dalal::builder()
        .with_connector(NamedConnector::ok("alpha", 100))
        .build()
        .unwrap();

    let report = dalal.snapshot(&ticker()).await.unwrap();
    assert!(report.market_cap.is_none());
    assert_eq!(report.about, "Not available");
    // Unsupported capabilities are not worth a user-facing warning.
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn build_without_connectors_is_rejected() {
    assert!(matches!(
        Dalal::builder().build().unwrap_err(),
        DalalError::InvalidArg(_)
    ));
}
