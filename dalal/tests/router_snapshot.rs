use std::sync::Arc;

use dalal::{Dalal, DalalError, Field, Ticker, safe_format};
use dalal_mock::MockConnector;

fn dalal() -> Dalal {
    Dalal::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

fn fmt(field: &Field) -> String {
    safe_format(field)
}

#[tokio::test]
async fn two_bar_history_produces_a_full_report() {
    let report = dalal()
        .snapshot(&Ticker::new("INFY.NS").unwrap())
        .await
        .unwrap();

    assert_eq!(report.price.to_string(), "1500.25");
    assert_eq!(report.previous_close.to_string(), "1488");
    assert_eq!(report.day_high.to_string(), "1512");
    assert_eq!(report.day_low.to_string(), "1485");
    // (1500.25 - 1488) / 1488 * 100, rounded at render time.
    assert_eq!(fmt(&Field::num(report.change_percent)), "0.82");

    assert_eq!(report.sector.as_deref(), Some("Technology"));
    assert!(report.about.starts_with("Infosys Limited provides"));
    assert!(report.about.ends_with("..."));
    assert!(report.warnings.is_empty());

    let stats = report.key_stats();
    assert_eq!(fmt(&stats[0].1), "1,500.25");
    assert_eq!(fmt(&stats[5].1), "6,230,000,000,000.00");
}

#[tokio::test]
async fn single_bar_history_reports_zero_change() {
    let report = dalal()
        .snapshot(&Ticker::new("TCS.NS").unwrap())
        .await
        .unwrap();

    assert_eq!(report.previous_close, report.price);
    assert!(report.change_percent.is_zero());
    // No summary reported for TCS.
    assert_eq!(report.about, "Not available");
    // P/E missing; the metrics table renders "N/A".
    let metrics = report.key_metrics();
    assert_eq!(fmt(&metrics[1].1), "N/A");
}

#[tokio::test]
async fn long_summaries_are_truncated_with_an_ellipsis() {
    let report = dalal()
        .snapshot(&Ticker::new("RELIANCE.NS").unwrap())
        .await
        .unwrap();

    assert_eq!(report.about.chars().count(), 503);
    assert!(report.about.ends_with("..."));
}

#[tokio::test]
async fn empty_history_is_not_found() {
    let err = dalal()
        .snapshot(&Ticker::new("NEWIPO.NS").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DalalError::NotFound { .. }));
}

#[tokio::test]
async fn unknown_ticker_is_not_found() {
    let err = dalal()
        .snapshot(&Ticker::new("BOGUS.NS").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, DalalError::NotFound { .. }));
}

#[tokio::test]
async fn change_percent_follows_the_close_over_close_formula() {
    use async_trait::async_trait;
    use dalal_core::connector::{DalalConnector, HistoryProvider};
    use dalal_core::{Candle, Exchange, HistoryRequest, HistoryResponse};
    use rust_decimal::Decimal;

    struct TwoBars;

    #[async_trait]
    impl DalalConnector for TwoBars {
        fn name(&self) -> &'static str {
            "two-bars"
        }
        fn supports_exchange(&self, _exchange: Exchange) -> bool {
            true
        }
        fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
            Some(self)
        }
    }

    #[async_trait]
    impl HistoryProvider for TwoBars {
        async fn history(
            &self,
            _ticker: &Ticker,
            _req: HistoryRequest,
        ) -> Result<HistoryResponse, DalalError> {
            let bar = |ts: i64, close: i64| Candle {
                ts: chrono::DateTime::from_timestamp(ts, 0).unwrap(),
                open: Decimal::from(close),
                high: Decimal::from(close),
                low: Decimal::from(close),
                close: Decimal::from(close),
                volume: None,
            };
            Ok(HistoryResponse {
                candles: vec![bar(1_704_190_200, 90), bar(1_704_276_600, 100)],
            })
        }
    }

    let dalal = Dalal::builder()
        .with_connector(Arc::new(TwoBars))
        .build()
        .unwrap();
    let report = dalal
        .snapshot(&Ticker::new("DEMO.NS").unwrap())
        .await
        .unwrap();

    // ((100 - 90) / 90) * 100, shown as 11.11 at render time.
    assert_eq!(fmt(&Field::num(report.change_percent)), "11.11");
    assert_eq!(report.previous_close.to_string(), "90");
}

#[tokio::test]
async fn provider_failure_surfaces_as_an_error() {
    let err = dalal()
        .snapshot(&Ticker::new("FAIL.NS").unwrap())
        .await
        .unwrap_err();
    match err {
        DalalError::AllProvidersFailed(list) => {
            assert!(list
                .iter()
                .any(|e| matches!(e, DalalError::Connector { .. })));
        }
        other => panic!("expected aggregated provider failure, got {other:?}"),
    }
}
