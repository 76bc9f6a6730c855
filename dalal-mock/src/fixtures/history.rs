use dalal_core::{Candle, HistoryResponse};
use rust_decimal::Decimal;

pub fn by_ticker(t: &str) -> Option<HistoryResponse> {
    match t {
        // Two bars: exercises the previous-close / change-percent path.
        "INFY.NS" => Some(build(vec![
            ("2024-01-02", "1480", "1495", "1472", "1488", 4_200_000),
            ("2024-01-03", "1490", "1512", "1485", "1500.25", 3_900_000),
        ])),
        "INFY.BO" => Some(build(vec![
            ("2024-01-02", "1479", "1494", "1471", "1487.50", 310_000),
            ("2024-01-03", "1489", "1511", "1484", "1499.80", 280_000),
        ])),
        // Single bar: previous close falls back to the latest close.
        "TCS.NS" => Some(build(vec![(
            "2024-01-03",
            "3705",
            "3748",
            "3690",
            "3726.40",
            1_800_000,
        )])),
        "RELIANCE.NS" => Some(build(vec![
            ("2024-01-02", "2590", "2618", "2581", "2601.15", 6_100_000),
            ("2024-01-03", "2603", "2647", "2598", "2640.55", 5_700_000),
        ])),
        "RELIANCE.BO" => Some(build(vec![
            ("2024-01-02", "2589", "2617", "2580", "2600.40", 420_000),
            ("2024-01-03", "2602", "2646", "2597", "2639.90", 395_000),
        ])),
        // Listed but no recent bars.
        "NEWIPO.NS" => Some(HistoryResponse::default()),
        _ => None,
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn build(rows: Vec<(&str, &str, &str, &str, &str, u64)>) -> HistoryResponse {
    let candles = rows
        .into_iter()
        .map(|(date, o, h, l, c, v)| Candle {
            ts: chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
                .and_utc(),
            open: dec(o),
            high: dec(h),
            low: dec(l),
            close: dec(c),
            volume: Some(v),
        })
        .collect();
    HistoryResponse { candles }
}
