use dalal_core::Fundamentals;
use rust_decimal::Decimal;

pub fn by_ticker(t: &str) -> Option<Fundamentals> {
    match t {
        "INFY.NS" | "INFY.BO" => Some(Fundamentals {
            market_cap: dec("6230000000000"),
            pe_ratio: dec("24.10"),
            fifty_two_week_high: dec("1733.00"),
            fifty_two_week_low: dec("1351.65"),
        }),
        // P/E intentionally missing; the metrics table shows "N/A".
        "TCS.NS" => Some(Fundamentals {
            market_cap: dec("13480000000000"),
            pe_ratio: None,
            fifty_two_week_high: dec("4254.75"),
            fifty_two_week_low: dec("3311.00"),
        }),
        "RELIANCE.NS" | "RELIANCE.BO" => Some(Fundamentals {
            market_cap: dec("17860000000000"),
            pe_ratio: dec("26.45"),
            fifty_two_week_high: dec("2856.15"),
            fifty_two_week_low: dec("2221.05"),
        }),
        _ => None,
    }
}

fn dec(s: &str) -> Option<Decimal> {
    Some(s.parse().unwrap())
}
