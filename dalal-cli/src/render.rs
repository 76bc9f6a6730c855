//! Plain-text rendering of a snapshot report: two key-value tables and the
//! company overview block.

use dalal::{Field, StockReport, safe_format};

pub fn report(report: &StockReport) {
    println!("========================================");
    println!("{} Stock Data", report.ticker);
    println!("========================================");

    println!("\n## Key Stock Info");
    table(&report.key_stats());

    println!("\n## Company Overview");
    println!("{}", report.about);

    println!("\n## Key Metrics");
    table(&report.key_metrics());

    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
}

fn table(rows: &[(&'static str, Field)]) {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        println!("{label:<width$}  {}", safe_format(value));
    }
}
