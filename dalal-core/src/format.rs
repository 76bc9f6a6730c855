//! Display formatting for report fields.
//!
//! `safe_format` mirrors the dashboard contract: numeric values render as
//! fixed two-decimal, comma-grouped strings; everything else renders via its
//! plain string form. Formatting never fails.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single report cell: either a numeric value or literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// Numeric value, rendered with two decimals and thousands grouping.
    Num(Decimal),
    /// Literal text, rendered verbatim (e.g. "N/A").
    Text(String),
}

impl Field {
    /// Numeric cell.
    #[must_use]
    pub const fn num(value: Decimal) -> Self {
        Self::Num(value)
    }

    /// Text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Numeric cell, falling back to the literal "N/A" when absent.
    #[must_use]
    pub fn opt_num(value: Option<Decimal>) -> Self {
        value.map_or_else(|| Self::Text("N/A".into()), Self::Num)
    }

    /// Text cell, falling back to the literal "N/A" when absent.
    #[must_use]
    pub fn opt_text(value: Option<String>) -> Self {
        Self::Text(value.unwrap_or_else(|| "N/A".into()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&safe_format(self))
    }
}

/// Format a report cell for display.
#[must_use]
pub fn safe_format(field: &Field) -> String {
    match field {
        Field::Num(d) => group_thousands(*d),
        Field::Text(t) => t.clone(),
    }
}

/// Render a decimal as `1,234.50`: two fixed decimals, comma-grouped.
fn group_thousands(d: Decimal) -> String {
    let rounded = format!("{:.2}", d.round_dp(2));
    let (sign, rest) = rounded
        .strip_prefix('-')
        .map_or(("", rounded.as_str()), |r| ("-", r));
    let (int_part, frac_part) = rest.split_once('.').unwrap_or((rest, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(s: &str) -> Field {
        Field::Num(s.parse().unwrap())
    }

    #[test]
    fn numbers_render_two_decimal_comma_grouped() {
        assert_eq!(safe_format(&num("1234.5")), "1,234.50");
        assert_eq!(safe_format(&num("0")), "0.00");
        assert_eq!(safe_format(&num("999")), "999.00");
        assert_eq!(safe_format(&num("1000")), "1,000.00");
        assert_eq!(safe_format(&num("12345678.911")), "12,345,678.91");
    }

    #[test]
    fn negative_numbers_keep_sign_outside_grouping() {
        assert_eq!(safe_format(&num("-1234.5")), "-1,234.50");
        assert_eq!(safe_format(&num("-987654.321")), "-987,654.32");
    }

    #[test]
    fn text_passes_through_verbatim() {
        assert_eq!(safe_format(&Field::text("N/A")), "N/A");
        assert_eq!(safe_format(&Field::opt_num(None)), "N/A");
    }
}
