//! Exchange-suffix ticker resolution.
//!
//! A dropdown selection ("INFY - Infosys Ltd") or bare symbol becomes a
//! provider ticker by taking the token before the first `" - "`, uppercasing
//! it, dropping any pre-existing suffix after the first `'.'`, and appending
//! the exchange suffix. Resolution is idempotent: an already-suffixed symbol
//! resolves to itself.

use dalal_core::{DalalError, Exchange, Ticker};

/// Resolve a selection to a provider ticker for the given exchange.
///
/// # Errors
/// Returns `InvalidArg` when the selection carries no symbol token.
pub fn resolve_ticker(exchange: Exchange, selection: &str) -> Result<Ticker, DalalError> {
    let token = selection
        .split(" - ")
        .next()
        .unwrap_or(selection)
        .trim();
    let root = token.split('.').next().unwrap_or(token);
    if root.is_empty() {
        return Err(DalalError::InvalidArg(format!(
            "no symbol in selection '{selection}'"
        )));
    }
    Ticker::new(format!("{}{}", root.to_ascii_uppercase(), exchange.suffix()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nse_symbols_get_the_ns_suffix() {
        let t = resolve_ticker(Exchange::Nse, "INFY - Infosys Ltd").unwrap();
        assert_eq!(t.as_str(), "INFY.NS");
    }

    #[test]
    fn bse_symbols_get_the_bo_suffix() {
        let t = resolve_ticker(Exchange::Bse, "INFY - Infosys Ltd").unwrap();
        assert_eq!(t.as_str(), "INFY.BO");
    }

    #[test]
    fn pre_suffixed_symbols_resolve_unchanged() {
        let t = resolve_ticker(Exchange::Nse, "TCS.NS - Tata Consultancy").unwrap();
        assert_eq!(t.as_str(), "TCS.NS");
    }

    #[test]
    fn bare_symbols_without_labels_resolve() {
        let t = resolve_ticker(Exchange::Nse, "reliance").unwrap();
        assert_eq!(t.as_str(), "RELIANCE.NS");
    }

    #[test]
    fn foreign_suffixes_are_replaced() {
        let t = resolve_ticker(Exchange::Bse, "INFY.NS - Infosys Ltd").unwrap();
        assert_eq!(t.as_str(), "INFY.BO");
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert!(resolve_ticker(Exchange::Nse, "   ").is_err());
        assert!(resolve_ticker(Exchange::Nse, ".NS - odd").is_err());
    }
}
