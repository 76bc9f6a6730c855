use core::fmt;

use serde::{Deserialize, Serialize};

use crate::DalalError;
use crate::types::Exchange;

/// One listed instrument on an exchange, as loaded from a symbol table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Exchange symbol, e.g. "INFY".
    pub symbol: String,
    /// Company name, e.g. "Infosys Ltd".
    pub name: String,
}

impl Listing {
    /// Dropdown-style label, e.g. "INFY - Infosys Ltd".
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.symbol, self.name)
    }
}

/// Fully resolved provider ticker, including the exchange suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticker(String);

impl Ticker {
    /// Wrap a raw provider ticker string.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the ticker is empty or whitespace-only.
    pub fn new(raw: impl Into<String>) -> Result<Self, DalalError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(DalalError::InvalidArg("ticker must not be empty".into()));
        }
        Ok(Self(raw))
    }

    /// The raw ticker string, e.g. "INFY.NS".
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exchange implied by the ticker suffix, when recognized.
    #[must_use]
    pub fn exchange(&self) -> Option<Exchange> {
        Exchange::ALL
            .iter()
            .copied()
            .find(|e| self.0.ends_with(e.suffix()))
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
