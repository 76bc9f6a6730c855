use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and cache keying.
///
/// These map one-to-one with router endpoints and allow consistent
/// Display formatting and match-exhaustive handling when adding
/// new capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Recent OHLC candles for a single ticker.
    History,
    /// Company profile (name, sector, business summary).
    Profile,
    /// Valuation fundamentals (market cap, P/E, 52-week range).
    Fundamentals,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Profile => "profile",
            Self::Fundamentals => "fundamentals",
        }
    }

    /// All capabilities, in routing order.
    pub const ALL: &'static [Self] = &[Self::History, Self::Profile, Self::Fundamentals];
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
