use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DalalError;

/// The two Indian stock exchanges this toolkit can look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    /// National Stock Exchange of India.
    Nse,
    /// Bombay Stock Exchange.
    Bse,
}

impl Exchange {
    /// Canonical display code ("NSE" / "BSE").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nse => "NSE",
            Self::Bse => "BSE",
        }
    }

    /// Provider ticker suffix for this exchange (".NS" / ".BO").
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Nse => ".NS",
            Self::Bse => ".BO",
        }
    }

    /// Both exchanges, in display order.
    pub const ALL: &'static [Self] = &[Self::Nse, Self::Bse];
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = DalalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NSE" => Ok(Self::Nse),
            "BSE" => Ok(Self::Bse),
            other => Err(DalalError::InvalidArg(format!(
                "unknown exchange '{other}' (expected NSE or BSE)"
            ))),
        }
    }
}
