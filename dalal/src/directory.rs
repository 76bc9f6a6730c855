//! Listing tables for the two exchanges.
//!
//! Tables are loaded once at startup, either from `Symbol,Name` CSV files or
//! from the embedded defaults, and stay immutable for the process lifetime.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use dalal_core::{DalalError, Exchange, Listing};

/// A handful of liquid names per exchange so the tool works with no files on
/// disk. Real deployments load full tables from CSV.
const NSE_DEFAULTS: &[(&str, &str)] = &[
    ("RELIANCE", "Reliance Industries Ltd"),
    ("TCS", "Tata Consultancy Services Ltd"),
    ("HDFCBANK", "HDFC Bank Ltd"),
    ("INFY", "Infosys Ltd"),
    ("ICICIBANK", "ICICI Bank Ltd"),
    ("HINDUNILVR", "Hindustan Unilever Ltd"),
    ("ITC", "ITC Ltd"),
    ("SBIN", "State Bank of India"),
    ("BHARTIARTL", "Bharti Airtel Ltd"),
    ("LT", "Larsen & Toubro Ltd"),
];

const BSE_DEFAULTS: &[(&str, &str)] = &[
    ("RELIANCE", "Reliance Industries Ltd"),
    ("TCS", "Tata Consultancy Services Ltd"),
    ("HDFCBANK", "HDFC Bank Ltd"),
    ("INFY", "Infosys Ltd"),
    ("ICICIBANK", "ICICI Bank Ltd"),
    ("ITC", "ITC Ltd"),
    ("SBIN", "State Bank of India"),
    ("TATAMOTORS", "Tata Motors Ltd"),
    ("MARUTI", "Maruti Suzuki India Ltd"),
    ("WIPRO", "Wipro Ltd"),
];

#[derive(Debug, Deserialize)]
struct ListingRecord {
    #[serde(rename = "Symbol")]
    symbol: String,
    #[serde(rename = "Name")]
    name: String,
}

/// Immutable-after-load symbol tables, one per exchange.
pub struct SymbolDirectory {
    tables: HashMap<Exchange, Vec<Listing>>,
}

impl Default for SymbolDirectory {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl SymbolDirectory {
    /// Directory seeded with the embedded per-exchange defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut tables = HashMap::new();
        for (exchange, rows) in [(Exchange::Nse, NSE_DEFAULTS), (Exchange::Bse, BSE_DEFAULTS)] {
            tables.insert(
                exchange,
                rows.iter()
                    .map(|(symbol, name)| Listing {
                        symbol: (*symbol).to_string(),
                        name: (*name).to_string(),
                    })
                    .collect(),
            );
        }
        Self { tables }
    }

    /// Replace one exchange's table with rows from a `Symbol,Name` CSV file.
    ///
    /// # Errors
    /// Returns `Data` when the file cannot be read or parsed, and `InvalidArg`
    /// when a row carries an empty or duplicate symbol.
    pub fn load_csv_path(
        &mut self,
        exchange: Exchange,
        path: impl AsRef<Path>,
    ) -> Result<(), DalalError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            DalalError::Data(format!("cannot open symbol table {}: {e}", path.display()))
        })?;
        self.load_csv(exchange, file)
    }

    /// Replace one exchange's table with rows from a `Symbol,Name` CSV reader.
    ///
    /// # Errors
    /// Returns `Data` when a record cannot be parsed, and `InvalidArg` when a
    /// row carries an empty or duplicate symbol.
    pub fn load_csv<R: Read>(&mut self, exchange: Exchange, reader: R) -> Result<(), DalalError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut listings = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for record in csv_reader.deserialize::<ListingRecord>() {
            let record = record
                .map_err(|e| DalalError::Data(format!("bad {exchange} symbol row: {e}")))?;
            let symbol = record.symbol.trim().to_string();
            if symbol.is_empty() {
                return Err(DalalError::InvalidArg(format!(
                    "{exchange} symbol table contains an empty symbol"
                )));
            }
            if !seen.insert(symbol.to_ascii_uppercase()) {
                return Err(DalalError::InvalidArg(format!(
                    "{exchange} symbol table lists '{symbol}' more than once"
                )));
            }
            listings.push(Listing {
                symbol,
                name: record.name.trim().to_string(),
            });
        }

        tracing::debug!(
            target: "dalal::directory",
            exchange = %exchange,
            rows = listings.len(),
            "loaded symbol table"
        );
        self.tables.insert(exchange, listings);
        Ok(())
    }

    /// All listings for an exchange, in table order.
    #[must_use]
    pub fn listings(&self, exchange: Exchange) -> &[Listing] {
        self.tables.get(&exchange).map_or(&[], Vec::as_slice)
    }

    /// Dropdown-style labels ("SYMBOL - Name") for an exchange.
    #[must_use]
    pub fn labels(&self, exchange: Exchange) -> Vec<String> {
        self.listings(exchange)
            .iter()
            .map(Listing::label)
            .collect()
    }

    /// Look up a listing by symbol, case-insensitively.
    #[must_use]
    pub fn find(&self, exchange: Exchange, symbol: &str) -> Option<&Listing> {
        let needle = symbol.trim();
        self.listings(exchange)
            .iter()
            .find(|l| l.symbol.eq_ignore_ascii_case(needle))
    }
}
