//! Dalal looks up Indian equities and turns provider data into display-ready
//! snapshot reports.
//!
//! Overview
//! - Loads NSE/BSE listing tables and produces dropdown-style labels.
//! - Resolves an (exchange, selection) pair to a provider ticker
//!   (`INFY` on NSE becomes `INFY.NS`).
//! - Routes history/profile/fundamentals requests to connectors implementing
//!   the `dalal_core` contracts, with priority fallback and per-provider
//!   timeouts.
//! - Assembles the normalized [`StockReport`]: latest close, previous close,
//!   day range, change percent, and the fundamentals/description block, with
//!   non-fatal provider issues carried as warnings.
//!
//! Building an orchestrator and fetching a report:
//! ```rust,ignore
//! use std::sync::Arc;
//! use dalal::{Dalal, resolver};
//! use dalal_core::Exchange;
//!
//! let yahoo = Arc::new(dalal_yahoo::YahooConnector::try_default()?);
//! let dalal = Dalal::builder().with_connector(yahoo).build()?;
//!
//! let ticker = resolver::resolve_ticker(Exchange::Nse, "INFY - Infosys Ltd")?;
//! let report = dalal.snapshot(&ticker).await?;
//! println!("{}", report.price);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
/// Symbol tables for the two exchanges, with CSV loading and embedded defaults.
pub mod directory;
/// Exchange-suffix ticker resolution.
pub mod resolver;
mod router;

pub use crate::core::{Dalal, DalalBuilder};
pub use directory::SymbolDirectory;

pub use dalal_middleware::CacheMiddleware;

// Re-export core types for convenience
pub use dalal_core::{
    CacheConfig,
    Candle,
    Capability,
    CompanyProfile,
    ConnectorKey,
    DalalConfig,
    DalalConnector,
    DalalError,
    Exchange,
    Field,
    Fundamentals,
    HistoryRequest,
    HistoryResponse,
    Interval,
    Listing,
    Middleware,
    Range,
    StockReport,
    Ticker,
    safe_format,
};
