//! dalal-middleware
//!
//! Connector wrappers that augment a `DalalConnector` without changing its
//! contract. The only middleware this workspace carries is response caching:
//! the dashboard refetches on every click, and identical tickers within the
//! cache window are served without another provider round-trip.
#![warn(missing_docs)]

mod cache;

pub use cache::{CacheMiddleware, CachingConnector};
