//! Configuration types shared across the orchestrator and middleware.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capability::Capability;
use crate::connector::ConnectorKey;

/// Configuration for the caching middleware.
///
/// A TTL of zero disables caching for that capability entirely; the
/// per-capability maps override the defaults where present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Default time-to-live in milliseconds for cached responses.
    pub default_ttl_ms: u64,
    /// Default maximum number of entries per capability store.
    pub default_max_entries: u64,
    /// Per-capability TTL overrides in milliseconds.
    pub per_capability_ttl_ms: HashMap<Capability, u64>,
    /// Per-capability entry-count overrides.
    pub per_capability_max_entries: HashMap<Capability, u64>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            // One session-sized window; the dashboard refetches per click and
            // identical tickers within the window are served from cache.
            default_ttl_ms: 5 * 60 * 1000,
            default_max_entries: 256,
            per_capability_ttl_ms: HashMap::new(),
            per_capability_max_entries: HashMap::new(),
        }
    }
}

impl CacheConfig {
    /// Effective TTL for a capability, or `None` when caching is disabled.
    #[must_use]
    pub fn ttl_for(&self, cap: Capability) -> Option<Duration> {
        let ms = self
            .per_capability_ttl_ms
            .get(&cap)
            .copied()
            .unwrap_or(self.default_ttl_ms);
        (ms > 0).then(|| Duration::from_millis(ms))
    }

    /// Effective entry capacity for a capability.
    #[must_use]
    pub fn capacity_for(&self, cap: Capability) -> u64 {
        self.per_capability_max_entries
            .get(&cap)
            .copied()
            .unwrap_or(self.default_max_entries)
            .max(1)
    }
}

/// Global configuration for the `Dalal` orchestrator.
#[derive(Debug, Clone)]
pub struct DalalConfig {
    /// Preferred connector ordering; unlisted connectors keep registration order.
    pub priority: Vec<ConnectorKey>,
    /// Timeout applied to each individual provider request.
    pub provider_timeout: Duration,
}

impl Default for DalalConfig {
    fn default() -> Self {
        Self {
            priority: Vec::new(),
            provider_timeout: Duration::from_secs(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_ttl_disables_capability() {
        let mut cfg = CacheConfig::default();
        cfg.per_capability_ttl_ms.insert(Capability::History, 0);
        assert!(cfg.ttl_for(Capability::History).is_none());
        assert!(cfg.ttl_for(Capability::Profile).is_some());
    }

    #[test]
    fn capacity_is_never_zero() {
        let mut cfg = CacheConfig::default();
        cfg.per_capability_max_entries
            .insert(Capability::Profile, 0);
        assert_eq!(cfg.capacity_for(Capability::Profile), 1);
    }

    #[test]
    fn cache_config_round_trips_through_json() {
        let mut cfg = CacheConfig::default();
        cfg.per_capability_ttl_ms.insert(Capability::History, 1_000);

        let json = serde_json::to_string(&cfg).unwrap();
        let back: CacheConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.default_ttl_ms, cfg.default_ttl_ms);
        assert_eq!(back.per_capability_ttl_ms.get(&Capability::History), Some(&1_000));
    }
}
