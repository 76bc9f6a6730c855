use std::sync::Arc;

use async_trait::async_trait;
use dalal_core::connector::{
    DalalConnector, FundamentalsProvider, HistoryProvider, ProfileProvider,
};
use dalal_core::{
    CompanyProfile, DalalError, Exchange, Fundamentals, HistoryRequest, HistoryResponse, Ticker,
};
use dalal_types::{CacheConfig, Capability};
use moka::future::Cache;

/// Identity of a history fetch for caching discrimination: the same ticker
/// requested over a different window must not share an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct HistoryKey {
    ticker: String,
    range: dalal_core::Range,
    interval: dalal_core::Interval,
}

impl HistoryKey {
    fn from_request(ticker: &Ticker, req: &HistoryRequest) -> Self {
        Self {
            ticker: ticker.as_str().to_string(),
            range: req.range,
            interval: req.interval,
        }
    }
}

/// Declarative wrapper that applies caching when building a connector stack.
pub struct CacheMiddleware {
    cfg: CacheConfig,
}

impl CacheMiddleware {
    /// Build the middleware from a cache configuration.
    #[must_use]
    pub const fn new(cfg: CacheConfig) -> Self {
        Self { cfg }
    }
}

impl dalal_core::Middleware for CacheMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn DalalConnector>) -> Arc<dyn DalalConnector> {
        let Self { cfg } = *self;
        Arc::new(CachingConnector::new(inner, &cfg))
    }

    fn name(&self) -> &'static str {
        "CachingMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "default_ttl_ms": self.cfg.default_ttl_ms,
            "default_max_entries": self.cfg.default_max_entries,
            "per_capability_ttl_ms": self.cfg.per_capability_ttl_ms,
            "per_capability_max_entries": self.cfg.per_capability_max_entries,
        })
    }
}

// Per-capability typed stores; `None` means disabled (TTL=0).
struct Stores {
    history: Option<Cache<HistoryKey, Arc<HistoryResponse>>>,
    profile: Option<Cache<String, Arc<CompanyProfile>>>,
    fundamentals: Option<Cache<String, Arc<Fundamentals>>>,
}

/// Connector wrapper that memoizes successful responses per ticker.
pub struct CachingConnector {
    inner: Arc<dyn DalalConnector>,
    stores: Stores,
}

impl CachingConnector {
    fn maybe_store<K, V>(cfg: &CacheConfig, cap: Capability) -> Option<Cache<K, V>>
    where
        K: std::hash::Hash + Eq + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let ttl = cfg.ttl_for(cap)?;
        Some(
            Cache::builder()
                .max_capacity(cfg.capacity_for(cap))
                .time_to_live(ttl)
                .build(),
        )
    }

    /// Wrap `inner` with per-capability caches derived from `cfg`.
    #[must_use]
    pub fn new(inner: Arc<dyn DalalConnector>, cfg: &CacheConfig) -> Self {
        let stores = Stores {
            history: Self::maybe_store(cfg, Capability::History),
            profile: Self::maybe_store(cfg, Capability::Profile),
            fundamentals: Self::maybe_store(cfg, Capability::Fundamentals),
        };
        Self { inner, stores }
    }
}

#[async_trait]
impl DalalConnector for CachingConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    fn supports_exchange(&self, exchange: Exchange) -> bool {
        self.inner.supports_exchange(exchange)
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        if self.inner.as_history_provider().is_some() {
            Some(self as &dyn HistoryProvider)
        } else {
            None
        }
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        if self.inner.as_profile_provider().is_some() {
            Some(self as &dyn ProfileProvider)
        } else {
            None
        }
    }

    fn as_fundamentals_provider(&self) -> Option<&dyn FundamentalsProvider> {
        if self.inner.as_fundamentals_provider().is_some() {
            Some(self as &dyn FundamentalsProvider)
        } else {
            None
        }
    }
}

#[async_trait]
impl HistoryProvider for CachingConnector {
    async fn history(
        &self,
        ticker: &Ticker,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, DalalError> {
        if let Some(store) = &self.stores.history {
            let key = HistoryKey::from_request(ticker, &req);
            if let Some(v) = store.get(&key).await {
                return Ok((*v).clone());
            }
            let inner = self
                .inner
                .as_history_provider()
                .ok_or_else(|| DalalError::unsupported("history"))?;
            let value = inner.history(ticker, req).await?;
            store.insert(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner
            .as_history_provider()
            .ok_or_else(|| DalalError::unsupported("history"))?
            .history(ticker, req)
            .await
    }
}

#[async_trait]
impl ProfileProvider for CachingConnector {
    async fn profile(&self, ticker: &Ticker) -> Result<CompanyProfile, DalalError> {
        if let Some(store) = &self.stores.profile {
            let key = ticker.as_str().to_string();
            if let Some(v) = store.get(&key).await {
                return Ok((*v).clone());
            }
            let inner = self
                .inner
                .as_profile_provider()
                .ok_or_else(|| DalalError::unsupported("profile"))?;
            let value = inner.profile(ticker).await?;
            store.insert(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner
            .as_profile_provider()
            .ok_or_else(|| DalalError::unsupported("profile"))?
            .profile(ticker)
            .await
    }
}

#[async_trait]
impl FundamentalsProvider for CachingConnector {
    async fn fundamentals(&self, ticker: &Ticker) -> Result<Fundamentals, DalalError> {
        if let Some(store) = &self.stores.fundamentals {
            let key = ticker.as_str().to_string();
            if let Some(v) = store.get(&key).await {
                return Ok((*v).clone());
            }
            let inner = self
                .inner
                .as_fundamentals_provider()
                .ok_or_else(|| DalalError::unsupported("fundamentals"))?;
            let value = inner.fundamentals(ticker).await?;
            store.insert(key, Arc::new(value.clone())).await;
            return Ok(value);
        }
        self.inner
            .as_fundamentals_provider()
            .ok_or_else(|| DalalError::unsupported("fundamentals"))?
            .fundamentals(ticker)
            .await
    }
}
