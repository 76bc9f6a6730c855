use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dalal_core::connector::{DalalConnector, ProfileProvider};
use dalal_core::{
    CacheConfig, Capability, CompanyProfile, DalalError, Exchange, Middleware, Ticker,
};
use dalal_middleware::CacheMiddleware;

#[derive(Default)]
struct ProfileOnly {
    calls: AtomicUsize,
}

#[async_trait]
impl DalalConnector for ProfileOnly {
    fn name(&self) -> &'static str {
        "profile-only"
    }
    fn supports_exchange(&self, _exchange: Exchange) -> bool {
        true
    }
    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self)
    }
}

#[async_trait]
impl ProfileProvider for ProfileOnly {
    async fn profile(&self, _ticker: &Ticker) -> Result<CompanyProfile, DalalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(CompanyProfile::default())
    }
}

#[tokio::test]
async fn entries_expire_after_ttl() {
    let mut cfg = CacheConfig::default();
    cfg.per_capability_ttl_ms.insert(Capability::Profile, 50);

    let inner = Arc::new(ProfileOnly::default());
    let wrapped = Box::new(CacheMiddleware::new(cfg)).apply(inner.clone());
    let ticker = Ticker::new("INFY.NS").unwrap();
    let p = wrapped.as_profile_provider().unwrap();

    p.profile(&ticker).await.unwrap();
    p.profile(&ticker).await.unwrap();
    assert_eq!(inner.calls.load(Ordering::SeqCst), 1);

    tokio::time::sleep(Duration::from_millis(80)).await;
    p.profile(&ticker).await.unwrap();
    assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn zero_ttl_disables_the_store() {
    let mut cfg = CacheConfig::default();
    cfg.per_capability_ttl_ms.insert(Capability::Profile, 0);

    let inner = Arc::new(ProfileOnly::default());
    let wrapped = Box::new(CacheMiddleware::new(cfg)).apply(inner.clone());
    let ticker = Ticker::new("INFY.NS").unwrap();
    let p = wrapped.as_profile_provider().unwrap();

    p.profile(&ticker).await.unwrap();
    p.profile(&ticker).await.unwrap();
    assert_eq!(inner.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn wrapper_only_advertises_inner_capabilities() {
    let inner = Arc::new(ProfileOnly::default());
    let wrapped = Box::new(CacheMiddleware::new(CacheConfig::default())).apply(inner);

    assert!(wrapped.as_profile_provider().is_some());
    assert!(wrapped.as_history_provider().is_none());
    assert!(wrapped.as_fundamentals_provider().is_none());
}
