use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use dalal_core::connector::ConnectorKey;
use dalal_core::{DalalConfig, DalalConnector, DalalError, Ticker};

/// Orchestrator that routes requests across registered providers.
pub struct Dalal {
    pub(crate) connectors: Vec<Arc<dyn DalalConnector>>,
    pub(crate) cfg: DalalConfig,
}

impl std::fmt::Debug for Dalal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dalal")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Dalal` orchestrator with custom configuration.
pub struct DalalBuilder {
    connectors: Vec<Arc<dyn DalalConnector>>,
    cfg: DalalConfig,
}

impl Default for DalalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DalalBuilder {
    /// Create a new builder with defaults: no connectors, 5s provider timeout,
    /// registration order as priority.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: DalalConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is used when no explicit priority is set. Duplicates
    /// are not deduplicated; avoid registering the same connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn DalalConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the preferred connector ordering. Unknown keys are dropped during
    /// `build`; unlisted connectors keep registration order after the listed
    /// ones.
    #[must_use]
    pub fn priority(mut self, keys: &[ConnectorKey]) -> Self {
        self.cfg.priority = keys.to_vec();
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Build the `Dalal` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered.
    pub fn build(mut self) -> Result<Dalal, DalalError> {
        if self.connectors.is_empty() {
            return Err(DalalError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        // Validate priority keys against registered connectors; drop unknowns and dedup.
        let known: HashSet<&'static str> = self.connectors.iter().map(|c| c.name()).collect();
        let mut seen: HashSet<&'static str> = HashSet::new();
        self.cfg
            .priority
            .retain(|k| known.contains(k.as_str()) && seen.insert(k.as_str()));

        Ok(Dalal {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub fn tag_err(connector: &str, e: DalalError) -> DalalError {
    match e {
        e @ (DalalError::NotFound { .. }
        | DalalError::ProviderTimeout { .. }
        | DalalError::Connector { .. }
        | DalalError::AllProvidersFailed(_)) => e,
        other => DalalError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Dalal {
    /// Start building a new `Dalal` instance.
    #[must_use]
    pub fn builder() -> DalalBuilder {
        DalalBuilder::new()
    }

    /// Wrap a provider future with a timeout and standardized timeout error mapping.
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, DalalError>
    where
        Fut: core::future::Future<Output = Result<T, DalalError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(DalalError::provider_timeout(connector_name, capability)))
    }

    pub(crate) fn ordered(&self) -> Vec<Arc<dyn DalalConnector>> {
        let mut out: Vec<(usize, Arc<dyn DalalConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();
        if self.cfg.priority.is_empty() {
            return out.into_iter().map(|(_, c)| c).collect();
        }
        let pos: HashMap<_, _> = self
            .cfg
            .priority
            .iter()
            .enumerate()
            .map(|(i, k)| (k.as_str(), i))
            .collect();
        out.sort_by_key(|(orig_i, c)| (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i));
        out.into_iter().map(|(_, c)| c).collect()
    }

    /// Generic single-item fetch helper.
    ///
    /// - Iterates eligible providers in priority order.
    /// - Applies the per-provider timeout to each call.
    /// - Aggregates errors; when every attempted provider reported `NotFound`,
    ///   the aggregate collapses into a single `NotFound` for the ticker.
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        ticker: &Ticker,
        capability_label: &'static str,
        not_found_label: &'static str,
        call: F,
    ) -> Result<T, DalalError>
    where
        T: Send,
        F: Fn(Arc<dyn DalalConnector>, Ticker) -> Option<Fut> + Send,
        Fut: core::future::Future<Output = Result<T, DalalError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<DalalError> = Vec::new();

        for c in self.ordered() {
            if let Some(fut) = call(c.clone(), ticker.clone()) {
                attempted_any = true;
                match Self::provider_call_with_timeout(
                    c.name(),
                    capability_label,
                    self.cfg.provider_timeout,
                    fut,
                )
                .await
                {
                    Ok(v) => return Ok(v),
                    Err(e @ DalalError::NotFound { .. }) => errors.push(e),
                    Err(e @ DalalError::ProviderTimeout { .. }) => errors.push(e),
                    Err(e) => errors.push(tag_err(c.name(), e)),
                }
            }
        }

        if !attempted_any {
            return Err(DalalError::unsupported(capability_label));
        }

        if !errors.is_empty()
            && errors
                .iter()
                .all(|e| matches!(e, DalalError::NotFound { .. }))
        {
            return Err(DalalError::not_found(format!(
                "{not_found_label} for {ticker}"
            )));
        }

        Err(DalalError::AllProvidersFailed(errors))
    }
}
