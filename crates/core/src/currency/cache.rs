//! Exchange rate caching using Moka.
//!
//! Wraps any provider so repeated lookups of the same pair skip the
//! underlying source. Only successful quotes are cached.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use tracing::debug;
use valor_shared::config::RatesConfig;
use valor_shared::types::Currency;

use super::exchange::ExchangeRate;
use super::provider::ExchangeRateProvider;
use crate::money::MoneyError;

/// Default cache capacity (number of currency pairs).
const DEFAULT_CACHE_CAPACITY: u64 = 1000;

/// Default time-to-live for cache entries (1 hour).
const DEFAULT_TTL_SECS: u64 = 3600;

/// A provider decorated with an in-memory rate cache.
///
/// Thread-safe and suitable for concurrent access.
#[derive(Debug, Clone)]
pub struct CachedRateProvider {
    inner: Arc<dyn ExchangeRateProvider>,
    cache: Cache<(Currency, Currency), ExchangeRate>,
}

impl CachedRateProvider {
    /// Wraps `inner` with default settings.
    ///
    /// Default: 1000 pairs max, 1 hour TTL.
    #[must_use]
    pub fn new(inner: Arc<dyn ExchangeRateProvider>) -> Self {
        Self::with_config(inner, DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Wraps `inner` with custom capacity and time-to-live.
    #[must_use]
    pub fn with_config(
        inner: Arc<dyn ExchangeRateProvider>,
        max_capacity: u64,
        ttl_secs: u64,
    ) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { inner, cache }
    }

    /// Wraps `inner` using the rates configuration.
    #[must_use]
    pub fn from_config(inner: Arc<dyn ExchangeRateProvider>, config: &RatesConfig) -> Self {
        Self::with_config(inner, config.cache_capacity, config.cache_ttl_secs)
    }

    /// Invalidates all cached rates.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl ExchangeRateProvider for CachedRateProvider {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn rate(&self, base: Currency, term: Currency) -> Result<ExchangeRate, MoneyError> {
        let key = (base, term);
        if let Some(rate) = self.cache.get(&key) {
            debug!(provider = self.name(), %base, %term, "Exchange rate cache hit");
            return Ok(rate);
        }

        let rate = self.inner.rate(base, term)?;
        self.cache.insert(key, rate.clone());
        Ok(rate)
    }
}
