//! Named exchange rate providers.
//!
//! The registry maps provider names to providers and resolves the default
//! conversion through an ordered chain of names.

use std::sync::Arc;

use once_cell::sync::Lazy;
use tracing::debug;
use valor_shared::config::RatesConfig;
use valor_shared::types::Currency;

use super::cache::CachedRateProvider;
use super::conversion::CurrencyConversion;
use super::provider::{ExchangeRateProvider, IdentityRateProvider, ProviderChain, ecb, imf};
use crate::money::MoneyError;

static GLOBAL: Lazy<ConversionRegistry> = Lazy::new(|| {
    let registry = ConversionRegistry::builtin();
    debug!(providers = ?registry.provider_names(), "Conversion registry initialized");
    registry
});

/// Lookup table of named providers plus the default resolution order.
#[derive(Debug, Clone)]
pub struct ConversionRegistry {
    providers: Vec<Arc<dyn ExchangeRateProvider>>,
    default_chain: Vec<String>,
}

impl ConversionRegistry {
    /// Empty registry with the given default chain.
    #[must_use]
    pub fn new(default_chain: Vec<String>) -> Self {
        Self {
            providers: Vec::new(),
            default_chain,
        }
    }

    /// Registry with the built-in providers (`IDENT`, `ECB`, `IMF`) and the
    /// default chain in that order.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_config(&RatesConfig::default())
    }

    /// Built-in providers, each wrapped in a rate cache sized by `config`.
    #[must_use]
    pub fn from_config(config: &RatesConfig) -> Self {
        let builtins: [Arc<dyn ExchangeRateProvider>; 3] =
            [Arc::new(IdentityRateProvider), Arc::new(ecb()), Arc::new(imf())];
        builtins.into_iter().fold(
            Self::new(config.default_chain.clone()),
            |registry, provider| {
                registry.with_provider(Arc::new(CachedRateProvider::from_config(provider, config)))
            },
        )
    }

    /// Process-wide registry, initialized once on first use.
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers a provider. A provider with the same name is replaced.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn ExchangeRateProvider>) -> Self {
        self.providers
            .retain(|p| !p.name().eq_ignore_ascii_case(provider.name()));
        self.providers.push(provider);
        self
    }

    /// Names of the registered providers, in registration order.
    #[must_use]
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Names tried by [`ConversionRegistry::conversion`].
    #[must_use]
    pub fn default_chain(&self) -> &[String] {
        &self.default_chain
    }

    /// Looks up a provider by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotFound` when no provider has that name.
    pub fn provider(&self, name: &str) -> Result<Arc<dyn ExchangeRateProvider>, MoneyError> {
        self.providers
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
            .cloned()
            .ok_or_else(|| MoneyError::ProviderNotFound(name.to_string()))
    }

    /// Conversion into `term` through the default chain.
    ///
    /// Fails at lookup time with `NoRateAvailable` when no provider in the
    /// chain quotes the pair.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotFound` when the chain names an unknown provider.
    pub fn conversion(&self, term: Currency) -> Result<CurrencyConversion, MoneyError> {
        let names: Vec<&str> = self.default_chain.iter().map(String::as_str).collect();
        self.conversion_with(term, &names)
    }

    /// Conversion into `term` trying the named providers in order.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotFound` when any name is unknown.
    pub fn conversion_with(
        &self,
        term: Currency,
        names: &[&str],
    ) -> Result<CurrencyConversion, MoneyError> {
        let providers = names
            .iter()
            .map(|name| self.provider(name))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CurrencyConversion::new(
            Arc::new(ProviderChain::new(providers)),
            term,
        ))
    }

    /// Conversion into `term` through one named provider.
    ///
    /// # Errors
    ///
    /// Returns `ProviderNotFound` for an unknown name.
    pub fn provider_conversion(
        &self,
        name: &str,
        term: Currency,
    ) -> Result<CurrencyConversion, MoneyError> {
        Ok(CurrencyConversion::new(self.provider(name)?, term))
    }

    /// Whether the default chain can quote `base` into `term`.
    #[must_use]
    pub fn is_conversion_available(&self, base: Currency, term: Currency) -> bool {
        self.conversion(term)
            .and_then(|conversion| conversion.exchange_rate(base))
            .is_ok()
    }
}

/// Provider registered globally under `name`.
///
/// # Errors
///
/// Returns `ProviderNotFound` for an unknown name.
pub fn provider(name: &str) -> Result<Arc<dyn ExchangeRateProvider>, MoneyError> {
    ConversionRegistry::global().provider(name)
}

/// Default global conversion into `term`.
///
/// # Errors
///
/// Returns `ProviderNotFound` when the default chain is misconfigured.
pub fn conversion(term: Currency) -> Result<CurrencyConversion, MoneyError> {
    ConversionRegistry::global().conversion(term)
}
