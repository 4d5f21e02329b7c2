//! Currency registry.
//!
//! Resolves ISO 4217 codes and locales to [`Currency`] values. The registry
//! is read-only after construction; [`CurrencyRegistry::global`] is built
//! once on first access.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;
use valor_shared::types::{Currency, Locale};

use super::error::MoneyError;

/// Currencies known to the built-in registry.
const BUILTIN_CURRENCIES: [Currency; 10] = [
    Currency::AUD,
    Currency::BRL,
    Currency::CAD,
    Currency::CHF,
    Currency::CNY,
    Currency::EUR,
    Currency::GBP,
    Currency::INR,
    Currency::JPY,
    Currency::USD,
];

/// Country code to currency code.
const BUILTIN_COUNTRIES: [(&str, &str); 14] = [
    ("AU", "AUD"),
    ("BR", "BRL"),
    ("CA", "CAD"),
    ("CH", "CHF"),
    ("CN", "CNY"),
    ("DE", "EUR"),
    ("ES", "EUR"),
    ("FR", "EUR"),
    ("GB", "GBP"),
    ("IN", "INR"),
    ("IT", "EUR"),
    ("JP", "JPY"),
    ("PT", "EUR"),
    ("US", "USD"),
];

static GLOBAL: Lazy<CurrencyRegistry> = Lazy::new(|| {
    let registry = CurrencyRegistry::new();
    debug!(
        currencies = registry.by_code.len(),
        countries = registry.by_country.len(),
        "Currency registry initialized"
    );
    registry
});

/// Lookup table from codes and countries to currencies.
#[derive(Debug, Clone)]
pub struct CurrencyRegistry {
    by_code: HashMap<String, Currency>,
    by_country: HashMap<String, String>,
}

impl CurrencyRegistry {
    /// Creates a registry with the built-in currency and locale tables.
    #[must_use]
    pub fn new() -> Self {
        Self::from_tables(BUILTIN_CURRENCIES, BUILTIN_COUNTRIES)
    }

    /// Creates a registry from explicit tables.
    ///
    /// `countries` maps an ISO 3166 country code to a currency code.
    #[must_use]
    pub fn from_tables<C, L, K, V>(currencies: C, countries: L) -> Self
    where
        C: IntoIterator<Item = Currency>,
        L: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let by_code = currencies
            .into_iter()
            .map(|c| (c.code().to_ascii_uppercase(), c))
            .collect();
        let by_country = countries
            .into_iter()
            .map(|(country, code)| {
                (
                    country.as_ref().to_ascii_uppercase(),
                    code.as_ref().to_ascii_uppercase(),
                )
            })
            .collect();
        Self {
            by_code,
            by_country,
        }
    }

    /// The process-wide registry.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Looks up a currency by its code, case-insensitively.
    pub fn lookup(&self, code: &str) -> Result<Currency, MoneyError> {
        self.by_code
            .get(&code.trim().to_ascii_uppercase())
            .copied()
            .ok_or_else(|| MoneyError::CurrencyNotFound(code.to_string()))
    }

    /// Resolves the canonical currency of a locale's country.
    pub fn lookup_by_locale(&self, locale: &Locale) -> Result<Currency, MoneyError> {
        locale
            .country()
            .and_then(|country| self.by_country.get(country))
            .ok_or_else(|| MoneyError::CurrencyNotFound(locale.to_string()))
            .and_then(|code| self.lookup(code))
    }

    /// Returns true if the code is known.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.lookup(code).is_ok()
    }

    /// All currencies, sorted by code.
    #[must_use]
    pub fn currencies(&self) -> Vec<Currency> {
        let mut all: Vec<_> = self.by_code.values().copied().collect();
        all.sort();
        all
    }
}

impl Default for CurrencyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Looks up a currency code in the global registry.
pub fn currency(code: &str) -> Result<Currency, MoneyError> {
    CurrencyRegistry::global().lookup(code)
}

/// Resolves a locale's currency in the global registry.
pub fn currency_for_locale(locale: &Locale) -> Result<Currency, MoneyError> {
    CurrencyRegistry::global().lookup_by_locale(locale)
}
