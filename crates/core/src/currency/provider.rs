//! Exchange rate providers.
//!
//! A provider is a named source of rates. Providers may disagree on the same
//! pair; callers pick one explicitly or go through the registry's default
//! chain.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use valor_shared::ArithmeticError;
use valor_shared::types::Currency;

use super::exchange::{ExchangeRate, RateLookupMethod};
use crate::money::MoneyError;

/// A named source of exchange rates.
pub trait ExchangeRateProvider: Send + Sync + Debug {
    /// Registry key, e.g. "ECB".
    fn name(&self) -> &str;

    /// Quotes `1 base = factor term`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::NoRateAvailable`] if the pair cannot be quoted.
    fn rate(&self, base: Currency, term: Currency) -> Result<ExchangeRate, MoneyError>;

    /// Returns true if the pair can be quoted.
    fn is_available(&self, base: Currency, term: Currency) -> bool {
        self.rate(base, term).is_ok()
    }
}

/// Quotes only same-currency pairs, at a factor of one.
#[derive(Debug, Clone, Default)]
pub struct IdentityRateProvider;

impl IdentityRateProvider {
    /// Registry name of the identity provider.
    pub const NAME: &'static str = "IDENT";
}

impl ExchangeRateProvider for IdentityRateProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn rate(&self, base: Currency, term: Currency) -> Result<ExchangeRate, MoneyError> {
        if base != term {
            return Err(MoneyError::no_rate(base, term));
        }
        Ok(ExchangeRate::new(
            base,
            term,
            Decimal::ONE,
            Self::NAME,
            NaiveDate::default(),
            RateLookupMethod::Identity,
        ))
    }
}

/// A fixed rate table quoted against one anchor currency.
///
/// Holds `1 anchor = q currency` quotes and derives every other pair:
/// - anchor -> X: direct
/// - X -> anchor: inverse
/// - X -> Y: triangulated as `q(Y) / q(X)`
#[derive(Debug, Clone)]
pub struct StaticRateProvider {
    name: String,
    anchor: Currency,
    effective_date: NaiveDate,
    quotes: HashMap<Currency, Decimal>,
}

impl StaticRateProvider {
    /// Creates an empty table.
    #[must_use]
    pub fn new(name: impl Into<String>, anchor: Currency, effective_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            anchor,
            effective_date,
            quotes: HashMap::new(),
        }
    }

    /// Adds `1 anchor = factor term`; non-positive factors are ignored.
    #[must_use]
    pub fn with_quote(mut self, term: Currency, factor: Decimal) -> Self {
        if factor > Decimal::ZERO && term != self.anchor {
            self.quotes.insert(term, factor);
        } else {
            warn!(provider = %self.name, %term, %factor, "Ignoring invalid quote");
        }
        self
    }

    /// The anchor currency.
    #[must_use]
    pub const fn anchor(&self) -> Currency {
        self.anchor
    }

    /// Currencies this table can quote, including the anchor, sorted by code.
    #[must_use]
    pub fn currencies(&self) -> Vec<Currency> {
        let mut all: Vec<_> = self.quotes.keys().copied().collect();
        all.push(self.anchor);
        all.sort();
        all
    }

    fn quote(
        &self,
        base: Currency,
        term: Currency,
    ) -> Result<(Decimal, RateLookupMethod), MoneyError> {
        if base == term {
            return Ok((Decimal::ONE, RateLookupMethod::Identity));
        }
        if base == self.anchor {
            if let Some(q) = self.quotes.get(&term) {
                return Ok((*q, RateLookupMethod::Direct));
            }
        }
        let (Some(q_base), q_term) = (self.quotes.get(&base), self.quotes.get(&term)) else {
            return Err(MoneyError::no_rate(base, term));
        };
        let (numerator, method) = if term == self.anchor {
            (Decimal::ONE, RateLookupMethod::Inverse)
        } else {
            let q_term = q_term.ok_or_else(|| MoneyError::no_rate(base, term))?;
            (*q_term, RateLookupMethod::Triangulated)
        };
        let factor = numerator
            .checked_div(*q_base)
            .ok_or(ArithmeticError::Overflow("cross rate"))?;
        Ok((factor, method))
    }
}

impl ExchangeRateProvider for StaticRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn rate(&self, base: Currency, term: Currency) -> Result<ExchangeRate, MoneyError> {
        let (factor, method) = self.quote(base, term)?;
        debug!(provider = %self.name, %base, %term, %factor, ?method, "Exchange rate resolved");
        Ok(ExchangeRate::new(
            base,
            term,
            factor,
            self.name.clone(),
            self.effective_date,
            method,
        ))
    }
}

/// Tries several providers in order; the first one able to quote wins.
#[derive(Debug, Clone)]
pub struct ProviderChain {
    name: String,
    providers: Vec<Arc<dyn ExchangeRateProvider>>,
}

impl ProviderChain {
    /// Chains `providers`, named after their names joined by commas.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn ExchangeRateProvider>>) -> Self {
        let name = providers
            .iter()
            .map(|p| p.name())
            .collect::<Vec<_>>()
            .join(",");
        Self { name, providers }
    }
}

impl ExchangeRateProvider for ProviderChain {
    fn name(&self) -> &str {
        &self.name
    }

    fn rate(&self, base: Currency, term: Currency) -> Result<ExchangeRate, MoneyError> {
        for provider in &self.providers {
            match provider.rate(base, term) {
                Ok(rate) => return Ok(rate),
                Err(MoneyError::NoRateAvailable { .. }) => {
                    debug!(
                        provider = provider.name(),
                        %base,
                        %term,
                        "Provider cannot quote pair, trying next"
                    );
                }
                Err(other) => return Err(other),
            }
        }
        warn!(chain = %self.name, %base, %term, "No provider in chain could quote pair");
        Err(MoneyError::no_rate(base, term))
    }
}

// ========== Built-in Reference Tables ==========

fn reference_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn table(
    name: &str,
    anchor: Currency,
    effective_date: NaiveDate,
    quotes: &[(Currency, i64, u32)],
) -> StaticRateProvider {
    quotes.iter().fold(
        StaticRateProvider::new(name, anchor, effective_date),
        |provider, &(term, mantissa, scale)| {
            provider.with_quote(term, Decimal::new(mantissa, scale))
        },
    )
}

/// European Central Bank style reference table, anchored on EUR.
#[must_use]
pub fn ecb() -> StaticRateProvider {
    table(
        "ECB",
        Currency::EUR,
        reference_date(2024, 1, 2),
        &[
            (Currency::USD, 110, 2),
            (Currency::BRL, 539, 2),
            (Currency::JPY, 1557, 1),
            (Currency::GBP, 86, 2),
            (Currency::CHF, 93, 2),
            (Currency::CAD, 146, 2),
            (Currency::AUD, 162, 2),
            (Currency::CNY, 785, 2),
            (Currency::INR, 916, 1),
        ],
    )
}

/// International Monetary Fund style reference table, anchored on USD.
#[must_use]
pub fn imf() -> StaticRateProvider {
    table(
        "IMF",
        Currency::USD,
        reference_date(2024, 1, 2),
        &[
            (Currency::BRL, 495, 2),
            (Currency::EUR, 91, 2),
            (Currency::JPY, 1415, 1),
            (Currency::GBP, 79, 2),
            (Currency::CHF, 85, 2),
            (Currency::CAD, 133, 2),
            (Currency::AUD, 148, 2),
            (Currency::CNY, 710, 2),
            (Currency::INR, 832, 1),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_identity_provider() {
        let provider = IdentityRateProvider;
        let rate = provider.rate(Currency::BRL, Currency::BRL).unwrap();
        assert_eq!(rate.factor, Decimal::ONE);
        assert_eq!(rate.method, RateLookupMethod::Identity);
        assert!(!provider.is_available(Currency::BRL, Currency::USD));
    }

    #[test]
    fn test_direct_rate() {
        let rate = imf().rate(Currency::USD, Currency::BRL).unwrap();
        assert_eq!(rate.factor, dec!(4.95));
        assert_eq!(rate.method, RateLookupMethod::Direct);
        assert_eq!(rate.provider, "IMF");
        assert_eq!(rate.effective_date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_provider_anchors() {
        assert_eq!(imf().anchor(), Currency::USD);
        assert_eq!(ecb().anchor(), Currency::EUR);
    }

    #[test]
    fn test_inverse_rate() {
        let rate = ecb().rate(Currency::USD, Currency::EUR).unwrap();
        assert_eq!(rate.method, RateLookupMethod::Inverse);
        assert_eq!(rate.factor.round_dp(4), dec!(0.9091));
    }

    #[test]
    fn test_triangulated_rate() {
        let rate = ecb().rate(Currency::USD, Currency::BRL).unwrap();
        assert_eq!(rate.method, RateLookupMethod::Triangulated);
        assert_eq!(rate.factor, dec!(4.9));
    }

    #[test]
    fn test_providers_disagree() {
        let imf_rate = imf().rate(Currency::USD, Currency::BRL).unwrap();
        let ecb_rate = ecb().rate(Currency::USD, Currency::BRL).unwrap();
        assert_ne!(imf_rate.factor, ecb_rate.factor);
    }

    #[test]
    fn test_unknown_pair() {
        let provider = StaticRateProvider::new("TEST", Currency::USD, NaiveDate::default())
            .with_quote(Currency::BRL, dec!(5));
        assert_eq!(
            provider.rate(Currency::BRL, Currency::JPY),
            Err(MoneyError::no_rate("BRL", "JPY"))
        );
        assert_eq!(
            provider.rate(Currency::EUR, Currency::USD),
            Err(MoneyError::no_rate("EUR", "USD"))
        );
    }

    #[test]
    fn test_invalid_quotes_ignored() {
        let provider = StaticRateProvider::new("TEST", Currency::USD, NaiveDate::default())
            .with_quote(Currency::BRL, dec!(0))
            .with_quote(Currency::USD, dec!(2))
            .with_quote(Currency::EUR, dec!(-1));
        assert_eq!(provider.currencies(), vec![Currency::USD]);
    }

    #[test]
    fn test_chain_falls_through() {
        let chain = ProviderChain::new(vec![
            Arc::new(IdentityRateProvider),
            Arc::new(StaticRateProvider::new("EMPTY", Currency::USD, NaiveDate::default())),
            Arc::new(imf()),
        ]);
        assert_eq!(chain.name(), "IDENT,EMPTY,IMF");

        let same = chain.rate(Currency::JPY, Currency::JPY).unwrap();
        assert_eq!(same.provider, "IDENT");

        let cross = chain.rate(Currency::USD, Currency::BRL).unwrap();
        assert_eq!(cross.provider, "IMF");
    }

    #[test]
    fn test_chain_exhausted() {
        let chain = ProviderChain::new(vec![Arc::new(IdentityRateProvider)]);
        assert_eq!(
            chain.rate(Currency::USD, Currency::BRL),
            Err(MoneyError::no_rate("USD", "BRL"))
        );
    }
}
