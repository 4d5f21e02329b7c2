//! Currency conversion.
//!
//! A [`CurrencyConversion`] binds a provider to a target currency. Applying
//! it multiplies the amount by the quoted factor; the result keeps the
//! source amount's context and is not rounded to the target's minor units.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use valor_shared::ArithmeticError;
use valor_shared::types::Currency;

use super::exchange::ExchangeRate;
use super::provider::ExchangeRateProvider;
use crate::money::{MonetaryAmount, MonetaryOperator, MoneyError};

/// Converts an amount using the given exchange rate.
///
/// Uses banker's rounding (round half to even) to minimize cumulative errors.
///
/// # Errors
///
/// Returns [`ArithmeticError::Overflow`] when the product does not fit a decimal.
pub fn convert_amount(
    amount: Decimal,
    rate: Decimal,
    decimal_places: u32,
) -> Result<Decimal, ArithmeticError> {
    let converted = amount
        .checked_mul(rate)
        .ok_or(ArithmeticError::Overflow("conversion"))?;
    Ok(converted.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointNearestEven))
}

/// Conversion into one target currency through one provider.
#[derive(Debug, Clone)]
pub struct CurrencyConversion {
    provider: Arc<dyn ExchangeRateProvider>,
    term: Currency,
}

impl CurrencyConversion {
    /// Binds `provider` to the target currency `term`.
    #[must_use]
    pub fn new(provider: Arc<dyn ExchangeRateProvider>, term: Currency) -> Self {
        Self { provider, term }
    }

    /// Target currency.
    #[must_use]
    pub const fn term_currency(&self) -> Currency {
        self.term
    }

    /// Name of the provider in use.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Rate from `base` into the target currency.
    pub fn exchange_rate(&self, base: Currency) -> Result<ExchangeRate, MoneyError> {
        self.provider.rate(base, self.term)
    }

    /// Converts `amount` into the target currency.
    pub fn apply(&self, amount: &MonetaryAmount) -> Result<MonetaryAmount, MoneyError> {
        let rate = self.exchange_rate(amount.currency())?;
        let converted = amount
            .number()
            .checked_mul(rate.factor)
            .ok_or(ArithmeticError::Overflow("conversion"))?;
        Ok(amount.rebind(converted, self.term))
    }

    /// Converts and rounds to the target currency's minor-unit digits.
    pub fn apply_rounded(&self, amount: &MonetaryAmount) -> Result<MonetaryAmount, MoneyError> {
        let rate = self.exchange_rate(amount.currency())?;
        let converted = convert_amount(
            amount.number(),
            rate.factor,
            self.term.default_fraction_digits(),
        )?;
        Ok(amount.rebind(converted, self.term))
    }
}

impl MonetaryOperator for CurrencyConversion {
    fn apply(&self, amount: &MonetaryAmount) -> Result<MonetaryAmount, MoneyError> {
        CurrencyConversion::apply(self, amount)
    }
}

/// Builds conversions straight from a shared provider.
pub trait ConversionSource {
    /// Conversion into `term` through this provider.
    fn conversion(&self, term: Currency) -> CurrencyConversion;
}

impl<P: ExchangeRateProvider + 'static> ConversionSource for Arc<P> {
    fn conversion(&self, term: Currency) -> CurrencyConversion {
        CurrencyConversion::new(self.clone(), term)
    }
}

impl ConversionSource for Arc<dyn ExchangeRateProvider> {
    fn conversion(&self, term: Currency) -> CurrencyConversion {
        CurrencyConversion::new(Arc::clone(self), term)
    }
}
