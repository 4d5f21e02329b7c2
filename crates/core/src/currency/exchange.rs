//! Exchange rate types and logic.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use valor_shared::ArithmeticError;
use valor_shared::types::Currency;

/// How an exchange rate was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RateLookupMethod {
    /// Same currency on both sides; factor is one.
    Identity,
    /// Direct quote (base -> term).
    Direct,
    /// Inverse of the quote term -> base.
    Inverse,
    /// Cross rate through the provider's anchor currency.
    Triangulated,
}

/// Exchange rate between two currencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRate {
    /// Source currency.
    pub base: Currency,
    /// Target currency.
    pub term: Currency,
    /// Exchange rate (1 base = factor term).
    pub factor: Decimal,
    /// Name of the provider that quoted the rate.
    pub provider: String,
    /// Date this rate is effective.
    pub effective_date: NaiveDate,
    /// How the rate was derived.
    pub method: RateLookupMethod,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    #[must_use]
    pub fn new(
        base: Currency,
        term: Currency,
        factor: Decimal,
        provider: impl Into<String>,
        effective_date: NaiveDate,
        method: RateLookupMethod,
    ) -> Self {
        Self {
            base,
            term,
            factor,
            provider: provider.into(),
            effective_date,
            method,
        }
    }

    /// Returns the inverse rate.
    pub fn inverse(&self) -> Result<Self, ArithmeticError> {
        if self.factor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let factor = Decimal::ONE
            .checked_div(self.factor)
            .ok_or(ArithmeticError::Overflow("inverse rate"))?;
        let method = match self.method {
            RateLookupMethod::Direct => RateLookupMethod::Inverse,
            RateLookupMethod::Inverse => RateLookupMethod::Direct,
            other => other,
        };
        Ok(Self {
            base: self.term,
            term: self.base,
            factor,
            provider: self.provider.clone(),
            effective_date: self.effective_date,
            method,
        })
    }
}
