//! Money error types.

use thiserror::Error;
use valor_shared::ArithmeticError;

/// Errors raised by monetary amounts, registries and conversions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoneyError {
    // ========== Registry Errors ==========
    /// Unknown currency code or locale without a currency.
    #[error("Currency not found: {0}")]
    CurrencyNotFound(String),

    // ========== Arithmetic Errors ==========
    /// Operands are in different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch {
        /// Currency of the receiver.
        expected: String,
        /// Currency of the offending operand.
        got: String,
    },

    /// Underlying decimal arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    // ========== Conversion Errors ==========
    /// No exchange rate provider is registered under this name.
    #[error("Exchange rate provider not found: {0}")]
    ProviderNotFound(String),

    /// No provider could quote the currency pair.
    #[error("No exchange rate available for {base} to {term}")]
    NoRateAvailable {
        /// Source currency code.
        base: String,
        /// Target currency code.
        term: String,
    },

    // ========== Formatting Errors ==========
    /// No number conventions were supplied for the locale.
    #[error("No number format available for locale {0}")]
    FormatUnavailable(String),
}

impl MoneyError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyNotFound(_) => "CURRENCY_NOT_FOUND",
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::Arithmetic(inner) => inner.error_code(),
            Self::ProviderNotFound(_) => "PROVIDER_NOT_FOUND",
            Self::NoRateAvailable { .. } => "NO_RATE_AVAILABLE",
            Self::FormatUnavailable(_) => "FORMAT_UNAVAILABLE",
        }
    }

    pub(crate) fn mismatch(expected: impl ToString, got: impl ToString) -> Self {
        Self::CurrencyMismatch {
            expected: expected.to_string(),
            got: got.to_string(),
        }
    }

    pub(crate) fn no_rate(base: impl ToString, term: impl ToString) -> Self {
        Self::NoRateAvailable {
            base: base.to_string(),
            term: term.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            MoneyError::CurrencyNotFound("XXX".into()).error_code(),
            "CURRENCY_NOT_FOUND"
        );
        assert_eq!(MoneyError::mismatch("BRL", "USD").error_code(), "CURRENCY_MISMATCH");
        assert_eq!(
            MoneyError::ProviderNotFound("FED".into()).error_code(),
            "PROVIDER_NOT_FOUND"
        );
        assert_eq!(MoneyError::no_rate("USD", "BRL").error_code(), "NO_RATE_AVAILABLE");
        assert_eq!(
            MoneyError::FormatUnavailable("fr-FR".into()).error_code(),
            "FORMAT_UNAVAILABLE"
        );
        assert_eq!(
            MoneyError::from(ArithmeticError::DivisionByZero).error_code(),
            "DIVISION_BY_ZERO"
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoneyError::mismatch("BRL", "USD").to_string(),
            "Currency mismatch: expected BRL, got USD"
        );
        assert_eq!(
            MoneyError::no_rate("USD", "XAU").to_string(),
            "No exchange rate available for USD to XAU"
        );
        assert_eq!(
            MoneyError::from(ArithmeticError::DivisionByZero).to_string(),
            "Division by zero"
        );
    }
}
