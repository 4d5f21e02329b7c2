//! Error types shared by every numeric domain.

use thiserror::Error;

/// Failures of the underlying decimal arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Division by a zero divisor.
    #[error("Division by zero")]
    DivisionByZero,

    /// NaN or infinite floating-point input.
    #[error("Non-finite number: {0}")]
    NonFinite(String),

    /// Result does not fit the decimal representation.
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// Text that is not a decimal number.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),
}

impl ArithmeticError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "DIVISION_BY_ZERO",
            Self::NonFinite(_) => "NON_FINITE_NUMBER",
            Self::Overflow(_) => "ARITHMETIC_OVERFLOW",
            Self::InvalidNumber(_) => "INVALID_NUMBER",
        }
    }
}

/// A locale tag could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid locale tag: {0:?}")]
pub struct LocaleParseError(pub String);
