//! Monetary amount: a decimal number bound to a currency.
//!
//! CRITICAL: amounts never mix currencies. `add`, `subtract` and comparisons
//! fail with [`MoneyError::CurrencyMismatch`] unless both operands share a
//! currency. `multiply` and `divide` only accept plain numbers
//! ([`IntoDecimal`]); money times money has no currency and is not
//! expressible.
//!
//! Every operation returns a new value and applies the receiver's
//! [`MonetaryContext`] to the result.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::Serialize;
use valor_shared::ArithmeticError;
use valor_shared::types::{Currency, IntoDecimal, MonetaryContext};

use super::error::MoneyError;
use super::rounding::Rounding;
use crate::currency::CurrencyConversion;

/// An operation mapping an amount to another amount.
pub trait MonetaryOperator {
    /// Applies the operation.
    fn apply(&self, amount: &MonetaryAmount) -> Result<MonetaryAmount, MoneyError>;
}

/// An immutable amount of money.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MonetaryAmount {
    number: Decimal,
    currency: Currency,
    context: MonetaryContext,
}

impl MonetaryAmount {
    /// Creates an amount with the default context.
    pub fn of(number: impl IntoDecimal, currency: Currency) -> Result<Self, MoneyError> {
        Self::of_with_context(number, currency, MonetaryContext::DEFAULT)
    }

    /// Creates an amount governed by `context`.
    pub fn of_with_context(
        number: impl IntoDecimal,
        currency: Currency,
        context: MonetaryContext,
    ) -> Result<Self, MoneyError> {
        Ok(Self::from_decimal(number.into_decimal()?, currency, context))
    }

    /// Creates an amount with the fixed five-digit context.
    pub fn fast(number: impl IntoDecimal, currency: Currency) -> Result<Self, MoneyError> {
        Self::of_with_context(number, currency, MonetaryContext::fast())
    }

    /// Creates an amount from a decimal, applying `context`.
    #[must_use]
    pub fn from_decimal(number: Decimal, currency: Currency, context: MonetaryContext) -> Self {
        Self {
            number: context.apply(number),
            currency,
            context,
        }
    }

    /// A zero amount with the default context.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::from_decimal(Decimal::ZERO, currency, MonetaryContext::DEFAULT)
    }

    /// The numeric value.
    #[must_use]
    pub const fn number(&self) -> Decimal {
        self.number
    }

    /// The currency.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// The governing numeric context.
    #[must_use]
    pub const fn context(&self) -> MonetaryContext {
        self.context
    }

    /// Same value and currency under a different context.
    #[must_use]
    pub fn with_context(&self, context: MonetaryContext) -> Self {
        Self::from_decimal(self.number, self.currency, context)
    }

    /// Same currency and context with a new number.
    fn with_number(&self, number: Decimal) -> Self {
        Self::from_decimal(number, self.currency, self.context)
    }

    fn check_currency(&self, other: &Self) -> Result<(), MoneyError> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(MoneyError::mismatch(self.currency, other.currency))
        }
    }

    // ========== Arithmetic ==========

    /// Adds an amount of the same currency.
    pub fn add(&self, other: &Self) -> Result<Self, MoneyError> {
        self.check_currency(other)?;
        let sum = self
            .number
            .checked_add(other.number)
            .ok_or(ArithmeticError::Overflow("add"))?;
        Ok(self.with_number(sum))
    }

    /// Subtracts an amount of the same currency.
    pub fn subtract(&self, other: &Self) -> Result<Self, MoneyError> {
        self.check_currency(other)?;
        let difference = self
            .number
            .checked_sub(other.number)
            .ok_or(ArithmeticError::Overflow("subtract"))?;
        Ok(self.with_number(difference))
    }

    /// Multiplies by a plain number.
    pub fn multiply(&self, factor: impl IntoDecimal) -> Result<Self, MoneyError> {
        let product = self
            .number
            .checked_mul(factor.into_decimal()?)
            .ok_or(ArithmeticError::Overflow("multiply"))?;
        Ok(self.with_number(product))
    }

    /// Divides by a plain number.
    pub fn divide(&self, divisor: impl IntoDecimal) -> Result<Self, MoneyError> {
        let divisor = divisor.into_decimal()?;
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        let quotient = self
            .number
            .checked_div(divisor)
            .ok_or(ArithmeticError::Overflow("divide"))?;
        Ok(self.with_number(quotient))
    }

    /// The additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_number(-self.number)
    }

    /// The absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.with_number(self.number.abs())
    }

    /// Removes trailing fractional zeros (`4.50` becomes `4.5`).
    ///
    /// Fixed-scale contexts pad the value again, so this only changes
    /// flexible amounts.
    #[must_use]
    pub fn strip_trailing_zeros(&self) -> Self {
        self.with_number(self.number.normalize())
    }

    // ========== Sign & Comparison ==========

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.number.is_zero()
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.number > Decimal::ZERO
    }

    /// Returns true if the amount is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.number < Decimal::ZERO
    }

    /// -1, 0 or 1.
    #[must_use]
    pub fn signum(&self) -> i32 {
        match self.number.cmp(&Decimal::ZERO) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// Compares two amounts of the same currency.
    pub fn compare(&self, other: &Self) -> Result<Ordering, MoneyError> {
        self.check_currency(other)?;
        Ok(self.number.cmp(&other.number))
    }

    /// Returns true if `self > other`.
    pub fn is_greater_than(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// Returns true if `self < other`.
    pub fn is_less_than(&self, other: &Self) -> Result<bool, MoneyError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    // ========== Operators ==========

    /// Applies an explicit rounding.
    #[must_use]
    pub fn round(&self, rounding: &Rounding) -> Self {
        self.with_number(rounding.round_value(self.number))
    }

    /// Rounds to the currency's minor-unit digits with banker's rounding.
    #[must_use]
    pub fn round_default(&self) -> Self {
        self.round(&Rounding::default_for(self.currency))
    }

    /// Converts into the conversion's target currency.
    pub fn convert(&self, conversion: &CurrencyConversion) -> Result<Self, MoneyError> {
        conversion.apply(self)
    }

    /// Applies any monetary operator.
    pub fn with(&self, operator: &dyn MonetaryOperator) -> Result<Self, MoneyError> {
        operator.apply(self)
    }

    /// Rebinds the number to another currency, keeping the context.
    pub(crate) fn rebind(&self, number: Decimal, currency: Currency) -> Self {
        Self::from_decimal(number, currency, self.context)
    }
}

impl MonetaryOperator for Rounding {
    fn apply(&self, amount: &MonetaryAmount) -> Result<MonetaryAmount, MoneyError> {
        Ok(amount.round(self))
    }
}

/// Equal when currency and numeric value match; scale and context are ignored.
impl PartialEq for MonetaryAmount {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && self.number == other.number
    }
}

impl Eq for MonetaryAmount {}

impl Hash for MonetaryAmount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.hash(state);
        self.number.normalize().hash(state);
    }
}

impl std::fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.currency, self.number)
    }
}
