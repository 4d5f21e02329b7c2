//! Quantities: a decimal value measured in a unit.
//!
//! Addition and subtraction require one dimension and convert the operand
//! into the receiver's unit first. Multiplication and division compose units
//! symbolically (`km / h`, `m · m`) without converting to canonical units.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use valor_shared::ArithmeticError;
use valor_shared::types::IntoDecimal;

use super::dimension::Dimension;
use super::error::UnitError;
use super::unit::Unit;

/// An immutable measured value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quantity {
    value: Decimal,
    unit: Unit,
}

impl Quantity {
    /// Creates a quantity from any decimal-convertible number.
    ///
    /// # Errors
    ///
    /// Returns `Arithmetic` for non-finite or unparsable input.
    pub fn of(value: impl IntoDecimal, unit: Unit) -> Result<Self, UnitError> {
        Ok(Self::from_decimal(value.into_decimal()?, unit))
    }

    /// Creates a quantity from a decimal.
    #[must_use]
    pub const fn from_decimal(value: Decimal, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Numeric value in [`Quantity::unit`].
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// Unit of measure.
    #[must_use]
    pub const fn unit(&self) -> &Unit {
        &self.unit
    }

    /// Dimension of the unit.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.unit.dimension()
    }

    // ========== Conversion ==========

    /// The same physical quantity expressed in `unit`.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleDimension` when `unit` has another dimension.
    pub fn to(&self, unit: &Unit) -> Result<Self, UnitError> {
        let factor = self.unit.conversion_to(unit)?;
        Ok(Self::from_decimal(factor.apply(self.value)?, unit.clone()))
    }

    /// The same physical quantity in the canonical unit of its dimension.
    ///
    /// # Errors
    ///
    /// Returns `Arithmetic` when rescaling overflows.
    pub fn to_canonical(&self) -> Result<Self, UnitError> {
        self.to(&Unit::canonical(self.dimension()))
    }

    /// Asserts the dimension of a composed quantity.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` when the dimension differs.
    pub fn as_type(&self, dimension: Dimension) -> Result<Self, UnitError> {
        if self.dimension() == dimension {
            Ok(self.clone())
        } else {
            Err(UnitError::DimensionMismatch {
                expected: dimension,
                actual: self.dimension(),
            })
        }
    }

    // ========== Arithmetic ==========

    /// Sum in the receiver's unit.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleDimension` when dimensions differ.
    pub fn add(&self, other: &Self) -> Result<Self, UnitError> {
        let other = other.to(&self.unit)?;
        let value = self
            .value
            .checked_add(other.value)
            .ok_or(ArithmeticError::Overflow("add"))?;
        Ok(self.with_value(value))
    }

    /// Difference in the receiver's unit.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleDimension` when dimensions differ.
    pub fn subtract(&self, other: &Self) -> Result<Self, UnitError> {
        let other = other.to(&self.unit)?;
        let value = self
            .value
            .checked_sub(other.value)
            .ok_or(ArithmeticError::Overflow("subtract"))?;
        Ok(self.with_value(value))
    }

    /// Product with a composed unit, e.g. `m · m = m²`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDimension` when the product has no named dimension.
    pub fn multiply(&self, other: &Self) -> Result<Self, UnitError> {
        let unit = self.unit.multiply(&other.unit)?;
        let value = self
            .value
            .checked_mul(other.value)
            .ok_or(ArithmeticError::Overflow("multiply"))?;
        Ok(Self::from_decimal(value, unit))
    }

    /// Quotient with a composed unit, e.g. `km / h`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero divisor and `UnsupportedDimension`
    /// when the quotient has no named dimension.
    pub fn divide(&self, other: &Self) -> Result<Self, UnitError> {
        if other.value.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        let unit = self.unit.divide(&other.unit)?;
        let value = self
            .value
            .checked_div(other.value)
            .ok_or(ArithmeticError::Overflow("divide"))?;
        Ok(Self::from_decimal(value, unit))
    }

    /// Scales the value by a plain number.
    ///
    /// # Errors
    ///
    /// Returns `Arithmetic` on invalid input or overflow.
    pub fn multiply_scalar(&self, factor: impl IntoDecimal) -> Result<Self, UnitError> {
        let value = self
            .value
            .checked_mul(factor.into_decimal()?)
            .ok_or(ArithmeticError::Overflow("multiply"))?;
        Ok(self.with_value(value))
    }

    /// Divides the value by a plain number.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero divisor.
    pub fn divide_scalar(&self, divisor: impl IntoDecimal) -> Result<Self, UnitError> {
        let divisor = divisor.into_decimal()?;
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero.into());
        }
        let value = self
            .value
            .checked_div(divisor)
            .ok_or(ArithmeticError::Overflow("divide"))?;
        Ok(self.with_value(value))
    }

    /// Same magnitude, opposite sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.with_value(-self.value)
    }

    fn with_value(&self, value: Decimal) -> Self {
        Self::from_decimal(value, self.unit.clone())
    }

    // ========== Inspection ==========

    /// Integer part, truncated toward zero and saturated to `i64`.
    #[must_use]
    pub fn int_value(&self) -> i64 {
        self.value.trunc().to_i64().unwrap_or(if self.value.is_sign_negative() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    /// Nearest `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.value.to_f64().unwrap_or_default()
    }

    /// Whether both describe the same physical quantity, in any units.
    #[must_use]
    pub fn is_equivalent(&self, other: &Self) -> bool {
        other
            .to(&self.unit)
            .is_ok_and(|converted| converted.value == self.value)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.value.normalize();
        if self.unit.terms().is_empty() {
            write!(f, "{value}")
        } else {
            write!(f, "{value} {}", self.unit)
        }
    }
}
