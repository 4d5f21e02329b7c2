//! Decimal ingestion from plain numbers and text.
//!
//! CRITICAL: floats are never used for arithmetic. A float literal is read
//! through its shortest round-trip text, so `30.78292332432_f64` becomes the
//! decimal `30.78292332432` and not its binary approximation.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::error::ArithmeticError;

/// Conversion of a raw number into a [`Decimal`].
pub trait IntoDecimal {
    /// Converts `self` into a decimal.
    ///
    /// # Errors
    ///
    /// Returns an error for NaN, infinities, out-of-range values and text
    /// that is not a number.
    fn into_decimal(self) -> Result<Decimal, ArithmeticError>;
}

impl IntoDecimal for Decimal {
    fn into_decimal(self) -> Result<Decimal, ArithmeticError> {
        Ok(self)
    }
}

impl IntoDecimal for &Decimal {
    fn into_decimal(self) -> Result<Decimal, ArithmeticError> {
        Ok(*self)
    }
}

macro_rules! impl_into_decimal_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoDecimal for $t {
                fn into_decimal(self) -> Result<Decimal, ArithmeticError> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_decimal_for_int!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl IntoDecimal for i128 {
    fn into_decimal(self) -> Result<Decimal, ArithmeticError> {
        Decimal::from_i128(self).ok_or(ArithmeticError::Overflow("integer conversion"))
    }
}

impl IntoDecimal for f64 {
    fn into_decimal(self) -> Result<Decimal, ArithmeticError> {
        if !self.is_finite() {
            return Err(ArithmeticError::NonFinite(self.to_string()));
        }
        Decimal::from_str(&self.to_string())
            .ok()
            .or_else(|| Decimal::from_f64_retain(self))
            .ok_or(ArithmeticError::Overflow("float conversion"))
    }
}

impl IntoDecimal for f32 {
    fn into_decimal(self) -> Result<Decimal, ArithmeticError> {
        if !self.is_finite() {
            return Err(ArithmeticError::NonFinite(self.to_string()));
        }
        Decimal::from_str(&self.to_string())
            .ok()
            .or_else(|| Decimal::from_f32_retain(self))
            .ok_or(ArithmeticError::Overflow("float conversion"))
    }
}

impl IntoDecimal for &str {
    fn into_decimal(self) -> Result<Decimal, ArithmeticError> {
        let text = self.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| ArithmeticError::InvalidNumber(self.to_string()))
    }
}

impl IntoDecimal for String {
    fn into_decimal(self) -> Result<Decimal, ArithmeticError> {
        self.as_str().into_decimal()
    }
}

impl IntoDecimal for &String {
    fn into_decimal(self) -> Result<Decimal, ArithmeticError> {
        self.as_str().into_decimal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_integers_are_exact() {
        assert_eq!(20i32.into_decimal().unwrap(), dec!(20));
        assert_eq!((-7i64).into_decimal().unwrap(), dec!(-7));
        assert_eq!(42u64.into_decimal().unwrap(), dec!(42));
    }

    #[test]
    fn test_float_uses_shortest_representation() {
        let value = 30.782_923_324_32_f64.into_decimal().unwrap();
        assert_eq!(value, dec!(30.78292332432));
        assert_eq!(value.scale(), 11);

        assert_eq!(0.21f64.into_decimal().unwrap(), dec!(0.21));
        assert_eq!(4.389_999_f64.into_decimal().unwrap(), dec!(4.389999));
    }

    #[rstest]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    fn test_non_finite_floats_rejected(#[case] value: f64) {
        assert!(matches!(
            value.into_decimal(),
            Err(ArithmeticError::NonFinite(_))
        ));
    }

    #[rstest]
    #[case("13.37", dec!(13.37))]
    #[case("  42 ", dec!(42))]
    #[case("-0.5", dec!(-0.5))]
    #[case("1e3", dec!(1000))]
    fn test_strings_parse(#[case] text: &str, #[case] expected: Decimal) {
        assert_eq!(text.into_decimal().unwrap(), expected);
    }

    #[test]
    fn test_invalid_strings_rejected() {
        assert_eq!(
            "1,5".into_decimal(),
            Err(ArithmeticError::InvalidNumber("1,5".to_string()))
        );
        assert!("".into_decimal().is_err());
        assert!("abc".into_decimal().is_err());
    }
}
