//! Explicit rounding operations for monetary amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use valor_shared::types::{Currency, RoundingMode};

/// Rounds an amount to a fixed number of fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rounding {
    scale: u32,
    mode: RoundingMode,
}

impl Rounding {
    /// Rounds to `scale` fractional digits with `mode`.
    #[must_use]
    pub const fn of_scale(scale: u32, mode: RoundingMode) -> Self {
        Self { scale, mode }
    }

    /// The currency's default rounding: its minor-unit digits, banker's rounding.
    ///
    /// `BRL 4.389999` becomes `BRL 4.39`, `JPY 13.5` becomes `JPY 14`.
    #[must_use]
    pub const fn default_for(currency: Currency) -> Self {
        Self::of_scale(currency.default_fraction_digits(), RoundingMode::HalfEven)
    }

    /// Target number of fractional digits.
    #[must_use]
    pub const fn scale(&self) -> u32 {
        self.scale
    }

    /// Rounding mode applied at the target scale.
    #[must_use]
    pub const fn mode(&self) -> RoundingMode {
        self.mode
    }

    /// Rounds a bare decimal.
    #[must_use]
    pub fn round_value(&self, value: Decimal) -> Decimal {
        self.mode.round(value, self.scale)
    }
}
