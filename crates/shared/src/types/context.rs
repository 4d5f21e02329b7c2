//! Numeric context for monetary amounts.
//!
//! CRITICAL: the default rounding mode is banker's rounding (round half to
//! even). It is unbiased over many operations, which keeps aggregated totals
//! stable.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::MoneyConfig;

/// Largest scale a `Decimal` can represent.
pub const MAX_DECIMAL_SCALE: u32 = 28;

/// Rounding modes understood by [`MonetaryContext`] and explicit roundings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to nearest, ties to the even neighbour (banker's rounding).
    #[default]
    HalfEven,
    /// Round to nearest, ties away from zero.
    HalfUp,
    /// Round to nearest, ties toward zero.
    HalfDown,
    /// Always away from zero.
    Up,
    /// Always toward zero (truncation).
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
}

impl RoundingMode {
    /// The equivalent `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::HalfEven => RoundingStrategy::MidpointNearestEven,
            Self::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            Self::HalfDown => RoundingStrategy::MidpointTowardZero,
            Self::Up => RoundingStrategy::AwayFromZero,
            Self::Down => RoundingStrategy::ToZero,
            Self::Ceiling => RoundingStrategy::ToPositiveInfinity,
            Self::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }

    /// Rounds `value` to `scale` fractional digits with this mode.
    #[must_use]
    pub fn round(self, value: Decimal, scale: u32) -> Decimal {
        value.round_dp_with_strategy(scale.min(MAX_DECIMAL_SCALE), self.strategy())
    }
}

/// Scale policy attached to every monetary amount.
///
/// - `fixed_scale = true`: every value is rounded or zero-padded to exactly
///   `max_scale` fractional digits.
/// - `fixed_scale = false`: values keep their natural scale, rounded only
///   when they exceed `max_scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonetaryContext {
    /// Upper bound on fractional digits retained.
    pub max_scale: u32,
    /// Whether the scale is pinned to `max_scale`.
    pub fixed_scale: bool,
    /// Rounding mode used when digits are dropped.
    pub rounding: RoundingMode,
}

impl MonetaryContext {
    /// Flexible context: up to 28 fractional digits, banker's rounding.
    pub const DEFAULT: Self = Self {
        max_scale: MAX_DECIMAL_SCALE,
        fixed_scale: false,
        rounding: RoundingMode::HalfEven,
    };

    /// Creates a flexible context with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Fixed five-digit context for fast, bounded-precision amounts.
    #[must_use]
    pub const fn fast() -> Self {
        Self {
            max_scale: 5,
            fixed_scale: true,
            rounding: RoundingMode::HalfEven,
        }
    }

    /// Returns a copy with a different maximum scale.
    #[must_use]
    pub const fn with_max_scale(mut self, max_scale: u32) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Returns a copy with the fixed-scale flag set.
    #[must_use]
    pub const fn with_fixed_scale(mut self, fixed_scale: bool) -> Self {
        self.fixed_scale = fixed_scale;
        self
    }

    /// Returns a copy with a different rounding mode.
    #[must_use]
    pub const fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Effective maximum scale, capped at what `Decimal` can hold.
    #[must_use]
    pub fn effective_max_scale(&self) -> u32 {
        self.max_scale.min(MAX_DECIMAL_SCALE)
    }

    /// Applies this context's scale policy to `value`.
    #[must_use]
    pub fn apply(&self, value: Decimal) -> Decimal {
        let max_scale = self.effective_max_scale();
        if self.fixed_scale {
            let mut scaled = self.rounding.round(value, max_scale);
            scaled.rescale(max_scale);
            scaled
        } else if value.scale() > max_scale {
            self.rounding.round(value, max_scale)
        } else {
            value
        }
    }
}

impl Default for MonetaryContext {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<&MoneyConfig> for MonetaryContext {
    fn from(config: &MoneyConfig) -> Self {
        Self {
            max_scale: config.max_scale,
            fixed_scale: config.fixed_scale,
            rounding: config.rounding,
        }
    }
}
