//! Metric prefixes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UnitError;
use super::unit::{Scale, Unit};

/// Power-of-ten prefix applicable to a simple unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricPrefix {
    /// 10⁻⁶
    Micro,
    /// 10⁻³
    Milli,
    /// 10⁻²
    Centi,
    /// 10⁻¹
    Deci,
    /// 10¹
    Deca,
    /// 10²
    Hecto,
    /// 10³
    Kilo,
    /// 10⁶
    Mega,
}

impl MetricPrefix {
    /// Every supported prefix, smallest first.
    pub const ALL: [Self; 8] = [
        Self::Micro,
        Self::Milli,
        Self::Centi,
        Self::Deci,
        Self::Deca,
        Self::Hecto,
        Self::Kilo,
        Self::Mega,
    ];

    /// Lowercase name, e.g. `"kilo"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Micro => "micro",
            Self::Milli => "milli",
            Self::Centi => "centi",
            Self::Deci => "deci",
            Self::Deca => "deca",
            Self::Hecto => "hecto",
            Self::Kilo => "kilo",
            Self::Mega => "mega",
        }
    }

    /// Symbol prepended to the unit symbol, e.g. `"k"`.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Micro => "µ",
            Self::Milli => "m",
            Self::Centi => "c",
            Self::Deci => "d",
            Self::Deca => "da",
            Self::Hecto => "h",
            Self::Kilo => "k",
            Self::Mega => "M",
        }
    }

    /// Power of ten this prefix stands for.
    #[must_use]
    pub const fn exponent(self) -> i32 {
        match self {
            Self::Micro => -6,
            Self::Milli => -3,
            Self::Centi => -2,
            Self::Deci => -1,
            Self::Deca => 1,
            Self::Hecto => 2,
            Self::Kilo => 3,
            Self::Mega => 6,
        }
    }

    /// Scale factor of this prefix as an exact ratio.
    #[must_use]
    pub fn scale(self) -> Scale {
        let magnitude = 10u64.pow(self.exponent().unsigned_abs());
        if self.exponent() < 0 {
            Scale::from_raw(1, magnitude)
        } else {
            Scale::from_raw(magnitude, 1)
        }
    }

    /// Looks up a prefix by name, ignoring ASCII case.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Applies this prefix to `unit`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPrefix` unless `unit` is a simple, unprefixed unit.
    pub fn apply(self, unit: &Unit) -> Result<Unit, UnitError> {
        unit.with_prefix(self)
    }
}

impl fmt::Display for MetricPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MetricPrefix {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnitError::UnknownPrefix(s.to_string()))
    }
}

/// Applies the prefix named `name` to `unit`, e.g. `prefix("kilo", &metre())`.
///
/// # Errors
///
/// Returns `UnknownPrefix` for an unknown name and `InvalidPrefix` when the
/// unit cannot take a prefix.
pub fn prefix(name: &str, unit: &Unit) -> Result<Unit, UnitError> {
    name.parse::<MetricPrefix>()?.apply(unit)
}

/// Thousand times `unit`.
///
/// # Errors
///
/// Returns `InvalidPrefix` unless `unit` is simple and unprefixed.
pub fn kilo(unit: &Unit) -> Result<Unit, UnitError> {
    MetricPrefix::Kilo.apply(unit)
}

/// Hundredth of `unit`.
///
/// # Errors
///
/// Returns `InvalidPrefix` unless `unit` is simple and unprefixed.
pub fn centi(unit: &Unit) -> Result<Unit, UnitError> {
    MetricPrefix::Centi.apply(unit)
}

/// Thousandth of `unit`.
///
/// # Errors
///
/// Returns `InvalidPrefix` unless `unit` is simple and unprefixed.
pub fn milli(unit: &Unit) -> Result<Unit, UnitError> {
    MetricPrefix::Milli.apply(unit)
}
