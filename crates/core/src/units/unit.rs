//! Units of measure.
//!
//! A [`Unit`] is a product of symbolic terms (`km`, `h⁻¹`, ...) together with
//! its [`Dimension`] and an exact [`Scale`] relative to the canonical unit of
//! that dimension. Composition merges terms, so `km/h · h` collapses to `km`.
//!
//! Symbols are deterministic: numerator terms joined by `·`, exponents as
//! superscripts, then `/` and the denominator (`km/h`, `m²`, `kg/(m·s)`).

use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use valor_shared::ArithmeticError;

use super::dimension::Dimension;
use super::error::UnitError;
use super::prefix::MetricPrefix;

// ========== Scale ==========

/// Exact positive ratio `numerator / denominator` to the canonical unit.
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    num: Decimal,
    den: Decimal,
}

impl Scale {
    /// The canonical unit's own scale.
    pub const ONE: Self = Self {
        num: Decimal::ONE,
        den: Decimal::ONE,
    };

    /// Creates `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns `DivisionByZero` for a zero denominator and `InvalidNumber`
    /// unless both parts are positive.
    pub fn ratio(numerator: Decimal, denominator: Decimal) -> Result<Self, ArithmeticError> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        if numerator <= Decimal::ZERO || denominator < Decimal::ZERO {
            return Err(ArithmeticError::InvalidNumber(format!(
                "{numerator}/{denominator}"
            )));
        }
        Ok(Self {
            num: numerator,
            den: denominator,
        }
        .reduced())
    }

    /// Ratio from positive integer literals.
    pub(crate) fn from_raw(num: u64, den: u64) -> Self {
        debug_assert!(num > 0 && den > 0);
        Self {
            num: Decimal::from(num),
            den: Decimal::from(den),
        }
    }

    /// Numerator of the ratio.
    #[must_use]
    pub const fn numerator(&self) -> Decimal {
        self.num
    }

    /// Denominator of the ratio.
    #[must_use]
    pub const fn denominator(&self) -> Decimal {
        self.den
    }

    /// Product of two scales.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when a part exceeds `Decimal`'s range.
    pub fn multiply(self, other: Self) -> Result<Self, ArithmeticError> {
        let num = self
            .num
            .checked_mul(other.num)
            .ok_or(ArithmeticError::Overflow("unit scale"))?;
        let den = self
            .den
            .checked_mul(other.den)
            .ok_or(ArithmeticError::Overflow("unit scale"))?;
        Ok(Self { num, den }.reduced())
    }

    /// Quotient of two scales.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when a part exceeds `Decimal`'s range.
    pub fn divide(self, other: Self) -> Result<Self, ArithmeticError> {
        self.multiply(other.reciprocal())
    }

    /// `1 / self`.
    #[must_use]
    pub const fn reciprocal(self) -> Self {
        Self {
            num: self.den,
            den: self.num,
        }
    }

    /// Rescales `value` by this ratio.
    ///
    /// # Errors
    ///
    /// Returns `Overflow` when the product exceeds `Decimal`'s range.
    pub fn apply(&self, value: Decimal) -> Result<Decimal, ArithmeticError> {
        value
            .checked_mul(self.num)
            .and_then(|v| v.checked_div(self.den))
            .ok_or(ArithmeticError::Overflow("unit conversion"))
    }

    /// Divides both parts by their greatest common divisor when both are
    /// integers.
    fn reduced(self) -> Self {
        let (num, den) = (self.num.normalize(), self.den.normalize());
        if num.scale() != 0 || den.scale() != 0 {
            return Self { num, den };
        }
        let divisor = gcd(num, den);
        match (num.checked_div(divisor), den.checked_div(divisor)) {
            (Some(n), Some(d)) => Self {
                num: n.normalize(),
                den: d.normalize(),
            },
            _ => Self { num, den },
        }
    }
}

fn gcd(mut a: Decimal, mut b: Decimal) -> Decimal {
    while !b.is_zero() {
        match a.checked_rem(b) {
            Some(r) => (a, b) = (b, r),
            None => return Decimal::ONE,
        }
    }
    a.abs()
}

/// Equal when the ratios are equal, e.g. `1000/3600 == 5/18`.
impl PartialEq for Scale {
    fn eq(&self, other: &Self) -> bool {
        match (
            self.num.checked_mul(other.den),
            other.num.checked_mul(self.den),
        ) {
            (Some(left), Some(right)) => left == right,
            _ => false,
        }
    }
}

impl Eq for Scale {}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den == Decimal::ONE {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

// ========== Unit ==========

/// One factor of a unit symbol: optional prefix, base symbol, exponent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UnitTerm {
    /// Metric prefix, if any.
    pub prefix: Option<MetricPrefix>,
    /// Base symbol, e.g. `"m"`.
    pub symbol: String,
    /// Non-zero exponent.
    pub exponent: i8,
}

impl UnitTerm {
    fn same_base(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.symbol == other.symbol
    }

    fn render(&self, exponent: u8) -> String {
        let prefix = self.prefix.map_or("", MetricPrefix::symbol);
        let mut out = format!("{prefix}{}", self.symbol);
        if exponent > 1 {
            out.extend(exponent.to_string().chars().map(superscript));
        }
        out
    }
}

const fn superscript(digit: char) -> char {
    match digit {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        other => other,
    }
}

/// An immutable unit of measure.
#[derive(Debug, Clone)]
pub struct Unit {
    terms: Vec<UnitTerm>,
    dimension: Dimension,
    scale: Scale,
    symbol: String,
}

impl Unit {
    /// A simple unit named `symbol` whose size is `scale` canonical units.
    #[must_use]
    pub fn base(symbol: &str, dimension: Dimension, scale: Scale) -> Self {
        Self::from_parts(
            vec![UnitTerm {
                prefix: None,
                symbol: symbol.to_string(),
                exponent: 1,
            }],
            dimension,
            scale,
        )
    }

    /// The canonical unit of `dimension`, built from metre, kilogram and
    /// second.
    #[must_use]
    pub fn canonical(dimension: Dimension) -> Self {
        let vector = dimension.vector();
        let terms = [
            (None, "m", vector.length),
            (Some(MetricPrefix::Kilo), "g", vector.mass),
            (None, "s", vector.time),
        ]
        .into_iter()
        .filter(|&(_, _, exponent)| exponent != 0)
        .map(|(prefix, symbol, exponent)| UnitTerm {
            prefix,
            symbol: symbol.to_string(),
            exponent,
        })
        .collect();
        Self::from_parts(terms, dimension, Scale::ONE)
    }

    pub(crate) fn from_parts(terms: Vec<UnitTerm>, dimension: Dimension, scale: Scale) -> Self {
        let symbol = render_symbol(&terms);
        Self {
            terms,
            dimension,
            scale,
            symbol,
        }
    }

    // ========== Accessors ==========

    /// Display symbol, e.g. `"km/h"`.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Physical dimension.
    #[must_use]
    pub const fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Ratio to the canonical unit of the dimension.
    #[must_use]
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Symbolic factors.
    #[must_use]
    pub fn terms(&self) -> &[UnitTerm] {
        &self.terms
    }

    /// One unprefixed term with exponent one.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        matches!(self.terms.as_slice(), [term] if term.exponent == 1 && term.prefix.is_none())
    }

    /// Whether this is the canonical unit of its dimension.
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        *self == Self::canonical(self.dimension)
    }

    // ========== Composition ==========

    /// Product unit, e.g. `m · m = m²`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDimension` when the product has no named dimension.
    pub fn multiply(&self, other: &Self) -> Result<Self, UnitError> {
        let dimension = self.dimension.multiply(other.dimension)?;
        let scale = self.scale.multiply(other.scale)?;
        let terms = merge_terms(&self.terms, &other.terms, 1)?;
        Ok(Self::from_parts(terms, dimension, scale))
    }

    /// Quotient unit, e.g. `km / h`.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDimension` when the quotient has no named dimension.
    pub fn divide(&self, other: &Self) -> Result<Self, UnitError> {
        let dimension = self.dimension.divide(other.dimension)?;
        let scale = self.scale.divide(other.scale)?;
        let terms = merge_terms(&self.terms, &other.terms, -1)?;
        Ok(Self::from_parts(terms, dimension, scale))
    }

    /// This unit with a metric prefix, e.g. `kilo · m = km`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPrefix` unless the unit is simple and unprefixed.
    pub fn with_prefix(&self, prefix: MetricPrefix) -> Result<Self, UnitError> {
        let invalid = || UnitError::InvalidPrefix {
            prefix: prefix.name().to_string(),
            unit: self.symbol.clone(),
        };
        if !self.is_simple() {
            return Err(invalid());
        }
        let mut terms = self.terms.clone();
        let term = terms.first_mut().ok_or_else(invalid)?;
        term.prefix = Some(prefix);
        let scale = prefix.scale().multiply(self.scale)?;
        Ok(Self::from_parts(terms, self.dimension, scale))
    }

    // ========== Conversion ==========

    /// Whether values can be converted between the two units.
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        self.dimension == other.dimension
    }

    /// Factor turning a value in this unit into a value in `target`.
    ///
    /// # Errors
    ///
    /// Returns `IncompatibleDimension` when the dimensions differ.
    pub fn conversion_to(&self, target: &Self) -> Result<Scale, UnitError> {
        if !self.is_compatible(target) {
            return Err(UnitError::IncompatibleDimension {
                from: self.dimension,
                to: target.dimension,
            });
        }
        Ok(self.scale.divide(target.scale)?)
    }
}

fn merge_terms(
    left: &[UnitTerm],
    right: &[UnitTerm],
    sign: i8,
) -> Result<Vec<UnitTerm>, UnitError> {
    let mut terms = left.to_vec();
    for term in right {
        let exponent = term
            .exponent
            .checked_mul(sign)
            .ok_or(ArithmeticError::Overflow("unit exponent"))?;
        if let Some(existing) = terms.iter_mut().find(|t| t.same_base(term)) {
            existing.exponent = existing
                .exponent
                .checked_add(exponent)
                .ok_or(ArithmeticError::Overflow("unit exponent"))?;
        } else {
            terms.push(UnitTerm {
                exponent,
                ..term.clone()
            });
        }
    }
    terms.retain(|t| t.exponent != 0);
    Ok(terms)
}

fn render_symbol(terms: &[UnitTerm]) -> String {
    let numerator: Vec<String> = terms
        .iter()
        .filter(|t| t.exponent > 0)
        .map(|t| t.render(t.exponent.unsigned_abs()))
        .collect();
    let denominator: Vec<String> = terms
        .iter()
        .filter(|t| t.exponent < 0)
        .map(|t| t.render(t.exponent.unsigned_abs()))
        .collect();

    let top = if numerator.is_empty() {
        "1".to_string()
    } else {
        numerator.join("·")
    };
    match denominator.as_slice() {
        [] => top,
        [single] => format!("{top}/{single}"),
        many => format!("{top}/({})", many.join("·")),
    }
}

/// Equal when symbol, dimension and scale agree.
impl PartialEq for Unit {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
            && self.dimension == other.dimension
            && self.scale == other.scale
    }
}

impl Eq for Unit {}

impl Hash for Unit {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
        self.dimension.hash(state);
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    use crate::units::prefix::{centi, kilo};
    use crate::units::registry::{
        cubic_metre, gram, hour, kilogram, kilometre_per_hour, litre, metre, metre_per_second,
        second, square_metre,
    };

    #[test]
    fn test_scale_ratio_equality() {
        assert_eq!(Scale::from_raw(1000, 3600), Scale::from_raw(5, 18));
        assert_ne!(Scale::from_raw(1, 1000), Scale::ONE);
        let reduced = Scale::ratio(dec!(1000), dec!(3600)).unwrap();
        assert_eq!(reduced.numerator(), dec!(5));
        assert_eq!(reduced.denominator(), dec!(18));
        assert_eq!(reduced.to_string(), "5/18");
    }

    #[test]
    fn test_scale_rejects_invalid_parts() {
        assert_eq!(
            Scale::ratio(dec!(1), dec!(0)),
            Err(ArithmeticError::DivisionByZero)
        );
        assert!(Scale::ratio(dec!(-1), dec!(2)).is_err());
        assert!(Scale::ratio(dec!(0), dec!(2)).is_err());
        assert_eq!(
            Scale::ratio(dec!(0), dec!(1)),
            Err(ArithmeticError::InvalidNumber("0/1".into()))
        );
    }

    #[test]
    fn test_scale_apply() {
        assert_eq!(Scale::from_raw(1, 100).apply(dec!(21)).unwrap(), dec!(0.21));
        assert_eq!(Scale::from_raw(3600, 1).apply(dec!(2)).unwrap(), dec!(7200));
    }

    #[test]
    fn test_square_metre_symbol() {
        let area = metre().multiply(&metre()).unwrap();
        assert_eq!(area.symbol(), "m²");
        assert_eq!(area.dimension(), Dimension::Area);
        assert_eq!(area, square_metre());
        assert_eq!(area.multiply(&metre()).unwrap(), cubic_metre());
    }

    #[test]
    fn test_quotient_symbols() {
        let speed = kilo(&metre()).unwrap().divide(&hour()).unwrap();
        assert_eq!(speed.symbol(), "km/h");
        assert_eq!(speed.dimension(), Dimension::Speed);
        assert_eq!(speed, kilometre_per_hour());

        let efficiency = kilo(&metre()).unwrap().divide(&litre()).unwrap();
        assert_eq!(efficiency.symbol(), "km/l");
        assert_eq!(efficiency.dimension(), Dimension::FuelEfficiency);

        let grammage = gram().divide(&square_metre()).unwrap();
        assert_eq!(grammage.symbol(), "g/m²");

        let per_second = Unit::canonical(Dimension::Dimensionless)
            .divide(&second())
            .unwrap();
        assert_eq!(per_second.symbol(), "1/s");
        assert_eq!(per_second.dimension(), Dimension::Frequency);
    }

    #[test]
    fn test_multiple_denominator_terms() {
        let linear_density = kilogram().divide(&metre()).unwrap_err();
        assert_eq!(linear_density.error_code(), "UNSUPPORTED_DIMENSION");

        let terms = vec![
            UnitTerm { prefix: None, symbol: "m".into(), exponent: 3 },
            UnitTerm { prefix: Some(MetricPrefix::Kilo), symbol: "g".into(), exponent: -1 },
            UnitTerm { prefix: None, symbol: "s".into(), exponent: -2 },
        ];
        assert_eq!(render_symbol(&terms), "m³/(kg·s²)");
    }

    #[test]
    fn test_terms_cancel() {
        let km = kilo(&metre()).unwrap();
        let back = kilometre_per_hour().multiply(&hour()).unwrap();
        assert_eq!(back.symbol(), "km");
        assert_eq!(back, km);

        let ratio = metre().divide(&metre()).unwrap();
        assert_eq!(ratio.symbol(), "1");
        assert_eq!(ratio.dimension(), Dimension::Dimensionless);
        assert!(ratio.is_canonical());
    }

    #[test]
    fn test_canonical_units() {
        assert_eq!(Unit::canonical(Dimension::Length), metre());
        assert_eq!(Unit::canonical(Dimension::Mass), kilogram());
        assert_eq!(Unit::canonical(Dimension::Speed), metre_per_second());
        assert_eq!(Unit::canonical(Dimension::AreaDensity).symbol(), "kg/m²");
        assert!(!gram().is_canonical());
    }

    #[test]
    fn test_conversion_factor() {
        let cm = centi(&metre()).unwrap();
        assert_eq!(metre().conversion_to(&cm).unwrap(), Scale::from_raw(100, 1));
        assert_eq!(
            metre().conversion_to(&second()),
            Err(UnitError::IncompatibleDimension {
                from: Dimension::Length,
                to: Dimension::Time
            })
        );
    }

    #[test]
    fn test_units_with_different_scale_differ() {
        assert_ne!(litre(), cubic_metre());
        assert_ne!(gram(), kilogram());
    }
}
