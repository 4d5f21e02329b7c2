//! Unit registry.
//!
//! Named constructors for the built-in units and a read-only symbol table.
//! [`UnitRegistry::global`] is built once on first access.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use super::dimension::Dimension;
use super::error::UnitError;
use super::prefix::MetricPrefix;
use super::unit::{Scale, Unit, UnitTerm};

fn term(prefix: Option<MetricPrefix>, symbol: &str, exponent: i8) -> UnitTerm {
    UnitTerm {
        prefix,
        symbol: symbol.to_string(),
        exponent,
    }
}

// ========== Built-in Units ==========

/// Metre, canonical length.
#[must_use]
pub fn metre() -> Unit {
    Unit::base("m", Dimension::Length, Scale::ONE)
}

/// Gram, a thousandth of the canonical kilogram.
#[must_use]
pub fn gram() -> Unit {
    Unit::base("g", Dimension::Mass, Scale::from_raw(1, 1000))
}

/// Kilogram, canonical mass.
#[must_use]
pub fn kilogram() -> Unit {
    Unit::from_parts(
        vec![term(Some(MetricPrefix::Kilo), "g", 1)],
        Dimension::Mass,
        Scale::ONE,
    )
}

/// Second, canonical time.
#[must_use]
pub fn second() -> Unit {
    Unit::base("s", Dimension::Time, Scale::ONE)
}

/// Minute, 60 seconds.
#[must_use]
pub fn minute() -> Unit {
    Unit::base("min", Dimension::Time, Scale::from_raw(60, 1))
}

/// Hour, 3600 seconds.
#[must_use]
pub fn hour() -> Unit {
    Unit::base("h", Dimension::Time, Scale::from_raw(3600, 1))
}

/// Litre, a thousandth of a cubic metre.
#[must_use]
pub fn litre() -> Unit {
    Unit::base("l", Dimension::Volume, Scale::from_raw(1, 1000))
}

/// Square metre, canonical area.
#[must_use]
pub fn square_metre() -> Unit {
    Unit::canonical(Dimension::Area)
}

/// Cubic metre, canonical volume.
#[must_use]
pub fn cubic_metre() -> Unit {
    Unit::canonical(Dimension::Volume)
}

/// Metre per second, canonical speed.
#[must_use]
pub fn metre_per_second() -> Unit {
    Unit::canonical(Dimension::Speed)
}

/// Kilometre per hour.
#[must_use]
pub fn kilometre_per_hour() -> Unit {
    Unit::from_parts(
        vec![term(Some(MetricPrefix::Kilo), "m", 1), term(None, "h", -1)],
        Dimension::Speed,
        Scale::from_raw(1000, 3600),
    )
}

static GLOBAL: Lazy<UnitRegistry> = Lazy::new(|| {
    let registry = UnitRegistry::new();
    debug!(units = registry.by_symbol.len(), "Unit registry initialized");
    registry
});

/// Lookup table from symbols to units.
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    by_symbol: HashMap<String, Unit>,
}

impl UnitRegistry {
    /// Registry with the built-in units and their common prefixed forms.
    #[must_use]
    pub fn new() -> Self {
        let simple = [metre(), gram(), second(), litre()];
        let prefixed = [
            (MetricPrefix::Kilo, metre()),
            (MetricPrefix::Centi, metre()),
            (MetricPrefix::Milli, metre()),
            (MetricPrefix::Milli, gram()),
            (MetricPrefix::Milli, second()),
            (MetricPrefix::Milli, litre()),
        ]
        .into_iter()
        .filter_map(|(prefix, unit)| unit.with_prefix(prefix).ok());

        Self::from_units(
            simple
                .into_iter()
                .chain(prefixed)
                .chain([
                    kilogram(),
                    minute(),
                    hour(),
                    square_metre(),
                    cubic_metre(),
                    metre_per_second(),
                    kilometre_per_hour(),
                ]),
        )
    }

    /// Registry keyed by each unit's symbol; later duplicates win.
    #[must_use]
    pub fn from_units(units: impl IntoIterator<Item = Unit>) -> Self {
        let by_symbol = units
            .into_iter()
            .map(|unit| (unit.symbol().to_string(), unit))
            .collect();
        Self { by_symbol }
    }

    /// The process-wide registry.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Looks up a unit by its exact symbol.
    ///
    /// # Errors
    ///
    /// Returns `UnknownUnit` when no unit has that symbol.
    pub fn lookup(&self, symbol: &str) -> Result<Unit, UnitError> {
        self.by_symbol
            .get(symbol.trim())
            .cloned()
            .ok_or_else(|| UnitError::UnknownUnit(symbol.to_string()))
    }

    /// Canonical unit of `dimension`.
    #[must_use]
    pub fn canonical(&self, dimension: Dimension) -> Unit {
        Unit::canonical(dimension)
    }

    /// All registered symbols, sorted.
    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        let mut all: Vec<_> = self.by_symbol.keys().map(String::as_str).collect();
        all.sort_unstable();
        all
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Looks up a unit symbol in the global registry.
///
/// # Errors
///
/// Returns `UnknownUnit` for an unregistered symbol.
pub fn unit(symbol: &str) -> Result<Unit, UnitError> {
    UnitRegistry::global().lookup(symbol)
}
