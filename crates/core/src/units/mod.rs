//! Dimensions, units and quantities.
//!
//! # Modules
//!
//! - `dimension` - Named dimensions and their composition rules
//! - `unit` - Units with exact scales and composed symbols
//! - `prefix` - Metric prefixes
//! - `registry` - Built-in units and symbol lookup
//! - `quantity` - Values measured in a unit

pub mod dimension;
pub mod error;
pub mod prefix;
pub mod quantity;
pub mod registry;
pub mod unit;

#[cfg(test)]
mod props;

pub use dimension::{Dimension, DimensionVector};
pub use error::UnitError;
pub use prefix::{MetricPrefix, centi, kilo, milli, prefix};
pub use quantity::Quantity;
pub use registry::{
    UnitRegistry, cubic_metre, gram, hour, kilogram, kilometre_per_hour, litre, metre,
    metre_per_second, minute, second, square_metre, unit,
};
pub use unit::{Scale, Unit, UnitTerm};
