//! Physical dimensions.
//!
//! A dimension is a vector of exponents over the base dimensions length,
//! mass and time. Composition adds or subtracts exponents; only results with
//! a name in [`Dimension`] are supported.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::UnitError;

/// Exponents of length, mass and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DimensionVector {
    /// Length exponent.
    pub length: i8,
    /// Mass exponent.
    pub mass: i8,
    /// Time exponent.
    pub time: i8,
}

impl DimensionVector {
    /// Creates a vector from its exponents.
    #[must_use]
    pub const fn new(length: i8, mass: i8, time: i8) -> Self {
        Self { length, mass, time }
    }

    fn combine(self, other: Self, sign: i8) -> Option<Self> {
        Some(Self {
            length: self.length.checked_add(other.length.checked_mul(sign)?)?,
            mass: self.mass.checked_add(other.mass.checked_mul(sign)?)?,
            time: self.time.checked_add(other.time.checked_mul(sign)?)?,
        })
    }
}

/// Named physical dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Dimension {
    /// Pure number.
    Dimensionless,
    /// L
    Length,
    /// M
    Mass,
    /// T
    Time,
    /// L²
    Area,
    /// L³
    Volume,
    /// L·T⁻¹
    Speed,
    /// L·T⁻²
    Acceleration,
    /// T⁻¹
    Frequency,
    /// Length per volume, L⁻².
    FuelEfficiency,
    /// Mass per area, M·L⁻².
    AreaDensity,
    /// Volume per time, L³·T⁻¹.
    VolumetricFlow,
}

impl Dimension {
    /// Every named dimension.
    pub const ALL: [Self; 12] = [
        Self::Dimensionless,
        Self::Length,
        Self::Mass,
        Self::Time,
        Self::Area,
        Self::Volume,
        Self::Speed,
        Self::Acceleration,
        Self::Frequency,
        Self::FuelEfficiency,
        Self::AreaDensity,
        Self::VolumetricFlow,
    ];

    /// Exponent vector of this dimension.
    #[must_use]
    pub const fn vector(self) -> DimensionVector {
        match self {
            Self::Dimensionless => DimensionVector::new(0, 0, 0),
            Self::Length => DimensionVector::new(1, 0, 0),
            Self::Mass => DimensionVector::new(0, 1, 0),
            Self::Time => DimensionVector::new(0, 0, 1),
            Self::Area => DimensionVector::new(2, 0, 0),
            Self::Volume => DimensionVector::new(3, 0, 0),
            Self::Speed => DimensionVector::new(1, 0, -1),
            Self::Acceleration => DimensionVector::new(1, 0, -2),
            Self::Frequency => DimensionVector::new(0, 0, -1),
            Self::FuelEfficiency => DimensionVector::new(-2, 0, 0),
            Self::AreaDensity => DimensionVector::new(-2, 1, 0),
            Self::VolumetricFlow => DimensionVector::new(3, 0, -1),
        }
    }

    /// Named dimension with this exponent vector, if any.
    #[must_use]
    pub fn from_vector(vector: DimensionVector) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.vector() == vector)
    }

    /// Dimension of a product.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDimension` when the product has no name, e.g.
    /// mass times time.
    pub fn multiply(self, other: Self) -> Result<Self, UnitError> {
        self.compose(other, 1, '*')
    }

    /// Dimension of a quotient.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDimension` when the quotient has no name.
    pub fn divide(self, other: Self) -> Result<Self, UnitError> {
        self.compose(other, -1, '/')
    }

    fn compose(self, other: Self, sign: i8, op: char) -> Result<Self, UnitError> {
        self.vector()
            .combine(other.vector(), sign)
            .and_then(Self::from_vector)
            .ok_or(UnitError::UnsupportedDimension {
                left: self,
                op,
                right: other,
            })
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dimensionless => "Dimensionless",
            Self::Length => "Length",
            Self::Mass => "Mass",
            Self::Time => "Time",
            Self::Area => "Area",
            Self::Volume => "Volume",
            Self::Speed => "Speed",
            Self::Acceleration => "Acceleration",
            Self::Frequency => "Frequency",
            Self::FuelEfficiency => "FuelEfficiency",
            Self::AreaDensity => "AreaDensity",
            Self::VolumetricFlow => "VolumetricFlow",
        };
        f.write_str(name)
    }
}
