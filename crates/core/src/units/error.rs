//! Unit and quantity error types.

use thiserror::Error;
use valor_shared::ArithmeticError;

use super::dimension::Dimension;

/// Errors raised by units, prefixes and quantities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    // ========== Dimension Errors ==========
    /// Conversion or addition between different dimensions.
    #[error("Cannot convert {from} to {to}")]
    IncompatibleDimension {
        /// Dimension of the source.
        from: Dimension,
        /// Dimension requested.
        to: Dimension,
    },

    /// A quantity was asserted to have another dimension.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension asserted by the caller.
        expected: Dimension,
        /// Dimension actually carried.
        actual: Dimension,
    },

    /// Composition yields a dimension with no name.
    #[error("Unsupported dimension: {left} {op} {right}")]
    UnsupportedDimension {
        /// Left operand dimension.
        left: Dimension,
        /// `*` or `/`.
        op: char,
        /// Right operand dimension.
        right: Dimension,
    },

    // ========== Registry Errors ==========
    /// Prefix applied to a composite or already prefixed unit.
    #[error("Prefix {prefix} cannot be applied to {unit}")]
    InvalidPrefix {
        /// Prefix name.
        prefix: String,
        /// Unit symbol.
        unit: String,
    },

    /// No metric prefix has this name.
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// No registered unit has this symbol.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Underlying decimal arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

impl UnitError {
    /// Returns the error code for diagnostics.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::IncompatibleDimension { .. } => "INCOMPATIBLE_DIMENSION",
            Self::DimensionMismatch { .. } => "DIMENSION_MISMATCH",
            Self::UnsupportedDimension { .. } => "UNSUPPORTED_DIMENSION",
            Self::InvalidPrefix { .. } => "INVALID_PREFIX",
            Self::UnknownPrefix(_) => "UNKNOWN_PREFIX",
            Self::UnknownUnit(_) => "UNKNOWN_UNIT",
            Self::Arithmetic(inner) => inner.error_code(),
        }
    }
}
