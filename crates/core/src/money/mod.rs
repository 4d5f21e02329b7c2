//! Monetary amounts and the currency registry.
//!
//! # Modules
//!
//! - `amount` - Immutable amounts with currency-checked arithmetic
//! - `registry` - Currency lookup by code and locale
//! - `rounding` - Explicit rounding operators
//! - `functions` - Filtering, grouping and aggregation over amounts
//! - `format` - Locale-aware rendering with injected conventions

pub mod amount;
pub mod error;
pub mod format;
pub mod functions;
pub mod registry;
pub mod rounding;

#[cfg(test)]
mod props;

pub use amount::{MonetaryAmount, MonetaryOperator};
pub use error::MoneyError;
pub use format::{
    AmountFormat, AmountFormatQuery, CurrencyStyle, LocaleConventions, NumberConventions,
    SymbolPosition, UniformConventions,
};
pub use functions::{MonetarySummary, summarize};
pub use registry::{CurrencyRegistry, currency, currency_for_locale};
pub use rounding::Rounding;
