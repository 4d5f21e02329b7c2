//! Exchange rates, providers and currency conversion.
//!
//! # Modules
//!
//! - `exchange` - Exchange rate values
//! - `provider` - Provider trait, built-in tables and chains
//! - `cache` - Moka-backed rate cache
//! - `conversion` - Conversions bound to a target currency
//! - `registry` - Named provider lookup and the default chain

pub mod cache;
pub mod conversion;
pub mod exchange;
pub mod provider;
pub mod registry;

#[cfg(test)]
mod props;

pub use cache::CachedRateProvider;
pub use conversion::{ConversionSource, CurrencyConversion, convert_amount};
pub use exchange::{ExchangeRate, RateLookupMethod};
pub use provider::{
    ExchangeRateProvider, IdentityRateProvider, ProviderChain, StaticRateProvider, ecb, imf,
};
pub use registry::{ConversionRegistry, conversion, provider};
