//! Core value types for Valor.
//!
//! This crate contains pure domain logic with no I/O: amounts of money,
//! exchange rates and physical quantities. Every value is immutable and every
//! operation returns a new value or a typed error.
//!
//! # Modules
//!
//! - `money` - Monetary amounts, the currency registry, rounding, aggregation and formatting
//! - `currency` - Exchange rates, providers and currency conversion
//! - `units` - Dimensions, units, metric prefixes and quantities

pub mod currency;
pub mod money;
pub mod units;
