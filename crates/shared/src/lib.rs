//! Shared types, errors, and configuration for Valor.
//!
//! This crate provides the primitives used across all other crates:
//! - Decimal ingestion from integers, floats and strings
//! - Numeric contexts and rounding modes for monetary values
//! - The `Currency` value type and `Locale` identifiers
//! - Arithmetic error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{ArithmeticError, LocaleParseError};
