//! Currency value type.
//!
//! A `Currency` is plain, immutable ISO 4217 metadata. Instances are defined
//! once as associated constants and handed out by the currency registry, so
//! two currencies are the same currency exactly when their codes match.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::{Serialize, Serializer};

/// ISO 4217 currency metadata.
#[derive(Debug, Clone, Copy)]
pub struct Currency {
    code: &'static str,
    numeric_code: u16,
    name: &'static str,
    symbol: &'static str,
    default_fraction_digits: u32,
}

impl Currency {
    /// Brazilian Real
    pub const BRL: Self = Self::new("BRL", 986, "Brazilian Real", "R$", 2);
    /// US Dollar
    pub const USD: Self = Self::new("USD", 840, "US Dollar", "$", 2);
    /// Euro
    pub const EUR: Self = Self::new("EUR", 978, "Euro", "€", 2);
    /// Japanese Yen
    pub const JPY: Self = Self::new("JPY", 392, "Japanese Yen", "¥", 0);
    /// Pound Sterling
    pub const GBP: Self = Self::new("GBP", 826, "Pound Sterling", "£", 2);
    /// Swiss Franc
    pub const CHF: Self = Self::new("CHF", 756, "Swiss Franc", "CHF", 2);
    /// Canadian Dollar
    pub const CAD: Self = Self::new("CAD", 124, "Canadian Dollar", "CA$", 2);
    /// Australian Dollar
    pub const AUD: Self = Self::new("AUD", 36, "Australian Dollar", "A$", 2);
    /// Chinese Yuan Renminbi
    pub const CNY: Self = Self::new("CNY", 156, "Yuan Renminbi", "CN¥", 2);
    /// Indian Rupee
    pub const INR: Self = Self::new("INR", 356, "Indian Rupee", "₹", 2);

    /// Creates currency metadata.
    #[must_use]
    pub const fn new(
        code: &'static str,
        numeric_code: u16,
        name: &'static str,
        symbol: &'static str,
        default_fraction_digits: u32,
    ) -> Self {
        Self {
            code,
            numeric_code,
            name,
            symbol,
            default_fraction_digits,
        }
    }

    /// Three-letter ISO 4217 code (e.g. "BRL").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.code
    }

    /// ISO 4217 numeric code (e.g. 986).
    #[must_use]
    pub const fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// English display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Display symbol (e.g. "R$").
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Number of minor-unit digits (2 for cents, 0 for yen).
    #[must_use]
    pub const fn default_fraction_digits(&self) -> u32 {
        self.default_fraction_digits
    }
}

impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Currency {}

impl Hash for Currency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl PartialOrd for Currency {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Currency {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code.cmp(other.code)
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_accessors() {
        let real = Currency::BRL;
        assert_eq!(real.code(), "BRL");
        assert_eq!(real.numeric_code(), 986);
        assert_eq!(real.name(), "Brazilian Real");
        assert_eq!(real.symbol(), "R$");
        assert_eq!(real.default_fraction_digits(), 2);
        assert_eq!(Currency::JPY.default_fraction_digits(), 0);
    }

    #[test]
    fn test_currency_equality_is_by_code() {
        let custom = Currency::new("USD", 0, "Dollar", "US$", 4);
        assert_eq!(custom, Currency::USD);
        assert_ne!(Currency::USD, Currency::BRL);
    }

    #[test]
    fn test_currency_ordering_is_by_code() {
        let mut currencies = vec![Currency::USD, Currency::BRL, Currency::JPY, Currency::EUR];
        currencies.sort();
        let codes: Vec<_> = currencies.iter().map(Currency::code).collect();
        assert_eq!(codes, vec!["BRL", "EUR", "JPY", "USD"]);
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::USD.to_string(), "USD");
        assert_eq!(format!("{}", Currency::JPY), "JPY");
    }

    #[test]
    fn test_currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::EUR).unwrap(), "\"EUR\"");
    }
}
