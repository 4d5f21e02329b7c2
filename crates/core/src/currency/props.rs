//! Property-based tests for exchange rates and conversion.
//!
//! - Identity conversion preserves the amount
//! - Conversion results carry the target currency
//! - Rate inversion round-trips
//! - Banker's rounding of converted amounts

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;
use valor_shared::types::Currency;

use super::conversion::{ConversionSource, convert_amount};
use super::provider::{ExchangeRateProvider, IdentityRateProvider, StaticRateProvider, ecb, imf};
use crate::money::MonetaryAmount;

/// Strategy to generate amounts (-1,000,000.00 to 1,000,000.00).
fn amount() -> impl Strategy<Value = Decimal> {
    (-100_000_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate positive exchange rates (0.0001 to 10000.0000).
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick one of the built-in currencies.
fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec![
        Currency::USD,
        Currency::EUR,
        Currency::BRL,
        Currency::JPY,
        Currency::GBP,
        Currency::CHF,
        Currency::CAD,
        Currency::AUD,
        Currency::CNY,
        Currency::INR,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting through the identity provider into the same currency
    /// leaves the amount unchanged.
    #[test]
    fn prop_identity_conversion_preserves_amount(
        number in amount(),
        currency in currency(),
    ) {
        let money = MonetaryAmount::of(number, currency).unwrap();
        let same = Arc::new(IdentityRateProvider).conversion(currency);
        prop_assert_eq!(money.convert(&same).unwrap(), money);
    }

    /// Built-in tables quote every pair of built-in currencies and the result
    /// is expressed in the target currency.
    #[test]
    fn prop_builtin_tables_quote_all_pairs(
        number in amount(),
        base in currency(),
        term in currency(),
    ) {
        let money = MonetaryAmount::of(number, base).unwrap();
        for table in [ecb(), imf()] {
            let converted = money.convert(&Arc::new(table).conversion(term)).unwrap();
            prop_assert_eq!(converted.currency(), term);
            prop_assert_eq!(converted.signum(), money.signum());
        }
    }

    /// Inverting a rate twice recovers the original factor to 12 places.
    #[test]
    fn prop_rate_inverse_round_trips(
        rate in positive_rate(),
    ) {
        let provider = StaticRateProvider::new("TEST", Currency::USD, chrono::NaiveDate::default())
            .with_quote(Currency::EUR, rate);
        let quote = provider.rate(Currency::USD, Currency::EUR).unwrap();
        let back = quote.inverse().unwrap().inverse().unwrap();
        prop_assert_eq!(back.base, quote.base);
        prop_assert_eq!(back.term, quote.term);
        prop_assert_eq!(back.factor.round_dp(12), rate.round_dp(12));
    }

    /// Rounded conversion never exceeds the requested decimal places.
    #[test]
    fn prop_convert_amount_respects_places(
        number in amount(),
        rate in positive_rate(),
        places in 0u32..=4,
    ) {
        let result = convert_amount(number, rate, places).unwrap();
        prop_assert!(result.scale() <= places);
        prop_assert_eq!(Ok(result), convert_amount(number, rate, places));
    }
}
