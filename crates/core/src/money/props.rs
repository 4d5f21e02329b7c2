//! Property-based tests for monetary amounts.
//!
//! - Arithmetic preserves the currency
//! - Mixing currencies always fails
//! - Zero is the additive identity
//! - Rounding is idempotent
//! - Summaries agree with folding `add`

use proptest::prelude::*;
use rust_decimal::Decimal;
use valor_shared::types::{Currency, MonetaryContext, RoundingMode};

use super::amount::MonetaryAmount;
use super::error::MoneyError;
use super::functions::{sum, summarize};
use super::rounding::Rounding;

/// Strategy to generate amounts (-1,000,000.0000 to 1,000,000.0000).
fn number() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000i64..10_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

fn currency() -> impl Strategy<Value = Currency> {
    prop::sample::select(vec![
        Currency::USD,
        Currency::EUR,
        Currency::BRL,
        Currency::JPY,
        Currency::GBP,
    ])
}

fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop::sample::select(vec![
        RoundingMode::HalfEven,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Same-currency arithmetic keeps the receiver's currency.
    #[test]
    fn prop_arithmetic_preserves_currency(
        a in number(),
        b in number(),
        currency in currency(),
    ) {
        let x = MonetaryAmount::of(a, currency).unwrap();
        let y = MonetaryAmount::of(b, currency).unwrap();

        prop_assert_eq!(x.add(&y).unwrap().currency(), currency);
        prop_assert_eq!(x.subtract(&y).unwrap().currency(), currency);
        prop_assert_eq!(x.multiply(b).unwrap().currency(), currency);
        prop_assert_eq!(x.add(&y).unwrap().number(), a + b);
    }

    /// Operations across currencies fail with a mismatch and never produce a value.
    #[test]
    fn prop_mixed_currencies_fail(
        a in number(),
        b in number(),
        left in currency(),
        right in currency(),
    ) {
        prop_assume!(left != right);
        let x = MonetaryAmount::of(a, left).unwrap();
        let y = MonetaryAmount::of(b, right).unwrap();

        let is_mismatch = |r: Result<_, MoneyError>| {
            matches!(r, Err(MoneyError::CurrencyMismatch { .. }))
        };
        prop_assert!(is_mismatch(x.add(&y).map(|_| ())));
        prop_assert!(is_mismatch(x.subtract(&y).map(|_| ())));
        prop_assert!(is_mismatch(x.compare(&y).map(|_| ())));
    }

    /// Adding zero yields an equal amount.
    #[test]
    fn prop_zero_is_identity(
        a in number(),
        currency in currency(),
    ) {
        let x = MonetaryAmount::of(a, currency).unwrap();
        prop_assert_eq!(x.add(&MonetaryAmount::zero(currency)).unwrap(), x);
        prop_assert_eq!(x.subtract(&x).unwrap(), MonetaryAmount::zero(currency));
    }

    /// Rounding twice is the same as rounding once.
    #[test]
    fn prop_rounding_is_idempotent(
        a in number(),
        currency in currency(),
        scale in 0u32..=4,
        mode in rounding_mode(),
    ) {
        let rounding = Rounding::of_scale(scale, mode);
        let once = MonetaryAmount::of(a, currency).unwrap().round(&rounding);
        prop_assert_eq!(once.round(&rounding), once);
        prop_assert!(once.number().scale() <= scale);
    }

    /// A fixed-scale context always yields exactly its scale.
    #[test]
    fn prop_fixed_context_pins_scale(
        a in number(),
        scale in 0u32..=8,
    ) {
        let context = MonetaryContext::new().with_fixed_scale(true).with_max_scale(scale);
        let x = MonetaryAmount::of_with_context(a, Currency::USD, context).unwrap();
        prop_assert_eq!(x.number().scale(), scale);
    }

    /// Summary totals match the plain sum.
    #[test]
    fn prop_summary_matches_sum(
        values in prop::collection::vec(number(), 1..20),
    ) {
        let amounts: Vec<_> = values
            .iter()
            .map(|v| MonetaryAmount::of(*v, Currency::USD).unwrap())
            .collect();
        let summary = summarize(&amounts, Currency::USD).unwrap();
        let total = sum(&amounts).unwrap().unwrap();

        prop_assert_eq!(summary.count, amounts.len());
        prop_assert_eq!(summary.total, total);
        prop_assert!(summary.min.unwrap().number() <= summary.max.unwrap().number());
    }
}
