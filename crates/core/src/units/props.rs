//! Property-based tests for quantities.
//!
//! - Conversion round-trips within tolerance
//! - Conversion never changes the dimension
//! - Same-dimension addition is order independent in canonical units
//! - Composition then decomposition restores the unit

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::prefix::MetricPrefix;
use super::quantity::Quantity;
use super::registry::{gram, hour, litre, metre, minute, second};
use super::unit::Unit;

/// Strategy to generate values (-1,000,000.000 to 1,000,000.000).
fn value() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..1_000_000_000i64).prop_map(|v| Decimal::new(v, 3))
}

fn prefix() -> impl Strategy<Value = MetricPrefix> {
    prop::sample::select(MetricPrefix::ALL.to_vec())
}

fn base_unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(vec![metre(), gram(), second(), litre()])
}

fn time_unit() -> impl Strategy<Value = Unit> {
    prop::sample::select(vec![second(), minute(), hour()])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Converting to a prefixed unit and back restores the value.
    #[test]
    fn prop_prefix_round_trip(
        v in value(),
        base in base_unit(),
        prefix in prefix(),
    ) {
        let scaled = base.with_prefix(prefix).unwrap();
        let q = Quantity::from_decimal(v, base.clone());
        let there = q.to(&scaled).unwrap();
        let back = there.to(&base).unwrap();

        prop_assert_eq!(there.dimension(), q.dimension());
        prop_assert_eq!(back.value(), v);
        prop_assert!(there.is_equivalent(&q));
    }

    /// Time conversions round-trip within rounding tolerance.
    #[test]
    fn prop_time_round_trip(
        v in value(),
        from in time_unit(),
        to in time_unit(),
    ) {
        let q = Quantity::from_decimal(v, from.clone());
        let back = q.to(&to).unwrap().to(&from).unwrap();
        let tolerance = Decimal::new(1, 15);
        prop_assert!((back.value() - v).abs() <= tolerance);
    }

    /// Adding in either unit describes the same physical total.
    #[test]
    fn prop_addition_commutes_across_units(
        a in value(),
        b in value(),
        prefix in prefix(),
    ) {
        let left = Quantity::from_decimal(a, metre());
        let right = Quantity::from_decimal(b, metre().with_prefix(prefix).unwrap());

        let one = left.add(&right).unwrap().to_canonical().unwrap();
        let two = right.add(&left).unwrap().to_canonical().unwrap();
        prop_assert_eq!(one.value(), two.value());
    }

    /// Dividing a product by one factor restores the other factor's unit.
    #[test]
    fn prop_multiply_then_divide_restores_unit(
        a in value(),
        b in value(),
        time in time_unit(),
    ) {
        prop_assume!(!b.is_zero());
        let distance = Quantity::from_decimal(a, metre());
        let duration = Quantity::from_decimal(b, time);

        let speed = distance.divide(&duration).unwrap();
        let back = speed.multiply(&duration).unwrap();
        prop_assert_eq!(back.unit(), distance.unit());
    }
}
