//! Aggregation over sequences of monetary amounts.
//!
//! All functions take any iterable of amounts (owned or borrowed) and walk it
//! lazily. Sums and summaries fail on the first amount in a foreign currency;
//! call [`filter_by_currency`] first to aggregate a mixed sequence.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use serde::Serialize;
use valor_shared::types::Currency;

use super::amount::MonetaryAmount;
use super::error::MoneyError;

/// Predicate matching amounts in `currency`.
pub fn is_currency(currency: Currency) -> impl Fn(&MonetaryAmount) -> bool + Copy {
    move |amount| amount.currency() == currency
}

/// Lazily keeps only the amounts in `currency`.
pub fn filter_by_currency<I>(amounts: I, currency: Currency) -> impl Iterator<Item = MonetaryAmount>
where
    I: IntoIterator,
    I::Item: Borrow<MonetaryAmount>,
{
    let matches = is_currency(currency);
    amounts
        .into_iter()
        .map(|amount| *amount.borrow())
        .filter(move |amount| matches(amount))
}

/// Groups amounts by currency, ordered by currency code.
pub fn group_by_currency<I>(amounts: I) -> BTreeMap<Currency, Vec<MonetaryAmount>>
where
    I: IntoIterator,
    I::Item: Borrow<MonetaryAmount>,
{
    let mut groups: BTreeMap<Currency, Vec<MonetaryAmount>> = BTreeMap::new();
    for amount in amounts {
        let amount = *amount.borrow();
        groups.entry(amount.currency()).or_default().push(amount);
    }
    groups
}

/// Sums amounts of a single currency; `None` for an empty sequence.
pub fn sum<I>(amounts: I) -> Result<Option<MonetaryAmount>, MoneyError>
where
    I: IntoIterator,
    I::Item: Borrow<MonetaryAmount>,
{
    let mut iter = amounts.into_iter();
    let Some(first) = iter.next() else {
        return Ok(None);
    };
    iter.try_fold(*first.borrow(), |total, amount| total.add(amount.borrow()))
        .map(Some)
}

/// Sums the amounts in `currency` onto `seed`, skipping every other currency.
pub fn sum_filtered_by_currency<I>(
    amounts: I,
    currency: Currency,
    seed: MonetaryAmount,
) -> Result<MonetaryAmount, MoneyError>
where
    I: IntoIterator,
    I::Item: Borrow<MonetaryAmount>,
{
    if seed.currency() != currency {
        return Err(MoneyError::mismatch(currency, seed.currency()));
    }
    filter_by_currency(amounts, currency).try_fold(seed, |total, amount| total.add(&amount))
}

/// Smallest amount of a single-currency sequence.
pub fn min<I>(amounts: I) -> Result<Option<MonetaryAmount>, MoneyError>
where
    I: IntoIterator,
    I::Item: Borrow<MonetaryAmount>,
{
    extreme(amounts, MonetaryAmount::is_less_than)
}

/// Largest amount of a single-currency sequence.
pub fn max<I>(amounts: I) -> Result<Option<MonetaryAmount>, MoneyError>
where
    I: IntoIterator,
    I::Item: Borrow<MonetaryAmount>,
{
    extreme(amounts, MonetaryAmount::is_greater_than)
}

fn extreme<I, F>(amounts: I, replaces: F) -> Result<Option<MonetaryAmount>, MoneyError>
where
    I: IntoIterator,
    I::Item: Borrow<MonetaryAmount>,
    F: Fn(&MonetaryAmount, &MonetaryAmount) -> Result<bool, MoneyError>,
{
    let mut best: Option<MonetaryAmount> = None;
    for amount in amounts {
        let amount = *amount.borrow();
        best = match best {
            Some(current) if !replaces(&amount, &current)? => Some(current),
            _ => Some(amount),
        };
    }
    Ok(best)
}

/// Count, total, extremes and mean of a single-currency sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonetarySummary {
    /// Currency every summarized amount is in.
    pub currency: Currency,
    /// Number of amounts.
    pub count: usize,
    /// Sum of all amounts (zero when empty).
    pub total: MonetaryAmount,
    /// Smallest amount, if any.
    pub min: Option<MonetaryAmount>,
    /// Largest amount, if any.
    pub max: Option<MonetaryAmount>,
    /// `total / count` (zero when empty).
    pub average: MonetaryAmount,
}

/// Summarizes amounts that must all be in `currency`.
///
/// # Errors
///
/// Fails with [`MoneyError::CurrencyMismatch`] on the first amount in another
/// currency; no partial summary is returned.
pub fn summarize<I>(amounts: I, currency: Currency) -> Result<MonetarySummary, MoneyError>
where
    I: IntoIterator,
    I::Item: Borrow<MonetaryAmount>,
{
    let mut count = 0usize;
    let mut total = MonetaryAmount::zero(currency);
    let mut min: Option<MonetaryAmount> = None;
    let mut max: Option<MonetaryAmount> = None;

    for amount in amounts {
        let amount = *amount.borrow();
        if amount.currency() != currency {
            return Err(MoneyError::mismatch(currency, amount.currency()));
        }
        count += 1;
        total = total.add(&amount)?;
        if min.is_none_or(|m| amount.number() < m.number()) {
            min = Some(amount);
        }
        if max.is_none_or(|m| amount.number() > m.number()) {
            max = Some(amount);
        }
    }

    let average = if count == 0 {
        total
    } else {
        total.divide(count)?
    };

    Ok(MonetarySummary {
        currency,
        count,
        total,
        min,
        max,
        average,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn amounts() -> Vec<MonetaryAmount> {
        vec![
            MonetaryAmount::of(2, Currency::BRL).unwrap(),
            MonetaryAmount::of(42, Currency::USD).unwrap(),
            MonetaryAmount::of(7, Currency::USD).unwrap(),
            MonetaryAmount::of(13.37, Currency::JPY).unwrap(),
            MonetaryAmount::of(18, Currency::USD).unwrap(),
        ]
    }

    fn usd(n: i64) -> MonetaryAmount {
        MonetaryAmount::of(n, Currency::USD).unwrap()
    }

    #[test]
    fn test_filter_by_currency() {
        let dollars: Vec<_> = filter_by_currency(&amounts(), Currency::USD).collect();
        assert_eq!(dollars, vec![usd(42), usd(7), usd(18)]);
    }

    #[test]
    fn test_filter_is_restartable() {
        let all = amounts();
        let first: Vec<_> = filter_by_currency(&all, Currency::BRL).collect();
        let second: Vec<_> = filter_by_currency(&all, Currency::BRL).collect();
        assert_eq!(first, second);
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_sum_filtered_by_currency() {
        let total =
            sum_filtered_by_currency(amounts(), Currency::USD, MonetaryAmount::zero(Currency::USD))
                .unwrap();
        assert_eq!(total, usd(67));
    }

    #[test]
    fn test_sum_filtered_rejects_foreign_seed() {
        let result =
            sum_filtered_by_currency(amounts(), Currency::USD, MonetaryAmount::zero(Currency::BRL));
        assert!(matches!(result, Err(MoneyError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_sum_mixed_currencies_fails() {
        assert!(matches!(
            sum(amounts()),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
        assert_eq!(sum(Vec::<MonetaryAmount>::new()).unwrap(), None);
        assert_eq!(sum([usd(1), usd(2)]).unwrap(), Some(usd(3)));
    }

    #[test]
    fn test_group_by_currency() {
        let groups = group_by_currency(amounts());
        let codes: Vec<_> = groups.keys().map(Currency::code).collect();
        assert_eq!(codes, vec!["BRL", "JPY", "USD"]);
        assert_eq!(groups[&Currency::USD], vec![usd(42), usd(7), usd(18)]);
        assert_eq!(groups[&Currency::JPY].len(), 1);
    }

    #[test]
    fn test_min_max() {
        let dollars = [usd(42), usd(7), usd(18)];
        assert_eq!(min(dollars).unwrap(), Some(usd(7)));
        assert_eq!(max(dollars).unwrap(), Some(usd(42)));
        assert!(max(amounts()).is_err());
    }

    #[test]
    fn test_summarize() {
        let summary = summarize([usd(42), usd(7), usd(18)], Currency::USD).unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.total, usd(67));
        assert_eq!(summary.min, Some(usd(7)));
        assert_eq!(summary.max, Some(usd(42)));
        assert_eq!(summary.average.number().round_dp(2), dec!(22.33));
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(Vec::<MonetaryAmount>::new(), Currency::EUR).unwrap();
        assert_eq!(summary.count, 0);
        assert!(summary.total.is_zero());
        assert!(summary.average.is_zero());
        assert_eq!(summary.min, None);
    }

    #[test]
    fn test_summarize_fails_atomically_on_mismatch() {
        assert_eq!(
            summarize(amounts(), Currency::USD),
            Err(MoneyError::CurrencyMismatch {
                expected: "USD".into(),
                got: "BRL".into()
            })
        );
    }
}
