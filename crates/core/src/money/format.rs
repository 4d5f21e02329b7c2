//! Locale-aware display of monetary amounts.
//!
//! The core owns no locale tables. Separators and symbol placement come from
//! an injected [`LocaleConventions`] source; this module only applies them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use valor_shared::types::Locale;

use super::amount::MonetaryAmount;
use super::error::MoneyError;
use super::rounding::Rounding;

/// How the currency is shown next to the number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyStyle {
    /// ISO code, e.g. `USD`.
    #[default]
    Code,
    /// Symbol, e.g. `$`.
    Symbol,
    /// Display name, e.g. `US Dollar`.
    Name,
    /// ISO numeric code, e.g. `840`.
    NumericCode,
}

/// Where the currency label goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    /// Before the number.
    #[default]
    Prefix,
    /// After the number.
    Suffix,
}

/// Number conventions of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NumberConventions {
    /// Thousands separator; `None` disables grouping.
    pub grouping_separator: Option<char>,
    /// Separator between integer and fraction.
    pub decimal_separator: char,
    /// Placement of the currency label.
    pub position: SymbolPosition,
    /// Whether a space separates label and number.
    pub spaced: bool,
}

/// Source of per-locale number conventions.
pub trait LocaleConventions: Send + Sync {
    /// Conventions for `locale`, if known.
    fn conventions(&self, locale: &Locale) -> Option<NumberConventions>;
}

impl LocaleConventions for HashMap<Locale, NumberConventions> {
    fn conventions(&self, locale: &Locale) -> Option<NumberConventions> {
        self.get(locale).copied()
    }
}

/// The same conventions for every locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniformConventions(pub NumberConventions);

impl LocaleConventions for UniformConventions {
    fn conventions(&self, _locale: &Locale) -> Option<NumberConventions> {
        Some(self.0)
    }
}

/// Locale and style of a requested amount format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AmountFormatQuery {
    /// Target locale.
    pub locale: Locale,
    /// Currency label style.
    pub style: CurrencyStyle,
}

impl AmountFormatQuery {
    /// Query for `locale` showing currency codes.
    #[must_use]
    pub fn of(locale: Locale) -> Self {
        Self {
            locale,
            style: CurrencyStyle::default(),
        }
    }

    /// Same query with another currency style.
    #[must_use]
    pub fn with_style(mut self, style: CurrencyStyle) -> Self {
        self.style = style;
        self
    }
}

/// Formats amounts for one locale and style.
#[derive(Debug, Clone)]
pub struct AmountFormat {
    query: AmountFormatQuery,
    conventions: NumberConventions,
}

impl AmountFormat {
    /// Resolves the query's locale through `source`.
    pub fn new(
        query: AmountFormatQuery,
        source: &dyn LocaleConventions,
    ) -> Result<Self, MoneyError> {
        let conventions = source
            .conventions(&query.locale)
            .ok_or_else(|| MoneyError::FormatUnavailable(query.locale.to_string()))?;
        Ok(Self { query, conventions })
    }

    /// The query this format was built for.
    #[must_use]
    pub fn query(&self) -> &AmountFormatQuery {
        &self.query
    }

    /// Renders `amount`, rounded to its currency's minor-unit digits.
    #[must_use]
    pub fn format(&self, amount: &MonetaryAmount) -> String {
        let currency = amount.currency();
        let digits = currency.default_fraction_digits();
        let mut value = Rounding::default_for(currency).round_value(amount.number());
        value.rescale(digits);

        let plain = value.abs().to_string();
        let (integer, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), ""));
        let mut number = group_digits(integer, self.conventions.grouping_separator);
        if !fraction.is_empty() {
            number.push(self.conventions.decimal_separator);
            number.push_str(fraction);
        }

        let label = match self.query.style {
            CurrencyStyle::Code => currency.code().to_string(),
            CurrencyStyle::Symbol => currency.symbol().to_string(),
            CurrencyStyle::Name => currency.name().to_string(),
            CurrencyStyle::NumericCode => currency.numeric_code().to_string(),
        };
        let space = if self.conventions.spaced { " " } else { "" };
        let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };

        match self.conventions.position {
            SymbolPosition::Prefix => format!("{sign}{label}{space}{number}"),
            SymbolPosition::Suffix => format!("{sign}{number}{space}{label}"),
        }
    }
}

fn group_digits(integer: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return integer.to_string();
    };
    let len = integer.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(digit);
    }
    grouped
}
