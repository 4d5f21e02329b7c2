//! Locale identifiers used as lookup keys for currencies and formats.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LocaleParseError;

/// A language with an optional country, e.g. `pt-BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Locale {
    language: String,
    country: Option<String>,
}

impl Locale {
    /// Creates a locale from a language and a country code.
    #[must_use]
    pub fn new(language: &str, country: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: Some(country.to_ascii_uppercase()),
        }
    }

    /// Creates a language-only locale.
    #[must_use]
    pub fn language_only(language: &str) -> Self {
        Self {
            language: language.to_ascii_lowercase(),
            country: None,
        }
    }

    /// `en-US`
    #[must_use]
    pub fn us() -> Self {
        Self::new("en", "US")
    }

    /// `en-GB`
    #[must_use]
    pub fn uk() -> Self {
        Self::new("en", "GB")
    }

    /// `pt-BR`
    #[must_use]
    pub fn brazil() -> Self {
        Self::new("pt", "BR")
    }

    /// `ja-JP`
    #[must_use]
    pub fn japan() -> Self {
        Self::new("ja", "JP")
    }

    /// `de-DE`
    #[must_use]
    pub fn germany() -> Self {
        Self::new("de", "DE")
    }

    /// Lowercase language code.
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Uppercase country code, if any.
    #[must_use]
    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    /// Parses `ll`, `ll-CC` or `ll_CC`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LocaleParseError(s.to_string());
        let mut parts = s.trim().split(['-', '_']);

        let language = parts.next().filter(|l| {
            (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic())
        });
        let language = language.ok_or_else(invalid)?;

        let country = match parts.next() {
            None => None,
            Some(c) if c.len() == 2 && c.chars().all(|ch| ch.is_ascii_alphabetic()) => Some(c),
            Some(_) => return Err(invalid()),
        };
        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(match country {
            Some(country) => Self::new(language, country),
            None => Self::language_only(language),
        })
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}-{country}", self.language),
            None => f.write_str(&self.language),
        }
    }
}
