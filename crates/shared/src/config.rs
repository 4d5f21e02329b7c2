//! Application configuration management.

use serde::Deserialize;

use crate::types::RoundingMode;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Default numeric context for monetary amounts.
    #[serde(default)]
    pub money: MoneyConfig,
    /// Exchange rate resolution and caching.
    #[serde(default)]
    pub rates: RatesConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default monetary context configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MoneyConfig {
    /// Upper bound on fractional digits retained.
    #[serde(default = "default_max_scale")]
    pub max_scale: u32,
    /// Whether every amount is padded or rounded to exactly `max_scale`.
    #[serde(default)]
    pub fixed_scale: bool,
    /// Rounding mode used when digits must be dropped.
    #[serde(default)]
    pub rounding: RoundingMode,
}

fn default_max_scale() -> u32 {
    28
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            max_scale: default_max_scale(),
            fixed_scale: false,
            rounding: RoundingMode::default(),
        }
    }
}

/// Exchange rate configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Provider names tried in order by the default conversion lookup.
    #[serde(default = "default_chain")]
    pub default_chain: Vec<String>,
    /// Maximum number of cached rates per provider.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: u64,
    /// Time-to-live of a cached rate in seconds.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_chain() -> Vec<String> {
    vec!["IDENT".to_string(), "ECB".to_string(), "IMF".to_string()]
}

fn default_cache_capacity() -> u64 {
    1000
}

fn default_cache_ttl() -> u64 {
    3600 // 1 hour
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            default_chain: default_chain(),
            cache_capacity: default_cache_capacity(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "valor=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("VALOR")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("rates.default_chain"),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults_when_empty() {
        let config = from_toml("");
        assert_eq!(config.money.max_scale, 28);
        assert!(!config.money.fixed_scale);
        assert_eq!(config.money.rounding, RoundingMode::HalfEven);
        assert_eq!(config.rates.default_chain, vec!["IDENT", "ECB", "IMF"]);
        assert_eq!(config.rates.cache_capacity, 1000);
        assert_eq!(config.rates.cache_ttl_secs, 3600);
        assert_eq!(config.logging.filter, "valor=info");
    }

    #[test]
    fn test_overrides_from_file() {
        let config = from_toml(
            r#"
            [money]
            max_scale = 3
            fixed_scale = true
            rounding = "half_up"

            [rates]
            default_chain = ["IMF"]
            cache_ttl_secs = 60

            [logging]
            filter = "valor=debug"
            "#,
        );
        assert_eq!(config.money.max_scale, 3);
        assert!(config.money.fixed_scale);
        assert_eq!(config.money.rounding, RoundingMode::HalfUp);
        assert_eq!(config.rates.default_chain, vec!["IMF"]);
        assert_eq!(config.rates.cache_capacity, 1000);
        assert_eq!(config.rates.cache_ttl_secs, 60);
        assert_eq!(config.logging.filter, "valor=debug");
    }

    #[test]
    fn test_rejects_unknown_rounding_mode() {
        let result = config::Config::builder()
            .add_source(config::File::from_str(
                "[money]\nrounding = \"sideways\"",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<AppConfig>();
        assert!(result.is_err());
    }
}
