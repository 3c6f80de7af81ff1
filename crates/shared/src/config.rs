//! Application configuration management.

use std::collections::HashMap;

use serde::Deserialize;

/// Environment variable prefix (`MONETA__MONEY__DEFAULT_CURRENCY=EUR`).
pub const ENV_PREFIX: &str = "MONETA";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Currency registry settings.
    pub money: MoneyConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Currency registry settings applied at startup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MoneyConfig {
    /// Code of the currency assumed when none is given.
    pub default_currency: String,
    /// Exchange rates relative to the default currency, keyed by code.
    ///
    /// Kept as text so no value ever passes through a float.
    pub exchange_rates: HashMap<String, String>,
}

impl Default for MoneyConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            exchange_rates: HashMap::new(),
        }
    }
}

fn default_currency() -> String {
    "XXX".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "moneta=info".to_string()
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
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from an inline TOML document.
    ///
    /// Missing sections and keys fall back to their defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.money.default_currency, "XXX");
        assert!(config.money.exchange_rates.is_empty());
        assert_eq!(config.logging.filter, "moneta=info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_from_toml_str() {
        let config = AppConfig::from_toml_str(
            r#"
            [money]
            default_currency = "EUR"

            [money.exchange_rates]
            usd = "0.92"
            jpy = "0.0061"

            [logging]
            json = true
            "#,
        )
        .unwrap();

        assert_eq!(config.money.default_currency, "EUR");
        assert_eq!(config.money.exchange_rates.len(), 2);
        assert_eq!(
            config.money.exchange_rates.get("usd").map(String::as_str),
            Some("0.92")
        );
        assert!(config.logging.json);
        assert_eq!(config.logging.filter, "moneta=info");
    }

    #[test]
    fn test_from_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.money.default_currency, "XXX");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_load_reads_environment() {
        temp_env::with_vars(
            [
                ("MONETA__MONEY__DEFAULT_CURRENCY", Some("GBP")),
                ("MONETA__LOGGING__FILTER", Some("moneta=debug")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.money.default_currency, "GBP");
                assert_eq!(config.logging.filter, "moneta=debug");
            },
        );
    }

    #[test]
    fn test_load_without_sources() {
        temp_env::with_vars_unset(
            [
                "MONETA__MONEY__DEFAULT_CURRENCY",
                "MONETA__LOGGING__FILTER",
                "MONETA__LOGGING__JSON",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.money.default_currency, "XXX");
            },
        );
    }
}
