//! Configuration loading from environment.

use std::env;

use jobs_hex::RateConverter;
use jobs_types::{CurrencyCode, ExchangeError};

/// Converter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source_currency: CurrencyCode,
    pub target_currency: CurrencyCode,
    /// Explicit rate; the fixed table is used when unset
    pub exchange_rate: Option<f64>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, one call per variable.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let source_currency = lookup("JOBS_SOURCE_CURRENCY")
            .unwrap_or_else(|| "USD".to_string())
            .parse::<CurrencyCode>()
            .map_err(ExchangeError::from)?;

        let target_currency = lookup("JOBS_TARGET_CURRENCY")
            .unwrap_or_else(|| "EUR".to_string())
            .parse::<CurrencyCode>()
            .map_err(ExchangeError::from)?;

        let exchange_rate = lookup("JOBS_EXCHANGE_RATE")
            .map(|raw| {
                raw.trim()
                    .parse::<f64>()
                    .map_err(|e| anyhow::anyhow!("JOBS_EXCHANGE_RATE is not a number: {}", e))
            })
            .transpose()?;

        Ok(Self {
            source_currency,
            target_currency,
            exchange_rate,
        })
    }

    /// Applies command-line overrides on top of the environment values.
    pub fn with_overrides(
        self,
        source: Option<CurrencyCode>,
        target: Option<CurrencyCode>,
        rate: Option<f64>,
    ) -> Self {
        Self {
            source_currency: source.unwrap_or(self.source_currency),
            target_currency: target.unwrap_or(self.target_currency),
            exchange_rate: rate.or(self.exchange_rate),
        }
    }

    /// Builds the converter this configuration describes.
    pub fn converter(&self) -> Result<RateConverter, ExchangeError> {
        match self.exchange_rate {
            Some(rate) => {
                RateConverter::with_rate(self.source_currency, self.target_currency, rate)
            }
            None => Ok(RateConverter::between(
                self.source_currency,
                self.target_currency,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use jobs_types::CurrencyConverter;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();

        assert_eq!(config.source_currency, CurrencyCode::USD);
        assert_eq!(config.target_currency, CurrencyCode::EUR);
        assert_eq!(config.exchange_rate, None);
        assert_eq!(config.converter().unwrap().rate(), 0.91);
    }

    #[test]
    fn test_env_values() {
        let config = load(&[
            ("JOBS_TARGET_CURRENCY", "inr"),
            ("JOBS_EXCHANGE_RATE", " 80.5 "),
        ])
        .unwrap();

        assert_eq!(config.target_currency, CurrencyCode::INR);
        assert_eq!(config.exchange_rate, Some(80.5));
        assert_eq!(config.converter().unwrap().rate(), 80.5);
    }

    #[test]
    fn test_unknown_currency_is_unsupported() {
        let err = load(&[("JOBS_TARGET_CURRENCY", "XYZ")]).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ExchangeError>(),
            Some(&ExchangeError::UnsupportedCurrency("XYZ".into()))
        );
    }

    #[test]
    fn test_bad_rate_fails() {
        assert!(load(&[("JOBS_EXCHANGE_RATE", "lots")]).is_err());
    }

    #[test]
    fn test_negative_rate_rejected_by_converter() {
        let config = load(&[("JOBS_EXCHANGE_RATE", "-1")]).unwrap();

        assert_eq!(
            config.converter().unwrap_err(),
            ExchangeError::InvalidRate(-1.0)
        );
    }

    #[test]
    fn test_overrides_win() {
        let config = load(&[("JOBS_TARGET_CURRENCY", "GBP")])
            .unwrap()
            .with_overrides(None, Some(CurrencyCode::EUR), Some(1.5));

        assert_eq!(config.source_currency, CurrencyCode::USD);
        assert_eq!(config.target_currency, CurrencyCode::EUR);
        assert_eq!(config.exchange_rate, Some(1.5));
    }
}
