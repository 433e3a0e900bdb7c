//! Currency converter port.
//!
//! This trait defines the interface for salary conversion.
//! Implementations can use a fixed table, a configured rate, mocks, etc.

use exchange_rates::{CurrencyCode, UnknownCurrency};

/// Error type for conversion operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExchangeError {
    /// The amount was missing, negative or not a number.
    #[error("Invalid amount: {}", describe_amount(.0))]
    InvalidAmount(Option<f64>),

    #[error("Invalid exchange rate: {0}")]
    InvalidRate(f64),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),
}

fn describe_amount(amount: &Option<f64>) -> String {
    amount.map_or_else(|| "missing".to_string(), |a| a.to_string())
}

impl From<UnknownCurrency> for ExchangeError {
    fn from(err: UnknownCurrency) -> Self {
        ExchangeError::UnsupportedCurrency(err.0)
    }
}

/// Port trait for currency converters.
pub trait CurrencyConverter: Send + Sync {
    /// Units of the target currency per unit of the source currency.
    fn rate(&self) -> f64;

    /// Currency that converted amounts are expressed in.
    fn target_currency(&self) -> CurrencyCode;

    /// Converts an amount from the source currency to the target currency.
    ///
    /// Fails with [`ExchangeError::InvalidAmount`] when `amount` is `None`,
    /// negative, or NaN.
    fn convert(&self, amount: Option<f64>) -> Result<f64, ExchangeError>;
}
