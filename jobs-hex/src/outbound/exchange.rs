//! Rate-table converter adapter.

use exchange_rates::{CurrencyCode, rate_between};
use jobs_types::{CurrencyConverter, ExchangeError};

/// Converts amounts between two currencies at a fixed rate.
///
/// The default converts US dollars to euros at `0.91`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateConverter {
    from: CurrencyCode,
    to: CurrencyCode,
    rate: f64,
}

impl RateConverter {
    /// Uses the rate from the fixed exchange table.
    pub fn between(from: CurrencyCode, to: CurrencyCode) -> Self {
        Self {
            from,
            to,
            rate: rate_between(from, to),
        }
    }

    /// Uses an explicit rate instead of the table.
    ///
    /// # Errors
    /// [`ExchangeError::InvalidRate`] if `rate` is negative, NaN or infinite.
    pub fn with_rate(
        from: CurrencyCode,
        to: CurrencyCode,
        rate: f64,
    ) -> Result<Self, ExchangeError> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(ExchangeError::InvalidRate(rate));
        }
        Ok(Self { from, to, rate })
    }

    pub fn source_currency(&self) -> CurrencyCode {
        self.from
    }
}

impl Default for RateConverter {
    fn default() -> Self {
        Self::between(CurrencyCode::USD, CurrencyCode::EUR)
    }
}

impl CurrencyConverter for RateConverter {
    fn rate(&self) -> f64 {
        self.rate
    }

    fn target_currency(&self) -> CurrencyCode {
        self.to
    }

    fn convert(&self, amount: Option<f64>) -> Result<f64, ExchangeError> {
        // NaN fails the comparison and is rejected along with negatives.
        amount
            .filter(|a| *a >= 0.0)
            .map(|a| a * self.rate)
            .ok_or(ExchangeError::InvalidAmount(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate_is_usd_to_eur() {
        let converter = RateConverter::default();
        assert_eq!(converter.rate(), 0.91);
        assert_eq!(converter.source_currency(), CurrencyCode::USD);
        assert_eq!(converter.target_currency(), CurrencyCode::EUR);
    }

    #[test]
    fn test_convert_non_negative_amounts() {
        let converter = RateConverter::default();
        for amount in [0.0, 1.0, 95000.0, 120000.0, 1e9] {
            let converted = converter.convert(Some(amount)).unwrap();
            assert!((converted - amount * 0.91).abs() < 1e-6, "amount {amount}");
        }
    }

    #[test]
    fn test_convert_negative_amount_fails() {
        let converter = RateConverter::default();
        let result = converter.convert(Some(-0.01));
        assert_eq!(result, Err(ExchangeError::InvalidAmount(Some(-0.01))));
    }

    #[test]
    fn test_convert_missing_amount_fails() {
        let converter = RateConverter::default();
        assert_eq!(
            converter.convert(None),
            Err(ExchangeError::InvalidAmount(None))
        );
    }

    #[test]
    fn test_convert_nan_fails() {
        let converter = RateConverter::default();
        let result = converter.convert(Some(f64::NAN));
        assert!(matches!(result, Err(ExchangeError::InvalidAmount(Some(a))) if a.is_nan()));
    }

    #[test]
    fn test_same_currency_is_identity() {
        let converter = RateConverter::between(CurrencyCode::GBP, CurrencyCode::GBP);
        assert_eq!(converter.convert(Some(42.5)), Ok(42.5));
    }

    #[test]
    fn test_explicit_rate() {
        let converter =
            RateConverter::with_rate(CurrencyCode::USD, CurrencyCode::INR, 80.0).unwrap();
        assert_eq!(converter.convert(Some(2.0)), Ok(160.0));
    }

    #[test]
    fn test_invalid_explicit_rate_rejected() {
        for rate in [-1.0, f64::INFINITY] {
            let result = RateConverter::with_rate(CurrencyCode::USD, CurrencyCode::EUR, rate);
            assert_eq!(result, Err(ExchangeError::InvalidRate(rate)));
        }
        assert!(RateConverter::with_rate(CurrencyCode::USD, CurrencyCode::EUR, f64::NAN).is_err());
    }
}
