//! Fixed Exchange Rate Table with Macro-Based Currency Generation
//!
//! Currencies are declared once in the `define_currencies!` invocation below,
//! which generates the `CurrencyCode` enum together with its metadata lookups,
//! parsing and display. Rates are quoted as units of the currency per one US
//! dollar and never change at runtime.
//!
//! # Adding a New Currency
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     JPY => ("JPY", "¥", 149.5),
//! }
//! ```
//!
//! # Example
//! ```
//! use exchange_rates::{CurrencyCode, rate_between};
//!
//! let rate = rate_between(CurrencyCode::USD, CurrencyCode::EUR);
//! assert!((rate - 0.91).abs() < f64::EPSILON);
//!
//! let code: CurrencyCode = "gbp".parse().unwrap();
//! assert_eq!(code.symbol(), "£");
//! ```

/// Error returned when a currency code is not in the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown currency: {0}")]
pub struct UnknownCurrency(pub String);

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its rate table
// ─────────────────────────────────────────────────────────────────────────────

/// Defines currencies with auto-generated lookups and conversions.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     CurrencyName => ("CODE", "SYMBOL", units_per_usd),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $symbol:literal, $per_usd:expr)
        ),* $(,)?
    ) => {
        /// Currencies known to the rate table.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            pub fn symbol(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $symbol),*
                }
            }

            /// Units of this currency bought by one US dollar.
            pub fn per_usd(&self) -> f64 {
                match self {
                    $(CurrencyCode::$name => $per_usd),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = $crate::UnknownCurrency;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err($crate::UnknownCurrency(s.to_string())),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    USD => ("USD", "$", 1.0),
    EUR => ("EUR", "€", 0.91),
    GBP => ("GBP", "£", 0.79),
    INR => ("INR", "₹", 83.12),
}

/// Returns how many units of `to` one unit of `from` buys.
///
/// The dollar is the pivot, so a pair involving USD reads its rate straight
/// from the table without a division.
pub fn rate_between(from: CurrencyCode, to: CurrencyCode) -> f64 {
    match (from, to) {
        _ if from == to => 1.0,
        (CurrencyCode::USD, _) => to.per_usd(),
        _ => to.per_usd() / from.per_usd(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_to_eur_is_exact_table_rate() {
        assert_eq!(rate_between(CurrencyCode::USD, CurrencyCode::EUR), 0.91);
    }

    #[test]
    fn test_same_currency_rate_is_one() {
        for &code in CurrencyCode::all() {
            assert_eq!(rate_between(code, code), 1.0);
        }
    }

    #[test]
    fn test_cross_rate_goes_through_usd() {
        let rate = rate_between(CurrencyCode::EUR, CurrencyCode::GBP);
        assert!((rate - 0.79 / 0.91).abs() < 1e-12);
    }

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("USD".parse::<CurrencyCode>().unwrap(), CurrencyCode::USD);
        assert_eq!(" eur ".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
    }

    #[test]
    fn test_unknown_currency_parse_fails() {
        let err = "XYZ".parse::<CurrencyCode>().unwrap_err();
        assert_eq!(err, UnknownCurrency("XYZ".into()));
        assert_eq!(err.to_string(), "Unknown currency: XYZ");
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::INR.to_string(), "INR");
    }

    #[test]
    fn test_currency_code_serde_uppercase() {
        let json = serde_json::to_string(&CurrencyCode::GBP).unwrap();
        assert_eq!(json, "\"GBP\"");
    }

    #[test]
    fn test_usd_rates_match_table() {
        for &code in CurrencyCode::all() {
            assert_eq!(rate_between(CurrencyCode::USD, code), code.per_usd());
        }
    }
}
