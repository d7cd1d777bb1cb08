//! Display currencies and USD conversion
//!
//! All catalog prices are in USD; other currencies are derived from a single
//! user-controlled exchange rate.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::consts::DEFAULT_USD_TO_INR_RATE;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum Currency {
    /// US Dollar (default)
    #[default]
    Usd,
    /// Indian Rupee
    Inr,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct CurrencyInfo {
    pub(crate) code: &'static str,
    pub(crate) symbol: &'static str,
    pub(crate) name: &'static str,
}

impl Currency {
    pub(crate) const ALL: [Currency; 2] = [Currency::Usd, Currency::Inr];

    pub(crate) fn info(self) -> CurrencyInfo {
        match self {
            Currency::Usd => CurrencyInfo {
                code: "USD",
                symbol: "$",
                name: "US Dollar",
            },
            Currency::Inr => CurrencyInfo {
                code: "INR",
                symbol: "₹",
                name: "Indian Rupee",
            },
        }
    }

    pub(crate) fn symbol(self) -> &'static str {
        self.info().symbol
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.info().code)
    }
}

impl FromStr for Currency {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("usd") {
            Ok(Currency::Usd)
        } else if trimmed.eq_ignore_ascii_case("inr") {
            Ok(Currency::Inr)
        } else {
            Err(AppError::UnsupportedCurrency {
                input: trimmed.to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub(crate) struct ExchangeRates {
    pub(crate) usd_to_inr: f64,
    pub(crate) last_updated: DateTime<Utc>,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            usd_to_inr: DEFAULT_USD_TO_INR_RATE,
            last_updated: Utc::now(),
        }
    }
}

/// Convert a USD amount into `currency`. USD is the identity.
pub(crate) fn convert_currency(amount_usd: f64, currency: Currency, usd_to_inr: f64) -> f64 {
    match currency {
        Currency::Usd => amount_usd,
        Currency::Inr => amount_usd * usd_to_inr,
    }
}

/// Reject rates the conversion cannot sensibly use (zero, negative, NaN, infinite).
pub(crate) fn validate_rate(rate: f64) -> Result<f64, AppError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(rate)
    } else {
        Err(AppError::InvalidExchangeRate {
            input: rate.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn convert_usd_is_identity() {
        for x in [0.0, 0.000_15, 7.5, 1234.56] {
            for r in [1.0, 86.0, 0.5] {
                assert_eq!(convert_currency(x, Currency::Usd, r), x);
            }
        }
    }

    #[test]
    fn convert_inr_multiplies_by_rate() {
        assert_eq!(convert_currency(2.0, Currency::Inr, 86.0), 172.0);
        assert_eq!(convert_currency(0.0, Currency::Inr, 86.0), 0.0);
        assert!((convert_currency(7.5, Currency::Inr, 86.0) - 645.0).abs() < 1e-9);
    }

    #[test]
    fn parse_currency_case_insensitive() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!("INR".parse::<Currency>().unwrap(), Currency::Inr);
        assert_eq!(" Inr ".parse::<Currency>().unwrap(), Currency::Inr);
    }

    #[test]
    fn parse_unknown_currency_errors() {
        let err = "EUR".parse::<Currency>().unwrap_err();
        assert!(matches!(err, AppError::UnsupportedCurrency { .. }));
        assert!(err.to_string().contains("EUR"));
    }

    #[test]
    fn currency_info_symbols() {
        assert_eq!(Currency::Usd.symbol(), "$");
        assert_eq!(Currency::Inr.symbol(), "₹");
        assert_eq!(Currency::Inr.to_string(), "INR");
    }

    #[test]
    fn default_rates_use_default_rate() {
        assert_eq!(ExchangeRates::default().usd_to_inr, 86.0);
    }

    #[test]
    fn validate_rate_rejects_non_positive() {
        assert!(validate_rate(83.5).is_ok());
        assert!(validate_rate(0.0).is_err());
        assert!(validate_rate(-2.0).is_err());
        assert!(validate_rate(f64::NAN).is_err());
        assert!(validate_rate(f64::INFINITY).is_err());
    }
}
