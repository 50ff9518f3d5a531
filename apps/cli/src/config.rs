use std::str::FromStr;

use rust_decimal::Decimal;
use sitefolio_core::constants::DEFAULT_EXCHANGE_RATE;

const DEFAULT_USER_ID: &str = "local";

/// Runtime configuration read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    /// `text` or `json`
    pub log_format: String,
    /// BDT per USD for months without a stored rate
    pub default_exchange_rate: Decimal,
    /// Fixed USD to BDT rate for portfolio valuation; stored rates are used when unset
    pub usd_to_bdt_rate: Option<Decimal>,
    pub user_id: String,
    /// Problems found while reading the environment, logged once tracing is up
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut warnings = Vec::new();

        let log_format = lookup("SITEFOLIO_LOG_FORMAT").unwrap_or_else(|| "text".to_string());

        let default_exchange_rate = match lookup("SITEFOLIO_DEFAULT_RATE") {
            Some(raw) => match parse_positive(&raw) {
                Some(rate) => rate,
                None => {
                    warnings.push(format!(
                        "SITEFOLIO_DEFAULT_RATE={} is not a positive number, using {}",
                        raw, DEFAULT_EXCHANGE_RATE
                    ));
                    DEFAULT_EXCHANGE_RATE
                }
            },
            None => DEFAULT_EXCHANGE_RATE,
        };

        let usd_to_bdt_rate = lookup("SITEFOLIO_USD_BDT_RATE").and_then(|raw| {
            let parsed = parse_positive(&raw);
            if parsed.is_none() {
                warnings.push(format!(
                    "SITEFOLIO_USD_BDT_RATE={} is not a positive number, ignoring it",
                    raw
                ));
            }
            parsed
        });

        let user_id = lookup("SITEFOLIO_USER_ID")
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        Self {
            log_format,
            default_exchange_rate,
            usd_to_bdt_rate,
            user_id,
            warnings,
        }
    }
}

fn parse_positive(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|value| *value > Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_with(&[]);
        assert_eq!(config.log_format, "text");
        assert_eq!(config.default_exchange_rate, dec!(122));
        assert_eq!(config.usd_to_bdt_rate, None);
        assert_eq!(config.user_id, "local");
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_values_are_read() {
        let config = config_with(&[
            ("SITEFOLIO_LOG_FORMAT", "json"),
            ("SITEFOLIO_DEFAULT_RATE", "118.5"),
            ("SITEFOLIO_USD_BDT_RATE", "121"),
            ("SITEFOLIO_USER_ID", " alice "),
        ]);
        assert_eq!(config.log_format, "json");
        assert_eq!(config.default_exchange_rate, dec!(118.5));
        assert_eq!(config.usd_to_bdt_rate, Some(dec!(121)));
        assert_eq!(config.user_id, "alice");
    }

    #[test]
    fn test_invalid_values_fall_back_with_warning() {
        let config = config_with(&[
            ("SITEFOLIO_DEFAULT_RATE", "0"),
            ("SITEFOLIO_USD_BDT_RATE", "abc"),
        ]);
        assert_eq!(config.default_exchange_rate, dec!(122));
        assert_eq!(config.usd_to_bdt_rate, None);
        assert_eq!(config.warnings.len(), 2);
    }
}
