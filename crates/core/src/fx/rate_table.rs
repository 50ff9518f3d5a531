use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;

use crate::constants::DEFAULT_EXCHANGE_RATE;
use crate::fx::fx_model::ExchangeRate;

/// Monthly BDT-per-USD lookup with a constant fallback.
///
/// Lookups never fail: a month without a usable stored rate resolves to the
/// default rate.
#[derive(Debug, Clone)]
pub struct MonthlyRateTable {
    /// Key: (year, month)
    rates: BTreeMap<(i32, u32), Decimal>,
    default_rate: Decimal,
}

impl MonthlyRateTable {
    pub fn new(exchange_rates: &[ExchangeRate]) -> Self {
        Self::with_default(exchange_rates, DEFAULT_EXCHANGE_RATE)
    }

    /// Builds the table with a caller supplied fallback. A non-positive
    /// fallback is replaced by [`DEFAULT_EXCHANGE_RATE`].
    pub fn with_default(exchange_rates: &[ExchangeRate], default_rate: Decimal) -> Self {
        let default_rate = if default_rate > Decimal::ZERO {
            default_rate
        } else {
            DEFAULT_EXCHANGE_RATE
        };

        let mut rates = BTreeMap::new();
        for rate in exchange_rates {
            if !rate.is_usable() {
                debug!(
                    "Ignoring non-positive exchange rate {} for {}-{:02}",
                    rate.rate, rate.year, rate.month
                );
                continue;
            }
            // Later rows for the same month win.
            rates.insert((rate.year, rate.month), rate.rate);
        }

        Self {
            rates,
            default_rate,
        }
    }

    pub fn default_rate(&self) -> Decimal {
        self.default_rate
    }

    pub fn stored_rate(&self, year: i32, month: u32) -> Option<Decimal> {
        self.rates.get(&(year, month)).copied()
    }

    pub fn rate_for(&self, year: i32, month: u32) -> Decimal {
        self.stored_rate(year, month).unwrap_or(self.default_rate)
    }

    pub fn bdt_to_usd(&self, amount: Decimal, year: i32, month: u32) -> Decimal {
        amount / self.rate_for(year, month)
    }

    pub fn usd_to_bdt(&self, amount: Decimal, year: i32, month: u32) -> Decimal {
        amount * self.rate_for(year, month)
    }
}
