//! Tunables consumed by the engine and its helpers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXCHANGE_RATE, DISPLAY_DECIMAL_PRECISION, INSIGHTS_CACHE_TTL_HOURS,
    MAX_VISIBLE_SLICES, SMALL_SLICE_THRESHOLD_PERCENT,
};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineSettings {
    /// BDT per USD used when a month has no stored rate (default: 122)
    pub default_exchange_rate: Decimal,

    /// Share of the total (percent) below which a chart slice goes to "Other" (default: 2)
    pub small_slice_threshold_percent: Decimal,

    /// Named chart slices kept before folding the rest into "Other" (default: 8)
    pub max_visible_slices: usize,

    /// Hours an AI insight stays fresh in the cache (default: 24)
    pub insights_cache_ttl_hours: i64,

    /// Fraction digits used when rounding for display (default: 2)
    pub display_decimal_precision: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            default_exchange_rate: DEFAULT_EXCHANGE_RATE,
            small_slice_threshold_percent: SMALL_SLICE_THRESHOLD_PERCENT,
            max_visible_slices: MAX_VISIBLE_SLICES,
            insights_cache_ttl_hours: INSIGHTS_CACHE_TTL_HOURS,
            display_decimal_precision: DISPLAY_DECIMAL_PRECISION,
        }
    }
}

impl EngineSettings {
    pub fn validate(&self) -> Result<()> {
        if self.default_exchange_rate <= Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "default_exchange_rate must be positive, got {}",
                self.default_exchange_rate
            )));
        }
        if self.small_slice_threshold_percent < Decimal::ZERO {
            return Err(Error::InvalidConfigValue(format!(
                "small_slice_threshold_percent must not be negative, got {}",
                self.small_slice_threshold_percent
            )));
        }
        if self.max_visible_slices == 0 {
            return Err(Error::InvalidConfigValue(
                "max_visible_slices must be at least 1".to_string(),
            ));
        }
        if self.insights_cache_ttl_hours <= 0 {
            return Err(Error::InvalidConfigValue(format!(
                "insights_cache_ttl_hours must be positive, got {}",
                self.insights_cache_ttl_hours
            )));
        }
        Ok(())
    }
}
