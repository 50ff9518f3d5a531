use std::ops::RangeInclusive;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Inclusive year + month window every aggregate is computed over.
///
/// Only constructed through [`Period::new`] and friends, so `1 <= start_month
/// <= end_month <= 12` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Period {
    year: i32,
    start_month: u32,
    end_month: u32,
}

impl Period {
    pub fn new(year: i32, start_month: u32, end_month: u32) -> Result<Self> {
        validate_month(start_month)?;
        validate_month(end_month)?;
        if start_month > end_month {
            return Err(ValidationError::InvalidPeriod(format!(
                "start month {} is after end month {}",
                start_month, end_month
            ))
            .into());
        }
        Ok(Self {
            year,
            start_month,
            end_month,
        })
    }

    pub fn full_year(year: i32) -> Self {
        Self {
            year,
            start_month: 1,
            end_month: 12,
        }
    }

    pub fn single_month(year: i32, month: u32) -> Result<Self> {
        Self::new(year, month, month)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn start_month(&self) -> u32 {
        self.start_month
    }

    pub fn end_month(&self) -> u32 {
        self.end_month
    }

    /// Months of the window in ascending order.
    pub fn months(&self) -> RangeInclusive<u32> {
        self.start_month..=self.end_month
    }

    pub fn contains(&self, month: u32) -> bool {
        self.months().contains(&month)
    }

    /// True when a (year, month) pair falls inside the window.
    pub fn contains_date(&self, year: i32, month: u32) -> bool {
        year == self.year && self.contains(month)
    }

    pub fn months_in_range(&self) -> u32 {
        self.end_month - self.start_month + 1
    }

    /// Amortization multiplier for yearly costs.
    pub fn months_in_range_decimal(&self) -> Decimal {
        Decimal::from(self.months_in_range())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawPeriod {
            year: i32,
            start_month: u32,
            end_month: u32,
        }

        let raw = RawPeriod::deserialize(deserializer)?;
        Period::new(raw.year, raw.start_month, raw.end_month).map_err(serde::de::Error::custom)
    }
}

fn validate_month(month: u32) -> Result<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMonth(month).into())
    }
}

/// Three-letter English month label; out-of-range months map to an empty string.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
        .unwrap_or("")
}
