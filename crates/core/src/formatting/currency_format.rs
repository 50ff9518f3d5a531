//! Locale-aware rendering of money and percentages.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::DISPLAY_DECIMAL_PRECISION;

/// Locales that group digits as 12,34,56,789 and compact with K/L/Cr.
const SOUTH_ASIAN_LOCALES: [&str; 3] = ["en-IN", "bn-BD", "hi-IN"];

const COMPACT_DECIMAL_PRECISION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitGrouping {
    /// 1,234,567
    Thousands,
    /// 12,34,567
    Lakh,
}

impl DigitGrouping {
    /// Compact suffixes with their divisors, largest first.
    fn compact_units(&self) -> &'static [(Decimal, &'static str)] {
        static THOUSANDS: [(Decimal, &str); 3] = [
            (dec!(1000000000), "B"),
            (dec!(1000000), "M"),
            (dec!(1000), "K"),
        ];
        static LAKH: [(Decimal, &str); 3] = [
            (dec!(10000000), "Cr"),
            (dec!(100000), "L"),
            (dec!(1000), "K"),
        ];
        match self {
            DigitGrouping::Thousands => &THOUSANDS,
            DigitGrouping::Lakh => &LAKH,
        }
    }
}

/// How to render an amount of one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyFormat {
    pub locale: String,
    pub symbol: String,
    /// Absolute amounts at or above this are shown compact (`$1.2M`)
    #[serde(default)]
    pub compact_threshold: Option<Decimal>,
}

impl CurrencyFormat {
    pub fn new(locale: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            symbol: symbol.into(),
            compact_threshold: None,
        }
    }

    pub fn usd() -> Self {
        Self::new("en-US", "$")
    }

    pub fn bdt() -> Self {
        Self::new("en-IN", "৳")
    }

    pub fn with_compact_threshold(mut self, threshold: Decimal) -> Self {
        self.compact_threshold = Some(threshold);
        self
    }

    pub fn grouping(&self) -> DigitGrouping {
        if SOUTH_ASIAN_LOCALES
            .iter()
            .any(|l| l.eq_ignore_ascii_case(&self.locale))
        {
            DigitGrouping::Lakh
        } else {
            DigitGrouping::Thousands
        }
    }

    /// Full or compact form depending on `compact_threshold`.
    pub fn format(&self, amount: Decimal) -> String {
        match self.compact_threshold {
            Some(threshold) if amount.abs() >= threshold => self.format_compact(amount),
            _ => self.format_full(amount),
        }
    }

    /// Grouped digits with two fraction digits, e.g. `৳12,34,567.80`.
    pub fn format_full(&self, amount: Decimal) -> String {
        let mut rounded = amount
            .abs()
            .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_DECIMAL_PRECISION);

        let text = rounded.to_string();
        let (int_part, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let mut body = group_digits(int_part, self.grouping());
        if !fraction.is_empty() {
            body.push('.');
            body.push_str(fraction);
        }
        self.signed(amount.is_sign_negative() && !rounded.is_zero(), &body)
    }

    /// Short form with one fraction digit, e.g. `৳1.5L` or `$2M`.
    pub fn format_compact(&self, amount: Decimal) -> String {
        let abs = amount.abs();
        let unit = self
            .grouping()
            .compact_units()
            .iter()
            .find(|(divisor, _)| abs >= *divisor);

        let Some((divisor, suffix)) = unit else {
            return self.format_full(amount);
        };

        let scaled = (abs / divisor)
            .round_dp_with_strategy(COMPACT_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
            .normalize();
        let body = format!("{}{}", scaled, suffix);
        self.signed(amount.is_sign_negative(), &body)
    }

    fn signed(&self, negative: bool, body: &str) -> String {
        if negative {
            format!("-{}{}", self.symbol, body)
        } else {
            format!("{}{}", self.symbol, body)
        }
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::usd()
    }
}

/// Formats `amount` with `format`.
pub fn format_currency(amount: Decimal, format: &CurrencyFormat) -> String {
    format.format(amount)
}

/// Rounds to `decimals` places and appends `%`.
pub fn format_percent(value: Decimal, decimals: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    if rounded.is_zero() {
        rounded = rounded.abs();
    }
    format!("{}%", rounded)
}

fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(len - 3);
    let group = match grouping {
        DigitGrouping::Thousands => 3,
        DigitGrouping::Lakh => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}
