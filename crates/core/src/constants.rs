use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// BDT per 1 USD used when a month has no stored exchange rate
pub const DEFAULT_EXCHANGE_RATE: Decimal = dec!(122);

/// Divisor for spreading a yearly cost across months
pub const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Slices below this share of the total (in percent) are folded into "Other"
pub const SMALL_SLICE_THRESHOLD_PERCENT: Decimal = dec!(2);

/// Maximum number of named slices shown before folding into "Other"
pub const MAX_VISIBLE_SLICES: usize = 8;

/// Label of the synthetic slice aggregating excluded categories
pub const OTHER_SLICE_LABEL: &str = "Other";

/// Label used when a record has no usable display name
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Lifetime of a cached AI insight
pub const INSIGHTS_CACHE_TTL_HOURS: i64 = 24;

/// Storage key prefix for cached AI insights
pub const INSIGHTS_CACHE_KEY_PREFIX: &str = "ai_insights_";
