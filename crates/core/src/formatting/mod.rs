//! Display formatting for currency amounts and percentages.

mod currency_format;

pub use currency_format::*;
