//! Investments and the dividends they pay.

mod investments_calculator;
mod investments_model;

pub use investments_calculator::calculate_investment_summary;
pub use investments_model::*;
