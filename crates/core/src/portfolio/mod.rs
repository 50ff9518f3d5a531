//! Portfolio module - asset valuation, income and allocation by type.

mod portfolio_calculator;
mod portfolio_model;
mod reconciliation;

pub use portfolio_calculator::*;
pub use portfolio_model::*;
pub use reconciliation::*;
