//! Personal cashflow ledger summaries.

mod cashflow_calculator;
mod cashflow_model;

pub use cashflow_calculator::*;
pub use cashflow_model::*;
