//! FX (Foreign Exchange) module - monthly BDT/USD rates and conversion.

mod fx_model;
mod rate_table;

pub use fx_model::{Currency, ExchangeRate};
pub use rate_table::MonthlyRateTable;
