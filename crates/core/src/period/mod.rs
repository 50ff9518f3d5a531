//! Reporting period (year + inclusive month window).

mod period_model;

pub use period_model::{month_name, Period};
