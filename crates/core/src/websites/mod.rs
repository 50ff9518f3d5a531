//! Websites (income sources), their categories and monthly entries.

mod websites_model;

pub use websites_model::*;
