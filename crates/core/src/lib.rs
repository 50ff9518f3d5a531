//! Sitefolio Core - Domain entities, calculators, and traits.
//!
//! This crate contains the aggregation logic for Sitefolio: website P&L,
//! shared-cost allocation, portfolio and cashflow summaries, display
//! formatting, and the insights cache. It is storage-agnostic and defines
//! traits that a data layer implements.

pub mod cashflow;
pub mod constants;
pub mod dashboard;
pub mod errors;
pub mod expenses;
pub mod formatting;
pub mod fx;
pub mod insights;
pub mod investments;
pub mod period;
pub mod portfolio;
pub mod settings;
pub mod utils;
pub mod websites;

// Re-export the engine entry points
pub use dashboard::{calculate_dashboard_stats, calculate_website_stats};
pub use period::Period;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
