//! Dashboard aggregation engine.
//!
//! Turns the raw rows of one user and year into period totals, a monthly
//! trend, per-website P&L with shared-cost allocation, and category
//! breakdowns. The calculation is pure; `DashboardService` only adds the
//! data-access step in front of it.

mod chart_slices;
mod dashboard_calculator;
mod dashboard_model;
mod dashboard_service;
mod dashboard_traits;

pub use chart_slices::*;
pub use dashboard_calculator::*;
pub use dashboard_model::*;
pub use dashboard_service::*;
pub use dashboard_traits::*;
