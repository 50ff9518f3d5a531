use crate::errors::Result;
use crate::expenses::Expense;
use crate::fx::ExchangeRate;
use crate::investments::Dividend;
use crate::period::Period;
use crate::websites::{Category, MonthlyEntry, Website};

use super::{DashboardStats, WebsiteStats};

/// Trait defining the contract for reading dashboard rows.
///
/// Every read is scoped to one user and one year; implementations must not
/// return rows owned by other users.
pub trait DashboardRepositoryTrait: Send + Sync {
    fn get_websites(&self, user_id: &str, year: i32) -> Result<Vec<Website>>;
    fn get_categories(&self, user_id: &str, year: i32) -> Result<Vec<Category>>;
    fn get_entries(&self, user_id: &str, year: i32) -> Result<Vec<MonthlyEntry>>;
    fn get_exchange_rates(&self, user_id: &str, year: i32) -> Result<Vec<ExchangeRate>>;
    fn get_expenses(&self, user_id: &str, year: i32) -> Result<Vec<Expense>>;
    fn get_dividends(&self, user_id: &str, year: i32) -> Result<Vec<Dividend>>;
}

/// Trait defining the contract for dashboard service operations.
pub trait DashboardServiceTrait: Send + Sync {
    fn get_dashboard_stats(&self, user_id: &str, period: &Period) -> Result<DashboardStats>;
    fn get_website_stats(
        &self,
        user_id: &str,
        website_id: &str,
        period: &Period,
    ) -> Result<WebsiteStats>;
}
