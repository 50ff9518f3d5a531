//! Input snapshot and derived records of the dashboard engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::expenses::Expense;
use crate::fx::ExchangeRate;
use crate::investments::Dividend;
use crate::websites::{Category, MonthlyEntry, Website};

/// Everything the engine reads for one user and year.
///
/// The data layer produces this per render; the engine only borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSnapshot {
    pub websites: Vec<Website>,
    pub categories: Vec<Category>,
    pub entries: Vec<MonthlyEntry>,
    pub exchange_rates: Vec<ExchangeRate>,
    pub expenses: Vec<Expense>,
    pub dividends: Vec<Dividend>,
}

/// Period KPIs in USD.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub revenue: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
    /// profit / revenue * 100, 0 unless revenue is positive
    pub margin: Decimal,
}

impl DashboardTotals {
    pub fn from_revenue_and_expense(revenue: Decimal, expense: Decimal) -> Self {
        let profit = revenue - expense;
        let margin = if revenue > Decimal::ZERO {
            profit / revenue * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        Self {
            revenue,
            expense,
            profit,
            margin,
        }
    }
}

/// One month of the trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: u32,
    pub month_name: String,
    pub revenue: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}

/// P&L of one website over the period, shared costs included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteRevenue {
    pub website_id: String,
    pub name: String,
    pub revenue: Decimal,
    pub expense: Decimal,
    pub profit: Decimal,
}

/// Summed entry amounts for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category_id: String,
    pub name: String,
    pub amount: Decimal,
}

/// A chart-ready slice. The synthetic "Other" slice has no category id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSlice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    pub name: String,
    pub amount: Decimal,
    /// Share of the breakdown total (0-100)
    pub percentage: Decimal,
}

impl ChartSlice {
    pub fn is_other(&self) -> bool {
        self.category_id.is_none()
    }
}

/// How global expenses flagged for allocation were split across websites.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalExpenseAllocation {
    /// Allocated global monthly expenses in range + allocated global yearly expenses amortized
    pub total_allocatable: Decimal,
    /// Websites with at least one positive revenue entry anywhere in the snapshot
    pub revenue_generating_websites: usize,
    /// Equal share added to each website that has revenue in the period
    pub per_website: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub totals: DashboardTotals,
    pub monthly_trend: Vec<MonthlyTrend>,
    pub website_revenue: Vec<WebsiteRevenue>,
    pub revenue_by_category: Vec<CategoryBreakdown>,
    pub expense_by_category: Vec<CategoryBreakdown>,
}

/// Drill-down view of a single website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteStats {
    pub website_id: String,
    pub name: String,
    pub totals: DashboardTotals,
    /// Portion of `totals.expense` coming from shared global expenses
    pub allocated_global_expense: Decimal,
    pub monthly_trend: Vec<MonthlyTrend>,
    pub revenue_by_category: Vec<CategoryBreakdown>,
    pub expense_by_category: Vec<CategoryBreakdown>,
}
