//! Pure aggregation of websites, entries, expenses and dividends into
//! dashboard metrics.
//!
//! Amortization differs between the two views on purpose: period totals
//! multiply each yearly (and website-scoped) cost share by the number of
//! months in the period, while every monthly trend row carries exactly one
//! `/12` share no matter how long the period is.

use std::collections::{HashMap, HashSet};

use log::{debug, warn};
use rust_decimal::Decimal;

use super::{
    CategoryBreakdown, DashboardSnapshot, DashboardStats, DashboardTotals,
    GlobalExpenseAllocation, MonthlyTrend, WebsiteRevenue, WebsiteStats,
};
use crate::expenses::Expense;
use crate::fx::MonthlyRateTable;
use crate::period::{month_name, Period};
use crate::settings::EngineSettings;
use crate::utils::safe_div;
use crate::websites::{Category, CategoryType, MonthlyEntry};

/// Computes every dashboard aggregate for the period.
///
/// # Arguments
///
/// * `snapshot` - Rows loaded for one user and year.
/// * `period` - Inclusive month window to aggregate.
/// * `settings` - Supplies the fallback exchange rate.
pub fn calculate_dashboard_stats(
    snapshot: &DashboardSnapshot,
    period: &Period,
    settings: &EngineSettings,
) -> DashboardStats {
    DashboardCalculator::new(snapshot, *period, settings).calculate()
}

/// Computes the drill-down view of one website, `None` if it is unknown.
pub fn calculate_website_stats(
    snapshot: &DashboardSnapshot,
    website_id: &str,
    period: &Period,
    settings: &EngineSettings,
) -> Option<WebsiteStats> {
    DashboardCalculator::new(snapshot, *period, settings).website_stats(website_id)
}

/// Borrowing view over a snapshot for a single calculation pass.
pub struct DashboardCalculator<'a> {
    snapshot: &'a DashboardSnapshot,
    period: Period,
    rates: MonthlyRateTable,
    categories: HashMap<&'a str, &'a Category>,
}

impl<'a> DashboardCalculator<'a> {
    pub fn new(snapshot: &'a DashboardSnapshot, period: Period, settings: &EngineSettings) -> Self {
        let categories: HashMap<&str, &Category> = snapshot
            .categories
            .iter()
            .map(|c| (c.id.as_str(), c))
            .collect();

        let orphaned = snapshot
            .entries
            .iter()
            .filter(|e| !categories.contains_key(e.category_id.as_str()))
            .count();
        if orphaned > 0 {
            warn!(
                "{} entries reference unknown categories and will be ignored",
                orphaned
            );
        }

        Self {
            snapshot,
            period,
            rates: MonthlyRateTable::with_default(
                &snapshot.exchange_rates,
                settings.default_exchange_rate,
            ),
            categories,
        }
    }

    pub fn calculate(&self) -> DashboardStats {
        let stats = DashboardStats {
            totals: self.totals(),
            monthly_trend: self.monthly_trend(),
            website_revenue: self.website_revenue(),
            revenue_by_category: self.category_breakdown(CategoryType::Revenue),
            expense_by_category: self.category_breakdown(CategoryType::Expense),
        };
        debug!(
            "Dashboard stats for {}-{:02}..{:02}: revenue {}, expense {}, {} websites",
            self.period.year(),
            self.period.start_month(),
            self.period.end_month(),
            stats.totals.revenue,
            stats.totals.expense,
            stats.website_revenue.len()
        );
        stats
    }

    /// Period revenue, expense, profit and margin.
    pub fn totals(&self) -> DashboardTotals {
        let months = self.period.months_in_range_decimal();

        let revenue = self.entry_sum(CategoryType::Revenue, |_| true)
            + self.dividends_usd(|month| self.period.contains(month));

        let expense = self.entry_sum(CategoryType::Expense, |_| true)
            + self.global_monthly_sum(|e| self.period.contains(e.month))
            + self.global_yearly_sum(|_| true, |e| e.amortized(months))
            + self.website_scoped_sum(|_| true, |e| e.amortized(months));

        DashboardTotals::from_revenue_and_expense(revenue, expense)
    }

    /// One row per month of the period in ascending order.
    pub fn monthly_trend(&self) -> Vec<MonthlyTrend> {
        let flat_monthly_share = self.global_yearly_sum(|_| true, Expense::monthly_share)
            + self.website_scoped_sum(|_| true, Expense::monthly_share);

        self.period
            .months()
            .map(|month| {
                let revenue = self.entry_sum(CategoryType::Revenue, |e| e.month == month)
                    + self.dividends_usd(|m| m == month);
                let expense = self.entry_sum(CategoryType::Expense, |e| e.month == month)
                    + self.global_monthly_sum(|e| e.month == month)
                    + flat_monthly_share;
                MonthlyTrend {
                    month,
                    month_name: month_name(month).to_string(),
                    revenue,
                    expense,
                    profit: revenue - expense,
                }
            })
            .collect()
    }

    /// Split of global expenses flagged `is_allocated` across websites.
    pub fn global_allocation(&self) -> GlobalExpenseAllocation {
        let months = self.period.months_in_range_decimal();
        let total_allocatable = self
            .global_monthly_sum(|e| e.is_allocated && self.period.contains(e.month))
            + self.global_yearly_sum(|e| e.is_allocated, |e| e.amortized(months));

        // Every entry counts here, not only those inside the period.
        let earning_ids: HashSet<&str> = self
            .snapshot
            .entries
            .iter()
            .filter(|e| {
                e.amount > Decimal::ZERO
                    && self.category_type(e) == Some(CategoryType::Revenue)
            })
            .map(|e| e.website_id.as_str())
            .collect();
        let revenue_generating_websites = self
            .snapshot
            .websites
            .iter()
            .filter(|w| earning_ids.contains(w.id.as_str()))
            .count();

        let per_website = safe_div(
            total_allocatable,
            Decimal::from(revenue_generating_websites.max(1)),
        );

        GlobalExpenseAllocation {
            total_allocatable,
            revenue_generating_websites,
            per_website,
        }
    }

    /// Per-website P&L sorted by revenue, highest first.
    pub fn website_revenue(&self) -> Vec<WebsiteRevenue> {
        let allocation = self.global_allocation();
        let mut rows: Vec<WebsiteRevenue> = self
            .snapshot
            .websites
            .iter()
            .map(|website| {
                let (revenue, expense) = self.website_pnl(&website.id, &allocation);
                WebsiteRevenue {
                    website_id: website.id.clone(),
                    name: website.name.clone(),
                    revenue,
                    expense,
                    profit: revenue - expense,
                }
            })
            .collect();

        rows.sort_by(|a, b| b.revenue.cmp(&a.revenue));
        rows
    }

    /// In-range entries of one category type grouped by category, largest first.
    pub fn category_breakdown(&self, category_type: CategoryType) -> Vec<CategoryBreakdown> {
        self.breakdown_where(category_type, |_| true)
    }

    pub fn website_stats(&self, website_id: &str) -> Option<WebsiteStats> {
        let website = self
            .snapshot
            .websites
            .iter()
            .find(|w| w.id == website_id)?;

        let allocation = self.global_allocation();
        let (revenue, expense) = self.website_pnl(website_id, &allocation);
        let allocated_global_expense = if revenue > Decimal::ZERO {
            allocation.per_website
        } else {
            Decimal::ZERO
        };

        let own_monthly_share = self.website_scoped_sum(
            |e| e.belongs_to(website_id),
            Expense::monthly_share,
        );
        let monthly_trend = self
            .period
            .months()
            .map(|month| {
                let revenue = self.entry_sum(CategoryType::Revenue, |e| {
                    e.website_id == website_id && e.month == month
                });
                let expense = self.entry_sum(CategoryType::Expense, |e| {
                    e.website_id == website_id && e.month == month
                }) + own_monthly_share;
                MonthlyTrend {
                    month,
                    month_name: month_name(month).to_string(),
                    revenue,
                    expense,
                    profit: revenue - expense,
                }
            })
            .collect();

        Some(WebsiteStats {
            website_id: website.id.clone(),
            name: website.name.clone(),
            totals: DashboardTotals::from_revenue_and_expense(revenue, expense),
            allocated_global_expense,
            monthly_trend,
            revenue_by_category: self
                .breakdown_where(CategoryType::Revenue, |e| e.website_id == website_id),
            expense_by_category: self
                .breakdown_where(CategoryType::Expense, |e| e.website_id == website_id),
        })
    }

    /// (revenue, expense) of a website including its allocated share.
    fn website_pnl(
        &self,
        website_id: &str,
        allocation: &GlobalExpenseAllocation,
    ) -> (Decimal, Decimal) {
        let months = self.period.months_in_range_decimal();
        let revenue = self.entry_sum(CategoryType::Revenue, |e| e.website_id == website_id);
        let mut expense = self.entry_sum(CategoryType::Expense, |e| e.website_id == website_id)
            + self.website_scoped_sum(|e| e.belongs_to(website_id), |e| e.amortized(months));

        // Only websites that actually earned in the period carry shared costs.
        if revenue > Decimal::ZERO {
            expense += allocation.per_website;
        }
        (revenue, expense)
    }

    fn category_type(&self, entry: &MonthlyEntry) -> Option<CategoryType> {
        self.categories
            .get(entry.category_id.as_str())
            .map(|c| c.category_type)
    }

    fn in_range_entries(&self) -> impl Iterator<Item = &'a MonthlyEntry> + '_ {
        self.snapshot
            .entries
            .iter()
            .filter(move |e| self.period.contains_date(e.year, e.month))
    }

    /// Sum of in-range entries of one category type matching `filter`.
    fn entry_sum<F>(&self, category_type: CategoryType, filter: F) -> Decimal
    where
        F: Fn(&MonthlyEntry) -> bool,
    {
        self.in_range_entries()
            .filter(|e| self.category_type(e) == Some(category_type) && filter(*e))
            .map(|e| e.amount)
            .sum()
    }

    /// Dividends of the period year whose month matches, converted to USD
    /// with that month's rate.
    fn dividends_usd<F>(&self, month_filter: F) -> Decimal
    where
        F: Fn(u32) -> bool,
    {
        self.snapshot
            .dividends
            .iter()
            .filter(|d| d.year == self.period.year() && month_filter(d.month))
            .map(|d| self.rates.bdt_to_usd(d.amount, d.year, d.month))
            .sum()
    }

    fn global_monthly_sum<F>(&self, filter: F) -> Decimal
    where
        F: Fn(&Expense) -> bool,
    {
        self.snapshot
            .expenses
            .iter()
            .filter(|e| e.is_global() && e.is_monthly() && filter(*e))
            .map(|e| e.cost_usd)
            .sum()
    }

    fn global_yearly_sum<F, V>(&self, filter: F, value: V) -> Decimal
    where
        F: Fn(&Expense) -> bool,
        V: Fn(&Expense) -> Decimal,
    {
        self.snapshot
            .expenses
            .iter()
            .filter(|e| e.is_global() && e.is_yearly() && filter(*e))
            .map(value)
            .sum()
    }

    /// Website-linked expenses of any recurrence.
    fn website_scoped_sum<F, V>(&self, filter: F, value: V) -> Decimal
    where
        F: Fn(&Expense) -> bool,
        V: Fn(&Expense) -> Decimal,
    {
        self.snapshot
            .expenses
            .iter()
            .filter(|e| !e.is_global() && filter(*e))
            .map(value)
            .sum()
    }

    fn breakdown_where<F>(&self, category_type: CategoryType, filter: F) -> Vec<CategoryBreakdown>
    where
        F: Fn(&MonthlyEntry) -> bool,
    {
        let mut amounts: HashMap<&str, Decimal> = HashMap::new();
        for entry in self
            .in_range_entries()
            .filter(|e| self.category_type(e) == Some(category_type) && filter(*e))
        {
            *amounts
                .entry(entry.category_id.as_str())
                .or_insert(Decimal::ZERO) += entry.amount;
        }

        let mut breakdown: Vec<CategoryBreakdown> = amounts
            .into_iter()
            .filter_map(|(category_id, amount)| {
                self.categories.get(category_id).map(|c| CategoryBreakdown {
                    category_id: category_id.to_string(),
                    name: c.display_name().to_string(),
                    amount,
                })
            })
            .collect();

        breakdown.sort_by(|a, b| {
            b.amount
                .cmp(&a.amount)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.category_id.cmp(&b.category_id))
        });
        breakdown
    }
}
