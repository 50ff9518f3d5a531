use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::{CashflowCategory, CashflowEntry, CashflowKind, CashflowSummary, MonthlyCashflow};
use crate::constants::UNKNOWN_LABEL;
use crate::period::{month_name, Period};
use crate::utils::percent_of;

/// Summarizes the ledger over a period.
///
/// The monthly series has one row per month of the period, zero-filled.
pub fn calculate_cashflow_summary(entries: &[CashflowEntry], period: &Period) -> CashflowSummary {
    let in_range: Vec<&CashflowEntry> = entries
        .iter()
        .filter(|e| period.contains_date(e.year, e.month))
        .collect();

    let sum_where = |kind: CashflowKind, month: Option<u32>| -> Decimal {
        in_range
            .iter()
            .filter(|e| e.kind == kind && month.map_or(true, |m| e.month == m))
            .map(|e| e.amount)
            .sum()
    };

    let total_income = sum_where(CashflowKind::Income, None);
    let total_expense = sum_where(CashflowKind::Expense, None);
    let net_cashflow = total_income - total_expense;

    let monthly = period
        .months()
        .map(|month| {
            let income = sum_where(CashflowKind::Income, Some(month));
            let expense = sum_where(CashflowKind::Expense, Some(month));
            MonthlyCashflow {
                month,
                month_name: month_name(month).to_string(),
                income,
                expense,
                net: income - expense,
            }
        })
        .collect();

    let mut by_category: HashMap<&str, Decimal> = HashMap::new();
    for entry in in_range.iter().filter(|e| e.kind == CashflowKind::Expense) {
        let category = match entry.category.trim() {
            "" => UNKNOWN_LABEL,
            name => name,
        };
        *by_category.entry(category).or_insert(Decimal::ZERO) += entry.amount;
    }
    let mut expense_by_category: Vec<CashflowCategory> = by_category
        .into_iter()
        .map(|(category, amount)| CashflowCategory {
            category: category.to_string(),
            amount,
        })
        .collect();
    expense_by_category.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.category.cmp(&b.category))
    });

    debug!(
        "Cashflow over {} entries: income {}, expense {}",
        in_range.len(),
        total_income,
        total_expense
    );

    CashflowSummary {
        total_income,
        total_expense,
        net_cashflow,
        savings_rate: percent_of(net_cashflow, total_income),
        monthly,
        expense_by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn entry(month: u32, kind: CashflowKind, category: &str, amount: Decimal) -> CashflowEntry {
        CashflowEntry {
            id: format!("{}-{}-{}", month, category, amount),
            year: 2024,
            month,
            kind,
            category: category.to_string(),
            amount,
            description: None,
        }
    }

    fn ledger() -> Vec<CashflowEntry> {
        vec![
            entry(1, CashflowKind::Income, "Salary", dec!(80000)),
            entry(1, CashflowKind::Expense, "Rent", dec!(25000)),
            entry(1, CashflowKind::Expense, "Food", dec!(12000)),
            entry(2, CashflowKind::Income, "Salary", dec!(80000)),
            entry(2, CashflowKind::Expense, "Food", dec!(14000)),
            entry(2, CashflowKind::Expense, "", dec!(500)),
            entry(5, CashflowKind::Expense, "Travel", dec!(60000)),
        ]
    }

    #[test]
    fn test_totals_and_savings_rate() {
        let period = Period::new(2024, 1, 3).unwrap();
        let summary = calculate_cashflow_summary(&ledger(), &period);

        assert_eq!(summary.total_income, dec!(160000));
        assert_eq!(summary.total_expense, dec!(51500));
        assert_eq!(summary.net_cashflow, dec!(108500));
        assert_eq!(summary.savings_rate, dec!(67.8125));
    }

    #[test]
    fn test_monthly_series_is_zero_filled() {
        let period = Period::new(2024, 1, 3).unwrap();
        let summary = calculate_cashflow_summary(&ledger(), &period);

        assert_eq!(summary.monthly.len(), 3);
        assert_eq!(summary.monthly[0].net, dec!(43000));
        assert_eq!(summary.monthly[1].expense, dec!(14500));
        assert_eq!(summary.monthly[2].month_name, "Mar");
        assert!(summary.monthly[2].income.is_zero() && summary.monthly[2].expense.is_zero());
    }

    #[test]
    fn test_expense_categories_sorted_descending() {
        let summary = calculate_cashflow_summary(&ledger(), &Period::full_year(2024));

        let categories: Vec<(&str, Decimal)> = summary
            .expense_by_category
            .iter()
            .map(|c| (c.category.as_str(), c.amount))
            .collect();
        assert_eq!(
            categories,
            vec![
                ("Travel", dec!(60000)),
                ("Food", dec!(26000)),
                ("Rent", dec!(25000)),
                ("Unknown", dec!(500)),
            ]
        );
    }

    #[test]
    fn test_no_income_means_zero_savings_rate() {
        let entries = vec![entry(1, CashflowKind::Expense, "Rent", dec!(100))];
        let summary = calculate_cashflow_summary(&entries, &Period::single_month(2024, 1).unwrap());

        assert_eq!(summary.net_cashflow, dec!(-100));
        assert_eq!(summary.savings_rate, Decimal::ZERO);
    }

    #[test]
    fn test_other_years_are_excluded() {
        let mut entries = ledger();
        for e in &mut entries {
            e.year = 2023;
        }
        let summary = calculate_cashflow_summary(&entries, &Period::full_year(2024));
        assert_eq!(summary.total_income, Decimal::ZERO);
        assert_eq!(summary.total_expense, Decimal::ZERO);
        assert!(summary.expense_by_category.is_empty());
        assert_eq!(summary.monthly.len(), 12);
    }
}
