//! Property-based integration tests for the dashboard engine.
//!
//! These tests check laws that must hold for every valid snapshot and
//! period, using the `proptest` crate for random test case generation.
//! Amounts are whole numbers so sums stay exact.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sitefolio_core::dashboard::{calculate_dashboard_stats, DashboardCalculator, DashboardSnapshot};
use sitefolio_core::expenses::{Expense, Recurrence};
use sitefolio_core::fx::ExchangeRate;
use sitefolio_core::investments::Dividend;
use sitefolio_core::period::Period;
use sitefolio_core::settings::EngineSettings;
use sitefolio_core::websites::{Category, CategoryType, MonthlyEntry, Website};

const YEAR: i32 = 2024;
const WEBSITE_IDS: [&str; 4] = ["w0", "w1", "w2", "w3"];

// =============================================================================
// Generators
// =============================================================================

/// Generates a valid period within one year.
fn arb_period() -> impl Strategy<Value = Period> {
    (1u32..=12)
        .prop_flat_map(|start| (Just(start), start..=12))
        .prop_map(|(start, end)| Period::new(YEAR, start, end).unwrap())
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(Decimal::from)
}

fn arb_website_id() -> impl Strategy<Value = String> {
    prop::sample::select(WEBSITE_IDS.to_vec()).prop_map(str::to_string)
}

/// Entries spread over two years, including ones with an unknown category.
fn arb_entry() -> impl Strategy<Value = MonthlyEntry> {
    (
        arb_website_id(),
        prop::sample::select(vec!["ads", "affiliate", "writers", "missing"]),
        YEAR - 1..=YEAR,
        1u32..=12,
        arb_amount(),
    )
        .prop_map(|(website_id, category_id, year, month, amount)| MonthlyEntry {
            website_id,
            category_id: category_id.to_string(),
            year,
            month,
            amount,
        })
}

fn arb_expense() -> impl Strategy<Value = Expense> {
    (
        "[a-z]{4,8}",
        arb_amount(),
        prop_oneof![Just(Recurrence::Monthly), Just(Recurrence::Yearly)],
        1u32..=12,
        proptest::option::of(arb_website_id()),
        any::<bool>(),
    )
        .prop_map(|(id, cost_usd, recurrence, month, website_id, is_allocated)| Expense {
            name: id.to_uppercase(),
            id,
            cost_usd,
            recurrence,
            month,
            due_month: None,
            website_id,
            is_allocated,
        })
}

fn arb_dividend() -> impl Strategy<Value = Dividend> {
    (YEAR - 1..=YEAR, 1u32..=12, arb_amount()).prop_map(|(year, month, amount)| Dividend {
        investment_id: "inv".to_string(),
        year,
        month,
        amount,
    })
}

/// Rates include zero, which must fall back to the default.
fn arb_rate() -> impl Strategy<Value = ExchangeRate> {
    (1u32..=12, 0i64..200).prop_map(|(month, rate)| ExchangeRate::new(YEAR, month, Decimal::from(rate)))
}

fn categories() -> Vec<Category> {
    [
        ("ads", CategoryType::Revenue),
        ("affiliate", CategoryType::Revenue),
        ("writers", CategoryType::Expense),
    ]
    .into_iter()
    .map(|(id, category_type)| Category {
        id: id.to_string(),
        name: id.to_uppercase(),
        website_id: None,
        category_type,
        year: YEAR,
    })
    .collect()
}

fn websites() -> Vec<Website> {
    WEBSITE_IDS
        .iter()
        .map(|id| Website {
            id: id.to_string(),
            name: id.to_uppercase(),
            year: YEAR,
        })
        .collect()
}

fn arb_snapshot() -> impl Strategy<Value = DashboardSnapshot> {
    (
        proptest::collection::vec(arb_entry(), 0..40),
        proptest::collection::vec(arb_expense(), 0..8),
        proptest::collection::vec(arb_dividend(), 0..6),
        proptest::collection::vec(arb_rate(), 0..6),
    )
        .prop_map(|(entries, expenses, dividends, exchange_rates)| DashboardSnapshot {
            websites: websites(),
            categories: categories(),
            entries,
            exchange_rates,
            expenses,
            dividends,
        })
}

fn settings() -> EngineSettings {
    EngineSettings::default()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Profit is revenue minus expense, and margin is only reported when
    /// revenue is positive.
    #[test]
    fn prop_profit_and_margin_law(snapshot in arb_snapshot(), period in arb_period()) {
        let stats = calculate_dashboard_stats(&snapshot, &period, &settings());
        let totals = stats.totals;

        prop_assert_eq!(totals.profit, totals.revenue - totals.expense);
        if totals.revenue > Decimal::ZERO {
            prop_assert_eq!(totals.margin, totals.profit / totals.revenue * dec!(100));
        } else {
            prop_assert_eq!(totals.margin, Decimal::ZERO);
        }

        for row in &stats.website_revenue {
            prop_assert_eq!(row.profit, row.revenue - row.expense);
        }
        for trend in &stats.monthly_trend {
            prop_assert_eq!(trend.profit, trend.revenue - trend.expense);
        }
    }

    /// The trend has one row per month of the period, strictly ascending.
    #[test]
    fn prop_trend_covers_period(snapshot in arb_snapshot(), period in arb_period()) {
        let stats = calculate_dashboard_stats(&snapshot, &period, &settings());
        let months: Vec<u32> = stats.monthly_trend.iter().map(|t| t.month).collect();

        prop_assert_eq!(months.len() as u32, period.end_month() - period.start_month() + 1);
        prop_assert_eq!(months.first().copied(), Some(period.start_month()));
        prop_assert!(months.windows(2).all(|w| w[1] == w[0] + 1));
        prop_assert!(months.iter().all(|m| period.contains(*m)));
    }

    /// Value-equal inputs give value-equal outputs.
    #[test]
    fn prop_idempotent(snapshot in arb_snapshot(), period in arb_period()) {
        let copy = snapshot.clone();
        let first = calculate_dashboard_stats(&snapshot, &period, &settings());
        let second = calculate_dashboard_stats(&copy, &period, &settings());
        prop_assert_eq!(first, second);
    }

    /// One global yearly expense `C` costs `C/12*m` over the period and `C/12`
    /// in every trend row.
    #[test]
    fn prop_amortization_law(
        cost in arb_amount(),
        due_month in 1u32..=12,
        is_allocated in any::<bool>(),
        period in arb_period(),
    ) {
        let snapshot = DashboardSnapshot {
            expenses: vec![Expense {
                id: "tool".to_string(),
                name: "Tool".to_string(),
                cost_usd: cost,
                recurrence: Recurrence::Yearly,
                month: due_month,
                due_month: Some(due_month),
                website_id: None,
                is_allocated,
            }],
            ..Default::default()
        };
        let stats = calculate_dashboard_stats(&snapshot, &period, &settings());
        let share = cost / dec!(12);

        prop_assert_eq!(stats.totals.expense, share * Decimal::from(period.months_in_range()));
        for trend in &stats.monthly_trend {
            prop_assert_eq!(trend.expense, share);
        }
    }

    /// Each website with revenue in the period carries `G/N` of the shared
    /// costs; every other website carries none.
    #[test]
    fn prop_allocation_law(
        entries in proptest::collection::vec(arb_entry(), 0..40),
        expenses in proptest::collection::vec(arb_expense(), 0..8),
        period in arb_period(),
    ) {
        // Only shared costs, so a website's expense is exactly its share.
        let entries: Vec<MonthlyEntry> = entries
            .into_iter()
            .filter(|e| e.category_id != "writers")
            .collect();
        let expenses: Vec<Expense> = expenses
            .into_iter()
            .map(|e| Expense { website_id: None, ..e })
            .collect();
        let snapshot = DashboardSnapshot {
            websites: websites(),
            categories: categories(),
            entries,
            expenses,
            ..Default::default()
        };

        let months = Decimal::from(period.months_in_range());
        let monthly: Decimal = snapshot
            .expenses
            .iter()
            .filter(|e| e.is_allocated && e.recurrence == Recurrence::Monthly && period.contains(e.month))
            .map(|e| e.cost_usd)
            .sum();
        let yearly: Decimal = snapshot
            .expenses
            .iter()
            .filter(|e| e.is_allocated && e.recurrence == Recurrence::Yearly)
            .map(|e| e.cost_usd / dec!(12) * months)
            .sum();
        let total_allocatable = monthly + yearly;
        let generating = WEBSITE_IDS
            .iter()
            .filter(|id| {
                snapshot.entries.iter().any(|e| {
                    e.website_id == **id
                        && e.amount > Decimal::ZERO
                        && (e.category_id == "ads" || e.category_id == "affiliate")
                })
            })
            .count();
        let per_website = total_allocatable / Decimal::from(generating.max(1));

        let calculator = DashboardCalculator::new(&snapshot, period, &settings());
        let allocation = calculator.global_allocation();
        prop_assert_eq!(allocation.total_allocatable, total_allocatable);
        prop_assert_eq!(allocation.revenue_generating_websites, generating);
        prop_assert_eq!(allocation.per_website, per_website);

        for row in calculator.website_revenue() {
            if row.revenue > Decimal::ZERO {
                prop_assert_eq!(row.expense, per_website);
            } else {
                prop_assert_eq!(row.expense, Decimal::ZERO);
            }
        }
    }

    /// A BDT dividend converts with its month's rate, or 122 without a usable one.
    #[test]
    fn prop_dividend_conversion(
        amount in arb_amount(),
        month in 1u32..=12,
        rate in proptest::option::of(0i64..200),
    ) {
        let snapshot = DashboardSnapshot {
            dividends: vec![Dividend {
                investment_id: "inv".to_string(),
                year: YEAR,
                month,
                amount,
            }],
            exchange_rates: rate
                .map(|r| vec![ExchangeRate::new(YEAR, month, Decimal::from(r))])
                .unwrap_or_default(),
            ..Default::default()
        };
        let stats = calculate_dashboard_stats(&snapshot, &Period::full_year(YEAR), &settings());

        let divisor = match rate {
            Some(r) if r > 0 => Decimal::from(r),
            _ => dec!(122),
        };
        prop_assert_eq!(stats.totals.revenue, amount / divisor);
    }
}
