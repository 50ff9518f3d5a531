//! Report generation behind each subcommand.

use std::sync::Arc;

use anyhow::Context;
use rust_decimal::Decimal;
use serde::Serialize;
use sitefolio_core::cashflow::calculate_cashflow_summary;
use sitefolio_core::dashboard::{
    chart_slices, ChartSlice, DashboardRepositoryTrait, DashboardService, DashboardServiceTrait,
    DashboardStats, DashboardTotals,
};
use sitefolio_core::formatting::{format_percent, CurrencyFormat};
use sitefolio_core::fx::MonthlyRateTable;
use sitefolio_core::investments::calculate_investment_summary;
use sitefolio_core::portfolio::{calculate_portfolio_stats, PortfolioStats};
use sitefolio_core::settings::EngineSettings;
use sitefolio_core::Period;

use crate::cli::Commands;
use crate::snapshot_repository::JsonSnapshotRepository;

/// Everything a report needs besides the subcommand itself.
pub struct ReportContext {
    pub repository: Arc<JsonSnapshotRepository>,
    pub user_id: String,
    pub period: Period,
    pub settings: EngineSettings,
    /// Overrides the stored rate when valuing USD assets
    pub usd_to_bdt_rate: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedTotals {
    pub revenue: String,
    pub expense: String,
    pub profit: String,
    pub margin: String,
}

impl FormattedTotals {
    fn new(totals: &DashboardTotals, settings: &EngineSettings) -> Self {
        let usd = CurrencyFormat::usd();
        Self {
            revenue: usd.format(totals.revenue),
            expense: usd.format(totals.expense),
            profit: usd.format(totals.profit),
            margin: format_percent(totals.margin, settings.display_decimal_precision),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub stats: DashboardStats,
    pub formatted_totals: FormattedTotals,
    pub revenue_chart: Vec<ChartSlice>,
    pub expense_chart: Vec<ChartSlice>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub usd_to_bdt_rate: Decimal,
    pub stats: PortfolioStats,
    pub formatted_value: String,
}

pub fn run(command: &Commands, ctx: &ReportContext) -> anyhow::Result<serde_json::Value> {
    let year = ctx.period.year();
    tracing::info!(
        "Running {:?} for {}-{:02}..{:02}",
        command,
        year,
        ctx.period.start_month(),
        ctx.period.end_month()
    );

    let report = match command {
        Commands::Dashboard => {
            let stats = dashboard_service(ctx)?.get_dashboard_stats(&ctx.user_id, &ctx.period)?;
            serde_json::to_value(DashboardReport {
                formatted_totals: FormattedTotals::new(&stats.totals, &ctx.settings),
                revenue_chart: chart_slices(&stats.revenue_by_category, &ctx.settings),
                expense_chart: chart_slices(&stats.expense_by_category, &ctx.settings),
                stats,
            })?
        }
        Commands::Website { id } => {
            let stats =
                dashboard_service(ctx)?.get_website_stats(&ctx.user_id, id, &ctx.period)?;
            serde_json::to_value(stats)?
        }
        Commands::Portfolio => {
            let rate = match ctx.usd_to_bdt_rate {
                Some(rate) => rate,
                None => {
                    let rates = ctx.repository.get_exchange_rates(&ctx.user_id, year)?;
                    MonthlyRateTable::with_default(&rates, ctx.settings.default_exchange_rate)
                        .rate_for(year, ctx.period.end_month())
                }
            };
            let stats = calculate_portfolio_stats(
                &ctx.repository.get_assets(&ctx.user_id),
                &ctx.repository.get_asset_transactions(&ctx.user_id),
                rate,
            );
            serde_json::to_value(PortfolioReport {
                usd_to_bdt_rate: rate,
                formatted_value: CurrencyFormat::bdt().format(stats.total_portfolio_value),
                stats,
            })?
        }
        Commands::Cashflow => {
            let entries = ctx.repository.get_cashflow_entries(&ctx.user_id, year);
            serde_json::to_value(calculate_cashflow_summary(&entries, &ctx.period))?
        }
        Commands::Investments => {
            let dividends = ctx.repository.get_dividends(&ctx.user_id, year)?;
            let summary = calculate_investment_summary(
                &ctx.repository.get_investments(&ctx.user_id),
                &dividends,
                &ctx.period,
            );
            serde_json::to_value(summary)?
        }
    };
    Ok(report)
}

fn dashboard_service(ctx: &ReportContext) -> anyhow::Result<DashboardService> {
    DashboardService::with_settings(ctx.repository.clone(), ctx.settings.clone())
        .context("Invalid engine settings")
}
