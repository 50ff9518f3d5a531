//! Portfolio valuation, income and allocation in BDT.

use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::{Asset, AssetPerformance, AssetTransaction, AssetType, PortfolioStats, TypeAllocation};
use crate::fx::Currency;
use crate::utils::percent_of;

/// Summarizes assets and their income transactions.
///
/// USD amounts are converted with `usd_to_bdt_rate`. A transaction takes the
/// currency of its asset; transactions of unknown assets are read as BDT.
pub fn calculate_portfolio_stats(
    assets: &[Asset],
    transactions: &[AssetTransaction],
    usd_to_bdt_rate: Decimal,
) -> PortfolioStats {
    let performances: Vec<AssetPerformance> = assets
        .iter()
        .map(|asset| asset_performance(asset, usd_to_bdt_rate))
        .collect();

    let total_portfolio_value: Decimal = performances.iter().map(|p| p.current_value).sum();
    let total_cost_basis: Decimal = performances.iter().map(|p| p.cost_basis).sum();
    let total_unrealized_gain_loss = total_portfolio_value - total_cost_basis;

    let currencies: HashMap<&str, Currency> = assets
        .iter()
        .map(|a| (a.id.as_str(), a.currency))
        .collect();
    let total_income: Decimal = transactions
        .iter()
        .filter(|t| t.transaction_type.is_income())
        .map(|t| {
            currencies
                .get(t.asset_id.as_str())
                .copied()
                .unwrap_or_default()
                .to_bdt(t.amount, usd_to_bdt_rate)
        })
        .sum();

    let allocation_by_type = AssetType::ALL
        .iter()
        .map(|&asset_type| {
            let value: Decimal = performances
                .iter()
                .filter(|p| p.asset_type == asset_type)
                .map(|p| p.current_value)
                .sum();
            TypeAllocation {
                asset_type,
                value,
                percentage: percent_of(value, total_portfolio_value),
            }
        })
        .collect();

    debug!(
        "Portfolio of {} assets: value {}, cost {}, income {}",
        assets.len(),
        total_portfolio_value,
        total_cost_basis,
        total_income
    );

    PortfolioStats {
        total_portfolio_value,
        total_cost_basis,
        total_unrealized_gain_loss,
        overall_roi: percent_of(total_unrealized_gain_loss, total_cost_basis),
        total_income,
        income_yield: percent_of(total_income, total_cost_basis),
        assets: performances,
        allocation_by_type,
    }
}

fn asset_performance(asset: &Asset, usd_to_bdt_rate: Decimal) -> AssetPerformance {
    let cost_basis = asset.currency.to_bdt(asset.purchase_price, usd_to_bdt_rate);
    let current_value = asset.currency.to_bdt(asset.current_value, usd_to_bdt_rate);
    let gain_loss = current_value - cost_basis;
    AssetPerformance {
        asset_id: asset.id.clone(),
        name: asset.name.clone(),
        asset_type: asset.asset_type,
        cost_basis,
        current_value,
        gain_loss,
        gain_loss_percent: percent_of(gain_loss, cost_basis),
    }
}
