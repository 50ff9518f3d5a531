//! Running cost basis and quantity updates applied when a transaction is
//! recorded against an asset.

use log::warn;
use rust_decimal::Decimal;

use super::{Asset, AssetTransaction, TransactionType};

/// Returns the asset as it stands after `transaction`.
///
/// A buy adds its amount to the cost basis and its quantity to the holding.
/// A sell removes the average cost of the units sold, with both cost and
/// quantity floored at zero. Income transactions leave the asset unchanged.
pub fn apply_transaction(asset: &Asset, transaction: &AssetTransaction) -> Asset {
    let mut updated = asset.clone();
    match transaction.transaction_type {
        TransactionType::Buy => {
            updated.purchase_price += transaction.amount;
            if let Some(bought) = transaction.quantity {
                updated.quantity = Some(asset.quantity.unwrap_or(Decimal::ZERO) + bought);
            }
        }
        TransactionType::Sell => {
            let held = asset.quantity.unwrap_or(Decimal::ZERO);
            match transaction.quantity {
                Some(sold) if held > Decimal::ZERO => {
                    let cost_per_unit = asset.purchase_price / held;
                    updated.purchase_price =
                        (asset.purchase_price - cost_per_unit * sold).max(Decimal::ZERO);
                    updated.quantity = Some((held - sold).max(Decimal::ZERO));
                }
                _ => {
                    warn!(
                        "Sell on asset {} without a usable quantity; cost basis kept",
                        asset.id
                    );
                }
            }
        }
        TransactionType::Dividend
        | TransactionType::Interest
        | TransactionType::RentalIncome
        | TransactionType::OtherIncome => {}
    }
    updated
}

/// Replays every transaction of `asset` in order.
pub fn reconcile_asset(asset: &Asset, transactions: &[AssetTransaction]) -> Asset {
    transactions
        .iter()
        .filter(|t| t.asset_id == asset.id)
        .fold(asset.clone(), |current, t| apply_transaction(&current, t))
}
