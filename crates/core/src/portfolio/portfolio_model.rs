//! Asset, transaction and derived portfolio records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fx::Currency;

/// Asset classes an asset can belong to, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetType {
    Stock,
    MutualFund,
    Bond,
    FixedDeposit,
    Savings,
    RealEstate,
    Gold,
    Crypto,
}

impl AssetType {
    pub const ALL: [AssetType; 8] = [
        AssetType::Stock,
        AssetType::MutualFund,
        AssetType::Bond,
        AssetType::FixedDeposit,
        AssetType::Savings,
        AssetType::RealEstate,
        AssetType::Gold,
        AssetType::Crypto,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Stock => "stock",
            AssetType::MutualFund => "mutual_fund",
            AssetType::Bond => "bond",
            AssetType::FixedDeposit => "fixed_deposit",
            AssetType::Savings => "savings",
            AssetType::RealEstate => "real_estate",
            AssetType::Gold => "gold",
            AssetType::Crypto => "crypto",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A holding with its already-reconciled cost and quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub asset_type: AssetType,
    #[serde(default)]
    pub currency: Currency,
    /// Running cost basis in the asset's currency
    pub purchase_price: Decimal,
    pub current_value: Decimal,
    #[serde(default)]
    pub quantity: Option<Decimal>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Buy,
    Sell,
    Dividend,
    Interest,
    RentalIncome,
    OtherIncome,
}

impl TransactionType {
    /// Transactions that count as portfolio income.
    pub fn is_income(&self) -> bool {
        matches!(
            self,
            TransactionType::Dividend
                | TransactionType::Interest
                | TransactionType::RentalIncome
                | TransactionType::OtherIncome
        )
    }
}

/// A movement on an asset, in the parent asset's currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetTransaction {
    pub asset_id: String,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    #[serde(default)]
    pub quantity: Option<Decimal>,
}

/// Gain or loss of one asset, in BDT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPerformance {
    pub asset_id: String,
    pub name: String,
    pub asset_type: AssetType,
    pub cost_basis: Decimal,
    pub current_value: Decimal,
    pub gain_loss: Decimal,
    /// gain_loss / cost_basis * 100, 0 when the cost basis is 0
    pub gain_loss_percent: Decimal,
}

/// Current value held in one asset type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeAllocation {
    pub asset_type: AssetType,
    pub value: Decimal,
    /// Percentage of total portfolio value (0-100)
    pub percentage: Decimal,
}

/// Portfolio summary with every amount normalized to BDT.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioStats {
    pub total_portfolio_value: Decimal,
    pub total_cost_basis: Decimal,
    pub total_unrealized_gain_loss: Decimal,
    pub overall_roi: Decimal,
    pub total_income: Decimal,
    pub income_yield: Decimal,
    pub assets: Vec<AssetPerformance>,
    /// One row per asset type, in `AssetType::ALL` order
    pub allocation_by_type: Vec<TypeAllocation>,
}
