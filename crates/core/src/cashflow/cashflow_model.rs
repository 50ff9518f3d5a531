use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashflowKind {
    Income,
    Expense,
}

/// One line of the personal cashflow ledger, in BDT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashflowEntry {
    pub id: String,
    pub year: i32,
    pub month: u32,
    pub kind: CashflowKind,
    pub category: String,
    pub amount: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCashflow {
    pub month: u32,
    pub month_name: String,
    pub income: Decimal,
    pub expense: Decimal,
    pub net: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowCategory {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashflowSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_cashflow: Decimal,
    /// net / income * 100, 0 when there is no income
    pub savings_rate: Decimal,
    pub monthly: Vec<MonthlyCashflow>,
    /// Expense totals per category, largest first
    pub expense_by_category: Vec<CashflowCategory>,
}
