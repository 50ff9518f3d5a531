use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A BDT investment that pays dividends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Investment {
    pub id: String,
    pub name: String,
    pub principal_amount: Decimal,
}

/// Dividend received in one month, in BDT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dividend {
    pub investment_id: String,
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
}

/// Dividend performance of a single investment over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentReturn {
    pub investment_id: String,
    pub name: String,
    pub principal_amount: Decimal,
    pub dividends: Decimal,
    /// dividends / principal * 100, 0 when the principal is 0
    pub dividend_yield: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentSummary {
    pub total_principal: Decimal,
    pub total_dividends: Decimal,
    pub overall_yield: Decimal,
    pub investments: Vec<InvestmentReturn>,
}
