//! Recurring expense ("tool") records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    Monthly,
    Yearly,
}

/// A subscription or tool cost in USD.
///
/// Monthly expenses count in the single `month` they are keyed to. Yearly
/// expenses are keyed to `due_month` but spread over the whole year.
/// `is_allocated` only matters for global expenses: it decides whether the
/// cost is split across websites' P&L.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub cost_usd: Decimal,
    pub recurrence: Recurrence,
    pub month: u32,
    #[serde(default)]
    pub due_month: Option<u32>,
    #[serde(default)]
    pub website_id: Option<String>,
    #[serde(default)]
    pub is_allocated: bool,
}

impl Expense {
    pub fn is_global(&self) -> bool {
        self.website_id.is_none()
    }

    pub fn is_yearly(&self) -> bool {
        self.recurrence == Recurrence::Yearly
    }

    pub fn is_monthly(&self) -> bool {
        self.recurrence == Recurrence::Monthly
    }

    pub fn belongs_to(&self, website_id: &str) -> bool {
        self.website_id.as_deref() == Some(website_id)
    }

    /// One month's share of the cost (`cost_usd / 12`).
    pub fn monthly_share(&self) -> Decimal {
        self.cost_usd / MONTHS_PER_YEAR
    }

    /// Cost spread over `months` months (`cost_usd / 12 * months`).
    pub fn amortized(&self, months: Decimal) -> Decimal {
        self.monthly_share() * months
    }
}
