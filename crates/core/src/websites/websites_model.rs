//! Website, category and monthly entry records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_LABEL;

/// An income source tracked for one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Website {
    pub id: String,
    pub name: String,
    pub year: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Revenue,
    Expense,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Revenue => "revenue",
            CategoryType::Expense => "expense",
        }
    }
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies entries as revenue or expense. `website_id = None` means the
/// category is shared by every website.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub website_id: Option<String>,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub year: i32,
}

impl Category {
    pub fn is_global(&self) -> bool {
        self.website_id.is_none()
    }

    /// Name for display, falling back to "Unknown" for blank names.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            UNKNOWN_LABEL
        } else {
            &self.name
        }
    }
}

/// Amount (USD) booked for one website and category in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyEntry {
    pub website_id: String,
    pub category_id: String,
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
}
