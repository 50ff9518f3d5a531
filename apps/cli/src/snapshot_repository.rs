//! File-backed data layer: one JSON document holding a user's rows.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sitefolio_core::cashflow::CashflowEntry;
use sitefolio_core::dashboard::DashboardRepositoryTrait;
use sitefolio_core::errors::{Error, Result};
use sitefolio_core::expenses::Expense;
use sitefolio_core::fx::ExchangeRate;
use sitefolio_core::investments::{Dividend, Investment};
use sitefolio_core::portfolio::{Asset, AssetTransaction};
use sitefolio_core::websites::{Category, MonthlyEntry, Website};

/// On-disk layout of a snapshot. Rows use their storage field names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapshotFile {
    /// Owner of the rows; a file without one is readable by any user
    pub user_id: Option<String>,
    pub websites: Vec<Website>,
    pub categories: Vec<Category>,
    pub entries: Vec<MonthlyEntry>,
    pub exchange_rates: Vec<ExchangeRate>,
    pub expenses: Vec<Expense>,
    pub investments: Vec<Investment>,
    pub dividends: Vec<Dividend>,
    pub assets: Vec<Asset>,
    pub asset_transactions: Vec<AssetTransaction>,
    pub cashflow_entries: Vec<CashflowEntry>,
}

pub struct JsonSnapshotRepository {
    file: SnapshotFile,
}

impl JsonSnapshotRepository {
    pub fn new(file: SnapshotFile) -> Self {
        Self { file }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            Error::Repository(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let file: SnapshotFile = serde_json::from_str(&raw).map_err(|e| {
            Error::Repository(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        tracing::debug!(
            "Loaded snapshot {} with {} websites and {} entries",
            path.display(),
            file.websites.len(),
            file.entries.len()
        );
        Ok(Self::new(file))
    }

    fn owns(&self, user_id: &str) -> bool {
        self.file
            .user_id
            .as_deref()
            .map_or(true, |owner| owner == user_id)
    }

    /// Rows of `user_id` matching `keep`, or nothing for another user.
    fn scoped<T: Clone>(
        &self,
        user_id: &str,
        rows: &[T],
        keep: impl Fn(&T) -> bool,
    ) -> Vec<T> {
        if !self.owns(user_id) {
            return Vec::new();
        }
        rows.iter().filter(|row| keep(*row)).cloned().collect()
    }

    pub fn get_investments(&self, user_id: &str) -> Vec<Investment> {
        self.scoped(user_id, &self.file.investments, |_| true)
    }

    pub fn get_assets(&self, user_id: &str) -> Vec<Asset> {
        self.scoped(user_id, &self.file.assets, |_| true)
    }

    pub fn get_asset_transactions(&self, user_id: &str) -> Vec<AssetTransaction> {
        self.scoped(user_id, &self.file.asset_transactions, |_| true)
    }

    pub fn get_cashflow_entries(&self, user_id: &str, year: i32) -> Vec<CashflowEntry> {
        self.scoped(user_id, &self.file.cashflow_entries, |e| e.year == year)
    }
}

impl DashboardRepositoryTrait for JsonSnapshotRepository {
    fn get_websites(&self, user_id: &str, year: i32) -> Result<Vec<Website>> {
        Ok(self.scoped(user_id, &self.file.websites, |w| w.year == year))
    }

    fn get_categories(&self, user_id: &str, year: i32) -> Result<Vec<Category>> {
        Ok(self.scoped(user_id, &self.file.categories, |c| c.year == year))
    }

    fn get_entries(&self, user_id: &str, year: i32) -> Result<Vec<MonthlyEntry>> {
        Ok(self.scoped(user_id, &self.file.entries, |e| e.year == year))
    }

    fn get_exchange_rates(&self, user_id: &str, year: i32) -> Result<Vec<ExchangeRate>> {
        Ok(self.scoped(user_id, &self.file.exchange_rates, |r| r.year == year))
    }

    // Expenses carry no year.
    fn get_expenses(&self, user_id: &str, _year: i32) -> Result<Vec<Expense>> {
        Ok(self.scoped(user_id, &self.file.expenses, |_| true))
    }

    fn get_dividends(&self, user_id: &str, year: i32) -> Result<Vec<Dividend>> {
        Ok(self.scoped(user_id, &self.file.dividends, |d| d.year == year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "user_id": "alice",
        "websites": [
            {"id": "w1", "name": "Blog", "year": 2024},
            {"id": "w0", "name": "Old blog", "year": 2023}
        ],
        "categories": [
            {"id": "ads", "name": "Ads", "website_id": null, "type": "revenue", "year": 2024}
        ],
        "entries": [
            {"website_id": "w1", "category_id": "ads", "year": 2024, "month": 1, "amount": 1000}
        ],
        "expenses": [
            {"id": "e1", "name": "Hosting", "cost_usd": 1200, "recurrence": "yearly",
             "month": 6, "due_month": 6, "website_id": null, "is_allocated": true}
        ]
    }"#;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_are_scoped_to_year() {
        let file = write_snapshot(SNAPSHOT);
        let repository = JsonSnapshotRepository::from_path(file.path()).unwrap();

        let websites = repository.get_websites("alice", 2024).unwrap();
        assert_eq!(websites.len(), 1);
        assert_eq!(websites[0].id, "w1");
        assert_eq!(repository.get_entries("alice", 2024).unwrap().len(), 1);
        assert_eq!(repository.get_expenses("alice", 2023).unwrap().len(), 1);
        assert!(repository.get_dividends("alice", 2024).unwrap().is_empty());
    }

    #[test]
    fn test_other_users_see_nothing() {
        let file = write_snapshot(SNAPSHOT);
        let repository = JsonSnapshotRepository::from_path(file.path()).unwrap();

        assert!(repository.get_websites("bob", 2024).unwrap().is_empty());
        assert!(repository.get_expenses("bob", 2024).unwrap().is_empty());
    }

    #[test]
    fn test_unowned_snapshot_is_shared() {
        let repository = JsonSnapshotRepository::new(SnapshotFile {
            websites: vec![Website {
                id: "w1".to_string(),
                name: "Blog".to_string(),
                year: 2024,
            }],
            ..Default::default()
        });
        assert_eq!(repository.get_websites("anyone", 2024).unwrap().len(), 1);
    }

    #[test]
    fn test_bad_files_are_repository_errors() {
        let file = write_snapshot("{ nope");
        let result = JsonSnapshotRepository::from_path(file.path());
        assert!(matches!(result, Err(Error::Repository(_))));

        let result = JsonSnapshotRepository::from_path(Path::new("/definitely/missing.json"));
        assert!(matches!(result, Err(Error::Repository(_))));
    }
}
