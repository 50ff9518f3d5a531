use std::sync::Arc;

use log::{debug, error};

use super::{
    calculate_dashboard_stats, calculate_website_stats, DashboardRepositoryTrait,
    DashboardServiceTrait, DashboardSnapshot, DashboardStats, WebsiteStats,
};
use crate::errors::{Error, Result};
use crate::period::Period;
use crate::settings::EngineSettings;

/// Loads a snapshot through the repository and runs the pure calculator on it.
pub struct DashboardService {
    repository: Arc<dyn DashboardRepositoryTrait>,
    settings: EngineSettings,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn DashboardRepositoryTrait>) -> Self {
        Self {
            repository,
            settings: EngineSettings::default(),
        }
    }

    pub fn with_settings(
        repository: Arc<dyn DashboardRepositoryTrait>,
        settings: EngineSettings,
    ) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            repository,
            settings,
        })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Reads every collection the engine needs for the period's year.
    pub fn load_snapshot(&self, user_id: &str, year: i32) -> Result<DashboardSnapshot> {
        ensure_user(user_id)?;
        debug!("Loading dashboard snapshot for year {}", year);

        let snapshot = DashboardSnapshot {
            websites: self.repository.get_websites(user_id, year)?,
            categories: self.repository.get_categories(user_id, year)?,
            entries: self.repository.get_entries(user_id, year)?,
            exchange_rates: self.repository.get_exchange_rates(user_id, year)?,
            expenses: self.repository.get_expenses(user_id, year)?,
            dividends: self.repository.get_dividends(user_id, year)?,
        };

        debug!(
            "Loaded {} websites, {} categories, {} entries, {} expenses, {} dividends",
            snapshot.websites.len(),
            snapshot.categories.len(),
            snapshot.entries.len(),
            snapshot.expenses.len(),
            snapshot.dividends.len()
        );
        Ok(snapshot)
    }
}

impl DashboardServiceTrait for DashboardService {
    fn get_dashboard_stats(&self, user_id: &str, period: &Period) -> Result<DashboardStats> {
        let snapshot = match self.load_snapshot(user_id, period.year()) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Failed to load dashboard data: {}", e);
                return Err(e);
            }
        };
        Ok(calculate_dashboard_stats(&snapshot, period, &self.settings))
    }

    fn get_website_stats(
        &self,
        user_id: &str,
        website_id: &str,
        period: &Period,
    ) -> Result<WebsiteStats> {
        if website_id.trim().is_empty() {
            return Err(Error::MissingContext("website id is required".to_string()));
        }
        let snapshot = self.load_snapshot(user_id, period.year())?;
        calculate_website_stats(&snapshot, website_id, period, &self.settings)
            .ok_or_else(|| Error::NotFound(format!("Website {} not found", website_id)))
    }
}

fn ensure_user(user_id: &str) -> Result<()> {
    if user_id.trim().is_empty() {
        return Err(Error::MissingContext(
            "an authenticated user is required".to_string(),
        ));
    }
    Ok(())
}
