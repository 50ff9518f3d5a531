//! Time-boxed cache for generated insights, keyed by a hash of the data the
//! insight was generated from.

use std::sync::Arc;

use chrono::Duration;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};

use super::{CacheStorage, CachedInsight, Clock};
use crate::constants::{INSIGHTS_CACHE_KEY_PREFIX, INSIGHTS_CACHE_TTL_HOURS};
use crate::errors::{Error, Result};
use crate::settings::EngineSettings;

/// Hex SHA-256 of the JSON encoding of `value`.
///
/// Equal data always yields the same key, so a changed dashboard misses the
/// cache while an unchanged one hits it.
pub fn compute_data_hash<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let json = serde_json::to_vec(value)?;
    let mut hasher = Sha256::new();
    hasher.update(&json);
    Ok(hex::encode(hasher.finalize()))
}

pub struct InsightsCache {
    storage: Arc<dyn CacheStorage>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl InsightsCache {
    pub fn new(storage: Arc<dyn CacheStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            ttl: Duration::hours(INSIGHTS_CACHE_TTL_HOURS),
        }
    }

    pub fn with_ttl_hours(
        storage: Arc<dyn CacheStorage>,
        clock: Arc<dyn Clock>,
        ttl_hours: i64,
    ) -> Result<Self> {
        if ttl_hours <= 0 {
            return Err(Error::InvalidConfigValue(format!(
                "insights cache ttl must be positive, got {} hours",
                ttl_hours
            )));
        }
        Ok(Self {
            storage,
            clock,
            ttl: Duration::hours(ttl_hours),
        })
    }

    pub fn from_settings(
        storage: Arc<dyn CacheStorage>,
        clock: Arc<dyn Clock>,
        settings: &EngineSettings,
    ) -> Result<Self> {
        Self::with_ttl_hours(storage, clock, settings.insights_cache_ttl_hours)
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn key_for(data_hash: &str) -> String {
        format!("{}{}", INSIGHTS_CACHE_KEY_PREFIX, data_hash)
    }

    /// Fresh value stored for `data_hash`.
    ///
    /// Expired or unreadable entries are removed and reported as a miss.
    pub fn get<T: DeserializeOwned>(&self, data_hash: &str) -> Result<Option<T>> {
        let key = Self::key_for(data_hash);
        let Some(raw) = self.storage.get_item(&key)? else {
            return Ok(None);
        };

        let cached = match serde_json::from_str::<CachedInsight<T>>(&raw) {
            Ok(cached) => cached,
            Err(e) => {
                warn!("Dropping unreadable insights cache entry {}: {}", key, e);
                self.storage.remove_item(&key)?;
                return Ok(None);
            }
        };

        if self.is_expired(&cached) {
            debug!("Insights cache entry {} expired", key);
            self.storage.remove_item(&key)?;
            return Ok(None);
        }
        Ok(Some(cached.value))
    }

    pub fn put<T: Serialize>(&self, data_hash: &str, value: &T) -> Result<()> {
        let entry = CachedInsight {
            value,
            timestamp: self.clock.now(),
        };
        let raw = serde_json::to_string(&entry)?;
        self.storage.set_item(&Self::key_for(data_hash), &raw)
    }

    pub fn invalidate(&self, data_hash: &str) -> Result<()> {
        self.storage.remove_item(&Self::key_for(data_hash))
    }

    /// Removes every expired or unreadable cache entry and returns how many
    /// were removed. Keys without the cache prefix are left alone.
    pub fn purge_expired(&self) -> Result<usize> {
        let mut removed = 0;
        for key in self.storage.keys()? {
            if !key.starts_with(INSIGHTS_CACHE_KEY_PREFIX) {
                continue;
            }
            let stale = match self.storage.get_item(&key)? {
                Some(raw) => match serde_json::from_str::<CachedInsight<serde_json::Value>>(&raw) {
                    Ok(cached) => self.is_expired(&cached),
                    Err(_) => true,
                },
                None => false,
            };
            if stale {
                self.storage.remove_item(&key)?;
                removed += 1;
            }
        }
        if removed > 0 {
            debug!("Purged {} insights cache entries", removed);
        }
        Ok(removed)
    }

    fn is_expired<T>(&self, cached: &CachedInsight<T>) -> bool {
        self.clock.now() - cached.timestamp >= self.ttl
    }
}
