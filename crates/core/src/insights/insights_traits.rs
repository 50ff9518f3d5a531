use chrono::{DateTime, Utc};

use crate::errors::Result;

/// String key/value store backing the insights cache.
///
/// Mirrors browser-style local storage: values are opaque strings and keys
/// may be shared with unrelated data, so the cache only touches keys it
/// prefixed itself.
pub trait CacheStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
    fn keys(&self) -> Result<Vec<String>>;
}

/// Source of the current time.
/// Abstracted for testing purposes.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
