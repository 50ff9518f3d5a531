//! Default storage and clock implementations.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use super::{CacheStorage, Clock};
use crate::errors::{Error, Result};

/// Process-local storage guarded by a mutex.
#[derive(Debug, Default)]
pub struct InMemoryCacheStorage {
    items: Mutex<HashMap<String, String>>,
}

impl InMemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.lock().map(|items| items.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with_items<R>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> R) -> Result<R> {
        let mut items = self
            .items
            .lock()
            .map_err(|e| Error::Cache(format!("cache storage lock poisoned: {}", e)))?;
        Ok(f(&mut items))
    }
}

impl CacheStorage for InMemoryCacheStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.with_items(|items| items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.with_items(|items| {
            items.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.with_items(|items| {
            items.remove(key);
        })
    }

    fn keys(&self) -> Result<Vec<String>> {
        self.with_items(|items| {
            let mut keys: Vec<String> = items.keys().cloned().collect();
            keys.sort();
            keys
        })
    }
}

/// Wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
