use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What is written under one cache key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedInsight<T> {
    pub value: T,
    pub timestamp: DateTime<Utc>,
}
