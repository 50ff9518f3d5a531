//! Cache for AI-generated dashboard insights.
//!
//! Storage and time are injected so the cache can sit on top of any
//! key/value store and be tested with a fixed clock.

mod insights_cache;
mod insights_model;
mod insights_traits;
mod storage;

pub use insights_cache::*;
pub use insights_model::*;
pub use insights_traits::*;
pub use storage::*;
