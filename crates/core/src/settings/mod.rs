//! Engine settings module - tunables with validated defaults.

mod settings_model;

pub use settings_model::*;
