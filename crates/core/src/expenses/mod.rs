//! Recurring expenses, global or scoped to a website.

mod expenses_model;

pub use expenses_model::{Expense, Recurrence};
