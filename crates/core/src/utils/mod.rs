//! Small numeric helpers shared by the calculators.

mod math_utils;

pub use math_utils::{percent_of, safe_div};
