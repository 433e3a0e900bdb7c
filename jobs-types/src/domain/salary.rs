//! Annual salary amount.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Annual salary in the dataset's base currency (US dollars).
///
/// Non-negative by convention only. Records are never validated on
/// construction, so conversion is where a negative amount gets rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salary(f64);

impl Salary {
    pub fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl From<f64> for Salary {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Salary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
