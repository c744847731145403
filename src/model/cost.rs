use std::fmt;

use serde::{Deserialize, Serialize};

/// An exact money amount, stored in hundredths
///
/// Batch costs like 5.65 are multiplied by whole batch counts, so keeping
/// cents as an integer makes every total exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cost(u64);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    pub const fn from_cents(cents: u64) -> Self {
        Cost(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Total for a number of batches; saturates instead of overflowing
    pub fn times(&self, batches: u64) -> Cost {
        Cost(self.0.saturating_mul(batches))
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
