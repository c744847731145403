use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SimError;

/// A kind of fuel an engine can burn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
    Wood,
    Coal,
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Petrol,
        FuelType::Diesel,
        FuelType::Wood,
        FuelType::Coal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
            FuelType::Wood => "wood",
            FuelType::Coal => "coal",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        FuelType::ALL
            .into_iter()
            .find(|fuel| fuel.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SimError::UnknownFuelType(s.to_string()))
    }
}
