use serde::{Deserialize, Serialize};

use super::fuel::FuelType;

/// The three families of failure an engine or machine can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// The engine is not in a state that allows the operation
    State,
    /// An engine was built with settings its model does not support
    Configuration,
    /// An operation was given an argument the engine cannot accept
    Argument,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimError {
    #[error("engine can not be work: requires {required}, filled with {} at level {level}", fmt_fill(.filled))]
    CannotStart {
        required: FuelType,
        filled: Option<FuelType>,
        level: u32,
    },
    #[error("engine has not been fuelled")]
    NotFuelled,
    #[error("wrong fuel type {fuel} for {engine}")]
    WrongFuelType { engine: &'static str, fuel: FuelType },
    #[error("{engine} has a batch size of zero")]
    ZeroBatchSize { engine: &'static str },
    #[error("invalid fuel type {fuel} for {engine}")]
    InvalidFuelType { engine: &'static str, fuel: FuelType },
    #[error("insufficient fuel level: have {level}, need {quantity}")]
    InsufficientFuel { level: u32, quantity: u32 },
    #[error("unknown fuel type: {0}")]
    UnknownFuelType(String),
}

fn fmt_fill(filled: &Option<FuelType>) -> String {
    match filled {
        Some(fuel) => fuel.to_string(),
        None => "nothing".to_string(),
    }
}

impl SimError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::CannotStart { .. } | SimError::NotFuelled => ErrorKind::State,
            SimError::WrongFuelType { .. } | SimError::ZeroBatchSize { .. } => {
                ErrorKind::Configuration
            }
            SimError::InvalidFuelType { .. }
            | SimError::InsufficientFuel { .. }
            | SimError::UnknownFuelType(_) => ErrorKind::Argument,
        }
    }
}

pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let start = SimError::CannotStart {
            required: FuelType::Coal,
            filled: None,
            level: 0,
        };
        assert_eq!(start.kind(), ErrorKind::State);
        assert_eq!(SimError::NotFuelled.kind(), ErrorKind::State);
        assert_eq!(
            SimError::WrongFuelType {
                engine: "steam engine",
                fuel: FuelType::Petrol
            }
            .kind(),
            ErrorKind::Configuration
        );
        assert_eq!(
            SimError::InsufficientFuel {
                level: 2,
                quantity: 6
            }
            .kind(),
            ErrorKind::Argument
        );
    }

    #[test]
    fn messages_name_the_problem() {
        let err = SimError::CannotStart {
            required: FuelType::Coal,
            filled: Some(FuelType::Coal),
            level: 0,
        };
        assert!(err.to_string().starts_with("engine can not be work"));

        let err = SimError::CannotStart {
            required: FuelType::Wood,
            filled: None,
            level: 0,
        };
        assert!(err.to_string().contains("filled with nothing"));

        let err = SimError::InsufficientFuel {
            level: 2,
            quantity: 6,
        };
        assert_eq!(err.to_string(), "insufficient fuel level: have 2, need 6");

        let err = SimError::InvalidFuelType {
            engine: "steam engine",
            fuel: FuelType::Petrol,
        };
        assert_eq!(err.to_string(), "invalid fuel type petrol for steam engine");
    }
}
