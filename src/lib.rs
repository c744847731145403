//! Engine and widget machine simulation.
//!
//! An [`Engine`](model::engine::Engine) is filled with fuel and powers a
//! [`WidgetMachine`](model::machine::WidgetMachine), which produces widgets
//! in fixed-size batches and charges a cost per batch.

pub mod logger;
pub mod model;

pub use model::cost::Cost;
pub use model::engine::{Engine, EngineModel, FuelEngine};
pub use model::error::{ErrorKind, Result, SimError};
pub use model::fuel::FuelType;
pub use model::machine::{ProductionRun, WidgetMachine};
