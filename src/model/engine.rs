/// Engines turn fuel into the power a widget machine needs
///
/// Key concepts:
/// - Engine: the capability a machine drives (fill, start, stop, queries)
/// - EngineModel: what distinguishes one kind of engine from another,
///   expressed as data (accepted fuels, cost table, batch size)
/// - FuelEngine: the one engine implementation, parameterised by a model

use super::cost::Cost;
use super::error::{Result, SimError};
use super::fuel::FuelType;

pub const MIN_FUEL_LEVEL: u32 = 0;
pub const MAX_FUEL_LEVEL: u32 = 100;

/// Everything a widget machine needs from the engine powering it
pub trait Engine {
    /// Load fuel, replacing whatever was in the tank
    /// Amounts outside 0..=100 are clamped, never rejected
    fn fill(&mut self, fuel: FuelType, amount: i32) -> Result<()>;

    /// Start the engine; requires fuel of the required type
    fn start(&mut self) -> Result<()>;

    /// Stop the engine. Stopping a stopped engine does nothing
    fn stop(&mut self);

    fn is_running(&self) -> bool;

    /// Cost of one batch with the fuel currently loaded
    fn cost_per_batch(&self) -> Result<Cost>;

    /// Number of widgets produced per batch
    fn batch_size(&self) -> u32;

    fn fuel_level(&self) -> u32;

    /// The fuel most recently filled, if any
    fn fuel_type(&self) -> Option<FuelType>;

    /// The only fuel this engine will start on
    fn required_fuel_type(&self) -> FuelType;

    fn name(&self) -> &'static str;
}

/// Describes a kind of engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineModel {
    pub name: &'static str,
    pub accepted_fuels: &'static [FuelType],
    /// Per-batch cost for each accepted fuel
    pub costs: &'static [(FuelType, Cost)],
    pub batch_size: u32,
}

impl EngineModel {
    pub const STEAM: EngineModel = EngineModel {
        name: "steam engine",
        accepted_fuels: &[FuelType::Wood, FuelType::Coal],
        costs: &[
            (FuelType::Wood, Cost::from_cents(435)),
            (FuelType::Coal, Cost::from_cents(565)),
        ],
        batch_size: 2,
    };

    /// Illustrative second model: petrol or diesel in batches of eight.
    /// Its costs are example figures, not taken from any measured engine.
    pub const INTERNAL_COMBUSTION: EngineModel = EngineModel {
        name: "internal combustion engine",
        accepted_fuels: &[FuelType::Petrol, FuelType::Diesel],
        costs: &[
            (FuelType::Petrol, Cost::from_cents(900)),
            (FuelType::Diesel, Cost::from_cents(1200)),
        ],
        batch_size: 8,
    };

    /// Check if this model can burn a given fuel
    pub fn accepts(&self, fuel: FuelType) -> bool {
        self.accepted_fuels.contains(&fuel)
    }

    /// Look up the per-batch cost for a fuel
    pub fn cost_for(&self, fuel: FuelType) -> Option<Cost> {
        self.costs
            .iter()
            .find(|(f, _)| *f == fuel)
            .map(|(_, cost)| *cost)
    }
}

/// A fuel-burning engine whose behaviour comes from its [`EngineModel`]
#[derive(Debug, Clone)]
pub struct FuelEngine {
    model: EngineModel,
    required_fuel_type: FuelType,
    fuel_type: Option<FuelType>,
    fuel_level: u32,
    running: bool,
}

impl FuelEngine {
    /// Build an engine of the given model that starts only on `required`
    pub fn new(model: EngineModel, required: FuelType) -> Result<Self> {
        if !model.accepts(required) {
            return Err(SimError::WrongFuelType {
                engine: model.name,
                fuel: required,
            });
        }

        Ok(FuelEngine {
            model,
            required_fuel_type: required,
            fuel_type: None,
            fuel_level: MIN_FUEL_LEVEL,
            running: false,
        })
    }

    /// A steam engine: wood or coal, two widgets per batch
    pub fn steam(required: FuelType) -> Result<Self> {
        FuelEngine::new(EngineModel::STEAM, required)
    }

    /// An internal combustion engine: petrol or diesel, eight widgets per batch
    pub fn internal_combustion(required: FuelType) -> Result<Self> {
        FuelEngine::new(EngineModel::INTERNAL_COMBUSTION, required)
    }
}

/// Clamp a requested fill amount into the tank's range
pub fn clamp_fuel_level(amount: i32) -> u32 {
    if amount < 0 {
        MIN_FUEL_LEVEL
    } else {
        (amount as u32).min(MAX_FUEL_LEVEL)
    }
}

impl Engine for FuelEngine {
    fn fill(&mut self, fuel: FuelType, amount: i32) -> Result<()> {
        // Reject before touching the tank so a bad fill changes nothing
        if !self.model.accepts(fuel) {
            return Err(SimError::InvalidFuelType {
                engine: self.model.name,
                fuel,
            });
        }
        self.fuel_level = clamp_fuel_level(amount);
        self.fuel_type = Some(fuel);
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        if self.fuel_level > 0 && self.fuel_type == Some(self.required_fuel_type) {
            self.running = true;
            Ok(())
        } else {
            Err(SimError::CannotStart {
                required: self.required_fuel_type,
                filled: self.fuel_type,
                level: self.fuel_level,
            })
        }
    }

    fn stop(&mut self) {
        self.running = false;
    }

    fn is_running(&self) -> bool {
        self.running
    }

    fn cost_per_batch(&self) -> Result<Cost> {
        self.fuel_type
            .and_then(|fuel| self.model.cost_for(fuel))
            .ok_or(SimError::NotFuelled)
    }

    fn batch_size(&self) -> u32 {
        self.model.batch_size
    }

    fn fuel_level(&self) -> u32 {
        self.fuel_level
    }

    fn fuel_type(&self) -> Option<FuelType> {
        self.fuel_type
    }

    fn required_fuel_type(&self) -> FuelType {
        self.required_fuel_type
    }

    fn name(&self) -> &'static str {
        self.model.name
    }
}
