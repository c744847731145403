use serde::{Deserialize, Serialize};

use super::cost::Cost;
use super::engine::Engine;
use super::error::{Result, SimError};
use super::fuel::FuelType;

/// Record of one completed production request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionRun {
    pub engine: String,
    pub fuel_type: Option<FuelType>,
    pub quantity: u32,
    pub batch_size: u32,
    pub batches: u64,
    pub cost_per_batch: Cost,
    pub total_cost: Cost,
}

/// Represents a machine that produces widgets in batches
/// The machine has no state of its own; each request starts and stops its engine
#[derive(Debug, Clone)]
pub struct WidgetMachine<E: Engine> {
    engine: E,
}

impl<E: Engine> WidgetMachine<E> {
    pub fn new(engine: E) -> Self {
        WidgetMachine { engine }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Produce `quantity` widgets and return what it cost
    pub fn produce_widgets(&mut self, quantity: u32) -> Result<Cost> {
        self.produce_run(quantity).map(|run| run.total_cost)
    }

    /// Produce `quantity` widgets and return the full breakdown
    ///
    /// Fails without touching the engine if it holds less fuel than the
    /// quantity requested. Errors from starting the engine are returned as
    /// is. Once the engine has started it is always stopped again.
    pub fn produce_run(&mut self, quantity: u32) -> Result<ProductionRun> {
        let level = self.engine.fuel_level();
        if level < quantity {
            return Err(SimError::InsufficientFuel { level, quantity });
        }

        self.engine.start()?;

        let outcome = if self.engine.is_running() {
            self.produce(quantity)
        } else {
            Ok(self.idle_run(quantity))
        };

        self.engine.stop();
        outcome
    }

    fn produce(&self, quantity: u32) -> Result<ProductionRun> {
        let cost_per_batch = self.engine.cost_per_batch()?;
        let batch_size = self.engine.batch_size();
        let Some(batches) = batches_for(quantity, batch_size) else {
            return Err(SimError::ZeroBatchSize {
                engine: self.engine.name(),
            });
        };

        Ok(ProductionRun {
            engine: self.engine.name().to_string(),
            fuel_type: self.engine.fuel_type(),
            quantity,
            batch_size,
            batches,
            cost_per_batch,
            total_cost: cost_per_batch.times(batches),
        })
    }

    fn idle_run(&self, quantity: u32) -> ProductionRun {
        ProductionRun {
            engine: self.engine.name().to_string(),
            fuel_type: self.engine.fuel_type(),
            quantity,
            batch_size: self.engine.batch_size(),
            batches: 0,
            cost_per_batch: Cost::ZERO,
            total_cost: Cost::ZERO,
        }
    }
}

/// Number of batches needed to cover `quantity`, rounding partial batches up
///
/// Returns `None` for a batch size of zero, which could never cover anything.
pub fn batches_for(quantity: u32, batch_size: u32) -> Option<u64> {
    if batch_size == 0 {
        return None;
    }
    let quantity = u64::from(quantity);
    let step = u64::from(batch_size);
    let mut produced = 0u64;
    let mut batches = 0u64;
    while produced < quantity {
        produced += step;
        batches += 1;
    }
    Some(batches)
}
