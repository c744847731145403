//! Property-based tests for engines and the widget machine.
//!
//! Uses proptest to generate fills and production requests, then checks
//! the tank, batching and atomicity rules hold for every input.

use proptest::prelude::*;
use widget_sim::model::engine::{MAX_FUEL_LEVEL, MIN_FUEL_LEVEL};
use widget_sim::model::machine::batches_for;
use widget_sim::{Engine, ErrorKind, FuelEngine, FuelType, WidgetMachine};

// ===========================================================================
// Generators
// ===========================================================================

fn arb_fuel() -> impl Strategy<Value = FuelType> {
    prop::sample::select(FuelType::ALL.to_vec())
}

fn arb_steam_fuel() -> impl Strategy<Value = FuelType> {
    prop::sample::select(vec![FuelType::Wood, FuelType::Coal])
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #[test]
    fn fill_always_lands_in_tank_range(fuel in arb_steam_fuel(), amount in any::<i32>()) {
        let mut engine = FuelEngine::steam(fuel).unwrap();
        engine.fill(fuel, amount).unwrap();

        let level = engine.fuel_level();
        prop_assert!((MIN_FUEL_LEVEL..=MAX_FUEL_LEVEL).contains(&level));
        if amount < 0 {
            prop_assert_eq!(level, 0);
        } else if amount > 100 {
            prop_assert_eq!(level, 100);
        } else {
            prop_assert_eq!(level as i32, amount);
        }
    }

    #[test]
    fn rejected_fill_changes_nothing(
        first in arb_steam_fuel(),
        amount in 0i32..=100,
        second in arb_fuel(),
        second_amount in any::<i32>(),
    ) {
        let mut engine = FuelEngine::steam(FuelType::Coal).unwrap();
        engine.fill(first, amount).unwrap();

        let result = engine.fill(second, second_amount);
        if matches!(second, FuelType::Wood | FuelType::Coal) {
            prop_assert!(result.is_ok());
        } else {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::Argument);
            prop_assert_eq!(engine.fuel_level(), amount as u32);
            prop_assert_eq!(engine.fuel_type(), Some(first));
        }
    }

    #[test]
    fn start_requires_fuel_of_required_type(
        required in arb_steam_fuel(),
        filled in arb_steam_fuel(),
        amount in -5i32..=105,
    ) {
        let mut engine = FuelEngine::steam(required).unwrap();
        engine.fill(filled, amount).unwrap();

        let should_start = amount > 0 && filled == required;
        prop_assert_eq!(engine.start().is_ok(), should_start);
        prop_assert_eq!(engine.is_running(), should_start);

        engine.stop();
        prop_assert!(!engine.is_running());
    }

    #[test]
    fn batches_are_ceiling_division(quantity in 0u32..10_000, batch_size in 1u32..64) {
        let expected = u64::from(quantity).div_ceil(u64::from(batch_size));
        prop_assert_eq!(batches_for(quantity, batch_size), Some(expected));
    }

    #[test]
    fn production_cost_is_batches_times_unit_cost(
        fuel in arb_steam_fuel(),
        level in 1i32..=100,
        quantity in 0u32..=100,
    ) {
        let mut engine = FuelEngine::steam(fuel).unwrap();
        engine.fill(fuel, level).unwrap();
        let unit = engine.cost_per_batch().unwrap();
        let mut machine = WidgetMachine::new(engine);

        let result = machine.produce_widgets(quantity);
        if quantity > level as u32 {
            prop_assert_eq!(result.unwrap_err().kind(), ErrorKind::Argument);
        } else {
            let batches = u64::from(quantity).div_ceil(2);
            prop_assert_eq!(result.unwrap(), unit.times(batches));
        }
        prop_assert!(!machine.engine().is_running());
    }
}
