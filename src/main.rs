use std::env;

use serde::Serialize;
use widget_sim::logger::{LogLevel, Logger};
use widget_sim::{
    Engine, EngineModel, ErrorKind, FuelEngine, FuelType, ProductionRun, SimError, WidgetMachine,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Options {
    json: bool,
    log_level: LogLevel,
    /// Set by `--fuel`; replaces the built-in scenarios with a single run
    custom: Option<CustomRun>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            json: false,
            log_level: LogLevel::Info,
            custom: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CustomRun {
    fuel: FuelType,
    amount: i32,
    quantity: u32,
}

impl CustomRun {
    fn new(fuel: FuelType) -> Self {
        CustomRun {
            fuel,
            amount: 100,
            quantity: 1,
        }
    }

    /// An engine that requires the chosen fuel, filled with it
    fn scenario(&self) -> Scenario {
        let model = [EngineModel::STEAM, EngineModel::INTERNAL_COMBUSTION]
            .into_iter()
            .find(|model| model.accepts(self.fuel))
            .unwrap_or(EngineModel::STEAM);
        Scenario {
            name: "custom",
            model,
            required: self.fuel,
            fill: (self.fuel, self.amount),
            quantity: self.quantity,
        }
    }
}

/// A built-in production request: build an engine, fill it, produce
#[derive(Debug, Clone)]
struct Scenario {
    name: &'static str,
    model: EngineModel,
    required: FuelType,
    fill: (FuelType, i32),
    quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum Outcome {
    Produced(ProductionRun),
    Failed { kind: ErrorKind, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ScenarioOutcome {
    scenario: &'static str,
    #[serde(flatten)]
    outcome: Outcome,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(err) => {
            Logger::new(LogLevel::Error).error(&err);
            std::process::exit(2);
        }
    };

    let mut logger = Logger::default();
    logger.set_min_level(options.log_level);
    if options.json {
        // Keep stdout clean for the JSON document
        logger.set_console_output(false);
    }

    let scenarios = match options.custom {
        Some(custom) => vec![custom.scenario()],
        None => scenarios(),
    };
    let outcomes = run_examples(&logger, &scenarios);

    if options.json {
        if let Err(err) = print_json(&outcomes) {
            Logger::new(LogLevel::Error).error(&format!("Failed to write results: {}", err));
            std::process::exit(1);
        }
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut fuel = None;
    let mut amount = None;
    let mut quantity = None;
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" | "-j" => options.json = true,
            "--log-level" | "-l" => {
                options.log_level = flag_value(arg, iter.next())?
                    .parse()
                    .map_err(|e| format!("{}", e))?;
            }
            "--fuel" | "-f" => {
                let value: FuelType = flag_value(arg, iter.next())?
                    .parse()
                    .map_err(|e: SimError| e.to_string())?;
                fuel = Some(value);
            }
            "--amount" | "-a" => {
                amount = Some(
                    flag_value(arg, iter.next())?
                        .parse::<i32>()
                        .map_err(|e| format!("{}: {}", arg, e))?,
                );
            }
            "--quantity" | "-q" => {
                quantity = Some(
                    flag_value(arg, iter.next())?
                        .parse::<u32>()
                        .map_err(|e| format!("{}: {}", arg, e))?,
                );
            }
            other => return Err(format!("unrecognised argument: {}", other)),
        }
    }

    match fuel {
        Some(fuel) => {
            let mut custom = CustomRun::new(fuel);
            custom.amount = amount.unwrap_or(custom.amount);
            custom.quantity = quantity.unwrap_or(custom.quantity);
            options.custom = Some(custom);
        }
        None if amount.is_some() || quantity.is_some() => {
            return Err("--amount and --quantity need --fuel".to_string());
        }
        None => {}
    }
    Ok(options)
}

fn flag_value<'a>(flag: &str, value: Option<&'a String>) -> Result<&'a str, String> {
    value
        .map(|v| v.as_str())
        .ok_or_else(|| format!("{} needs a value", flag))
}

fn print_json(outcomes: &[ScenarioOutcome]) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(outcomes)?);
    Ok(())
}

fn scenarios() -> Vec<Scenario> {
    let steam = |name, required, fill, quantity| Scenario {
        name,
        model: EngineModel::STEAM,
        required,
        fill,
        quantity,
    };

    vec![
        steam("coal, three widgets", FuelType::Coal, (FuelType::Coal, 30), 3),
        steam("wood, six widgets", FuelType::Wood, (FuelType::Wood, 6), 6),
        steam("wood, exact batch", FuelType::Wood, (FuelType::Wood, 100), 2),
        steam("wood, partial batch", FuelType::Wood, (FuelType::Wood, 100), 3),
        steam("wood, not enough fuel", FuelType::Wood, (FuelType::Wood, 2), 6),
        steam("coal, empty tank", FuelType::Coal, (FuelType::Coal, 0), 0),
        steam("petrol in a steam engine", FuelType::Coal, (FuelType::Petrol, 4), 2),
        steam("steam engine built for diesel", FuelType::Diesel, (FuelType::Diesel, 10), 2),
        Scenario {
            name: "diesel, twenty widgets",
            model: EngineModel::INTERNAL_COMBUSTION,
            required: FuelType::Diesel,
            fill: (FuelType::Diesel, 40),
            quantity: 20,
        },
    ]
}

fn run_scenario(scenario: &Scenario) -> Result<ProductionRun, SimError> {
    let mut engine = FuelEngine::new(scenario.model, scenario.required)?;
    let (fuel, amount) = scenario.fill;
    engine.fill(fuel, amount)?;
    WidgetMachine::new(engine).produce_run(scenario.quantity)
}

fn run_examples(logger: &Logger, scenarios: &[Scenario]) -> Vec<ScenarioOutcome> {
    logger.debug("Application started");

    let mut outcomes = Vec::new();
    for scenario in scenarios {
        logger.info(&format!(
            "=== {}: {} requiring {}, fill {} x {}, produce {} ===",
            scenario.name,
            scenario.model.name,
            scenario.required,
            scenario.fill.0,
            scenario.fill.1,
            scenario.quantity
        ));

        let outcome = match run_scenario(scenario) {
            Ok(run) => {
                logger.info(&format!(
                    "Produced {} widgets in {} batches of {} at {} each: total {}",
                    run.quantity, run.batches, run.batch_size, run.cost_per_batch, run.total_cost
                ));
                Outcome::Produced(run)
            }
            Err(err) => {
                logger.warning(&format!("Production failed ({:?}): {}", err.kind(), err));
                Outcome::Failed {
                    kind: err.kind(),
                    message: err.to_string(),
                }
            }
        };

        outcomes.push(ScenarioOutcome {
            scenario: scenario.name,
            outcome,
        });
    }

    logger.info("Simulation complete");
    outcomes
}
