//! Dealership Example
//!
//! A customer walks along a chain of car stores. Each store sells a single
//! brand; a request it cannot serve is handed to the next store, and a car no
//! store sells is reported as unavailable.
//!
//! ```text
//! Chain: Mercedes -> RollsRoyce -> Ferrari
//! ```
//!
//! # Usage
//!
//! ```bash
//! # Built-in chain and the default shopping list
//! cargo run --package dealership
//!
//! # Stores from a route table
//! cargo run --package dealership -- --config demos/dealership/handoff.toml Ferrari Bugatti
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use handoff::prelude::*;
use handoff::runtime::config::LogLevel;
use handoff::runtime::logging;
use tracing::{debug, info};

/// The customer's default shopping list.
const SHOPPING_LIST: [&str; 6] = [
    "Ferrari",
    "Mercedes",
    "Ferrari",
    "RollsRoyce",
    "Mercedes",
    "Lamborghini",
];

#[derive(Debug, Parser)]
#[command(name = "dealership", about = "Shop for cars along a chain of stores")]
struct Args {
    /// Route table to load instead of the built-in stores.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<LogLevel>,

    /// Cars to shop for, in order.
    cars: Vec<String>,
}

// ============================================================================
// Stores
// ============================================================================

/// A store selling one brand.
struct Store {
    brand: &'static str,
}

impl Handler<str, String> for Store {
    fn handle(&self, car: &str) -> Option<String> {
        (car == self.brand).then(|| format!("{0} store will sell the {0}.", self.brand))
    }
}

/// Builds the built-in chain: Mercedes -> RollsRoyce -> Ferrari.
fn builtin_stores() -> Result<HandlerChain<str, String>, ChainError> {
    let mut chain = HandlerChain::new();
    for brand in ["Mercedes", "RollsRoyce", "Ferrari"] {
        chain.append(Link::new(Store { brand }).name(brand))?;
    }
    chain.seal();
    Ok(chain)
}

// ============================================================================
// Customer
// ============================================================================

/// Asks the chain for every car on the list and returns how many were sold.
fn go_shopping(chain: &HandlerChain<str, String>, cars: &[String]) -> usize {
    let mut sold = 0;

    for car in cars {
        println!("Who can sell the customer a {car}?");

        match chain.route(car) {
            Some(handled) => {
                debug!(
                    store = handled.name.unwrap_or("unnamed"),
                    position = handled.position,
                    "Car sold"
                );
                println!("  {}", handled.value);
                sold += 1;
            }
            None => println!("  Don't have a {car} store in this place."),
        }
    }

    sold
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() -> Result<()> {
    let args = Args::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &args.config {
        loader = loader.file(path);
    }
    if let Some(level) = args.log_level {
        loader = loader.set("logging.level", level.as_str());
    }
    let config = loader.load().context("failed to load configuration")?;

    logging::init_from_config(&config.logging);

    let chain = if config.routes.is_empty() {
        builtin_stores().context("failed to link the built-in stores")?
    } else {
        chain_from_config(&config).context("failed to build the route table")?
    };

    let store_names: Vec<&str> = chain.names().map(|n| n.unwrap_or("unnamed")).collect();
    println!("Chain: {}\n", store_names.join(" -> "));

    let cars: Vec<String> = if args.cars.is_empty() {
        SHOPPING_LIST.iter().map(|car| car.to_string()).collect()
    } else {
        args.cars
    };

    let sold = go_shopping(&chain, &cars);
    info!(sold, unavailable = cars.len() - sold, "Shopping finished");

    Ok(())
}
