// ABOUTME: OIT CLI - command-line front end for the protocol calculator
// ABOUTME: Generates protocols from food details and validates saved protocol files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Standard protocol for a peanut butter with 25 g protein per 100 g
//! oit-cli generate --name "Peanut butter" --protein 25 --serving 100
//!
//! # Slow protocol for milk, printed as a table
//! oit-cli generate --name Milk --protein 3.4 --serving 100 --liquid --strategy slow --table
//!
//! # Transition to a second food once 0.5 g of it reaches the target
//! oit-cli generate --name "Egg powder" --protein 10 --serving 100 \
//!     --food-b-name "Peanut butter" --food-b-protein 25 --food-b-serving 100 \
//!     --food-b-threshold 0.5 --output protocol.json
//!
//! # Check a saved protocol; exits non-zero when any red warning is found
//! oit-cli validate protocol.json
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use oit_calculator::logging::LoggingConfig;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, Level};

use commands::generate::{FoodArgs, GenerateOptions};
use helpers::parse::parse_dosing_strategy;
use oit_calculator::core::models::DosingStrategy;

#[derive(Parser)]
#[command(
    name = "oit-cli",
    about = "Oral immunotherapy protocol calculator",
    long_about = "Generate oral immunotherapy dosing protocols and validate saved protocol files."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate a protocol for a food
    Generate {
        /// Food name
        #[arg(long)]
        name: String,

        /// Grams of protein per serving
        #[arg(long)]
        protein: Decimal,

        /// Serving size in grams (solid) or millilitres (liquid)
        #[arg(long)]
        serving: Decimal,

        /// Food is a liquid measured in millilitres
        #[arg(long)]
        liquid: bool,

        /// Dosing strategy (standard, slow)
        #[arg(long, default_value = "standard", value_parser = parse_dosing_strategy)]
        strategy: DosingStrategy,

        /// Name of a second food to transition to
        #[arg(long, requires_all = ["food_b_protein", "food_b_serving", "food_b_threshold"])]
        food_b_name: Option<String>,

        /// Grams of protein per serving of the second food
        #[arg(long, requires = "food_b_name")]
        food_b_protein: Option<Decimal>,

        /// Serving size of the second food
        #[arg(long, requires = "food_b_name")]
        food_b_serving: Option<Decimal>,

        /// Second food is a liquid
        #[arg(long, requires = "food_b_name")]
        food_b_liquid: bool,

        /// Neat amount of the second food at which dosing switches to it
        #[arg(long, requires = "food_b_name")]
        food_b_threshold: Option<Decimal>,

        /// Also write the protocol JSON to this file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print a step table instead of JSON
        #[arg(long)]
        table: bool,
    },

    /// Validate a saved protocol file
    Validate {
        /// Protocol JSON file
        file: PathBuf,

        /// Print a step table before the warnings
        #[arg(long)]
        table: bool,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose {
        logging.with_level(Level::DEBUG)
    } else {
        logging
    };
    logging.init()?;

    info!("OIT protocol calculator CLI");

    match cli.command {
        Command::Generate {
            name,
            protein,
            serving,
            liquid,
            strategy,
            food_b_name,
            food_b_protein,
            food_b_serving,
            food_b_liquid,
            food_b_threshold,
            output,
            table,
        } => {
            let food_a = FoodArgs {
                name,
                protein,
                serving,
                liquid,
            };
            let food_b = match (food_b_name, food_b_protein, food_b_serving, food_b_threshold) {
                (Some(name), Some(protein), Some(serving), Some(threshold)) => Some((
                    FoodArgs {
                        name,
                        protein,
                        serving,
                        liquid: food_b_liquid,
                    },
                    threshold,
                )),
                _ => None,
            };
            commands::generate::run(&GenerateOptions {
                food_a,
                food_b,
                strategy,
                output,
                table,
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate { file, table } => {
            let has_red = commands::validate::run(&file, table)?;
            Ok(if has_red {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}
