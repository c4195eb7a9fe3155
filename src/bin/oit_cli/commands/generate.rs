// ABOUTME: Protocol generation command for oit-cli
// ABOUTME: Builds a protocol from food details, optionally adds Food B, and reports warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::{Context, Result};
use oit_calculator::config::load_protocol_config;
use oit_calculator::core::models::{DosingStrategy, Food, FoodBThreshold, FoodType};
use oit_calculator::engine::protocol::add_food_b_to_protocol;
use oit_calculator::engine::{generate_protocol, validate_protocol};
use oit_calculator::persistence::write_protocol_file;
use rust_decimal::Decimal;
use std::path::PathBuf;
use tracing::info;

use crate::helpers::display::{print_json, print_step_table, print_warnings};

/// Food details as given on the command line
pub struct FoodArgs {
    pub name: String,
    pub protein: Decimal,
    pub serving: Decimal,
    pub liquid: bool,
}

impl FoodArgs {
    fn to_food(&self) -> Food {
        let food_type = if self.liquid {
            FoodType::Liquid
        } else {
            FoodType::Solid
        };
        Food::new(self.name.clone(), food_type, self.protein, self.serving)
    }
}

/// Everything `generate` needs
pub struct GenerateOptions {
    pub food_a: FoodArgs,
    /// Second food and its threshold amount
    pub food_b: Option<(FoodArgs, Decimal)>,
    pub strategy: DosingStrategy,
    pub output: Option<PathBuf>,
    pub table: bool,
}

/// Generate a protocol and print it with its warnings
pub fn run(options: &GenerateOptions) -> Result<()> {
    let config = load_protocol_config().context("Invalid OIT_* configuration")?;

    let food_a = options.food_a.to_food();
    info!(food = %food_a.name, strategy = ?options.strategy, "Generating protocol");
    let mut protocol = generate_protocol(food_a, options.strategy, &config);

    if let Some((food_b_args, amount)) = &options.food_b {
        let food_b = food_b_args.to_food();
        let threshold = FoodBThreshold {
            unit: food_b.unit(),
            amount: *amount,
        };
        info!(food_b = %food_b.name, threshold = %amount, "Adding Food B transition");
        protocol = add_food_b_to_protocol(&protocol, food_b, threshold);
    }

    let warnings = validate_protocol(&protocol);

    if let Some(path) = &options.output {
        write_protocol_file(path, &protocol)?;
        info!(path = %path.display(), "Protocol written");
    }

    if options.table {
        print_step_table(&protocol);
        print_warnings(&warnings);
    } else {
        print_json(&serde_json::json!({
            "protocol": protocol,
            "warnings": warnings,
        }))?;
    }
    Ok(())
}
