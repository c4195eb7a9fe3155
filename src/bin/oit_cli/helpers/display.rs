// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Output formatting helpers for oit-cli
// ABOUTME: Renders protocols as step tables and warnings as lines or JSON

use anyhow::Result;
use oit_calculator::core::formatters::{format_amount, format_mg, format_servings};
use oit_calculator::core::models::{Protocol, Unit, Warning};
use serde::Serialize;

/// Print any serializable value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print one row per step at display precision
pub fn print_step_table(protocol: &Protocol) {
    let config = &protocol.config;
    println!("\nFood A: {} ({})", protocol.food_a.name, protocol.food_a.food_type);
    if let Some(food_b) = &protocol.food_b {
        println!("Food B: {} ({})", food_b.name, food_b.food_type);
    }
    println!("{}", "=".repeat(86));
    println!(
        "{:>4}  {:<4}  {:>10}  {:<6}  {:>10}  {:>10}  {:>10}  {:>8}",
        "Step", "Food", "Target", "Method", "Daily", "Mix food", "Water", "Servings"
    );
    println!("{}", "-".repeat(86));

    for step in &protocol.steps {
        let daily = format_amount(step.daily_amount, step.daily_amount_unit, config);
        let (mix_food, water, servings) = match (step.dilution(), protocol.food(step.food)) {
            (Some(dilution), Some(food)) => (
                format_amount(dilution.mix_food_amount, food.unit(), config),
                format_amount(dilution.mix_water_amount, Unit::Millilitres, config),
                format_servings(dilution.servings),
            ),
            _ => ("-".to_owned(), "-".to_owned(), "-".to_owned()),
        };
        println!(
            "{:>4}  {:<4}  {:>10}  {:<6}  {:>10}  {:>10}  {:>10}  {:>8}",
            step.step_index,
            step.food.to_string(),
            format_mg(step.target_mg),
            step.method.as_str(),
            daily,
            mix_food,
            water,
            servings
        );
    }
    println!("{}", "=".repeat(86));
}

/// Print warnings one per line, or a note when there are none
pub fn print_warnings(warnings: &[Warning]) {
    if warnings.is_empty() {
        println!("No warnings");
        return;
    }
    let red = warnings.iter().filter(|warning| warning.is_red()).count();
    println!("{} warning(s), {red} red:", warnings.len());
    for warning in warnings {
        println!("  {warning}");
    }
}
