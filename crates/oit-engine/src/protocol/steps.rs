// ABOUTME: Single-step field edits and structural step insertion/removal
// ABOUTME: Field edits hold two quantities fixed and solve for the dependent ones
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{apply_edit, locate};
use crate::numeric::{mul, safe_div, sub};
use crate::step_generator::neat_amount;
use oit_core::formatters::parse_decimal;
use oit_core::models::{Dilution, Food, FoodType, Method, Protocol, Step};
use oit_core::{ProtocolError, ProtocolResult};
use rust_decimal::Decimal;

/// Change a step's protein target
///
/// DIRECT recomputes the daily amount. DILUTE keeps the mix food and daily
/// amounts and recomputes servings and mix water.
#[must_use]
pub fn update_step_target_mg(protocol: &Protocol, step_index: u32, value: &str) -> Protocol {
    apply_edit(protocol, "update_step_target_mg", |protocol| {
        let target_mg = parse_decimal(value)?;
        let (position, step) = locate(protocol, step_index)?;
        let food = step_food(protocol, step)?;

        let updated = match &step.method {
            Method::Direct => Step {
                target_mg,
                daily_amount: neat_amount(target_mg, food),
                daily_amount_unit: food.unit(),
                ..step.clone()
            },
            Method::Dilute(dilution) => Step {
                target_mg,
                method: Method::Dilute(solve_dilution(
                    food,
                    target_mg,
                    dilution.mix_food_amount,
                    step.daily_amount,
                )),
                ..step.clone()
            },
        };
        Ok(replace_step(protocol, position, updated))
    })
}

/// Change a step's daily amount
///
/// DIRECT recomputes the target. DILUTE keeps the target and mix food amount
/// and recomputes servings and mix water.
#[must_use]
pub fn update_step_daily_amount(protocol: &Protocol, step_index: u32, value: &str) -> Protocol {
    apply_edit(protocol, "update_step_daily_amount", |protocol| {
        let daily_amount = parse_decimal(value)?;
        let (position, step) = locate(protocol, step_index)?;
        let food = step_food(protocol, step)?;

        let updated = match &step.method {
            Method::Direct => Step {
                target_mg: mul(daily_amount, food.mg_per_unit()),
                daily_amount,
                ..step.clone()
            },
            Method::Dilute(dilution) => Step {
                daily_amount,
                method: Method::Dilute(solve_dilution(
                    food,
                    step.target_mg,
                    dilution.mix_food_amount,
                    daily_amount,
                )),
                ..step.clone()
            },
        };
        Ok(replace_step(protocol, position, updated))
    })
}

/// Change how much food goes into a step's mixture
///
/// Only applies to DILUTE steps. Keeps the target and daily amount and
/// recomputes servings and mix water.
#[must_use]
pub fn update_step_mix_food_amount(protocol: &Protocol, step_index: u32, value: &str) -> Protocol {
    apply_edit(protocol, "update_step_mix_food_amount", |protocol| {
        let mix_food_amount = parse_decimal(value)?;
        let (position, step) = locate(protocol, step_index)?;
        if !step.is_dilute() {
            return Err(ProtocolError::NotDiluted(step_index));
        }
        let food = step_food(protocol, step)?;

        let updated = Step {
            method: Method::Dilute(solve_dilution(
                food,
                step.target_mg,
                mix_food_amount,
                step.daily_amount,
            )),
            ..step.clone()
        };
        Ok(replace_step(protocol, position, updated))
    })
}

/// Duplicate a step directly after itself and renumber
#[must_use]
pub fn add_step_after(protocol: &Protocol, step_index: u32) -> Protocol {
    apply_edit(protocol, "add_step_after", |protocol| {
        let (position, step) = locate(protocol, step_index)?;
        let duplicate = step.clone();

        let mut next = protocol.clone();
        next.steps.insert(position + 1, duplicate);
        Protocol::reindex(&mut next.steps);
        Ok(next)
    })
}

/// Delete a step and renumber; the last remaining step is never removed
#[must_use]
pub fn remove_step(protocol: &Protocol, step_index: u32) -> Protocol {
    apply_edit(protocol, "remove_step", |protocol| {
        let (position, _) = locate(protocol, step_index)?;
        if protocol.steps.len() <= 1 {
            return Ok(protocol.clone());
        }

        let mut next = protocol.clone();
        next.steps.remove(position);
        Protocol::reindex(&mut next.steps);
        Ok(next)
    })
}

/// Recipe delivering `target_mg` from `mix_food_amount` at `daily_amount`
///
/// `servings = mix protein / target`, the batch volume is `servings x daily`,
/// and water is whatever that volume leaves after the food's own volume.
#[must_use]
pub fn solve_dilution(
    food: &Food,
    target_mg: Decimal,
    mix_food_amount: Decimal,
    daily_amount: Decimal,
) -> Dilution {
    let servings = safe_div(mul(mix_food_amount, food.mg_per_unit()), target_mg);
    let total_volume = mul(servings, daily_amount);
    let mix_water_amount = match food.food_type {
        FoodType::Solid => total_volume,
        FoodType::Liquid => sub(total_volume, mix_food_amount),
    };
    Dilution {
        mix_food_amount,
        mix_water_amount,
        servings,
    }
}

fn step_food<'a>(protocol: &'a Protocol, step: &Step) -> ProtocolResult<&'a Food> {
    protocol.food(step.food).ok_or(ProtocolError::FoodBMissing)
}

fn replace_step(protocol: &Protocol, position: usize, step: Step) -> Protocol {
    let mut next = protocol.clone();
    next.steps[position] = step;
    next
}
