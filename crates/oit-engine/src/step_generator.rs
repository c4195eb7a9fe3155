// ABOUTME: Turns protein targets into DIRECT or DILUTE steps and builds default protocols
// ABOUTME: Falls back to DIRECT dosing when a required dilution is infeasible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Step Generator
//!
//! A target is dosed neat unless the Food A strategy demands a dilution or the
//! neat amount is below what a household tool can measure. `DiluteNone`
//! always doses neat, which is also the effective strategy for Food B.

use crate::dilution::find_dilution_candidates;
use crate::numeric::safe_div;
use oit_core::models::{DosingStrategy, Food, FoodAStrategy, FoodTag, Protocol, Step};
use oit_core::ProtocolConfig;
use rust_decimal::Decimal;
use tracing::warn;

/// Generate the step for one target
///
/// Returns `None` when a dilution is required but the search finds no
/// feasible recipe; callers fall back to [`direct_step`].
#[must_use]
pub fn generate_step_for_target(
    target_mg: Decimal,
    step_index: u32,
    food: &Food,
    food_tag: FoodTag,
    strategy: FoodAStrategy,
    di_threshold: Decimal,
    config: &ProtocolConfig,
) -> Option<Step> {
    let neat_amount = neat_amount(target_mg, food);
    let below_floor = neat_amount < config.min_measurable(food.unit());

    let needs_dilution = match strategy {
        FoodAStrategy::DiluteNone => false,
        FoodAStrategy::DiluteAll | FoodAStrategy::DiluteInitial => {
            strategy.requires_dilution(target_mg, di_threshold) || below_floor
        }
    };

    if !needs_dilution {
        return Some(Step::direct(
            step_index,
            target_mg,
            food_tag,
            neat_amount,
            food.unit(),
        ));
    }

    find_dilution_candidates(target_mg, food, config)
        .into_iter()
        .next()
        .map(|best| {
            Step::dilute(
                step_index,
                target_mg,
                food_tag,
                best.daily_amount,
                best.dilution(),
            )
        })
}

/// Generate a step, dosing neat when no dilution is feasible
///
/// The fallback keeps the user's target; the validator reports the resulting
/// impractical amount.
#[must_use]
pub fn generate_step_or_direct(
    target_mg: Decimal,
    step_index: u32,
    food: &Food,
    food_tag: FoodTag,
    strategy: FoodAStrategy,
    di_threshold: Decimal,
    config: &ProtocolConfig,
) -> Step {
    generate_step_for_target(
        target_mg,
        step_index,
        food,
        food_tag,
        strategy,
        di_threshold,
        config,
    )
    .unwrap_or_else(|| {
        warn!(
            food = %food.name,
            target_mg = %target_mg,
            step_index,
            "No feasible dilution; dosing neat"
        );
        direct_step(target_mg, step_index, food, food_tag)
    })
}

/// Neat step for a target
#[must_use]
pub fn direct_step(target_mg: Decimal, step_index: u32, food: &Food, food_tag: FoodTag) -> Step {
    Step::direct(
        step_index,
        target_mg,
        food_tag,
        neat_amount(target_mg, food),
        food.unit(),
    )
}

/// Neat amount of `food` that holds `target_mg` of protein
#[must_use]
pub fn neat_amount(target_mg: Decimal, food: &Food) -> Decimal {
    safe_div(target_mg, food.mg_per_unit())
}

/// Food A steps for every target of a dosing strategy
#[must_use]
pub fn generate_food_a_steps(
    food: &Food,
    dosing_strategy: DosingStrategy,
    strategy: FoodAStrategy,
    di_threshold: Decimal,
    config: &ProtocolConfig,
) -> Vec<Step> {
    (1_u32..)
        .zip(dosing_strategy.targets())
        .map(|(step_index, &target_mg)| {
            generate_step_or_direct(
                target_mg,
                step_index,
                food,
                FoodTag::A,
                strategy,
                di_threshold,
                config,
            )
        })
        .collect()
}

/// Build a protocol for `food` from a dosing strategy's target sequence
#[must_use]
pub fn generate_protocol(
    food: Food,
    dosing_strategy: DosingStrategy,
    config: &ProtocolConfig,
) -> Protocol {
    let food_a_strategy = FoodAStrategy::default();
    let di_threshold = config.default_di_threshold;
    let steps = generate_food_a_steps(&food, dosing_strategy, food_a_strategy, di_threshold, config);

    Protocol {
        dosing_strategy,
        food_a: food,
        food_a_strategy,
        di_threshold,
        food_b: None,
        food_b_threshold: None,
        steps,
        config: config.clone(),
    }
}

/// Build the initial protocol with the standard dosing strategy
#[must_use]
pub fn generate_default_protocol(food: Food, config: &ProtocolConfig) -> Protocol {
    generate_protocol(food, DosingStrategy::Standard, config)
}
