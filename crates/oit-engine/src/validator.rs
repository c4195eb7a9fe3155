// ABOUTME: Protocol validator producing red (invalid) and yellow (caution) warnings
// ABOUTME: Checks settings, each step at display precision, and the target sequence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Protocol Validator
//!
//! Validation never fails and never changes the protocol. Warnings are
//! emitted in a fixed order: settings first, then each step in step order,
//! then the target sequence.
//!
//! Step checks run on the amounts a caregiver will actually measure, i.e.
//! every quantity rounded to its unit's display precision.

use crate::numeric::{add, delivered_protein, mul, relative_error, safe_div};
use oit_core::constants::limits::MIN_RECOMMENDED_STEPS;
use oit_core::formatters::{format_amount, format_mg, format_servings, round_for_unit};
use oit_core::models::{
    Dilution, Food, FoodTag, FoodType, Method, Protocol, Step, Unit, Warning, WarningCode,
};
use rust_decimal::Decimal;

/// Validate a protocol
#[must_use]
pub fn validate_protocol(protocol: &Protocol) -> Vec<Warning> {
    let mut warnings = Vec::new();

    check_settings(protocol, &mut warnings);
    for step in &protocol.steps {
        let Some(food) = protocol.food(step.food) else {
            continue;
        };
        match &step.method {
            Method::Direct => check_direct_step(protocol, step, food, &mut warnings),
            Method::Dilute(dilution) => {
                check_dilute_step(protocol, step, dilution, food, &mut warnings);
            }
        }
    }
    check_sequence(&protocol.steps, &mut warnings);

    warnings
}

fn check_settings(protocol: &Protocol, warnings: &mut Vec<Warning>) {
    if protocol.steps.len() < MIN_RECOMMENDED_STEPS {
        warnings.push(Warning::new(
            WarningCode::TooFewSteps,
            format!(
                "Protocol has {} steps; at least {MIN_RECOMMENDED_STEPS} are recommended",
                protocol.steps.len()
            ),
        ));
    }

    let foods = [Some(&protocol.food_a), protocol.food_b.as_ref()];
    for food in foods.into_iter().flatten() {
        if !food.is_usable() {
            warnings.push(Warning::new(
                WarningCode::InvalidProteinConcentration,
                format!("{} has no usable protein concentration", food.name),
            ));
        }
        if food.protein_exceeds_serving() {
            warnings.push(Warning::new(
                WarningCode::ProteinExceedsServing,
                format!(
                    "{} lists more protein ({} g) than its serving size ({})",
                    food.name,
                    food.grams_in_serving.normalize(),
                    food.serving_size.normalize()
                ),
            ));
        }
    }

    if let Some(food_b) = &protocol.food_b {
        if !protocol.has_food_b_steps() {
            warnings.push(Warning::new(
                WarningCode::NoTransitionPoint,
                format!(
                    "No step reaches the threshold for {}; the protocol never transitions",
                    food_b.name
                ),
            ));
        }
    }
}

/// Step quantities at display precision
struct Measured {
    daily_amount: Decimal,
    mix_food_amount: Decimal,
    mix_water_amount: Decimal,
    servings: Decimal,
}

impl Measured {
    fn new(protocol: &Protocol, step: &Step, dilution: &Dilution, food: &Food) -> Self {
        let config = &protocol.config;
        let mix_food_amount = round_for_unit(dilution.mix_food_amount, food.unit(), config);
        Self {
            daily_amount: round_for_unit(step.daily_amount, step.daily_amount_unit, config),
            mix_food_amount,
            mix_water_amount: round_for_unit(dilution.mix_water_amount, Unit::Millilitres, config),
            servings: safe_div(mul(mix_food_amount, food.mg_per_unit()), step.target_mg),
        }
    }

    fn total_volume(&self, food_type: FoodType) -> Decimal {
        match food_type {
            FoodType::Solid => self.mix_water_amount,
            FoodType::Liquid => add(self.mix_food_amount, self.mix_water_amount),
        }
    }
}

fn check_dilute_step(
    protocol: &Protocol,
    step: &Step,
    dilution: &Dilution,
    food: &Food,
    warnings: &mut Vec<Warning>,
) {
    let config = &protocol.config;
    let index = step.step_index;
    let measured = Measured::new(protocol, step, dilution, food);
    let total_volume = measured.total_volume(food.food_type);

    let delivered = delivered_protein(
        mul(measured.mix_food_amount, food.mg_per_unit()),
        measured.daily_amount,
        total_volume,
    );
    if relative_error(delivered, step.target_mg) > config.protein_tolerance {
        warnings.push(Warning::for_step(
            WarningCode::ProteinMismatch,
            index,
            format!(
                "Delivers {} instead of {}",
                format_mg(delivered),
                format_mg(step.target_mg)
            ),
        ));
    }

    if measured.servings < Decimal::ONE {
        warnings.push(Warning::for_step(
            WarningCode::InsufficientServings,
            index,
            format!(
                "Mixture holds {} servings, less than one dose",
                format_servings(measured.servings)
            ),
        ));
    }

    if total_volume < measured.daily_amount {
        warnings.push(Warning::for_step(
            WarningCode::MixVolumeBelowDailyAmount,
            index,
            format!(
                "Mixture volume {} is less than the daily amount {}",
                format_amount(total_volume, Unit::Millilitres, config),
                format_amount(measured.daily_amount, step.daily_amount_unit, config)
            ),
        ));
    }

    if measured.daily_amount <= Decimal::ZERO
        || measured.mix_food_amount <= Decimal::ZERO
        || measured.mix_water_amount < Decimal::ZERO
    {
        warnings.push(Warning::for_step(
            WarningCode::NonPositiveAmount,
            index,
            "Daily amount and mix food must be positive and water cannot be negative",
        ));
    }

    let min_volume = config.min_measurable_volume;
    if measured.mix_food_amount < config.min_measurable(food.unit())
        || measured.daily_amount < min_volume
        || (measured.mix_water_amount > Decimal::ZERO && measured.mix_water_amount < min_volume)
    {
        warnings.push(Warning::for_step(
            WarningCode::BelowMeasurableResolution,
            index,
            "An amount in this mixture is too small to measure reliably at home",
        ));
    }

    if measured.servings >= Decimal::ONE && measured.servings < config.min_servings_for_mix {
        warnings.push(Warning::for_step(
            WarningCode::LowServings,
            index,
            format!(
                "Mixture yields only {} servings",
                format_servings(measured.servings)
            ),
        ));
    }

    if food.food_type == FoodType::Solid && measured.mix_food_amount > Decimal::ZERO {
        let too_concentrated = measured.mix_water_amount <= Decimal::ZERO
            || safe_div(measured.mix_food_amount, measured.mix_water_amount)
                > config.max_solid_concentration;
        if too_concentrated {
            warnings.push(Warning::for_step(
                WarningCode::HighSolidConcentration,
                index,
                format!(
                    "{} in {} water is too concentrated to treat the food's volume as negligible",
                    format_amount(measured.mix_food_amount, Unit::Grams, config),
                    format_amount(measured.mix_water_amount, Unit::Millilitres, config)
                ),
            ));
        }
    }
}

fn check_direct_step(protocol: &Protocol, step: &Step, food: &Food, warnings: &mut Vec<Warning>) {
    let config = &protocol.config;
    let index = step.step_index;
    let daily_amount = round_for_unit(step.daily_amount, step.daily_amount_unit, config);

    let delivered = mul(daily_amount, food.mg_per_unit());
    if relative_error(delivered, step.target_mg) > config.protein_tolerance {
        warnings.push(Warning::for_step(
            WarningCode::ProteinMismatch,
            index,
            format!(
                "{} of {} delivers {} instead of {}",
                format_amount(daily_amount, step.daily_amount_unit, config),
                food.name,
                format_mg(delivered),
                format_mg(step.target_mg)
            ),
        ));
    }

    if daily_amount < config.min_measurable(step.daily_amount_unit) {
        warnings.push(Warning::for_step(
            WarningCode::BelowMeasurableResolution,
            index,
            format!(
                "{} is too small to measure reliably at home",
                format_amount(daily_amount, step.daily_amount_unit, config)
            ),
        ));
    }

    if step.food == FoodTag::A
        && protocol
            .food_a_strategy
            .requires_dilution(step.target_mg, protocol.di_threshold)
    {
        warnings.push(Warning::for_step(
            WarningCode::DilutionUnavailable,
            index,
            format!(
                "No practical dilution delivers {}; dosing neat",
                format_mg(step.target_mg)
            ),
        ));
    }
}

fn check_sequence(steps: &[Step], warnings: &mut Vec<Warning>) {
    for pair in steps.windows(2) {
        let [previous, current] = pair else {
            continue;
        };
        if current.target_mg < previous.target_mg {
            warnings.push(Warning::for_step(
                WarningCode::NonAscendingTarget,
                current.step_index,
                format!(
                    "Target {} is lower than the previous step's {}",
                    format_mg(current.target_mg),
                    format_mg(previous.target_mg)
                ),
            ));
        } else if current.target_mg == previous.target_mg && current.food == previous.food {
            warnings.push(Warning::for_step(
                WarningCode::DuplicateTarget,
                current.step_index,
                format!("Target {} repeats the previous step", format_mg(current.target_mg)),
            ));
        }
    }
}
