// ABOUTME: Dilution candidate search for protein targets below measuring resolution
// ABOUTME: Enumerates mix-food x daily-amount trials, filters feasibility, and ranks recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Dilution Candidate Search
//!
//! A target that is too small to weigh neat is delivered as a measured volume
//! of a food-in-water mixture. The search walks every trial mix-food amount
//! against every trial daily amount and keeps the recipes that:
//!
//! - yield at least `min_servings_for_mix` daily doses,
//! - only ask for amounts a household scale or syringe can measure,
//! - need between `min_measurable_volume` and `max_mix_water` ml of water,
//! - deliver the target within `protein_tolerance` once the water is rounded.
//!
//! ## Volume model
//!
//! Solids are assumed to add no volume (`total = water`); liquids add their
//! own volume (`total = food + water`).
//!
//! ## Ranking
//!
//! For solids, recipes dilute enough to keep the w/v ratio at or under
//! `max_solid_concentration` rank first. Then smaller mix-food amount, smaller
//! daily amount, smaller total volume, and smaller water volume win.

use crate::numeric::{delivered_protein, mul, relative_error, safe_div};
use oit_core::formatters::round_for_unit;
use oit_core::models::{Candidate, Food, FoodType, Unit};
use oit_core::ProtocolConfig;
use rust_decimal::Decimal;
use tracing::debug;

/// Enumerate feasible dilution recipes for `target_mg`, best first
///
/// Returns an empty list when no recipe satisfies every constraint, when the
/// target is not positive, or when the food carries no protein.
#[must_use]
pub fn find_dilution_candidates(
    target_mg: Decimal,
    food: &Food,
    config: &ProtocolConfig,
) -> Vec<Candidate> {
    let mg_per_unit = food.mg_per_unit();
    if target_mg <= Decimal::ZERO || mg_per_unit <= Decimal::ZERO {
        return Vec::new();
    }

    let food_floor = config.min_measurable(food.unit());
    let mut candidates = Vec::new();

    for &mix_food_amount in config.mix_candidates(food.food_type) {
        if mix_food_amount < food_floor {
            continue;
        }
        let mix_protein_mg = mul(mix_food_amount, mg_per_unit);
        let servings = safe_div(mix_protein_mg, target_mg);
        if servings < config.min_servings_for_mix {
            continue;
        }

        for &daily_amount in &config.daily_amount_candidates {
            let trial = Trial {
                target_mg,
                food_type: food.food_type,
                mix_food_amount,
                mix_protein_mg,
                servings,
                daily_amount,
            };
            if let Some(candidate) = trial.evaluate(config) {
                candidates.push(candidate);
            }
        }
    }

    rank_candidates(&mut candidates, target_mg, food, config);

    debug!(
        food = %food.name,
        target_mg = %target_mg,
        candidates = candidates.len(),
        "Dilution search complete"
    );

    candidates
}

/// One mix-food x daily-amount combination under evaluation
struct Trial {
    target_mg: Decimal,
    food_type: FoodType,
    mix_food_amount: Decimal,
    mix_protein_mg: Decimal,
    servings: Decimal,
    daily_amount: Decimal,
}

impl Trial {
    fn evaluate(&self, config: &ProtocolConfig) -> Option<Candidate> {
        if self.daily_amount < config.min_measurable_volume {
            return None;
        }

        let exact_total = mul(self.servings, self.daily_amount);
        let exact_water = match self.food_type {
            FoodType::Solid => exact_total,
            FoodType::Liquid => exact_total.checked_sub(self.mix_food_amount)?,
        };
        let mix_water_amount = round_for_unit(exact_water, Unit::Millilitres, config);
        if mix_water_amount < Decimal::ZERO
            || mix_water_amount < config.min_measurable_volume
            || mix_water_amount > config.max_mix_water
        {
            return None;
        }

        let mix_total_volume = match self.food_type {
            FoodType::Solid => mix_water_amount,
            FoodType::Liquid => self.mix_food_amount + mix_water_amount,
        };
        let delivered = delivered_protein(self.mix_protein_mg, self.daily_amount, mix_total_volume);
        if relative_error(delivered, self.target_mg) > config.protein_tolerance {
            return None;
        }

        Some(Candidate {
            mix_food_amount: self.mix_food_amount,
            mix_water_amount,
            daily_amount: self.daily_amount,
            mix_total_volume,
            servings: self.servings,
        })
    }
}

/// Stable ascending sort by preference
fn rank_candidates(
    candidates: &mut [Candidate],
    target_mg: Decimal,
    food: &Food,
    config: &ProtocolConfig,
) {
    // Smallest daily amount that keeps a solid mixture under the w/v cap
    let low_concentration_floor = match food.food_type {
        FoodType::Solid => Some(safe_div(
            target_mg,
            mul(config.max_solid_concentration, food.mg_per_unit()),
        )),
        FoodType::Liquid => None,
    };

    candidates.sort_by_key(|candidate| {
        let too_concentrated =
            low_concentration_floor.is_some_and(|floor| candidate.daily_amount < floor);
        (
            too_concentrated,
            candidate.mix_food_amount,
            candidate.daily_amount,
            candidate.mix_total_volume,
            candidate.mix_water_amount,
        )
    });
}
