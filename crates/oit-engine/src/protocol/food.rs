// ABOUTME: Edits to Food A / Food B details and solid/liquid toggling
// ABOUTME: Concentration changes propagate to every step dosed from the edited food
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{apply_edit, recalculate::recalculate_step_methods, transition::rebuild_transition};
use crate::numeric::{add, sub};
use oit_core::formatters::parse_decimal;
use oit_core::models::{
    Dilution, Food, FoodBThreshold, FoodTag, FoodType, Method, Protocol, Step, Unit,
};
use oit_core::{ProtocolError, ProtocolResult};
use serde::{Deserialize, Serialize};

/// Fields of a food the user changed; `None` leaves a field as it is
///
/// Numeric fields carry the raw text the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodEdit {
    /// New display name
    pub name: Option<String>,
    /// New protein grams per serving
    pub grams_in_serving: Option<String>,
    /// New serving size
    pub serving_size: Option<String>,
}

impl FoodEdit {
    /// Edit that only renames
    #[must_use]
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether the edit changes the protein concentration
    #[must_use]
    pub const fn changes_concentration(&self) -> bool {
        self.grams_in_serving.is_some() || self.serving_size.is_some()
    }

    fn apply_to(&self, food: &Food) -> ProtocolResult<Food> {
        let grams_in_serving = self
            .grams_in_serving
            .as_deref()
            .map(parse_decimal)
            .transpose()?
            .unwrap_or(food.grams_in_serving);
        let serving_size = self
            .serving_size
            .as_deref()
            .map(parse_decimal)
            .transpose()?
            .unwrap_or(food.serving_size);

        Ok(Food {
            name: self.name.clone().unwrap_or_else(|| food.name.clone()),
            food_type: food.food_type,
            grams_in_serving,
            serving_size,
        })
    }
}

/// Apply a name or composition edit to Food A or Food B
///
/// A rename touches nothing else. A composition change regenerates every
/// Food A step, or for Food B rebuilds the transition since the switch point
/// moves with the concentration.
#[must_use]
pub fn update_food_details(protocol: &Protocol, which: FoodTag, edit: &FoodEdit) -> Protocol {
    apply_edit(protocol, "update_food_details", |protocol| {
        let current = protocol.food(which).ok_or(ProtocolError::FoodBMissing)?;
        let food = edit.apply_to(current)?;

        if !edit.changes_concentration() {
            return Ok(with_food(protocol, which, food));
        }

        Ok(match which {
            FoodTag::A => recalculate_step_methods(&with_food(protocol, FoodTag::A, food)),
            FoodTag::B => update_food_b_and_recalculate(protocol, food),
        })
    })
}

/// Replace Food B and rebuild the transition
///
/// Keeps the current threshold, or uses the configured default when the
/// protocol had no Food B yet.
#[must_use]
pub fn update_food_b_and_recalculate(protocol: &Protocol, food_b: Food) -> Protocol {
    let threshold = protocol.food_b_threshold.clone().unwrap_or_else(|| FoodBThreshold {
        unit: food_b.unit(),
        ..protocol.config.default_food_b_threshold.clone()
    });
    rebuild_transition(protocol, food_b, threshold)
}

/// Flip a food between SOLID and LIQUID
///
/// DIRECT steps only change unit. DILUTE steps keep target, daily amount,
/// and mix food, and re-express the same batch volume under the other volume
/// model: a solid adds no volume, a liquid adds its own.
#[must_use]
pub fn toggle_food_type(protocol: &Protocol, which: FoodTag) -> Protocol {
    apply_edit(protocol, "toggle_food_type", |protocol| {
        let current = protocol.food(which).ok_or(ProtocolError::FoodBMissing)?;
        let food = current.with_type(current.food_type.toggled());

        let mut next = protocol.clone();
        for step in next.steps.iter_mut().filter(|step| step.food == which) {
            *step = toggle_step(step, &food);
        }
        if which == FoodTag::B {
            if let Some(threshold) = next.food_b_threshold.as_mut() {
                threshold.unit = food.unit();
            }
        }
        Ok(with_food(&next, which, food))
    })
}

fn toggle_step(step: &Step, toggled: &Food) -> Step {
    match &step.method {
        Method::Direct => Step {
            daily_amount_unit: toggled.unit(),
            ..step.clone()
        },
        Method::Dilute(dilution) => {
            let mix_water_amount = match toggled.food_type {
                // Was liquid: total = food + water, now all of it counts as water
                FoodType::Solid => add(dilution.mix_water_amount, dilution.mix_food_amount),
                // Was solid: total = water, the food now takes its share
                FoodType::Liquid => sub(dilution.mix_water_amount, dilution.mix_food_amount),
            };
            Step {
                daily_amount_unit: Unit::Millilitres,
                method: Method::Dilute(Dilution {
                    mix_water_amount,
                    ..dilution.clone()
                }),
                ..step.clone()
            }
        }
    }
}

fn with_food(protocol: &Protocol, which: FoodTag, food: Food) -> Protocol {
    let mut next = protocol.clone();
    match which {
        FoodTag::A => next.food_a = food,
        FoodTag::B => next.food_b = Some(food),
    }
    next
}
