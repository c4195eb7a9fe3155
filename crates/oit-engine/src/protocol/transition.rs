// ABOUTME: Food B transition: find the switch point, build Food B steps, tear down
// ABOUTME: Any change to Food B or its threshold rebuilds the transition from scratch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Food B Transition
//!
//! The transition step is the first step whose target reaches the threshold
//! amount of Food B. That step stays on Food A and its target is repeated as
//! the first Food B step, so the dose never jumps at the switch. Every later
//! step becomes a DIRECT Food B step at its original target.
//!
//! Because the switch point depends on Food B's concentration, edits never
//! patch an existing transition: they strip Food B and add it again.

use super::{apply_edit, effective_strategy, recalculate::recalculate_step_methods};
use crate::numeric::mul;
use crate::step_generator::{direct_step, generate_step_or_direct};
use oit_core::formatters::parse_decimal;
use oit_core::models::{Food, FoodBThreshold, FoodTag, Protocol, Step};
use oit_core::ProtocolError;
use tracing::debug;

/// Add Food B, switching to it at the first step reaching `threshold`
///
/// Existing Food B steps are first converted back to Food A. When no step
/// reaches the threshold, Food B is still recorded so the validator can
/// report the missing transition, and the steps stay on Food A.
#[must_use]
pub fn add_food_b_to_protocol(
    protocol: &Protocol,
    food_b: Food,
    threshold: FoodBThreshold,
) -> Protocol {
    let base = strip_food_b(protocol);
    let threshold_mg = mul(threshold.amount, food_b.mg_per_unit());

    let Some(transition) = base
        .steps
        .iter()
        .position(|step| step.target_mg >= threshold_mg)
    else {
        debug!(
            food_b = %food_b.name,
            threshold_mg = %threshold_mg,
            "No step reaches the Food B threshold"
        );
        return Protocol {
            food_b: Some(food_b),
            food_b_threshold: Some(threshold),
            ..base
        };
    };

    let mut steps: Vec<Step> = base.steps[..=transition].to_vec();
    steps.extend(
        base.steps[transition..]
            .iter()
            .map(|step| direct_step(step.target_mg, 0, &food_b, FoodTag::B)),
    );
    Protocol::reindex(&mut steps);

    debug!(
        food_b = %food_b.name,
        transition_step = transition + 1,
        "Food B transition built"
    );

    Protocol {
        food_b: Some(food_b),
        food_b_threshold: Some(threshold),
        steps,
        ..base
    }
}

/// Drop Food B and return its steps to Food A
#[must_use]
pub fn remove_food_b(protocol: &Protocol) -> Protocol {
    strip_food_b(protocol)
}

/// Change the Food B threshold amount and rebuild the transition
#[must_use]
pub fn update_food_b_threshold(protocol: &Protocol, amount: &str) -> Protocol {
    apply_edit(protocol, "update_food_b_threshold", |protocol| {
        let amount = parse_decimal(amount)?;
        let food_b = protocol
            .food_b
            .clone()
            .ok_or(ProtocolError::FoodBMissing)?;
        let unit = protocol
            .food_b_threshold
            .as_ref()
            .map_or_else(|| food_b.unit(), |threshold| threshold.unit);

        Ok(rebuild_transition(
            protocol,
            food_b,
            FoodBThreshold { unit, amount },
        ))
    })
}

/// Tear down Food B, recompute Food A, and run the transition again
pub(crate) fn rebuild_transition(
    protocol: &Protocol,
    food_b: Food,
    threshold: FoodBThreshold,
) -> Protocol {
    let food_a_only = recalculate_step_methods(&strip_food_b(protocol));
    add_food_b_to_protocol(&food_a_only, food_b, threshold)
}

/// Protocol without Food B, every step valid for Food A
///
/// The first Food B step duplicates the transition target, so it is dropped
/// when it repeats the preceding Food A target; the remaining Food B steps
/// are regenerated as Food A steps.
pub(crate) fn strip_food_b(protocol: &Protocol) -> Protocol {
    let food_a_only = Protocol {
        food_b: None,
        food_b_threshold: None,
        steps: Vec::new(),
        ..protocol.clone()
    };

    let mut steps: Vec<Step> = Vec::with_capacity(protocol.steps.len());
    let mut seen_food_b = false;
    for step in &protocol.steps {
        match step.food {
            FoodTag::A => steps.push(step.clone()),
            FoodTag::B => {
                let is_transition_duplicate = !seen_food_b
                    && steps
                        .last()
                        .is_some_and(|previous| previous.target_mg == step.target_mg);
                seen_food_b = true;
                if is_transition_duplicate {
                    continue;
                }
                steps.push(generate_step_or_direct(
                    step.target_mg,
                    step.step_index,
                    &food_a_only.food_a,
                    FoodTag::A,
                    effective_strategy(&food_a_only, FoodTag::A),
                    food_a_only.di_threshold,
                    &food_a_only.config,
                ));
            }
        }
    }
    Protocol::reindex(&mut steps);

    Protocol {
        steps,
        ..food_a_only
    }
}
