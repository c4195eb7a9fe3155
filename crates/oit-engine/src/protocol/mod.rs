// ABOUTME: Pure protocol mutators, one per user edit
// ABOUTME: Each returns a new protocol with every derived field consistent again
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Protocol Mutators
//!
//! Every function here has the shape `(&Protocol, args) -> Protocol`. Edits
//! never fail from the caller's point of view: unparseable numbers, unknown
//! step indices, and edits that do not apply return the input unchanged.
//! Inconsistent but well-formed results (an impractical amount, a missing
//! dilution) are kept and left to the validator to report.
//!
//! ## Hold two, solve the third
//!
//! Single-field step edits keep the two quantities the user did not touch and
//! recompute the rest:
//!
//! | Edit            | DIRECT keeps | DILUTE keeps             | DILUTE recomputes          |
//! |-----------------|--------------|--------------------------|----------------------------|
//! | target          | -            | mix food, daily amount   | servings, mix water        |
//! | daily amount    | -            | target, mix food         | servings, mix water        |
//! | mix food amount | n/a          | target, daily amount     | servings, mix water        |

/// Food edits and solid/liquid toggling
pub mod food;
/// Whole-protocol and per-step regeneration, plus settings edits
pub mod recalculate;
/// Single-step edits and structural step changes
pub mod steps;
/// Food B transition build, rebuild, and removal
pub mod transition;

pub use food::{toggle_food_type, update_food_b_and_recalculate, update_food_details, FoodEdit};
pub use recalculate::{
    recalculate_protocol, recalculate_step_methods, update_di_threshold, update_dosing_strategy,
    update_food_a_strategy,
};
pub use steps::{
    add_step_after, remove_step, update_step_daily_amount, update_step_mix_food_amount,
    update_step_target_mg,
};
pub use transition::{add_food_b_to_protocol, remove_food_b, update_food_b_threshold};

use crate::step_generator::generate_step_or_direct;
use oit_core::models::{FoodAStrategy, FoodTag, Protocol, Step};
use oit_core::{ProtocolError, ProtocolResult};
use tracing::debug;

/// Run a fallible edit, keeping the original protocol if it is rejected
pub(crate) fn apply_edit<F>(protocol: &Protocol, operation: &'static str, edit: F) -> Protocol
where
    F: FnOnce(&Protocol) -> ProtocolResult<Protocol>,
{
    edit(protocol).unwrap_or_else(|error| {
        debug!(operation, %error, "Edit rejected; protocol unchanged");
        protocol.clone()
    })
}

/// Position and value of the step with a 1-based index
pub(crate) fn locate(protocol: &Protocol, step_index: u32) -> ProtocolResult<(usize, &Step)> {
    protocol
        .steps
        .iter()
        .enumerate()
        .find(|(_, step)| step.step_index == step_index)
        .ok_or(ProtocolError::StepNotFound(step_index))
}

/// Dilution policy a tagged step is generated with
pub(crate) fn effective_strategy(protocol: &Protocol, food_tag: FoodTag) -> FoodAStrategy {
    match food_tag {
        FoodTag::A => protocol.food_a_strategy,
        FoodTag::B => FoodAStrategy::DiluteNone,
    }
}

/// Regenerate a step's method and derived fields, keeping its target and tag
pub(crate) fn regenerate_step(protocol: &Protocol, step: &Step) -> Step {
    let Some(food) = protocol.food(step.food) else {
        return step.clone();
    };
    generate_step_or_direct(
        step.target_mg,
        step.step_index,
        food,
        step.food,
        effective_strategy(protocol, step.food),
        protocol.di_threshold,
        &protocol.config,
    )
}
