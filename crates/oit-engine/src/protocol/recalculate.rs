// ABOUTME: Full and per-step protocol regeneration and the settings edits built on it
// ABOUTME: Strategy changes regenerate targets; threshold and policy changes only methods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::{apply_edit, regenerate_step, transition::add_food_b_to_protocol};
use crate::step_generator::generate_food_a_steps;
use oit_core::formatters::parse_decimal;
use oit_core::models::{DosingStrategy, FoodAStrategy, FoodBThreshold, Protocol};
use tracing::debug;

/// Regenerate every Food A step from the dosing strategy's targets
///
/// Manual step edits are discarded. When Food B is present the transition is
/// run again with its current threshold.
#[must_use]
pub fn recalculate_protocol(protocol: &Protocol) -> Protocol {
    let steps = generate_food_a_steps(
        &protocol.food_a,
        protocol.dosing_strategy,
        protocol.food_a_strategy,
        protocol.di_threshold,
        &protocol.config,
    );
    let food_a_only = Protocol {
        food_b: None,
        food_b_threshold: None,
        steps,
        ..protocol.clone()
    };

    let Some(food_b) = protocol.food_b.clone() else {
        return food_a_only;
    };
    let threshold = protocol
        .food_b_threshold
        .clone()
        .unwrap_or_else(|| FoodBThreshold {
            unit: food_b.unit(),
            ..protocol.config.default_food_b_threshold.clone()
        });
    add_food_b_to_protocol(&food_a_only, food_b, threshold)
}

/// Regenerate each step's method and amounts, keeping targets and food tags
#[must_use]
pub fn recalculate_step_methods(protocol: &Protocol) -> Protocol {
    let steps = protocol
        .steps
        .iter()
        .map(|step| regenerate_step(protocol, step))
        .collect();
    Protocol {
        steps,
        ..protocol.clone()
    }
}

/// Switch dosing strategy and regenerate the protocol from its targets
#[must_use]
pub fn update_dosing_strategy(protocol: &Protocol, dosing_strategy: DosingStrategy) -> Protocol {
    debug!(?dosing_strategy, "Dosing strategy changed");
    recalculate_protocol(&Protocol {
        dosing_strategy,
        ..protocol.clone()
    })
}

/// Switch the Food A dilution policy
#[must_use]
pub fn update_food_a_strategy(protocol: &Protocol, food_a_strategy: FoodAStrategy) -> Protocol {
    debug!(?food_a_strategy, "Food A strategy changed");
    recalculate_step_methods(&Protocol {
        food_a_strategy,
        ..protocol.clone()
    })
}

/// Change the protein dose below which `DiluteInitial` dilutes
#[must_use]
pub fn update_di_threshold(protocol: &Protocol, value: &str) -> Protocol {
    apply_edit(protocol, "update_di_threshold", |protocol| {
        let di_threshold = parse_decimal(value)?;
        Ok(recalculate_step_methods(&Protocol {
            di_threshold,
            ..protocol.clone()
        }))
    })
}
