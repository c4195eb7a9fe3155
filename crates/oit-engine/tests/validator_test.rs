// ABOUTME: Integration tests for protocol validation
// ABOUTME: Verifies red/yellow classification, per-step checks, and emission order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{egg_powder, egg_protocol};
use oit_core::models::{
    Dilution, DosingStrategy, Food, FoodTag, FoodType, Protocol, Severity, Step, Unit, Warning,
    WarningCode,
};
use oit_core::ProtocolConfig;
use oit_engine::protocol::{add_step_after, update_step_target_mg};
use oit_engine::{generate_protocol, validate_protocol};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn single_step(step: Step) -> Protocol {
    Protocol {
        steps: vec![step],
        ..egg_protocol()
    }
}

fn codes(warnings: &[Warning]) -> Vec<WarningCode> {
    warnings.iter().map(|w| w.code).collect()
}

fn step_codes(warnings: &[Warning], step_index: u32) -> Vec<WarningCode> {
    warnings
        .iter()
        .filter(|w| w.step_index == Some(step_index))
        .map(|w| w.code)
        .collect()
}

#[test]
fn test_generated_protocol_is_clean() {
    assert!(validate_protocol(&egg_protocol()).is_empty());
}

#[test]
fn test_high_solid_concentration_is_yellow() {
    // 10 g in 10 ml is far above 5% w/v but otherwise a sound recipe
    let protocol = single_step(Step::dilute(
        1,
        dec!(100),
        FoodTag::A,
        dec!(1),
        Dilution {
            mix_food_amount: dec!(10),
            mix_water_amount: dec!(10),
            servings: dec!(10),
        },
    ));

    let warnings = validate_protocol(&protocol);
    assert_eq!(
        codes(&warnings),
        vec![WarningCode::TooFewSteps, WarningCode::HighSolidConcentration]
    );
    assert_eq!(warnings[1].severity, Severity::Yellow);
    assert_eq!(warnings[1].step_index, Some(1));
}

#[test]
fn test_dilute_checks_emit_in_order() {
    // 0.5 g holds 50 mg: half a dose, and 0.5 ml cannot supply 1 ml a day
    let protocol = single_step(Step::dilute(
        1,
        dec!(100),
        FoodTag::A,
        dec!(1),
        Dilution {
            mix_food_amount: dec!(0.5),
            mix_water_amount: dec!(0.5),
            servings: dec!(0.5),
        },
    ));

    let warnings = validate_protocol(&protocol);
    assert_eq!(
        codes(&warnings),
        vec![
            WarningCode::TooFewSteps,
            WarningCode::InsufficientServings,
            WarningCode::MixVolumeBelowDailyAmount,
            WarningCode::HighSolidConcentration,
        ]
    );
    assert!(warnings[1].is_red());
    assert!(warnings[2].is_red());
}

#[test]
fn test_low_servings_and_non_positive_amounts() {
    // 0.2 g = 20 mg for a 10 mg target: two servings
    let low = single_step(Step::dilute(
        1,
        dec!(10),
        FoodTag::A,
        dec!(2),
        Dilution {
            mix_food_amount: dec!(0.2),
            mix_water_amount: dec!(4),
            servings: dec!(2),
        },
    ));
    assert_eq!(step_codes(&validate_protocol(&low), 1), vec![WarningCode::LowServings]);

    let negative = single_step(Step::dilute(
        1,
        dec!(1),
        FoodTag::A,
        dec!(0.2),
        Dilution {
            mix_food_amount: dec!(0.2),
            mix_water_amount: dec!(-1),
            servings: dec!(20),
        },
    ));
    let found = step_codes(&validate_protocol(&negative), 1);
    assert!(found.contains(&WarningCode::NonPositiveAmount));
    assert!(found.contains(&WarningCode::MixVolumeBelowDailyAmount));
}

#[test]
fn test_protein_mismatch_uses_rounded_amounts() {
    // 0.025 g rounds to 0.03 g at two decimals: 3 mg instead of 2.5 mg
    let protocol = single_step(Step::direct(
        1,
        dec!(2.5),
        FoodTag::A,
        dec!(0.025),
        Unit::Grams,
    ));
    let found = step_codes(&validate_protocol(&protocol), 1);
    assert_eq!(found[0], WarningCode::ProteinMismatch);
    assert!(found.contains(&WarningCode::BelowMeasurableResolution));
}

#[test]
fn test_edited_targets_are_judged_by_their_recipe() {
    // A DILUTE target edit re-solves the recipe, so the dose stays right
    let protocol = egg_protocol();
    let mut edited = update_step_target_mg(&protocol, 1, "2");
    assert!(!validate_protocol(&edited)
        .iter()
        .any(|w| w.step_index == Some(1) && w.is_red()));

    // A raw target change on a DIRECT step leaves 0.2 g delivering 20 mg
    edited.steps[4].target_mg = dec!(40);
    let found = step_codes(&validate_protocol(&edited), 5);
    assert_eq!(found, vec![WarningCode::ProteinMismatch]);
}

#[test]
fn test_dilution_unavailable_on_fallback() {
    let config = ProtocolConfig {
        max_mix_water: dec!(1),
        ..ProtocolConfig::default()
    };
    let protocol = generate_protocol(egg_powder(), DosingStrategy::Standard, &config);

    let found = step_codes(&validate_protocol(&protocol), 1);
    assert_eq!(
        found,
        vec![
            WarningCode::BelowMeasurableResolution,
            WarningCode::DilutionUnavailable
        ]
    );
}

#[test]
fn test_food_settings_come_first() {
    let broken = Food::new("Broken", FoodType::Solid, dec!(10), Decimal::ZERO);
    let protocol = generate_protocol(broken, DosingStrategy::Standard, &ProtocolConfig::default());

    let warnings = validate_protocol(&protocol);
    assert_eq!(warnings[0].code, WarningCode::InvalidProteinConcentration);
    assert_eq!(warnings[1].code, WarningCode::ProteinExceedsServing);
    assert!(warnings[0].is_red());
    assert!(warnings[0].step_index.is_none());
}

#[test]
fn test_sequence_warnings_follow_step_warnings() {
    let mut protocol = egg_protocol();
    protocol.steps.swap(5, 6);
    for (position, step) in (1_u32..).zip(protocol.steps.iter_mut()) {
        step.step_index = position;
    }

    let warnings = validate_protocol(&protocol);
    let last = warnings.last().expect("a sequence warning");
    assert_eq!(last.code, WarningCode::NonAscendingTarget);
    assert_eq!(last.step_index, Some(7));
}

#[test]
fn test_duplicate_target_after_add_step() {
    let protocol = add_step_after(&egg_protocol(), 5);
    let warnings = validate_protocol(&protocol);
    assert_eq!(codes(&warnings), vec![WarningCode::DuplicateTarget]);
    assert_eq!(warnings[0].step_index, Some(6));
}

#[test]
fn test_warning_display() {
    let warning = Warning::for_step(WarningCode::LowServings, 3, "Mixture yields only 2 servings");
    assert_eq!(warning.to_string(), "[yellow] step 3: Mixture yields only 2 servings");
}
