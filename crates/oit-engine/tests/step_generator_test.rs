// ABOUTME: Integration tests for step generation and default protocol construction
// ABOUTME: Covers DIRECT/DILUTE selection, strategy handling, and the neat fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{egg_powder, egg_protocol};
use oit_core::models::{DosingStrategy, FoodAStrategy, FoodTag, Method, Unit};
use oit_core::ProtocolConfig;
use oit_engine::step_generator::generate_step_or_direct;
use oit_engine::{generate_protocol, generate_step_for_target};
use rust_decimal_macros::dec;

#[test]
fn test_measurable_target_is_direct() {
    let config = ProtocolConfig::default();
    let step = generate_step_for_target(
        dec!(100),
        1,
        &egg_powder(),
        FoodTag::A,
        FoodAStrategy::DiluteInitial,
        dec!(10),
        &config,
    )
    .expect("direct steps always exist");

    assert_eq!(step.method, Method::Direct);
    assert_eq!(step.daily_amount, dec!(1));
    assert_eq!(step.daily_amount_unit, Unit::Grams);
}

#[test]
fn test_small_target_is_diluted() {
    let config = ProtocolConfig::default();
    let step = generate_step_for_target(
        dec!(1),
        1,
        &egg_powder(),
        FoodTag::A,
        FoodAStrategy::DiluteInitial,
        dec!(10),
        &config,
    )
    .expect("1 mg has a feasible recipe");

    let dilution = step.dilution().expect("diluted");
    assert!(dilution.servings >= config.min_servings_for_mix);
    assert_eq!(step.daily_amount_unit, Unit::Millilitres);
    assert_eq!(step.daily_amount, dec!(0.2));
    assert_eq!(dilution.mix_food_amount, dec!(0.2));
    assert_eq!(dilution.mix_water_amount, dec!(4));
}

#[test]
fn test_unmeasurable_neat_amount_dilutes_above_threshold() {
    // 10 mg is at the DI threshold but 0.1 g cannot be weighed
    let config = ProtocolConfig::default();
    let step = generate_step_for_target(
        dec!(10),
        4,
        &egg_powder(),
        FoodTag::A,
        FoodAStrategy::DiluteInitial,
        dec!(10),
        &config,
    )
    .expect("10 mg has a feasible recipe");

    let dilution = step.dilution().expect("diluted");
    assert_eq!(dilution.mix_food_amount, dec!(0.3));
    assert_eq!(step.daily_amount, dec!(2));
    assert_eq!(dilution.mix_water_amount, dec!(6));
}

#[test]
fn test_dilute_none_never_dilutes() {
    let config = ProtocolConfig::default();
    let step = generate_step_for_target(
        dec!(1),
        1,
        &egg_powder(),
        FoodTag::A,
        FoodAStrategy::DiluteNone,
        dec!(10),
        &config,
    )
    .expect("direct steps always exist");

    assert_eq!(step.method, Method::Direct);
    assert_eq!(step.daily_amount, dec!(0.01));
}

#[test]
fn test_dilute_all_dilutes_large_targets() {
    let config = ProtocolConfig::default();
    let step = generate_step_for_target(
        dec!(20),
        5,
        &egg_powder(),
        FoodTag::A,
        FoodAStrategy::DiluteAll,
        dec!(10),
        &config,
    )
    .expect("20 mg has a feasible recipe");

    assert!(step.is_dilute());
}

#[test]
fn test_infeasible_dilution_returns_none_then_falls_back() {
    let config = ProtocolConfig {
        max_mix_water: dec!(1),
        ..ProtocolConfig::default()
    };
    let food = egg_powder();

    let step = generate_step_for_target(
        dec!(1),
        1,
        &food,
        FoodTag::A,
        FoodAStrategy::DiluteInitial,
        dec!(10),
        &config,
    );
    assert!(step.is_none());

    let fallback = generate_step_or_direct(
        dec!(1),
        1,
        &food,
        FoodTag::A,
        FoodAStrategy::DiluteInitial,
        dec!(10),
        &config,
    );
    assert_eq!(fallback.method, Method::Direct);
    assert_eq!(fallback.target_mg, dec!(1));
    assert_eq!(fallback.daily_amount, dec!(0.01));
}

#[test]
fn test_default_protocol_layout() {
    let protocol = egg_protocol();

    assert_eq!(protocol.steps.len(), 11);
    assert_eq!(protocol.dosing_strategy, DosingStrategy::Standard);
    assert_eq!(protocol.food_a_strategy, FoodAStrategy::DiluteInitial);
    assert_eq!(protocol.di_threshold, dec!(10));
    assert!(protocol.food_b.is_none());

    let methods: Vec<bool> = protocol.steps.iter().map(|s| s.is_dilute()).collect();
    assert_eq!(
        methods,
        vec![true, true, true, true, false, false, false, false, false, false, false]
    );

    for (position, step) in protocol.steps.iter().enumerate() {
        assert_eq!(step.step_index as usize, position + 1);
        assert_eq!(step.food, FoodTag::A);
    }
}

#[test]
fn test_direct_and_dilute_steps_deliver_their_targets() {
    let protocol = generate_protocol(egg_powder(), DosingStrategy::Slow, &ProtocolConfig::default());
    let mg_per_unit = protocol.food_a.mg_per_unit();
    assert_eq!(protocol.steps.len(), 19);

    for step in &protocol.steps {
        match &step.method {
            Method::Direct => {
                let error = (step.daily_amount * mg_per_unit - step.target_mg).abs() / step.target_mg;
                assert!(error <= protocol.config.protein_tolerance);
            }
            Method::Dilute(dilution) => {
                assert_eq!(
                    dilution.servings,
                    dilution.mix_food_amount * mg_per_unit / step.target_mg
                );
            }
        }
    }
}
