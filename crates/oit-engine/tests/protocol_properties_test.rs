// ABOUTME: Property tests for generated and edited protocols across random foods
// ABOUTME: Checks idempotent regeneration, dose laws, reindexing, and Food B contiguity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use oit_core::models::{
    DosingStrategy, Food, FoodBThreshold, FoodTag, FoodType, Method, Protocol,
};
use oit_core::ProtocolConfig;
use oit_engine::numeric::{delivered_protein, mul, relative_error};
use oit_engine::protocol::{
    add_food_b_to_protocol, add_step_after, recalculate_step_methods, remove_step,
    toggle_food_type, update_step_daily_amount, update_step_mix_food_amount,
    update_step_target_mg,
};
use oit_engine::{generate_protocol, validate_protocol};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Rounding slack for quantities solved by exact decimal division
const EXACT: Decimal = dec!(0.000000000001);

/// One user edit applied to a standard protocol
#[derive(Debug, Clone)]
enum Edit {
    Target(u32, Decimal),
    Daily(u32, Decimal),
    MixFood(u32, Decimal),
    Toggle,
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (1_u32..=11, 1_i64..3000)
            .prop_map(|(index, tenths)| Edit::Target(index, Decimal::new(tenths, 1))),
        (1_u32..=11, 1_i64..100)
            .prop_map(|(index, tenths)| Edit::Daily(index, Decimal::new(tenths, 1))),
        (1_u32..=11, 1_i64..100)
            .prop_map(|(index, tenths)| Edit::MixFood(index, Decimal::new(tenths, 1))),
        Just(Edit::Toggle),
    ]
}

fn apply(protocol: &Protocol, edit: &Edit) -> Protocol {
    match edit {
        Edit::Target(index, value) => {
            update_step_target_mg(protocol, *index, &value.to_string())
        }
        Edit::Daily(index, value) => {
            update_step_daily_amount(protocol, *index, &value.to_string())
        }
        Edit::MixFood(index, value) => {
            update_step_mix_food_amount(protocol, *index, &value.to_string())
        }
        Edit::Toggle => toggle_food_type(protocol, FoodTag::A),
    }
}

/// Quantities a single edit must leave alone
fn assert_hold_two(
    before: &Protocol,
    after: &Protocol,
    edit: &Edit,
) -> Result<(), TestCaseError> {
    let mg_per_unit = after.food_a.mg_per_unit();
    match edit {
        Edit::Target(index, value) => {
            let (old, new) = (before.step(*index).unwrap(), after.step(*index).unwrap());
            prop_assert_eq!(new.target_mg, *value);
            match (old.dilution(), new.dilution()) {
                (Some(old_mix), Some(new_mix)) => {
                    prop_assert_eq!(new_mix.mix_food_amount, old_mix.mix_food_amount);
                    prop_assert_eq!(new.daily_amount, old.daily_amount);
                }
                (None, None) => {
                    let delivered = mul(new.daily_amount, mg_per_unit);
                    prop_assert!(relative_error(delivered, *value) <= EXACT);
                }
                _ => return Err(TestCaseError::fail("target edit changed the method")),
            }
        }
        Edit::Daily(index, value) => {
            let (old, new) = (before.step(*index).unwrap(), after.step(*index).unwrap());
            prop_assert_eq!(new.daily_amount, *value);
            match (old.dilution(), new.dilution()) {
                (Some(old_mix), Some(new_mix)) => {
                    prop_assert_eq!(new_mix.mix_food_amount, old_mix.mix_food_amount);
                    prop_assert_eq!(new.target_mg, old.target_mg);
                }
                (None, None) => prop_assert_eq!(new.target_mg, mul(*value, mg_per_unit)),
                _ => return Err(TestCaseError::fail("daily amount edit changed the method")),
            }
        }
        Edit::MixFood(index, value) => {
            let (old, new) = (before.step(*index).unwrap(), after.step(*index).unwrap());
            if old.is_dilute() {
                prop_assert_eq!(new.dilution().unwrap().mix_food_amount, *value);
                prop_assert_eq!(new.target_mg, old.target_mg);
                prop_assert_eq!(new.daily_amount, old.daily_amount);
            } else {
                prop_assert_eq!(after, before);
            }
        }
        Edit::Toggle => {
            prop_assert_eq!(after.food_a.food_type, before.food_a.food_type.toggled());
            for (old, new) in before.steps.iter().zip(&after.steps) {
                prop_assert_eq!(new.target_mg, old.target_mg);
                prop_assert_eq!(new.daily_amount, old.daily_amount);
                prop_assert_eq!(
                    new.dilution().map(|mix| mix.mix_food_amount),
                    old.dilution().map(|mix| mix.mix_food_amount)
                );
            }
        }
    }
    Ok(())
}

/// Dose relations every step must satisfy
fn assert_step_invariants(protocol: &Protocol) -> Result<(), TestCaseError> {
    let food = &protocol.food_a;
    let mg_per_unit = food.mg_per_unit();
    for step in &protocol.steps {
        match &step.method {
            Method::Direct => {
                let delivered = mul(step.daily_amount, mg_per_unit);
                prop_assert!(relative_error(delivered, step.target_mg) <= EXACT);
            }
            Method::Dilute(dilution) => {
                prop_assert_eq!(
                    dilution.servings,
                    dilution.mix_food_amount * mg_per_unit / step.target_mg
                );
                let delivered = delivered_protein(
                    mul(dilution.mix_food_amount, mg_per_unit),
                    step.daily_amount,
                    dilution.total_volume(food.food_type),
                );
                prop_assert!(
                    relative_error(delivered, step.target_mg) <= protocol.config.protein_tolerance,
                    "step {} delivers {} for {}", step.step_index, delivered, step.target_mg
                );
            }
        }
    }
    Ok(())
}

fn food(name: &str, protein_tenths: i64, serving: i64, liquid: bool) -> Food {
    let food_type = if liquid {
        FoodType::Liquid
    } else {
        FoodType::Solid
    };
    Food::new(
        name,
        food_type,
        Decimal::new(protein_tenths, 1),
        Decimal::from(serving),
    )
}

fn protocol_for(protein_tenths: i64, serving: i64, liquid: bool, slow: bool) -> Protocol {
    let strategy = if slow {
        DosingStrategy::Slow
    } else {
        DosingStrategy::Standard
    };
    generate_protocol(
        food("Food A", protein_tenths, serving, liquid),
        strategy,
        &ProtocolConfig::default(),
    )
}

fn is_contiguous(protocol: &Protocol) -> bool {
    (1_u32..)
        .zip(&protocol.steps)
        .all(|(expected, step)| step.step_index == expected)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn regeneration_is_idempotent(
        protein in 1_i64..500,
        serving in 10_i64..250,
        liquid in any::<bool>(),
        slow in any::<bool>(),
    ) {
        let protocol = protocol_for(protein, serving, liquid, slow);
        let once = recalculate_step_methods(&protocol);
        prop_assert_eq!(&once, &protocol);
        prop_assert_eq!(recalculate_step_methods(&once), once);
    }

    #[test]
    fn steps_deliver_their_targets(
        protein in 1_i64..500,
        serving in 10_i64..250,
        liquid in any::<bool>(),
        slow in any::<bool>(),
    ) {
        let protocol = protocol_for(protein, serving, liquid, slow);
        let mg_per_unit = protocol.food_a.mg_per_unit();
        let tolerance = protocol.config.protein_tolerance;

        for step in &protocol.steps {
            match &step.method {
                Method::Direct => {
                    let delivered = step.daily_amount * mg_per_unit;
                    prop_assert!((delivered - step.target_mg).abs() / step.target_mg <= tolerance);
                }
                Method::Dilute(dilution) => {
                    prop_assert_eq!(
                        dilution.servings,
                        dilution.mix_food_amount * mg_per_unit / step.target_mg
                    );
                    prop_assert!(dilution.servings >= protocol.config.min_servings_for_mix);
                }
            }
        }
    }

    #[test]
    fn structural_edits_keep_indices_contiguous(
        protein in 1_i64..500,
        serving in 10_i64..250,
        position in 1_u32..12,
    ) {
        let protocol = protocol_for(protein, serving, false, false);
        let added = add_step_after(&protocol, position);
        prop_assert_eq!(added.steps.len(), protocol.steps.len() + 1);
        prop_assert!(is_contiguous(&added));

        let removed = remove_step(&added, position);
        prop_assert!(is_contiguous(&removed));
        prop_assert_eq!(removed.steps.len(), protocol.steps.len());
    }

    #[test]
    fn food_b_steps_are_contiguous(
        protein in 1_i64..500,
        serving in 10_i64..250,
        b_protein in 1_i64..500,
        b_serving in 10_i64..250,
        b_liquid in any::<bool>(),
        threshold_tenths in 1_i64..100,
    ) {
        let protocol = protocol_for(protein, serving, false, false);
        let food_b = food("Food B", b_protein, b_serving, b_liquid);
        let threshold = FoodBThreshold {
            unit: food_b.unit(),
            amount: Decimal::new(threshold_tenths, 1),
        };
        let with_b = add_food_b_to_protocol(&protocol, food_b, threshold);

        prop_assert!(is_contiguous(&with_b));
        let first_b = with_b
            .steps
            .iter()
            .position(|step| step.food == FoodTag::B)
            .unwrap_or(with_b.steps.len());
        prop_assert!(with_b.steps[..first_b].iter().all(|step| step.food == FoodTag::A));
        prop_assert!(with_b.steps[first_b..].iter().all(|step| step.food == FoodTag::B));

        // Validation must terminate on any shape
        let _ = validate_protocol(&with_b);
    }

    #[test]
    fn edits_keep_dose_relations(
        protein in 1_i64..500,
        serving in 10_i64..250,
        liquid in any::<bool>(),
        edits in prop::collection::vec(edit_strategy(), 1..12),
    ) {
        let mut protocol = protocol_for(protein, serving, liquid, false);
        for edit in &edits {
            let next = apply(&protocol, edit);
            assert_hold_two(&protocol, &next, edit)?;
            assert_step_invariants(&next)?;
            prop_assert!(is_contiguous(&next));
            protocol = next;
        }
    }
}
