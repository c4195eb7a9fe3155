// ABOUTME: Criterion benchmarks for the dilution search and protocol pipeline
// ABOUTME: Measures candidate enumeration, full generation, and validation cost
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for the calculator engine.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use oit_calculator::core::models::{DosingStrategy, Food, FoodBThreshold, FoodType, Unit};
use oit_calculator::core::{dec, Decimal, ProtocolConfig};
use oit_calculator::engine::protocol::add_food_b_to_protocol;
use oit_calculator::engine::{find_dilution_candidates, generate_protocol, validate_protocol};

fn bench_foods() -> Vec<Food> {
    vec![
        Food::new("Egg powder", FoodType::Solid, dec!(10), dec!(100)),
        Food::new("Peanut flour", FoodType::Solid, dec!(50), dec!(100)),
        Food::new("Milk", FoodType::Liquid, dec!(3.4), dec!(100)),
    ]
}

fn bench_candidate_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_search");
    let config = ProtocolConfig::default();
    let targets: [Decimal; 3] = [dec!(1), dec!(12.5), dec!(80)];

    for food in bench_foods() {
        for target in targets {
            group.bench_with_input(
                BenchmarkId::new(food.name.clone(), target),
                &target,
                |b, &target| {
                    b.iter(|| find_dilution_candidates(black_box(target), &food, &config));
                },
            );
        }
    }
    group.finish();
}

fn bench_generate_protocol(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_protocol");
    let config = ProtocolConfig::default();

    for strategy in [DosingStrategy::Standard, DosingStrategy::Slow] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{strategy:?}")),
            &strategy,
            |b, &strategy| {
                b.iter(|| generate_protocol(black_box(bench_foods()[0].clone()), strategy, &config));
            },
        );
    }
    group.finish();
}

fn bench_validate_protocol(c: &mut Criterion) {
    let config = ProtocolConfig::default();
    let foods = bench_foods();
    let protocol = add_food_b_to_protocol(
        &generate_protocol(foods[0].clone(), DosingStrategy::Slow, &config),
        foods[1].clone(),
        FoodBThreshold {
            unit: Unit::Grams,
            amount: dec!(0.2),
        },
    );

    c.bench_function("validate_protocol_with_food_b", |b| {
        b.iter(|| validate_protocol(black_box(&protocol)));
    });
}

criterion_group!(
    benches,
    bench_candidate_search,
    bench_generate_protocol,
    bench_validate_protocol
);
criterion_main!(benches);
