// ABOUTME: Shared fixtures for engine integration tests
// ABOUTME: Provides reference foods and protocols with hand-checked numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(dead_code, clippy::must_use_candidate)]

use oit_core::models::{Food, FoodType, Protocol};
use oit_core::ProtocolConfig;
use oit_engine::generate_default_protocol;
use rust_decimal_macros::dec;

/// 10 g protein per 100 g serving: 100 mg/g
pub fn egg_powder() -> Food {
    Food::new("Egg powder", FoodType::Solid, dec!(10), dec!(100))
}

/// 25 g protein per 100 g serving: 250 mg/g
pub fn peanut_butter() -> Food {
    Food::new("Peanut butter", FoodType::Solid, dec!(25), dec!(100))
}

/// 3.4 g protein per 100 ml serving: 34 mg/ml
pub fn milk() -> Food {
    Food::new("Milk", FoodType::Liquid, dec!(3.4), dec!(100))
}

/// Standard protocol for [`egg_powder`]
///
/// Targets 1, 2.5, 5 and 10 mg are diluted; 20 mg onward are dosed neat.
pub fn egg_protocol() -> Protocol {
    generate_default_protocol(egg_powder(), &ProtocolConfig::default())
}
