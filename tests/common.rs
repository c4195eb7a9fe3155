// ABOUTME: Shared test utilities and fixtures for calculator integration tests
// ABOUTME: Provides quiet logging setup and reference foods with hand-checked concentrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `oit_calculator`

use oit_calculator::core::dec;
use oit_calculator::core::models::{Food, FoodType, Protocol};
use oit_calculator::core::ProtocolConfig;
use oit_calculator::engine::generate_default_protocol;
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// 10 g protein per 100 g serving: 100 mg/g
pub fn egg_powder() -> Food {
    Food::new("Egg powder", FoodType::Solid, dec!(10), dec!(100))
}

/// 25 g protein per 100 g serving: 250 mg/g
pub fn peanut_butter() -> Food {
    Food::new("Peanut butter", FoodType::Solid, dec!(25), dec!(100))
}

/// Standard protocol for [`egg_powder`] with default settings
pub fn egg_protocol() -> Protocol {
    init_test_logging();
    generate_default_protocol(egg_powder(), &ProtocolConfig::default())
}
