// ABOUTME: Main library entry point for the oral immunotherapy protocol calculator
// ABOUTME: Wires the engine to logging, environment configuration, state history, and file I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # OIT Calculator
//!
//! Builds oral immunotherapy dosing protocols: a sequence of daily protein
//! doses escalating toward a maintenance dose, each delivered either as a neat
//! amount of food or as a measured volume of a food-in-water mixture.
//!
//! ## Architecture
//!
//! - **`oit-core`**: data model, configuration, display rounding
//! - **`oit-engine`**: dilution search, step generation, mutators, validator
//! - **This crate**: logging setup, environment overrides, undo/redo state,
//!   protocol files, and the `oit-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use oit_calculator::config::environment::load_protocol_config;
//! use oit_calculator::state::ProtocolState;
//! use oit_calculator::engine::{generate_default_protocol, protocol::update_step_target_mg};
//! use oit_calculator::core::models::{Food, FoodType};
//! use oit_calculator::core::dec;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = load_protocol_config()?;
//!     let food = Food::new("Peanut butter", FoodType::Solid, dec!(25), dec!(100));
//!
//!     let mut state = ProtocolState::new(generate_default_protocol(food, &config));
//!     state.apply(|protocol| update_step_target_mg(protocol, 1, "1.5"));
//!     state.undo();
//!
//!     for warning in state.warnings() {
//!         println!("{warning}");
//!     }
//!     Ok(())
//! }
//! ```

/// Environment-driven configuration
pub mod config;

/// Logging configuration and subscriber setup
pub mod logging;

/// Reading and writing protocol JSON files
pub mod persistence;

/// Protocol history with undo/redo and change notification
pub mod state;

/// Re-export of the foundation crate
pub use oit_core as core;

/// Re-export of the computation engine
pub use oit_engine as engine;
