// ABOUTME: Protocol computation engine for oral immunotherapy dosing
// ABOUTME: Dilution search, step generation, pure protocol mutators, and the validator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # OIT Engine
//!
//! The numeric core of the calculator. Every public function is pure: it takes
//! a complete value and returns a new one, never mutating its input.
//!
//! - [`dilution`]: enumerate and rank food-in-water recipes for a protein target
//! - [`step_generator`]: turn a target into a DIRECT or DILUTE step
//! - [`protocol`]: single-edit mutators that restore every derived invariant
//! - [`validator`]: derive red/yellow warnings from display-rounded values

/// Dilution candidate search
pub mod dilution;
/// Decimal helpers that never panic on zero divisors
pub mod numeric;
/// Pure protocol mutators
pub mod protocol;
/// DIRECT/DILUTE step generation
pub mod step_generator;
/// Warning derivation
pub mod validator;

pub use dilution::find_dilution_candidates;
pub use step_generator::{generate_default_protocol, generate_protocol, generate_step_for_target};
pub use validator::validate_protocol;
