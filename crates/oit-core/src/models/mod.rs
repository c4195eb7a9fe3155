// ABOUTME: Protocol data model organized by entity
// ABOUTME: Food, Step, Protocol, Candidate, and Warning value types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Protocol data model
//!
//! All types are plain owned values. A protocol edit never mutates a value in
//! place; it builds a new `Protocol`, so a snapshot held in history can never
//! observe a later edit.

/// Dilution search result
pub mod candidate;
/// Food definitions and protein concentration
pub mod food;
/// Whole-protocol container and strategies
pub mod protocol;
/// Single dosing step with its method
pub mod step;
/// Validator output
pub mod warning;

pub use candidate::Candidate;
pub use food::{Food, FoodType, Unit};
pub use protocol::{DosingStrategy, FoodAStrategy, FoodBThreshold, Protocol};
pub use step::{Dilution, FoodTag, Method, Step};
pub use warning::{Severity, Warning, WarningCode};
