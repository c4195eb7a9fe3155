// ABOUTME: Error types raised while interpreting protocol edits
// ABOUTME: Mutators fold these into "return the original protocol" at their public boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Protocol Error Types
//!
//! None of these errors ever escape a mutator: the public editing API always
//! returns *some* protocol. They exist so the internals can use `?` and so the
//! rejected edit can be logged with a precise reason.

use thiserror::Error;

/// Errors produced while applying a single edit to a protocol
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// User input could not be parsed as a decimal number
    #[error("Invalid decimal input: {0:?}")]
    InvalidDecimal(String),

    /// No step carries the requested 1-based index
    #[error("Step {0} not found")]
    StepNotFound(u32),

    /// The edit targets Food B but the protocol has none
    #[error("Protocol has no Food B")]
    FoodBMissing,

    /// The edit only applies to diluted steps
    #[error("Step {0} is not a dilution")]
    NotDiluted(u32),
}

/// Result alias for protocol editing internals
pub type ProtocolResult<T> = Result<T, ProtocolError>;
