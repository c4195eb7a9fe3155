// ABOUTME: Core types and constants for the OIT protocol calculator
// ABOUTME: Foundation crate with error handling, protocol models, configuration, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # OIT Core
//!
//! Foundation crate providing the value types shared by the oral immunotherapy
//! protocol calculator. Every quantity (mass, volume, protein) is a
//! [`Decimal`](rust_decimal::Decimal) so repeated recalculation never drifts.
//!
//! ## Modules
//!
//! - **errors**: `ProtocolError` and the `ProtocolResult` alias
//! - **constants**: dosing sequences and configuration defaults
//! - **models**: `Food`, `Step`, `Protocol`, `Candidate`, `Warning`
//! - **config**: `ProtocolConfig` with validation
//! - **formatters**: display-precision rounding shared by the validator and renderers

/// Protocol error types
pub mod errors;

/// Dosing sequences and configuration defaults organized by domain
pub mod constants;

/// Protocol data model (foods, steps, protocols, warnings)
pub mod models;

/// Protocol configuration (search candidates, resolution floors, tolerances)
pub mod config;

/// Display rounding and user input parsing
pub mod formatters;

pub use config::{ConfigError, ProtocolConfig};
pub use errors::{ProtocolError, ProtocolResult};
pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;
