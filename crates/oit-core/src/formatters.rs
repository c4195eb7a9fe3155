// ABOUTME: Display-precision rounding and user input parsing for protocol quantities
// ABOUTME: Renderers and the validator share these so checks match what users see
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Formatters
//!
//! The validator must judge a protocol by the numbers a user will actually
//! measure, not by the full-precision values kept internally. Both sides round
//! through [`round_for_unit`].

use crate::config::ProtocolConfig;
use crate::constants::display;
use crate::errors::{ProtocolError, ProtocolResult};
use crate::models::Unit;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Round half away from zero to `dp` decimal places
#[must_use]
pub fn round_dp(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// Round an amount to the display precision of its unit
#[must_use]
pub fn round_for_unit(value: Decimal, unit: Unit, config: &ProtocolConfig) -> Decimal {
    round_dp(value, config.resolution(unit))
}

/// Render an amount with its unit at display precision, e.g. `"1.25 g"`
#[must_use]
pub fn format_amount(value: Decimal, unit: Unit, config: &ProtocolConfig) -> String {
    format!("{} {unit}", round_for_unit(value, unit, config).normalize())
}

/// Render a protein dose, e.g. `"2.5 mg"`
#[must_use]
pub fn format_mg(value: Decimal) -> String {
    format!("{} mg", round_dp(value, display::PROTEIN_RESOLUTION).normalize())
}

/// Render a servings count
#[must_use]
pub fn format_servings(value: Decimal) -> String {
    round_dp(value, display::SERVINGS_RESOLUTION)
        .normalize()
        .to_string()
}

/// Parse a decimal typed into a form field
///
/// # Errors
///
/// Returns [`ProtocolError::InvalidDecimal`] if the trimmed input is empty or
/// not a plain decimal number
pub fn parse_decimal(input: &str) -> ProtocolResult<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ProtocolError::InvalidDecimal(input.to_owned()));
    }
    Decimal::from_str(trimmed).map_err(|_| ProtocolError::InvalidDecimal(input.to_owned()))
}
