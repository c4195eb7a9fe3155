// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
// ABOUTME: Argument value parsers for oit-cli
// ABOUTME: Maps free-text option values onto the calculator's closed enums

use oit_calculator::core::models::DosingStrategy;

/// Parse `--strategy`
pub fn parse_dosing_strategy(value: &str) -> Result<DosingStrategy, String> {
    DosingStrategy::parse(value)
        .ok_or_else(|| format!("unknown dosing strategy '{value}' (expected standard or slow)"))
}
