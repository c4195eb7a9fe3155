// ABOUTME: Configuration error types for protocol configuration validation
// ABOUTME: Defines error variants for invalid values, empty candidate lists, and parse failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Configuration error types for protocol configuration validation.

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Value outside its acceptable range (e.g., a non-positive tolerance)
    #[error("Invalid value: {0}")]
    InvalidValue(&'static str),

    /// A candidate list that the search walks is empty
    #[error("Empty candidate list: {0}")]
    EmptyCandidates(&'static str),

    /// Failed to parse a configuration value
    #[error("Parse error for {key}: {value:?}")]
    Parse {
        /// Setting being parsed
        key: String,
        /// Raw value that failed to parse
        value: String,
    },
}
