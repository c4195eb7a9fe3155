// ABOUTME: Configuration module for the oit-core crate
// ABOUTME: Re-exports protocol configuration and its validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Configuration validation errors
pub mod error;
/// Candidate lists, resolution floors, and tolerances
pub mod protocol_config;

pub use error::ConfigError;
pub use protocol_config::ProtocolConfig;
