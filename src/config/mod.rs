// ABOUTME: Configuration management module for calculator settings
// ABOUTME: Layers environment overrides on top of the built-in protocol defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//! Configuration module
//!
//! - **Environment**: `OIT_*` overrides for measuring floors, caps, tolerances,
//!   and display precision

/// Environment-based protocol configuration
pub mod environment;

pub use environment::{load_protocol_config, load_protocol_config_with};
pub use oit_core::config::{ConfigError, ProtocolConfig};
