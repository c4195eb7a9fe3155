// ABOUTME: Reads and writes protocols as pretty-printed JSON files
// ABOUTME: Decimal quantities round-trip as strings so no precision is lost on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::{Context, Result};
use oit_core::models::Protocol;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a protocol previously written by [`write_protocol_file`]
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a protocol document
pub fn read_protocol_file(path: &Path) -> Result<Protocol> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read protocol file {}", path.display()))?;
    let protocol: Protocol = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid protocol document in {}", path.display()))?;
    debug!(path = %path.display(), steps = protocol.steps.len(), "Protocol loaded");
    Ok(protocol)
}

/// Write a protocol as pretty-printed JSON, replacing any existing file
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn write_protocol_file(path: &Path, protocol: &Protocol) -> Result<()> {
    let json = serde_json::to_string_pretty(protocol).context("Failed to serialize protocol")?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write protocol file {}", path.display()))?;
    debug!(path = %path.display(), steps = protocol.steps.len(), "Protocol saved");
    Ok(())
}
