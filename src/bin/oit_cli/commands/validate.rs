// ABOUTME: Protocol validation command for oit-cli
// ABOUTME: Loads a saved protocol, prints its warnings, and reports whether any are red
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use anyhow::Result;
use oit_calculator::engine::validate_protocol;
use oit_calculator::persistence::read_protocol_file;
use std::path::Path;
use tracing::{info, warn};

use crate::helpers::display::{print_json, print_step_table, print_warnings};

/// Validate the protocol in `file`; returns whether a red warning was found
pub fn run(file: &Path, table: bool) -> Result<bool> {
    let protocol = read_protocol_file(file)?;
    let warnings = validate_protocol(&protocol);
    let red = warnings.iter().filter(|warning| warning.is_red()).count();

    if table {
        print_step_table(&protocol);
        print_warnings(&warnings);
    } else {
        print_json(&warnings)?;
    }

    if red > 0 {
        warn!(path = %file.display(), red, total = warnings.len(), "Protocol is invalid");
    } else {
        info!(path = %file.display(), total = warnings.len(), "Protocol is valid");
    }
    Ok(red > 0)
}
