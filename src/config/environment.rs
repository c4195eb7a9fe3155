// ABOUTME: Environment configuration for protocol calculation settings
// ABOUTME: Reads OIT_* variables over the built-in defaults and validates the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration
//!
//! | Variable                      | Setting                    |
//! |-------------------------------|----------------------------|
//! | `OIT_MIN_MEASURABLE_MASS`     | smallest weighable grams   |
//! | `OIT_MIN_MEASURABLE_VOLUME`   | smallest measurable ml     |
//! | `OIT_MAX_MIX_WATER`           | largest batch water (ml)   |
//! | `OIT_MIN_SERVINGS_FOR_MIX`    | fewest doses per batch     |
//! | `OIT_PROTEIN_TOLERANCE`       | accepted relative error    |
//! | `OIT_MAX_SOLID_CONCENTRATION` | w/v cap for solid mixtures |
//! | `OIT_DI_THRESHOLD`            | default DI threshold (mg)  |
//! | `OIT_SOLID_RESOLUTION`        | decimals shown for grams   |
//! | `OIT_LIQUID_RESOLUTION`       | decimals shown for ml      |

use oit_core::config::{ConfigError, ProtocolConfig};
use std::env;
use std::str::FromStr;
use tracing::{debug, info};

/// Load the protocol configuration from the process environment
///
/// # Errors
///
/// Returns an error if a variable does not parse or the resulting
/// configuration fails validation
pub fn load_protocol_config() -> Result<ProtocolConfig, ConfigError> {
    load_protocol_config_with(|key| env::var(key).ok())
}

/// Load the protocol configuration from an arbitrary variable source
///
/// # Errors
///
/// Returns an error if a variable does not parse or the resulting
/// configuration fails validation
pub fn load_protocol_config_with<F>(lookup: F) -> Result<ProtocolConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let defaults = ProtocolConfig::default();

    let config = ProtocolConfig {
        min_measurable_mass: var_or(&lookup, "OIT_MIN_MEASURABLE_MASS", defaults.min_measurable_mass)?,
        min_measurable_volume: var_or(
            &lookup,
            "OIT_MIN_MEASURABLE_VOLUME",
            defaults.min_measurable_volume,
        )?,
        max_mix_water: var_or(&lookup, "OIT_MAX_MIX_WATER", defaults.max_mix_water)?,
        min_servings_for_mix: var_or(
            &lookup,
            "OIT_MIN_SERVINGS_FOR_MIX",
            defaults.min_servings_for_mix,
        )?,
        protein_tolerance: var_or(&lookup, "OIT_PROTEIN_TOLERANCE", defaults.protein_tolerance)?,
        max_solid_concentration: var_or(
            &lookup,
            "OIT_MAX_SOLID_CONCENTRATION",
            defaults.max_solid_concentration,
        )?,
        default_di_threshold: var_or(&lookup, "OIT_DI_THRESHOLD", defaults.default_di_threshold)?,
        solid_resolution: var_or(&lookup, "OIT_SOLID_RESOLUTION", defaults.solid_resolution)?,
        liquid_resolution: var_or(&lookup, "OIT_LIQUID_RESOLUTION", defaults.liquid_resolution)?,
        ..defaults.clone()
    };

    config.validate()?;

    if config == defaults {
        debug!("Using default protocol configuration");
    } else {
        info!(
            min_measurable_mass = %config.min_measurable_mass,
            min_measurable_volume = %config.min_measurable_volume,
            max_mix_water = %config.max_mix_water,
            protein_tolerance = %config.protein_tolerance,
            "Protocol configuration overridden from environment"
        );
    }
    Ok(config)
}

/// Parsed variable, or `default` when it is unset
fn var_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|_| ConfigError::Parse {
            key: key.to_owned(),
            value: raw,
        })
    })
}
