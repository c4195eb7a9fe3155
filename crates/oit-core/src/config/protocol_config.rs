// ABOUTME: Protocol configuration shared by search, generation, mutation, and validation
// ABOUTME: Candidate trial values, measuring resolution, practicality caps, and tolerances
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Protocol Configuration
//!
//! One immutable bag of settings travels inside every `Protocol`, so a
//! protocol is always validated against the configuration it was built with.

use super::error::ConfigError;
use crate::constants::{candidates, display, limits};
use crate::models::{FoodBThreshold, FoodType, Unit};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Protocol configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolConfig {
    /// Trial grams of solid food per mixture
    pub solid_mix_candidates: Vec<Decimal>,
    /// Trial millilitres of liquid food per mixture
    pub liquid_mix_candidates: Vec<Decimal>,
    /// Trial millilitres of mixture per daily dose
    pub daily_amount_candidates: Vec<Decimal>,
    /// Smallest measurable mass (g)
    pub min_measurable_mass: Decimal,
    /// Smallest measurable volume (ml)
    pub min_measurable_volume: Decimal,
    /// Largest diluent volume per batch (ml)
    pub max_mix_water: Decimal,
    /// Fewest doses a batch must yield
    pub min_servings_for_mix: Decimal,
    /// Accepted relative protein error
    pub protein_tolerance: Decimal,
    /// w/v ratio cap for solid mixtures
    pub max_solid_concentration: Decimal,
    /// Food B threshold offered when a second food is added
    pub default_food_b_threshold: FoodBThreshold,
    /// DI threshold (mg) for newly generated protocols
    pub default_di_threshold: Decimal,
    /// Decimal places displayed for grams
    pub solid_resolution: u32,
    /// Decimal places displayed for millilitres
    pub liquid_resolution: u32,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self {
            solid_mix_candidates: candidates::SOLID_MIX.to_vec(),
            liquid_mix_candidates: candidates::LIQUID_MIX.to_vec(),
            daily_amount_candidates: candidates::DAILY_AMOUNT.to_vec(),
            min_measurable_mass: limits::MIN_MEASURABLE_MASS,
            min_measurable_volume: limits::MIN_MEASURABLE_VOLUME,
            max_mix_water: limits::MAX_MIX_WATER,
            min_servings_for_mix: limits::MIN_SERVINGS_FOR_MIX,
            protein_tolerance: limits::PROTEIN_TOLERANCE,
            max_solid_concentration: limits::MAX_SOLID_CONCENTRATION,
            default_food_b_threshold: FoodBThreshold {
                unit: Unit::Grams,
                amount: limits::DEFAULT_FOOD_B_THRESHOLD_AMOUNT,
            },
            default_di_threshold: limits::DEFAULT_DI_THRESHOLD_MG,
            solid_resolution: display::SOLID_RESOLUTION,
            liquid_resolution: display::LIQUID_RESOLUTION,
        }
    }
}

impl ProtocolConfig {
    /// Mix-food trial values for a physical form
    #[must_use]
    pub fn mix_candidates(&self, food_type: FoodType) -> &[Decimal] {
        match food_type {
            FoodType::Solid => &self.solid_mix_candidates,
            FoodType::Liquid => &self.liquid_mix_candidates,
        }
    }

    /// Smallest measurable neat amount in a unit
    #[must_use]
    pub const fn min_measurable(&self, unit: Unit) -> Decimal {
        match unit {
            Unit::Grams => self.min_measurable_mass,
            Unit::Millilitres => self.min_measurable_volume,
        }
    }

    /// Decimal places displayed for a unit
    #[must_use]
    pub const fn resolution(&self, unit: Unit) -> u32 {
        match unit {
            Unit::Grams => self.solid_resolution,
            Unit::Millilitres => self.liquid_resolution,
        }
    }

    /// Check that the configuration can drive a search and a validation
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate list is empty or a limit is not positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.solid_mix_candidates.is_empty() {
            return Err(ConfigError::EmptyCandidates("solid_mix_candidates"));
        }
        if self.liquid_mix_candidates.is_empty() {
            return Err(ConfigError::EmptyCandidates("liquid_mix_candidates"));
        }
        if self.daily_amount_candidates.is_empty() {
            return Err(ConfigError::EmptyCandidates("daily_amount_candidates"));
        }
        if self.min_measurable_mass <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue(
                "min_measurable_mass must be positive",
            ));
        }
        if self.min_measurable_volume <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue(
                "min_measurable_volume must be positive",
            ));
        }
        if self.max_mix_water < self.min_measurable_volume {
            return Err(ConfigError::InvalidValue(
                "max_mix_water must be at least min_measurable_volume",
            ));
        }
        if self.min_servings_for_mix < Decimal::ONE {
            return Err(ConfigError::InvalidValue(
                "min_servings_for_mix must be at least 1",
            ));
        }
        if self.protein_tolerance <= Decimal::ZERO || self.protein_tolerance >= Decimal::ONE {
            return Err(ConfigError::InvalidValue(
                "protein_tolerance must be between 0 and 1",
            ));
        }
        if self.max_solid_concentration <= Decimal::ZERO {
            return Err(ConfigError::InvalidValue(
                "max_solid_concentration must be positive",
            ));
        }
        Ok(())
    }
}
