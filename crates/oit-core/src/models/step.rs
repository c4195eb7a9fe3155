// ABOUTME: A single protocol step and its dosing method
// ABOUTME: Dilution fields exist only on the DILUTE variant of the method
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::food::{FoodType, Unit};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the protocol's foods a step draws from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum FoodTag {
    /// The initial food
    A,
    /// The food transitioned to
    B,
}

impl fmt::Display for FoodTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::A => "A",
            Self::B => "B",
        })
    }
}

/// Mixture recipe of a diluted step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dilution {
    /// Food placed into the mixture (g or ml, per the food's unit)
    pub mix_food_amount: Decimal,
    /// Water added to the mixture (ml)
    pub mix_water_amount: Decimal,
    /// Daily doses one batch yields
    pub servings: Decimal,
}

impl Dilution {
    /// Total mixture volume under the food's volume model
    ///
    /// Solids are assumed to add no volume; liquids add their own volume.
    #[must_use]
    pub fn total_volume(&self, food_type: FoodType) -> Decimal {
        match food_type {
            FoodType::Solid => self.mix_water_amount,
            FoodType::Liquid => self.mix_food_amount + self.mix_water_amount,
        }
    }
}

/// How a step's dose is delivered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Method {
    /// Neat food measured directly
    Direct,
    /// A measured volume of a food-in-water mixture
    Dilute(Dilution),
}

impl Method {
    /// Stable string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "DIRECT",
            Self::Dilute(_) => "DILUTE",
        }
    }
}

/// One row of a dosing protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// 1-based position, contiguous within the protocol
    pub step_index: u32,
    /// Intended protein dose (mg)
    pub target_mg: Decimal,
    /// Source food
    pub food: FoodTag,
    /// Amount consumed daily
    pub daily_amount: Decimal,
    /// Unit of `daily_amount`
    pub daily_amount_unit: Unit,
    /// Delivery method, carrying the recipe when diluted
    pub method: Method,
}

impl Step {
    /// Build a DIRECT step
    #[must_use]
    pub const fn direct(
        step_index: u32,
        target_mg: Decimal,
        food: FoodTag,
        daily_amount: Decimal,
        daily_amount_unit: Unit,
    ) -> Self {
        Self {
            step_index,
            target_mg,
            food,
            daily_amount,
            daily_amount_unit,
            method: Method::Direct,
        }
    }

    /// Build a DILUTE step; mixtures are always dosed in millilitres
    #[must_use]
    pub const fn dilute(
        step_index: u32,
        target_mg: Decimal,
        food: FoodTag,
        daily_amount: Decimal,
        dilution: Dilution,
    ) -> Self {
        Self {
            step_index,
            target_mg,
            food,
            daily_amount,
            daily_amount_unit: Unit::Millilitres,
            method: Method::Dilute(dilution),
        }
    }

    /// Recipe when diluted
    #[must_use]
    pub const fn dilution(&self) -> Option<&Dilution> {
        match &self.method {
            Method::Dilute(dilution) => Some(dilution),
            Method::Direct => None,
        }
    }

    /// Whether the step is diluted
    #[must_use]
    pub const fn is_dilute(&self) -> bool {
        matches!(self.method, Method::Dilute(_))
    }

    /// Copy of this step at another position
    #[must_use]
    pub fn with_index(&self, step_index: u32) -> Self {
        Self {
            step_index,
            ..self.clone()
        }
    }
}
