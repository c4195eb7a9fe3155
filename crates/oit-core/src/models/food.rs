// ABOUTME: Food definitions used by dosing protocols
// ABOUTME: Physical form, serving composition, and derived protein concentration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::constants::MG_PER_GRAM;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical form of a food, which decides its unit and dilution volume model
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodType {
    /// Measured by mass; its own volume is negligible in a mixture
    Solid,
    /// Measured by volume; volumes add when mixed with water
    Liquid,
}

impl FoodType {
    /// Unit a neat amount of this food is measured in
    #[must_use]
    pub const fn unit(self) -> Unit {
        match self {
            Self::Solid => Unit::Grams,
            Self::Liquid => Unit::Millilitres,
        }
    }

    /// The other physical form
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Solid => Self::Liquid,
            Self::Liquid => Self::Solid,
        }
    }

    /// Stable string representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => "SOLID",
            Self::Liquid => "LIQUID",
        }
    }

    /// Parse from user or file input
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "solid" | "s" => Some(Self::Solid),
            "liquid" | "l" => Some(Self::Liquid),
            _ => None,
        }
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Measurement unit of a daily amount
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Grams
    #[serde(rename = "g")]
    Grams,
    /// Millilitres
    #[serde(rename = "ml")]
    Millilitres,
}

impl Unit {
    /// Short symbol shown next to amounts
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Grams => "g",
            Self::Millilitres => "ml",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A food a protocol doses from
///
/// `grams_in_serving` is grams of *protein* per serving; `serving_size` is the
/// serving's total mass (SOLID) or volume (LIQUID).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Display name
    pub name: String,
    /// Physical form
    #[serde(rename = "type")]
    pub food_type: FoodType,
    /// Protein grams per serving
    pub grams_in_serving: Decimal,
    /// Serving size in grams or millilitres
    pub serving_size: Decimal,
}

impl Food {
    /// Create a new food
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        food_type: FoodType,
        grams_in_serving: Decimal,
        serving_size: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            food_type,
            grams_in_serving,
            serving_size,
        }
    }

    /// Milligrams of protein per gram (SOLID) or millilitre (LIQUID)
    ///
    /// A non-positive serving size yields zero rather than dividing by zero;
    /// the validator reports such a food as unusable.
    #[must_use]
    pub fn mg_per_unit(&self) -> Decimal {
        if self.serving_size <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.grams_in_serving
            .checked_mul(MG_PER_GRAM)
            .and_then(|mg| mg.checked_div(self.serving_size))
            .unwrap_or(Decimal::ZERO)
    }

    /// Whether any step can be computed from this food
    #[must_use]
    pub fn is_usable(&self) -> bool {
        self.mg_per_unit() > Decimal::ZERO
    }

    /// Whether protein per serving exceeds the serving itself
    #[must_use]
    pub fn protein_exceeds_serving(&self) -> bool {
        self.grams_in_serving > self.serving_size
    }

    /// Unit neat amounts of this food are measured in
    #[must_use]
    pub const fn unit(&self) -> Unit {
        self.food_type.unit()
    }

    /// Copy of this food with a different physical form
    #[must_use]
    pub fn with_type(&self, food_type: FoodType) -> Self {
        Self {
            food_type,
            ..self.clone()
        }
    }
}
