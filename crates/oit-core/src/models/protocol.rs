// ABOUTME: Whole dosing protocol with strategies and optional food transition
// ABOUTME: Steps ascend by index and all Food B steps follow all Food A steps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::food::{Food, Unit};
use super::step::{FoodTag, Step};
use crate::config::ProtocolConfig;
use crate::constants::dosing;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed escalation sequence a protocol is generated from
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DosingStrategy {
    /// Standard escalation
    #[default]
    Standard,
    /// Slower escalation with more steps
    Slow,
}

impl DosingStrategy {
    /// Ascending protein targets (mg) for this strategy
    #[must_use]
    pub fn targets(self) -> &'static [Decimal] {
        match self {
            Self::Standard => &dosing::STANDARD_TARGETS_MG,
            Self::Slow => &dosing::SLOW_TARGETS_MG,
        }
    }

    /// Parse from user input
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "slow" => Some(Self::Slow),
            _ => None,
        }
    }
}

/// When Food A steps are forced into a dilution
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FoodAStrategy {
    /// Dilute while the target is below the DI threshold
    #[default]
    DiluteInitial,
    /// Always dilute
    DiluteAll,
    /// Never dilute, even when the neat amount cannot be measured
    DiluteNone,
}

impl FoodAStrategy {
    /// Whether this strategy demands a dilution for `target_mg`
    #[must_use]
    pub fn requires_dilution(self, target_mg: Decimal, di_threshold: Decimal) -> bool {
        match self {
            Self::DiluteAll => true,
            Self::DiluteInitial => target_mg < di_threshold,
            Self::DiluteNone => false,
        }
    }
}

/// Neat amount of Food B at which dosing switches to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodBThreshold {
    /// Unit of `amount`
    pub unit: Unit,
    /// Neat amount of Food B
    pub amount: Decimal,
}

/// A complete dosing protocol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protocol {
    /// Escalation sequence the Food A targets came from
    pub dosing_strategy: DosingStrategy,
    /// Initial food
    pub food_a: Food,
    /// Dilution policy for Food A
    pub food_a_strategy: FoodAStrategy,
    /// Protein dose (mg) below which `DiluteInitial` dilutes
    pub di_threshold: Decimal,
    /// Food transitioned to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_b: Option<Food>,
    /// Transition point for Food B
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_b_threshold: Option<FoodBThreshold>,
    /// Steps ordered by `step_index`
    pub steps: Vec<Step>,
    /// Configuration used for every derived quantity
    pub config: ProtocolConfig,
}

impl Protocol {
    /// Food a step tag refers to
    #[must_use]
    pub fn food(&self, tag: FoodTag) -> Option<&Food> {
        match tag {
            FoodTag::A => Some(&self.food_a),
            FoodTag::B => self.food_b.as_ref(),
        }
    }

    /// Step with the given 1-based index
    #[must_use]
    pub fn step(&self, step_index: u32) -> Option<&Step> {
        self.steps.iter().find(|step| step.step_index == step_index)
    }

    /// Whether any step doses Food B
    #[must_use]
    pub fn has_food_b_steps(&self) -> bool {
        self.steps.iter().any(|step| step.food == FoodTag::B)
    }

    /// Renumber steps 1..=n in their current order
    pub fn reindex(steps: &mut [Step]) {
        for (position, step) in (1_u32..).zip(steps.iter_mut()) {
            step.step_index = position;
        }
    }
}
