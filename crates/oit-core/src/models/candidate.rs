// ABOUTME: Intermediate dilution recipe produced by the candidate search
// ABOUTME: The chosen candidate becomes a step's dilution fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::step::Dilution;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A feasible dilution recipe for one protein target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Food placed into the mixture
    pub mix_food_amount: Decimal,
    /// Water added to the mixture (ml)
    pub mix_water_amount: Decimal,
    /// Mixture consumed daily (ml)
    pub daily_amount: Decimal,
    /// Volume of the whole batch (ml)
    pub mix_total_volume: Decimal,
    /// Daily doses the batch yields
    pub servings: Decimal,
}

impl Candidate {
    /// Recipe part of this candidate
    #[must_use]
    pub const fn dilution(&self) -> Dilution {
        Dilution {
            mix_food_amount: self.mix_food_amount,
            mix_water_amount: self.mix_water_amount,
            servings: self.servings,
        }
    }
}
