// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Dosing target sequences, measuring-tool defaults, and validation limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Pure data constants grouped by domain. Runtime-tunable values are only the
//! *defaults* for [`ProtocolConfig`](crate::config::ProtocolConfig); the
//! dosing sequences are fixed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixed ascending protein targets (mg) for each dosing strategy
pub mod dosing {
    use super::{dec, Decimal};

    /// Standard escalation: 11 steps from 1 mg to 300 mg
    pub const STANDARD_TARGETS_MG: [Decimal; 11] = [
        dec!(1),
        dec!(2.5),
        dec!(5),
        dec!(10),
        dec!(20),
        dec!(40),
        dec!(80),
        dec!(120),
        dec!(160),
        dec!(240),
        dec!(300),
    ];

    /// Slow escalation: 19 smaller increments from 0.5 mg to 300 mg
    pub const SLOW_TARGETS_MG: [Decimal; 19] = [
        dec!(0.5),
        dec!(1),
        dec!(1.5),
        dec!(2.5),
        dec!(4),
        dec!(6),
        dec!(8),
        dec!(10),
        dec!(15),
        dec!(20),
        dec!(30),
        dec!(40),
        dec!(60),
        dec!(80),
        dec!(100),
        dec!(120),
        dec!(160),
        dec!(240),
        dec!(300),
    ];
}

/// Trial values walked by the dilution candidate search
pub mod candidates {
    use super::{dec, Decimal};

    /// Grams of solid food placed into a mixture
    pub const SOLID_MIX: [Decimal; 19] = [
        dec!(0.2),
        dec!(0.25),
        dec!(0.3),
        dec!(0.4),
        dec!(0.5),
        dec!(0.6),
        dec!(0.7),
        dec!(0.8),
        dec!(0.9),
        dec!(1),
        dec!(1.5),
        dec!(2),
        dec!(2.5),
        dec!(3),
        dec!(4),
        dec!(5),
        dec!(6),
        dec!(8),
        dec!(10),
    ];

    /// Millilitres of liquid food placed into a mixture
    pub const LIQUID_MIX: [Decimal; 17] = [
        dec!(0.2),
        dec!(0.3),
        dec!(0.4),
        dec!(0.5),
        dec!(0.6),
        dec!(0.8),
        dec!(1),
        dec!(1.5),
        dec!(2),
        dec!(2.5),
        dec!(3),
        dec!(4),
        dec!(5),
        dec!(6),
        dec!(8),
        dec!(10),
        dec!(15),
    ];

    /// Millilitres of mixture consumed per day
    pub const DAILY_AMOUNT: [Decimal; 17] = [
        dec!(0.2),
        dec!(0.3),
        dec!(0.4),
        dec!(0.5),
        dec!(0.6),
        dec!(0.8),
        dec!(1),
        dec!(1.5),
        dec!(2),
        dec!(2.5),
        dec!(3),
        dec!(4),
        dec!(5),
        dec!(6),
        dec!(8),
        dec!(10),
        dec!(12),
    ];
}

/// Home measuring-tool resolution and practicality limits
pub mod limits {
    use super::{dec, Decimal};

    /// Smallest mass a household scale reads reliably (g)
    pub const MIN_MEASURABLE_MASS: Decimal = dec!(0.2);
    /// Smallest volume an oral syringe measures reliably (ml)
    pub const MIN_MEASURABLE_VOLUME: Decimal = dec!(0.2);
    /// Largest diluent volume for a single batch (ml)
    pub const MAX_MIX_WATER: Decimal = dec!(500);
    /// Fewest daily doses a batch must yield
    pub const MIN_SERVINGS_FOR_MIX: Decimal = dec!(3);
    /// Relative protein error accepted by search and validation
    pub const PROTEIN_TOLERANCE: Decimal = dec!(0.05);
    /// w/v ratio above which solid volume stops being negligible
    pub const MAX_SOLID_CONCENTRATION: Decimal = dec!(0.05);
    /// Protein dose (mg) below which `DILUTE_INITIAL` dilutes
    pub const DEFAULT_DI_THRESHOLD_MG: Decimal = dec!(10);
    /// Food B neat amount at which the transition happens
    pub const DEFAULT_FOOD_B_THRESHOLD_AMOUNT: Decimal = dec!(0.2);
    /// Fewer steps than this earns a caution
    pub const MIN_RECOMMENDED_STEPS: usize = 5;
}

/// Display precision (decimal places) used by renderers and the validator
pub mod display {
    /// Decimal places shown for grams
    pub const SOLID_RESOLUTION: u32 = 2;
    /// Decimal places shown for millilitres
    pub const LIQUID_RESOLUTION: u32 = 1;
    /// Decimal places shown for protein milligrams
    pub const PROTEIN_RESOLUTION: u32 = 1;
    /// Decimal places shown for servings
    pub const SERVINGS_RESOLUTION: u32 = 1;
}

/// Milligrams per gram, used to derive protein concentration
pub const MG_PER_GRAM: Decimal = dec!(1000);
