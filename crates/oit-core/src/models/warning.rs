// ABOUTME: Structured warnings derived from a protocol by the validator
// ABOUTME: Each code carries a fixed severity: red invalidates, yellow cautions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a warning is
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Physically impossible or outside protein tolerance
    Red,
    /// Impractical but not wrong
    Yellow,
}

/// Machine-readable warning identifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarningCode {
    /// Protocol has fewer steps than recommended
    TooFewSteps,
    /// A food has no usable protein concentration
    InvalidProteinConcentration,
    /// Protein per serving exceeds the serving size
    ProteinExceedsServing,
    /// Food B is configured but its threshold is never reached
    NoTransitionPoint,
    /// Rounded amounts deliver a dose outside tolerance
    ProteinMismatch,
    /// Mixture holds less than one dose of protein
    InsufficientServings,
    /// Mixture volume is smaller than one daily amount
    MixVolumeBelowDailyAmount,
    /// An amount is zero or negative
    NonPositiveAmount,
    /// An amount is below what home tools can measure
    BelowMeasurableResolution,
    /// Mixture yields fewer doses than worth preparing
    LowServings,
    /// Solid mixture too concentrated for the negligible-volume assumption
    HighSolidConcentration,
    /// Strategy asked for a dilution but none was feasible
    DilutionUnavailable,
    /// Target is lower than the previous step's
    NonAscendingTarget,
    /// Target repeats the previous step's for the same food
    DuplicateTarget,
}

impl WarningCode {
    /// Severity every warning with this code carries
    #[must_use]
    pub const fn severity(self) -> Severity {
        match self {
            Self::InvalidProteinConcentration
            | Self::ProteinExceedsServing
            | Self::ProteinMismatch
            | Self::InsufficientServings
            | Self::MixVolumeBelowDailyAmount
            | Self::NonPositiveAmount => Severity::Red,
            Self::TooFewSteps
            | Self::NoTransitionPoint
            | Self::BelowMeasurableResolution
            | Self::LowServings
            | Self::HighSolidConcentration
            | Self::DilutionUnavailable
            | Self::NonAscendingTarget
            | Self::DuplicateTarget => Severity::Yellow,
        }
    }
}

/// A single validator finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    /// Red or yellow
    pub severity: Severity,
    /// What was found
    pub code: WarningCode,
    /// Human-readable explanation
    pub message: String,
    /// Step the warning refers to, absent for protocol-level findings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_index: Option<u32>,
}

impl Warning {
    /// Protocol-level warning
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            severity: code.severity(),
            code,
            message: message.into(),
            step_index: None,
        }
    }

    /// Warning attached to a step
    #[must_use]
    pub fn for_step(code: WarningCode, step_index: u32, message: impl Into<String>) -> Self {
        Self {
            step_index: Some(step_index),
            ..Self::new(code, message)
        }
    }

    /// Whether this warning invalidates the protocol
    #[must_use]
    pub fn is_red(&self) -> bool {
        self.severity == Severity::Red
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Red => "red",
            Severity::Yellow => "yellow",
        };
        match self.step_index {
            Some(index) => write!(f, "[{level}] step {index}: {}", self.message),
            None => write!(f, "[{level}] {}", self.message),
        }
    }
}
