// ABOUTME: Training configuration enums: goal, coaching style, movement type, and unit system
// ABOUTME: Closed variants drive rep-range lookup, one-hot features, safety caps, and rounding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{rep_ranges, rounding, style_factors, weight_caps};
use crate::errors::AppError;

/// Inclusive target rep range for a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Bottom of the range
    pub low: u32,
    /// Top of the range
    pub high: u32,
}

impl RepRange {
    /// Create a rep range; `low` must not exceed `high`
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    const fn from_pair(pair: (u32, u32)) -> Self {
        Self::new(pair.0, pair.1)
    }

    /// Whether `reps` lies inside the range
    #[must_use]
    pub const fn contains(&self, reps: u32) -> bool {
        reps >= self.low && reps <= self.high
    }
}

/// Training goal selected by the lifter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Goal {
    /// Maximal strength
    Strength,
    /// Muscle growth
    Hypertrophy,
    /// Muscular endurance
    Endurance,
    /// General fitness
    GeneralFitness,
}

impl Goal {
    /// All goals, in one-hot feature order
    pub const ALL: [Self; 4] = [
        Self::Strength,
        Self::Hypertrophy,
        Self::Endurance,
        Self::GeneralFitness,
    ];

    /// The fixed target rep range for this goal
    #[must_use]
    pub const fn rep_range(self) -> RepRange {
        match self {
            Self::Strength => RepRange::from_pair(rep_ranges::STRENGTH),
            Self::Hypertrophy => RepRange::from_pair(rep_ranges::HYPERTROPHY),
            Self::Endurance => RepRange::from_pair(rep_ranges::ENDURANCE),
            Self::GeneralFitness => RepRange::from_pair(rep_ranges::GENERAL_FITNESS),
        }
    }

    /// One-hot encoding in `[strength, hypertrophy, endurance, general_fitness]` order
    #[must_use]
    pub fn one_hot(self) -> [f64; 4] {
        Self::ALL.map(|goal| if goal == self { 1.0 } else { 0.0 })
    }

    /// Wire name of the goal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "STRENGTH",
            Self::Hypertrophy => "HYPERTROPHY",
            Self::Endurance => "ENDURANCE",
            Self::GeneralFitness => "GENERAL_FITNESS",
        }
    }
}

impl FromStr for Goal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace(['-', ' '], "_").as_str() {
            "STRENGTH" => Ok(Self::Strength),
            "HYPERTROPHY" => Ok(Self::Hypertrophy),
            "ENDURANCE" => Ok(Self::Endurance),
            "GENERAL_FITNESS" => Ok(Self::GeneralFitness),
            _ => Err(AppError::invalid_input(format!(
                "Unknown goal: '{s}'. Valid options: strength, hypertrophy, endurance, general_fitness"
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How aggressively load should progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoachingStyle {
    /// Small, steady jumps
    Conservative,
    /// Default progression
    #[default]
    Balanced,
    /// Larger jumps when the lifter clearly outperforms the target
    Aggressive,
}

impl CoachingStyle {
    /// All styles, in one-hot feature order
    pub const ALL: [Self; 3] = [Self::Conservative, Self::Balanced, Self::Aggressive];

    /// Scale applied to regression predictions through `0.95 + 0.05 * factor`
    #[must_use]
    pub const fn style_factor(self) -> f64 {
        match self {
            Self::Conservative => style_factors::CONSERVATIVE,
            Self::Balanced => style_factors::BALANCED,
            Self::Aggressive => style_factors::AGGRESSIVE,
        }
    }

    /// One-hot encoding in `[conservative, balanced, aggressive]` order
    #[must_use]
    pub fn one_hot(self) -> [f64; 3] {
        Self::ALL.map(|style| if style == self { 1.0 } else { 0.0 })
    }

    /// Wire name of the style
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Conservative => "CONSERVATIVE",
            Self::Balanced => "BALANCED",
            Self::Aggressive => "AGGRESSIVE",
        }
    }
}

impl FromStr for CoachingStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CONSERVATIVE" => Ok(Self::Conservative),
            "BALANCED" => Ok(Self::Balanced),
            "AGGRESSIVE" => Ok(Self::Aggressive),
            _ => Err(AppError::invalid_input(format!(
                "Unknown coaching style: '{s}'. Valid options: conservative, balanced, aggressive"
            ))),
        }
    }
}

impl fmt::Display for CoachingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joint involvement of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    /// Multi-joint lift (squat, bench, row)
    Compound,
    /// Single-joint lift (curl, lateral raise)
    Isolation,
}

impl MovementType {
    /// Wire name of the movement type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compound => "COMPOUND",
            Self::Isolation => "ISOLATION",
        }
    }
}

impl FromStr for MovementType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "COMPOUND" => Ok(Self::Compound),
            "ISOLATION" => Ok(Self::Isolation),
            _ => Err(AppError::invalid_input(format!(
                "Unknown movement type: '{s}'. Valid options: compound, isolation"
            ))),
        }
    }
}

impl fmt::Display for MovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Absolute per-session change caps for one unit system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightCaps {
    /// Smaller cap, applied to isolation movements
    pub upper: f64,
    /// Larger cap, applied to compound movements
    pub lower: f64,
}

impl WeightCaps {
    /// Cap for a movement type: compound lifts get `lower`, isolation lifts get `upper`
    #[must_use]
    pub const fn cap_for(&self, movement: MovementType) -> f64 {
        match movement {
            MovementType::Compound => self.lower,
            MovementType::Isolation => self.upper,
        }
    }
}

/// Weight unit system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Units {
    /// Pounds
    Lb,
    /// Kilograms
    Kg,
}

impl Units {
    /// Smallest practical plate increment
    #[must_use]
    pub const fn rounding_increment(self) -> f64 {
        match self {
            Self::Lb => rounding::LB_INCREMENT,
            Self::Kg => rounding::KG_INCREMENT,
        }
    }

    /// Safety caps for this unit system
    #[must_use]
    pub const fn weight_caps(self) -> WeightCaps {
        match self {
            Self::Lb => WeightCaps {
                upper: weight_caps::LB_UPPER,
                lower: weight_caps::LB_LOWER,
            },
            Self::Kg => WeightCaps {
                upper: weight_caps::KG_UPPER,
                lower: weight_caps::KG_LOWER,
            },
        }
    }

    /// Safety cap for a movement type in this unit system
    #[must_use]
    pub const fn cap_for(self, movement: MovementType) -> f64 {
        self.weight_caps().cap_for(movement)
    }

    /// Wire name of the unit system
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lb => "LB",
            Self::Kg => "KG",
        }
    }
}

impl FromStr for Units {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" | "pounds" => Ok(Self::Lb),
            "kg" | "kgs" | "kilograms" => Ok(Self::Kg),
            _ => Err(AppError::invalid_input(format!(
                "Unknown units: '{s}'. Valid options: lb, kg"
            ))),
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
