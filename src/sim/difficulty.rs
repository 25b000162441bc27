//! Difficulty presets
//!
//! Pure lookup from a difficulty key to ball speed and brick grid shape.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Selectable difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// Physics and grid parameters for one difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPreset {
    /// Per-axis ball speed (ball starts moving at (+speed, -speed))
    pub ball_speed: u8,
    pub row_count: usize,
    pub column_count: usize,
    /// Brick strengths, cycled by row index
    pub strength_pattern: &'static [u8],
}

const EASY: DifficultyPreset = DifficultyPreset {
    ball_speed: 3,
    row_count: 3,
    column_count: 7,
    strength_pattern: &[1],
};

const MEDIUM: DifficultyPreset = DifficultyPreset {
    ball_speed: 2,
    row_count: 5,
    column_count: 8,
    strength_pattern: &[1, 2],
};

const HARD: DifficultyPreset = DifficultyPreset {
    ball_speed: 5,
    row_count: 6,
    column_count: 10,
    strength_pattern: &[1, 2, 3],
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn preset(&self) -> &'static DifficultyPreset {
        match self {
            Difficulty::Easy => &EASY,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(GameError::InvalidConfiguration(other.to_string())),
        }
    }
}
