//! Game settings and preferences
//!
//! Loaded from a JSON file by the native driver. Missing fields fall back to
//! their defaults so older files keep working.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{FRAME_INTERVAL_MS, ROUND_END_DELAY_MS};
use crate::error::GameError;
use crate::sim::Difficulty;

/// Arena background theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Neon,
}

impl Theme {
    /// Class name the presentation layer applies to the arena
    pub fn class_name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Neon => "neon",
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Difficulty the demo driver starts with
    pub difficulty: Difficulty,
    pub theme: Theme,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,

    // === Timing ===
    /// Delay before the end-of-round message appears
    pub round_end_delay_ms: f64,
    /// Synthetic frame interval for the headless driver
    pub frame_interval_ms: f64,

    // === Demo ===
    pub demo_seed: u64,
    pub demo_max_frames: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            theme: Theme::Light,

            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            muted: false,

            round_end_delay_ms: ROUND_END_DELAY_MS,
            frame_interval_ms: FRAME_INTERVAL_MS,

            demo_seed: 12345,
            demo_max_frames: 60 * 60 * 5,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Like `load_from`, but logs and falls back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({})", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Master volume with mute applied, clamped to 0..=1
    pub fn effective_master(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0)
        }
    }
}
