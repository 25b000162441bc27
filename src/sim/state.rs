//! Core simulation types
//!
//! Ball, paddle, input intent, phases and events. Everything here is owned
//! by `GameState` and only mutated inside a tick or an input setter.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Difficulty selection, nothing moving
    #[default]
    Menu,
    /// Active round
    Playing,
    /// Every brick cleared
    Won,
    /// Ball fell past the paddle
    Lost,
}

impl GamePhase {
    /// Won or Lost
    pub fn is_round_over(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT - BALL_START_OFFSET_Y),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Ball at its start position moving up and to the right at `speed` per axis
    pub fn spawn(speed: f32) -> Self {
        Self {
            vel: Vec2::new(speed, -speed),
            ..Self::default()
        }
    }
}

/// Which way the player wants the paddle to go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HorizontalIntent {
    Left,
    Right,
    #[default]
    None,
}

/// Keys the input layer forwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM-style key name ("ArrowLeft", "Left", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Right" | "ArrowRight" => Some(Key::Right),
            "Left" | "ArrowLeft" => Some(Key::Left),
            _ => None,
        }
    }
}

/// Held direction flags (both can be held at once)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaddleControl {
    pub right: bool,
    pub left: bool,
}

impl PaddleControl {
    pub fn set_intent(&mut self, intent: HorizontalIntent) {
        self.right = intent == HorizontalIntent::Right;
        self.left = intent == HorizontalIntent::Left;
    }

    pub fn set_key(&mut self, key: Key, held: bool) {
        match key {
            Key::Right => self.right = held,
            Key::Left => self.left = held,
        }
    }
}

/// The player's paddle (pinned to the arena floor)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub control: PaddleControl,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (ARENA_WIDTH - PADDLE_WIDTH) / 2.0,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            control: PaddleControl::default(),
        }
    }
}

impl Paddle {
    /// Top edge (the paddle never leaves the floor)
    pub fn y(&self) -> f32 {
        ARENA_HEIGHT - self.height
    }

    pub fn max_x(&self) -> f32 {
        ARENA_WIDTH - self.width
    }

    /// Whether `x` lies over the paddle (edges included)
    pub fn covers(&self, x: f32) -> bool {
        x >= self.x && x <= self.x + self.width
    }

    /// One keyboard step, kept inside the arena
    ///
    /// Right is tried first; a held left only applies when the right move
    /// did not (not held, or already at the wall).
    pub fn step(&mut self) {
        if self.control.right && self.x + self.width < ARENA_WIDTH {
            self.x = (self.x + PADDLE_STEP).min(self.max_x());
        } else if self.control.left && self.x > 0.0 {
            self.x = (self.x - PADDLE_STEP).max(0.0);
        }
    }

    /// Center the paddle on a pointer x (arena-relative)
    ///
    /// Pointer positions outside the arena are ignored.
    pub fn follow_pointer(&mut self, relative_x: f32) -> bool {
        if relative_x > 0.0 && relative_x < ARENA_WIDTH {
            self.x = (relative_x - self.width / 2.0).clamp(0.0, self.max_x());
            true
        } else {
            false
        }
    }
}

/// Something that happened during a tick or transition
///
/// Consumed by the audio layer and the frame driver's logging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { round: u32, difficulty: Difficulty },
    BrickBroken { column: usize, row: usize, remaining_hits: u8 },
    RoundWon { round: u32 },
    RoundLost { round: u32 },
    /// The delayed end-of-round message is now visible
    RoundEndShown { round: u32, message: String },
    ReturnedToMenu,
}
