//! Brickfall - A single-screen ball-and-paddle brick breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, brick grid, game state machine)
//! - `audio`: Game event to sound cue mapping
//! - `settings`: Player preferences and timing
//! - `autopilot`: Seeded demo controller for the headless driver

pub mod audio;
pub mod autopilot;
pub mod error;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use settings::{Settings, Theme};

/// Game configuration constants
///
/// Physics and layout both read these; they must never diverge.
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1240.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 12.0;
    /// Ball spawn height above the arena floor
    pub const BALL_START_OFFSET_Y: f32 = 40.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    /// Paddle movement per tick while a direction is held
    pub const PADDLE_STEP: f32 = 10.0;

    /// Brick geometry
    pub const BRICK_WIDTH: f32 = 100.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_PADDING: f32 = 15.0;
    pub const BRICK_OFFSET_TOP: f32 = 50.0;
    pub const BRICK_OFFSET_LEFT: f32 = 50.0;

    /// Delay between round end detection and the end-of-round message
    pub const ROUND_END_DELAY_MS: f64 = 100.0;
    /// Nominal frame interval (60 Hz)
    pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;
}
