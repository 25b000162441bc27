//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Stable iteration order (column-major bricks)
//! - No rendering, audio or platform dependencies

pub mod difficulty;
pub mod game;
pub mod grid;
pub mod physics;
pub mod schedule;
pub mod snapshot;
pub mod state;

pub use difficulty::{Difficulty, DifficultyPreset};
pub use game::GameState;
pub use grid::{Brick, BrickGrid, BrickRef, GridLayout};
pub use physics::{BrickHit, Playfield, RoundSignal, StepOutcome, advance};
pub use schedule::{RoundEnd, Scheduler};
pub use snapshot::{BallView, BrickTier, BrickView, RectView, Snapshot};
pub use state::{Ball, GameEvent, GamePhase, HorizontalIntent, Key, Paddle, PaddleControl};
