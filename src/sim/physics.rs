//! Per-frame ball and paddle physics
//!
//! One call to `advance` is one frame. There is no variable timestep and no
//! sub-frame sweep: the ball moves by its full velocity every tick.

use serde::{Deserialize, Serialize};

use super::grid::{BrickGrid, BrickRef, GridLayout};
use super::state::{Ball, Paddle};
use crate::consts::*;

/// Everything the physics step reads and writes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Playfield {
    pub ball: Ball,
    pub paddle: Paddle,
    pub grid: BrickGrid,
    pub score: u32,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundSignal {
    Won,
    Lost,
}

/// A brick took a hit this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickHit {
    pub at: BrickRef,
    pub remaining_hits: u8,
}

/// Result of one physics step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub hit: Option<BrickHit>,
    pub signal: Option<RoundSignal>,
}

/// Advance the playfield by one frame
///
/// Order matters and matches the classic loop: brick collision, wall
/// reflection, floor/paddle check (which may end the round before the ball
/// moves), movement, paddle input, win check.
pub fn advance(field: &mut Playfield) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    // Bricks are laid out every frame, before they are tested
    field.grid.layout(&GridLayout::default());

    let ball = &mut field.ball;

    // 1. Brick collision (center point only)
    if let Some(at) = field.grid.hit_test(ball.pos, ball.radius) {
        ball.vel.y = -ball.vel.y;
        if let Some(remaining_hits) = field.grid.apply_hit(at) {
            field.score += 1;
            outcome.hit = Some(BrickHit { at, remaining_hits });
        }
    }

    // 2. Side walls: flip before moving, never clamp
    let next_x = ball.pos.x + ball.vel.x;
    if next_x > ARENA_WIDTH - ball.radius || next_x < ball.radius {
        ball.vel.x = -ball.vel.x;
    }

    // 3. Ceiling, then floor/paddle
    let next_y = ball.pos.y + ball.vel.y;
    if next_y < ball.radius {
        ball.vel.y = -ball.vel.y;
    } else if next_y > ARENA_HEIGHT - ball.radius {
        if field.paddle.covers(ball.pos.x) {
            ball.vel.y = -ball.vel.y;
        } else {
            // Ball stays where it was so the final frame shows the miss
            outcome.signal = Some(RoundSignal::Lost);
            return outcome;
        }
    }

    // 4. Move
    ball.pos += ball.vel;

    // 5. Paddle input
    field.paddle.step();

    // 6. Win check
    if field.grid.is_cleared() {
        outcome.signal = Some(RoundSignal::Won);
    }

    outcome
}
