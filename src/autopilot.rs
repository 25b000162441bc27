//! Demo autopilot
//!
//! Steers the paddle toward the ball for the headless driver. A seeded RNG
//! adds the occasional hesitation so runs are not perfect but stay
//! reproducible for a given seed.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{HorizontalIntent, Snapshot};

/// Chance per frame of holding still instead of tracking
const HESITATION_CHANCE: f64 = 0.15;
/// Paddle center counts as "under the ball" within this distance
const DEAD_ZONE: f32 = 8.0;

pub struct Autopilot {
    rng: Pcg32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Intent for the next tick
    pub fn intent(&mut self, snapshot: &Snapshot) -> HorizontalIntent {
        if self.rng.random_bool(HESITATION_CHANCE) {
            return HorizontalIntent::None;
        }

        let paddle_center = snapshot.paddle.x + snapshot.paddle.width / 2.0;
        let offset = snapshot.ball.x - paddle_center;
        if offset > DEAD_ZONE {
            HorizontalIntent::Right
        } else if offset < -DEAD_ZONE {
            HorizontalIntent::Left
        } else {
            HorizontalIntent::None
        }
    }
}
